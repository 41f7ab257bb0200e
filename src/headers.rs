//! リクエストヘッダーからの取り出し
//!
//! ## 概要
//!
//! HTTP ライブラリのリクエスト型から Content-Type / Accept / Content-Language の
//! 値を取り出してパースします。
//!
//! - ヘッダー名は大文字小文字を区別しない
//! - 同じヘッダーが複数ある場合は最初の値だけを使う
//! - ヘッダーがない、または値が空の場合は「指定なし」として扱う
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_contenttype::headers;
//! use shiguredo_contenttype::media_type::MediaType;
//!
//! let headers = vec![
//!     ("content-type".to_string(), "application/json".to_string()),
//!     ("Accept".to_string(), "text/*;q=0.5, application/xml".to_string()),
//! ];
//!
//! let mt = headers::media_type(&headers).unwrap();
//! assert_eq!(mt.mime(), "application/json");
//!
//! let available = [MediaType::new("text", "plain"), MediaType::new("application", "xml")];
//! let (selected, _) = headers::acceptable_media_type(&headers, &available).unwrap();
//! assert_eq!(selected.mime(), "application/xml");
//! ```

use crate::error::Error;
use crate::language::Language;
use crate::media_type::{MediaType, Parameters};
use crate::negotiation;

/// Content-Type ヘッダー名
pub const CONTENT_TYPE: &str = "Content-Type";
/// Accept ヘッダー名
pub const ACCEPT: &str = "Accept";
/// Content-Language ヘッダー名
pub const CONTENT_LANGUAGE: &str = "Content-Language";

/// ヘッダーの取り出し
pub trait HeaderLookup {
    /// 指定した名前の最初のヘッダー値を取得 (大文字小文字を区別しない)
    fn first_header(&self, name: &str) -> Option<&str>;
}

impl HeaderLookup for [(String, String)] {
    fn first_header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl HeaderLookup for Vec<(String, String)> {
    fn first_header(&self, name: &str) -> Option<&str> {
        self.as_slice().first_header(name)
    }
}

impl HeaderLookup for [(&str, &str)] {
    fn first_header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }
}

impl<T: HeaderLookup + ?Sized> HeaderLookup for &T {
    fn first_header(&self, name: &str) -> Option<&str> {
        (**self).first_header(name)
    }
}

/// Content-Type ヘッダーをパース
///
/// ヘッダーがない場合は空の MediaType を返す。
pub fn media_type<H: HeaderLookup + ?Sized>(headers: &H) -> Result<MediaType, Error> {
    match headers.first_header(CONTENT_TYPE) {
        Some(value) if !value.is_empty() => MediaType::parse(value),
        _ => Ok(MediaType::default()),
    }
}

/// Accept ヘッダーから、提供可能なメディアタイプのうち最も適したものを選ぶ
///
/// ヘッダーがない場合は `available` の先頭を返す。
pub fn acceptable_media_type<H: HeaderLookup + ?Sized>(
    headers: &H,
    available: &[MediaType],
) -> Result<(MediaType, Parameters), Error> {
    let accept = headers.first_header(ACCEPT).unwrap_or_default();
    negotiation::acceptable_media_type(accept, available)
}

/// Content-Language ヘッダーをパース
///
/// ヘッダーがない場合は空の Language を返す。
pub fn language<H: HeaderLookup + ?Sized>(headers: &H) -> Result<Language, Error> {
    match headers.first_header(CONTENT_LANGUAGE) {
        Some(value) if !value.is_empty() => Language::parse(value),
        _ => Ok(Language::default()),
    }
}
