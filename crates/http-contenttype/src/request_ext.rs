//! Request 拡張トレイト
//!
//! http::Request<B> のヘッダーに対して HeaderMapExt と同じ操作を提供する。

use http::Request;
use shiguredo_contenttype::{Language, MediaType, Parameters};

use crate::error::Result;
use crate::header_map_ext::HeaderMapExt;

/// Request 拡張トレイト
pub trait RequestExt {
    /// Content-Type ヘッダーをパース (ヘッダーがなければ空の MediaType)
    fn media_type(&self) -> Result<MediaType>;

    /// Accept ヘッダーから提供可能なメディアタイプを選ぶ (ヘッダーがなければ先頭)
    fn acceptable_media_type(&self, available: &[MediaType]) -> Result<(MediaType, Parameters)>;

    /// Content-Language ヘッダーをパース (ヘッダーがなければ空の Language)
    fn language(&self) -> Result<Language>;
}

impl<B> RequestExt for Request<B> {
    fn media_type(&self) -> Result<MediaType> {
        self.headers().media_type()
    }

    fn acceptable_media_type(&self, available: &[MediaType]) -> Result<(MediaType, Parameters)> {
        self.headers().acceptable_media_type(available)
    }

    fn language(&self) -> Result<Language> {
        self.headers().language()
    }
}
