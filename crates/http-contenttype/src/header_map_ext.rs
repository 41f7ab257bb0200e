//! HeaderMap 拡張トレイト
//!
//! http::HeaderMap から Content-Type / Accept / Content-Language を取り出してパースする。
//! 同じヘッダーが複数ある場合は最初の値だけを使う。

use http::HeaderMap;
use http::header::{ACCEPT, CONTENT_LANGUAGE, CONTENT_TYPE, HeaderName};
use shiguredo_contenttype::{Language, MediaType, Parameters, acceptable_media_type};

use crate::error::{Error, Result};

/// HeaderMap 拡張トレイト
///
/// ヘッダー値は UTF-8 として解釈する。UTF-8 の obs-text (例: `caf\u{e9}`) は通るが、
/// Latin-1 などの生の obs-text バイト (例: 単独の 0xE9) は quoted-string 内で
/// 文法上は正しくても `Error::NonUtf8Header` になる。
pub trait HeaderMapExt {
    /// Content-Type ヘッダーをパース (ヘッダーがなければ空の MediaType)
    fn media_type(&self) -> Result<MediaType>;

    /// Accept ヘッダーから提供可能なメディアタイプを選ぶ (ヘッダーがなければ先頭)
    fn acceptable_media_type(&self, available: &[MediaType]) -> Result<(MediaType, Parameters)>;

    /// Content-Language ヘッダーをパース (ヘッダーがなければ空の Language)
    fn language(&self) -> Result<Language>;
}

impl HeaderMapExt for HeaderMap {
    fn media_type(&self) -> Result<MediaType> {
        let value = first_value(self, CONTENT_TYPE)?;
        if value.is_empty() {
            return Ok(MediaType::default());
        }
        Ok(MediaType::parse(value)?)
    }

    fn acceptable_media_type(&self, available: &[MediaType]) -> Result<(MediaType, Parameters)> {
        let value = first_value(self, ACCEPT)?;
        Ok(acceptable_media_type(value, available)?)
    }

    fn language(&self) -> Result<Language> {
        let value = first_value(self, CONTENT_LANGUAGE)?;
        if value.is_empty() {
            return Ok(Language::default());
        }
        Ok(Language::parse(value)?)
    }
}

/// 最初のヘッダー値を取得 (ヘッダーがなければ空文字列)
///
/// obs-text を通すため `HeaderValue::to_str` ではなく UTF-8 として解釈する。
fn first_value(headers: &HeaderMap, name: HeaderName) -> Result<&str> {
    match headers.get(&name) {
        Some(value) => std::str::from_utf8(value.as_bytes()).map_err(|_| Error::NonUtf8Header(name)),
        None => Ok(""),
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    #[test]
    fn media_type_absent() {
        let headers = HeaderMap::new();
        assert_eq!(headers.media_type(), Ok(MediaType::default()));
    }

    #[test]
    fn media_type_first_value() {
        let mut headers = HeaderMap::new();
        headers.append(CONTENT_TYPE, HeaderValue::from_static("Application/JSON"));
        headers.append(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert_eq!(headers.media_type(), Ok(MediaType::new("application", "json")));
    }

    #[test]
    fn media_type_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json/test"));
        assert_eq!(
            headers.media_type(),
            Err(Error::ContentType(shiguredo_contenttype::Error::InvalidMediaType))
        );
    }

    #[test]
    fn media_type_obsolete_text() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_bytes("text/plain; title=\"caf\u{e9}\"".as_bytes()).unwrap(),
        );
        assert_eq!(
            headers.media_type().unwrap().parameter("title"),
            Some("caf\u{e9}")
        );
    }

    #[test]
    fn non_utf8_header() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_bytes(b"a/b;c=\"\xff\"").unwrap());
        assert_eq!(headers.media_type(), Err(Error::NonUtf8Header(CONTENT_TYPE)));

        // Latin-1 の obs-text も UTF-8 でなければ受け付けない
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_bytes(b"a/b;c=\"caf\xe9\"").unwrap());
        assert_eq!(
            headers.acceptable_media_type(&[MediaType::new("a", "b")]),
            Err(Error::NonUtf8Header(ACCEPT))
        );
        headers.insert(CONTENT_LANGUAGE, HeaderValue::from_bytes(b"en\xe9").unwrap());
        assert_eq!(headers.language(), Err(Error::NonUtf8Header(CONTENT_LANGUAGE)));
    }

    #[test]
    fn acceptable_media_type_negotiates() {
        let available = [MediaType::new("a", "b"), MediaType::new("a", "c")];

        let headers = HeaderMap::new();
        let (selected, _) = headers.acceptable_media_type(&available).unwrap();
        assert_eq!(selected, available[0]);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("a/*;q=0.2,a/c"));
        let (selected, _) = headers.acceptable_media_type(&available).unwrap();
        assert_eq!(selected, available[1]);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("x/y"));
        assert_eq!(
            headers.acceptable_media_type(&available),
            Err(Error::ContentType(
                shiguredo_contenttype::Error::NoAcceptableTypeFound
            ))
        );
    }

    #[test]
    fn language() {
        let mut headers = HeaderMap::new();
        assert_eq!(headers.language(), Ok(Language::default()));
        headers.insert(CONTENT_LANGUAGE, HeaderValue::from_static("en-US"));
        assert_eq!(headers.language().unwrap().region(), "us");
    }
}
