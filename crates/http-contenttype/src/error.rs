//! http-contenttype エラー型

use std::fmt;

/// http-contenttype エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// ヘッダー値が UTF-8 ではない
    NonUtf8Header(http::HeaderName),
    /// パース / ネゴシエーションエラー
    ContentType(shiguredo_contenttype::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonUtf8Header(name) => write!(f, "non UTF-8 header value: {}", name),
            Error::ContentType(e) => write!(f, "content type error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ContentType(e) => Some(e),
            Error::NonUtf8Header(_) => None,
        }
    }
}

impl From<shiguredo_contenttype::Error> for Error {
    fn from(e: shiguredo_contenttype::Error) -> Self {
        Error::ContentType(e)
    }
}

/// http-contenttype の Result 型
pub type Result<T> = std::result::Result<T, Error>;
