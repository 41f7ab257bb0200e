use std::fmt;

/// メディアタイプ / 言語タグのパースおよびネゴシエーションのエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// type "/" subtype の形式が不正、またはパラメータ列の後ろに余計な文字がある
    InvalidMediaType,
    /// Accept ヘッダーのメディアレンジの並びが不正
    InvalidMediaRange,
    /// パラメータ (key=value) の形式が不正
    InvalidParameter,
    /// 拡張パラメータの形式が不正
    InvalidExtensionParameter,
    /// q 値の形式が不正
    InvalidWeight,
    /// 受理可能なメディアタイプがない
    NoAcceptableTypeFound,
    /// 提供可能なメディアタイプが 1 つも渡されていない
    NoAvailableTypeGiven,
    /// 言語タグが不正
    InvalidLanguage,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMediaType => write!(f, "invalid media type"),
            Error::InvalidMediaRange => write!(f, "invalid media range"),
            Error::InvalidParameter => write!(f, "invalid parameter"),
            Error::InvalidExtensionParameter => write!(f, "invalid extension parameter"),
            Error::InvalidWeight => write!(f, "invalid weight"),
            Error::NoAcceptableTypeFound => write!(f, "no acceptable type found"),
            Error::NoAvailableTypeGiven => write!(f, "no available type given"),
            Error::InvalidLanguage => write!(f, "invalid language"),
        }
    }
}

impl std::error::Error for Error {}
