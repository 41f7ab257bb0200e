//! メディアタイプ (RFC 7231 Section 3.1.1.1)
//!
//! ## 概要
//!
//! Content-Type ヘッダーの値や、サーバーが提供可能な表現を表すメディアタイプを扱います。
//!
//! ```text
//! media-type = type "/" subtype *( OWS ";" OWS parameter )
//! type       = token
//! subtype    = token
//! parameter  = token "=" ( token / quoted-string )
//! ```
//!
//! type / subtype / パラメータ名 / パラメータ値はすべて小文字に正規化されます。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_contenttype::media_type::MediaType;
//!
//! let mt = MediaType::parse("Application/XML; charset=utf-8").unwrap();
//! assert_eq!(mt.media_type(), "application");
//! assert_eq!(mt.subtype(), "xml");
//! assert_eq!(mt.parameter("charset"), Some("utf-8"));
//! assert_eq!(mt.to_string(), "application/xml;charset=utf-8");
//!
//! // 不正な値は空の MediaType になる
//! assert!(MediaType::parse_or_empty("application").is_empty());
//! ```

use core::fmt;
use core::str::FromStr;

use crate::character::{is_quoted_pair_char, is_token_char};
use crate::error::Error;
use crate::scanner::{consume_quoted_string, consume_token, skip_char, skip_whitespace};

/// ワイルドカード
const WILDCARD: &str = "*";

/// メディアタイプのパラメータ
///
/// キーは一意で、挿入順を保持する。
/// 比較は順序に依存しない (同じキーと値の組を持つかどうか)。
#[derive(Debug, Clone, Default, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
}

impl Parameters {
    /// 空のパラメータを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// パラメータを追加
    ///
    /// キーと値は ASCII 小文字に正規化する。
    /// 同じキーが既にある場合は値を置き換え、以前の値を返す。
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let mut key = key.into();
        let mut value = value.into();
        key.make_ascii_lowercase();
        value.make_ascii_lowercase();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(core::mem::replace(v, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// パラメータを取得
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// キーが存在するか
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// パラメータ数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// パラメータがないかどうか
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 挿入順で (キー, 値) を列挙
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// すべてのキーが `other` に同じ値で存在するか
    pub(crate) fn is_subset_of(&self, other: &Parameters) -> bool {
        self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl PartialEq for Parameters {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset_of(other)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut parameters = Parameters::new();
        for (k, v) in iter {
            parameters.insert(k, v);
        }
        parameters
    }
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            if is_token(value) {
                write!(f, ";{}={}", key, value)?;
            } else {
                write!(f, ";{}=\"{}\"", key, escape_quotes(value))?;
            }
        }
        Ok(())
    }
}

/// メディアタイプ
///
/// `MediaType::default()` は「未設定」を表し、パース結果とは区別できる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaType {
    media_type: String,
    subtype: String,
    parameters: Parameters,
}

impl MediaType {
    /// メディアタイプ文字列をパース
    ///
    /// # 例
    ///
    /// ```rust
    /// use shiguredo_contenttype::{Error, media_type::MediaType};
    ///
    /// let mt = MediaType::parse("a/b+c;a=b;c=d").unwrap();
    /// assert_eq!(mt.subtype(), "b+c");
    /// assert_eq!(mt.parameters().len(), 2);
    ///
    /// assert_eq!(
    ///     MediaType::parse("Application/JSON/test"),
    ///     Err(Error::InvalidMediaType)
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        let (media_type, subtype, mut rest) =
            consume_type(input).ok_or(Error::InvalidMediaType)?;

        let mut parameters = Parameters::new();
        loop {
            let (after_semicolon, found) = skip_char(rest, b';');
            if !found {
                break;
            }
            let (key, value, remaining) =
                consume_parameter(after_semicolon).ok_or(Error::InvalidParameter)?;
            parameters.insert(key, value);
            rest = remaining;
        }

        // パラメータ列の後ろに何か残っていたら不正
        if !rest.is_empty() {
            return Err(Error::InvalidMediaType);
        }

        Ok(MediaType {
            media_type,
            subtype,
            parameters,
        })
    }

    /// メディアタイプ文字列をパースし、失敗した場合は空の MediaType を返す
    pub fn parse_or_empty(input: &str) -> Self {
        Self::parse(input).unwrap_or_default()
    }

    /// 新しい MediaType を作成
    pub fn new(media_type: &str, subtype: &str) -> Self {
        MediaType {
            media_type: media_type.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
            parameters: Parameters::new(),
        }
    }

    /// パラメータを追加 (ビルダーパターン)
    ///
    /// 名前と値は小文字に正規化される。名前が token でない場合や、
    /// 値に quoted-string で表せないバイト (制御文字) が含まれる場合は
    /// `InvalidParameter` を返す。
    ///
    /// ```rust
    /// use shiguredo_contenttype::{Error, media_type::MediaType};
    ///
    /// let mt = MediaType::new("text", "html").with_parameter("Charset", "UTF-8").unwrap();
    /// assert_eq!(mt.parameter("charset"), Some("utf-8"));
    ///
    /// assert_eq!(
    ///     MediaType::new("a", "b").with_parameter("c", "x\u{7f}"),
    ///     Err(Error::InvalidParameter)
    /// );
    /// ```
    pub fn with_parameter(mut self, name: &str, value: &str) -> Result<Self, Error> {
        check_parameter(name, value)?;
        self.parameters.insert(name, value);
        Ok(self)
    }

    /// パラメータをまとめて設定 (ビルダーパターン)
    ///
    /// 各パラメータの制約は `with_parameter` と同じ。
    pub fn with_parameters(mut self, parameters: Parameters) -> Result<Self, Error> {
        for (name, value) in parameters.iter() {
            check_parameter(name, value)?;
        }
        self.parameters = parameters;
        Ok(self)
    }

    /// タイプを取得 (例: "text")
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// サブタイプを取得 (例: "html")
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// パラメータを取得
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(&name.to_ascii_lowercase())
    }

    /// すべてのパラメータを取得
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// パラメータなしのメディアタイプ (例: "text/html")
    ///
    /// 未設定の場合は空文字列。
    pub fn mime(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("{}/{}", self.media_type, self.subtype)
    }

    /// 未設定かどうか
    pub fn is_empty(&self) -> bool {
        self.media_type.is_empty() && self.subtype.is_empty()
    }

    /// type と subtype のどちらかがワイルドカードかどうか
    pub fn is_wildcard(&self) -> bool {
        self.media_type == WILDCARD || self.subtype == WILDCARD
    }

    /// type と subtype が一致するか (パラメータは無視)
    pub fn equals_mime(&self, other: &MediaType) -> bool {
        self.media_type == other.media_type && self.subtype == other.subtype
    }

    /// ワイルドカードを考慮して type と subtype が一致するか
    ///
    /// どちら側の `*` も任意の値に一致する。
    pub fn matches(&self, other: &MediaType) -> bool {
        (self.media_type == WILDCARD
            || other.media_type == WILDCARD
            || self.media_type == other.media_type)
            && (self.subtype == WILDCARD
                || other.subtype == WILDCARD
                || self.subtype == other.subtype)
    }

    /// いずれかのメディアタイプに一致するか
    pub fn matches_any(&self, others: &[MediaType]) -> bool {
        others.iter().any(|other| self.matches(other))
    }

    pub(crate) fn from_parts(media_type: String, subtype: String, parameters: Parameters) -> Self {
        MediaType {
            media_type,
            subtype,
            parameters,
        }
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}/{}{}", self.media_type, self.subtype, self.parameters)
    }
}

/// type "/" subtype を読む
///
/// `*/subtype` は不正。前後の OWS は読み飛ばす。
pub(crate) fn consume_type(input: &str) -> Option<(String, String, &str)> {
    let rest = skip_whitespace(input);
    let (media_type, rest) = consume_token(rest)?;

    let (rest, slash) = skip_char(rest, b'/');
    if !slash {
        return None;
    }

    let (subtype, rest) = consume_token(rest)?;
    if media_type == WILDCARD && subtype != WILDCARD {
        return None;
    }

    Some((media_type, subtype, skip_whitespace(rest)))
}

/// parameter (token "=" ( token / quoted-string )) を読む
///
/// 前後の OWS は読み飛ばす。
pub(crate) fn consume_parameter(input: &str) -> Option<(String, String, &str)> {
    let rest = skip_whitespace(input);
    let (key, rest) = consume_token(rest)?;

    let (rest, equal) = skip_char(rest, b'=');
    if !equal {
        return None;
    }

    let (rest, quoted) = skip_char(rest, b'"');
    let (value, rest) = if quoted {
        let (value, rest) = consume_quoted_string(rest)?;
        let (rest, closed) = skip_char(rest, b'"');
        if !closed {
            return None;
        }
        (value, rest)
    } else {
        consume_token(rest)?
    };

    Some((key, value, skip_whitespace(rest)))
}

/// 名前が token で、値が token か quoted-string で表せるか
fn check_parameter(name: &str, value: &str) -> Result<(), Error> {
    if !is_token(name) || !value.bytes().all(is_quoted_pair_char) {
        return Err(Error::InvalidParameter);
    }
    Ok(())
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_token_char)
}

fn escape_quotes(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
