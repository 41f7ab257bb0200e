//! 言語レンジ (RFC 4647 Section 2.1, RFC 5646 Section 2.1)
//!
//! ## 概要
//!
//! 言語タグのうち、主言語 / 文字体系 / 地域 / バリアント 1 つだけを扱う簡易パーサーです。
//!
//! ```text
//! language-range = language [ "-" script ] [ "-" region ] [ "-" variant ]
//! language       = 2*3ALPHA            ; ISO 639-1 / ISO 639-2
//! script         = 4ALPHA              ; ISO 15924
//! region         = 2ALPHA / 3DIGIT     ; ISO 3166-1 / UN M.49
//! variant        = 1*8alphanum
//! ```
//!
//! 拡張サブタグや私用サブタグは扱いません。出力はすべて小文字です。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_contenttype::language::Language;
//!
//! let lang = Language::parse("lv-Latn-LV").unwrap();
//! assert_eq!(lang.language(), "lv");
//! assert_eq!(lang.script(), "latn");
//! assert_eq!(lang.region(), "lv");
//!
//! let lang = Language::parse("de-CH-1901").unwrap();
//! assert_eq!(lang.variant(), "1901");
//! assert_eq!(lang.to_string(), "de-ch-1901");
//! ```

mod codes;

use core::fmt;
use core::str::FromStr;

use crate::character::{is_alpha, is_digit};
use crate::error::Error;
use crate::scanner::{skip_char, skip_whitespace};

/// サブタグの最大長 (RFC 5646)
const MAX_SUBTAG_LEN: usize = 8;

/// 言語レンジ
///
/// 存在しないフィールドは空文字列。`Language::default()` は「未設定」を表す。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Language {
    language: String,
    script: String,
    region: String,
    variant: String,
}

/// 次に現れてよいサブタグの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Position {
    Script,
    Region,
    Variant,
    End,
}

impl Language {
    /// 言語レンジをパース
    pub fn parse(input: &str) -> Result<Self, Error> {
        let rest = skip_whitespace(input);

        let (primary, mut rest) = consume_subtag(rest).ok_or(Error::InvalidLanguage)?;
        if !is_valid_primary(primary) {
            return Err(Error::InvalidLanguage);
        }

        let mut language = Language {
            language: primary.to_ascii_lowercase(),
            ..Default::default()
        };
        let mut position = Position::Script;

        loop {
            let (after_hyphen, found) = skip_char(rest, b'-');
            if !found {
                break;
            }
            let (subtag, remaining) =
                consume_subtag(after_hyphen).ok_or(Error::InvalidLanguage)?;
            let subtag = subtag.to_ascii_lowercase();
            rest = remaining;

            if position <= Position::Script && is_script_shape(&subtag) {
                if !codes::contains(codes::ISO_15924, &subtag) {
                    return Err(Error::InvalidLanguage);
                }
                language.script = subtag;
                position = Position::Region;
            } else if position <= Position::Region && is_region_shape(&subtag) {
                if !is_valid_region(&subtag) {
                    return Err(Error::InvalidLanguage);
                }
                language.region = subtag;
                position = Position::Variant;
            } else if position <= Position::Variant {
                language.variant = subtag;
                position = Position::End;
            } else {
                return Err(Error::InvalidLanguage);
            }
        }

        // 末尾の OWS 以外が残っていたら不正
        if !skip_whitespace(rest).is_empty() {
            return Err(Error::InvalidLanguage);
        }

        Ok(language)
    }

    /// 言語レンジをパースし、失敗した場合は空の Language を返す
    pub fn parse_or_empty(input: &str) -> Self {
        Self::parse(input).unwrap_or_default()
    }

    /// 主言語 (例: "en")
    pub fn language(&self) -> &str {
        &self.language
    }

    /// 文字体系 (例: "latn")
    pub fn script(&self) -> &str {
        &self.script
    }

    /// 地域 (例: "us", "419")
    pub fn region(&self) -> &str {
        &self.region
    }

    /// バリアント (例: "1901")
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// 未設定かどうか
    pub fn is_empty(&self) -> bool {
        self.language.is_empty()
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        for subtag in [&self.script, &self.region, &self.variant] {
            if !subtag.is_empty() {
                write!(f, "-{}", subtag)?;
            }
        }
        Ok(())
    }
}

/// 英数字のサブタグ (1-8 文字) を読む
fn consume_subtag(input: &str) -> Option<(&str, &str)> {
    let end = input
        .bytes()
        .position(|b| !is_alpha(b) && !is_digit(b))
        .unwrap_or(input.len());
    if end == 0 || end > MAX_SUBTAG_LEN {
        return None;
    }
    Some((&input[..end], &input[end..]))
}

fn is_valid_primary(subtag: &str) -> bool {
    if !subtag.bytes().all(is_alpha) {
        return false;
    }
    let subtag = subtag.to_ascii_lowercase();
    match subtag.len() {
        2 => codes::contains(codes::ISO_639_1, &subtag),
        3 => codes::contains(codes::ISO_639_2, &subtag),
        _ => false,
    }
}

fn is_script_shape(subtag: &str) -> bool {
    subtag.len() == 4 && subtag.bytes().all(is_alpha)
}

fn is_region_shape(subtag: &str) -> bool {
    (subtag.len() == 2 && subtag.bytes().all(is_alpha))
        || (subtag.len() == 3 && subtag.bytes().all(is_digit))
}

fn is_valid_region(subtag: &str) -> bool {
    if subtag.len() == 2 {
        codes::contains(codes::ISO_3166_ALPHA2, subtag)
    } else {
        codes::contains(codes::ISO_3166_NUMERIC, subtag)
            || codes::contains(codes::UN_M49_AREAS, subtag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(language: &str, script: &str, region: &str, variant: &str) -> Language {
        Language {
            language: language.to_string(),
            script: script.to_string(),
            region: region.to_string(),
            variant: variant.to_string(),
        }
    }

    #[test]
    fn parse_valid() {
        let cases = [
            ("lv-LV", lang("lv", "", "lv", "")),
            ("lv-Latn-LV", lang("lv", "latn", "lv", "")),
            ("en-latn-US", lang("en", "latn", "us", "")),
            ("lt", lang("lt", "", "", "")),
            ("lv-lv", lang("lv", "", "lv", "")),
            ("lv-428", lang("lv", "", "428", "")),
            ("lav", lang("lav", "", "", "")),
            ("sl-rozaj", lang("sl", "", "", "rozaj")),
            ("de-CH-1901", lang("de", "", "ch", "1901")),
            ("es-419", lang("es", "", "419", "")),
            ("zh-Hant-TW-x1", lang("zh", "hant", "tw", "x1")),
            ("sr-Latn", lang("sr", "latn", "", "")),
            ("EN", lang("en", "", "", "")),
            (" en-US ", lang("en", "", "us", "")),
        ];

        for (input, expected) in cases {
            assert_eq!(Language::parse(input), Ok(expected), "{input:?}");
        }
    }

    #[test]
    fn parse_invalid() {
        for input in [
            "",
            "e",
            "xx",
            "zzz",
            "english",
            "e1",
            "en-",
            "en--us",
            "en-Xxxx",
            "en-XX",
            "en-999",
            "en-US-latn-1901",
            "en-US-1901-x",
            "en-abcdefghi",
            "en_US",
            "en-US;q=0.5",
        ] {
            assert_eq!(Language::parse(input), Err(Error::InvalidLanguage), "{input:?}");
        }
    }

    #[test]
    fn parse_or_empty() {
        assert!(Language::parse_or_empty("").is_empty());
        assert!(Language::parse_or_empty("xx-YY").is_empty());
        assert_eq!(Language::parse_or_empty("lt").language(), "lt");
    }

    #[test]
    fn display() {
        assert_eq!(Language::parse("lv-Latn-LV").unwrap().to_string(), "lv-latn-lv");
        assert_eq!(Language::parse("sl-rozaj").unwrap().to_string(), "sl-rozaj");
        assert_eq!(Language::default().to_string(), "");
    }

    #[test]
    fn from_str() {
        let lang: Language = "fr-CA".parse().unwrap();
        assert_eq!(lang.region(), "ca");
    }
}
