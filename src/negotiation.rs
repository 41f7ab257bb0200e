//! Accept ヘッダーによるコンテントネゴシエーション (RFC 7231 Section 5.3.2)
//!
//! ## 概要
//!
//! Accept ヘッダーのメディアレンジと、サーバーが提供可能なメディアタイプの一覧から
//! 最も適したメディアタイプを 1 つ選びます。
//!
//! ```text
//! Accept         = #( media-range [ accept-params ] )
//! media-range    = ( "*/*" / ( type "/" "*" ) / ( type "/" subtype ) )
//!                  *( OWS ";" OWS parameter )
//! accept-params  = weight *( accept-ext )
//! accept-ext     = OWS ";" OWS token [ "=" ( token / quoted-string ) ]
//! ```
//!
//! 選択規則:
//!
//! - 提供可能なメディアタイプごとに、最も具体的に一致したメディアレンジを記録する
//!   (`*` より具体的な type / subtype、パラメータ数が多いものを優先)
//! - q 値が最も大きいものを選ぶ。同じ q 値なら Accept ヘッダー内で先に書かれたものを選ぶ
//! - q=0 は受理不可
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_contenttype::media_type::MediaType;
//! use shiguredo_contenttype::negotiation::acceptable_media_type;
//!
//! let available = [MediaType::new("a", "b"), MediaType::new("a", "c")];
//! let (selected, extension) = acceptable_media_type("a/*;q=0.2, a/c", &available).unwrap();
//! assert_eq!(selected, MediaType::new("a", "c"));
//! assert!(extension.is_empty());
//! ```

use crate::error::Error;
use crate::media_type::{MediaType, Parameters, consume_parameter, consume_type};
use crate::quality::Weight;
use crate::scanner::{skip_char, skip_whitespace};

/// 提供可能なメディアタイプ 1 つ分の一致状況
#[derive(Debug)]
struct Candidate {
    /// 一致したメディアレンジ (未一致なら空)
    best_match: MediaType,
    extension_parameters: Parameters,
    /// 未一致なら 0
    weight: Weight,
    /// Accept ヘッダー内でのメディアレンジの位置
    order: usize,
}

impl Candidate {
    fn unmatched() -> Self {
        Candidate {
            best_match: MediaType::default(),
            extension_parameters: Parameters::new(),
            weight: Weight::ZERO,
            order: 0,
        }
    }

    /// `range` が現在記録しているメディアレンジより具体的かどうか
    fn is_superseded_by(&self, range: &MediaType) -> bool {
        let current = &self.best_match;
        if current.media_type().is_empty() || current.subtype().is_empty() {
            return true;
        }

        (current.media_type() == "*" && range.media_type() != "*")
            || (current.subtype() == "*" && range.subtype() != "*")
            || current.parameters().len() < range.parameters().len()
    }
}

/// Accept ヘッダーの 1 メディアレンジ分
struct MediaRange {
    range: MediaType,
    weight: Weight,
    extension_parameters: Parameters,
}

/// Accept ヘッダーの値から、提供可能なメディアタイプのうち最も適したものを選ぶ
///
/// 選ばれた提供可能なメディアタイプと、一致したメディアレンジの拡張パラメータ
/// (q パラメータより後ろのパラメータ) を返す。
///
/// `accept` が空文字列の場合は Accept ヘッダーがないものとみなし、
/// `available` の先頭を返す。
pub fn acceptable_media_type(
    accept: &str,
    available: &[MediaType],
) -> Result<(MediaType, Parameters), Error> {
    let first = available.first().ok_or(Error::NoAvailableTypeGiven)?;
    if accept.is_empty() {
        return Ok((first.clone(), Parameters::new()));
    }

    let mut candidates: Vec<Candidate> = available.iter().map(|_| Candidate::unmatched()).collect();
    let mut rest = accept;
    let mut order = 0;

    while !rest.is_empty() {
        if order > 0 {
            // 2 つ目以降のメディアレンジはカンマで始まる
            let (after_comma, found) = skip_char(rest, b',');
            if !found {
                break;
            }
            rest = after_comma;
        }

        let (media_range, remaining) = consume_media_range(rest)?;

        for (candidate, available_type) in candidates.iter_mut().zip(available) {
            if is_acceptable(&media_range.range, available_type)
                && candidate.is_superseded_by(&media_range.range)
            {
                candidate.best_match = media_range.range.clone();
                candidate.extension_parameters = media_range.extension_parameters.clone();
                candidate.weight = media_range.weight;
                candidate.order = order;
            }
        }

        rest = skip_whitespace(remaining);
        order += 1;
    }

    // メディアレンジの並びの後ろに何か残っていたら不正
    if !rest.is_empty() {
        return Err(Error::InvalidMediaRange);
    }

    let mut selected: Option<usize> = None;
    for (i, candidate) in candidates.iter().enumerate() {
        if candidate.weight.is_zero() {
            continue;
        }
        let better = match selected {
            None => true,
            Some(j) => {
                let current = &candidates[j];
                candidate.weight > current.weight
                    || (candidate.weight == current.weight && candidate.order < current.order)
            }
        };
        if better {
            selected = Some(i);
        }
    }

    let index = selected.ok_or(Error::NoAcceptableTypeFound)?;
    let candidate = &candidates[index];
    Ok((
        available[index].clone(),
        candidate.extension_parameters.clone(),
    ))
}

/// メディアレンジを 1 つ読む
///
/// q パラメータより前のパラメータはメディアレンジ自身のもの、
/// 後ろのパラメータは拡張パラメータとして扱う。
fn consume_media_range(input: &str) -> Result<(MediaRange, &str), Error> {
    let (media_type, subtype, mut rest) = consume_type(input).ok_or(Error::InvalidMediaType)?;

    let mut parameters = Parameters::new();
    let mut weight = Weight::MAX;
    let mut weight_seen = false;
    loop {
        let (after_semicolon, found) = skip_char(rest, b';');
        if !found {
            break;
        }
        let (key, value, remaining) =
            consume_parameter(after_semicolon).ok_or(Error::InvalidParameter)?;
        rest = remaining;

        if key == "q" {
            weight = Weight::parse(&value)?;
            weight_seen = true;
            break;
        }
        parameters.insert(key, value);
    }

    let mut extension_parameters = Parameters::new();
    if weight_seen {
        loop {
            let (after_semicolon, found) = skip_char(rest, b';');
            if !found {
                break;
            }
            let (key, value, remaining) =
                consume_parameter(after_semicolon).ok_or(Error::InvalidParameter)?;
            extension_parameters.insert(key, value);
            rest = remaining;
        }
    }

    Ok((
        MediaRange {
            range: MediaType::from_parts(media_type, subtype, parameters),
            weight,
            extension_parameters,
        },
        rest,
    ))
}

/// メディアレンジが提供可能なメディアタイプに一致するか
///
/// メディアレンジのパラメータはすべて提供可能なメディアタイプ側に同じ値で存在すること。
/// 提供可能なメディアタイプ側にだけあるパラメータは一致を妨げない。
fn is_acceptable(range: &MediaType, available: &MediaType) -> bool {
    range.matches(available) && range.parameters().is_subset_of(available.parameters())
}
