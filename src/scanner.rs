//! トークン / quoted-string の字句解析
//!
//! いずれの関数も入力の先頭から読み進め、読み残した部分を返す。
//! 出力は ASCII 小文字に正規化する。

use crate::character::{is_quoted_pair_char, is_quoted_text, is_token_char, is_whitespace};

/// 先頭の OWS (HTAB / SP) を読み飛ばす
pub(crate) fn skip_whitespace(input: &str) -> &str {
    let start = input
        .bytes()
        .position(|b| !is_whitespace(b))
        .unwrap_or(input.len());
    &input[start..]
}

/// 先頭が `c` なら 1 文字読み進める
///
/// 一致しない場合は入力をそのまま返す。
pub(crate) fn skip_char(input: &str, c: u8) -> (&str, bool) {
    match input.as_bytes().first() {
        Some(&b) if b == c => (&input[1..], true),
        _ => (input, false),
    }
}

/// token (1*tchar) を最長一致で読む
pub(crate) fn consume_token(input: &str) -> Option<(String, &str)> {
    let end = input
        .bytes()
        .position(|b| !is_token_char(b))
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    Some((input[..end].to_ascii_lowercase(), &input[end..]))
}

/// quoted-string の中身を読む
///
/// 入力は開き `"` の直後から始まっていること。
/// エスケープされていない `"` の手前で停止し、閉じ `"` は読まない。
pub(crate) fn consume_quoted_string(input: &str) -> Option<(String, &str)> {
    let bytes = input.as_bytes();
    let mut value = Vec::new();
    let mut index = 0;

    while index < bytes.len() {
        let b = bytes[index];
        if b == b'\\' {
            index += 1;
            let escaped = *bytes.get(index)?;
            if !is_quoted_pair_char(escaped) {
                return None;
            }
            value.push(escaped);
        } else if is_quoted_text(b) {
            value.push(b);
        } else {
            break;
        }
        index += 1;
    }

    let mut value = String::from_utf8(value).ok()?;
    value.make_ascii_lowercase();
    Some((value, &input[index..]))
}
