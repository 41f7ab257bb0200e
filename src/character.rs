//! 文字クラス判定
//!
//! すべての文法規則の終端記号。1 バイト単位で判定する。

/// DIGIT (RFC 5234 Appendix B.1)
pub(crate) fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// ALPHA (RFC 5234 Appendix B.1)
pub(crate) fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// tchar (RFC 7230 Section 3.2.6)
pub(crate) fn is_token_char(b: u8) -> bool {
    matches!(b,
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' |
        b'0'..=b'9' | b'A'..=b'Z' | b'^' | b'_' | b'`' | b'a'..=b'z' | b'|' | b'~'
    )
}

/// VCHAR (RFC 5234 Appendix B.1)
pub(crate) fn is_visible(b: u8) -> bool {
    (0x21..=0x7E).contains(&b)
}

/// HTAB / SP (RFC 7230 Section 3.2.3)
pub(crate) fn is_whitespace(b: u8) -> bool {
    b == b'\t' || b == b' '
}

/// obs-text (RFC 7230 Section 3.2.6)
pub(crate) fn is_obsolete_text(b: u8) -> bool {
    b >= 0x80
}

/// qdtext (RFC 7230 Section 3.2.6)
pub(crate) fn is_quoted_text(b: u8) -> bool {
    is_whitespace(b)
        || b == 0x21
        || (0x23..=0x5B).contains(&b)
        || (0x5D..=0x7E).contains(&b)
        || is_obsolete_text(b)
}

/// quoted-pair の 2 文字目 (RFC 7230 Section 3.2.6)
pub(crate) fn is_quoted_pair_char(b: u8) -> bool {
    is_whitespace(b) || is_visible(b) || is_obsolete_text(b)
}
