//! q 値 (RFC 7231 Section 5.3.1)
//!
//! ```text
//! weight = OWS ";" OWS "q=" qvalue
//! qvalue = ( "0" [ "." 0*3DIGIT ] )
//!        / ( "1" [ "." 0*3("0") ] )
//! ```
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_contenttype::quality::Weight;
//!
//! assert_eq!(Weight::parse("0.5").unwrap().value(), 500);
//! assert_eq!(Weight::parse("1.").unwrap(), Weight::MAX);
//! assert!(Weight::parse("1.0000").is_err());
//! ```

use core::fmt;

use crate::character::is_digit;
use crate::error::Error;

/// q 値 (0.000 - 1.000) をミリ単位の整数で保持する
///
/// 0 は「受理不可」を意味する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u16);

impl Weight {
    /// q=0 (受理不可)
    pub const ZERO: Weight = Weight(0);
    /// q=1 (既定値)
    pub const MAX: Weight = Weight(1000);

    /// q パラメータの値をパース
    pub fn parse(input: &str) -> Result<Self, Error> {
        let bytes = input.as_bytes();
        // "0.000" より長いものは小数点以下が 4 桁以上
        if bytes.is_empty() || bytes.len() > 5 {
            return Err(Error::InvalidWeight);
        }

        let first = bytes[0];
        if first != b'0' && first != b'1' {
            return Err(Error::InvalidWeight);
        }
        let mut value = u16::from(first - b'0') * 1000;

        if bytes.len() == 1 {
            return Ok(Weight(value));
        }
        if bytes[1] != b'.' {
            return Err(Error::InvalidWeight);
        }

        let mut multiplier = 100;
        for &b in &bytes[2..] {
            if !is_digit(b) || (first == b'1' && b != b'0') {
                return Err(Error::InvalidWeight);
            }
            value += u16::from(b - b'0') * multiplier;
            multiplier /= 10;
        }

        Ok(Weight(value))
    }

    /// ミリ単位の q 値 (0-1000)
    pub fn value(&self) -> u16 {
        self.0
    }

    /// q=0 かどうか
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::MAX
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1000 {
            return write!(f, "1");
        }
        if self.0 == 0 {
            return write!(f, "0");
        }

        let mut frac = format!("{:03}", self.0);
        while frac.ends_with('0') {
            frac.pop();
        }
        write!(f, "0.{}", frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integers() {
        assert_eq!(Weight::parse("0").unwrap().value(), 0);
        assert_eq!(Weight::parse("1").unwrap().value(), 1000);
    }

    #[test]
    fn parse_trailing_dot() {
        assert_eq!(Weight::parse("1.").unwrap().value(), 1000);
        assert_eq!(Weight::parse("0.").unwrap().value(), 0);
    }

    #[test]
    fn parse_fraction() {
        assert_eq!(Weight::parse("0.5").unwrap().value(), 500);
        assert_eq!(Weight::parse("0.25").unwrap().value(), 250);
        assert_eq!(Weight::parse("0.001").unwrap().value(), 1);
        assert_eq!(Weight::parse("0.999").unwrap().value(), 999);
        assert_eq!(Weight::parse("1.000").unwrap().value(), 1000);
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(Weight::parse(""), Err(Error::InvalidWeight));
        assert_eq!(Weight::parse("a"), Err(Error::InvalidWeight));
        assert_eq!(Weight::parse("2"), Err(Error::InvalidWeight));
        assert_eq!(Weight::parse("11"), Err(Error::InvalidWeight));
        assert_eq!(Weight::parse("1.0000"), Err(Error::InvalidWeight));
        assert_eq!(Weight::parse("0.0001"), Err(Error::InvalidWeight));
        assert_eq!(Weight::parse("1.a"), Err(Error::InvalidWeight));
        assert_eq!(Weight::parse("1.100"), Err(Error::InvalidWeight));
        assert_eq!(Weight::parse("1.001"), Err(Error::InvalidWeight));
        assert_eq!(Weight::parse(".5"), Err(Error::InvalidWeight));
        assert_eq!(Weight::parse("0,5"), Err(Error::InvalidWeight));
    }

    #[test]
    fn zero() {
        assert!(Weight::ZERO.is_zero());
        assert!(Weight::parse("0.000").unwrap().is_zero());
        assert!(!Weight::parse("0.001").unwrap().is_zero());
        assert!(!Weight::default().is_zero());
    }

    #[test]
    fn ordering() {
        assert!(Weight::parse("0.2").unwrap() < Weight::parse("0.3").unwrap());
        assert!(Weight::ZERO < Weight::MAX);
        assert_eq!(Weight::default(), Weight::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(Weight::MAX.to_string(), "1");
        assert_eq!(Weight::ZERO.to_string(), "0");
        assert_eq!(Weight::parse("0.500").unwrap().to_string(), "0.5");
        assert_eq!(Weight::parse("0.012").unwrap().to_string(), "0.012");
    }
}
