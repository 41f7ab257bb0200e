//! # shiguredo_contenttype
//!
//! 依存なしの HTTP Content-Type パーサーと Accept コンテントネゴシエーションライブラリ (Sans I/O)
//!
//! ## 特徴
//!
//! - **依存なし**: 標準ライブラリのみ使用
//! - **Sans I/O**: ヘッダー値 (文字列) を受け取り、構造化された結果かエラーを返すだけ
//! - **厳密**: RFC 7231 / RFC 7230 の文法に従い、不正な入力を部分的に受理しない
//!
//! ## 使い方
//!
//! ### Content-Type のパース
//!
//! ```rust
//! use shiguredo_contenttype::MediaType;
//!
//! let mt = MediaType::parse("Application/XML; charset=UTF-8").unwrap();
//! assert_eq!(mt.mime(), "application/xml");
//! assert_eq!(mt.parameter("charset"), Some("utf-8"));
//! ```
//!
//! ### Accept によるネゴシエーション
//!
//! ```rust
//! use shiguredo_contenttype::{Error, MediaType, acceptable_media_type};
//!
//! let available = [
//!     MediaType::new("application", "json"),
//!     MediaType::new("text", "html"),
//! ];
//!
//! let (selected, _) = acceptable_media_type("text/html, */*;q=0.1", &available).unwrap();
//! assert_eq!(selected.mime(), "text/html");
//!
//! // Accept ヘッダーがなければ先頭を選ぶ
//! let (selected, _) = acceptable_media_type("", &available).unwrap();
//! assert_eq!(selected.mime(), "application/json");
//!
//! assert_eq!(
//!     acceptable_media_type("image/*", &available),
//!     Err(Error::NoAcceptableTypeFound)
//! );
//! ```
//!
//! ### 言語レンジのパース
//!
//! ```rust
//! use shiguredo_contenttype::Language;
//!
//! let lang = Language::parse("en-Latn-US").unwrap();
//! assert_eq!(lang.script(), "latn");
//! ```

mod character;
mod error;
pub mod headers;
pub mod language;
pub mod media_type;
pub mod negotiation;
pub mod quality;
mod scanner;

pub use error::Error;
pub use headers::HeaderLookup;
pub use language::Language;
pub use media_type::{MediaType, Parameters};
pub use negotiation::acceptable_media_type;
pub use quality::Weight;
