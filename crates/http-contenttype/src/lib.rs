//! http_contenttype - http crate integration for shiguredo_contenttype
//!
//! http::HeaderMap / http::Request に Content-Type のパースと
//! Accept によるコンテントネゴシエーションのメソッドを追加する拡張トレイト。
//!
//! ## Features
//!
//! - `request` - http::Request<B> 向けの `RequestExt` (デフォルト有効)
//!
//! ## 使い方
//!
//! ```rust
//! use http::Request;
//! use http_contenttype::{MediaType, RequestExt};
//!
//! let request = Request::builder()
//!     .header("Accept", "application/json;q=0.5, text/html")
//!     .body(())
//!     .unwrap();
//!
//! let available = [
//!     MediaType::new("application", "json"),
//!     MediaType::new("text", "html"),
//! ];
//! let (selected, _) = request.acceptable_media_type(&available).unwrap();
//! assert_eq!(selected.mime(), "text/html");
//! ```

pub mod error;
pub mod header_map_ext;
#[cfg(feature = "request")]
pub mod request_ext;

pub use error::{Error, Result};
pub use header_map_ext::HeaderMapExt;
#[cfg(feature = "request")]
pub use request_ext::RequestExt;

// shiguredo_contenttype の型を re-export
pub use shiguredo_contenttype::{Language, MediaType, Parameters};
