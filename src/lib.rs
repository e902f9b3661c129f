//! Optionality - Choice, Optional and Result wrapper types
//!
//! Generic wrappers that interoperate with formats designed for concrete
//! values: JSON, CSV cells, relational stores and plain text.
//!
//! # Quick Start
//!
//! ```
//! use optionality::{Optional, Result};
//!
//! let port = Optional::<u16>::none().get_else_alt(8080);
//! assert_eq!(port, 8080);
//!
//! let chained: Result<i32, String> = Result::ok(1)
//!     .from_try_t(|| Err("disk full".to_string()))
//!     .from_try_t(|| Ok(3));
//! assert_eq!(chained.must_get_err(), "disk full");
//! ```
//!
//! # Architecture
//!
//! Everything lives in `optionality-core`; this crate re-exports it. Enable
//! the `sqlite` feature to bind optionals as `rusqlite` parameters and rows.

// Re-export the public API from optionality-core
pub use optionality_core::*;
