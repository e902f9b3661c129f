//! Core wrapper types for Optionality
//!
//! This crate defines three value types and their format bindings:
//! - Choice: Two-variant tagged union
//! - Optional: Presence/absence wrapper with a payload slot and a flag
//! - Result: Success/failure wrapper built on Choice
//! - Error: Error type for every serialization boundary
//! - Bindings: JSON (`json`), CSV cells (`tabular`), store scan/produce
//!   (`store`), text marshaling (`text`)
//!
//! All three types are plain values with no interior mutability, so they are
//! `Send`/`Sync` whenever their payloads are.
//!
//! Note that [`Result`] shadows the prelude's `Result` when glob-imported.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod choice;
pub mod error;
pub mod json;
pub mod optional;
pub mod result;
pub mod store;
pub mod tabular;
pub mod text;

// Re-export commonly used types and traits
pub use choice::Choice;
pub use error::{BoxError, CodecResult, Error};
pub use json::{json_to_optional, optional_to_json, JSON_NULL};
pub use optional::{Optional, EMPTY_OPTIONAL};
pub use result::Result;
pub use store::{Storable, StoreValue};
pub use tabular::TABULAR_FIELD;
pub use text::TextCodec;
