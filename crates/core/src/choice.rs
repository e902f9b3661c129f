//! Two-variant tagged union
//!
//! `Choice<E, O>` holds exactly one of two payloads: the `Either` slot or the
//! `Or` slot. The enum discriminant is the single source of truth for which
//! payload exists.
//!
//! ## Access
//!
//! - Safe: [`Choice::try_get_either`] / [`Choice::try_get_or`] return `Option`
//! - Fatal: [`Choice::must_get_either`] / [`Choice::must_get_or`] panic on a
//!   tag mismatch, for call sites that already proved the tag
//!
//! ## Re-tagging
//!
//! The fallback combinators never mutate: they return a new `Choice`.
//! Note the asymmetry:
//!
//! | Combinator | Self is the other variant |
//! |------------|---------------------------|
//! | `get_either_else_or(o)` | `Or(o)` (tag stays Or) |
//! | `get_either_else_default()` | `Either(E::default())` |
//! | `get_either_else_from(f)` | `Either(f())` |
//!
//! and the mirror image for the `get_or_else_*` family.

use serde::{Deserialize, Serialize};

/// One of two values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice<E, O> {
    /// The first slot
    Either(E),
    /// The second slot
    Or(O),
}

impl<E, O> Choice<E, O> {
    /// Create a choice holding the `Either` slot
    pub fn either(value: E) -> Self {
        Choice::Either(value)
    }

    /// Create a choice holding the `Or` slot
    pub fn or(value: O) -> Self {
        Choice::Or(value)
    }

    /// Check if the `Either` slot is set
    #[inline]
    pub fn is_either(&self) -> bool {
        matches!(self, Choice::Either(_))
    }

    /// Check if the `Or` slot is set
    #[inline]
    pub fn is_or(&self) -> bool {
        matches!(self, Choice::Or(_))
    }

    /// Panic unless the `Either` slot is set
    #[track_caller]
    pub fn assert_either(&self) {
        if self.is_or() {
            panic!("Either is not set");
        }
    }

    /// Panic unless the `Or` slot is set
    #[track_caller]
    pub fn assert_or(&self) {
        if self.is_either() {
            panic!("Or is not set");
        }
    }

    /// Get the `Either` payload, panicking if the `Or` slot is set
    #[track_caller]
    pub fn must_get_either(self) -> E {
        match self {
            Choice::Either(value) => value,
            Choice::Or(_) => panic!("Either is not set"),
        }
    }

    /// Get the `Or` payload, panicking if the `Either` slot is set
    #[track_caller]
    pub fn must_get_or(self) -> O {
        match self {
            Choice::Or(value) => value,
            Choice::Either(_) => panic!("Or is not set"),
        }
    }

    /// Get the `Either` payload if set
    pub fn try_get_either(self) -> Option<E> {
        match self {
            Choice::Either(value) => Some(value),
            Choice::Or(_) => None,
        }
    }

    /// Get the `Or` payload if set
    pub fn try_get_or(self) -> Option<O> {
        match self {
            Choice::Or(value) => Some(value),
            Choice::Either(_) => None,
        }
    }

    /// Keep `Either`, otherwise re-tag as `Or(or)`
    pub fn get_either_else_or(self, or: O) -> Self {
        if self.is_either() {
            return self;
        }

        Choice::Or(or)
    }

    /// Keep `Either`, otherwise `Either(E::default())`
    pub fn get_either_else_default(self) -> Self
    where
        E: Default,
    {
        if self.is_either() {
            return self;
        }

        Choice::Either(E::default())
    }

    /// Keep `Either`, otherwise `Either(from())`
    ///
    /// `from` is only invoked when the `Or` slot is set.
    pub fn get_either_else_from<F>(self, from: F) -> Self
    where
        F: FnOnce() -> E,
    {
        if self.is_either() {
            return self;
        }

        Choice::Either(from())
    }

    /// Keep `Or`, otherwise re-tag as `Either(either)`
    pub fn get_or_else_either(self, either: E) -> Self {
        if self.is_or() {
            return self;
        }

        Choice::Either(either)
    }

    /// Keep `Or`, otherwise `Or(O::default())`
    pub fn get_or_else_default(self) -> Self
    where
        O: Default,
    {
        if self.is_or() {
            return self;
        }

        Choice::Or(O::default())
    }

    /// Keep `Or`, otherwise `Or(from())`
    pub fn get_or_else_from<F>(self, from: F) -> Self
    where
        F: FnOnce() -> O,
    {
        if self.is_or() {
            return self;
        }

        Choice::Or(from())
    }

    /// Invoke exactly one handler, chosen by the tag
    pub fn match_with<FE, FO>(self, either: FE, or: FO)
    where
        FE: FnOnce(E),
        FO: FnOnce(O),
    {
        match self {
            Choice::Either(value) => either(value),
            Choice::Or(value) => or(value),
        }
    }

    /// Borrow the payload of whichever slot is set
    pub fn as_ref(&self) -> Choice<&E, &O> {
        match self {
            Choice::Either(value) => Choice::Either(value),
            Choice::Or(value) => Choice::Or(value),
        }
    }
}
