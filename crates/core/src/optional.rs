//! Presence/absence wrapper
//!
//! `Optional<T>` is conceptually a `Choice<T, ()>`, laid out directly as a
//! payload slot plus a presence flag. This layout keeps the legacy tagged
//! encoding `{"wrapee": .., "has_value": ..}` decodable field for field.
//!
//! ## Invariants
//!
//! - When `has_value` is false the payload is not present, whatever the slot
//!   holds. Equality ignores the slot of absent optionals.
//! - `set` and `unset` are the only in-place mutators. Every other
//!   operation consumes the optional and returns a new value.
//!
//! ## Format bindings
//!
//! | Format | Absent | Present | Module |
//! |--------|--------|---------|--------|
//! | JSON | `null` | bare payload | [`crate::json`] |
//! | CSV cell | empty cell | payload cell text | [`crate::tabular`] |
//! | Store | [`StoreValue::Null`](crate::StoreValue) | primitive payload | [`crate::store`] |
//! | Text | empty bytes | payload text | [`crate::text`] |

use crate::result::Result;
use std::fmt;

/// Literal rendering of an absent optional
pub const EMPTY_OPTIONAL: &str = "empty optional";

/// A payload and a flag telling whether it is present
#[derive(Debug, Clone, Copy)]
pub struct Optional<T> {
    pub(crate) wrappee: T,
    pub(crate) has_value: bool,
}

impl<T> Optional<T> {
    /// Create a present optional
    pub fn some(wrappee: T) -> Self {
        Optional {
            wrappee,
            has_value: true,
        }
    }

    /// Create an absent optional holding `T::default()`
    pub fn none() -> Self
    where
        T: Default,
    {
        Optional {
            wrappee: T::default(),
            has_value: false,
        }
    }

    /// Adapt a "value + found" pair, the usual shape of a lookup
    pub fn from_t(value: T, found: bool) -> Self
    where
        T: Default,
    {
        if found {
            return Optional::some(value);
        }

        Optional::none()
    }

    /// Check if a payload is present
    #[inline]
    pub fn is_some(&self) -> bool {
        self.has_value
    }

    /// Check if the payload is absent
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.has_value
    }

    /// Panic unless a payload is present
    #[track_caller]
    pub fn assert_some(&self) {
        if self.is_none() {
            panic!("optional is empty");
        }
    }

    /// Panic if a payload is present
    #[track_caller]
    pub fn assert_none(&self) {
        if self.is_some() {
            panic!("optional is not empty");
        }
    }

    /// Get the payload, panicking if absent
    #[track_caller]
    pub fn must_get(self) -> T {
        self.assert_some();
        self.wrappee
    }

    /// Get the payload, or `alternative` if absent
    ///
    /// Unlike the `Choice` combinators this returns the bare value.
    pub fn get_else_alt(self, alternative: T) -> T {
        if self.is_some() {
            return self.wrappee;
        }

        alternative
    }

    /// Get the payload, or `T::default()` if absent
    pub fn get_else_default(self) -> T
    where
        T: Default,
    {
        if self.is_some() {
            return self.wrappee;
        }

        T::default()
    }

    /// Keep a present payload, otherwise become present with `from()`
    pub fn get_else_from<F>(self, from: F) -> Optional<T>
    where
        F: FnOnce() -> T,
    {
        if self.is_some() {
            return Optional::some(self.wrappee);
        }

        Optional::some(from())
    }

    /// Bridge into a [`Result`]: present payload is `Ok`, absence adopts
    /// the outcome of a fallible `producer`
    pub fn try_get_else_from_t<E, F>(self, producer: F) -> Result<T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        if self.is_some() {
            return Result::ok(self.wrappee);
        }

        Result::from(producer())
    }

    /// Bridge into a [`Result`]: present payload is `Ok`, absence returns
    /// `producer()`
    pub fn try_get_else_from<E, F>(self, producer: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if self.is_some() {
            return Result::ok(self.wrappee);
        }

        producer()
    }

    /// Apply `transformer` to a present payload; absence passes through
    pub fn get_transformed_else_none<F>(self, transformer: F) -> Optional<T>
    where
        F: FnOnce(T) -> T,
    {
        if self.is_none() {
            return self;
        }

        Optional::some(transformer(self.wrappee))
    }

    /// Run `f` only if present; returns `self` either way
    pub fn try_do<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_some() {
            f();
        }

        self
    }

    /// Invoke exactly one handler, chosen by presence
    ///
    /// The absent branch receives the residual slot, which callers must not
    /// interpret.
    pub fn match_with<FS, FN>(self, some_handler: FS, none_handler: FN)
    where
        FS: FnOnce(T),
        FN: FnOnce(T),
    {
        if self.is_some() {
            some_handler(self.wrappee);
        } else {
            none_handler(self.wrappee);
        }
    }

    /// Store `val` and mark present
    pub fn set(&mut self, val: T) {
        self.wrappee = val;
        self.has_value = true;
    }

    /// Mark absent and return the previous payload
    ///
    /// The slot is left at `T::default()`.
    pub fn unset(&mut self) -> T
    where
        T: Default,
    {
        self.has_value = false;
        std::mem::take(&mut self.wrappee)
    }

    /// Borrow the payload if present
    pub fn as_option(&self) -> Option<&T> {
        if self.has_value {
            Some(&self.wrappee)
        } else {
            None
        }
    }

    /// Convert into a standard library option
    pub fn into_option(self) -> Option<T> {
        if self.has_value {
            Some(self.wrappee)
        } else {
            None
        }
    }
}

impl<T: Default> Default for Optional<T> {
    fn default() -> Self {
        Optional::none()
    }
}

// Absent optionals compare equal whatever their slot holds
impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.has_value, other.has_value) {
            (true, true) => self.wrappee == other.wrappee,
            (false, false) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_value {
            return fmt::Display::fmt(&self.wrappee, f);
        }

        f.write_str(EMPTY_OPTIONAL)
    }
}

impl<T: Default> From<Option<T>> for Optional<T> {
    fn from(o: Option<T>) -> Self {
        match o {
            Some(value) => Optional::some(value),
            None => Optional::none(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}
