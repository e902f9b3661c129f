//! Success/failure wrapper built on [`Choice`]
//!
//! `Result<T, E>` is a named specialization of `Choice<T, E>`: "ok" is the
//! `Either` slot, "error" is the `Or` slot. The error parameter defaults to
//! [`BoxError`], any value describable as an error.
//!
//! ## Railway chaining
//!
//! ```text
//! Result::ok(())
//!     .from_try_e(step_one)      // runs
//!     .from_try_t(step_two)      // runs only if step_one succeeded
//!     .from_try(step_three)      // runs only if both succeeded
//! ```
//!
//! The first failure propagates untouched; no later producer is invoked.
//!
//! ## Interop with `std::result::Result`
//!
//! The "(value, error)" idiom maps onto `std::result::Result<T, E>`; an absent
//! error maps onto `Option::<E>::None`.

use crate::choice::Choice;
use crate::error::BoxError;

/// A value or an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Result<T, E = BoxError> {
    choice: Choice<T, E>,
}

impl<T, E> Result<T, E> {
    /// Create a successful result
    pub fn ok(value: T) -> Self {
        Result {
            choice: Choice::either(value),
        }
    }

    /// Create a failed result
    pub fn err(error: E) -> Self {
        Result {
            choice: Choice::or(error),
        }
    }

    /// `Err(err)` if an error is present, `Ok(value)` otherwise
    pub fn from_tuple(value: T, err: Option<E>) -> Self {
        match err {
            Some(err) => Result::err(err),
            None => Result::ok(value),
        }
    }

    /// `Err(err)` if an error is present, `Ok(T::default())` otherwise
    ///
    /// Adapts operations that signal failure only through an error.
    pub fn from_error(err: Option<E>) -> Self
    where
        T: Default,
    {
        Result::from_tuple(T::default(), err)
    }

    /// Check if this is a success
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.choice.is_either()
    }

    /// Check if this is a failure
    #[inline]
    pub fn is_err(&self) -> bool {
        self.choice.is_or()
    }

    /// Panic unless this is a success
    #[track_caller]
    pub fn assert_ok(&self) {
        self.choice.assert_either();
    }

    /// Panic unless this is a failure
    #[track_caller]
    pub fn assert_err(&self) {
        self.choice.assert_or();
    }

    /// Get the success value, panicking on failure
    #[track_caller]
    pub fn must_get_ok(self) -> T {
        self.choice.must_get_either()
    }

    /// Get the error, panicking on success
    #[track_caller]
    pub fn must_get_err(self) -> E {
        self.choice.must_get_or()
    }

    /// Get the success value if any
    pub fn try_get_ok(self) -> Option<T> {
        self.choice.try_get_either()
    }

    /// Get the error if any
    pub fn try_get_err(self) -> Option<E> {
        self.choice.try_get_or()
    }

    /// Expose the underlying union
    pub fn to_either(self) -> Choice<T, E> {
        self.choice
    }

    /// Convert back to the "(value, error)" idiom
    ///
    /// Success gives `(value, None)`, failure gives `(T::default(), Some(err))`.
    pub fn to_tuple(self) -> (T, Option<E>)
    where
        T: Default,
    {
        match self.choice {
            Choice::Either(value) => (value, None),
            Choice::Or(err) => (T::default(), Some(err)),
        }
    }

    /// Convert into a standard library result
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self.choice {
            Choice::Either(value) => Ok(value),
            Choice::Or(err) => Err(err),
        }
    }

    /// Short-circuit on failure, otherwise replace with `producer()`
    ///
    /// The success payload of `self` is discarded.
    pub fn from_try<F>(self, producer: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        if self.is_err() {
            return self;
        }

        producer()
    }

    /// Short-circuit on failure, otherwise adopt a fallible `producer`
    pub fn from_try_t<F>(self, producer: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        if self.is_err() {
            return self;
        }

        Result::from(producer())
    }

    /// Short-circuit on failure, otherwise adopt an error-only `producer`
    ///
    /// A successful producer yields `Ok(T::default())`.
    pub fn from_try_e<F>(self, producer: F) -> Self
    where
        F: FnOnce() -> std::result::Result<(), E>,
        T: Default,
    {
        if self.is_err() {
            return self;
        }

        Result::from_error(producer().err())
    }

    /// Invoke exactly one handler, chosen by success or failure
    pub fn match_with<FO, FE>(self, ok_handler: FO, err_handler: FE)
    where
        FO: FnOnce(T),
        FE: FnOnce(E),
    {
        self.choice.match_with(ok_handler, err_handler);
    }

    // Backwards compatibility with the earlier naming

    #[doc(hidden)]
    #[deprecated(since = "0.1.0", note = "Use Result::from_tuple instead")]
    pub fn to_result(value: T, err: Option<E>) -> Self {
        Result::from_tuple(value, err)
    }

    #[doc(hidden)]
    #[deprecated(since = "0.1.0", note = "Use Result::from_try_t instead")]
    pub fn try_t<F>(self, producer: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        self.from_try_t(producer)
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(r: std::result::Result<T, E>) -> Self {
        match r {
            Ok(value) => Result::ok(value),
            Err(err) => Result::err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(r: Result<T, E>) -> Self {
        r.into_std()
    }
}

impl<T, E> From<Choice<T, E>> for Result<T, E> {
    fn from(choice: Choice<T, E>) -> Self {
        Result { choice }
    }
}
