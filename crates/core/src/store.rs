//! Relational store binding for [`Optional`]
//!
//! This module defines:
//! - [`StoreValue`]: the set of values a store driver can bind directly
//! - [`Storable`]: the capability of a payload type to cross that boundary
//! - `Optional::scan` / `Optional::produce`: the two-operation contract
//!
//! ## Absence
//!
//! `StoreValue::Null` is the storage-null sentinel in both directions.
//!
//! ## Type Rules
//!
//! - Scan matches types exactly: `Int` scans into `i64` and nothing else
//! - Scanning any other type is a [`Error::ScanTypeMismatch`] naming both types
//! - Binding a present payload whose type is not a store primitive produces
//!   `Null`. The payload is lost; no error is raised.

use crate::error::{CodecResult, Error};
use crate::optional::Optional;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::any::type_name;
use tracing::debug;

/// A value a store driver can bind or return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreValue {
    /// Storage null
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string
    Text(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// UTC timestamp
    Time(DateTime<Utc>),
}

impl StoreValue {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            StoreValue::Null => "Null",
            StoreValue::Bool(_) => "Bool",
            StoreValue::Int(_) => "Int",
            StoreValue::Float(_) => "Float",
            StoreValue::Text(_) => "Text",
            StoreValue::Bytes(_) => "Bytes",
            StoreValue::Time(_) => "Time",
        }
    }

    /// Check if this is storage null
    pub fn is_null(&self) -> bool {
        matches!(self, StoreValue::Null)
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for StoreValue {
    fn from(s: &str) -> Self {
        StoreValue::Text(s.to_string())
    }
}

impl From<String> for StoreValue {
    fn from(s: String) -> Self {
        StoreValue::Text(s)
    }
}

impl From<bool> for StoreValue {
    fn from(b: bool) -> Self {
        StoreValue::Bool(b)
    }
}

impl From<i64> for StoreValue {
    fn from(i: i64) -> Self {
        StoreValue::Int(i)
    }
}

impl From<f64> for StoreValue {
    fn from(f: f64) -> Self {
        StoreValue::Float(f)
    }
}

impl From<Vec<u8>> for StoreValue {
    fn from(b: Vec<u8>) -> Self {
        StoreValue::Bytes(b)
    }
}

impl From<DateTime<Utc>> for StoreValue {
    fn from(t: DateTime<Utc>) -> Self {
        StoreValue::Time(t)
    }
}

impl From<()> for StoreValue {
    fn from(_: ()) -> Self {
        StoreValue::Null
    }
}

/// Capability of a payload type to cross the store boundary
///
/// Both methods default to "not a store primitive", so a complex payload can
/// opt in with an empty impl and accept the bind limitation:
///
/// ```ignore
/// impl Storable for Point {}
/// ```
pub trait Storable: Sized {
    /// The directly storable form of this value, `None` if there is none
    fn to_store_value(&self) -> Option<StoreValue> {
        None
    }

    /// Take a stored value of exactly this type, handing back anything else
    fn from_store_value(value: StoreValue) -> Result<Self, StoreValue> {
        Err(value)
    }

    /// Take a value as a SQL driver returns it
    ///
    /// SQL drivers have no boolean or timestamp storage class, so the
    /// rusqlite bridge writes `Bool` as `Int` and `Time` as RFC 3339 `Text`.
    /// Types bound that way override this to read their own output back.
    fn from_sql_value(value: StoreValue) -> Result<Self, StoreValue> {
        Self::from_store_value(value)
    }
}

macro_rules! storable {
    ($ty:ty, $variant:ident) => {
        storable!($ty, $variant, |value| Err(value));
    };
    ($ty:ty, $variant:ident, $from_sql:expr) => {
        impl Storable for $ty {
            fn to_store_value(&self) -> Option<StoreValue> {
                Some(StoreValue::$variant(self.clone()))
            }

            fn from_store_value(value: StoreValue) -> Result<Self, StoreValue> {
                match value {
                    StoreValue::$variant(v) => Ok(v),
                    other => Err(other),
                }
            }

            fn from_sql_value(value: StoreValue) -> Result<Self, StoreValue> {
                let from_sql: fn(StoreValue) -> Result<Self, StoreValue> = $from_sql;
                Self::from_store_value(value).or_else(from_sql)
            }
        }
    };
}

storable!(bool, Bool, |value| match value {
    StoreValue::Int(0) => Ok(false),
    StoreValue::Int(1) => Ok(true),
    other => Err(other),
});
storable!(i64, Int);
storable!(f64, Float);
storable!(String, Text);
storable!(Vec<u8>, Bytes);
storable!(DateTime<Utc>, Time, |value| match value {
    StoreValue::Text(text) => match DateTime::parse_from_rfc3339(&text) {
        Ok(t) => Ok(t.with_timezone(&Utc)),
        Err(_) => Err(StoreValue::Text(text)),
    },
    other => Err(other),
});

impl<T: Storable> Optional<T> {
    /// Consume a stored value
    ///
    /// `Null` makes the optional absent, a value of exactly `T`'s type makes
    /// it present. Any other value is a type mismatch and leaves it absent.
    pub fn scan(&mut self, value: StoreValue) -> CodecResult<()>
    where
        T: Default,
    {
        self.scan_with(value, T::from_store_value)
    }

    pub(crate) fn scan_with(
        &mut self,
        value: StoreValue,
        take: fn(StoreValue) -> Result<T, StoreValue>,
    ) -> CodecResult<()>
    where
        T: Default,
    {
        if value.is_null() {
            *self = Optional::none();
            return Ok(());
        }

        match take(value) {
            Ok(wrappee) => {
                self.set(wrappee);
                Ok(())
            }
            Err(rejected) => {
                self.has_value = false;
                Err(Error::ScanTypeMismatch {
                    source_type: rejected.type_name(),
                    target_type: type_name::<T>(),
                })
            }
        }
    }

    /// Produce the storable form of this optional
    ///
    /// Absent is `Null`. A present payload that is not a store primitive is
    /// also `Null`.
    pub fn produce(&self) -> CodecResult<StoreValue> {
        if !self.has_value {
            return Ok(StoreValue::Null);
        }

        match self.wrappee.to_store_value() {
            Some(value) => Ok(value),
            None => {
                debug!(
                    target: "optionality::store",
                    payload_type = type_name::<T>(),
                    "payload is not a store primitive, binding null"
                );
                Ok(StoreValue::Null)
            }
        }
    }
}

// ============================================================================
// rusqlite bridge
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::{Storable, StoreValue};
    use crate::optional::Optional;
    use rusqlite::types::{
        FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value as SqlValue, ValueRef,
    };

    impl From<ValueRef<'_>> for StoreValue {
        fn from(v: ValueRef<'_>) -> Self {
            match v {
                ValueRef::Null => StoreValue::Null,
                ValueRef::Integer(i) => StoreValue::Int(i),
                ValueRef::Real(f) => StoreValue::Float(f),
                ValueRef::Text(t) => StoreValue::Text(String::from_utf8_lossy(t).into_owned()),
                ValueRef::Blob(b) => StoreValue::Bytes(b.to_vec()),
            }
        }
    }

    impl From<StoreValue> for SqlValue {
        fn from(v: StoreValue) -> Self {
            match v {
                StoreValue::Null => SqlValue::Null,
                StoreValue::Bool(b) => SqlValue::Integer(i64::from(b)),
                StoreValue::Int(i) => SqlValue::Integer(i),
                StoreValue::Float(f) => SqlValue::Real(f),
                StoreValue::Text(s) => SqlValue::Text(s),
                StoreValue::Bytes(b) => SqlValue::Blob(b),
                StoreValue::Time(t) => SqlValue::Text(t.to_rfc3339()),
            }
        }
    }

    impl<T: Storable + Default> FromSql for Optional<T> {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            let mut optional = Optional::none();
            optional
                .scan_with(StoreValue::from(value), T::from_sql_value)
                .map_err(|e| FromSqlError::Other(Box::new(e)))?;
            Ok(optional)
        }
    }

    impl<T: Storable> ToSql for Optional<T> {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            let value = self
                .produce()
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            Ok(ToSqlOutput::Owned(SqlValue::from(value)))
        }
    }
}
