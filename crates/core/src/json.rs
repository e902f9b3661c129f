//! Structured-text (JSON) binding for [`Optional`]
//!
//! | Optional | JSON |
//! |----------|------|
//! | absent | `null` |
//! | present | bare payload, e.g. `123` |
//!
//! Decoding accepts two shapes, tried in order:
//!
//! 1. `null` → absent, otherwise the bare payload → present
//! 2. the legacy tagged object `{"wrapee": <T>, "has_value": <bool>}`,
//!    adopted field for field
//!
//! Only a JSON object is considered for the tagged shape. If neither shape
//! decodes, the decode fails and the optional is absent.
//!
//! The input is buffered as raw JSON text so both attempts can read it. The
//! bare attempt parses that text directly, so payloads whose numbers do not
//! fit a `serde_json::Value` (e.g. `u128`) survive the round trip. The
//! `Deserialize` impl therefore needs a `serde_json` deserializer.

use crate::error::{CodecResult, Error};
use crate::optional::Optional;
use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::Value as JsonValue;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// The canonical null token
pub const JSON_NULL: &str = "null";

/// Legacy, non-transparent encoding of an optional
#[derive(Deserialize)]
struct TaggedOptional<T> {
    #[serde(rename = "wrapee", default)]
    wrappee: T,
    #[serde(default)]
    has_value: bool,
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.has_value {
            serializer.serialize_some(&self.wrappee)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: DeserializeOwned + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionalVisitor(PhantomData))
    }
}

struct OptionalVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for OptionalVisitor<T>
where
    T: DeserializeOwned + Default,
{
    type Value = Optional<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null, a bare value, or a {\"wrapee\", \"has_value\"} object")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Optional::none())
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Optional::none())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let buffered = Box::<RawValue>::deserialize(deserializer)?;
        raw_to_optional(&buffered).map_err(de::Error::custom)
    }
}

/// Decode buffered JSON text: null, then bare payload, then tagged object
fn raw_to_optional<T>(raw: &RawValue) -> Result<Optional<T>, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    let text = raw.get().trim();
    if text == JSON_NULL {
        return Ok(Optional::none());
    }

    let bare_err = match serde_json::from_str::<T>(text) {
        Ok(wrappee) => return Ok(Optional::some(wrappee)),
        Err(e) => e,
    };

    // The derived struct impl would also take a two-element array
    if !text.starts_with('{') {
        return Err(bare_err);
    }

    trace!(
        target: "optionality::json",
        error = %bare_err,
        "bare payload decode failed, trying tagged object"
    );

    let tagged: TaggedOptional<T> = serde_json::from_str(text)?;
    Ok(Optional {
        wrappee: tagged.wrappee,
        has_value: tagged.has_value,
    })
}

/// Decode a JSON value into an optional.
///
/// Bare payload first, tagged object second.
pub fn json_to_optional<T>(json: JsonValue) -> Result<Optional<T>, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    let raw = serde_json::value::to_raw_value(&json)?;
    raw_to_optional(&raw)
}

/// Encode an optional as a JSON value
pub fn optional_to_json<T: Serialize>(optional: &Optional<T>) -> CodecResult<JsonValue> {
    Ok(serde_json::to_value(optional)?)
}

impl<T> Optional<T> {
    /// Encode as JSON text: `null` when absent, the bare payload otherwise
    pub fn marshal_json(&self) -> CodecResult<Vec<u8>>
    where
        T: Serialize,
    {
        if !self.has_value {
            return Ok(JSON_NULL.as_bytes().to_vec());
        }

        Ok(serde_json::to_vec(&self.wrappee)?)
    }

    /// Decode JSON text in place
    ///
    /// On failure the optional is left absent and the error is returned.
    pub fn unmarshal_json(&mut self, input: &[u8]) -> CodecResult<()>
    where
        T: DeserializeOwned + Default,
    {
        let decoded =
            serde_json::from_slice::<Box<RawValue>>(input).and_then(|raw| raw_to_optional(&raw));

        match decoded {
            Ok(optional) => {
                *self = optional;
                Ok(())
            }
            Err(e) => {
                debug!(
                    target: "optionality::json",
                    error = %e,
                    "JSON decode failed, optional forced absent"
                );
                self.has_value = false;
                Err(Error::from(e))
            }
        }
    }
}
