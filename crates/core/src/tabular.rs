//! Tabular (CSV) binding for [`Optional`]
//!
//! One optional occupies one cell. An empty cell is an absent optional.
//!
//! A present payload is rendered by writing it as the sole field of a
//! single-field record under the synthetic header [`TABULAR_FIELD`], then
//! cutting the header line and the record terminator. Decoding reverses this:
//! the header is prepended to the cell text and the record is read back.
//!
//! ## Use in records
//!
//! `Optional<T>`'s plain serde impls write correct cells, but reading a cell
//! back through them would let the CSV reader guess the cell's type. Record
//! fields should go through [`cell`]:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Row {
//!     #[serde(rename = "Foo", with = "optionality_core::tabular::cell")]
//!     foo: Optional<i64>,
//! }
//! ```

use crate::error::{CodecResult, Error};
use crate::optional::Optional;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Header of the synthetic single-field record
pub const TABULAR_FIELD: &str = "Foo";

#[derive(Serialize)]
struct CellRecordRef<'a, T> {
    #[serde(rename = "Foo")]
    foo: &'a T,
}

#[derive(Deserialize)]
struct CellRecord<T> {
    #[serde(rename = "Foo")]
    foo: T,
}

/// Render a payload as raw cell text
fn encode_cell<T: Serialize>(value: &T) -> CodecResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(CellRecordRef { foo: value })?;
    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(csv::Error::from(e.into_error())))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    // Drop "Foo\n" and the trailing record terminator
    let body = text.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
    let body = body.strip_suffix('\n').unwrap_or(body);
    let body = body.strip_suffix('\r').unwrap_or(body);

    Ok(body.to_string())
}

/// Read a payload back from raw cell text
fn decode_cell<T: DeserializeOwned>(cell: &str) -> CodecResult<T> {
    let text = format!("{}\n{}", TABULAR_FIELD, cell);
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    match reader.deserialize::<CellRecord<T>>().next() {
        Some(record) => Ok(record?.foo),
        None => Err(Error::EmptyRecord),
    }
}

impl<T> Optional<T> {
    /// Encode as a CSV cell: empty when absent
    pub fn marshal_csv(&self) -> CodecResult<String>
    where
        T: Serialize,
    {
        if !self.has_value {
            return Ok(String::new());
        }

        encode_cell(&self.wrappee)
    }

    /// Decode a CSV cell in place: empty means absent
    ///
    /// On failure the optional is left absent and the error is returned.
    pub fn unmarshal_csv(&mut self, cell: &str) -> CodecResult<()>
    where
        T: DeserializeOwned,
    {
        if cell.is_empty() {
            self.has_value = false;
            return Ok(());
        }

        match decode_cell(cell) {
            Ok(value) => {
                self.set(value);
                Ok(())
            }
            Err(e) => {
                debug!(
                    target: "optionality::tabular",
                    cell,
                    error = %e,
                    "CSV cell decode failed, optional forced absent"
                );
                self.has_value = false;
                Err(e)
            }
        }
    }
}

/// Serde `with` module binding an `Optional<T>` record field to one cell
pub mod cell {
    use crate::optional::Optional;
    use serde::de::{self, DeserializeOwned};
    use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};

    /// Write the optional as its cell text
    pub fn serialize<T, S>(optional: &Optional<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let cell = optional.marshal_csv().map_err(ser::Error::custom)?;
        serializer.serialize_str(&cell)
    }

    /// Read the optional from its cell text
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Optional<T>, D::Error>
    where
        T: DeserializeOwned + Default,
        D: Deserializer<'de>,
    {
        let cell = String::deserialize(deserializer)?;
        let mut optional = Optional::none();
        optional.unmarshal_csv(&cell).map_err(de::Error::custom)?;
        Ok(optional)
    }
}
