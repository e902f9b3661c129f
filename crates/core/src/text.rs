//! Text marshaling binding for [`Optional`]
//!
//! A payload type opts into text marshaling by implementing [`TextCodec`].
//! The trait's default methods report the capability as missing, so a type
//! can implement it empty and every text operation on it fails with
//! [`Error::TextMarshalUnsupported`] / [`Error::TextUnmarshalUnsupported`]
//! instead of silently doing nothing.
//!
//! The std scalars, `String` and `DateTime<Utc>` implement it through their
//! `Display` / `FromStr` forms.
//!
//! | Optional | Text |
//! |----------|------|
//! | absent | empty bytes |
//! | present | payload text |

use crate::error::{CodecResult, Error};
use crate::optional::Optional;
use chrono::{DateTime, Utc};
use std::any::type_name;
use tracing::debug;

/// Capability of a payload type to render itself as text and back
pub trait TextCodec: Sized {
    /// Render as text
    fn marshal_text(&self) -> CodecResult<Vec<u8>> {
        Err(Error::TextMarshalUnsupported {
            type_name: type_name::<Self>(),
        })
    }

    /// Parse from text
    fn unmarshal_text(text: &[u8]) -> CodecResult<Self> {
        Err(Error::TextUnmarshalUnsupported {
            type_name: type_name::<Self>(),
            input: String::from_utf8_lossy(text).into_owned(),
        })
    }
}

macro_rules! text_codec_via_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextCodec for $ty {
                fn marshal_text(&self) -> CodecResult<Vec<u8>> {
                    Ok(self.to_string().into_bytes())
                }

                fn unmarshal_text(text: &[u8]) -> CodecResult<Self> {
                    let text = std::str::from_utf8(text)?;
                    text.parse::<$ty>().map_err(|e| Error::TextParse {
                        type_name: type_name::<$ty>(),
                        input: text.to_string(),
                        reason: e.to_string(),
                    })
                }
            }
        )*
    };
}

text_codec_via_str!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

impl TextCodec for DateTime<Utc> {
    fn marshal_text(&self) -> CodecResult<Vec<u8>> {
        Ok(self.to_rfc3339().into_bytes())
    }

    fn unmarshal_text(text: &[u8]) -> CodecResult<Self> {
        let text = std::str::from_utf8(text)?;
        text.parse::<DateTime<Utc>>().map_err(|e| Error::TextParse {
            type_name: type_name::<Self>(),
            input: text.to_string(),
            reason: e.to_string(),
        })
    }
}

impl<T: TextCodec> Optional<T> {
    /// Render as text: empty when absent, the payload's own text otherwise
    pub fn marshal_text(&self) -> CodecResult<Vec<u8>> {
        if !self.has_value {
            return Ok(Vec::new());
        }

        self.wrappee.marshal_text()
    }

    /// Parse text in place
    ///
    /// Empty input makes the optional absent. Payload types without the
    /// capability fail on any input. On failure the optional is left absent.
    ///
    /// Empty input is absent even for payloads whose own text can be empty,
    /// so a present empty `String` comes back absent.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> CodecResult<()> {
        match T::unmarshal_text(text) {
            Ok(value) if !text.is_empty() => {
                self.set(value);
                Ok(())
            }
            Err(e) if !text.is_empty() || e.is_unsupported() => {
                debug!(
                    target: "optionality::text",
                    error = %e,
                    "text unmarshal failed, optional forced absent"
                );
                self.has_value = false;
                Err(e)
            }
            // Empty input from a capable payload type
            _ => {
                self.has_value = false;
                Ok(())
            }
        }
    }
}
