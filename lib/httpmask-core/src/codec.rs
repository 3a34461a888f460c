//! JSON read/write facility used by the obfuscators.
//!
//! The engine only needs to turn body bytes into a [`Value`] tree and back. Any
//! implementation of [`JsonCodec`] can be injected with
//! [`RedactionConfigBuilder::with_codec`](crate::RedactionConfigBuilder::with_codec);
//! [`SerdeJsonCodec`] is used otherwise.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::HttpMaskError;

/// Reads and writes JSON trees.
pub trait JsonCodec: Debug + Send + Sync {
    /// Parses bytes into a JSON tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not valid JSON.
    fn parse(&self, bytes: &[u8]) -> Result<Value, HttpMaskError>;

    /// Writes a JSON tree to bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be written.
    fn serialize(&self, value: &Value) -> Result<Vec<u8>, HttpMaskError>;

    /// Adjusts a parsed tree before it is converted into a typed value.
    ///
    /// Identity by default. Masking never goes through this hook, only decoding does.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be adjusted.
    fn normalize(&self, value: Value) -> Result<Value, HttpMaskError> {
        Ok(value)
    }
}

impl dyn JsonCodec + '_ {
    /// Converts a JSON tree into a typed value, after [`JsonCodec::normalize`].
    ///
    /// Fields unknown to `T` are ignored unless `T` says otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`HttpMaskError::JsonError`] with the path of the failing field.
    pub fn convert<T>(&self, value: Value) -> Result<T, HttpMaskError>
    where
        T: DeserializeOwned,
    {
        let value = self.normalize(value)?;
        serde_path_to_error::deserialize(value).map_err(|err| HttpMaskError::JsonError {
            path: err.path().to_string(),
            error: err.into_inner(),
        })
    }

    /// Parses bytes, then converts them like [`convert`](Self::convert).
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not JSON or do not fit `T`.
    pub fn decode<T>(&self, bytes: &[u8]) -> Result<T, HttpMaskError>
    where
        T: DeserializeOwned,
    {
        let value = self.parse(bytes)?;
        self.convert(value)
    }
}

/// [`JsonCodec`] backed by `serde_json`.
///
/// Compact output by default, see [`SerdeJsonCodec::pretty`]. Object keys keep their
/// document order.
///
/// Property names are matched case-sensitively when decoding: `{"Name": "Alice"}` does
/// not fill a `name` field. Use serde's `alias` or `rename_all` on the target type, or
/// wrap this codec and override [`JsonCodec::normalize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerdeJsonCodec {
    pretty: bool,
}

impl SerdeJsonCodec {
    /// Creates a codec writing compact JSON.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec writing indented JSON.
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl JsonCodec for SerdeJsonCodec {
    fn parse(&self, bytes: &[u8]) -> Result<Value, HttpMaskError> {
        let value = serde_json::from_slice(bytes)?;
        Ok(value)
    }

    fn serialize(&self, value: &Value) -> Result<Vec<u8>, HttpMaskError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        Ok(bytes)
    }
}
