/*
 * Copyright (C) 2026 Mark Wells Dev
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Encode/decode entry points for the transport layer.
//!
//! The transport determines the expected payload type from the RPC method
//! name and calls [`decode_from_value`] (or [`decode_from_slice`] when it
//! still holds raw bytes) with that type. Encoding is the mirror image and
//! cannot fail for the types in this crate short of a non-string map key,
//! which none of them has.
//!
//! Unknown fields and unknown enumeration codes are never decode errors;
//! only a missing required field or a shape mismatch is.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

/// A structured decode failure.
///
/// Only two conditions fail a decode. Everything else the peer can send —
/// extra fields, enumeration codes from a newer protocol version — is
/// tolerated by construction.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A field the payload type marks required was absent from the JSON.
    #[error("missing required field `{field}`")]
    MissingRequiredField {
        /// Wire name of the absent field.
        field: String,
    },

    /// A field was present but its JSON shape does not match the declared
    /// type, or the top-level value was not the expected shape at all.
    #[error("type mismatch: {detail}")]
    TypeMismatch {
        /// The serde-reported description of the mismatch.
        detail: String,
    },

    /// The input was not valid JSON to begin with.
    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),
}

impl DecodeError {
    /// Classifies a serde_json error into the decode taxonomy.
    ///
    /// serde's data errors carry the offending field in their message,
    /// as "missing field `x`"; syntax errors are passed through unchanged.
    fn classify(err: serde_json::Error) -> Self {
        if !err.is_data() {
            return Self::Syntax(err);
        }
        let msg = err.to_string();
        msg.strip_prefix("missing field `")
            .and_then(|rest| rest.split('`').next())
            .map_or(
                Self::TypeMismatch {
                    detail: msg.clone(),
                },
                |field| Self::MissingRequiredField {
                    field: field.to_string(),
                },
            )
    }
}

/// Decodes a payload of type `T` from an already-parsed JSON value.
///
/// # Errors
///
/// Returns [`DecodeError::MissingRequiredField`] or
/// [`DecodeError::TypeMismatch`]; never fails on unknown fields or unknown
/// enumeration codes.
pub fn decode_from_value<T: DeserializeOwned>(value: Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(|err| {
        let err = DecodeError::classify(err);
        debug!(payload = std::any::type_name::<T>(), %err, "decode failed");
        err
    })
}

/// Decodes a payload of type `T` from raw UTF-8 JSON bytes.
///
/// # Errors
///
/// Returns [`DecodeError::Syntax`] for malformed JSON, otherwise the same
/// errors as [`decode_from_value`].
pub fn decode_from_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| {
        let err = DecodeError::classify(err);
        debug!(payload = std::any::type_name::<T>(), %err, "decode failed");
        err
    })
}

/// Encodes a payload to a JSON value for the transport to frame.
///
/// # Errors
///
/// Returns a serialization error only if the payload contains a value
/// serde_json cannot represent; the types in this crate never do.
pub fn encode_to_value<T: Serialize>(payload: &T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(payload)
}

/// Encodes a payload to UTF-8 JSON bytes.
///
/// # Errors
///
/// Same conditions as [`encode_to_value`].
pub fn encode_to_vec<T: Serialize>(payload: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(payload)
}

/// Removes a property from a raw JSON object, returning the value it held.
///
/// Afterwards the field behaves as absent. Removing a property that is not
/// present is not an error and returns `None`, so the operation is
/// idempotent.
pub fn remove_property(object: &mut Map<String, Value>, key: &str) -> Option<Value> {
    object.remove(key)
}
