use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as JsonValue;
use std::any;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Failed to convert {type_name} into a JSON value: {source}")]
    ToValue {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to convert JSON value into {type_name}: {source}")]
    FromValue {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Converts typed values to and from the generic JSON tree that patch
/// documents operate on.
///
/// Implementations are shared across callers and must be safe to use from
/// several threads at once.
pub trait Converter: Send + Sync {
    fn to_value<T: Serialize>(&self, value: &T) -> Result<JsonValue, ConversionError>;

    fn from_value<T: DeserializeOwned>(&self, value: JsonValue) -> Result<T, ConversionError>;
}

/// `serde_json` backed converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter;

impl Converter for JsonConverter {
    fn to_value<T: Serialize>(&self, value: &T) -> Result<JsonValue, ConversionError> {
        serde_json::to_value(value).map_err(|source| ConversionError::ToValue {
            type_name: any::type_name::<T>(),
            source,
        })
    }

    fn from_value<T: DeserializeOwned>(&self, value: JsonValue) -> Result<T, ConversionError> {
        serde_json::from_value(value).map_err(|source| ConversionError::FromValue {
            type_name: any::type_name::<T>(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "converter_tests.rs"]
mod tests;
