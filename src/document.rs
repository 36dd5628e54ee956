use crate::errors::PatchError;
use anyhow::Context;
use json_patch::Patch;
use serde_json::Value as JsonValue;

pub const JSON_PATCH_MEDIA_TYPE: &str = "application/json-patch+json";
pub const MERGE_PATCH_MEDIA_TYPE: &str = "application/merge-patch+json";

pub fn parse_patch(body: &[u8]) -> Result<Patch, PatchError> {
    serde_json::from_slice(body)
        .context("Failed to parse JSON patch document")
        .map_err(PatchError::unprocessable)
}

pub fn parse_patch_value(value: JsonValue) -> Result<Patch, PatchError> {
    serde_json::from_value(value)
        .context("Failed to parse JSON patch document")
        .map_err(PatchError::unprocessable)
}

/// Any JSON value is a valid merge patch; only malformed JSON is rejected.
pub fn parse_merge_patch(body: &[u8]) -> Result<JsonValue, PatchError> {
    serde_json::from_slice(body)
        .context("Failed to parse JSON merge patch document")
        .map_err(PatchError::unprocessable)
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
