use crate::{
    config::{Config, PatchLimits},
    converter::{Converter, JsonConverter},
    errors::PatchError,
    utils::json_utils,
    validation::{self, BeanValidator, ConstraintValidator},
};
use json_patch::Patch;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as JsonValue;
use std::any;
use tracing::{debug, warn};
use validator::Validate;

/// Applies JSON Patch and JSON Merge Patch documents to typed values and
/// validates the outcome.
///
/// The helper never mutates the value it is given. Either a new value that
/// satisfies every declared constraint comes back, or the call fails with
/// [`PatchError::Unprocessable`] or [`PatchError::Validation`].
#[derive(Debug, Clone)]
pub struct PatchHelper<C = JsonConverter, V = ConstraintValidator> {
    converter: C,
    validator: V,
    limits: PatchLimits,
}

impl Default for PatchHelper {
    fn default() -> Self {
        Self::new(JsonConverter, ConstraintValidator)
    }
}

impl PatchHelper {
    pub fn from_config(config: &Config) -> Self {
        Self::with_limits(JsonConverter, ConstraintValidator, config.limits())
    }
}

impl<C, V> PatchHelper<C, V>
where
    C: Converter,
    V: BeanValidator,
{
    pub fn new(converter: C, validator: V) -> Self {
        Self::with_limits(converter, validator, PatchLimits::default())
    }

    pub fn with_limits(converter: C, validator: V, limits: PatchLimits) -> Self {
        Self {
            converter,
            validator,
            limits,
        }
    }

    pub fn limits(&self) -> PatchLimits {
        self.limits
    }

    /// Performs a JSON Patch operation.
    ///
    /// The target must serialize to an object or an array.
    pub fn patch<T>(&self, patch: &Patch, target: &T) -> Result<T, PatchError>
    where
        T: Serialize + DeserializeOwned + Validate,
    {
        let document = self.converter.to_value(target)?;

        if !json_utils::is_structure(&document) {
            warn!(
                target_type = any::type_name::<T>(),
                "JSON patch target is not an object or array"
            );
            return Err(PatchError::unprocessable(anyhow::anyhow!(
                "JSON patch target {} must be an object or array",
                any::type_name::<T>()
            )));
        }

        let patched = self.apply_patch(patch, &document)?;
        self.convert_and_validate(patched)
    }

    /// Performs a JSON Merge Patch operation.
    pub fn merge_patch<T>(&self, merge_patch: &JsonValue, target: &T) -> Result<T, PatchError>
    where
        T: Serialize + DeserializeOwned + Validate,
    {
        let document = self.converter.to_value(target)?;
        let patched = self.apply_merge_patch(merge_patch, &document)?;
        self.convert_and_validate(patched)
    }

    fn apply_patch(&self, patch: &Patch, document: &JsonValue) -> Result<JsonValue, PatchError> {
        let operations = patch.0.len();

        if operations > self.limits.max_operations {
            warn!(
                operations,
                max_operations = self.limits.max_operations,
                "Rejecting JSON patch with too many operations"
            );
            return Err(PatchError::unprocessable(anyhow::anyhow!(
                "JSON patch has {} operations, at most {} are allowed",
                operations,
                self.limits.max_operations
            )));
        }

        debug!(operations, "Applying JSON patch");

        json_utils::apply_patch(document, patch).map_err(|err| {
            warn!(error = ?err, "JSON patch could not be applied");
            PatchError::unprocessable(err)
        })
    }

    fn apply_merge_patch(
        &self,
        merge_patch: &JsonValue,
        document: &JsonValue,
    ) -> Result<JsonValue, PatchError> {
        let depth = json_utils::depth(merge_patch);

        if depth > self.limits.max_merge_depth {
            warn!(
                depth,
                max_merge_depth = self.limits.max_merge_depth,
                "Rejecting JSON merge patch nested too deeply"
            );
            return Err(PatchError::unprocessable(anyhow::anyhow!(
                "JSON merge patch is nested {} levels deep, at most {} are allowed",
                depth,
                self.limits.max_merge_depth
            )));
        }

        debug!(depth, "Applying JSON merge patch");

        Ok(json_utils::apply_merge_patch(document, merge_patch))
    }

    fn convert_and_validate<T>(&self, value: JsonValue) -> Result<T, PatchError>
    where
        T: DeserializeOwned + Validate,
    {
        let bean: T = self.converter.from_value(value).map_err(|err| {
            warn!(error = %err, "Patched document does not match the target type");
            PatchError::from(err)
        })?;

        if let Err(errors) = self.validator.validate(&bean) {
            warn!(
                target_type = any::type_name::<T>(),
                violations = validation::violation_count(&errors),
                "Patched value failed validation"
            );
            return Err(PatchError::Validation(errors));
        }

        Ok(bean)
    }
}

#[cfg(test)]
#[path = "patch_services_tests.rs"]
mod tests;
