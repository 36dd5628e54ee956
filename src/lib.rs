pub mod config;
pub mod converter;
pub mod document;
pub mod errors;
pub mod services;
pub mod utils;
pub mod validation;

pub use config::{Config, PatchLimits};
pub use converter::{ConversionError, Converter, JsonConverter};
pub use errors::PatchError;
pub use services::PatchHelper;
pub use validation::{BeanValidator, ConstraintValidator, Violation};
