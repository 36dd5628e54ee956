use serde::Serialize;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

const SCHEMA_FIELD: &str = "__all__";

/// Runs declarative constraint checks against a typed value.
///
/// The full violation set is returned so callers can report every failing
/// field at once.
pub trait BeanValidator: Send + Sync {
    fn validate<T: Validate>(&self, bean: &T) -> Result<(), ValidationErrors>;
}

/// Validator that evaluates the rules declared with `#[derive(Validate)]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintValidator;

impl BeanValidator for ConstraintValidator {
    fn validate<T: Validate>(&self, bean: &T) -> Result<(), ValidationErrors> {
        bean.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: String,
    pub code: String,
    pub message: String,
}

/// Flattens nested validation errors into one record per failed constraint.
///
/// Paths use `.` between fields and `[n]` for list items, e.g.
/// `modules[1].code`. Struct-level errors keep the path of the struct they
/// were raised on. Output is sorted by path, then code.
pub fn violations(errors: &ValidationErrors) -> Vec<Violation> {
    let mut collected = Vec::new();
    collect(errors, "", &mut collected);
    collected.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.code.cmp(&b.code)));
    collected
}

/// Number of failed constraints, counted the same way [`violations`] flattens them.
pub fn violation_count(errors: &ValidationErrors) -> usize {
    errors
        .errors()
        .values()
        .map(|kind| match kind {
            ValidationErrorsKind::Field(field_errors) => field_errors.len(),
            ValidationErrorsKind::Struct(nested) => violation_count(nested),
            ValidationErrorsKind::List(items) => items.values().map(|n| violation_count(n)).sum(),
        })
        .sum()
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<Violation>) {
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        let path = if field == SCHEMA_FIELD {
            prefix.to_string()
        } else {
            join(prefix, &field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for field '{}'", path));

                    out.push(Violation {
                        path: path.clone(),
                        code: error.code.to_string(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

fn join(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
