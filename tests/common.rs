#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Applicant {
    #[validate(length(min = 2, max = 64))]
    pub name: String,
    #[validate(required(message = "age is required"), range(min = 18, message = "applicant must be an adult"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[validate(email)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(nested)]
    pub address: Address,
    #[validate(nested)]
    #[serde(default)]
    pub modules: Vec<Module>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Address {
    #[validate(length(min = 1))]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

fn validate_score(module: &Module) -> Result<(), ValidationError> {
    if module.score > module.max_score {
        let mut error = ValidationError::new("score_out_of_range");
        error.message = Some("score cannot exceed max_score".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_score"))]
pub struct Module {
    #[validate(length(min = 2, max = 12))]
    pub code: String,
    pub score: u32,
    pub max_score: u32,
}

pub fn module(code: &str, score: u32) -> Module {
    Module {
        code: code.to_string(),
        score,
        max_score: 100,
    }
}

pub fn applicant() -> Applicant {
    Applicant {
        name: "Ana".to_string(),
        age: Some(17),
        email: Some("ana@example.com".to_string()),
        address: Address {
            city: "Lima".to_string(),
            zip: Some("15001".to_string()),
        },
        modules: vec![module("RS-101", 80)],
    }
}
