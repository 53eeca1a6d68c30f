use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A single failed validation rule reported for a form field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredicateDto {
    /// Name of the failed rule, e.g. `filled?` or `min_size?`
    pub predicate: String,
}

/// Failed validation rules keyed by form field name.
pub type ValidationErrors = BTreeMap<String, Vec<PredicateDto>>;

/// The response body of a request rejected by server-side validation
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorsDto {
    pub errors: ValidationErrors,
}

#[derive(Serialize, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct SignUpDto {
    pub email: String,
    /// Organization name
    pub name: String,
    pub website: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct PasswordResetDto {
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct NewPasswordDto {
    pub password: String,
    /// Token from the `reset_password_token` link sent by email
    pub token: String,
}
