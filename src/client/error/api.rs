use thiserror::Error;

use crate::model::api::{ErrorDto, ValidationErrors, ValidationErrorsDto};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network failure, CORS, aborted fetch).
    #[error("Failed to send request: {0}")]
    Request(String),
    /// The response body did not match the expected type.
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Request body could not be serialized: {0}")]
    Serialize(String),
    /// No valid session cookie, or the credentials were rejected.
    #[error("Not authenticated")]
    Unauthorized,
    /// Server-side validation rejected one or more form fields.
    #[error("Validation failed for fields: {}", .0.keys().cloned().collect::<Vec<_>>().join(", "))]
    Validation(ValidationErrors),
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// The field errors carried by a validation failure, if any.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ApiError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Classifies an unsuccessful response into an [`ApiError`].
///
/// The body is tried, in order, as a wrapped `{"errors": {...}}` validation body,
/// a bare field map of failed predicates, and an [`ErrorDto`]. A 422 with none of
/// the validation shapes is still `Validation`, with no fields. Anything else is
/// carried through as raw text.
///
/// # Arguments
/// - `status` - HTTP status code of the response
/// - `body` - Raw response body, possibly empty
pub fn classify_error(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }

    if let Ok(dto) = serde_json::from_str::<ValidationErrorsDto>(body) {
        return ApiError::Validation(dto.errors);
    }

    if let Ok(errors) = serde_json::from_str::<ValidationErrors>(body) {
        if !errors.is_empty() || status == 422 {
            return ApiError::Validation(errors);
        }
    }

    if status == 422 {
        return ApiError::Validation(ValidationErrors::new());
    }

    if let Ok(dto) = serde_json::from_str::<ErrorDto>(body) {
        return ApiError::Status {
            status,
            message: dto.error,
        };
    }

    let message = if body.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        body.trim().to_string()
    };

    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod classify_error {
        use super::*;

        /// Expected: `Unauthorized` regardless of body
        #[test]
        fn maps_401_to_unauthorized() {
            let result = classify_error(401, r#"{"error":"bad session"}"#);
            assert_eq!(result, ApiError::Unauthorized);
        }

        /// Verifies that a wrapped validation body keeps every field and predicate.
        #[test]
        fn parses_wrapped_validation_body() {
            let body = r#"{"errors":{"email":[{"predicate":"filled?"}],"password":[{"predicate":"min_size?"}]}}"#;

            let result = classify_error(422, body);
            let errors = result.validation_errors().unwrap();

            assert_eq!(errors.len(), 2);
            assert_eq!(errors["email"][0].predicate, "filled?");
            assert_eq!(errors["password"][0].predicate, "min_size?");
        }

        /// Verifies that a bare field map is accepted as validation errors.
        #[test]
        fn parses_bare_field_map() {
            let body = r#"{"website":[{"predicate":"filled?"}]}"#;

            let result = classify_error(400, body);

            assert_eq!(result.validation_errors().unwrap()["website"][0].predicate, "filled?");
        }

        /// Expected: a 422 is always `Validation`, empty when the body has no field map
        #[test]
        fn maps_any_422_to_validation() {
            assert_eq!(
                classify_error(422, r#"{"error":"x"}"#),
                ApiError::Validation(ValidationErrors::new())
            );
            assert_eq!(
                classify_error(422, ""),
                ApiError::Validation(ValidationErrors::new())
            );
        }

        /// Expected: `Status` carrying the `error` field
        #[test]
        fn parses_error_dto() {
            let result = classify_error(500, r#"{"error":"Internal server error"}"#);

            assert_eq!(
                result,
                ApiError::Status {
                    status: 500,
                    message: "Internal server error".to_string()
                }
            );
        }

        /// Expected: `Status` with a generic message for an empty body
        #[test]
        fn falls_back_to_raw_text() {
            assert_eq!(
                classify_error(502, "Bad Gateway"),
                ApiError::Status {
                    status: 502,
                    message: "Bad Gateway".to_string()
                }
            );
            assert_eq!(
                classify_error(404, ""),
                ApiError::Status {
                    status: 404,
                    message: "Unknown error".to_string()
                }
            );
        }
    }
}
