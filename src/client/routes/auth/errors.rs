//! Maps server-side validation failures onto the auth form's field messages.

use dioxus_logger::tracing;

use crate::{
    client::i18n::errors,
    model::api::{PredicateDto, ValidationErrors},
};

/// Message shown under each auth form input, empty when the field is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub email: String,
    pub password: String,
    pub name: String,
    pub website: String,
}

fn first_predicate(predicates: &[PredicateDto]) -> Option<&str> {
    predicates.first().map(|p| p.predicate.as_str())
}

fn email_message(predicate: Option<&str>) -> &'static str {
    match predicate {
        Some("filled?") => errors::EMAIL_EMPTY,
        Some("email?") => errors::EMAIL_INVALID,
        Some("unique?") => errors::EMAIL_USED,
        _ => errors::EMAIL_OTHER,
    }
}

fn password_message(predicate: Option<&str>) -> &'static str {
    match predicate {
        Some("filled?") => errors::PASSWORD_EMPTY,
        Some("valid?") => errors::PASSWORD_WRONG,
        Some("min_size?") => errors::PASSWORD_SHORT,
        _ => errors::PASSWORD_OTHER,
    }
}

fn name_message(predicate: Option<&str>) -> &'static str {
    match predicate {
        Some("filled?") => errors::ORG_NAME_EMPTY,
        _ => errors::ORG_NAME_OTHER,
    }
}

fn website_message(predicate: Option<&str>) -> &'static str {
    match predicate {
        Some("filled?") => errors::WEBSITE_EMPTY,
        _ => errors::WEBSITE_OTHER,
    }
}

/// Builds field messages from the validation errors of a failed auth request.
///
/// Only the first failed predicate of each field is shown. Fields the form does
/// not render are logged and skipped. A failure that carried no validation body
/// at all (wrong credentials, unknown account, network error) is reported as an
/// unknown email.
///
/// # Arguments
/// - `validation` - Field errors from [`ApiError::validation_errors`](crate::client::error::ApiError::validation_errors)
///
/// # Returns
/// A fresh [`FieldErrors`]; messages of fields absent from `validation` are empty
pub fn parse_field_errors(validation: Option<&ValidationErrors>) -> FieldErrors {
    let mut messages = FieldErrors::default();

    let Some(validation) = validation else {
        messages.email = errors::EMAIL_NOT_FOUND.to_string();
        return messages;
    };

    for (field, predicates) in validation {
        let predicate = first_predicate(predicates);

        match field.as_str() {
            "email" => messages.email = email_message(predicate).to_string(),
            "password" => messages.password = password_message(predicate).to_string(),
            "name" => messages.name = name_message(predicate).to_string(),
            "website" => messages.website = website_message(predicate).to_string(),
            other => tracing::warn!("Unhandled validation error for field {}", other),
        }
    }

    messages
}
