use crate::client::{error::ApiError, routes::auth::errors::{parse_field_errors, FieldErrors}};

/// Which screen of the auth form is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    SignIn,
    SignUp,
    /// Choose a new password using a token from a reset link
    Reset,
    /// Request a reset link by email
    Recovery,
}

/// Local state of the auth form for the duration of a visit to `/auth`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthFormState {
    pub tab: AuthTab,
    pub is_loading: bool,
    pub is_error: bool,
    pub email: String,
    pub password: String,
    pub new_password: String,
    pub name: String,
    pub website: String,
    pub token: String,
    pub errors: FieldErrors,
}

impl AuthFormState {
    /// Initial state, opening the reset tab when the page was reached from a reset link.
    pub fn new(reset_password_token: &str) -> Self {
        let mut state = Self::default();
        let token = reset_password_token.trim();

        if !token.is_empty() {
            state.token = token.to_string();
            state.go_to(AuthTab::Reset);
        }

        state
    }

    pub fn go_to(&mut self, tab: AuthTab) {
        self.tab = tab;
        self.is_error = false;
    }

    /// Marks a request as in flight.
    pub fn begin_request(&mut self) {
        self.is_error = false;
        self.is_loading = true;
    }

    /// Records a failed request, replacing every field message.
    pub fn fail_request(&mut self, error: &ApiError) {
        self.errors = parse_field_errors(error.validation_errors());
        self.is_error = true;
        self.is_loading = false;
    }

    pub fn finish_request(&mut self) {
        self.is_loading = false;
    }

    /// Message to show under a field, hidden unless the last request failed.
    pub fn visible_error<'a>(&self, message: &'a str) -> Option<&'a str> {
        (self.is_error && !message.is_empty()).then_some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::i18n::errors,
        model::api::{PredicateDto, ValidationErrors},
    };

    fn validation(field: &str, predicate: &str) -> ApiError {
        let mut errors = ValidationErrors::new();
        errors.insert(
            field.to_string(),
            vec![PredicateDto {
                predicate: predicate.to_string(),
            }],
        );
        ApiError::Validation(errors)
    }

    mod new {
        use super::*;

        /// Expected: sign-in tab with no token
        #[test]
        fn starts_on_sign_in() {
            let state = AuthFormState::new("");

            assert_eq!(state.tab, AuthTab::SignIn);
            assert_eq!(state.token, "");
        }

        /// Verifies a reset link token is kept and opens the reset tab.
        #[test]
        fn opens_reset_tab_with_token() {
            let state = AuthFormState::new(" abc123 ");

            assert_eq!(state.tab, AuthTab::Reset);
            assert_eq!(state.token, "abc123");
            assert!(!state.is_error);
        }
    }

    mod transitions {
        use super::*;

        /// Verifies switching tabs hides errors from the previous tab.
        #[test]
        fn switching_tab_clears_error() {
            let mut state = AuthFormState::new("");
            state.begin_request();
            state.fail_request(&validation("email", "filled?"));
            assert!(state.is_error);

            state.go_to(AuthTab::SignUp);

            assert_eq!(state.tab, AuthTab::SignUp);
            assert!(!state.is_error);
            assert_eq!(state.visible_error(&state.errors.email), None);
        }

        /// Verifies that a failed request stops loading and exposes the message.
        #[test]
        fn failed_request_sets_messages() {
            let mut state = AuthFormState::new("");
            state.begin_request();
            assert!(state.is_loading);

            state.fail_request(&validation("password", "min_size?"));

            assert!(!state.is_loading);
            assert!(state.is_error);
            assert_eq!(
                state.visible_error(&state.errors.password),
                Some(errors::PASSWORD_SHORT)
            );
            assert_eq!(state.visible_error(&state.errors.email), None);
        }

        /// Verifies messages from an earlier failure do not leak into the next one.
        #[test]
        fn failure_replaces_previous_messages() {
            let mut state = AuthFormState::new("");
            state.fail_request(&validation("name", "filled?"));
            state.fail_request(&ApiError::Unauthorized);

            assert_eq!(state.errors.name, "");
            assert_eq!(state.errors.email, errors::EMAIL_NOT_FOUND);
        }

        /// Expected: beginning a new request hides the previous error
        #[test]
        fn begin_request_clears_error() {
            let mut state = AuthFormState::new("");
            state.fail_request(&ApiError::Request("offline".to_string()));

            state.begin_request();

            assert!(!state.is_error);
            assert!(state.is_loading);
        }
    }
}
