//! Authentication, authorization and account endpoints.

use reqwasm::http::Request;

use crate::{
    client::{error::ApiError, service::ApiClient},
    model::{
        api::{LoginDto, NewPasswordDto, PasswordResetDto, SignUpDto},
        user::UserDto,
    },
};

use super::request;

impl ApiClient {
    /// Retrieve the user owning the current session cookie
    pub async fn get_current_user(&self) -> Result<UserDto, ApiError> {
        request::get_json(&self.url("users/current")).await
    }

    /// Start a session with email & password credentials
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let url = self.url("sessions");
        let body = LoginDto {
            email: email.to_string(),
            password: password.to_string(),
        };

        request::send_json(Request::post(&url), &url, &body).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        request::delete(&self.url("sessions")).await
    }

    /// Register an organization account, a confirmation email is sent on success
    pub async fn create_user(
        &self,
        email: &str,
        name: &str,
        website: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let url = self.url("users");
        let body = SignUpDto {
            email: email.to_string(),
            name: name.to_string(),
            website: website.to_string(),
            password: password.to_string(),
        };

        request::send_json(Request::post(&url), &url, &body).await
    }

    /// Request a password reset link to be emailed
    pub async fn reset_password(&self, email: &str) -> Result<(), ApiError> {
        let url = self.url("passwords");
        let body = PasswordResetDto {
            email: email.to_string(),
        };

        request::send_json(Request::post(&url), &url, &body).await
    }

    /// Set a new password using the token from a reset link
    pub async fn create_password(&self, password: &str, token: &str) -> Result<(), ApiError> {
        let url = self.url("passwords");
        let body = NewPasswordDto {
            password: password.to_string(),
            token: token.to_string(),
        };

        request::send_json(Request::put(&url), &url, &body).await
    }
}
