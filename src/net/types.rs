#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /ask`.
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub message: &'a str,
    pub language: &'a str,
}

/// Success body of `POST /ask`.
#[derive(Debug, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

/// Body of `POST /login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Failure body shared by `/ask` and `/login`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `GET /check-login`.
#[derive(Debug, Deserialize)]
pub struct CheckLoginResponse {
    pub logged_in: bool,
}
