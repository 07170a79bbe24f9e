use serde::{Deserialize, Serialize};

/// One uploaded course file, as returned by `GET /api/fetch`. The file
/// content itself stays server-side; `link` points at the download route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadRecord {
    pub id: String,
    #[serde(rename = "courseName")]
    pub course_name: String,
    pub batch: String,
    pub instructor: String,
    #[serde(rename = "type")]
    pub material_type: String,
    pub remark: String,
    pub link: String,
}

/// Faculty and course reference lists are name-only records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NameRecord {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub username: String,
    pub otp: String,
}

/// The new password travels with the reset request itself; the backend
/// applies it and mails an OTP in the same call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgetRequest {
    pub username: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendRequest {
    pub username: String,
}

/// Success/failure envelope the backend wraps plain responses in. Either
/// field may be missing depending on the endpoint and outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload half of the session JWT. Decoded client-side for display only,
/// never verified here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub username: String,
}

pub mod choices;
pub mod listing;
pub mod material;
pub mod otp;
pub mod session;

#[cfg(target_family = "wasm")]
pub mod api;
#[cfg(target_family = "wasm")]
pub mod app;
#[cfg(target_family = "wasm")]
pub mod auth;
#[cfg(target_family = "wasm")]
pub mod browse;
#[cfg(target_family = "wasm")]
pub mod upload;

#[cfg(target_family = "wasm")]
pub use app::run;
