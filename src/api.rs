//! Thin client over the EduWise REST backend. Every helper resolves to
//! `Result<T, String>` with a user-displayable message; callers decide
//! whether that becomes an alert or an inline error. No retries, no
//! backoff, no cancellation of in-flight requests.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use web_sys::FormData;

use crate::session::{self, institutional_address};
use crate::{
    ApiMessage, ForgetRequest, LoginRequest, LoginResponse, NameRecord, RegisterRequest,
    ResendRequest, UploadRecord, VerifyRequest,
};

/// Base URL of the EduWise REST backend.
pub const API_BASE: &str = "https://edu-wise-backend.onrender.com";

fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Scalar metadata accompanying an uploaded file.
#[derive(Debug, Clone, Default)]
pub struct UploadFields {
    pub course_name: String,
    pub batch: String,
    pub instructor: String,
    pub material_type: String,
    pub remark: String,
}

async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<Response, String> {
    let payload =
        serde_json::to_string(body).map_err(|e| format!("Serialization error: {e:?}"))?;
    Request::post(&endpoint(path))
        .header("Content-Type", "application/json")
        .body(payload)
        .map_err(|e| format!("Request body error: {e:?}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e:?}"))
}

/// Best display string for a failed call: the body's `error` or `message`
/// field when the backend supplied one, else the caller's fallback.
async fn failure_text(response: Response, fallback: &str) -> String {
    if let Ok(body) = response.json::<ApiMessage>().await {
        if let Some(error) = body.error {
            return error;
        }
        if let Some(message) = body.message {
            return message;
        }
    }
    fallback.to_string()
}

pub async fn login(username: &str, password: &str) -> Result<LoginResponse, String> {
    let request = LoginRequest {
        username: institutional_address(username),
        password: password.to_string(),
    };
    let response = post_json("/api/login", &request).await?;
    if response.status() == 200 {
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| format!("Failed to parse login response: {e:?}"))
    } else {
        Err(failure_text(response, "Login failed. Please try again.").await)
    }
}

pub async fn register(username: &str, password: &str) -> Result<(), String> {
    let request = RegisterRequest {
        username: institutional_address(username),
        password: password.to_string(),
    };
    let response = post_json("/api/register", &request).await?;
    if response.status() == 200 {
        Ok(())
    } else {
        Err(failure_text(response, "Registration failed. Please try again.").await)
    }
}

pub async fn verify_otp(username: &str, otp: &str) -> Result<(), String> {
    let request = VerifyRequest {
        username: institutional_address(username),
        otp: otp.to_string(),
    };
    let response = post_json("/api/verify", &request).await?;
    if response.status() == 200 {
        Ok(())
    } else {
        Err(failure_text(response, "OTP verification failed. Please try again.").await)
    }
}

/// Returns the backend's confirmation message for the success alert.
pub async fn forget_password(username: &str, new_password: &str) -> Result<String, String> {
    let request = ForgetRequest {
        username: institutional_address(username),
        new_password: new_password.to_string(),
    };
    let response = post_json("/api/forget", &request).await?;
    if response.status() == 200 {
        let body = response.json::<ApiMessage>().await.unwrap_or_default();
        Ok(body
            .message
            .unwrap_or_else(|| "OTP sent successfully".to_string()))
    } else {
        Err(failure_text(response, "Password reset failed. Please try again.").await)
    }
}

pub async fn resend_otp(username: &str) -> Result<(), String> {
    let request = ResendRequest {
        username: institutional_address(username),
    };
    let response = post_json("/api/resend", &request).await?;
    if response.status() == 200 {
        Ok(())
    } else {
        Err(failure_text(response, "Failed to resend OTP. Please try again.").await)
    }
}

pub async fn fetch_uploads() -> Result<Vec<UploadRecord>, String> {
    let response = Request::get(&endpoint("/api/fetch"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e:?}"))?;
    if response.status() == 200 {
        // an empty collection arrives as JSON null
        response
            .json::<Option<Vec<UploadRecord>>>()
            .await
            .map(Option::unwrap_or_default)
            .map_err(|e| format!("Failed to parse upload list: {e:?}"))
    } else {
        Err(format!("Fetch failed with status: {}", response.status()))
    }
}

pub async fn fetch_faculty() -> Result<Vec<NameRecord>, String> {
    fetch_names("/api/faculty").await
}

pub async fn fetch_courses() -> Result<Vec<NameRecord>, String> {
    fetch_names("/api/courses").await
}

async fn fetch_names(path: &str) -> Result<Vec<NameRecord>, String> {
    let response = Request::get(&endpoint(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {e:?}"))?;
    if response.status() == 200 {
        response
            .json::<Option<Vec<NameRecord>>>()
            .await
            .map(Option::unwrap_or_default)
            .map_err(|e| format!("Failed to parse name list: {e:?}"))
    } else {
        Err(format!("Fetch failed with status: {}", response.status()))
    }
}

pub async fn add_faculty(name: &str) -> Result<(), String> {
    let response = post_json(
        "/api/faculty",
        &NameRecord {
            name: name.to_string(),
        },
    )
    .await?;
    if response.status() == 200 {
        Ok(())
    } else {
        Err(failure_text(response, "Error adding new instructor").await)
    }
}

pub async fn add_course(name: &str) -> Result<(), String> {
    let response = post_json(
        "/api/courses",
        &NameRecord {
            name: name.to_string(),
        },
    )
    .await?;
    if response.status() == 200 {
        Ok(())
    } else {
        Err(failure_text(response, "Error adding new course").await)
    }
}

/// Multipart upload: five scalar parts plus the optional file, with the
/// bearer token and `username` headers the backend expects. The token is
/// read from storage at call time.
pub async fn upload_material(
    fields: &UploadFields,
    file: Option<&gloo_file::File>,
    username: &str,
) -> Result<(), String> {
    let form = FormData::new().map_err(|_| "Failed to create form data")?;
    form.append_with_str("courseName", &fields.course_name)
        .map_err(|_| "Failed to append course name")?;
    form.append_with_str("batch", &fields.batch)
        .map_err(|_| "Failed to append batch")?;
    form.append_with_str("instructor", &fields.instructor)
        .map_err(|_| "Failed to append instructor")?;
    form.append_with_str("type", &fields.material_type)
        .map_err(|_| "Failed to append type")?;
    form.append_with_str("remark", &fields.remark)
        .map_err(|_| "Failed to append remark")?;
    if let Some(file) = file {
        form.append_with_blob("file", file.as_ref())
            .map_err(|_| "Failed to append file")?;
    }

    let token = session::stored_token().unwrap_or_default();
    let response = Request::post(&endpoint("/api/upload"))
        .header("Authorization", &format!("Bearer {token}"))
        .header("username", username)
        .body(form)
        .map_err(|e| format!("Failed to set body: {e:?}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e:?}"))?;
    if response.status() == 200 {
        Ok(())
    } else {
        Err(failure_text(response, "Error uploading data").await)
    }
}
