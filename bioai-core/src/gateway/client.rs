use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::navigator::Navigator;
use super::transport::{ApiRequest, Method, RawResponse, RequestBody, Transport};
use crate::error::ApiError;
use crate::models::{
    AnalysisResult, AnalyzeRequest, HistoryRecord, LoginRequest, LoginResponse, RegisterRequest,
    SequenceType, UploadFile,
};
use crate::routes::LOGIN_ROUTE;
use crate::session::{Session, SessionStore};

pub const GENERIC_FALLBACK: &str = "Something went wrong. Please try again.";
pub const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
pub const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";
pub const ANALYZE_FALLBACK: &str = "Analysis failed. Please try again.";
pub const UPLOAD_FALLBACK: &str = "File upload failed. Please try again.";
pub const HISTORY_FALLBACK: &str = "Unable to load analysis history";
pub const ANALYSIS_FALLBACK: &str = "Unable to load analysis";
pub const DELETE_FALLBACK: &str = "Unable to delete analysis";

/// Single entry point for backend calls.
///
/// Attaches the bearer token, decodes 2xx bodies and normalizes every failure
/// into an [`ApiError`]. A 401 clears the session and sends the user to the
/// login view unless they are already on a public route. Each call is made
/// exactly once; nothing here retries.
pub struct Gateway<T> {
    transport: T,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T, session: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            transport,
            session,
            navigator,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Issue `method path` with an optional body and decode the 2xx response as `R`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<R, ApiError> {
        self.send(method, path, body, GENERIC_FALLBACK).await
    }

    /// Authenticate and establish the session from the returned token and user.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let body = json_body(&LoginRequest { email, password })?;
        let response: LoginResponse = self
            .send(Method::Post, "/auth/login", body, LOGIN_FALLBACK)
            .await?;
        Ok(self.session.establish(response.access_token, response.user))
    }

    /// Create an account. The response shape is backend-defined and returned as-is.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let body = json_body(&RegisterRequest {
            name,
            email,
            password,
        })?;
        self.send(Method::Post, "/auth/register", body, REGISTER_FALLBACK)
            .await
    }

    pub async fn analyze(
        &self,
        sequence: &str,
        sequence_type: SequenceType,
    ) -> Result<AnalysisResult, ApiError> {
        let body = json_body(&AnalyzeRequest {
            sequence,
            sequence_type,
        })?;
        self.send(Method::Post, "/analyze", body, ANALYZE_FALLBACK)
            .await
    }

    pub async fn upload(
        &self,
        file: UploadFile,
        sequence_type: SequenceType,
    ) -> Result<AnalysisResult, ApiError> {
        let body = RequestBody::Multipart {
            file,
            fields: vec![("type".to_string(), sequence_type.as_str().to_string())],
        };
        self.send(Method::Post, "/upload", body, UPLOAD_FALLBACK)
            .await
    }

    pub async fn history(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        self.send(Method::Get, "/history", RequestBody::Empty, HISTORY_FALLBACK)
            .await
    }

    pub async fn analysis(&self, id: i64) -> Result<HistoryRecord, ApiError> {
        let path = format!("/history/{}", id);
        self.send(Method::Get, &path, RequestBody::Empty, ANALYSIS_FALLBACK)
            .await
    }

    pub async fn delete_analysis(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/history/{}", id);
        self.send(Method::Delete, &path, RequestBody::Empty, DELETE_FALLBACK)
            .await
    }

    async fn send<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        fallback: &str,
    ) -> Result<R, ApiError> {
        let request = ApiRequest {
            method,
            path: path.to_string(),
            bearer: self.session.token(),
            body,
        };

        debug!("{} {}", method, path);
        let response = self.transport.send(request).await.map_err(|e| {
            warn!("{} {} got no response: {}", method, path, e);
            ApiError::Unreachable
        })?;

        if response.is_success() {
            return decode(&response);
        }

        let message = server_message(&response.body).unwrap_or_else(|| fallback.to_string());
        if response.status == 401 {
            self.handle_unauthorized();
            return Err(ApiError::Unauthorized { message });
        }

        warn!("{} {} failed with {}: {}", method, path, response.status, message);
        Err(ApiError::Server {
            status: response.status,
            message,
        })
    }

    fn handle_unauthorized(&self) {
        self.session.clear();
        let current = self.navigator.current_path();
        if !self.navigator.is_public_route(&current) {
            info!("Unauthorized on {}, redirecting to {}", current, LOGIN_ROUTE);
            self.navigator.navigate(LOGIN_ROUTE);
        }
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_value(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

/// An empty 2xx body decodes as JSON `null`, so `()` works for 204 responses.
fn decode<R: DeserializeOwned>(response: &RawResponse) -> Result<R, ApiError> {
    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        &response.body
    };
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Error text from a `message` or, failing that, a `detail` string field.
pub fn server_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["message", "detail"]
        .iter()
        .filter_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
