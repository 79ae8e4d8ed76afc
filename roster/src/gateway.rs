//! Session-guarded access to the employee backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected call first looks up the stored session token. A missing
//! token aborts the call with [`CallError::Unauthenticated`] before anything
//! touches the [`Transport`]; views turn that into a redirect to the login
//! route. With a token present the request goes out once, carrying
//! `Authorization: Bearer <token>`, and any failure comes back as
//! [`CallError::Failed`] for a generic notification. There is no retry.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::delete_flow::DeleteOutcome;
use crate::endpoint::ApiRequest;
use crate::model::{
    Credentials, Employee, EmployeeDraft, EmployeeId, EmployeeUpdate, LoginResponse, NewAccount, Position,
};

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of a single backend request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// Login succeeded at the HTTP level but carried no token.
    #[error("login response did not include a token")]
    MissingToken,

    /// The session token could not be persisted or removed.
    #[error("token storage failed: {0}")]
    Storage(String),

    /// No transport is available (e.g. during server-side rendering).
    #[error("requests are not available here")]
    Unavailable,
}

/// Outcome of a protected call that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    /// No session token is stored; the caller should send the user to log in.
    #[error("not signed in")]
    Unauthenticated,

    #[error(transparent)]
    Failed(#[from] ApiError),
}

// =============================================================================
// SEAMS
// =============================================================================

/// Executes a prepared request and returns the raw response body.
///
/// Implementations must map non-2xx responses to [`ApiError::Status`].
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: &ApiRequest) -> Result<String, ApiError>;
}

/// Persistent home of the session token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the token cannot be written.
    fn save(&self, token: &str) -> Result<(), ApiError>;

    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the token cannot be removed.
    fn clear(&self) -> Result<(), ApiError>;
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, token: &str) -> Result<(), ApiError> {
        let mut guard = self.token.lock().map_err(|e| ApiError::Storage(e.to_string()))?;
        *guard = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), ApiError> {
        let mut guard = self.token.lock().map_err(|e| ApiError::Storage(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

// =============================================================================
// GATEWAY
// =============================================================================

/// Result of confirming a delete: the request, then a full refetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteReport {
    /// No token; nothing was sent.
    SignedOut,
    /// The delete request failed; the list was not refetched.
    Failed(ApiError),
    /// Deleted and refetched.
    Reloaded(Vec<Employee>),
    /// Deleted, but the follow-up refetch failed.
    ReloadFailed(ApiError),
}

impl DeleteReport {
    /// The delete outcome, or `None` when the session was missing.
    #[must_use]
    pub fn outcome(&self) -> Option<DeleteOutcome> {
        match self {
            Self::SignedOut => None,
            Self::Failed(_) => Some(DeleteOutcome::Failed),
            Self::Reloaded(_) | Self::ReloadFailed(_) => Some(DeleteOutcome::Deleted),
        }
    }
}

pub struct Gateway<T, S> {
    transport: T,
    tokens: S,
}

impl<T: Transport, S: TokenStore> Gateway<T, S> {
    pub fn new(transport: T, tokens: S) -> Self {
        Self { transport, tokens }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Whether a session token is currently stored.
    pub fn is_signed_in(&self) -> bool {
        self.token().is_ok()
    }

    fn token(&self) -> Result<String, CallError> {
        self.tokens
            .load()
            .filter(|token| !token.is_empty())
            .ok_or(CallError::Unauthenticated)
    }

    async fn authed(&self, request: ApiRequest) -> Result<String, CallError> {
        let token = self.token()?;
        let request = request.with_bearer(&token);
        Ok(self.transport.execute(&request).await?)
    }

    /// Exchange credentials for a session token and store it.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails, the response has no
    /// token, or the token cannot be stored.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let request = ApiRequest::login(encode(credentials)?);
        let body = self.transport.execute(&request).await?;
        let response: LoginResponse = decode(&body)?;
        let token = response
            .token
            .filter(|token| !token.is_empty())
            .ok_or(ApiError::MissingToken)?;
        self.tokens.save(&token)
    }

    /// Register a new user account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails.
    pub async fn register(&self, account: &NewAccount) -> Result<(), ApiError> {
        let request = ApiRequest::register(encode(account)?);
        self.transport.execute(&request).await?;
        Ok(())
    }

    /// Forget the session token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the token cannot be removed.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.tokens.clear()
    }

    /// # Errors
    ///
    /// [`CallError::Unauthenticated`] without a token, otherwise
    /// [`CallError::Failed`] on any request or parse failure.
    pub async fn employees(&self) -> Result<Vec<Employee>, CallError> {
        let body = self.authed(ApiRequest::list_employees()).await?;
        Ok(decode(&body)?)
    }

    /// # Errors
    ///
    /// See [`Gateway::employees`].
    pub async fn employee(&self, id: EmployeeId) -> Result<Employee, CallError> {
        let body = self.authed(ApiRequest::employee(id)).await?;
        Ok(decode(&body)?)
    }

    /// # Errors
    ///
    /// See [`Gateway::employees`].
    pub async fn positions(&self) -> Result<Vec<Position>, CallError> {
        let body = self.authed(ApiRequest::positions()).await?;
        Ok(decode(&body)?)
    }

    /// # Errors
    ///
    /// See [`Gateway::employees`].
    pub async fn create_employee(&self, draft: &EmployeeDraft) -> Result<(), CallError> {
        let request = ApiRequest::create_employee(encode(draft)?);
        self.authed(request).await?;
        Ok(())
    }

    /// Send the full record; the backend replaces every field.
    ///
    /// # Errors
    ///
    /// See [`Gateway::employees`].
    pub async fn update_employee(&self, id: EmployeeId, draft: &EmployeeDraft) -> Result<(), CallError> {
        let body = encode(&EmployeeUpdate { employee_id: id, draft })?;
        self.authed(ApiRequest::update_employee(id, body)).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// See [`Gateway::employees`].
    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), CallError> {
        self.authed(ApiRequest::delete_employee(id)).await?;
        Ok(())
    }

    /// Delete `id`, then refetch the whole collection on success.
    pub async fn delete_and_reload(&self, id: EmployeeId) -> DeleteReport {
        match self.delete_employee(id).await {
            Err(CallError::Unauthenticated) => DeleteReport::SignedOut,
            Err(CallError::Failed(error)) => DeleteReport::Failed(error),
            Ok(()) => match self.employees().await {
                Ok(items) => DeleteReport::Reloaded(items),
                Err(CallError::Unauthenticated) => DeleteReport::SignedOut,
                Err(CallError::Failed(error)) => DeleteReport::ReloadFailed(error),
            },
        }
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
