use std::fmt;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

pub const SUPABASE_URL: &str = env!("SUPABASE_URL");
pub const SUPABASE_ANON_KEY: &str = env!("SUPABASE_ANON_KEY");

const SESSION_STORAGE_KEY: &str = "smartix-session";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
  #[serde(default)]
  pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
  pub id: String,
  pub email: String,
  #[serde(default)]
  pub user_metadata: UserMetadata,
}

impl AuthUser {
  pub fn display_name(&self) -> &str {
    self.user_metadata.full_name.as_deref().unwrap_or(&self.email)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
  pub access_token: String,
  pub user: AuthUser,
}

/// Sign-up either returns a live session or leaves the user waiting on the
/// confirmation mail, depending on the project's email settings.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
  SessionReady(AuthSession),
  ConfirmationEmailSent,
}

#[derive(Debug, Deserialize)]
struct SignUpResponse {
  access_token: Option<String>,
  user: Option<AuthUser>,
}

#[derive(Debug, Deserialize)]
struct AuthErrorResponse {
  error_description: Option<String>,
  msg: Option<String>,
  error: Option<String>,
}

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  AuthConnectionError(String),
  AuthorizationError(String),
  DeserializeError(String),
  StorageError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::AuthConnectionError(msg) => write!(f, "Auth connection error: {}", msg),
      AppError::AuthorizationError(msg) => write!(f, "{}", msg),
      AppError::DeserializeError(msg) => write!(f, "Deserialize error: {}", msg),
      AppError::StorageError(msg) => write!(f, "Storage error: {}", msg),
    }
  }
}

/// Thin client over the hosted GoTrue REST surface. The app treats the
/// service as opaque: a success closes the modal, a failure is shown to the
/// user verbatim, nothing is retried.
pub struct AuthClient {
  client: reqwest::Client,
  base_url: String,
  anon_key: String,
}

impl AuthClient {
  pub fn new(client: reqwest::Client, base_url: &str, anon_key: &str) -> Self {
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      anon_key: anon_key.to_string(),
    }
  }

  pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
    let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
    let resp = self
      .client
      .post(&url)
      .header("apikey", &self.anon_key)
      .json(&serde_json::json!({ "email": email, "password": password }))
      .send()
      .await
      .map_err(|e| AppError::AuthConnectionError(e.to_string()))?;

    if !resp.status().is_success() {
      return Err(AppError::AuthorizationError(Self::error_message(resp).await));
    }
    resp
      .json::<AuthSession>()
      .await
      .map_err(|e| AppError::DeserializeError(e.to_string()))
  }

  pub async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<SignUpOutcome, AppError> {
    let url = format!("{}/auth/v1/signup", self.base_url);
    let resp = self
      .client
      .post(&url)
      .header("apikey", &self.anon_key)
      .json(&serde_json::json!({
        "email": email,
        "password": password,
        "data": { "full_name": full_name }
      }))
      .send()
      .await
      .map_err(|e| AppError::AuthConnectionError(e.to_string()))?;

    if !resp.status().is_success() {
      return Err(AppError::AuthorizationError(Self::error_message(resp).await));
    }

    let body = resp
      .json::<SignUpResponse>()
      .await
      .map_err(|e| AppError::DeserializeError(e.to_string()))?;

    match (body.access_token, body.user) {
      (Some(access_token), Some(user)) => Ok(SignUpOutcome::SessionReady(AuthSession { access_token, user })),
      _ => Ok(SignUpOutcome::ConfirmationEmailSent),
    }
  }

  pub async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
    let url = format!("{}/auth/v1/logout", self.base_url);
    self
      .client
      .post(&url)
      .header("apikey", &self.anon_key)
      .bearer_auth(access_token)
      .send()
      .await
      .map_err(|e| AppError::AuthConnectionError(e.to_string()))?;
    Ok(())
  }

  async fn error_message(resp: reqwest::Response) -> String {
    match resp.json::<AuthErrorResponse>().await {
      Ok(body) => body
        .error_description
        .or(body.msg)
        .or(body.error)
        .unwrap_or_else(|| "Authentication failed".to_string()),
      Err(_) => "Authentication failed".to_string(),
    }
  }
}

/// Session flag shared through the component tree; `modal_open` starts true
/// whenever no stored session is found so the modal shows on load.
#[derive(Clone, Copy)]
pub struct AuthState {
  pub session: Signal<Option<AuthSession>>,
  pub modal_open: Signal<bool>,
}

pub fn load_session() -> Option<AuthSession> {
  let raw = window()?
    .local_storage()
    .ok()??
    .get_item(SESSION_STORAGE_KEY)
    .ok()??;

  match serde_json::from_str(&raw) {
    Ok(session) => Some(session),
    Err(e) => {
      warn!("discarding unreadable stored session: {}", e);
      None
    }
  }
}

pub fn store_session(session: &AuthSession) -> Result<(), AppError> {
  let raw = serde_json::to_string(session).map_err(|e| AppError::StorageError(e.to_string()))?;
  let storage = window()
    .and_then(|w| w.local_storage().ok().flatten())
    .ok_or_else(|| AppError::StorageError("localStorage unavailable".to_string()))?;
  storage
    .set_item(SESSION_STORAGE_KEY, &raw)
    .map_err(|e| AppError::StorageError(format!("{:?}", e)))
}

pub fn clear_session() {
  if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
    if let Err(e) = storage.remove_item(SESSION_STORAGE_KEY) {
      warn!("failed to clear stored session: {:?}", e);
    }
  }
}
