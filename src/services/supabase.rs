use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::SiteError;
use crate::models::session::{AuthUser, Session, TokenResponse};

/// Thin client for the hosted backend: GoTrue under /auth/v1, PostgREST
/// under /rest/v1. The site owns no durable state; every row lives there.
///
/// Reads go out with the anonymous key. Writes prefer the session's access
/// token so that row-level security on the backend decides what is allowed;
/// this crate enforces no identity rules of its own.
#[derive(Clone)]
pub struct Supabase {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl Supabase {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            anon_key: anon_key.into(),
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn bearer(&self, access_token: Option<&str>) -> String {
        format!("Bearer {}", access_token.unwrap_or(&self.anon_key))
    }

    // ─── Auth collaborator ───────────────────────────────────────────────

    /// Password grant. Credential and network failures come back as the
    /// same error string; the caller cannot tell them apart by design.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, SiteError> {
        let resp = self
            .http
            .post(self.auth_url("token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| SiteError::Mutation(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SiteError::Mutation(failure_text(resp).await));
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| SiteError::Mutation(e.to_string()))?;
        Ok(token.into())
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<(), SiteError> {
        let resp = self
            .http
            .post(self.auth_url("signup"))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| SiteError::Mutation(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SiteError::Mutation(failure_text(resp).await));
        }
        Ok(())
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<(), SiteError> {
        let resp = self
            .http
            .post(self.auth_url("logout"))
            .header("apikey", &self.anon_key)
            .header("Authorization", self.bearer(Some(access_token)))
            .send()
            .await
            .map_err(|e| SiteError::Mutation(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SiteError::Mutation(failure_text(resp).await));
        }
        Ok(())
    }

    /// Resolve an access token to the user it belongs to.
    pub async fn get_user(&self, access_token: &str) -> Result<Session, SiteError> {
        let resp = self
            .http
            .get(self.auth_url("user"))
            .header("apikey", &self.anon_key)
            .header("Authorization", self.bearer(Some(access_token)))
            .send()
            .await
            .map_err(|e| SiteError::Fetch(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SiteError::Fetch(failure_text(resp).await));
        }

        let user: AuthUser = resp
            .json()
            .await
            .map_err(|e| SiteError::Fetch(e.to_string()))?;
        Ok(Session {
            access_token: access_token.to_string(),
            user,
        })
    }

    pub async fn auth_health(&self) -> Result<(), SiteError> {
        let resp = self
            .http
            .get(self.auth_url("health"))
            .header("apikey", &self.anon_key)
            .send()
            .await
            .map_err(|e| SiteError::Fetch(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SiteError::Fetch(failure_text(resp).await));
        }
        Ok(())
    }

    // ─── Table collaborator ──────────────────────────────────────────────

    pub async fn select_all<T: DeserializeOwned>(
        &self,
        table: &str,
        order: &str,
    ) -> Result<Vec<T>, SiteError> {
        let resp = self
            .http
            .get(self.rest_url(table))
            .query(&[("select", "*"), ("order", order)])
            .header("apikey", &self.anon_key)
            .header("Authorization", self.bearer(None))
            .send()
            .await
            .map_err(|e| SiteError::Fetch(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SiteError::Fetch(failure_text(resp).await));
        }

        resp.json().await.map_err(|e| SiteError::Fetch(e.to_string()))
    }

    pub async fn insert<T: Serialize>(
        &self,
        table: &str,
        row: &T,
        access_token: Option<&str>,
    ) -> Result<(), SiteError> {
        let resp = self
            .http
            .post(self.rest_url(table))
            .header("apikey", &self.anon_key)
            .header("Authorization", self.bearer(access_token))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(|e| SiteError::Mutation(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let msg = failure_text(resp).await;
            tracing::warn!("insert into {table} failed ({status}): {msg}");
            return Err(SiteError::Mutation(msg));
        }
        Ok(())
    }

    pub async fn delete_by_id(
        &self,
        table: &str,
        id: Uuid,
        access_token: Option<&str>,
    ) -> Result<(), SiteError> {
        let resp = self
            .http
            .delete(self.rest_url(table))
            .query(&[("id", format!("eq.{id}"))])
            .header("apikey", &self.anon_key)
            .header("Authorization", self.bearer(access_token))
            .send()
            .await
            .map_err(|e| SiteError::Mutation(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let msg = failure_text(resp).await;
            tracing::warn!("delete from {table} failed ({status}): {msg}");
            return Err(SiteError::Mutation(msg));
        }
        Ok(())
    }
}

/// Reduce a failed response to the backend's raw message text.
async fn failure_text(resp: reqwest::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_message(status, &body)
}

/// GoTrue says `msg` or `error_description`, PostgREST says `message`;
/// anything else falls back to the raw body, or the status line when empty.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(text) = v.get(key).and_then(|m| m.as_str()) {
                return text.to_string();
            }
        }
    }
    let raw = body.trim();
    if raw.is_empty() {
        format!("HTTP {status}")
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_target_the_expected_services() {
        let sb = Supabase::new("https://escola.supabase.co", "anon");
        assert_eq!(
            sb.auth_url("token?grant_type=password"),
            "https://escola.supabase.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(sb.rest_url("notices"), "https://escola.supabase.co/rest/v1/notices");
    }

    #[test]
    fn bearer_falls_back_to_the_anon_key() {
        let sb = Supabase::new("https://escola.supabase.co", "anon-key");
        assert_eq!(sb.bearer(None), "Bearer anon-key");
        assert_eq!(sb.bearer(Some("user-jwt")), "Bearer user-jwt");
    }

    #[test]
    fn error_message_reads_gotrue_and_postgrest_bodies() {
        let bad = reqwest::StatusCode::BAD_REQUEST;
        assert_eq!(
            error_message(bad, r#"{"code":400,"msg":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(
            error_message(bad, r#"{"error":"invalid_grant","error_description":"Email not confirmed"}"#),
            "Email not confirmed"
        );
        assert_eq!(
            error_message(
                bad,
                r#"{"message":"new row violates row-level security policy","code":"42501"}"#
            ),
            "new row violates row-level security policy"
        );
    }

    #[test]
    fn error_message_falls_back_to_raw_body_then_status() {
        let status = reqwest::StatusCode::SERVICE_UNAVAILABLE;
        assert_eq!(error_message(status, "upstream down"), "upstream down");
        assert_eq!(error_message(status, "  "), "HTTP 503 Service Unavailable");
    }
}
