use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in admin as reported by the auth collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

/// An authenticated session: the collaborator's access token plus the user
/// it belongs to. The token travels in an HttpOnly cookie between requests.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

/// Body of a successful password grant (`/auth/v1/token`).
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub user: AuthUser,
}

impl From<TokenResponse> for Session {
    fn from(t: TokenResponse) -> Self {
        Session {
            access_token: t.access_token,
            user: t.user,
        }
    }
}

/// Session-change event, broadcast by the gate on login/logout.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    SignedIn { email: String },
    SignedOut,
}

impl std::fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthEvent::SignedIn { email } => write!(f, "SIGNED_IN {email}"),
            AuthEvent::SignedOut => write!(f, "SIGNED_OUT"),
        }
    }
}

// Request DTOs for the auth forms.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}
