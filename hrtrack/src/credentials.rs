use serde::{Deserialize, Serialize};

use crate::domain::Role;
use crate::{FetchError, HrUrl};

/// The authenticated account, as returned by the login call and persisted
/// between runs. Passed explicitly to everything that needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    user: Option<LoginUser>,
}

#[derive(Debug, Deserialize)]
struct LoginUser {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    email: String,
    role: Role,
    token: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl Session {
    /// Authenticates against the backend and returns a session carrying
    /// the bearer token.
    pub async fn login(api_url: &str, email: &str, password: &str) -> Result<Session, FetchError> {
        let url = HrUrl::new(api_url).append_path("user/login");
        let client = reqwest::Client::new();

        let resp = client
            .post(url.as_ref())
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| FetchError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(FetchError::Unauthorized);
        }

        let login: LoginResponse = resp.json().await.map_err(|e| {
            FetchError::ParsingError(format!("Failed to parse login response: {}", e))
        })?;

        let user = match (login.success, login.user) {
            (true, Some(user)) => user,
            _ => {
                let message = login
                    .message
                    .unwrap_or_else(|| "Login rejected by the server".to_string());
                return Err(FetchError::Other(message));
            }
        };

        Ok(Session {
            token: user.token,
            user: SessionUser {
                id: user.id,
                name: user.name,
                email: user.email,
                role: user.role,
            },
        })
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let session = Session {
            token: "abc123".to_string(),
            user: SessionUser {
                id: "u1".to_string(),
                name: "Test User".to_string(),
                email: "test@example.com".to_string(),
                role: Role::Employee,
            },
        };
        assert_eq!(session.bearer(), "Bearer abc123");
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let session = Session {
            token: "abc123".to_string(),
            user: SessionUser {
                id: "u1".to_string(),
                name: "Test User".to_string(),
                email: "test@example.com".to_string(),
                role: Role::Hr,
            },
        };

        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back.token, session.token);
        assert_eq!(back.user.role, Role::Hr);
    }

    #[test]
    fn test_unknown_role_in_login_payload_parses_as_unknown() {
        let json = r#"{"success":true,"user":{"_id":"u9","name":"G","email":"g@x.test",
            "role":"superuser","token":"t"}}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.user.unwrap().role, Role::Unknown);
    }
}
