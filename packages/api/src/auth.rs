//! Session endpoints: login, registration, who-am-I, profile, password.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::User;

/// Token plus the account it belongs to, returned by login and register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Registration creates the tenant portal and its first admin in one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterForm {
    pub portal_name: String,
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct PasswordChangeBody<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

impl ApiClient {
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<AuthResponse> {
        self.post("/auth/login", &LoginBody { username, password })
            .await
    }

    pub async fn register(&self, form: &RegisterForm) -> ApiResult<AuthResponse> {
        self.post("/auth/register", form).await
    }

    /// Validate the current token and fetch the account behind it.
    pub async fn current_user(&self) -> ApiResult<User> {
        self.get("/auth/me", &[]).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        self.put("/auth/profile", update).await
    }

    pub async fn change_password(&self, current: &str, new: &str) -> ApiResult<()> {
        self.post_unit(
            "/auth/change-password",
            &PasswordChangeBody {
                current_password: current,
                new_password: new,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_auth_response_from_backend_json() {
        let resp: AuthResponse = serde_json::from_str(
            r#"{
                "token": "eyJhbGciOi",
                "user": {"id": 1, "username": "petrov", "role": "admin", "is_active": true}
            }"#,
        )
        .unwrap();
        assert_eq!(resp.token, "eyJhbGciOi");
        assert_eq!(resp.user.role, Role::Admin);
    }

    #[test]
    fn test_register_form_shape() {
        let form = RegisterForm {
            portal_name: "StroyMontazh".to_string(),
            username: "petrov".to_string(),
            password: "hunter22".to_string(),
            full_name: None,
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["portal_name"], "StroyMontazh");
        assert!(value.as_object().unwrap().contains_key("password"));
    }
}
