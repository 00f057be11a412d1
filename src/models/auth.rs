use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Rol elegido al registrarse
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Owner,
    #[default]
    Customer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Owner, Role::Customer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Owner => "OWNER",
            Role::Customer => "CUSTOMER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| AuthError::InvalidRole(value.to_string()))
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Cuerpo de respuesta de /auth/login y /auth/register
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_uses_camel_case_keys() {
        let request = LoginRequest {
            user_name: "ana@example.com".to_string(),
            password: "secret1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "userName": "ana@example.com", "password": "secret1" })
        );
    }

    #[test]
    fn register_request_serializes_role_in_upper_case() {
        let request = RegisterRequest {
            user_name: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
            role: Role::Owner,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "OWNER");
        assert_eq!(json["userName"], "ana");
    }

    #[test]
    fn role_parsing_is_exact() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(Role::default(), Role::Customer);
        assert_eq!(
            "admin".parse::<Role>(),
            Err(AuthError::InvalidRole("admin".to_string()))
        );
    }

    #[test]
    fn response_fields_are_optional() {
        let body: AuthResponse =
            serde_json::from_str(r#"{"message":"Email already exists"}"#).unwrap();
        assert_eq!(body.token, None);
        assert_eq!(body.message.as_deref(), Some("Email already exists"));

        let body: AuthResponse =
            serde_json::from_str(r#"{"token":"abc123","user":{"id":1}}"#).unwrap();
        assert_eq!(body.token.as_deref(), Some("abc123"));
    }
}
