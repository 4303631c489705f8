//! Claims decoded from the identity provider's access token. Only the payload
//! segment is read; signature validation is the backend's job.

use crate::app_lib::AppError;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RealmAccess {
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Claims {
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub realm_access: RealmAccess,
}

impl Claims {
    /// Decodes the payload of a compact JWT.
    pub fn from_token(token: &str) -> Result<Self, AppError> {
        let payload = token
            .split('.')
            .nth(1)
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| AppError::Handshake("Token has no payload segment.".to_string()))?;

        // Some issuers keep the padding even in compact form.
        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|err| AppError::Handshake(format!("Token payload is not base64url: {err}")))?;

        serde_json::from_slice(&bytes)
            .map_err(|err| AppError::Handshake(format!("Token payload is not valid claims: {err}")))
    }

    pub fn has_realm_role(&self, role: &str) -> bool {
        self.realm_access.roles.iter().any(|candidate| candidate == role)
    }

    pub fn display_name(&self) -> &str {
        self.preferred_username
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.sub)
    }
}

#[cfg(test)]
pub(crate) fn encode_test_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_subject_username_and_roles() {
        let token = encode_test_token(&json!({
            "sub": "doc-1",
            "preferred_username": "dr.house",
            "realm_access": { "roles": ["mr_doctor", "offline_access"] }
        }));

        let claims = Claims::from_token(&token).expect("claims");

        assert_eq!(claims.sub, "doc-1");
        assert_eq!(claims.display_name(), "dr.house");
        assert!(claims.has_realm_role("mr_doctor"));
        assert!(!claims.has_realm_role("mr_patient"));
    }

    #[test]
    fn missing_realm_access_yields_no_roles() {
        let token = encode_test_token(&json!({ "sub": "user-7" }));

        let claims = Claims::from_token(&token).expect("claims");

        assert!(claims.realm_access.roles.is_empty());
        assert_eq!(claims.display_name(), "user-7");
    }

    #[test]
    fn rejects_tokens_without_a_payload() {
        assert!(matches!(Claims::from_token("opaque"), Err(AppError::Handshake(_))));
        assert!(matches!(Claims::from_token("a..c"), Err(AppError::Handshake(_))));
        assert!(matches!(
            Claims::from_token("a.%%%.c"),
            Err(AppError::Handshake(_))
        ));
    }
}
