use crate::error::{AppError, AppResult};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Claims carried by admin tokens issued by the external identity service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[derive(Clone)]
pub struct JwtService {
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(AppError::JwtError)
    }

    /// Verifies the token and requires the `admin` role.
    pub fn verify_admin_token(&self, token: &str) -> AppResult<Claims> {
        let claims = self.verify_token(token)?;

        if !claims.is_admin() {
            return Err(AppError::Forbidden);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn token(secret: &str, role: &str, ttl: Duration) -> String {
        let now = Utc::now();
        let claims = Claims {
            sub: "1".to_string(),
            role: role.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_admin_token() {
        let jwt = JwtService::new("secret");
        let claims = jwt
            .verify_admin_token(&token("secret", "admin", Duration::hours(1)))
            .unwrap();
        assert_eq!(claims.sub, "1");
    }

    #[test]
    fn test_editor_token_is_forbidden() {
        let jwt = JwtService::new("secret");
        let err = jwt
            .verify_admin_token(&token("secret", "editor", Duration::hours(1)))
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[test]
    fn test_wrong_secret_and_expired_tokens_rejected() {
        let jwt = JwtService::new("secret");
        assert!(matches!(
            jwt.verify_token(&token("other", "admin", Duration::hours(1))),
            Err(AppError::JwtError(_))
        ));
        assert!(matches!(
            jwt.verify_token(&token("secret", "admin", Duration::hours(-2))),
            Err(AppError::JwtError(_))
        ));
    }
}
