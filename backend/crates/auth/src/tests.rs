//! Unit tests for Auth crate

#[cfg(test)]
mod token_tests {
    use crate::application::config::AuthConfig;
    use crate::application::token::{Claims, TokenService};
    use crate::error::AuthError;
    use chrono::Utc;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&AuthConfig::new(secret))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let tokens = service("test_secret_key");

        let token = tokens.issue("c@x.com", Default::default()).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.email, "c@x.com");
        assert_eq!(claims.sub, "c@x.com");
        assert_eq!(claims.iss, "fundflow-api");
    }

    #[test]
    fn test_expiry_is_one_hour() {
        let tokens = service("test_secret_key");

        let token = tokens.issue("c@x.com", Default::default()).unwrap();
        let claims = tokens.verify(&token).unwrap();

        let lifetime = claims.exp - claims.iat;
        assert_eq!(lifetime, 3600);
    }

    #[test]
    fn test_extra_claims_travel_in_token() {
        let tokens = service("test_secret_key");

        let mut extra = serde_json::Map::new();
        extra.insert("name".to_string(), serde_json::json!("Donor One"));
        extra.insert("role".to_string(), serde_json::json!("admin"));

        let token = tokens.issue("c@x.com", extra).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.extra.get("name"), Some(&serde_json::json!("Donor One")));
        assert_eq!(claims.extra.get("role"), Some(&serde_json::json!("admin")));
    }

    #[test]
    fn test_reserved_claims_cannot_be_overridden() {
        let tokens = service("test_secret_key");

        let mut extra = serde_json::Map::new();
        extra.insert("exp".to_string(), serde_json::json!(i64::MAX));
        extra.insert("sub".to_string(), serde_json::json!("other@x.com"));

        let token = tokens.issue("c@x.com", extra).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, "c@x.com");
        assert!(claims.exp - claims.iat <= 3600);
        assert!(claims.extra.is_empty());
    }

    #[test]
    fn test_invalid_token() {
        let tokens = service("test_secret_key");

        let err = tokens.verify("not-a-token").unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));
    }

    #[test]
    fn test_wrong_secret() {
        let issuer = service("secret-one");
        let verifier = service("secret-two");

        let token = issuer.issue("c@x.com", Default::default()).unwrap();

        let err = verifier.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));
    }

    #[test]
    fn test_expired_token() {
        let config = AuthConfig::new("test_secret_key");
        let tokens = TokenService::new(&config);

        // Craft a token whose expiry passed two hours ago
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "c@x.com".to_string(),
            email: "c@x.com".to_string(),
            iat: now - 10_800,
            exp: now - 7_200,
            iss: config.token_issuer.clone(),
            extra: Default::default(),
        };
        let stale = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(config.token_secret.as_bytes()),
        )
        .unwrap();

        let err = tokens.verify(&stale).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn test_wrong_issuer() {
        let mut other = AuthConfig::new("test_secret_key");
        other.token_issuer = "someone-else".to_string();
        let issuer = TokenService::new(&other);
        let verifier = service("test_secret_key");

        let token = issuer.issue("c@x.com", Default::default()).unwrap();

        let err = verifier.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::TokenInvalid));
    }
}

#[cfg(test)]
mod gate_tests {
    use crate::application::register_user::{RegisterUserInput, RegisterUserUseCase};
    use crate::application::require_admin::RequireAdminUseCase;
    use crate::domain::entity::user::User;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::{email::Email, user_role::UserRole};
    use crate::error::{AuthError, AuthResult};
    use std::sync::{Arc, Mutex};

    /// In-memory stand-in for the user store
    #[derive(Clone, Default)]
    struct MemoryUserRepository {
        users: Arc<Mutex<Vec<User>>>,
    }

    impl UserRepository for MemoryUserRepository {
        async fn create(&self, user: &User) -> AuthResult<()> {
            self.users.lock().unwrap().push(user.clone());
            Ok(())
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == *email)
                .cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .any(|u| u.email == *email))
        }

        async fn list(&self) -> AuthResult<Vec<User>> {
            Ok(self.users.lock().unwrap().clone())
        }
    }

    async fn seed_user(repo: &MemoryUserRepository, email: &str, role: UserRole) {
        let mut user = User::new(Email::new(email).unwrap(), None);
        user.user_role = role;
        repo.create(&user).await.unwrap();
    }

    #[tokio::test]
    async fn test_admin_gate_rejects_unknown_identity() {
        let repo = Arc::new(MemoryUserRepository::default());
        let gate = RequireAdminUseCase::new(repo);

        let err = gate.execute("nobody@x.com").await.unwrap_err();
        assert!(matches!(err, AuthError::AdminRequired));
    }

    #[tokio::test]
    async fn test_admin_gate_rejects_member() {
        let repo = Arc::new(MemoryUserRepository::default());
        seed_user(&repo, "member@x.com", UserRole::Member).await;

        let gate = RequireAdminUseCase::new(repo);

        let err = gate.execute("member@x.com").await.unwrap_err();
        assert!(matches!(err, AuthError::AdminRequired));
    }

    #[tokio::test]
    async fn test_admin_gate_accepts_admin() {
        let repo = Arc::new(MemoryUserRepository::default());
        seed_user(&repo, "admin@x.com", UserRole::Admin).await;

        let gate = RequireAdminUseCase::new(repo);

        let user = gate.execute("admin@x.com").await.unwrap();
        assert!(user.is_admin());
    }

    #[tokio::test]
    async fn test_admin_gate_rejects_malformed_email_claim() {
        let repo = Arc::new(MemoryUserRepository::default());
        let gate = RequireAdminUseCase::new(repo);

        let err = gate.execute("not-an-email").await.unwrap_err();
        assert!(matches!(err, AuthError::AdminRequired));
    }

    #[tokio::test]
    async fn test_register_stores_member_role() {
        let repo = Arc::new(MemoryUserRepository::default());
        let use_case = RegisterUserUseCase::new(repo.clone());

        use_case
            .execute(RegisterUserInput {
                email: "new@x.com".to_string(),
                display_name: Some("New Donor".to_string()),
            })
            .await
            .unwrap();

        let stored = repo
            .find_by_email(&Email::new("new@x.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.user_role, UserRole::Member);
        assert_eq!(stored.display_name.as_deref(), Some("New Donor"));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let repo = Arc::new(MemoryUserRepository::default());
        let use_case = RegisterUserUseCase::new(repo.clone());

        let input = || RegisterUserInput {
            email: "dup@x.com".to_string(),
            display_name: None,
        };

        use_case.execute(input()).await.unwrap();

        let err = use_case.execute(input()).await.unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::*;

    #[test]
    fn test_token_request_captures_extra_fields() {
        let json = r#"{"email":"c@x.com","name":"Donor","photoUrl":"http://x/p.png"}"#;
        let request: TokenRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email, "c@x.com");
        assert_eq!(request.extra.get("name"), Some(&serde_json::json!("Donor")));
        assert_eq!(
            request.extra.get("photoUrl"),
            Some(&serde_json::json!("http://x/p.png"))
        );
    }

    #[test]
    fn test_token_request_email_only() {
        let json = r#"{"email":"c@x.com"}"#;
        let request: TokenRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email, "c@x.com");
        assert!(request.extra.is_empty());
    }

    #[test]
    fn test_register_request_deserialization() {
        let json = r#"{"email":"c@x.com","displayName":"Donor"}"#;
        let request: RegisterUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email, "c@x.com");
        assert_eq!(request.display_name.as_deref(), Some("Donor"));
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::AuthError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingToken, StatusCode::UNAUTHORIZED),
            (AuthError::TokenInvalid, StatusCode::UNAUTHORIZED),
            (AuthError::TokenExpired, StatusCode::UNAUTHORIZED),
            (AuthError::AdminRequired, StatusCode::FORBIDDEN),
            (AuthError::EmailTaken, StatusCode::CONFLICT),
            (
                AuthError::InvalidEmail("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should return correct status code"
            );
        }
    }

    #[test]
    fn test_jwt_error_mapping() {
        let expired = jsonwebtoken::errors::Error::from(
            jsonwebtoken::errors::ErrorKind::ExpiredSignature,
        );
        assert!(matches!(AuthError::from(expired), AuthError::TokenExpired));

        let invalid =
            jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::InvalidToken);
        assert!(matches!(AuthError::from(invalid), AuthError::TokenInvalid));
    }
}
