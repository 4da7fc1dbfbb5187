//! Unit tests for the authentication service

use std::sync::Arc;

use jsonwebtoken::Algorithm;

use crate::domain::entities::tenant::TenantRole;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::tenant::mock::MockTenantRepository;
use crate::repositories::token::mock::MockTokenRepository;
use crate::repositories::TenantRepository;
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_test_service() -> AuthService<MockTenantRepository, MockTokenRepository> {
    let token_config = TokenServiceConfig {
        jwt_secret: "test-access-secret".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        algorithm: Algorithm::HS256,
        access_token_expiry_minutes: 15,
        refresh_token_expiry_days: 7,
    };
    let token_service = Arc::new(TokenService::new(MockTokenRepository::new(), token_config));

    let config = AuthServiceConfig {
        // Minimum cost keeps the tests fast
        bcrypt_cost: 4,
        ..AuthServiceConfig::default()
    };

    AuthService::new(Arc::new(MockTenantRepository::new()), token_service, config)
}

async fn signup_acme(service: &AuthService<MockTenantRepository, MockTokenRepository>) {
    service
        .signup("Acme", "admin@acme.example", "+61400000000", "password123")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_signup_registers_tenant() {
    let service = create_test_service();

    let tenant = service
        .signup("Acme", "admin@acme.example", "+61400000000", "password123")
        .await
        .unwrap();

    assert_eq!(tenant.name, "Acme");
    assert_eq!(tenant.email, "admin@acme.example");
    assert_eq!(tenant.role, TenantRole::Admin);
    assert_eq!(tenant.api_key.len(), 32);
    assert_eq!(tenant.balance_quota, 125);
    // The stored hash must not leak the plaintext
    assert_ne!(tenant.password_hash, "password123");
}

#[tokio::test]
async fn test_signup_rejects_duplicate_email() {
    let service = create_test_service();
    signup_acme(&service).await;

    let result = service
        .signup("Acme Again", "admin@acme.example", "+61400000001", "password456")
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::TenantAlreadyExists)
    ));
}

#[tokio::test]
async fn test_signup_validates_fields() {
    let service = create_test_service();

    let bad_email = service
        .signup("Acme", "not-an-email", "+61400000000", "password123")
        .await;
    assert!(matches!(
        bad_email.unwrap_err(),
        DomainError::ValidationErr(_)
    ));

    let short_password = service
        .signup("Acme", "admin@acme.example", "+61400000000", "short")
        .await;
    assert!(matches!(
        short_password.unwrap_err(),
        DomainError::ValidationErr(_)
    ));

    let blank_name = service
        .signup("  ", "admin@acme.example", "+61400000000", "password123")
        .await;
    assert!(matches!(
        blank_name.unwrap_err(),
        DomainError::ValidationErr(_)
    ));
}

#[tokio::test]
async fn test_login_issues_tokens() {
    let service = create_test_service();
    signup_acme(&service).await;

    let response = service
        .login("admin@acme.example", "password123")
        .await
        .unwrap();

    assert!(!response.access_token.is_empty());
    assert!(!response.refresh_token.is_empty());
    assert_eq!(response.expires_in, 15 * 60);
    assert_eq!(response.role, Some("admin".to_string()));

    let claims = service.validate_token(&response.access_token).unwrap();
    assert_eq!(claims.email, "admin@acme.example");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let service = create_test_service();

    let result = service.login("nobody@acme.example", "password123").await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let service = create_test_service();
    signup_acme(&service).await;

    let result = service.login("admin@acme.example", "wrong-password").await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Auth(AuthError::IncorrectPassword)
    ));
}

#[tokio::test]
async fn test_login_stamps_last_login() {
    let service = create_test_service();
    signup_acme(&service).await;

    service
        .login("admin@acme.example", "password123")
        .await
        .unwrap();

    let tenant = service
        .tenant_repository
        .find_by_email("admin@acme.example")
        .await
        .unwrap()
        .unwrap();
    assert!(tenant.last_login_at.is_some());
}

#[tokio::test]
async fn test_refresh_returns_new_tokens() {
    let service = create_test_service();
    signup_acme(&service).await;

    let login = service
        .login("admin@acme.example", "password123")
        .await
        .unwrap();
    let refreshed = service.refresh(&login.refresh_token).await.unwrap();

    assert_ne!(refreshed.refresh_token, login.refresh_token);
    assert_eq!(refreshed.role, Some("admin".to_string()));

    let claims = service.validate_token(&refreshed.access_token).unwrap();
    assert_eq!(claims.email, "admin@acme.example");
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    let service = create_test_service();
    signup_acme(&service).await;

    let login = service
        .login("admin@acme.example", "password123")
        .await
        .unwrap();

    assert!(service.logout(&login.refresh_token).await.unwrap());

    let result = service.refresh(&login.refresh_token).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::TokenRevoked)
    ));
}

#[tokio::test]
async fn test_logout_unknown_token() {
    let service = create_test_service();
    signup_acme(&service).await;

    // Authentic-looking but never-issued token
    let login = service
        .login("admin@acme.example", "password123")
        .await
        .unwrap();
    service.logout(&login.refresh_token).await.unwrap();

    assert!(!service.logout("unissued-token").await.unwrap());
}
