use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{DomainError, DomainResult, RepositoryProvider, User, UserType};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig, SessionClaims};
use crate::infrastructure::crypto::password::verify_password;

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub expires_in: i64,
    pub user: User,
}

/// Account found during login, with the hash to check against
struct Account {
    user_type: UserType,
    id: i32,
    username: String,
    email: String,
    password_hash: String,
    profile: User,
}

pub struct AuthService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

impl AuthService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    /// Authenticate by username/email + password and issue a session token.
    pub async fn login(&self, username_or_email: &str, password: &str) -> DomainResult<AuthResult> {
        let Some(account) = self.find_account(username_or_email).await? else {
            warn!(key = %username_or_email, "Login failed: unknown account");
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        // A malformed stored hash counts as a failed check, not a server error.
        let valid = verify_password(password, &account.password_hash).unwrap_or(false);
        if !valid {
            warn!(user_type = %account.user_type, id = account.id, "Login failed: bad password");
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        let claims = SessionClaims::new(
            account.user_type,
            account.id,
            &account.username,
            &account.email,
            &self.jwt_config,
        );
        let token = create_token(&claims, &self.jwt_config)
            .map_err(|e| DomainError::Validation(format!("Failed to create token: {}", e)))?;

        info!(user_type = %account.user_type, id = account.id, "User signed in");
        Ok(AuthResult {
            token,
            expires_in: self.jwt_config.expires_in_seconds(),
            user: account.profile,
        })
    }

    async fn find_account(&self, key: &str) -> DomainResult<Option<Account>> {
        if let Some(e) = self.repos.employees().find_by_email_or_username(key).await? {
            return Ok(Some(Account {
                user_type: UserType::Employee,
                id: e.employee_id,
                username: e.username.clone(),
                email: e.email.clone(),
                password_hash: e.password_hash.clone(),
                profile: User::from(e),
            }));
        }

        let customer = self.repos.customers().find_by_email_or_username(key).await?;
        Ok(customer.map(|c| Account {
            user_type: UserType::Customer,
            id: c.customer_id,
            username: c.username.clone(),
            email: c.email.clone(),
            password_hash: c.password_hash.clone(),
            profile: User::from(c),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{customer, employee, InMemoryRepositories};
    use crate::infrastructure::crypto::jwt::verify_token;
    use crate::infrastructure::crypto::password::hash_password_with_cost;

    fn setup() -> AuthService {
        let repos = InMemoryRepositories::new();
        let mut e = employee(1, "ana", "ana@spa.test");
        e.password_hash = hash_password_with_cost("eucalyptus", 4).unwrap();
        repos.employees.insert(e);

        let mut c = customer(7, "bea", "bea@mail.test");
        c.password_hash = hash_password_with_cost("chamomile", 4).unwrap();
        repos.customers.insert(c);

        AuthService::new(Arc::new(repos), JwtConfig::default())
    }

    #[tokio::test]
    async fn employee_login_issues_employee_session() {
        let service = setup();
        let result = service.login("ana@spa.test", "eucalyptus").await.unwrap();

        let claims = verify_token(&result.token, service.jwt_config()).unwrap();
        assert_eq!(claims.account(), Some((UserType::Employee, 1)));
        assert_eq!(claims.username, "ana");
        assert_eq!(result.user.user_type, "Employee");
        assert_eq!(result.expires_in, 12 * 3600);
    }

    #[tokio::test]
    async fn customer_login_by_username() {
        let service = setup();
        let result = service.login("bea", "chamomile").await.unwrap();
        let claims = verify_token(&result.token, service.jwt_config()).unwrap();
        assert_eq!(claims.account(), Some((UserType::Customer, 7)));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let service = setup();
        let err = service.login("ana", "chamomile").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn unknown_account_is_unauthorized() {
        let service = setup();
        let err = service.login("zoe", "whatever").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }
}
