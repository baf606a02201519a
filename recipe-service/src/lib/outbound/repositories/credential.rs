use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::credential::errors::AuthError;
use crate::credential::models::Credential;
use crate::credential::models::Username;
use crate::credential::ports::CredentialRepository;

pub struct PostgresCredentialRepository {
    pool: PgPool,
}

impl PostgresCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn create(&self, credential: Credential) -> Result<Credential, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO credentials (username, password_hash, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(credential.username.as_str())
        .bind(&credential.password_hash)
        .bind(credential.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AuthError::UsernameAlreadyExists(
                        credential.username.as_str().to_string(),
                    );
                }
            }
            AuthError::DatabaseError(e.to_string())
        })?;

        Ok(credential)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Credential>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT username, password_hash, created_at
            FROM credentials
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Credential {
                username: Username::new(r.try_get("username").map_err(database_error)?)?,
                password_hash: r.try_get("password_hash").map_err(database_error)?,
                created_at: r.try_get("created_at").map_err(database_error)?,
            })),
            None => Ok(None),
        }
    }
}

fn database_error(e: sqlx::Error) -> AuthError {
    AuthError::DatabaseError(e.to_string())
}
