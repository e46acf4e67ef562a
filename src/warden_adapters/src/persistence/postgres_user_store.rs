use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Pool, Postgres};
use warden_core::{Email, HashedPassword, User, UserName, UserStatus, UserStore, UserStoreError};

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    email: String,
    name: String,
    password_hash: String,
    status: String,
}

impl UserRow {
    // rows are re-validated on the way out; a corrupt row is a storage fault
    fn into_user(self) -> Result<User, UserStoreError> {
        let email =
            Email::parse(&self.email).map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let name =
            UserName::parse(self.name).map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let status = self
            .status
            .parse::<UserStatus>()
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(User::new(
            email,
            name,
            HashedPassword::from_hash(Secret::from(self.password_hash)),
            status,
        ))
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT email, name, password_hash, status
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn create(&self, user: User) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (email, name, password_hash, status)
                VALUES ($1, $2, $3, $4)
                RETURNING email, name, password_hash, status
            "#,
        )
        .bind(user.email().as_str())
        .bind(user.name().as_str())
        .bind(user.password().as_ref().expose_secret())
        .bind(user.status().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        row.into_user()
    }

    #[tracing::instrument(name = "Listing users from PostgreSQL", skip_all)]
    async fn find_all(&self) -> Result<Vec<User>, UserStoreError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT email, name, password_hash, status
                FROM users
                ORDER BY email
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        rows.into_iter().map(UserRow::into_user).collect()
    }
}
