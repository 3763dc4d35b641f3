use async_trait::async_trait;
use eyre::{Result, eyre};
use interview_core::models::user::{Availability, NewUser, User};
use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::{DbPool, models::DbUser, store::UserStore};

const USER_COLUMNS: &str = "id, name, role, available_from, available_to, created_at";

pub async fn create_user(pool: &Pool<Postgres>, new_user: &NewUser) -> Result<DbUser> {
    let user = sqlx::query_as::<_, DbUser>(&format!(
        r#"
        INSERT INTO users (name, role)
        VALUES ($1, $2)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&new_user.name)
    .bind(new_user.role.as_str())
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn list_users(pool: &Pool<Postgres>) -> Result<Vec<DbUser>> {
    let users = sqlx::query_as::<_, DbUser>(&format!(
        r#"
        SELECT {USER_COLUMNS}
        FROM users
        ORDER BY id ASC
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn search_users(pool: &Pool<Postgres>, search: &str) -> Result<Vec<DbUser>> {
    let pattern = format!("%{}%", escape_like(search));

    let users = sqlx::query_as::<_, DbUser>(&format!(
        r#"
        SELECT {USER_COLUMNS}
        FROM users
        WHERE name ILIKE $1 ESCAPE '\' OR role ILIKE $1 ESCAPE '\'
        ORDER BY id ASC
        "#
    ))
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(&format!(
        r#"
        SELECT {USER_COLUMNS}
        FROM users
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Overwrites the availability window, returning whether a row was updated
pub async fn set_availability(
    pool: &Pool<Postgres>,
    id: i64,
    availability: &Availability,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET available_from = $2, available_to = $3
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(availability.from)
    .bind(availability.to)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Escapes `LIKE` metacharacters so the term matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// [`UserStore`] backed by the `users` table
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        create_user(&self.pool, &new_user).await?.try_into()
    }

    async fn list(&self, search: Option<String>) -> Result<Vec<User>> {
        let rows = match search.as_deref() {
            Some(term) if !term.is_empty() => search_users(&self.pool, term).await?,
            _ => list_users(&self.pool).await?,
        };
        debug!(count = rows.len(), "Loaded users");

        rows.into_iter().map(User::try_from).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        get_user_by_id(&self.pool, id)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn update_availability(&self, id: i64, availability: Availability) -> Result<()> {
        if set_availability(&self.pool, id, &availability).await? {
            Ok(())
        } else {
            Err(eyre!("User with id {id} does not exist"))
        }
    }
}
