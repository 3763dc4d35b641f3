use chrono::{DateTime, Utc};
use eyre::{Result, WrapErr, eyre};
use interview_core::models::user::{Availability, Role, User};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbUser> for User {
    type Error = eyre::Report;

    fn try_from(row: DbUser) -> Result<Self> {
        let role = row
            .role
            .parse::<Role>()
            .map_err(|e| eyre!("{e}"))
            .wrap_err_with(|| format!("User {} has an unknown role {:?}", row.id, row.role))?;

        let available_time = match (row.available_from, row.available_to) {
            (Some(from), Some(to)) => Some(Availability { from, to }),
            (None, None) => None,
            _ => return Err(eyre!("User {} has a half-set availability window", row.id)),
        };

        Ok(User {
            id: row.id,
            name: row.name,
            role,
            available_time,
        })
    }
}
