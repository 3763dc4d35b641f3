use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::{ScheduleError, ScheduleResult};

/// Longest name the store accepts
pub const MAX_NAME_LENGTH: usize = 100;

pub const MANDATORY_FIELDS_MESSAGE: &str = "Please fill all mandatory fields";
pub const INVALID_ROLE_MESSAGE: &str = "Please enter a valid role(Candidate/Interviewer/HR).";

/// The part a user plays in an interview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Candidate,
    Interviewer,
    HR,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Candidate, Role::Interviewer, Role::HR];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Candidate => "Candidate",
            Role::Interviewer => "Interviewer",
            Role::HR => "HR",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ScheduleError::Validation(INVALID_ROLE_MESSAGE.to_string()))
    }
}

/// A single window during which a user can be interviewed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Availability {
    #[serde(with = "crate::timestamp::wire")]
    #[schema(value_type = String, example = "2025-01-26T08:00:00.000000Z")]
    pub from: DateTime<Utc>,
    #[serde(with = "crate::timestamp::wire")]
    #[schema(value_type = String, example = "2025-01-26T12:00:00.000000Z")]
    pub to: DateTime<Utc>,
}

impl Availability {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Returns the window shared with `other`, or `None` when the two do not
    /// overlap by a positive amount of time.
    pub fn intersection(&self, other: &Availability) -> Option<Availability> {
        let from = self.from.max(other.from);
        let to = self.to.min(other.to);
        (from < to).then_some(Availability { from, to })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub available_time: Option<Availability>,
}

impl User {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// A user as listed by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

/// Validated payload for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub role: Role,
}

/// Raw body of the add-user endpoint
///
/// Both fields are optional at the wire level so that a missing field is
/// reported with the same message as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddUserRequest {
    pub name: Option<String>,
    #[schema(example = "Candidate")]
    pub role: Option<String>,
}

impl AddUserRequest {
    /// Checks the mandatory fields, the role and the name length, in that order
    pub fn validate(self) -> ScheduleResult<NewUser> {
        let (name, role) = match (self.name, self.role) {
            (Some(name), Some(role)) if !name.is_empty() && !role.is_empty() => (name, role),
            _ => {
                return Err(ScheduleError::Validation(
                    MANDATORY_FIELDS_MESSAGE.to_string(),
                ));
            }
        };

        let role = role.parse::<Role>()?;

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ScheduleError::Validation(format!(
                "Ensure name has no more than {MAX_NAME_LENGTH} characters."
            )));
        }

        Ok(NewUser { name, role })
    }
}

/// Raw body of the add-time-slot endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TimeSlotRequest {
    #[schema(example = "2025-01-26T08:00:00.000000Z")]
    pub from: Option<String>,
    #[schema(example = "2025-01-26T12:00:00.000000Z")]
    pub to: Option<String>,
}

impl TimeSlotRequest {
    /// Parses both bounds into an availability window
    ///
    /// A missing or empty bound yields `Invalid slot format`; a bound that
    /// does not parse yields `Invalid time format`. The order of the bounds is
    /// not checked.
    pub fn validate(self) -> ScheduleResult<Availability> {
        let (from, to) = match (self.from, self.to) {
            (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => (from, to),
            _ => return Err(ScheduleError::Validation("Invalid slot format".to_string())),
        };

        let invalid_time = |_| ScheduleError::Validation("Invalid time format".to_string());
        let from = crate::timestamp::parse(&from).map_err(invalid_time)?;
        let to = crate::timestamp::parse(&to).map_err(invalid_time)?;

        Ok(Availability { from, to })
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserSearchQuery {
    /// Substring matched case-insensitively against name or role
    pub search: Option<String>,
}

/// Query of the time-slot lookup
///
/// The ids are kept as text: a missing or malformed id is reported the same
/// way as an unknown one.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimeSlotsQuery {
    #[param(value_type = Option<i64>)]
    pub candidate_id: Option<String>,
    #[param(value_type = Option<i64>)]
    pub interviewer_id: Option<String>,
}
