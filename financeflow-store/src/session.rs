use chrono::{DateTime, Utc};
use financeflow_core::User;
use serde::{Deserialize, Serialize};

/// The logged-in user, persisted between CLI invocations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn for_user(user: &User, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
            started_at: now,
        }
    }
}
