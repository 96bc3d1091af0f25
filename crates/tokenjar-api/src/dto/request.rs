//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSessionRequest {
    /// Identity key of the already-verified user.
    pub user_id: String,
    /// Contact identifier of the user.
    pub email: String,
}
