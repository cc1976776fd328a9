use serde::Serialize;

/// Body of `POST /api/v1/friends`. Identifiers are passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FriendRequestPayload {
    pub user_id_1: String,
    pub user_id_2: String,
}

impl FriendRequestPayload {
    pub fn new(user_id_1: impl Into<String>, user_id_2: impl Into<String>) -> Self {
        Self {
            user_id_1: user_id_1.into(),
            user_id_2: user_id_2.into(),
        }
    }
}
