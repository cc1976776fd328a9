//! The single friend request this program sends.
//!
//! [`dispatch`] builds the [`FriendRequestPayload`], posts it as JSON and
//! collects the status code with the raw body text. Any HTTP status counts as
//! a result; only failures to get a response at all are errors.

use std::{fmt, time::Duration};

use pollster::FutureExt as _;
use tracing::{debug, info};

use crate::{
    prelude::{CommonClientExt, CommonRequest, CommonRequestSerdeExt, CommonResponse},
    Client, FriendRequestPayload,
};

pub const DEFAULT_URL: &str = "http://localhost:3000/api/v1/friends";
pub const DEFAULT_USER_ID_1: &str = "ec352d09-00ac-4329-8834-00097a97e7f2";
pub const DEFAULT_USER_ID_2: &str = "c2c6c7ac-a008-408e-9e0e-59fc12173aff";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub url: String,
    pub user_id_1: String,
    pub user_id_2: String,
    pub timeout: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_id_1: DEFAULT_USER_ID_1.to_string(),
            user_id_2: DEFAULT_USER_ID_2.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DispatchConfig {
    pub fn payload(&self) -> FriendRequestPayload {
        FriendRequestPayload::new(&self.user_id_1, &self.user_id_2)
    }
}

/// What came back from the server, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status_code: u16,
    pub body: String,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status code: {}", self.status_code)?;
        write!(f, "Response: {}", self.body)
    }
}

/// Post the configured friend request with `client` and wait for the full
/// response.
pub async fn dispatch(client: &Client, config: &DispatchConfig) -> crate::Result<Outcome> {
    let payload = config.payload();
    debug!(url = %config.url, ?payload, "dispatching friend request");

    let res = client
        .post(&config.url)?
        .header("Content-Type", "application/json")
        .body_json(&payload)?
        .await?;

    let status_code = res.status_code();
    let body = res.recv_string().await?;
    info!(status_code, "friend request answered");

    Ok(Outcome { status_code, body })
}

/// Blocking form of [`dispatch`] with a client built from `config`.
pub fn run(config: &DispatchConfig) -> crate::Result<Outcome> {
    let client = Client::builder().timeout(config.timeout).build()?;
    dispatch(&client, config).block_on()
}
