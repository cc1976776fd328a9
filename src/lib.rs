//! Send one friend request to a local API and surface the raw HTTP result.
//!
//! The crate is split in two halves: a small isahc-backed HTTP client
//! ([`Client`], [`prelude`]) and the [`dispatch`] module that builds the
//! [`FriendRequestPayload`] and performs the single POST.

mod client;
pub mod dispatch;
mod error;
mod payload;
pub mod prelude;
mod request;
mod response;

pub use client::{Client, ClientBuilder};
pub use dispatch::{dispatch, run, DispatchConfig, Outcome};
pub use error::{Error, Result};
pub use payload::FriendRequestPayload;
pub use request::IsahcRequest;
pub use response::{IsahcResponse, ResponseBody};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    POST,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::POST => "POST",
        }
    }
}
