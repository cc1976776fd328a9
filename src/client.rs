use std::time::Duration;

use isahc::{config::Configurable, HttpClient};

use crate::{
    prelude::{CommonClient, IsahcRequest},
    Error, Method,
};

#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) timeout: Option<Duration>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Total time allowed for a request, from connecting to the last byte of
    /// the response. Unbounded when unset.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(&self) -> crate::Result<Client> {
        // Environment proxies are ignored, the target is always reached directly.
        let mut builder = HttpClient::builder().proxy(None::<isahc::http::Uri>);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(Error::Backend)?;
        Ok(Client {
            http,
            timeout: self.timeout,
        })
    }
}

impl CommonClient for Client {
    type ClientRequest<'c> = IsahcRequest<'c>;

    fn request(&self, method: Method, url: &str) -> crate::Result<Self::ClientRequest<'_>> {
        let mut req_builder = isahc::http::request::Builder::new()
            .method(method.as_str())
            .uri(url);
        if let Some(timeout) = self.timeout {
            req_builder = req_builder.timeout(timeout);
        }
        Ok(IsahcRequest::new(&self.http, req_builder))
    }

    fn set_timeout(&mut self, max_timeout: Duration) {
        self.timeout = Some(max_timeout);
    }
}
