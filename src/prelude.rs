use crate::{Method, ResponseBody};
use core::future::Future;
use core::time::Duration;
use futures_lite::io::Cursor;
use futures_lite::AsyncRead;

pub use crate::{Client, ClientBuilder, IsahcRequest, IsahcResponse};

/// A trait implemented by request types.
///
/// Requests are [`Future`]s; awaiting one sends it and yields a response
/// implementing [`CommonResponse`] and [`AsyncRead`].
///
/// To pass a struct implementing [`serde::ser::Serialize`] as a json body,
/// use [`CommonRequestSerdeExt::body_json`].
pub trait CommonRequest: Future
where
    Self: Sized,
{
    /// Provide data as a body in request. `body_size` is sent as the
    /// `Content-Length`.
    fn body(self, body: impl AsyncRead + Unpin + Send + Sync + 'static, body_size: usize) -> Self;
    fn body_string(self, body: String) -> Self {
        let len = body.len();
        self.body(Cursor::new(body), len)
    }
    fn header(self, header: &str, value: &str) -> Self;
}

/// Pass a struct implementing [`serde::ser::Serialize`] as a json body.
pub trait CommonRequestSerdeExt: CommonRequest {
    fn body_json<T: ?Sized + serde::ser::Serialize>(self, body: &T) -> crate::Result<Self> {
        Ok(self.body_string(serde_json::to_string(body)?))
    }
}

impl<R: CommonRequest> CommonRequestSerdeExt for R {}

#[allow(async_fn_in_trait)]
/// A trait implemented by response types.
///
/// Responses implement [`AsyncRead`], so large bodies can be read in chunks
/// without loading everything in memory.
pub trait CommonResponse: AsyncRead
where
    Self: Sized + Unpin,
{
    /// Receive all data in memory and return a [`ResponseBody`] holding the
    /// status code and the raw bytes.
    async fn recv(self) -> std::io::Result<ResponseBody>;

    /// Convenient method to receive data as string.
    async fn recv_string(self) -> std::io::Result<String> {
        Ok(self.recv().await?.data_string().into_owned())
    }
}

/// A trait that clients implement, allowing you to send requests and set
/// options for them.
pub trait CommonClient {
    type ClientRequest<'c>: CommonRequest
    where
        Self: 'c;
    /// Invoke a request with a method and a url, will return a
    /// [`CommonRequest`] implementation.
    fn request(&self, method: Method, url: &str) -> crate::Result<Self::ClientRequest<'_>>;
    /// Set the total timeout of requests created after this call.
    fn set_timeout(&mut self, _max_timeout: Duration) {}
}

/// Some convenient methods about [`CommonClient`].
pub trait CommonClientExt: CommonClient {
    /// A wrapper of `CommonClient::request(Method::POST, url)`
    fn post(&self, url: &str) -> crate::Result<Self::ClientRequest<'_>> {
        self.request(Method::POST, url)
    }
}

impl<C: CommonClient> CommonClientExt for C {}
