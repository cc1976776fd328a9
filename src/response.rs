use std::borrow::Cow;

use futures_lite::{AsyncRead, AsyncReadExt};
use isahc::AsyncBody;
use tracing::trace;

/// A fully received response.
pub struct ResponseBody {
    pub(crate) data: Vec<u8>,
    pub(crate) code: u16,
}

impl ResponseBody {
    pub fn data_string(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    pub fn status_code(&self) -> u16 {
        self.code
    }
}

pin_project_lite::pin_project! {
/// A response whose headers have arrived. The body is streamed from the
/// connection until it is read to the end or dropped.
pub struct IsahcResponse {
    #[pin]
    pub(crate) res: AsyncBody,
    pub(crate) code: u16,
}
}

impl IsahcResponse {
    pub fn status_code(&self) -> u16 {
        self.code
    }
}

impl AsyncRead for IsahcResponse {
    fn poll_read(
        self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
        buf: &mut [u8],
    ) -> std::task::Poll<std::io::Result<usize>> {
        self.project().res.poll_read(cx, buf)
    }
}

impl crate::prelude::CommonResponse for IsahcResponse {
    async fn recv(mut self) -> std::io::Result<ResponseBody> {
        let capacity = self.res.len().unwrap_or(1024).min(1024 * 1024);
        let mut data = Vec::with_capacity(capacity as usize);
        self.read_to_end(&mut data).await?;
        trace!(bytes = data.len(), "response body received");
        Ok(ResponseBody {
            data,
            code: self.code,
        })
    }
}
