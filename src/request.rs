use std::{
    pin::Pin,
    task::{Context, Poll},
};

use futures_lite::{AsyncRead, Future, FutureExt};
use isahc::{AsyncBody, HttpClient, ResponseFuture};
use tracing::debug;

use crate::{prelude::CommonRequest, Error, IsahcResponse};

type BoxedBody = Box<dyn AsyncRead + Unpin + Send + Sync + 'static>;

/// A request bound to the [`HttpClient`] of the [`crate::Client`] that
/// created it. The request is sent the first time it is polled.
pub struct IsahcRequest<'c> {
    http: &'c HttpClient,
    req_builder: Option<isahc::http::request::Builder>,
    body: Option<(BoxedBody, u64)>,
    res: Option<ResponseFuture<'c>>,
}

impl<'c> IsahcRequest<'c> {
    pub(crate) fn new(http: &'c HttpClient, req_builder: isahc::http::request::Builder) -> Self {
        Self {
            http,
            req_builder: Some(req_builder),
            body: None,
            res: None,
        }
    }

    fn start(&mut self, req_builder: isahc::http::request::Builder) -> crate::Result<()> {
        let body = match self.body.take() {
            Some((reader, len)) => AsyncBody::from_reader_sized(reader, len),
            None => AsyncBody::empty(),
        };
        let req = req_builder.body(body)?;
        debug!(method = %req.method(), uri = %req.uri(), "sending request");
        let http = self.http;
        self.res = Some(http.send_async(req));
        Ok(())
    }
}

impl<'c> Future for IsahcRequest<'c> {
    type Output = crate::Result<IsahcResponse>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(req_builder) = self.req_builder.take() {
            if let Err(err) = self.start(req_builder) {
                return Poll::Ready(Err(err));
            }
        }

        let Some(res) = self.res.as_mut() else {
            return Poll::Ready(Err(Error::AlreadySent));
        };

        match res.poll(cx) {
            Poll::Ready(result) => {
                self.res = None;
                let res = result?;
                let code = res.status().as_u16();
                debug!(status = code, "response received");
                Poll::Ready(Ok(IsahcResponse {
                    res: res.into_body(),
                    code,
                }))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<'c> CommonRequest for IsahcRequest<'c> {
    fn body(
        mut self,
        new_body: impl AsyncRead + Unpin + Send + Sync + 'static,
        body_size: usize,
    ) -> Self {
        self.body = Some((Box::new(new_body), body_size as u64));
        self
    }

    fn header(mut self, header: &str, value: &str) -> Self {
        if let Some(req_builder) = self.req_builder.take() {
            self.req_builder = Some(req_builder.header(header, value));
        }
        self
    }
}
