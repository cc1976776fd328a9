use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The connection could not be made or broke before the whole response
    /// arrived: DNS failure, refused connection, timeout, dropped body.
    #[error("transport error: {0}")]
    Transport(#[from] isahc::Error),

    #[error("failed to initialize http client: {0}")]
    Backend(isahc::Error),

    #[error("invalid request: {0}")]
    Request(#[from] isahc::http::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to read response body: {0}")]
    Io(std::io::Error),

    #[error("request already sent")]
    AlreadySent,
}

impl Error {
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

/// Body reads report curl failures as `io::Error`s wrapping the
/// [`isahc::Error`]; those are unwrapped back into [`Error::Transport`].
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        if !err
            .get_ref()
            .is_some_and(|inner| inner.is::<isahc::Error>())
        {
            return Error::Io(err);
        }
        let kind = err.kind();
        match err.into_inner().map(|inner| inner.downcast::<isahc::Error>()) {
            Some(Ok(inner)) => Error::Transport(*inner),
            Some(Err(inner)) => Error::Io(std::io::Error::new(kind, inner)),
            None => Error::Io(kind.into()),
        }
    }
}
