use thiserror::Error;

/// Error type for location parsing and conversion
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid URL {text}: {source}")]
    InvalidUrl {
        text: String,
        source: url::ParseError,
    },

    #[error("URL does not describe a local path: {0}")]
    NotAFileUrl(url::Url),

    #[error("Location is not absolute: {0}")]
    NotAbsolute(String),
}

pub type Result<T> = std::result::Result<T, Error>;
