use reqwest::StatusCode;
use thiserror::Error;

/// Anything that stops a site from yielding an address. None of these are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url '{url}'")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("({status}) from {url}")]
    Status { url: String, status: StatusCode },

    #[error("no <{tag}> reading '{label}' found at {url}")]
    Label {
        url: String,
        label: String,
        tag: String,
    },

    #[error("<{tag}> labeled '{label}' at {url} has no <{tag}> sibling")]
    Sibling {
        url: String,
        label: String,
        tag: String,
    },
}

impl FetchError {
    /// extraction errors mean the page came back but didn't look the way we expected
    pub fn is_extraction(&self) -> bool {
        matches!(self, Self::Label { .. } | Self::Sibling { .. })
    }
}
