// src/error.rs
use std::{io, path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

/// Transport-level failure getting a document.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP client could not be built: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("body of {url} is not valid UTF-8: {source}")]
    Decode {
        url: String,
        #[source]
        source: FromUtf8Error,
    },
}

/// The script bundle URL could not be determined.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("not an absolute URL: {url} ({source})")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("no <script src> containing \"{marker}\" on the entry page")]
    NoScript { marker: String },
    #[error("script reference {src} can't be joined to {base} ({source})")]
    BadReference {
        src: String,
        base: String,
        #[source]
        source: url::ParseError,
    },
}

/// One artifact could not be persisted.
#[derive(Debug, Error)]
#[error("artifact #{index:02} \"{name}\" -> {}: {source}", .path.display())]
pub struct WriteError {
    pub index: usize,
    pub name: String,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Run-level error; the variant says which stage failed.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("resolution failed: {0}")]
    Resolve(#[from] ResolutionError),
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("write failed: {0}")]
    Write(#[from] WriteError),
    #[error("write failed: output directory {} unusable: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScrapeError {
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Resolve(_) => "resolution",
            Self::Fetch(_) => "fetch",
            Self::Write(_) | Self::OutputDir { .. } => "write",
        }
    }
}
