// src/lib.rs

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod file;
pub mod progress;
pub mod runner;

pub use error::{FetchError, ResolutionError, ScrapeError, WriteError};
pub use runner::{run, Artifact, RunSummary};
