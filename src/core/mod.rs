// src/core/mod.rs

pub mod extract;
pub mod html;
pub mod net;

pub use extract::{extract_literals, occurrences, LiteralOccurrence};
pub use net::{Fetch, Fetched, HttpFetcher};
