// src/specs/mod.rs
//! # Dashboard "specs"
//!
//! Knowledge about the Georgia DPH dashboard that changes when the dashboard
//! does: which ordinal is which dataset. Generic scanning (script tags,
//! `JSON.parse` literals) lives in `core`; deciding when to fetch and where to
//! write lives in `runner` and `file`.
//!
//! When the dashboard ships a new layout, add a revision to `tables` and make
//! it the last entry of `REVISIONS`. Old revisions stay so earlier snapshots
//! can be re-labelled.
pub mod tables;

pub use tables::{name_for, PositionTable};
