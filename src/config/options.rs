// src/config/options.rs
use std::fmt;
use std::path::PathBuf;

use super::consts::*;
use crate::specs::tables::PositionTable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub source: ScriptSource,
    pub export: ExportOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            source: ScriptSource::default(),
            export: ExportOptions::default(),
        }
    }
}

impl RunOptions {
    pub fn with_source(mut self, source: ScriptSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export.out_dir = dir.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.export.prefix = prefix.into();
        self
    }

    pub fn with_table(mut self, table: PositionTable) -> Self {
        self.export.table = table;
        self
    }

    pub fn with_write_policy(mut self, policy: WritePolicy) -> Self {
        self.export.on_write_error = policy;
        self
    }
}

/// Where the script bundle URL comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptSource {
    /// Known bundle URL, fetched as-is.
    Fixed(String),
    /// Fetch the entry page and pick the first `<script src>` containing `marker`.
    Resolved { entry_url: String, marker: String },
}

impl Default for ScriptSource {
    fn default() -> Self {
        ScriptSource::Fixed(SCRIPT_URL.to_string())
    }
}

impl ScriptSource {
    pub fn resolved(entry_url: impl Into<String>) -> Self {
        ScriptSource::Resolved {
            entry_url: entry_url.into(),
            marker: SCRIPT_MARKER.to_string(),
        }
    }
}

impl fmt::Display for ScriptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(url) => write!(f, "fixed {url}"),
            Self::Resolved { entry_url, marker } => {
                write!(f, "resolved from {entry_url} (marker \"{marker}\")")
            }
        }
    }
}

/// What to do when one artifact can't be written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Stop at the first failed write.
    #[default]
    Abort,
    /// Record the failure and keep writing the rest.
    Continue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub prefix: String,
    pub table: PositionTable,
    pub on_write_error: WritePolicy,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            prefix: String::new(),
            table: PositionTable::latest(),
            on_write_error: WritePolicy::Abort,
        }
    }
}
