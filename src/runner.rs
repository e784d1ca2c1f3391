// src/runner.rs
use std::path::PathBuf;

use tracing::{debug, info, warn};
use url::Url;

use crate::{
    config::options::{RunOptions, ScriptSource, WritePolicy},
    core::{html, occurrences, Fetch},
    error::{ScrapeError, WriteError},
    file::{artifact_path, ensure_directory, write_artifact},
    progress::Progress,
};

/// One file produced by a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub index: usize,
    pub name: String,
    pub path: PathBuf,
}

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub script_url: Url,
    pub written: Vec<Artifact>,
    /// Only ever non-empty under `WritePolicy::Continue`.
    pub failed: Vec<WriteError>,
}

impl RunSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Work out which bundle to fetch.
///
/// In resolved mode, relative `src` values are joined against the URL that
/// finally served the entry page, so a redirect (`/` -> `/dashboard/`) moves
/// the base along with it.
pub fn locate_script(
    fetcher: &dyn Fetch,
    source: &ScriptSource,
) -> Result<Url, ScrapeError> {
    match source {
        ScriptSource::Fixed(url) => Ok(html::parse_absolute(url)?),
        ScriptSource::Resolved { entry_url, marker } => {
            let entry = html::parse_absolute(entry_url)?;
            let page = fetcher.fetch_located(&entry)?;
            let base = page.url.clone();
            let html_text = page.into_text()?;
            Ok(html::resolve_script_url(&html_text, base.as_str(), marker)?)
        }
    }
}

/// Top-level runner: resolve → fetch → extract → name & write.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
///
/// Resolve and fetch failures abort before anything is written. The output
/// directory is created once the script is in hand, even if it holds no
/// literals; if it can't be created the run fails in the write stage under
/// either `WritePolicy`. Files left by earlier runs are never removed.
pub fn run(
    fetcher: &dyn Fetch,
    options: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let export = &options.export;

    /* ---------------- Resolve ---------------- */

    if let Some(p) = progress.as_deref_mut() {
        p.stage("resolve", &options.source.to_string());
    }
    let script_url = locate_script(fetcher, &options.source)?;
    info!(url = %script_url, "script bundle located");

    /* ---------------- Fetch ---------------- */

    if let Some(p) = progress.as_deref_mut() {
        p.stage("fetch", script_url.as_str());
    }
    let script = fetcher.fetch_text(&script_url)?;
    info!(bytes = script.len(), "script bundle fetched");

    /* ---------------- Extract, name, persist ---------------- */

    if let Some(p) = progress.as_deref_mut() {
        p.stage("extract", export.table.revision_tag());
    }

    ensure_directory(&export.out_dir).map_err(|source| ScrapeError::OutputDir {
        path: export.out_dir.clone(),
        source,
    })?;

    let mut written = Vec::new();
    let mut failed = Vec::new();

    for occ in occurrences(&script) {
        let name = export.table.name_for(occ.index);

        match write_artifact(&export.out_dir, &export.prefix, &name, occ.content) {
            Ok(path) => {
                debug!(index = occ.index, %name, path = %path.display(), "artifact written");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(occ.index, &name, &path);
                }
                written.push(Artifact { index: occ.index, name, path });
            }
            Err(source) => {
                let err = WriteError {
                    index: occ.index,
                    path: artifact_path(&export.out_dir, &export.prefix, &name),
                    name,
                    source,
                };
                match export.on_write_error {
                    WritePolicy::Abort => return Err(err.into()),
                    WritePolicy::Continue => {
                        warn!("{err}");
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(&err);
                        }
                        failed.push(err);
                    }
                }
            }
        }
    }

    let found = written.len() + failed.len();
    if found > export.table.len() {
        // More literals than the table knows: the dashboard probably changed.
        warn!(
            revision = export.table.revision_tag(),
            known = export.table.len(),
            found,
            "position table looks stale; extra datasets got numeric names"
        );
    }
    info!(written = written.len(), failed = failed.len(), "run finished");

    if let Some(p) = progress.as_deref_mut() {
        p.finish(written.len());
    }

    Ok(RunSummary { script_url, written, failed })
}
