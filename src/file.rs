// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::NaiveDate;

use crate::config::consts::{ARTIFACT_EXT, DATE_PREFIX_FORMAT};

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// `<root>/<prefix><name>.json`
pub fn artifact_path(root: &Path, prefix: &str, name: &str) -> PathBuf {
    root.join(format!("{prefix}{name}.{ARTIFACT_EXT}"))
}

/// Write one literal verbatim plus a trailing newline.
/// Creates `root` if needed; truncates any existing file.
pub fn write_artifact(
    root: &Path,
    prefix: &str,
    name: &str,
    content: &str,
) -> io::Result<PathBuf> {
    ensure_directory(root)?;
    let path = artifact_path(root, prefix, name);

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    out.write_all(content.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(path)
}

/// Snapshot prefix for a date, e.g. `2020-09-15-`.
pub fn date_prefix(date: NaiveDate) -> String {
    date.format(DATE_PREFIX_FORMAT).to_string()
}

pub fn today_prefix() -> String {
    date_prefix(chrono::Local::now().date_naive())
}
