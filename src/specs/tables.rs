// src/specs/tables.rs
//! Position tables: which dataset sits at which `JSON.parse` ordinal.
//!
//! The bundle carries no names, only order. Each table below was mapped by
//! hand against one revision of the dashboard and goes stale when the
//! dashboard adds/reorders datasets. Indices past the end of a table fall back
//! to their zero-padded ordinal (`"23"`), so every literal still gets a file.
//!
//! Revision notes (index → content):
//! - 00 county geometry
//! - 01 datetime of the last update
//! - 02/03 positives and deaths over time, GA + counties (03 is the one shown
//!   as "COVID-19 By County" / "Over Time")
//! - 04 PCR test counts over time
//! - 05 county summary (subset of 07), 07 county summary
//! - 06 individual deaths (age, race, sex, county, chronic condition)
//! - 08 IQR summary
//! - 09/10 cases and deaths by race/ethnicity; totals by demographic and county
//! - 11/12 lab testing over time and summary
//! - 13/14 current totals and their increments
//! - 15 positives and hospitalizations per patient record
//! - 16..21 demographic and comorbidity breakdowns
//! - 22 current test counts (PCR and antibody)
//! - 23 lab testing summary (added 2020-09-22)

use std::{fs, io, path::Path};

const REV_2020_09_15: &[&str] = &[
    "geometry_county",
    "last_updated",
    "cases_county_over_time0",
    "cases_county_over_time",
    "tests_over_time",
    "summary_county0",
    "deaths",
    "summary_county",
    "iqr",
    "cases_by_race_ethnicity",
    "cases_totals",
    "lab_testing",
    "lab_testing_totals",
    "current_status",
    "current_status_changes",
    "positive_cases",
    "demographics",
    "comorbidities",
    "comorbidities_by_sex",
    "comorbidities_by_race_and_sex",
    "cases_tally",
    "comorbidity_total",
    "current_status_tests",
];

const REV_2020_09_22: &[&str] = &[
    "geometry_county",
    "last_updated",
    "cases_county_over_time0",
    "cases_county_over_time",
    "tests_over_time",
    "summary_county0",
    "deaths",
    "summary_county",
    "iqr",
    "cases_by_race_ethnicity",
    "cases_totals",
    "lab_testing",
    "lab_testing_totals",
    "current_status",
    "current_status_changes",
    "positive_cases",
    "demographics",
    "comorbidities",
    "comorbidities_by_sex",
    "comorbidities_by_race_and_sex",
    "cases_tally",
    "comorbidity_total",
    "current_status_tests",
    "lab_testing_summary",
];

/// Built-in revisions, oldest first. The last one is the default.
pub const REVISIONS: &[(&str, &[&str])] = &[
    ("2020-09-15", REV_2020_09_15),
    ("2020-09-22", REV_2020_09_22),
];

/// Dataset name for ordinal `index`: `names[index]`, or the zero-padded
/// ordinal once the table runs out. Never fails.
pub fn name_for<S: AsRef<str>>(index: usize, names: &[S]) -> String {
    match names.get(index) {
        Some(name) => name.as_ref().to_string(),
        None => format!("{index:02}"),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionTable {
    revision: String,
    names: Vec<String>,
}

impl PositionTable {
    pub fn from_names<I, S>(revision: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            revision: revision.to_string(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Built-in table by revision tag, e.g. `"2020-09-15"`.
    pub fn revision(tag: &str) -> Option<Self> {
        REVISIONS
            .iter()
            .find(|(rev, _)| *rev == tag)
            .map(|(rev, names)| Self::from_names(rev, names.iter().copied()))
    }

    pub fn latest() -> Self {
        let (rev, names) = REVISIONS[REVISIONS.len() - 1];
        Self::from_names(rev, names.iter().copied())
    }

    /// One name per line; blank lines and `#` comments are skipped.
    /// Line order is position order.
    pub fn parse(revision: &str, text: &str) -> Self {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'));
        Self::from_names(revision, names)
    }

    /// Load a custom table from disk; the file name becomes the revision tag.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let revision = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("custom"));
        Ok(Self::parse(&revision, &text))
    }

    pub fn name_for(&self, index: usize) -> String {
        name_for(index, &self.names)
    }

    pub fn revision_tag(&self) -> &str {
        &self.revision
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(index, name)` pairs, for listing.
    pub fn describe(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }
}
