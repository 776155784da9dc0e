#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

/// Temporary directory that keeps written fixture files alive for the
/// duration of a test.
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("temp dir should be created") }
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("fixture file should be written");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

pub fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 24).unwrap()
}

pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    fixture_date().and_hms_opt(hour, minute, 0).unwrap()
}
