//! Test helpers for staging catalogue and interaction files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const CATALOGUE_JSON: &str = r#"[
  {"id": 1, "title": "Jazz Festival", "tags": {"music": 1.0, "outdoors": 0.3}},
  {"id": 2, "title": "Nature Hike", "tags": {"outdoors": 0.9}},
  {"id": 3, "title": "Food Truck Fiesta", "tags": {"food": 0.8, "outdoors": 0.5}}
]"#;

/// A save of food and outdoors made on the reference day.
pub(super) const SAVE_JSON: &str = r#"[
  {"tags": ["food", "outdoors"], "kind": "save", "occurred_at": "2025-04-15"}
]"#;

pub(super) const REFERENCE_NOW: &str = "2025-04-15";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    eventhub_fs::write_file(path, contents).expect("write test file");
}

/// Temporary directory holding the staged inputs for one test.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn stage(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

pub(super) fn json_output(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("output should be JSON")
}
