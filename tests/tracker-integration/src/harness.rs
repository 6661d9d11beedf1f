use std::path::Path;

use tempfile::TempDir;

use kgtrack_common::customer::CustomerId;
use kgtrack_common::input::CustomerInput;
use kgtrack_common::store::{FileBackend, KvBackend, Store};
use kgtrack_common::tracker::Tracker;

/// A tracker backed by files in a throwaway data directory.
///
/// `restart` drops the in-memory state and reloads from disk, the way a page
/// reload or a second CLI invocation would.
pub struct TestHarness {
    dir: TempDir,
    pub tracker: Tracker<FileBackend>,
    clock_millis: i64,
}

impl TestHarness {
    pub fn setup() -> Self {
        tracing_subscriber::fmt::try_init().ok();
        let dir = tempfile::tempdir().expect("create temp dir");
        let tracker = Self::open_tracker(dir.path());
        Self {
            dir,
            tracker,
            clock_millis: 1_760_000_000_000,
        }
    }

    fn open_tracker(path: &Path) -> Tracker<FileBackend> {
        let backend = FileBackend::open(path).expect("open data dir");
        Tracker::open(Store::new(backend))
    }

    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Reload all state from disk.
    pub fn restart(&mut self) {
        self.tracker = Self::open_tracker(self.dir.path());
    }

    /// Add a customer one simulated second after the previous one.
    pub fn add(&mut self, form: &CustomerInput) -> CustomerId {
        self.clock_millis += 1_000;
        self.tracker
            .add_customer_at(form, self.clock_millis)
            .expect("valid customer form")
    }

    /// Overwrite a stored key with raw text, bypassing the tracker.
    pub fn write_raw(&self, key: &str, raw: &str) {
        FileBackend::open(self.dir.path())
            .expect("open data dir")
            .set_item(key, raw)
            .expect("write raw value");
    }

    pub fn read_raw(&self, key: &str) -> Option<String> {
        FileBackend::open(self.dir.path())
            .expect("open data dir")
            .get_item(key)
            .expect("read raw value")
    }
}
