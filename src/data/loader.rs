use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Context, Result};

use super::model::Dataset;
use super::parser::parse_csv;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a CSV file and parse it into a [`Dataset`]. The extension is not
/// checked; any readable text file is parsed as CSV.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let dataset =
        parse_csv(&text).with_context(|| format!("parsing {}", path.display()))?;

    log::info!(
        "Loaded {} records from {} with columns {:?}",
        dataset.len(),
        path.display(),
        dataset.headers
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Background loading
// ---------------------------------------------------------------------------

/// A load running on a worker thread.
pub struct PendingLoad {
    pub path: PathBuf,
    rx: Receiver<Result<Dataset>>,
}

impl PendingLoad {
    /// Start loading `path` on a new thread. `on_done` runs on the worker
    /// after the result is sent (the UI uses it to request a repaint).
    pub fn spawn(path: PathBuf, on_done: impl FnOnce() + Send + 'static) -> Self {
        let (tx, rx) = mpsc::channel();
        let worker_path = path.clone();
        thread::spawn(move || {
            let result = load_file(&worker_path);
            // Receiver gone means the load was superseded.
            let _ = tx.send(result);
            on_done();
        });
        Self { path, rx }
    }

    /// Non-blocking poll. `None` while the worker is still running.
    pub fn poll(&self) -> Option<Result<Dataset>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(anyhow::anyhow!(
                "loader thread for {} exited without a result",
                self.path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn csv_file(contents: &str) -> NamedTempFile {
        text_file(".csv", contents)
    }

    fn text_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_csv_from_disk() {
        let file = csv_file("region,smoker,sex,bmi,charges\nnortheast,no,female,22.1,3000\n");
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].charges, Some(3000.0));
    }

    #[test]
    fn missing_file_is_an_error_with_path() {
        let err = load_file(Path::new("/nonexistent/insurance.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/insurance.csv"));
    }

    #[test]
    fn loads_csv_content_regardless_of_extension() {
        for suffix in [".txt", ""] {
            let file = text_file(suffix, "region,charges\nnorthwest,42\n");
            let ds = load_file(file.path()).unwrap();
            assert_eq!(ds.len(), 1);
            assert_eq!(ds.records[0].region.as_deref(), Some("northwest"));
        }
    }

    #[test]
    fn background_load_delivers_dataset() {
        let file = csv_file("region,charges\nsouthwest,10\nsoutheast,20\n");
        let (tx, rx) = mpsc::channel();
        let pending = PendingLoad::spawn(file.path().to_path_buf(), move || {
            let _ = tx.send(());
        });
        rx.recv().unwrap();
        let ds = pending.poll().unwrap().unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn background_load_reports_failure() {
        let (tx, rx) = mpsc::channel();
        let pending = PendingLoad::spawn(PathBuf::from("/nonexistent/data.csv"), move || {
            let _ = tx.send(());
        });
        rx.recv().unwrap();
        assert!(pending.poll().unwrap().is_err());
    }
}
