use std::path::PathBuf;

use crate::color::ColorMap;
use crate::data::aggregate::{aggregate, scatter_points, DerivedAggregate, ScatterPoint};
use crate::data::filter::{Choice, Dimension, FilterSelection};
use crate::data::loader::PendingLoad;
use crate::data::model::{Dataset, Record};
use crate::data::options::{derive_options, FilterOptions};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until the first load finishes).
    pub dataset: Option<Dataset>,

    /// Path of the last requested file, used by Reload.
    pub data_path: Option<PathBuf>,

    /// Current filter selection.
    pub filters: FilterSelection,

    /// Choices per dimension, derived from the full dataset.
    pub options: FilterOptions,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Statistics over the visible records (cached).
    pub aggregate: DerivedAggregate,

    /// Scatter chart points for the visible records (cached).
    pub scatter: Vec<ScatterPoint>,

    /// Bar colours keyed by raw region value.
    pub region_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,

    pending: Option<PendingLoad>,
}

impl AppState {
    /// Start loading `path` in the background. Replaces any load in flight.
    pub fn start_load(&mut self, path: PathBuf, on_done: impl FnOnce() + Send + 'static) {
        log::info!("Loading {}", path.display());
        self.data_path = Some(path.clone());
        self.pending = Some(PendingLoad::spawn(path, on_done));
        self.loading = true;
        self.status_message = None;
    }

    /// Pick up the result of a background load, if it has finished.
    pub fn poll_load(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };
        let Some(result) = pending.poll() else {
            return;
        };
        self.pending = None;
        match result {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => self.fail_load(&e),
        }
    }

    /// Ingest a newly loaded dataset, derive options and reset filters.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.options = derive_options(&dataset.records);
        self.region_colors = ColorMap::new(
            self.options
                .region
                .iter()
                .filter_map(|c| match c {
                    Choice::Value(v) => Some(v.as_str()),
                    Choice::All => None,
                }),
        );
        let filters = std::mem::take(&mut self.filters);
        self.filters = self.clamp_to_options(filters);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.refilter();
    }

    /// Record a failed load: report it and fall back to an empty dataset.
    pub fn fail_load(&mut self, err: &anyhow::Error) {
        log::error!("Failed to load data: {err:#}");
        self.set_dataset(Dataset::default());
        self.status_message = Some(format!("Error: {err:#}"));
    }

    /// Recompute the filtered view and everything derived from it.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            self.visible_indices.clear();
            self.aggregate = DerivedAggregate::default();
            self.scatter.clear();
            return;
        };
        self.visible_indices = ds
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.filters.accepts(r))
            .map(|(i, _)| i)
            .collect();

        let view: Vec<&Record> = self.visible_indices.iter().map(|&i| &ds.records[i]).collect();
        self.aggregate = aggregate(&view);
        self.scatter = scatter_points(&view);
    }

    /// Change the choice for one dimension.
    pub fn set_choice(&mut self, dim: Dimension, choice: Choice) {
        if *self.filters.get(dim) == choice {
            return;
        }
        self.filters.set(dim, choice);
        self.refilter();
    }

    /// Restore the unconstrained selection.
    pub fn reset_filters(&mut self) {
        self.filters = FilterSelection::default();
        self.refilter();
    }

    /// Number of records in the loaded dataset.
    pub fn total_records(&self) -> usize {
        self.dataset.as_ref().map_or(0, Dataset::len)
    }

    // Choices absent from the new dataset's options fall back to All.
    fn clamp_to_options(&self, mut selection: FilterSelection) -> FilterSelection {
        for dim in Dimension::ALL {
            if !self.options.get(dim).contains(selection.get(dim)) {
                selection.set(dim, Choice::All);
            }
        }
        selection
    }
}
