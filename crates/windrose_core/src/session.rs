//! Session state: selected file, rendered charts and the navigation cursor.
//!
//! `current_index` is `Some` exactly when `charts` is non-empty and always
//! points inside it. Every method below keeps that pairing intact, including
//! on error paths.

use std::path::{Path, PathBuf};

use crate::{
    capabilities::ChartRenderer,
    chart::{build_charts, Chart},
    dataset::{read_json, WindroseDataset},
    error::{Result, WindroseError},
};

pub struct RenderedChart<H> {
    pub chart: Chart,
    pub handle: H,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Empty,
    FileSelected,
    Generated,
}

/// Which controls the window should offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub select: bool,
    pub generate: bool,
    pub clear: bool,
    pub previous: bool,
    pub next: bool,
}

pub struct Session<R: ChartRenderer> {
    renderer: R,
    selected_file: Option<PathBuf>,
    charts: Vec<RenderedChart<R::Handle>>,
    current_index: Option<usize>,
}

impl<R: ChartRenderer> Session<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            selected_file: None,
            charts: Vec::new(),
            current_index: None,
        }
    }

    /// Stores `path` after checking it holds well-formed JSON. The windrose
    /// schema itself is only checked by [`Session::generate_charts`].
    pub fn select_file(&mut self, path: Option<PathBuf>) -> Result<&Path> {
        let path = path.ok_or(WindroseError::NoFileSelected)?;
        read_json(&path)?;
        tracing::info!(path = %path.display(), "selected windrose file");
        Ok(self.selected_file.insert(path).as_path())
    }

    /// Re-reads the selected file and replaces the chart list with one chart
    /// per record. On failure the previous charts are left untouched.
    pub fn generate_charts(&mut self) -> Result<usize> {
        let path = self
            .selected_file
            .clone()
            .ok_or(WindroseError::NoFileSelected)?;
        let value = read_json(&path)?;
        let dataset = WindroseDataset::from_value(&value)?;
        let charts = build_charts(&dataset);

        self.release_charts();
        let renderer = &mut self.renderer;
        let rendered: Vec<_> = charts
            .into_iter()
            .map(|chart| {
                let handle = renderer.render(&chart);
                RenderedChart { chart, handle }
            })
            .collect();
        self.charts = rendered;
        self.current_index = (!self.charts.is_empty()).then_some(0);

        tracing::info!(
            path = %path.display(),
            charts = self.charts.len(),
            "generated windrose charts"
        );
        Ok(self.charts.len())
    }

    /// Returns `true` when the cursor moved.
    pub fn show_next(&mut self) -> bool {
        match self.current_index {
            Some(index) if index + 1 < self.charts.len() => {
                self.current_index = Some(index + 1);
                tracing::debug!(index = index + 1, "showing next chart");
                true
            }
            _ => false,
        }
    }

    /// Returns `true` when the cursor moved.
    pub fn show_previous(&mut self) -> bool {
        match self.current_index {
            Some(index) if index > 0 => {
                self.current_index = Some(index - 1);
                tracing::debug!(index = index - 1, "showing previous chart");
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.release_charts();
        self.selected_file = None;
        tracing::info!("cleared windrose session");
    }

    /// Disposes every rendered chart and resets the cursor.
    pub fn release_charts(&mut self) {
        let released = self.charts.len();
        for rendered in self.charts.drain(..) {
            self.renderer.dispose(rendered.handle);
        }
        self.current_index = None;
        if released > 0 {
            tracing::debug!(released, "released chart handles");
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.charts.is_empty() {
            SessionPhase::Generated
        } else if self.selected_file.is_some() {
            SessionPhase::FileSelected
        } else {
            SessionPhase::Empty
        }
    }

    pub fn controls(&self) -> ControlState {
        ControlState {
            select: true,
            generate: self.selected_file.is_some(),
            clear: !self.charts.is_empty(),
            previous: self.charts.len() > 1,
            next: self.charts.len() > 1,
        }
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn charts(&self) -> &[RenderedChart<R::Handle>] {
        &self.charts
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current(&self) -> Option<&RenderedChart<R::Handle>> {
        self.current_index.and_then(|index| self.charts.get(index))
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: ChartRenderer> Drop for Session<R> {
    fn drop(&mut self) {
        self.release_charts();
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
