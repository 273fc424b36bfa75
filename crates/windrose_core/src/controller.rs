//! Operation boundary between UI events and the [`Session`].
//!
//! Every operation reports its outcome through the [`Notifier`]; the returned
//! `Result` only lets the caller log or branch on it.

use std::path::PathBuf;

use crate::{
    capabilities::{ChartRenderer, FileChooser, Notifier, JSON_FILE_FILTERS},
    error::{ErrorContext, Notice, Result, WindroseError},
    session::Session,
};

pub struct WindroseController<R: ChartRenderer, F, N> {
    session: Session<R>,
    chooser: F,
    notifier: N,
}

impl<R, F, N> WindroseController<R, F, N>
where
    R: ChartRenderer,
    F: FileChooser,
    N: Notifier,
{
    pub fn new(renderer: R, chooser: F, notifier: N) -> Self {
        Self {
            session: Session::new(renderer),
            chooser,
            notifier,
        }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Prompts for a file and stores it when it parses as JSON.
    pub fn select_file(&mut self) -> Result<()> {
        let choice = self
            .chooser
            .choose_file_for_open("Select JSON File", &JSON_FILE_FILTERS);
        let result = match choice {
            Some(path) => self.session.select_file(Some(path)).map(|path| {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                Notice::info("File Selected", format!("File selected: {name}"))
            }),
            None => Err(WindroseError::UserCancelled),
        };
        self.finish(result, ErrorContext::SelectFile)
    }

    /// Selects `path` without a confirmation message; errors are still reported.
    pub fn preselect_file(&mut self, path: PathBuf) -> Result<()> {
        let result = self.session.select_file(Some(path)).map(|_| ());
        self.report_error(result, ErrorContext::SelectFile)
    }

    pub fn generate_charts(&mut self) -> Result<usize> {
        let result = self.session.generate_charts();
        self.report_error(result, ErrorContext::GenerateCharts)
    }

    pub fn show_next(&mut self) -> bool {
        self.session.show_next()
    }

    pub fn show_previous(&mut self) -> bool {
        self.session.show_previous()
    }

    pub fn clear(&mut self) {
        self.session.clear();
        self.notifier.notify(&Notice::info(
            "Cleared",
            "Graphs and selections have been cleared.",
        ));
    }

    /// Clears without telling the user, used when leaving the windrose page.
    pub fn reset(&mut self) {
        self.session.clear();
    }

    /// Asks whether to quit. Returns `true` when the window may close, in
    /// which case all chart handles have already been released.
    pub fn request_shutdown(&mut self) -> bool {
        if !self.notifier.confirm("Quit", "Do you want to quit?") {
            tracing::debug!("shutdown declined");
            return false;
        }
        self.session.release_charts();
        tracing::info!("shutting down windrose session");
        true
    }

    fn finish(&mut self, result: Result<Notice>, context: ErrorContext) -> Result<()> {
        match result {
            Ok(notice) => {
                self.notifier.notify(&notice);
                Ok(())
            }
            Err(err) => Err(self.report(err, context)),
        }
    }

    fn report_error<T>(&mut self, result: Result<T>, context: ErrorContext) -> Result<T> {
        result.map_err(|err| self.report(err, context))
    }

    fn report(&mut self, err: WindroseError, context: ErrorContext) -> WindroseError {
        tracing::warn!(error = %err, ?context, "windrose operation failed");
        self.notifier.notify(&err.to_notice(context));
        err
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
