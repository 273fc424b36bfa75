//! Native dialogs backing the windrose capability traits.

pub mod dialogs;

pub use dialogs::{RfdFileChooser, RfdNotifier};
