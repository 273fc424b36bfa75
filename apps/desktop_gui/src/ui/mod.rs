//! UI layer for the desktop GUI: app shell and polar chart drawing.

pub mod app;
pub mod chart_view;

pub use app::{StartupConfig, WindroseGuiApp};
