//! Windrose input validation, chart construction and session control.

pub mod capabilities;
pub mod chart;
pub mod controller;
pub mod dataset;
pub mod direction;
pub mod error;
pub mod session;

pub use capabilities::{ChartRenderer, FileChooser, FileFilter, Notifier, JSON_FILE_FILTERS};
pub use chart::{build_charts, Bar, Chart, ChartColor, BAR_ALPHA, PALETTE};
pub use controller::WindroseController;
pub use dataset::{
    load_dataset, parse_dataset, AltitudeBand, Measurement, WindroseDataset, WindroseRecord,
    ALTITUDE_BANDS, MEASUREMENTS_PER_RECORD,
};
pub use direction::{CompassPoint, COMPASS_POINTS, SECTOR_WIDTH};
pub use error::{Notice, NoticeKind, SchemaError, WindroseError};
pub use session::{ControlState, RenderedChart, Session, SessionPhase};
