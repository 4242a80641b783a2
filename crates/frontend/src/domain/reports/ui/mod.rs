pub mod pane;

pub use pane::{report_sections, ReportSection, ReportsPane};
