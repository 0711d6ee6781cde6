//! # Dashboard Presentation Adapter
//!
//! Maps Return Engine output onto something a user can look at: return charts,
//! a summary table or bar chart, and a downloadable CSV.
//!
//! ## Architectural Principles
//!
//! - **One trigger:** `Dashboard::recompute` takes a validated `DashboardConfig`
//!   and returns a complete `RenderPayload`. A CLI command, an HTTP handler and a
//!   test all call it the same way; there is no hidden state between calls.
//! - **Never fails the session:** provider errors and insufficient data become
//!   `DashboardWarning`s inside the payload. Only the affected sections are
//!   left empty.
//!
//! ## Public API
//!
//! - `Dashboard`: holds the provider and benchmark settings; runs recomputations.
//! - `RenderPayload` and its parts (`ReturnCharts`, `ChartSeries`, `SummaryView`).
//! - `export_csv` / `import_csv`: the flat tabular form of a `CapmResult`.
//! - `render_text` / `TextReport`: a terminal rendering of a payload.

pub mod adapter;
pub mod error;
pub mod export;
pub mod payload;
pub mod render;
pub mod view;

pub use adapter::Dashboard;
pub use error::{DashboardError, ExportError};
pub use export::{EXPORT_COLUMNS, export_csv, export_file_name, import_csv};
pub use payload::{ChartSeries, DashboardWarning, RenderPayload, ReturnCharts};
pub use render::{TextReport, render_text};
pub use view::{Bar, SummaryRow, SummaryView, format_beta, format_percent};
