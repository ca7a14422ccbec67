//! report-builder: assemble interactive HTML reports from plots, tables and text.
//!
//! This crate provides an ordered, keyed collection model for report content
//! ([`ReportSection`]), a top-level [`Report`] that stitches sections into a
//! single self-contained HTML document, plotting and table helpers built on
//! `plotly` and `maud`, and loaders for turning delimited tool output into
//! report tables.
//!
//! Items added to a report take an optional key; re-adding under the same key
//! updates the item in place while keeping its original position, which makes
//! it possible to reserve [`placeholders`](ReportSection::placeholder) early in
//! a pipeline and fill them in once results are available. Rendering refuses to
//! produce a document while any placeholder is unfilled.
pub mod error;
pub mod io;
mod keys;
pub mod plots;
pub mod report;
mod resources;
pub mod section;
pub mod table;
pub mod workflow;

pub use error::ReportError;
pub use report::Report;
pub use section::{AlertLevel, Item, ReportSection};
pub use table::{DataTable, TableConfig};
pub use workflow::WorkflowReport;
