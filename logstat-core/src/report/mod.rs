//! Ranked report: selection and rendering
//!
//! Aggregation
//! select_top (time_sum desc, path asc)
//! ReportRow
//! render_html / render_json / render_table
//! write_report

mod error;
mod html;
mod output;
mod row;
mod select;
mod text;

#[cfg(test)]
mod tests;

pub use error::RenderError;
pub use html::{TABLE_PLACEHOLDER, load_template, render_html, render_json, table_json};
pub use output::{ReportFormat, report_exists, report_file_name, write_report};
pub use row::ReportRow;
pub use select::select_top;
pub use text::render_table;
