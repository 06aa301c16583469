//! Chart construction and the HTML page that displays it.

pub mod chart;
pub mod html;

pub use chart::{ChartConfig, build_figure};
pub use html::render_html_report;
