//! answerlens-report — render session reports for people.
//!
//! JSON persistence lives on [`answerlens_core::report::SessionReport`]; this
//! crate adds a self-contained HTML page and a Markdown summary.

pub mod html;
pub mod markdown;

pub use html::{generate_html, write_html_report};
pub use markdown::{generate_markdown, write_markdown_report};
