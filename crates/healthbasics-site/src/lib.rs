//! healthbasics-site — static HTML rendering of every route.

pub mod html;
pub mod manifest;
pub mod writer;

pub use html::{render_page, render_path, PageContext, ViewState};
pub use writer::write_site;
