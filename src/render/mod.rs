//! Chart rendering to interactive HTML
//!
//! Figures are plain plotly JSON trees; [`html::write_html`] wraps them in a
//! page that loads plotly.js.

pub mod html;
pub mod plot2d;
pub mod plot3d;

pub use html::{html_page, write_html};
pub use plot2d::{figure_2d, TITLE_2D};
pub use plot3d::{figure_3d, title_3d};
