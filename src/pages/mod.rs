//! Page templates

mod archive;
mod post;

pub use archive::render_archive;
pub use post::render_post;
