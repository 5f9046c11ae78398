//! Helper functions shared by the templates and components

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
