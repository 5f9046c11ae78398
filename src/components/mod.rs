//! Reusable page components

mod image;
pub mod image_section;
mod seo;

pub use image::render_image;
pub use image_section::{image_left, image_right, SectionProps};
pub use seo::Seo;
