//! Content module - CMS records, normalization and queries

mod combine;
mod error;
pub mod loader;
mod menu;
mod model;
mod store;

pub use combine::{combine_fields, CombinedFields, SourceRecord};
pub use error::ContentError;
pub use menu::{MenuItem, WpMenu};
pub use model::{
    FeaturedImage, ImageFallback, ImageRef, ImageSharp, ImageSource, ImageSources, LocalFile,
    MediaItem, Nodes, PageFields, PostFields, SectionBlock, Side, WpPage, WpPost,
};
pub use store::{ContentSource, ContentStore};
