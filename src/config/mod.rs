//! Configuration module

mod site;

pub use site::BlogConfig;
pub use site::PostConfig;
pub use site::SectionsConfig;
pub use site::SiteConfig;
