pub mod author;
pub mod config;
pub mod manifest;
pub mod registry;
pub mod render;

pub use author::presenter::{RenderDescriptor, present};
pub use author::record::AuthorRecord;
pub use author::sanitize::sanitize_name;
