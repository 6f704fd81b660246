//! Author presentation layer
//!
//! Turns loosely structured author metadata into a presentation descriptor.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ AuthorRecord │────▶│   Classify   │────▶│  Presenter   │
//! │ (free text)  │     │ (AuthorKind) │     │ (Descriptor) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!                              ┌───────────────────┤
//!                              ▼                   ▼
//!                       ┌─────────────┐     ┌─────────────┐
//!                       │  Sanitize   │     │   Avatar    │
//!                       │   (names)   │     │   (URLs)    │
//!                       └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`record`]: `AuthorRecord` and npm person string parsing
//! - [`classify`]: String heuristics that pick an [`classify::AuthorKind`]
//! - [`sanitize`]: Display name cleanup
//! - [`avatar`]: GitHub and gravatar address builders
//! - [`presenter`]: `present` and the `RenderDescriptor` it returns

pub mod avatar;
pub mod classify;
pub mod presenter;
pub mod record;
pub mod sanitize;

/// Label shown whenever no usable name exists
pub const UNKNOWN_LABEL: &str = "Unknown";
