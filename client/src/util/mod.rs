//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (media devices, blobs, object
//! URLs, the document head) from page and component logic. Each one compiles
//! to a no-op or a typed error outside the `hydrate` build.

pub mod camera;
pub mod dark_mode;
pub mod endpoint;
pub mod media;
