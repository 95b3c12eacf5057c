//! Model layer
//!
//! State-related types:
//! - `GalleryManifest` / `GalleryEntry` - the item collection as authored
//! - `Control` / `Filter` - filter buttons and the predicate they derive
//! - `ModalStack` - modal overlay management

pub mod filter;
pub mod item;
pub mod modal;

// Re-export commonly used types
pub use filter::{Control, Filter};
pub use item::{FilterSpec, GalleryEntry, GalleryManifest};
