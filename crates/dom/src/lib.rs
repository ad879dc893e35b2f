//! Element Registry
//!
//! In-memory tree of labeled elements addressed by caller-chosen string ids.
//!
//! ## Core Design
//!
//! ```text
//! "node-7" → ElementRegistry.id_map → ElementId (u32) → Vec<Element>
//!                                           ↑
//!                       parent / children are handles too
//! ```
//!
//! The plain operations never fail: unknown ids turn mutations into no-ops
//! and queries into empty strings. `try_*` variants report what was missing.

pub mod arena;
pub mod error;
pub mod serializer;
pub mod types;
pub mod workload;

pub use arena::{ElementRegistry, RegistryConfig};
pub use error::{DomError, Result};
pub use serializer::{SerializerConfig, TreeSerializer};
pub use types::*;
