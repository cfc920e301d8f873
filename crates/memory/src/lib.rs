//! Memory implementations for Sitewright.
//!
//! - [`AssociativeMemory`]: one session's keyed store
//! - [`SessionRegistry`]: explicit open/close of per-session stores
//! - [`create_associations`] / [`synthesize_information`]: pairwise helpers
//! - [`FileModelStore`]: JSON documents on disk

pub mod associations;
pub mod associative;
pub mod model_store;
pub mod session;

pub use associations::{create_associations, synthesize_information};
pub use associative::AssociativeMemory;
pub use model_store::FileModelStore;
pub use session::SessionRegistry;
