//! Model persistence trait: the outbound blob-store boundary.
//!
//! Loading is forgiving: a missing or malformed document is reported as
//! `None` (and logged by the implementation), exactly as if it never existed.
//! Saving is strict: any I/O failure propagates to the caller.

use async_trait::async_trait;

use crate::error::ModelStoreError;

#[async_trait]
pub trait ModelStore: Send + Sync {
    /// The store name (e.g., "file").
    fn name(&self) -> &str;

    /// Create the backing location if needed. Idempotent.
    async fn ensure_directory(&self) -> Result<(), ModelStoreError>;

    /// Serialize `data` under `name`, overwriting any previous document.
    async fn save_model(&self, name: &str, data: &serde_json::Value)
        -> Result<(), ModelStoreError>;

    /// Load the document stored under `name`.
    async fn load_model(&self, name: &str) -> Option<serde_json::Value>;
}
