use std::path::Path;

use async_trait::async_trait;

use crate::domain::{BifrostResult, BridgeConfig, UploadOptions, UploadedFile};

/// The live, authenticated binding to exactly one storage backend.
///
/// A handle is either connected (native client present) or disconnected;
/// every mutating operation requires the connected state and fails with
/// [`crate::ErrorKind::ClientError`] otherwise. Handles are produced by
/// [`crate::new_rainbow_bridge`] and never reconnect on their own.
#[async_trait]
pub trait RainbowBridge: Send + Sync {
    /// Upload a single local file under the given object name.
    ///
    /// Options are merged with the handle's defaults as described in
    /// [`crate::domain::options`]. The write is followed by a confirmatory
    /// metadata read; either both succeed or an error is returned and no
    /// [`UploadedFile`] is produced.
    async fn upload_file(
        &self,
        path: &Path,
        filename: &str,
        options: &UploadOptions,
    ) -> BifrostResult<UploadedFile>;

    /// Upload a local directory tree.
    ///
    /// Not implemented by the bundled adapters: returns an empty list
    /// without touching the filesystem or the network.
    async fn upload_folder(
        &self,
        path: &Path,
        options: &UploadOptions,
    ) -> BifrostResult<Vec<UploadedFile>>;

    /// Snapshot of the handle's effective configuration.
    fn config(&self) -> BridgeConfig;

    /// Drop the native client reference. Idempotent and infallible; there is
    /// no remote close call for these stateless HTTP-based backends.
    fn disconnect(&self);

    /// True iff the native client reference is present.
    fn is_connected(&self) -> bool;
}
