//! Ports over the vendor-native clients.
//!
//! Adapters talk to their backend exclusively through these traits, which
//! keeps the vendor SDK behind a seam that tests can replace with fakes.
//! Port failures always carry [`crate::ErrorKind::FileOperationFailed`];
//! classification above that (missing file, disconnected handle) happens in
//! the adapter before the port is reached.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;

use crate::domain::{BifrostResult, ObjectAttrs, PutParams};

/// Write/read port for bucketed object stores (S3, GCS).
#[async_trait]
pub trait ObjectApi: Send + Sync {
    /// Store `body` under `key` in `bucket` with the resolved parameters.
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        params: &PutParams,
    ) -> BifrostResult<()>;

    /// Read object metadata without retrieving data. Serves as the
    /// post-write existence check and the authoritative size source.
    async fn head(&self, bucket: &str, key: &str) -> BifrostResult<ObjectAttrs>;
}

/// Receipt returned by the pinning service for a successful pin.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PinReceipt {
    /// Content identifier of the pinned file.
    pub ipfs_hash: String,
    /// Pinned size in bytes as reported by the service.
    pub pin_size: u64,
    /// Service-side pin timestamp, echoed verbatim.
    pub timestamp: String,
}

/// Port for IPFS pinning services. Pins are content-addressed, so the
/// receipt is authoritative and no confirmatory read follows.
#[async_trait]
pub trait PinningApi: Send + Sync {
    async fn pin_file(
        &self,
        file_name: &str,
        body: Bytes,
        params: &PutParams,
    ) -> BifrostResult<PinReceipt>;
}
