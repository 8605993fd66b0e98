//! Bridge construction: configuration validation, registry dispatch, and
//! per-backend authentication.

use crate::adapters::{GoogleCloudStorage, PinataIpfsStorage, SimpleStorageService};
use crate::domain::{BifrostError, BifrostResult, BridgeConfig, Provider};
use crate::ports::RainbowBridge;

/// Validate the configuration and return a handle bound to one backend.
///
/// Validation is sequential and each failure is terminal; no partially
/// constructed handle is ever returned. An empty or unknown provider is
/// `BadRequest`; a missing default bucket is not fatal (some backends have
/// no bucket concept) and only produces a warning when debugging is enabled.
///
/// Each adapter constructor performs its own authentication: exactly one
/// network-authenticating client is created and stored in the returned
/// handle, with no retries at this layer. Authentication failures are
/// `Unauthorized`.
pub async fn new_rainbow_bridge(config: &BridgeConfig) -> BifrostResult<Box<dyn RainbowBridge>> {
    if config.provider.is_empty() {
        return Err(BifrostError::bad_request("no provider specified"));
    }
    let provider = Provider::parse(&config.provider).ok_or_else(|| {
        BifrostError::bad_request(format!("invalid provider: {}", config.provider))
    })?;

    if config.default_bucket.is_empty() && config.enable_debug {
        tracing::warn!(
            provider = %provider,
            "no bucket specified; operations may fail or require a bucket per call"
        );
    }

    match provider {
        Provider::SimpleStorageService => {
            Ok(Box::new(SimpleStorageService::connect(config).await?))
        }
        Provider::GoogleCloudStorage => Ok(Box::new(GoogleCloudStorage::connect(config)?)),
        Provider::PinataIpfs => Ok(Box::new(PinataIpfsStorage::connect(config)?)),
    }
}
