use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed registry of supported storage backends.
///
/// Backend identifiers in [`BridgeConfig::provider`] are resolved against
/// this enum case-insensitively; dispatch in the bridge factory matches on
/// it exhaustively, so an unknown backend cannot reach an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Amazon S3 and S3-compatible object stores.
    SimpleStorageService,
    /// Google Cloud Storage.
    GoogleCloudStorage,
    /// Pinata IPFS pinning service.
    PinataIpfs,
}

impl Provider {
    /// Resolve a backend identifier against the registry, ignoring case.
    pub fn parse(id: &str) -> Option<Self> {
        match id.to_ascii_lowercase().as_str() {
            "s3" => Some(Provider::SimpleStorageService),
            "gcs" => Some(Provider::GoogleCloudStorage),
            "pinata" => Some(Provider::PinataIpfs),
            _ => None,
        }
    }

    /// The canonical identifier, as the caller supplies it in configuration.
    pub fn id(&self) -> &'static str {
        match self {
            Provider::SimpleStorageService => "s3",
            Provider::GoogleCloudStorage => "gcs",
            Provider::PinataIpfs => "pinata",
        }
    }

    /// Human-readable backend name, used in log messages.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::SimpleStorageService => "Amazon S3",
            Provider::GoogleCloudStorage => "Google Cloud Storage",
            Provider::PinataIpfs => "Pinata IPFS",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generic bridge configuration capturing every field any backend might need.
/// No backend reads fields it does not need.
///
/// Constructed once by the caller and read-only thereafter; the bridge never
/// mutates it. [`crate::RainbowBridge::config`] returns a snapshot of the
/// same shape reflecting the handle's effective settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Backend identifier, matched case-insensitively against [`Provider`].
    pub provider: String,
    /// Default bucket or container. May be empty: some backends (pinning
    /// services) have no bucket concept.
    pub default_bucket: String,
    /// Backend region, where applicable.
    pub region: String,
    /// Static access key. Paired with `secret_key`; if either is absent the
    /// S3 adapter falls back to ambient/shared environment credentials.
    pub access_key: Option<String>,
    /// Static secret key.
    pub secret_key: Option<String>,
    /// Path to a service-account credentials file (GCS). Absent means
    /// ambient authentication.
    pub credentials_file: Option<String>,
    /// Project identifier, echoed back through `config()`.
    pub project: Option<String>,
    /// Per-operation timeout in seconds. `0` means no timeout.
    pub default_timeout: u64,
    /// Emit diagnostic warnings during construction.
    pub enable_debug: bool,
    /// Grant public read access to uploads by default. Overridable per
    /// upload through the options map.
    pub public_read: bool,
    /// Prefer asynchronous backend operations where the vendor supports it.
    pub use_async: bool,
    /// Bearer token for the Pinata pinning backend.
    pub pinata_jwt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_known_backends() {
        assert_eq!(Provider::parse("s3"), Some(Provider::SimpleStorageService));
        assert_eq!(Provider::parse("gcs"), Some(Provider::GoogleCloudStorage));
        assert_eq!(Provider::parse("pinata"), Some(Provider::PinataIpfs));
    }

    #[test]
    fn registry_match_ignores_case() {
        assert_eq!(Provider::parse("S3"), Some(Provider::SimpleStorageService));
        assert_eq!(Provider::parse("GcS"), Some(Provider::GoogleCloudStorage));
        assert_eq!(Provider::parse("PINATA"), Some(Provider::PinataIpfs));
    }

    #[test]
    fn registry_rejects_unknown_backends() {
        assert_eq!(Provider::parse(""), None);
        assert_eq!(Provider::parse("azure"), None);
        assert_eq!(Provider::parse("s 3"), None);
    }

    #[test]
    fn identifiers_round_trip() {
        for provider in [
            Provider::SimpleStorageService,
            Provider::GoogleCloudStorage,
            Provider::PinataIpfs,
        ] {
            assert_eq!(Provider::parse(provider.id()), Some(provider));
        }
    }
}
