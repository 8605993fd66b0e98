//! bifrost — a configuration-driven bridge for shipping files to cloud
//! object storage.
//!
//! Callers build one [`BridgeConfig`], hand it to [`new_rainbow_bridge`],
//! and get back a handle that is polymorphic over the supported backends
//! (Amazon S3, Google Cloud Storage, the Pinata IPFS pinning service). Every
//! adapter satisfies the same operation contract: upload semantics, option
//! precedence, and the closed error taxonomy are identical regardless of the
//! underlying vendor API.
//!
//! ```no_run
//! use bifrost::{new_rainbow_bridge, BridgeConfig, UploadOptions};
//!
//! # async fn demo() -> bifrost::BifrostResult<()> {
//! let config = BridgeConfig {
//!     provider: "s3".to_owned(),
//!     default_bucket: "assets".to_owned(),
//!     region: "us-east-1".to_owned(),
//!     access_key: Some("AKIA...".to_owned()),
//!     secret_key: Some("...".to_owned()),
//!     ..Default::default()
//! };
//! let bridge = new_rainbow_bridge(&config).await?;
//! let uploaded = bridge
//!     .upload_file("/tmp/photo.png".as_ref(), "photo.png", &UploadOptions::new())
//!     .await?;
//! println!("{}", uploaded.preview);
//! # Ok(())
//! # }
//! ```
//!
//! The crate holds no state and provides no durability guarantee beyond
//! what the vendor API returns synchronously. Transport, retries, and auth
//! handshakes are delegated entirely to the vendor crates.

pub mod adapters;
pub mod bridge;
pub mod domain;
pub mod ports;

// Domain types - configuration, errors, options, results
pub use domain::{
    resolve_put_params, AccessControl, BifrostError, BifrostResult, BridgeConfig, ErrorKind,
    ObjectAttrs, Provider, PutParams, UploadOptions, UploadedFile, ACL_PRIVATE, ACL_PUBLIC_READ,
    OPT_ACL, OPT_CONTENT_TYPE, OPT_METADATA,
};

// Port traits - the bridge capability set and the native-client seams
pub use ports::{ObjectApi, PinReceipt, PinningApi, RainbowBridge};

// Adapter types - one handle per backend
pub use adapters::{GoogleCloudStorage, PinataIpfsStorage, SimpleStorageService};

// Bridge factory
pub use bridge::new_rainbow_bridge;

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        new_rainbow_bridge, BifrostError, BifrostResult, BridgeConfig, ErrorKind, RainbowBridge,
        UploadOptions, UploadedFile,
    };
}
