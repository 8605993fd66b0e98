pub mod config;
pub mod errors;
pub mod options;
pub mod uploaded;

// Re-export commonly used types
pub use config::{BridgeConfig, Provider};
pub use errors::{BifrostError, BifrostResult, ErrorKind};
pub use options::{
    resolve_put_params, AccessControl, PutParams, UploadOptions, ACL_PRIVATE, ACL_PUBLIC_READ,
    OPT_ACL, OPT_CONTENT_TYPE, OPT_METADATA,
};
pub use uploaded::{ObjectAttrs, UploadedFile};
