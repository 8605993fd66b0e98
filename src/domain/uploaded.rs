use std::collections::HashMap;

/// Backend-reported object metadata, learned from the confirmatory read that
/// follows every successful write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectAttrs {
    /// Object size in bytes as reported by the backend.
    pub size: u64,
    pub e_tag: Option<String>,
    pub content_type: Option<String>,
    /// Custom string metadata attached to the object. The Pinata adapter
    /// records the content identifier here under the `cid` key.
    pub metadata: HashMap<String, String>,
}

/// Result record produced once per successful upload. Immutable; ownership
/// passes to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    /// Object key the file was stored under.
    pub name: String,
    /// Bucket or container owning the object. Empty for bucketless backends.
    pub bucket: String,
    /// Local source path as given to the upload call.
    pub path: String,
    /// Deterministically constructed public/preview URL.
    pub preview: String,
    /// Size in bytes as reported by the backend, not the local filesystem.
    pub size: u64,
    /// Backend-native object metadata.
    pub attrs: ObjectAttrs,
}
