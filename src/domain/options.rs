//! Per-upload option resolution.
//!
//! Options arrive as a heterogeneous bag and are merged with the handle's
//! defaults using last-write-wins over a small recognized key set. The merge
//! is deliberately permissive: unrecognized keys and type-mismatched values
//! are dropped without error. All of that behavior lives in
//! [`resolve_put_params`] so it stays visible and testable in one place.

use std::collections::HashMap;

use serde_json::Value;

/// Per-call option bag passed to upload operations.
pub type UploadOptions = HashMap<String, Value>;

/// Option key selecting the access-control grant for the uploaded object.
pub const OPT_ACL: &str = "acl";
/// Option key setting the content type of the uploaded object.
pub const OPT_CONTENT_TYPE: &str = "content-type";
/// Option key attaching custom string metadata to the uploaded object.
pub const OPT_METADATA: &str = "metadata";

/// Recognized value of [`OPT_ACL`] granting public read access.
pub const ACL_PUBLIC_READ: &str = "public-read";
/// Recognized value of [`OPT_ACL`] restricting access to the owner.
pub const ACL_PRIVATE: &str = "private";

/// Access-control grant applied to an uploaded object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessControl {
    PublicRead,
    Private,
}

/// Resolved write parameters handed to the native-client port.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutParams {
    /// `None` leaves the backend's own default in effect.
    pub acl: Option<AccessControl>,
    pub content_type: Option<String>,
    pub metadata: HashMap<String, String>,
}

/// Merge the handle's public-read default with a per-upload options map.
///
/// The default seeds the grant; an explicit `acl` option overrides it.
/// Unrecognized keys are ignored. A recognized key carrying a value of the
/// wrong shape is ignored too: in particular, a `metadata` object containing
/// any non-string value is dropped whole rather than partially applied.
pub fn resolve_put_params(public_read: bool, options: &UploadOptions) -> PutParams {
    let mut params = PutParams::default();
    if public_read {
        params.acl = Some(AccessControl::PublicRead);
    }
    for (key, value) in options {
        match key.as_str() {
            OPT_ACL => {
                if let Some(grant) = value.as_str() {
                    match grant {
                        ACL_PUBLIC_READ => params.acl = Some(AccessControl::PublicRead),
                        ACL_PRIVATE => params.acl = Some(AccessControl::Private),
                        _ => {}
                    }
                }
            }
            OPT_CONTENT_TYPE => {
                if let Some(content_type) = value.as_str() {
                    params.content_type = Some(content_type.to_owned());
                }
            }
            OPT_METADATA => {
                if let Some(object) = value.as_object() {
                    if object.values().all(Value::is_string) {
                        params.metadata = object
                            .iter()
                            .filter_map(|(k, v)| Some((k.clone(), v.as_str()?.to_owned())))
                            .collect();
                    }
                }
            }
            _ => {}
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(entries: &[(&str, Value)]) -> UploadOptions {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn empty_options_keep_defaults() {
        let params = resolve_put_params(false, &UploadOptions::new());
        assert_eq!(params, PutParams::default());

        let params = resolve_put_params(true, &UploadOptions::new());
        assert_eq!(params.acl, Some(AccessControl::PublicRead));
    }

    #[test]
    fn explicit_acl_overrides_public_default() {
        let opts = options(&[(OPT_ACL, json!(ACL_PRIVATE))]);
        let params = resolve_put_params(true, &opts);
        assert_eq!(params.acl, Some(AccessControl::Private));
    }

    #[test]
    fn explicit_acl_overrides_private_default() {
        let opts = options(&[(OPT_ACL, json!(ACL_PUBLIC_READ))]);
        let params = resolve_put_params(false, &opts);
        assert_eq!(params.acl, Some(AccessControl::PublicRead));
    }

    #[test]
    fn unknown_acl_value_is_ignored() {
        let opts = options(&[(OPT_ACL, json!("bucket-owner-full-control"))]);
        let params = resolve_put_params(true, &opts);
        assert_eq!(params.acl, Some(AccessControl::PublicRead));
    }

    #[test]
    fn content_type_is_applied() {
        let opts = options(&[(OPT_CONTENT_TYPE, json!("image/png"))]);
        let params = resolve_put_params(false, &opts);
        assert_eq!(params.content_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn metadata_map_is_applied() {
        let opts = options(&[(OPT_METADATA, json!({"owner": "ops", "tier": "gold"}))]);
        let params = resolve_put_params(false, &opts);
        assert_eq!(params.metadata.get("owner").map(String::as_str), Some("ops"));
        assert_eq!(params.metadata.get("tier").map(String::as_str), Some("gold"));
    }

    #[test]
    fn mistyped_values_are_dropped_silently() {
        let opts = options(&[
            (OPT_ACL, json!(42)),
            (OPT_CONTENT_TYPE, json!(["image/png"])),
            (OPT_METADATA, json!("not a map")),
        ]);
        let params = resolve_put_params(false, &opts);
        assert_eq!(params, PutParams::default());
    }

    #[test]
    fn metadata_with_non_string_value_is_dropped_whole() {
        let opts = options(&[(OPT_METADATA, json!({"owner": "ops", "count": 3}))]);
        let params = resolve_put_params(false, &opts);
        assert!(params.metadata.is_empty());
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let opts = options(&[
            ("storage-class", json!("GLACIER")),
            (OPT_CONTENT_TYPE, json!("text/plain")),
        ]);
        let params = resolve_put_params(false, &opts);
        assert_eq!(params.content_type.as_deref(), Some("text/plain"));
        assert_eq!(params.acl, None);
    }
}
