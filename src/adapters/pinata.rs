//! Pinata IPFS pinning adapter.
//!
//! Pinning is a plain REST API authenticated with a bearer token, so the
//! native client is a `reqwest` HTTP client. Pins are content-addressed and
//! the pin receipt is authoritative: no confirmatory read follows the write.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;
use reqwest::multipart;

use crate::domain::{
    resolve_put_params, BifrostError, BifrostResult, BridgeConfig, ErrorKind, ObjectAttrs,
    Provider, PutParams, UploadOptions, UploadedFile,
};
use crate::ports::{PinReceipt, PinningApi, RainbowBridge};

use super::{read_source, with_deadline};

const PIN_FILE_ENDPOINT: &str = "https://api.pinata.cloud/pinning/pinFileToIPFS";
const GATEWAY_URL: &str = "https://gateway.pinata.cloud/ipfs";

/// Bridge handle bound to the Pinata pinning service.
pub struct PinataIpfsStorage {
    default_bucket: String,
    project: Option<String>,
    default_timeout: u64,
    enable_debug: bool,
    public_read: bool,
    use_async: bool,
    pinata_jwt: String,
    client: RwLock<Option<Arc<dyn PinningApi>>>,
}

impl PinataIpfsStorage {
    /// Create a handle around an already-built native client. The factory
    /// goes through [`PinataIpfsStorage::connect`]; this constructor is the
    /// seam for injecting a fake pinning service in tests.
    ///
    /// Returns `Unauthorized` when the bearer token is missing or empty.
    pub fn new(config: &BridgeConfig, client: Arc<dyn PinningApi>) -> BifrostResult<Self> {
        let jwt = match &config.pinata_jwt {
            Some(jwt) if !jwt.is_empty() => jwt.clone(),
            _ => {
                return Err(BifrostError::unauthorized(
                    "jwt is required for authentication",
                ))
            }
        };
        Ok(Self {
            default_bucket: config.default_bucket.clone(),
            project: config.project.clone(),
            default_timeout: config.default_timeout,
            enable_debug: config.enable_debug,
            public_read: config.public_read,
            use_async: config.use_async,
            pinata_jwt: jwt,
            client: RwLock::new(Some(client)),
        })
    }

    /// Build the native pinning client. The token is only checked for
    /// presence; no network call is made until the first operation.
    pub(crate) fn connect(config: &BridgeConfig) -> BifrostResult<Self> {
        let jwt = config.pinata_jwt.clone().unwrap_or_default();
        let client = PinataClient {
            http: reqwest::Client::new(),
            jwt,
        };
        Self::new(config, Arc::new(client))
    }
}

#[async_trait]
impl RainbowBridge for PinataIpfsStorage {
    async fn upload_file(
        &self,
        path: &Path,
        filename: &str,
        options: &UploadOptions,
    ) -> BifrostResult<UploadedFile> {
        let client = self
            .client
            .read()
            .clone()
            .ok_or_else(|| BifrostError::client_error("no active pinning client"))?;
        let body = read_source(path).await?;
        let params = resolve_put_params(self.public_read, options);

        let receipt = with_deadline(self.default_timeout, async {
            client.pin_file(filename, body, &params).await
        })
        .await?;

        let mut metadata = params.metadata;
        metadata.insert("cid".to_owned(), receipt.ipfs_hash.clone());
        metadata.insert("timestamp".to_owned(), receipt.timestamp);

        Ok(UploadedFile {
            name: filename.to_owned(),
            bucket: self.default_bucket.clone(),
            path: path.display().to_string(),
            preview: format!("{}/{}", GATEWAY_URL, receipt.ipfs_hash),
            size: receipt.pin_size,
            attrs: ObjectAttrs {
                size: receipt.pin_size,
                e_tag: None,
                content_type: params.content_type,
                metadata,
            },
        })
    }

    async fn upload_folder(
        &self,
        _path: &Path,
        _options: &UploadOptions,
    ) -> BifrostResult<Vec<UploadedFile>> {
        // Not implemented. Kept as a stub so the capability set stays
        // uniform across adapters.
        Ok(Vec::new())
    }

    fn config(&self) -> BridgeConfig {
        BridgeConfig {
            provider: Provider::PinataIpfs.id().to_owned(),
            default_bucket: self.default_bucket.clone(),
            project: self.project.clone(),
            default_timeout: self.default_timeout,
            enable_debug: self.enable_debug,
            public_read: self.public_read,
            use_async: self.use_async,
            pinata_jwt: Some(self.pinata_jwt.clone()),
            ..BridgeConfig::default()
        }
    }

    fn disconnect(&self) {
        *self.client.write() = None;
    }

    fn is_connected(&self) -> bool {
        self.client.read().is_some()
    }
}

/// Production [`PinningApi`] backed by the Pinata REST API.
struct PinataClient {
    http: reqwest::Client,
    jwt: String,
}

#[async_trait]
impl PinningApi for PinataClient {
    async fn pin_file(
        &self,
        file_name: &str,
        body: Bytes,
        params: &PutParams,
    ) -> BifrostResult<PinReceipt> {
        let mut part = multipart::Part::bytes(body.to_vec()).file_name(file_name.to_owned());
        if let Some(content_type) = &params.content_type {
            part = part.mime_str(content_type).map_err(|err| {
                BifrostError::with_source(
                    ErrorKind::FileOperationFailed,
                    "invalid content type",
                    err,
                )
            })?;
        }
        let mut form = multipart::Form::new().part("file", part);
        if !params.metadata.is_empty() {
            let pin_metadata = serde_json::json!({
                "name": file_name,
                "keyvalues": params.metadata,
            });
            form = form.text("pinataMetadata", pin_metadata.to_string());
        }

        let response = self
            .http
            .post(PIN_FILE_ENDPOINT)
            .bearer_auth(&self.jwt)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                BifrostError::with_source(ErrorKind::FileOperationFailed, "pin request failed", err)
            })?;
        if !response.status().is_success() {
            return Err(BifrostError::file_operation(format!(
                "pinning service returned {}",
                response.status()
            )));
        }
        response.json::<PinReceipt>().await.map_err(|err| {
            BifrostError::with_source(
                ErrorKind::FileOperationFailed,
                "malformed pin receipt",
                err,
            )
        })
    }
}
