//! Google Cloud Storage adapter.
//!
//! Built on the `object_store` GCS client, which is bucket-bound at
//! construction. A service-account credentials file takes precedence;
//! without one the builder falls back to ambient authentication
//! (environment, application default credentials, instance metadata).

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::path::Path as ObjectPath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};
use parking_lot::RwLock;

use crate::domain::{
    resolve_put_params, BifrostError, BifrostResult, BridgeConfig, ErrorKind, ObjectAttrs,
    Provider, PutParams, UploadOptions, UploadedFile,
};
use crate::ports::{ObjectApi, RainbowBridge};

use super::{read_source, with_deadline};

/// Bridge handle bound to Google Cloud Storage.
pub struct GoogleCloudStorage {
    default_bucket: String,
    credentials_file: Option<String>,
    project: Option<String>,
    default_timeout: u64,
    enable_debug: bool,
    public_read: bool,
    use_async: bool,
    client: RwLock<Option<Arc<dyn ObjectApi>>>,
}

impl GoogleCloudStorage {
    /// Create a handle around an already-built native client. The factory
    /// goes through [`GoogleCloudStorage::connect`]; this constructor is the
    /// seam for injecting a fake backend in tests.
    pub fn new(config: &BridgeConfig, client: Arc<dyn ObjectApi>) -> Self {
        Self {
            default_bucket: config.default_bucket.clone(),
            credentials_file: config.credentials_file.clone(),
            project: config.project.clone(),
            default_timeout: config.default_timeout,
            enable_debug: config.enable_debug,
            public_read: config.public_read,
            use_async: config.use_async,
            client: RwLock::new(Some(client)),
        }
    }

    /// Build the authenticated GCS client and wrap it in a handle.
    ///
    /// A missing bucket is not a construction failure: the native client is
    /// bucket-bound, so the store build is deferred and every operation on
    /// the handle fails instead, the same way a bucketless handle behaves
    /// against the live API.
    pub(crate) fn connect(config: &BridgeConfig) -> BifrostResult<Self> {
        if config.default_bucket.is_empty() {
            return Ok(Self::new(config, Arc::new(UnboundGcsApi)));
        }
        let mut builder =
            GoogleCloudStorageBuilder::new().with_bucket_name(config.default_bucket.clone());
        if let Some(credentials_file) = &config.credentials_file {
            builder = builder.with_service_account_path(credentials_file.clone());
        }
        let store = builder.build().map_err(|err| {
            BifrostError::with_source(
                ErrorKind::Unauthorized,
                "google cloud storage authentication failed",
                err,
            )
        })?;
        Ok(Self::new(
            config,
            Arc::new(GcsObjectApi {
                store: Arc::new(store),
            }),
        ))
    }

    fn preview_url(&self, key: &str) -> String {
        format!(
            "https://storage.googleapis.com/{}/{}",
            self.default_bucket, key
        )
    }
}

#[async_trait]
impl RainbowBridge for GoogleCloudStorage {
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
            .ok_or_else(|| BifrostError::client_error("no active GCS client"))?;
        let body = read_source(path).await?;
        let params = resolve_put_params(self.public_read, options);

        let attrs = with_deadline(self.default_timeout, async {
            client
                .put(&self.default_bucket, filename, body, &params)
                .await?;
            client.head(&self.default_bucket, filename).await
        })
        .await?;

        Ok(UploadedFile {
            name: filename.to_owned(),
            bucket: self.default_bucket.clone(),
            path: path.display().to_string(),
            preview: self.preview_url(filename),
            size: attrs.size,
            attrs,
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
            provider: Provider::GoogleCloudStorage.id().to_owned(),
            default_bucket: self.default_bucket.clone(),
            credentials_file: self.credentials_file.clone(),
            project: self.project.clone(),
            default_timeout: self.default_timeout,
            enable_debug: self.enable_debug,
            public_read: self.public_read,
            use_async: self.use_async,
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

/// Stand-in native client for handles constructed without a bucket. The
/// GCS client cannot be built bucketless, so every operation fails here
/// instead of at construction time.
struct UnboundGcsApi;

#[async_trait]
impl ObjectApi for UnboundGcsApi {
    async fn put(
        &self,
        _bucket: &str,
        _key: &str,
        _body: Bytes,
        _params: &PutParams,
    ) -> BifrostResult<()> {
        Err(BifrostError::file_operation(
            "no bucket configured for google cloud storage",
        ))
    }

    async fn head(&self, _bucket: &str, _key: &str) -> BifrostResult<ObjectAttrs> {
        Err(BifrostError::file_operation(
            "no bucket configured for google cloud storage",
        ))
    }
}

/// Production [`ObjectApi`] backed by the `object_store` GCS client.
struct GcsObjectApi {
    store: Arc<dyn ObjectStore>,
}

#[async_trait]
impl ObjectApi for GcsObjectApi {
    async fn put(
        &self,
        _bucket: &str,
        key: &str,
        body: Bytes,
        params: &PutParams,
    ) -> BifrostResult<()> {
        // The native client is bound to its bucket at construction, so the
        // bucket argument is not consulted here. Canned ACLs are not
        // expressible through this client either; bucket IAM governs
        // visibility, and a resolved grant is accepted and dropped.
        let mut attributes = Attributes::new();
        if let Some(content_type) = &params.content_type {
            attributes.insert(Attribute::ContentType, content_type.clone().into());
        }
        for (name, value) in &params.metadata {
            attributes.insert(Attribute::Metadata(name.clone().into()), value.clone().into());
        }
        let options = PutOptions {
            attributes,
            ..Default::default()
        };
        self.store
            .put_opts(&ObjectPath::from(key), PutPayload::from(body), options)
            .await
            .map_err(|err| {
                BifrostError::with_source(ErrorKind::FileOperationFailed, "put object failed", err)
            })?;
        Ok(())
    }

    async fn head(&self, _bucket: &str, key: &str) -> BifrostResult<ObjectAttrs> {
        let meta = self
            .store
            .head(&ObjectPath::from(key))
            .await
            .map_err(|err| {
                BifrostError::with_source(ErrorKind::FileOperationFailed, "head object failed", err)
            })?;
        Ok(ObjectAttrs {
            size: meta.size,
            e_tag: meta.e_tag,
            content_type: None,
            metadata: Default::default(),
        })
    }
}
