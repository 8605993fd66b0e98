//! Amazon S3 adapter.
//!
//! Authentication follows the shared-config convention of the AWS SDK: when
//! both static keys are present a static-credential config scoped to the
//! configured region is built, otherwise the ambient environment (env vars,
//! shared credentials file, instance profile) is used.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use bytes::Bytes;
use parking_lot::RwLock;

use crate::domain::{
    resolve_put_params, AccessControl, BifrostError, BifrostResult, BridgeConfig, ErrorKind,
    ObjectAttrs, Provider, PutParams, UploadOptions, UploadedFile,
};
use crate::ports::{ObjectApi, RainbowBridge};

use super::{read_source, with_deadline};

/// Bridge handle bound to Amazon S3.
pub struct SimpleStorageService {
    default_bucket: String,
    region: String,
    access_key: Option<String>,
    secret_key: Option<String>,
    default_timeout: u64,
    enable_debug: bool,
    public_read: bool,
    use_async: bool,
    client: RwLock<Option<Arc<dyn ObjectApi>>>,
}

impl SimpleStorageService {
    /// Create a handle around an already-built native client. The factory
    /// goes through [`SimpleStorageService::connect`]; this constructor is
    /// the seam for injecting a fake backend in tests.
    pub fn new(config: &BridgeConfig, client: Arc<dyn ObjectApi>) -> Self {
        Self {
            default_bucket: config.default_bucket.clone(),
            region: config.region.clone(),
            access_key: config.access_key.clone(),
            secret_key: config.secret_key.clone(),
            default_timeout: config.default_timeout,
            enable_debug: config.enable_debug,
            public_read: config.public_read,
            use_async: config.use_async,
            client: RwLock::new(Some(client)),
        }
    }

    /// Build the authenticated S3 client and wrap it in a handle.
    pub(crate) async fn connect(config: &BridgeConfig) -> BifrostResult<Self> {
        let shared = match (&config.access_key, &config.secret_key) {
            (Some(access_key), Some(secret_key)) => {
                let credentials = Credentials::new(
                    access_key.clone(),
                    secret_key.clone(),
                    None,
                    None,
                    "bifrost-static",
                );
                aws_config::defaults(BehaviorVersion::latest())
                    .credentials_provider(credentials)
                    .region(Region::new(config.region.clone()))
                    .load()
                    .await
            }
            _ => aws_config::defaults(BehaviorVersion::latest()).load().await,
        };
        let client = aws_sdk_s3::Client::new(&shared);
        Ok(Self::new(config, Arc::new(AwsObjectApi { client })))
    }

    fn preview_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.default_bucket, self.region, key
        )
    }
}

#[async_trait]
impl RainbowBridge for SimpleStorageService {
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
            .ok_or_else(|| BifrostError::client_error("no active S3 client"))?;
        let body = read_source(path).await?;
        let params = resolve_put_params(self.public_read, options);

        let attrs = with_deadline(self.default_timeout, async {
            client
                .put(&self.default_bucket, filename, body, &params)
                .await?;
            // The write acknowledgement does not reliably report size, so a
            // confirmatory read is always performed. It doubles as a
            // post-write existence check.
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
            provider: Provider::SimpleStorageService.id().to_owned(),
            default_bucket: self.default_bucket.clone(),
            region: self.region.clone(),
            access_key: self.access_key.clone(),
            secret_key: self.secret_key.clone(),
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

/// Production [`ObjectApi`] backed by the AWS SDK.
struct AwsObjectApi {
    client: aws_sdk_s3::Client,
}

#[async_trait]
impl ObjectApi for AwsObjectApi {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        params: &PutParams,
    ) -> BifrostResult<()> {
        let mut request = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body));
        match params.acl {
            Some(AccessControl::PublicRead) => {
                request = request.acl(ObjectCannedAcl::PublicRead);
            }
            Some(AccessControl::Private) => {
                request = request.acl(ObjectCannedAcl::Private);
            }
            None => {}
        }
        if let Some(content_type) = &params.content_type {
            request = request.content_type(content_type.clone());
        }
        if !params.metadata.is_empty() {
            request = request.set_metadata(Some(params.metadata.clone()));
        }
        request.send().await.map_err(|err| {
            BifrostError::with_source(ErrorKind::FileOperationFailed, "put object failed", err)
        })?;
        Ok(())
    }

    async fn head(&self, bucket: &str, key: &str) -> BifrostResult<ObjectAttrs> {
        let output = self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                BifrostError::with_source(ErrorKind::FileOperationFailed, "head object failed", err)
            })?;
        Ok(ObjectAttrs {
            size: output.content_length().unwrap_or_default().max(0) as u64,
            e_tag: output.e_tag().map(str::to_owned),
            content_type: output.content_type().map(str::to_owned),
            metadata: output.metadata().cloned().unwrap_or_default(),
        })
    }
}
