// Backend adapters
pub mod gcs;
pub mod pinata;
pub mod s3;

pub use gcs::GoogleCloudStorage;
pub use pinata::PinataIpfsStorage;
pub use s3::SimpleStorageService;

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use bytes::Bytes;

use crate::domain::{BifrostError, BifrostResult, ErrorKind};

/// Read the upload source from the local filesystem.
///
/// A missing path is a caller mistake (`BadRequest`, detected before any
/// network call); anything that fails past the existence check is
/// `FileOperationFailed`. `tokio::fs::read` scopes the file handle, so it is
/// released on every exit path.
///
/// The whole file is buffered into memory so one `Bytes` body can cross the
/// port seam uniformly. Uploads are bounded by that: very large files would
/// need a streaming body negotiated per backend.
pub(crate) async fn read_source(path: &Path) -> BifrostResult<Bytes> {
    if let Err(err) = tokio::fs::metadata(path).await {
        if err.kind() == std::io::ErrorKind::NotFound {
            return Err(BifrostError::bad_request(format!(
                "file does not exist: {}",
                path.display()
            )));
        }
    }
    let data = tokio::fs::read(path).await.map_err(|err| {
        BifrostError::with_source(
            ErrorKind::FileOperationFailed,
            format!("failed to read {}", path.display()),
            err,
        )
    })?;
    Ok(Bytes::from(data))
}

/// Bound a backend operation by the handle's configured timeout.
/// Zero means unbounded; elapse surfaces as a file-operation failure,
/// not a distinct error kind.
pub(crate) async fn with_deadline<T, F>(timeout_secs: u64, op: F) -> BifrostResult<T>
where
    F: Future<Output = BifrostResult<T>>,
{
    if timeout_secs == 0 {
        return op.await;
    }
    match tokio::time::timeout(Duration::from_secs(timeout_secs), op).await {
        Ok(result) => result,
        Err(_) => Err(BifrostError::file_operation(format!(
            "operation timed out after {timeout_secs}s"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn missing_source_is_bad_request() {
        let err = read_source(Path::new("/definitely/not/here.bin"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[tokio::test]
    async fn readable_source_round_trips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"payload").unwrap();
        let data = read_source(file.path()).await.unwrap();
        assert_eq!(&data[..], b"payload");
    }

    #[tokio::test]
    async fn unreadable_source_is_file_operation_failure() {
        // A directory exists but cannot be read as a file.
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(dir.path()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileOperationFailed);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_timeout_is_unbounded() {
        let result = with_deadline(0, async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(7u32)
        })
        .await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_deadline_maps_to_file_operation_failure() {
        let err = with_deadline(1, async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileOperationFailed);
    }
}
