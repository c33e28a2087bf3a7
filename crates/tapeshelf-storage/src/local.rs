use crate::error::{StorageError, StorageResult};
use crate::naming::{generated_filename, public_url};
use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// A file written by [`UploadStore::save_stream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Generated name inside the upload directory
    pub filename: String,
    /// Full path on disk
    pub path: PathBuf,
    /// Relative URL the file is served under
    pub url: String,
    pub size_bytes: u64,
}

/// Flat upload directory on the local filesystem
#[derive(Clone, Debug)]
pub struct UploadStore {
    base_path: PathBuf,
}

impl UploadStore {
    /// Open the upload directory, creating it and any missing parents.
    ///
    /// Must run once before the server accepts connections.
    pub async fn init(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: base_path.clone(),
                source,
            })?;

        let metadata = fs::metadata(&base_path)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: base_path.clone(),
                source,
            })?;
        if !metadata.is_dir() {
            return Err(StorageError::NotADirectory(base_path));
        }

        tracing::debug!(path = %base_path.display(), "Upload directory ready");

        Ok(UploadStore { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Persist an uploaded file under a name generated from the current time
    /// and the extension of `original_filename`.
    ///
    /// An existing file with the same generated name is overwritten. A failed
    /// write leaves whatever was already written in place.
    pub async fn save_stream<S, E>(
        &self,
        original_filename: &str,
        stream: S,
    ) -> StorageResult<StoredUpload>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Display,
    {
        let millis = chrono::Utc::now().timestamp_millis();
        let filename = generated_filename(millis, original_filename);
        self.write_stream(filename, stream).await
    }

    async fn write_stream<S, E>(&self, filename: String, stream: S) -> StorageResult<StoredUpload>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Display,
    {
        let path = self.base_path.join(&filename);
        let start = Instant::now();
        let write_err = |source| StorageError::Write {
            path: path.clone(),
            source,
        };

        let mut file = fs::File::create(&path).await.map_err(write_err)?;
        let mut stream = std::pin::pin!(stream);
        let mut size_bytes: u64 = 0;

        while let Some(chunk) = stream
            .try_next()
            .await
            .map_err(|e| StorageError::Stream(e.to_string()))?
        {
            file.write_all(&chunk).await.map_err(write_err)?;
            size_bytes += chunk.len() as u64;
        }

        file.flush().await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;

        tracing::info!(
            path = %path.display(),
            filename = %filename,
            size_bytes,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Upload stored"
        );

        Ok(StoredUpload {
            url: public_url(&filename),
            filename,
            path,
            size_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use std::io;

    fn chunks(parts: &[&'static [u8]]) -> impl Stream<Item = Result<Bytes, io::Error>> {
        stream::iter(
            parts
                .iter()
                .map(|p| Ok(Bytes::from_static(p)))
                .collect::<Vec<_>>(),
        )
    }

    #[tokio::test]
    async fn test_init_creates_nested_directories() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("assets").join("images");

        let store = UploadStore::init(&nested).await.unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.base_path(), nested.as_path());

        // Second init over an existing directory is fine
        UploadStore::init(&nested).await.unwrap();
    }

    #[tokio::test]
    async fn test_init_fails_when_path_is_a_file() {
        let temp = tempfile::tempdir().unwrap();
        let file_path = temp.path().join("not-a-dir");
        std::fs::write(&file_path, b"x").unwrap();

        let err = UploadStore::init(&file_path).await.unwrap_err();
        assert!(matches!(
            err,
            StorageError::CreateDir { .. } | StorageError::NotADirectory(_)
        ));
    }

    #[tokio::test]
    async fn test_save_stream_writes_all_chunks() {
        let temp = tempfile::tempdir().unwrap();
        let store = UploadStore::init(temp.path()).await.unwrap();

        let stored = store
            .save_stream("holiday.PNG", chunks(&[b"abc", b"", b"def"]))
            .await
            .unwrap();

        assert!(stored.filename.ends_with(".PNG"));
        let stem = stored.filename.trim_end_matches(".PNG");
        assert!(stem.parse::<i64>().is_ok());
        assert_eq!(stored.url, format!("/uploads/{}", stored.filename));
        assert_eq!(stored.size_bytes, 6);
        assert_eq!(std::fs::read(&stored.path).unwrap(), b"abcdef");
    }

    #[tokio::test]
    async fn test_same_name_is_overwritten() {
        let temp = tempfile::tempdir().unwrap();
        let store = UploadStore::init(temp.path()).await.unwrap();

        let first = store
            .write_stream("1700000000000.jpg".to_string(), chunks(&[b"first"]))
            .await
            .unwrap();
        let second = store
            .write_stream("1700000000000.jpg".to_string(), chunks(&[b"second"]))
            .await
            .unwrap();

        assert_eq!(first.path, second.path);
        assert_eq!(std::fs::read(&second.path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_stream_error_keeps_partial_file() {
        let temp = tempfile::tempdir().unwrap();
        let store = UploadStore::init(temp.path()).await.unwrap();

        let items: Vec<Result<Bytes, io::Error>> = vec![
            Ok(Bytes::from_static(b"partial")),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "client went away")),
        ];
        let err = store
            .write_stream("1.bin".to_string(), stream::iter(items))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "client went away");
        assert_eq!(std::fs::read(temp.path().join("1.bin")).unwrap(), b"partial");
    }

    #[tokio::test]
    async fn test_write_fails_when_directory_removed() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("gone");
        let store = UploadStore::init(&dir).await.unwrap();
        std::fs::remove_dir(&dir).unwrap();

        let err = store
            .save_stream("a.txt", chunks(&[b"data"]))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }
}
