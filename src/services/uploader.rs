use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use crate::config::UploadConfig;
use crate::error::FatalError;
use crate::services::storage::{ObjectStore, PutRequest};
use crate::utils::ident;

/// Outcome counts for one batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub uploaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub struct Uploader {
    store: Arc<dyn ObjectStore>,
    config: UploadConfig,
}

impl Uploader {
    pub fn new(store: Arc<dyn ObjectStore>, config: UploadConfig) -> Self {
        Self { store, config }
    }

    /// Process the given paths in order, writing one markdown image link per
    /// uploaded file to `out` and one diagnostic line per skipped or failed
    /// file to `err`.
    ///
    /// Backend failures are reported and the batch continues with the next
    /// file. Identifier generation and local stat/read failures abort the
    /// whole batch.
    pub async fn run<O: Write, E: Write>(
        &self,
        paths: &[PathBuf],
        out: &mut O,
        err: &mut E,
    ) -> Result<BatchSummary, FatalError> {
        let mut summary = BatchSummary::default();

        for path in paths {
            let display_name = file_name(path);

            let Some(ext) = accepted_extension(path, &self.config) else {
                let _ = writeln!(err, "{display_name}: Not image. Ignored.");
                summary.skipped += 1;
                continue;
            };

            // Fresh key per file; the original extension rides along so the
            // public URL stays recognizable as an image.
            let key = format!("{}.{}", ident::generate()?, ext);

            let meta = tokio::fs::metadata(path)
                .await
                .map_err(|source| FatalError::FileStat {
                    path: path.clone(),
                    source,
                })?;
            let content = tokio::fs::read(path)
                .await
                .map_err(|source| FatalError::FileRead {
                    path: path.clone(),
                    source,
                })?;

            info!("Uploading {} as {}", display_name, key);

            let request = PutRequest {
                content_type: self.config.content_type_for(ext).map(str::to_owned),
                content_disposition: format!("inline; filename=\"{display_name}\""),
                content_length: meta.len() as i64,
                body: Bytes::from(content),
                key: key.clone(),
            };

            match self.store.put(request).await {
                Ok(()) => {
                    let _ = writeln!(
                        out,
                        "![{display_name}]({}/{}/{key})",
                        self.config.public_base_url, self.config.bucket
                    );
                    summary.uploaded += 1;
                }
                Err(e) => {
                    warn!("Upload failed for {}: {e:#}", path.display());
                    let _ = writeln!(err, "Error uploading {}: {e:#}.", path.display());
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// The path's extension when it is in the accepted table, `None` otherwise.
/// Matching is exact, so `photo.PNG` is not an accepted image.
fn accepted_extension<'a>(path: &'a Path, config: &UploadConfig) -> Option<&'a str> {
    let ext = path.extension()?.to_str()?;
    config.content_type_for(ext).is_some().then_some(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extension() {
        let config = UploadConfig::default();
        // Pin the higher-ranked lifetime so the closure's returned borrow is
        // tied to its own argument rather than a single inferred region.
        fn bind<F: for<'a> Fn(&'a str) -> Option<&'a str>>(f: F) -> F {
            f
        }
        let accepted = bind(|p| accepted_extension(Path::new(p), &config));

        assert_eq!(accepted("photo.png"), Some("png"));
        assert_eq!(accepted("shots/photo.jpg"), Some("jpg"));

        assert_eq!(accepted("photo.PNG"), None);
        assert_eq!(accepted("photo.jpeg"), None);
        assert_eq!(accepted("photo.gif"), None);
        assert_eq!(accepted("photo"), None);
        assert_eq!(accepted("notes.txt"), None);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("shots/photo.png")), "photo.png");
        assert_eq!(file_name(Path::new("photo.png")), "photo.png");
    }
}
