use anyhow::{Context, Result};
use memmap2::MmapOptions;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for document reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue with the next document
    pub fail_fast: bool,
    /// Map files into memory instead of async buffered reads
    pub use_mmap: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            use_mmap: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for one document read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

impl ReadStats {
    fn new(path: &Path, bytes_read: u64, started: std::time::Instant, read_error: Option<String>) -> Self {
        Self {
            file_path: path.display().to_string(),
            bytes_read,
            duration_ms: started.elapsed().as_millis() as u64,
            read_error,
        }
    }
}

/// Reads whole UTF-8 documents for segmentation
pub struct DocumentReader {
    config: ReaderConfig,
}

impl DocumentReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a document as UTF-8 text.
    ///
    /// Unless `fail_fast` is set, an unreadable or non-UTF-8 document yields
    /// `None` with the error recorded in the stats.
    pub async fn read_document<P: AsRef<Path>>(&self, file_path: P) -> Result<(Option<String>, ReadStats)> {
        let path = file_path.as_ref();
        let started = std::time::Instant::now();

        debug!("Starting read of document: {}", path.display());

        let result = if self.config.use_mmap {
            read_mapped(path.to_path_buf()).await
        } else {
            self.read_buffered(path).await
        };

        match result {
            Ok(text) => {
                let stats = ReadStats::new(path, text.len() as u64, started, None);
                info!(
                    "Read {}: {} bytes in {}ms",
                    path.display(),
                    stats.bytes_read,
                    stats.duration_ms
                );
                Ok((Some(text), stats))
            }
            Err(e) => {
                let error_msg = format!("{e:#}");
                warn!("{}", error_msg);

                if self.config.fail_fast {
                    Err(e)
                } else {
                    Ok((None, ReadStats::new(path, 0, started, Some(error_msg))))
                }
            }
        }
    }

    async fn read_buffered(&self, path: &Path) -> Result<String> {
        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open file {}", path.display()))?;

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .await
            .with_context(|| format!("Failed to read file {}", path.display()))?;

        String::from_utf8(bytes).with_context(|| format!("UTF-8 decoding error in {}", path.display()))
    }

    /// Read all of standard input as UTF-8 text.
    pub async fn read_stdin(&self) -> Result<String> {
        let mut reader = BufReader::with_capacity(self.config.buffer_size, tokio::io::stdin());
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .await
            .context("Failed to read standard input")?;

        debug!("Read {} bytes from standard input", text.len());
        Ok(text)
    }
}

async fn read_mapped(path: PathBuf) -> Result<String> {
    tokio::task::spawn_blocking(move || -> Result<String> {
        let file = std::fs::File::open(&path).with_context(|| format!("Failed to open file {}", path.display()))?;
        if file.metadata()?.len() == 0 {
            return Ok(String::new());
        }

        // SAFETY: the mapping is only read and copied out before the file handle is dropped
        let mmap = unsafe { MmapOptions::new().map(&file) }
            .with_context(|| format!("Failed to map file {}", path.display()))?;
        let text = std::str::from_utf8(&mmap).with_context(|| format!("UTF-8 decoding error in {}", path.display()))?;
        Ok(text.to_string())
    })
    .await?
}
