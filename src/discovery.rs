use anyhow::Result;
use futures::stream::{Stream, StreamExt};
use glob::{glob, Pattern};
use std::collections::VecDeque;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

/// Configuration for input discovery
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on first error or continue with the remaining inputs
    pub fail_fast: bool,
    /// Glob pattern, relative to each directory input, selecting documents
    pub pattern: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            pattern: "**/*.txt".to_string(),
        }
    }
}

/// A discovered document path and whether it can be read
#[derive(Debug, Clone)]
pub struct FileValidation {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Resolve command line inputs into document paths.
///
/// File inputs are yielded as given. Directory inputs are searched recursively
/// with `config.pattern`, in glob order.
pub fn discover_documents(
    inputs: Vec<PathBuf>,
    config: DiscoveryConfig,
) -> impl Stream<Item = Result<FileValidation>> {
    futures::stream::unfold(DiscoveryState::new(inputs, config), |mut state| async move {
        state.next_file().await.map(|result| (result, state))
    })
}

struct DiscoveryState {
    inputs: VecDeque<PathBuf>,
    config: DiscoveryConfig,
    glob_iter: Option<glob::Paths>,
}

impl DiscoveryState {
    fn new(inputs: Vec<PathBuf>, config: DiscoveryConfig) -> Self {
        Self {
            inputs: inputs.into(),
            config,
            glob_iter: None,
        }
    }

    async fn next_file(&mut self) -> Option<Result<FileValidation>> {
        loop {
            if let Some(glob_iter) = self.glob_iter.as_mut() {
                match glob_iter.next() {
                    Some(Ok(path)) => {
                        debug!("Found file: {}", path.display());
                        if fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
                            return Some(Ok(FileValidation { path, error: None }));
                        }
                        continue;
                    }
                    Some(Err(e)) => {
                        let error_msg = format!("Glob iteration error: {e}");
                        warn!("{}", error_msg);
                        if self.config.fail_fast {
                            return Some(Err(anyhow::anyhow!(error_msg)));
                        }
                        continue;
                    }
                    None => self.glob_iter = None,
                }
            }

            let input = self.inputs.pop_front()?;
            match fs::metadata(&input).await {
                Ok(metadata) if metadata.is_dir() => {
                    let pattern = format!(
                        "{}/{}",
                        Pattern::escape(&input.display().to_string()),
                        self.config.pattern
                    );
                    debug!("Searching {} with pattern: {}", input.display(), pattern);
                    match glob(&pattern) {
                        Ok(paths) => self.glob_iter = Some(paths),
                        Err(e) => return Some(Err(anyhow::anyhow!("Failed to create glob pattern: {}", e))),
                    }
                }
                Ok(_) => return Some(Ok(FileValidation { path: input, error: None })),
                Err(e) => {
                    let error = format!("Cannot access {}: {}", input.display(), e);
                    warn!("{}", error);

                    if self.config.fail_fast {
                        return Some(Err(anyhow::anyhow!(error)));
                    }
                    return Some(Ok(FileValidation {
                        path: input,
                        error: Some(error),
                    }));
                }
            }
        }
    }
}

/// Collect all discovered documents into a Vec
pub async fn collect_documents(inputs: Vec<PathBuf>, config: DiscoveryConfig) -> Result<Vec<FileValidation>> {
    let mut files = Vec::new();
    let mut stream = Box::pin(discover_documents(inputs, config));

    while let Some(result) = stream.next().await {
        files.push(result?);
    }

    let valid_count = files.iter().filter(|f| f.error.is_none()).count();
    let invalid_count = files.len() - valid_count;
    if invalid_count > 0 {
        warn!("Found {} inputs that cannot be accessed", invalid_count);
    }
    info!("Discovery summary: {} valid, {} invalid", valid_count, invalid_count);

    Ok(files)
}
