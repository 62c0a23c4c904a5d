//! Build orchestration over files, folders and folder trees

use crate::error::{BuildError, BuildResult};
use crate::summary::BuildSummary;
use rantc_core::{CompiledMessage, CompilerConfig, compile_source, message_name_from_path};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Directory names a recursive build descends into (exact, case-sensitive)
pub const MESSAGE_FOLDER_NAMES: [&str; 6] =
    ["msg", "messages", "msgs", "mesg", "mesgs", "builtin_msgs"];

/// Extension of definition files
pub const DEFINITION_EXTENSION: &str = "msg";

/// Output folder created next to a definition when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "built";

type TreeFuture = Pin<Box<dyn Future<Output = BuildSummary> + Send + 'static>>;

/// Check whether a directory is a recognized message folder
pub fn is_message_folder(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| MESSAGE_FOLDER_NAMES.contains(&name))
}

/// Check whether a path names a definition file
pub fn is_definition_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == DEFINITION_EXTENSION)
}

/// `<file's directory>/built`
pub fn default_output_dir(file: &Path) -> PathBuf {
    file.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
        .join(DEFAULT_OUTPUT_DIR)
}

/// Compiles definition files and writes the generated sources
///
/// Cheap to clone; clones share configuration and the concurrency limiter.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    config: Arc<CompilerConfig>,
    limiter: Option<Arc<Semaphore>>,
}

impl MessageBuilder {
    /// Create a builder, validating the configuration
    pub fn new(config: CompilerConfig) -> BuildResult<Self> {
        config.validate()?;
        let limiter = config
            .max_concurrent_subtrees
            .map(|limit| Arc::new(Semaphore::new(limit)));

        Ok(Self {
            config: Arc::new(config),
            limiter,
        })
    }

    /// Get the compiler configuration
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile one definition file.
    ///
    /// Returns `Ok(None)` without touching the filesystem when `path` is empty or
    /// does not name an existing file. Output goes to `output` or, when that is
    /// `None` or empty, to `<file's directory>/built`, created if absent.
    pub async fn compile_file(
        &self,
        path: &Path,
        output: Option<&Path>,
    ) -> BuildResult<Option<CompiledMessage>> {
        if path.as_os_str().is_empty() || !is_file(path).await {
            return Ok(None);
        }
        let Some(name) = message_name_from_path(path) else {
            return Ok(None);
        };

        if self.config.verbose {
            tracing::info!("Building {}...", name);
        }

        let text = fs::read_to_string(path)
            .await
            .map_err(|e| BuildError::io(path, e))?;
        let compiled = compile_source(&name, &text, &self.config);

        let output_dir = match output {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => default_output_dir(path),
        };
        fs::create_dir_all(&output_dir)
            .await
            .map_err(|e| BuildError::io(&output_dir, e))?;

        for file in &compiled.files {
            let output_path = output_dir.join(&file.file_name);
            fs::write(&output_path, &file.contents)
                .await
                .map_err(|e| BuildError::io(&output_path, e))?;

            if self.config.verbose {
                tracing::info!("Saved {} to {}", file.file_name, output_path.display());
            }
        }

        Ok(Some(compiled))
    }

    /// Compile every definition file directly inside `folder`, one after another.
    ///
    /// A missing folder is a no-op. Per-file failures are logged and counted; they
    /// never stop the remaining files.
    pub async fn compile_folder(&self, folder: &Path, output: Option<&Path>) -> BuildSummary {
        let mut summary = BuildSummary::default();

        for file in list_definition_files(folder).await {
            let result = self.compile_file(&file, output).await;
            if let Err(e) = &result {
                tracing::error!("Failed to build {}: {}", file.display(), e);
            }
            summary.record(&result);
        }

        summary
    }

    /// Compile `folder` and every recognized message folder below it.
    ///
    /// Each recognized subfolder is compiled by its own task, started before the
    /// folder's own files. The call returns once every task has finished.
    pub async fn compile_folder_recursive(
        &self,
        folder: &Path,
        output: Option<&Path>,
    ) -> BuildSummary {
        let summary = self
            .clone()
            .compile_tree(folder.to_path_buf(), output.map(Path::to_path_buf))
            .await;

        if self.config.verbose {
            tracing::info!("Built all messages in {}", folder.display());
        }

        summary
    }

    fn compile_tree(self, folder: PathBuf, output: Option<PathBuf>) -> TreeFuture {
        Box::pin(async move {
            let mut children = JoinSet::new();
            for subfolder in list_message_folders(&folder).await {
                children.spawn(self.clone().compile_tree(subfolder, output.clone()));
            }

            // The permit only covers this folder's own files, never the join below
            let mut summary = {
                let _permit = match &self.limiter {
                    Some(limiter) => limiter.clone().acquire_owned().await.ok(),
                    None => None,
                };
                self.compile_folder(&folder, output.as_deref()).await
            };

            while let Some(joined) = children.join_next().await {
                match joined {
                    Ok(child) => summary += child,
                    Err(e) => {
                        let err = BuildError::TaskFailed(e.to_string());
                        tracing::error!("Subfolder of {} failed: {}", folder.display(), err);
                        summary.failures += 1;
                    }
                }
            }

            summary
        })
    }
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Definition files directly inside `folder`, sorted. Empty if unreadable.
async fn list_definition_files(folder: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let Ok(mut entries) = fs::read_dir(folder).await else {
        tracing::debug!("Skipping missing folder {}", folder.display());
        return files;
    };

    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let path = entry.path();
                if is_definition_file(&path) && is_file(&path).await {
                    files.push(path);
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Stopped listing {}: {}", folder.display(), e);
                break;
            }
        }
    }

    files.sort();
    files
}

/// Recognized message folders directly inside `folder`, sorted.
///
/// Symlinked directories are not followed.
async fn list_message_folders(folder: &Path) -> Vec<PathBuf> {
    let mut folders = Vec::new();
    let Ok(mut entries) = fs::read_dir(folder).await else {
        return folders;
    };

    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let is_dir = entry
                    .file_type()
                    .await
                    .map(|t| t.is_dir())
                    .unwrap_or(false);
                let path = entry.path();
                if is_dir && is_message_folder(&path) {
                    folders.push(path);
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Stopped listing {}: {}", folder.display(), e);
                break;
            }
        }
    }

    folders.sort();
    folders
}
