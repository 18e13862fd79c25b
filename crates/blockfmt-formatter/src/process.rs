//! Formatter backed by an external process.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::discovery::find_executable;
use crate::error::{Error, Result};
use crate::formatter::Formatter;
use crate::spec::FormatterSpec;

/// Where a formatter is being run from.
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    /// The document being formatted; used to find package-local executables.
    pub document_path: Option<PathBuf>,
    /// Working directory for the formatter process.
    pub working_dir: Option<PathBuf>,
}

impl InvocationContext {
    /// Context for formatting the file at `path`, run from its directory.
    pub fn for_document(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let working_dir = path.parent().filter(|p| !p.as_os_str().is_empty()).map(Path::to_path_buf);
        Self {
            document_path: Some(path),
            working_dir,
        }
    }
}

/// Runs a [`FormatterSpec`]'s command with the text on stdin.
#[derive(Debug, Clone)]
pub struct ProcessFormatter {
    spec: FormatterSpec,
    context: InvocationContext,
}

impl ProcessFormatter {
    pub fn new(spec: FormatterSpec, context: InvocationContext) -> Self {
        Self { spec, context }
    }

    pub fn spec(&self) -> &FormatterSpec {
        &self.spec
    }

    /// Resolve the executable, failing with install guidance if missing.
    pub async fn executable(&self) -> Result<PathBuf> {
        find_executable(&self.spec.bin, self.context.document_path.as_deref())
            .await
            .ok_or_else(|| Error::NotFound {
                bin: self.spec.bin.clone(),
                install_instruction: self.spec.install_instruction.clone(),
            })
    }
}

#[async_trait]
impl Formatter for ProcessFormatter {
    fn name(&self) -> &str {
        &self.spec.name
    }

    async fn format(&self, text: &str) -> Result<String> {
        let executable = self.executable().await?;

        let mut cmd = Command::new(&executable);
        cmd.args(&self.spec.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.context.working_dir {
            cmd.current_dir(dir);
        }

        tracing::info!(
            formatter = %self.spec.name,
            command = %executable.display(),
            args = ?self.spec.args,
            bytes = text.len(),
            "Running formatter"
        );
        let mut child = cmd.spawn()?;

        let mut stdin = child.stdin.take();
        let input = text.as_bytes().to_vec();
        let write = async move {
            if let Some(stdin) = stdin.as_mut() {
                stdin.write_all(&input).await?;
                stdin.shutdown().await?;
            }
            drop(stdin);
            Ok::<_, std::io::Error>(())
        };

        let (written, output) = tokio::join!(write, child.wait_with_output());
        let output = output?;
        if let Err(err) = written {
            // A formatter may exit before reading all input; its exit status
            // and stderr tell the real story.
            if err.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(err.into());
            }
            tracing::debug!("Formatter closed stdin early");
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() || !stderr.is_empty() {
            tracing::warn!(
                formatter = %self.spec.name,
                code = ?output.status.code(),
                %stderr,
                "Formatter failed"
            );
            return Err(Error::Process {
                name: self.spec.name.clone(),
                code: output.status.code(),
                stderr,
            });
        }

        String::from_utf8(output.stdout).map_err(|_| Error::InvalidOutput {
            name: self.spec.name.clone(),
        })
    }
}
