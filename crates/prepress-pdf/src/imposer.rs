//! External imposition tool integration
//!
//! Imposition (arranging pages for 2-up booklet printing) is delegated to
//! an external program; this crate only needs to invoke it per signature
//! and know where the imposed file lands.

use crate::types::*;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Capability to impose a single signature file.
#[async_trait]
pub trait Imposer: Send + Sync {
    /// Impose `unit` for booklet printing, returning the imposed file path.
    async fn impose(&self, unit: &Path) -> Result<PathBuf>;
}

/// Runs an external imposition command as `program <input> <output>`.
pub struct CommandImposer {
    program: PathBuf,
}

impl CommandImposer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl Imposer for CommandImposer {
    async fn impose(&self, unit: &Path) -> Result<PathBuf> {
        let output = imposed_path(unit);
        debug!(program = %self.program.display(), unit = %unit.display(), "running imposer");

        let status = tokio::process::Command::new(&self.program)
            .arg(unit)
            .arg(&output)
            .status()
            .await?;

        if !status.success() {
            return Err(PressError::ExternalTool {
                tool: self.program.display().to_string(),
                status: status.code().unwrap_or(-1),
            });
        }

        Ok(output)
    }
}

/// Imposed file lands next to the input, with a `-2up` suffix.
fn imposed_path(unit: &Path) -> PathBuf {
    let stem = unit
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("signature");
    unit.with_file_name(format!("{stem}-2up.pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imposed_file_keeps_directory_and_stem() {
        let path = imposed_path(Path::new("out/sig03.pdf"));
        assert_eq!(path, Path::new("out/sig03-2up.pdf"));
    }
}
