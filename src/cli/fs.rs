//! Writing an artifact plan to the output directory.
//!
//! Artifacts are never overwritten. The whole plan is checked before the
//! first write, so a collision leaves the directory untouched.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info_span};
use tsbind_emitter::ArtifactPlan;

#[derive(Debug)]
pub enum MaterializeError {
    /// A planned file already exists on disk, or two planned artifacts
    /// share a file name.
    DuplicateOutputArtifact { path: PathBuf },
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for MaterializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterializeError::DuplicateOutputArtifact { path } => {
                write!(f, "output artifact already exists: {}", path.display())
            }
            MaterializeError::Io { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for MaterializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MaterializeError::Io { source, .. } => Some(source),
            MaterializeError::DuplicateOutputArtifact { .. } => None,
        }
    }
}

/// Fail if any artifact of `plan` would land on an existing path or on a
/// path another artifact also claims.
pub fn check_collisions(plan: &ArtifactPlan, out_dir: &Path) -> Result<(), MaterializeError> {
    if let Some(name) = plan.duplicate_file_names().first() {
        return Err(MaterializeError::DuplicateOutputArtifact {
            path: out_dir.join(name),
        });
    }

    for artifact in plan {
        let path = out_dir.join(&artifact.file_name);
        // symlink_metadata so a dangling link still counts as taken
        if std::fs::symlink_metadata(&path).is_ok() {
            return Err(MaterializeError::DuplicateOutputArtifact { path });
        }
    }
    Ok(())
}

/// Write every artifact of `plan` into `out_dir`, creating the directory if
/// needed. Returns the written paths in plan order.
pub fn materialize(plan: &ArtifactPlan, out_dir: &Path) -> Result<Vec<PathBuf>, MaterializeError> {
    let _span = info_span!("materialize", out_dir = %out_dir.display()).entered();

    check_collisions(plan, out_dir)?;

    std::fs::create_dir_all(out_dir).map_err(|source| MaterializeError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(plan.len());
    for artifact in plan {
        let path = out_dir.join(&artifact.file_name);
        write_new(&path, artifact.contents.as_bytes())?;
        debug!(path = %path.display(), bytes = artifact.contents.len(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}

fn write_new(path: &Path, contents: &[u8]) -> Result<(), MaterializeError> {
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| {
            if source.kind() == io::ErrorKind::AlreadyExists {
                MaterializeError::DuplicateOutputArtifact {
                    path: path.to_path_buf(),
                }
            } else {
                MaterializeError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

    file.write_all(contents).map_err(|source| MaterializeError::Io {
        path: path.to_path_buf(),
        source,
    })
}
