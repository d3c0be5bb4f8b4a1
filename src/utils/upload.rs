use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::types::error::AppError;

/// What to do when an upload targets a name that already exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Last write wins.
    #[default]
    Overwrite,
    /// Refuse with 409.
    Reject,
    /// Store as `stem-N.ext` with the first free `N`.
    Rename,
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "reject" => Ok(Self::Reject),
            "rename" => Ok(Self::Rename),
            other => Err(format!("unknown collision policy '{other}' (expected overwrite, reject or rename)")),
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::Reject => write!(f, "reject"),
            Self::Rename => write!(f, "rename"),
        }
    }
}

/// Reduces a client-supplied name to its last path component. Both `/` and
/// `\` count as separators so Windows-style paths are handled too.
pub fn sanitize_filename(filename: &str) -> Option<&str> {
    let name = filename
        .rsplit(&['/', '\\'][..])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." || name.contains('\0') {
        return None;
    }
    Some(name)
}

/// Writes `content` to an already opened `file`. On failure the file at
/// `path` is removed so a half-written upload never keeps its name.
async fn write_or_discard<W>(mut file: W, path: &Path, content: &[u8]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let written = match file.write_all(content).await {
        Ok(()) => file.flush().await,
        Err(e) => Err(e),
    };
    drop(file);

    if let Err(e) = &written {
        debug!("writing {} failed: {}", path.display(), e);
        if let Err(rm) = fs::remove_file(path).await {
            warn!("could not remove partial upload {}: {}", path.display(), rm);
        }
    }
    written
}

fn numbered(name: &str, n: u32) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}-{n}.{ext}"),
        _ => format!("{name}-{n}"),
    }
}

/// Writes uploaded files under the static directory.
#[derive(Clone, Debug)]
pub struct UploadStore {
    root: PathBuf,
    policy: CollisionPolicy,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>, policy: CollisionPolicy) -> Self {
        Self { root: root.into(), policy }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub async fn ensure_root(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.root).await
    }

    /// Stores `content` under `filename` and returns the name actually used.
    pub async fn store(&self, filename: &str, content: &[u8]) -> Result<String, AppError> {
        let name = sanitize_filename(filename)
            .ok_or_else(|| AppError::Validation(format!("invalid upload filename '{filename}'")))?;

        let (stored, file) = match self.policy {
            CollisionPolicy::Overwrite => {
                let file = File::create(self.root.join(name)).await?;
                (name.to_string(), file)
            }
            CollisionPolicy::Reject => match self.create_new(name).await? {
                Some(file) => (name.to_string(), file),
                None => return Err(AppError::Conflict(format!("File {name} already exists"))),
            },
            CollisionPolicy::Rename => self.create_free(name).await?,
        };

        write_or_discard(file, &self.root.join(&stored), content).await?;

        info!("stored upload {} ({} bytes, policy {})", stored, content.len(), self.policy);
        Ok(stored)
    }

    async fn create_new(&self, name: &str) -> std::io::Result<Option<File>> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.root.join(name))
            .await
        {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_free(&self, name: &str) -> std::io::Result<(String, File)> {
        if let Some(file) = self.create_new(name).await? {
            return Ok((name.to_string(), file));
        }
        let mut n = 1;
        loop {
            let candidate = numbered(name, n);
            if let Some(file) = self.create_new(&candidate).await? {
                debug!("{} taken, renamed upload to {}", name, candidate);
                return Ok((candidate, file));
            }
            n += 1;
        }
    }
}
