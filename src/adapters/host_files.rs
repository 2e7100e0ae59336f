//! Filesystem writes on the target host, re-rooted under the run's root prefix.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::domain::{AppError, ArtifactStatus, InstallationTarget};

/// File access for one run. Every method takes target-host paths.
pub struct HostFiles<'a> {
    target: &'a InstallationTarget,
}

impl<'a> HostFiles<'a> {
    pub fn new(target: &'a InstallationTarget) -> Self {
        Self { target }
    }

    fn host(&self, path: &Path) -> PathBuf {
        self.target.host_path(path)
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.host(path).exists()
    }

    pub fn read(&self, path: &Path) -> Result<Option<Vec<u8>>, AppError> {
        match fs::read(self.host(path)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(self.host(path))?;
        Ok(())
    }

    /// Write a generated file, skipping the write when the content hash is unchanged.
    pub fn write_managed(&self, path: &Path, content: &str) -> Result<ArtifactStatus, AppError> {
        let host_path = self.host(path);
        let status = match self.read(path)? {
            None => ArtifactStatus::Created,
            Some(existing) if digest(&existing) == digest(content.as_bytes()) => {
                ArtifactStatus::Unchanged
            }
            Some(_) => ArtifactStatus::Updated,
        };

        if status != ArtifactStatus::Unchanged {
            if let Some(parent) = host_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&host_path, content)?;
        }
        debug!(path = %path.display(), status = status.label(), "artifact");
        Ok(status)
    }

    /// Write `content` only when nothing exists at `path` yet.
    pub fn write_if_absent(&self, path: &Path, content: &str) -> Result<ArtifactStatus, AppError> {
        if self.exists(path) {
            debug!(path = %path.display(), "preserving existing file");
            return Ok(ArtifactStatus::Preserved);
        }
        let host_path = self.host(path);
        if let Some(parent) = host_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&host_path, content)?;
        Ok(ArtifactStatus::Created)
    }

    /// Put back a previously read file, or remove it when there was none.
    ///
    /// Whatever sits at `path` now is removed first, so a symlink that
    /// replaced the file is not written through.
    pub fn restore(&self, path: &Path, previous: Option<&[u8]>) -> Result<(), AppError> {
        self.remove(path)?;
        if let Some(content) = previous {
            fs::write(self.host(path), content)?;
        }
        Ok(())
    }

    /// Remove a file or symlink. Missing paths are fine.
    pub fn remove(&self, path: &Path) -> Result<bool, AppError> {
        match fs::remove_file(self.host(path)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether a file or (possibly dangling) symlink exists at `path`.
    pub fn entry_exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(self.host(path)).is_ok()
    }

    #[cfg(unix)]
    pub fn set_mode(&self, path: &Path, mode: u32) -> Result<(), AppError> {
        use std::os::unix::fs::PermissionsExt;
        let host_path = self.host(path);
        let mut perms = fs::metadata(&host_path)?.permissions();
        if perms.mode() & 0o7777 != mode {
            perms.set_mode(mode);
            fs::set_permissions(&host_path, perms)?;
        }
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn set_mode(&self, _path: &Path, _mode: u32) -> Result<(), AppError> {
        Ok(())
    }

    /// Point `link` at `target` with a relative link, replacing a stale one.
    #[cfg(unix)]
    pub fn symlink(&self, target: &Path, link: &Path) -> Result<(), AppError> {
        let relative = relative_link_target(target, link);
        let host_link = self.host(link);
        if let Ok(current) = fs::read_link(&host_link) {
            if current == relative {
                return Ok(());
            }
        }
        self.remove(link)?;
        if let Some(parent) = host_link.parent() {
            fs::create_dir_all(parent)?;
        }
        std::os::unix::fs::symlink(&relative, &host_link)?;
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn symlink(&self, target: &Path, link: &Path) -> Result<(), AppError> {
        let content = fs::read(self.host(target))?;
        fs::write(self.host(link), content)?;
        Ok(())
    }

    /// Raw target of the symlink at `link`, if it is one.
    pub fn link_target(&self, link: &Path) -> Option<PathBuf> {
        fs::read_link(self.host(link)).ok()
    }

    /// Recreate `link` pointing at a raw target previously read with [`HostFiles::link_target`].
    #[cfg(unix)]
    pub fn relink(&self, link: &Path, raw_target: &Path) -> Result<(), AppError> {
        self.remove(link)?;
        std::os::unix::fs::symlink(raw_target, self.host(link))?;
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn relink(&self, _link: &Path, _raw_target: &Path) -> Result<(), AppError> {
        Ok(())
    }
}

fn digest(content: &[u8]) -> Vec<u8> {
    Sha256::digest(content).to_vec()
}

/// `../sites-available/x` for `/etc/nginx/sites-enabled/x -> /etc/nginx/sites-available/x`,
/// so the link stays valid under any root prefix.
fn relative_link_target(target: &Path, link: &Path) -> PathBuf {
    let link_dir: Vec<_> = link.parent().map(|p| p.components().collect()).unwrap_or_default();
    let target_parts: Vec<_> = target.components().collect();

    let common = link_dir.iter().zip(target_parts.iter()).take_while(|(a, b)| a == b).count();

    let mut relative = PathBuf::new();
    for _ in common..link_dir.len() {
        relative.push("..");
    }
    for part in &target_parts[common..] {
        relative.push(part.as_os_str());
    }
    relative
}
