//! Mount table management
//!
//! Unix-style path mounts with longest-prefix resolution. A filesystem is
//! mounted once at a path and stays mounted until `unmount`; mounting twice
//! at the same path is refused.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::path::normalize;
use crate::{Filesystem, VfsError, VfsResult, MAX_MOUNTS};

/// A mount point in the VFS
pub struct MountPoint {
    /// Mount path (normalized)
    pub path: String,
    /// Mounted filesystem
    pub filesystem: Box<dyn Filesystem>,
}

impl MountPoint {
    /// Create a new mount point
    pub fn new(path: &str, filesystem: Box<dyn Filesystem>) -> Self {
        MountPoint {
            path: normalize(path),
            filesystem,
        }
    }
}

/// Mount table managing all mounted filesystems
pub struct MountTable {
    mounts: Vec<MountPoint>,
}

impl MountTable {
    /// Create a new empty mount table
    pub fn new() -> Self {
        MountTable { mounts: Vec::new() }
    }

    /// Mount a filesystem at the given path
    pub fn mount(&mut self, path: &str, filesystem: Box<dyn Filesystem>) -> VfsResult<()> {
        let normalized = normalize(path);

        if self.mounts.iter().any(|m| m.path == normalized) {
            return Err(VfsError::AlreadyMounted);
        }

        if self.mounts.len() >= MAX_MOUNTS {
            return Err(VfsError::NotSupported);
        }

        self.mounts.push(MountPoint::new(&normalized, filesystem));

        // Sort by path length descending for longest-prefix matching
        self.mounts.sort_by(|a, b| b.path.len().cmp(&a.path.len()));

        Ok(())
    }

    /// Unmount the filesystem at the given path
    pub fn unmount(&mut self, path: &str) -> VfsResult<()> {
        let normalized = normalize(path);

        match self.mounts.iter().position(|m| m.path == normalized) {
            Some(idx) => {
                self.mounts.remove(idx);
                Ok(())
            }
            None => Err(VfsError::NotMounted),
        }
    }

    /// Resolve an absolute path to its filesystem and mount-relative path
    pub fn resolve(&self, path: &str) -> VfsResult<(&dyn Filesystem, String)> {
        let normalized = normalize(path);
        if !normalized.starts_with('/') {
            return Err(VfsError::InvalidPath);
        }

        // Mounts are kept sorted longest path first
        for mount in &self.mounts {
            if let Some(rel) = strip_mount_prefix(&normalized, &mount.path) {
                return Ok((mount.filesystem.as_ref(), String::from(rel)));
            }
        }

        Err(VfsError::NotMounted)
    }

    /// List all mount points
    pub fn list(&self) -> &[MountPoint] {
        &self.mounts
    }
}

impl Default for MountTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip a mount path prefix, returning the mount-relative remainder
fn strip_mount_prefix<'a>(path: &'a str, mount: &str) -> Option<&'a str> {
    if mount == "/" {
        return Some(path.trim_start_matches('/'));
    }

    let rest = path.strip_prefix(mount)?;
    if rest.is_empty() {
        Some("")
    } else if rest.starts_with('/') {
        Some(&rest[1..])
    } else {
        // "/data2" must not match a mount at "/data"
        None
    }
}
