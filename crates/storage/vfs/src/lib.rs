//! virtfs Virtual File System layer
//!
//! Provides a unified interface for read-mostly filesystem implementations
//! and the mount table that routes paths to them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │            Host driver shim          │
//! └──────────────────┬───────────────────┘
//!                    │ open/stat/readdir
//! ┌──────────────────▼───────────────────┐
//! │              VFS Layer               │
//! │  - Mount table                       │
//! │  - Path resolution                   │
//! └──────────────────┬───────────────────┘
//!                    │ Filesystem trait
//! ┌──────────────────┴───────────────────┐
//! │             tarfs, ...               │
//! └──────────────────────────────────────┘
//! ```

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use spin::Mutex;

pub mod error;
pub mod file;
pub mod mount;
pub mod path;

mod debug;
#[allow(unused_imports)]
pub use debug::*;

pub use error::{VfsError, VfsResult};
pub use file::{FileMode, FileStat, FileType};
pub use mount::{MountPoint, MountTable};

/// Maximum path length
pub const MAX_PATH: usize = 256;

/// Maximum filename length
pub const MAX_FILENAME: usize = 255;

/// Maximum number of mount points
pub const MAX_MOUNTS: usize = 16;

/// Directory entry
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Entry name
    pub name: String,
    /// Entry type
    pub file_type: FileType,
    /// File size in bytes
    pub size: u64,
    /// Inode number (filesystem-specific)
    pub inode: u64,
}

/// Filesystem trait - implemented by all filesystem drivers
///
/// The write-side operations carry `ReadOnly` defaults so that read-only
/// filesystems only implement the traversal surface.
pub trait Filesystem: Send + Sync {
    /// Get filesystem name
    fn name(&self) -> &'static str;

    /// Open a file
    fn open(&self, path: &str, mode: FileMode) -> VfsResult<Box<dyn FileOperations>>;

    /// Get file statistics
    fn stat(&self, path: &str) -> VfsResult<FileStat>;

    /// Read directory entries
    fn readdir(&self, path: &str) -> VfsResult<Vec<DirEntry>>;

    /// Get filesystem statistics
    fn statfs(&self) -> VfsResult<FsStats>;

    /// Create a directory
    fn mkdir(&self, _path: &str) -> VfsResult<()> {
        Err(VfsError::ReadOnly)
    }

    /// Remove a file
    fn unlink(&self, _path: &str) -> VfsResult<()> {
        Err(VfsError::ReadOnly)
    }

    /// Remove a directory
    fn rmdir(&self, _path: &str) -> VfsResult<()> {
        Err(VfsError::ReadOnly)
    }

    /// Rename/move a file
    fn rename(&self, _old_path: &str, _new_path: &str) -> VfsResult<()> {
        Err(VfsError::ReadOnly)
    }

    /// Sync filesystem to backing storage
    fn sync(&self) -> VfsResult<()> {
        Ok(())
    }

    /// Check if a file exists
    fn exists(&self, path: &str) -> bool {
        self.stat(path).is_ok()
    }

    /// Read entire file contents (convenience method)
    fn read_file(&self, path: &str) -> VfsResult<Vec<u8>> {
        let mut file = self.open(path, FileMode::READ)?;
        let stat = file.stat()?;
        let mut buffer = vec![0u8; stat.size as usize];
        let read = file.read(&mut buffer)?;
        buffer.truncate(read);
        Ok(buffer)
    }
}

/// File operations trait - returned by Filesystem::open
pub trait FileOperations: Send + Sync {
    /// Read data from file
    fn read(&mut self, buffer: &mut [u8]) -> VfsResult<usize>;

    /// Seek to position
    fn seek(&mut self, offset: i64, whence: SeekFrom) -> VfsResult<u64>;

    /// Get current position
    fn tell(&self) -> u64;

    /// Get file statistics
    fn stat(&self) -> VfsResult<FileStat>;

    /// Write data to file
    fn write(&mut self, _buffer: &[u8]) -> VfsResult<usize> {
        Err(VfsError::ReadOnly)
    }

    /// Truncate file to size
    fn truncate(&mut self, _size: u64) -> VfsResult<()> {
        Err(VfsError::ReadOnly)
    }

    /// Sync file to backing storage
    fn sync(&mut self) -> VfsResult<()> {
        Ok(())
    }
}

/// Seek origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekFrom {
    /// From start of file
    Start,
    /// From current position
    Current,
    /// From end of file
    End,
}

/// Filesystem statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStats {
    /// Total blocks
    pub total_blocks: u64,
    /// Free blocks
    pub free_blocks: u64,
    /// Block size
    pub block_size: u32,
    /// Total inodes
    pub total_inodes: u64,
    /// Maximum filename length
    pub max_name_len: u32,
}

/// Global VFS instance
static VFS: Mutex<Option<Vfs>> = Mutex::new(None);

/// Virtual File System manager
pub struct Vfs {
    mounts: MountTable,
}

impl Vfs {
    /// Create a new VFS instance
    pub fn new() -> Self {
        Vfs {
            mounts: MountTable::new(),
        }
    }

    /// Mount a filesystem at a path
    pub fn mount(&mut self, path: &str, fs: Box<dyn Filesystem>) -> VfsResult<()> {
        debug_vfs!("mount {}", path);
        self.mounts.mount(path, fs)
    }

    /// Unmount a filesystem
    pub fn unmount(&mut self, path: &str) -> VfsResult<()> {
        debug_vfs!("unmount {}", path);
        self.mounts.unmount(path)
    }

    /// List all mounts
    pub fn list_mounts(&self) -> &[MountPoint] {
        self.mounts.list()
    }

    /// Resolve path to filesystem and mount-relative path
    fn resolve(&self, path: &str) -> VfsResult<(&dyn Filesystem, String)> {
        self.mounts.resolve(path)
    }

    /// Open a file
    pub fn open(&self, path: &str, mode: FileMode) -> VfsResult<Box<dyn FileOperations>> {
        let (fs, rel_path) = self.resolve(path)?;
        fs.open(&rel_path, mode)
    }

    /// Get file statistics
    pub fn stat(&self, path: &str) -> VfsResult<FileStat> {
        let (fs, rel_path) = self.resolve(path)?;
        fs.stat(&rel_path)
    }

    /// Read directory entries
    pub fn readdir(&self, path: &str) -> VfsResult<Vec<DirEntry>> {
        let (fs, rel_path) = self.resolve(path)?;
        fs.readdir(&rel_path)
    }
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the global VFS
pub fn init() {
    let mut vfs = VFS.lock();
    *vfs = Some(Vfs::new());
}

/// Get a reference to the global VFS
pub fn vfs() -> spin::MutexGuard<'static, Option<Vfs>> {
    VFS.lock()
}

/// Mount a filesystem at a path
pub fn mount(path: &str, fs: Box<dyn Filesystem>) -> VfsResult<()> {
    let mut vfs = VFS.lock();
    match vfs.as_mut() {
        Some(v) => v.mount(path, fs),
        None => Err(VfsError::NotInitialized),
    }
}

/// Unmount a filesystem
pub fn unmount(path: &str) -> VfsResult<()> {
    let mut vfs = VFS.lock();
    match vfs.as_mut() {
        Some(v) => v.unmount(path),
        None => Err(VfsError::NotInitialized),
    }
}

/// Open a file
pub fn open(path: &str, mode: FileMode) -> VfsResult<Box<dyn FileOperations>> {
    let vfs = VFS.lock();
    match vfs.as_ref() {
        Some(v) => v.open(path, mode),
        None => Err(VfsError::NotInitialized),
    }
}

/// Get file statistics
pub fn stat(path: &str) -> VfsResult<FileStat> {
    let vfs = VFS.lock();
    match vfs.as_ref() {
        Some(v) => v.stat(path),
        None => Err(VfsError::NotInitialized),
    }
}

/// Read directory entries
pub fn readdir(path: &str) -> VfsResult<Vec<DirEntry>> {
    let vfs = VFS.lock();
    match vfs.as_ref() {
        Some(v) => v.readdir(path),
        None => Err(VfsError::NotInitialized),
    }
}
