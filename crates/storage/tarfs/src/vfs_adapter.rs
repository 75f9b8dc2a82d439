//! tarfs VFS adapter
//!
//! Implements the VFS Filesystem trait over a built archive tree. The
//! filesystem is read-only: every mutating operation answers `ReadOnly`.

#![cfg(feature = "vfs")]

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use virtfs_vfs::{
    debug_vfs, path, DirEntry, FileMode, FileOperations, FileStat, FileType, Filesystem, FsStats,
    SeekFrom, VfsError, VfsResult,
};

use crate::build::{BuildError, TarTree};
use crate::node::{NodeKind, TarNode};
use crate::tar::BLOCK_SIZE;

/// Super-block geometry reported for the in-memory archive, matching the
/// 512-byte record size the tree was parsed from
const TOTAL_BLOCKS: u64 = 1 << 33;
const FREE_BLOCKS: u64 = 1 << 32;

impl From<BuildError> for VfsError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::AllocationFailure => VfsError::IoError,
            BuildError::OrphanEntry(_)
            | BuildError::TruncatedEntry(_)
            | BuildError::MalformedSize(_) => VfsError::Corrupted,
        }
    }
}

/// TAR filesystem
///
/// Owns the tree built from an archive image that stays resident for the
/// process lifetime (a linked-in data section, typically). File handles
/// serve borrowed slices of that image; nothing is copied.
pub struct TarFilesystem {
    tree: TarTree<'static>,
}

impl TarFilesystem {
    /// Build the tree from a process-lifetime archive image
    pub fn new(archive: &'static [u8]) -> Result<Self, BuildError> {
        let tree = TarTree::build(archive)?;
        debug_vfs!("tarfs: built tree with {} nodes", tree.node_count());
        Ok(TarFilesystem { tree })
    }

    /// Resolve a mount-relative path to its node
    fn resolve(&self, rel_path: &str) -> VfsResult<&TarNode<'static>> {
        let mut node = self.tree.root();
        for part in path::components(rel_path) {
            if !node.is_dir() {
                return Err(VfsError::NotADirectory);
            }
            node = node.lookup(part).ok_or(VfsError::NotFound)?;
        }
        Ok(node)
    }

    fn node_stat(node: &TarNode<'static>) -> FileStat {
        let (file_type, mode) = if node.is_dir() {
            (FileType::Directory, 0o555)
        } else {
            (FileType::Regular, 0o444)
        };

        FileStat {
            file_type,
            size: node.size(),
            nlink: 1,
            inode: node.ino(),
            mode,
            blksize: BLOCK_SIZE as u32,
            blocks: (node.size() + BLOCK_SIZE as u64 - 1) / BLOCK_SIZE as u64,
        }
    }
}

impl Filesystem for TarFilesystem {
    fn name(&self) -> &'static str {
        "tarfs"
    }

    fn open(&self, rel_path: &str, mode: FileMode) -> VfsResult<Box<dyn FileOperations>> {
        if mode.is_mutating() {
            return Err(VfsError::ReadOnly);
        }

        let node = self.resolve(rel_path)?;
        match *node.kind() {
            NodeKind::Directory { .. } => Err(VfsError::IsADirectory),
            NodeKind::File { data } => {
                debug_vfs!("tarfs: open {} ({} bytes)", rel_path, data.len());
                Ok(Box::new(TarFile {
                    data,
                    ino: node.ino(),
                    position: 0,
                }))
            }
        }
    }

    fn stat(&self, rel_path: &str) -> VfsResult<FileStat> {
        Ok(Self::node_stat(self.resolve(rel_path)?))
    }

    fn readdir(&self, rel_path: &str) -> VfsResult<Vec<DirEntry>> {
        let node = self.resolve(rel_path)?;
        if !node.is_dir() {
            return Err(VfsError::NotADirectory);
        }

        debug_vfs!("tarfs: readdir {}", rel_path);

        // Synthetic . and .. entries are the host shim's business
        let mut entries = Vec::new();
        let mut cursor = 0;
        while let Some((child, next)) = node.entry_at(cursor) {
            entries.push(DirEntry {
                name: String::from(child.base_name()),
                file_type: if child.is_dir() {
                    FileType::Directory
                } else {
                    FileType::Regular
                },
                size: child.size(),
                inode: child.ino(),
            });
            cursor = next;
        }
        Ok(entries)
    }

    fn statfs(&self) -> VfsResult<FsStats> {
        Ok(FsStats {
            total_blocks: TOTAL_BLOCKS,
            free_blocks: FREE_BLOCKS,
            block_size: BLOCK_SIZE as u32,
            total_inodes: self.tree.node_count(),
            max_name_len: virtfs_vfs::MAX_FILENAME as u32,
        })
    }
}

/// Read-only file handle over a borrowed archive payload
struct TarFile {
    data: &'static [u8],
    ino: u64,
    position: usize,
}

impl FileOperations for TarFile {
    fn read(&mut self, buffer: &mut [u8]) -> VfsResult<usize> {
        if self.position >= self.data.len() {
            return Ok(0);
        }

        let remaining = &self.data[self.position..];
        let to_read = remaining.len().min(buffer.len());
        buffer[..to_read].copy_from_slice(&remaining[..to_read]);
        self.position += to_read;
        Ok(to_read)
    }

    fn seek(&mut self, offset: i64, whence: SeekFrom) -> VfsResult<u64> {
        let base = match whence {
            SeekFrom::Start => 0i64,
            SeekFrom::Current => self.position as i64,
            SeekFrom::End => self.data.len() as i64,
        };

        let new_pos = base.checked_add(offset).ok_or(VfsError::InvalidArgument)?;
        if new_pos < 0 {
            return Err(VfsError::InvalidArgument);
        }
        self.position = (new_pos as usize).min(self.data.len());
        Ok(self.position as u64)
    }

    fn tell(&self) -> u64 {
        self.position as u64
    }

    fn stat(&self) -> VfsResult<FileStat> {
        Ok(FileStat {
            file_type: FileType::Regular,
            size: self.data.len() as u64,
            nlink: 1,
            inode: self.ino,
            mode: 0o444,
            blksize: BLOCK_SIZE as u32,
            blocks: (self.data.len() as u64 + BLOCK_SIZE as u64 - 1) / BLOCK_SIZE as u64,
        })
    }
}
