//! File handle and file types

/// File type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Regular file
    Regular,
    /// Directory
    Directory,
    /// Unknown type
    Unknown,
}

/// File open mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMode {
    /// Read access
    pub read: bool,
    /// Write access
    pub write: bool,
    /// Append mode
    pub append: bool,
    /// Create if not exists
    pub create: bool,
    /// Truncate on open
    pub truncate: bool,
}

impl FileMode {
    /// Read-only mode
    pub const READ: FileMode = FileMode {
        read: true,
        write: false,
        append: false,
        create: false,
        truncate: false,
    };

    /// Check whether this mode would modify the file or filesystem
    pub fn is_mutating(&self) -> bool {
        self.write || self.append || self.create || self.truncate
    }
}

/// File statistics
#[derive(Debug, Clone, Copy)]
pub struct FileStat {
    /// File type
    pub file_type: FileType,
    /// File size in bytes
    pub size: u64,
    /// Number of hard links
    pub nlink: u32,
    /// Inode number
    pub inode: u64,
    /// File mode/permissions
    pub mode: u32,
    /// Block size for I/O
    pub blksize: u32,
    /// Number of 512-byte blocks allocated
    pub blocks: u64,
}

impl Default for FileStat {
    fn default() -> Self {
        FileStat {
            file_type: FileType::Unknown,
            size: 0,
            nlink: 1,
            inode: 0,
            mode: 0,
            blksize: 512,
            blocks: 0,
        }
    }
}
