//! VFS Error types

/// VFS Result type
pub type VfsResult<T> = Result<T, VfsError>;

/// VFS Error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VfsError {
    /// File or directory not found
    NotFound,
    /// Not a directory
    NotADirectory,
    /// Is a directory (when expecting file)
    IsADirectory,
    /// Read-only filesystem
    ReadOnly,
    /// Invalid argument
    InvalidArgument,
    /// Invalid path
    InvalidPath,
    /// Name too long
    NameTooLong,
    /// Not a mount point
    NotMounted,
    /// Already mounted
    AlreadyMounted,
    /// VFS not initialized
    NotInitialized,
    /// Operation not supported
    NotSupported,
    /// Corrupted data
    Corrupted,
    /// I/O error
    IoError,
}

impl VfsError {
    /// Convert to errno-style error code
    pub fn to_errno(&self) -> i32 {
        match self {
            VfsError::NotFound => -2,          // ENOENT
            VfsError::NotADirectory => -20,    // ENOTDIR
            VfsError::IsADirectory => -21,     // EISDIR
            VfsError::ReadOnly => -30,         // EROFS
            VfsError::InvalidArgument => -22,  // EINVAL
            VfsError::InvalidPath => -22,
            VfsError::NameTooLong => -36,      // ENAMETOOLONG
            VfsError::NotMounted => -22,
            VfsError::AlreadyMounted => -16,   // EBUSY
            VfsError::NotInitialized => -22,
            VfsError::NotSupported => -38,     // ENOSYS
            VfsError::Corrupted => -5,         // EIO
            VfsError::IoError => -5,
        }
    }
}
