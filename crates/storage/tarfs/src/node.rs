//! Tree node model and navigation
//!
//! The archive is materialized as a strictly-owned tree: every directory
//! node owns its children, file nodes borrow their payload from the archive
//! buffer. After construction the tree is immutable, so lookups and
//! enumeration take no locks and are safe to run concurrently.

use alloc::string::String;
use alloc::vec::Vec;

/// One filesystem entry in the built tree
#[derive(Debug)]
pub struct TarNode<'a> {
    /// Archive-relative path, trailing slash included for directories
    /// (e.g. `"photos/file.jpg"` or `"photos/"`)
    full_path: String,
    /// Final path segment, trailing slash stripped (e.g. `"file.jpg"`,
    /// `"photos"`)
    base_name: String,
    /// Stable node identity, assigned in build order (root is 1)
    ino: u64,
    kind: NodeKind<'a>,
}

/// Node payload: directory children or borrowed file bytes
#[derive(Debug)]
pub enum NodeKind<'a> {
    /// Directory; children keep archive encounter order
    Directory { children: Vec<TarNode<'a>> },
    /// Regular file; `data` is a view into the archive buffer
    File { data: &'a [u8] },
}

impl<'a> TarNode<'a> {
    /// Create the tree root (empty path, no children yet)
    pub(crate) fn new_root() -> Self {
        TarNode {
            full_path: String::new(),
            base_name: String::new(),
            ino: 1,
            kind: NodeKind::Directory {
                children: Vec::new(),
            },
        }
    }

    /// Create an empty directory node
    pub(crate) fn new_dir(full_path: &str, base_name: &str, ino: u64) -> Self {
        TarNode {
            full_path: String::from(full_path),
            base_name: String::from(base_name),
            ino,
            kind: NodeKind::Directory {
                children: Vec::new(),
            },
        }
    }

    /// Create a file node over a payload slice
    pub(crate) fn new_file(full_path: &str, base_name: &str, ino: u64, data: &'a [u8]) -> Self {
        TarNode {
            full_path: String::from(full_path),
            base_name: String::from(base_name),
            ino,
            kind: NodeKind::File { data },
        }
    }

    /// Archive-relative path of this entry
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Final path segment, without the directory trailing slash
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Stable node identity for handle caches and inode numbering
    pub fn ino(&self) -> u64 {
        self.ino
    }

    /// Entry kind
    pub fn kind(&self) -> &NodeKind<'a> {
        &self.kind
    }

    /// Whether this entry is a directory
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Whether this entry is a regular file
    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File { .. })
    }

    /// File payload bytes; `None` for directories
    pub fn file_data(&self) -> Option<&'a [u8]> {
        match self.kind {
            NodeKind::File { data } => Some(data),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Payload size in bytes (0 for directories)
    pub fn size(&self) -> u64 {
        match self.kind {
            NodeKind::File { data } => data.len() as u64,
            NodeKind::Directory { .. } => 0,
        }
    }

    /// Number of direct children (0 for files)
    pub fn child_count(&self) -> usize {
        match &self.kind {
            NodeKind::Directory { children } => children.len(),
            NodeKind::File { .. } => 0,
        }
    }

    /// Find a direct child by name
    ///
    /// Exact byte comparison against each child's `base_name`, first match
    /// in insertion order. Must only be called on directory nodes; a file
    /// node has no children and answers `None`.
    pub fn lookup(&self, name: &str) -> Option<&TarNode<'a>> {
        debug_assert!(self.is_dir(), "lookup on a file node");
        match &self.kind {
            NodeKind::Directory { children } => {
                children.iter().find(|child| child.base_name == name)
            }
            NodeKind::File { .. } => None,
        }
    }

    /// Return the child at `cursor` along with the cursor for the next one
    ///
    /// Feeding cursors `0, 1, 2, ...` back in yields every child exactly
    /// once in insertion order, then `None`. The sequence is restartable
    /// because the tree never changes after construction.
    pub fn entry_at(&self, cursor: usize) -> Option<(&TarNode<'a>, usize)> {
        debug_assert!(self.is_dir(), "entry_at on a file node");
        match &self.kind {
            NodeKind::Directory { children } => {
                children.get(cursor).map(|child| (child, cursor + 1))
            }
            NodeKind::File { .. } => None,
        }
    }

    /// Mutable access to the children vector, used while building
    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<TarNode<'a>>> {
        match &mut self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }
}
