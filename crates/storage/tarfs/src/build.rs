//! One-pass tree construction from an archive buffer
//!
//! The builder scans 512-byte header records in order and hangs each entry
//! off the directory that precedes it in the stream. Standard archivers
//! emit a directory record before the entries inside it; an archive that
//! violates that ordering is rejected instead of guessing a structure.
//!
//! Parent resolution uses a transient map from directory path to the
//! child-index walk that reaches its node, so each insertion costs one map
//! probe plus a walk bounded by path depth.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::node::TarNode;
use crate::tar::{round_to_block, TarHeader, BLOCK_SIZE};

/// Errors surfaced while building the tree
///
/// Any of these aborts the whole build; partially constructed nodes are
/// released before the error is returned, so no partial tree is ever
/// observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An entry's parent directory does not appear earlier in the archive
    OrphanEntry(String),
    /// A file's declared size runs past the end of the archive
    TruncatedEntry(String),
    /// The octal size field could not be parsed
    MalformedSize(String),
    /// Storage for a new node could not be reserved
    AllocationFailure,
}

impl BuildError {
    /// Convert to errno-style error code
    pub fn to_errno(&self) -> i32 {
        match self {
            BuildError::OrphanEntry(_) => -22,    // EINVAL
            BuildError::TruncatedEntry(_) => -22,
            BuildError::MalformedSize(_) => -22,
            BuildError::AllocationFailure => -12, // ENOMEM
        }
    }
}

/// A fully built archive tree
///
/// Owns every node it contains. File payloads borrow the archive buffer,
/// which must outlive the tree; dropping the tree releases all nodes and
/// never touches the archive bytes.
pub struct TarTree<'a> {
    root: TarNode<'a>,
    node_count: u64,
}

impl<'a> TarTree<'a> {
    /// Build the tree from a TAR archive image
    ///
    /// The buffer holds zero or more consecutive 512-byte records; records
    /// with an empty name field (archive terminator and padding) are
    /// skipped. An empty buffer yields a tree with just the root directory.
    pub fn build(archive: &'a [u8]) -> Result<Self, BuildError> {
        let mut root = TarNode::new_root();
        let mut node_count: u64 = 1;

        // Directory full path -> child-index walk from the root.
        // Only lives for the duration of the build.
        let mut dir_index: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        dir_index.insert(String::new(), Vec::new());

        let mut offset = 0;
        while offset + BLOCK_SIZE <= archive.len() {
            let header = match TarHeader::parse(&archive[offset..]) {
                Some(h) => h,
                None => break,
            };

            if header.is_padding() {
                offset += BLOCK_SIZE;
                continue;
            }

            let name = match core::str::from_utf8(header.name()) {
                Ok(n) => n,
                Err(_) => {
                    // Names outside UTF-8 cannot be served through the
                    // lookup interface; skip the record and its payload.
                    let skipped = header.size().unwrap_or(0) as usize;
                    offset += BLOCK_SIZE + round_to_block(skipped);
                    continue;
                }
            };

            let is_dir = name.ends_with('/');
            let (dirname, base_name) = split_entry_name(name);

            let parent_walk = dir_index
                .get(dirname)
                .cloned()
                .ok_or_else(|| BuildError::OrphanEntry(String::from(name)))?;

            let ino = node_count + 1;
            let node = if is_dir {
                offset += BLOCK_SIZE;
                TarNode::new_dir(name, base_name, ino)
            } else {
                let size = header
                    .size()
                    .ok_or_else(|| BuildError::MalformedSize(String::from(name)))?
                    as usize;
                let start = offset + BLOCK_SIZE;
                let end = start
                    .checked_add(size)
                    .ok_or_else(|| BuildError::TruncatedEntry(String::from(name)))?;
                if end > archive.len() {
                    return Err(BuildError::TruncatedEntry(String::from(name)));
                }
                offset = start + round_to_block(size);
                TarNode::new_file(name, base_name, ino, &archive[start..end])
            };

            let child_idx = insert_child(&mut root, &parent_walk, node)?;
            node_count += 1;

            if is_dir {
                let mut walk = parent_walk;
                walk.push(child_idx);
                dir_index.insert(String::from(name), walk);
            }
        }

        Ok(TarTree { root, node_count })
    }

    /// The root directory node (`full_path == ""`)
    pub fn root(&self) -> &TarNode<'a> {
        &self.root
    }

    /// Total number of nodes, root included
    pub fn node_count(&self) -> u64 {
        self.node_count
    }
}

/// Split an entry name into its parent directory path and base name
///
/// The returned directory path keeps its trailing slash so it matches
/// directory `full_path` values exactly; the base name has the trailing
/// slash stripped. Top-level entries get an empty directory path.
fn split_entry_name(name: &str) -> (&str, &str) {
    let stem = name.strip_suffix('/').unwrap_or(name);
    match stem.rfind('/') {
        Some(pos) => (&name[..pos + 1], &stem[pos + 1..]),
        None => ("", stem),
    }
}

/// Append `node` to the directory reached by `walk`, returning its index
fn insert_child<'a>(
    root: &mut TarNode<'a>,
    walk: &[usize],
    node: TarNode<'a>,
) -> Result<usize, BuildError> {
    let mut parent = root;
    for &idx in walk {
        let children = parent
            .children_mut()
            .expect("directory index only records directory nodes");
        parent = &mut children[idx];
    }

    let children = parent
        .children_mut()
        .expect("directory index only records directory nodes");
    children
        .try_reserve(1)
        .map_err(|_| BuildError::AllocationFailure)?;
    children.push(node);
    Ok(children.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_entry_name() {
        assert_eq!(split_entry_name("file.txt"), ("", "file.txt"));
        assert_eq!(split_entry_name("docs/"), ("", "docs"));
        assert_eq!(split_entry_name("docs/readme.txt"), ("docs/", "readme.txt"));
        assert_eq!(split_entry_name("a/b/"), ("a/", "b"));
        assert_eq!(split_entry_name("a/b/c.jpg"), ("a/b/", "c.jpg"));
    }
}
