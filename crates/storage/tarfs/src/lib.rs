//! tarfs - in-memory TAR-backed filesystem
//!
//! Serves the contents of an embedded USTAR archive as a read-only
//! filesystem. The archive is parsed once, at mount time, into a
//! fully-materialized directory tree; after that every operation is a
//! lock-free traversal over resident memory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              Archive buffer (bytes)             │
//! │   512-byte USTAR records, payloads in place     │
//! └────────────────────────┬────────────────────────┘
//!                          │ TarTree::build (once, at mount)
//! ┌────────────────────────▼────────────────────────┐
//! │                    TarTree                      │
//! │   root: TarNode                                 │
//! │   ├── Directory { children }   (owned)          │
//! │   └── File { data }            (borrows buffer) │
//! └────────────────────────┬────────────────────────┘
//!                          │ lookup / entry_at
//! ┌────────────────────────▼────────────────────────┐
//! │          TarFilesystem (VFS adapter)            │
//! │   open / stat / readdir / statfs                │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Properties
//!
//! - **Single-pass build**: one scan over the archive; parent directories
//!   are resolved through a transient path index, not tree search.
//! - **Zero-copy files**: file nodes borrow payload slices from the
//!   archive buffer, which must outlive the tree.
//! - **Immutable after build**: lookups and enumeration take no locks and
//!   may run concurrently; teardown is dropping the tree.
//! - **Fail-closed**: malformed archives (orphaned entries, truncated
//!   payloads, unparsable size fields) abort the build with a typed error
//!   and no partial tree.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod build;
pub mod node;
pub mod tar;

// VFS adapter (optional, enabled with "vfs" feature)
#[cfg(feature = "vfs")]
pub mod vfs_adapter;

#[cfg(feature = "vfs")]
pub use vfs_adapter::TarFilesystem;

pub use build::{BuildError, TarTree};
pub use node::{NodeKind, TarNode};
pub use tar::BLOCK_SIZE;
