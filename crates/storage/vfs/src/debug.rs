//! Debug macro for the filesystem layer
//!
//! Compiles to nothing when the `debug-vfs` feature is disabled.

/// Debug print for filesystem operations
#[macro_export]
#[cfg(feature = "debug-vfs")]
macro_rules! debug_vfs {
    ($($arg:tt)*) => {
        $crate::_debug_print("[VFS] ", format_args!($($arg)*))
    };
}

#[macro_export]
#[cfg(not(feature = "debug-vfs"))]
macro_rules! debug_vfs {
    ($($arg:tt)*) => {};
}

/// Debug output function - can be replaced with actual serial output
#[doc(hidden)]
#[cfg(feature = "debug-vfs")]
pub fn _debug_print(_prefix: &str, _args: core::fmt::Arguments) {
    // Hooked up to the host's console by the embedding shim
}
