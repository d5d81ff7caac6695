//! Filesystem utilities for taskdef-clean.
//!
//! Rewrites go through [`atomic_write`] so a task definition is either the
//! old content or the new content, never a truncated mix.

pub mod atomic;

pub use atomic::atomic_write;
