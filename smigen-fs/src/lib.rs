//! Filesystem abstraction for smigen.
//!
//! This crate provides:
//! - Filesystem trait for the file operations the generator needs
//! - RealFilesystem backed by std::fs
//! - MockFilesystem for deterministic tests

pub mod fs;

pub use fs::{Filesystem, FsError, MockFilesystem, RealFilesystem};
