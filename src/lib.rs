//! tripcheck: directory integrity auditor.
//!
//! Records SHA-256 digests of every file under a directory, later reports
//! which files were modified, deleted, or added, and appends each result to
//! a plain-text audit log.

pub mod cli;
pub mod core;
pub mod tripwire;
