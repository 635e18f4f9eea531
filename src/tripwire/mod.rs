//! Tripwire: SHA-256 hashing, directory scans, snapshot diffing, audit log.

pub mod auditlog;
pub mod diff;
pub mod hasher;
pub mod scanner;
