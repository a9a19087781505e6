//! File I/O for text documents.
//!
//! This module is the engine's file gateway: loading UTF-8 text files from
//! disk as line vectors, and saving them back with atomic writes. Both halves
//! share one trailing-newline convention so that load and save round-trip
//! exactly.

pub mod loader;
pub mod saver;
