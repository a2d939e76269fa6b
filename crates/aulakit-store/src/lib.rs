//! aulakit-store — Repository implementations.
//!
//! In-memory quiz and progress stores for demo use, a JSON-file-backed
//! progress store so the CLI keeps state between invocations, and the demo
//! seed data.

pub mod json;
pub mod memory;
pub mod seed;

pub use json::{DirectoryQuizStore, JsonProgressStore};
pub use memory::{MemoryProgressStore, MemoryQuizStore};
