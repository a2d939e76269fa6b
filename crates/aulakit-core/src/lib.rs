//! aulakit-core — Domain model, grading, and progress allocation.
//!
//! This crate defines the fundamental data model, repository traits, and the
//! two pieces of real domain logic in aulakit: quiz auto-grading and the
//! randomized student-progress bootstrap.

pub mod allocator;
pub mod error;
pub mod grader;
pub mod model;
pub mod parser;
pub mod service;
pub mod traits;
