//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Bounded connection pool, injected rather than global
//! - One parameterized statement per store call
//! - Absence is a value (`Option`/`bool`), not an error

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, PoolConfig};
pub use repos::*;
