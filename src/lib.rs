//! Fake data generator for a customer / order store schema.
//!
//! Streams one `INSERT` statement per row: customers first, then orders,
//! each order pointing at a uniformly random customer.
//!
//! # Example
//!
//! ```rust
//! use store_seed::{FakeProvider, Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::new(2, 3);
//! let mut gen = Generator::new(config, FakeProvider::thread_local(), rand::rng()).unwrap();
//! let (sql, stats) = gen.generate_to_string().unwrap();
//!
//! assert_eq!(sql.lines().count(), 5);
//! assert_eq!(stats.orders, 3);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod progress;
pub mod provider;
pub mod statement;
pub mod writer;

pub use config::{GeneratorConfig, SeedYamlConfig};
pub use error::{BoxError, GenerateError};
pub use generator::{GenerateStats, Generator};
pub use provider::{FakeProvider, TextProvider};
pub use writer::StatementWriter;
