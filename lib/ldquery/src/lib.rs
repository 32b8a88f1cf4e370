#![doc = include_str!("../README.md")]

pub mod catalogue;
pub mod engine;
pub mod error;
pub mod loader;
pub mod namespaces;
pub mod results;
pub mod stats;

pub use catalogue::NamedQuery;
pub use engine::{EngineKind, RdfEngine};
pub use error::{LoaderError, QueryError};
pub use loader::JsonLdLoader;
pub use results::{QueryResultSet, QueryRow};
pub use stats::DatasetStats;
