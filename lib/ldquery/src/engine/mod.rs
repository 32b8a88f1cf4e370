//! The RDF engines a [`JsonLdLoader`](crate::loader::JsonLdLoader) can be bound to.

mod graph;
mod store;

pub use graph::GraphBackend;
pub use store::StoreBackend;

use crate::error::{LoaderError, QueryError};
use crate::results::QueryResultSet;
use crate::stats::TermCounts;
use clap::ValueEnum;
use std::fmt::{Display, Formatter};
use std::io::Read;

/// The media type the engines parse their input with.
pub(crate) const JSON_LD_MEDIA_TYPE: &str = "application/ld+json";

/// An RDF dataset together with the machinery to parse and query it.
///
/// Implementations own their dataset exclusively. They do not recover from errors: whatever the
/// underlying library raises is handed to the caller as the source of the returned error.
pub trait RdfEngine {
    /// Returns which engine this is.
    fn kind(&self) -> EngineKind;

    /// Parses a JSON-LD document from `reader` into the dataset.
    fn load(&mut self, reader: &mut dyn Read) -> Result<(), LoaderError>;

    /// Executes a SPARQL query.
    ///
    /// Every bound value is converted to its lexical form.
    fn query(&self, query: &str) -> Result<QueryResultSet, QueryError>;

    /// Returns the number of triples in the dataset.
    fn triple_count(&self) -> Result<usize, QueryError>;

    /// Counts the distinct subjects, predicates and objects of the dataset.
    fn term_counts(&self) -> Result<TermCounts, QueryError>;
}

/// The available engines.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, ValueEnum)]
pub enum EngineKind {
    /// An in-memory RDF dataset queried by a standalone SPARQL evaluator
    #[default]
    #[value(name = "rdflib", alias = "graph")]
    Graph,
    /// An in-memory Oxigraph store
    #[value(name = "oxigraph", alias = "store")]
    Store,
}

impl EngineKind {
    /// The name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            EngineKind::Graph => "rdflib",
            EngineKind::Store => "oxigraph",
        }
    }

    /// Creates an empty engine of this kind.
    pub fn create(self) -> Result<Box<dyn RdfEngine>, LoaderError> {
        Ok(match self {
            EngineKind::Graph => Box::new(GraphBackend::new()),
            EngineKind::Store => Box::new(StoreBackend::new()?),
        })
    }
}

impl Display for EngineKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engines_report_their_kind() -> Result<(), LoaderError> {
        for kind in EngineKind::value_variants() {
            assert_eq!(kind.create()?.kind(), *kind);
        }
        Ok(())
    }

    #[test]
    fn engine_names_match_clap_values() {
        for kind in EngineKind::value_variants() {
            let value = kind.to_possible_value();
            assert_eq!(value.as_ref().map(|v| v.get_name()), Some(kind.name()));
        }
    }

    #[test]
    fn aliases_are_accepted() {
        assert_eq!(EngineKind::from_str("graph", false), Ok(EngineKind::Graph));
        assert_eq!(EngineKind::from_str("store", false), Ok(EngineKind::Store));
    }
}
