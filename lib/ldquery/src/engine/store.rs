use crate::engine::{EngineKind, RdfEngine, JSON_LD_MEDIA_TYPE};
use crate::error::{LoaderError, QueryError};
use crate::results::{QueryResultSet, QueryRow};
use crate::stats::{TermCounter, TermCounts};
use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::sparql::{QueryResults, SparqlEvaluator};
use oxigraph::store::Store;
use std::io::Read;

/// Keeps the triples in an in-memory Oxigraph [`Store`].
pub struct StoreBackend {
    store: Store,
}

impl StoreBackend {
    pub fn new() -> Result<Self, LoaderError> {
        let store = Store::new().map_err(|e| LoaderError::Initialization {
            engine: EngineKind::Store.name(),
            error: Box::new(e),
        })?;
        Ok(Self { store })
    }
}

impl RdfEngine for StoreBackend {
    fn kind(&self) -> EngineKind {
        EngineKind::Store
    }

    fn load(&mut self, reader: &mut dyn Read) -> Result<(), LoaderError> {
        let format = RdfFormat::from_media_type(JSON_LD_MEDIA_TYPE).ok_or(
            LoaderError::UnsupportedFormat {
                engine: self.kind().name(),
                media_type: JSON_LD_MEDIA_TYPE,
            },
        )?;
        self.store
            .load_from_reader(RdfParser::from_format(format), reader)
            .map_err(|e| LoaderError::Parsing(Box::new(e)))
    }

    fn query(&self, query: &str) -> Result<QueryResultSet, QueryError> {
        let results = SparqlEvaluator::new()
            .parse_query(query)
            .map_err(|e| QueryError::Syntax(Box::new(e)))?
            .on_store(&self.store)
            .execute()
            .map_err(|e| QueryError::Evaluation(Box::new(e)))?;

        match results {
            QueryResults::Solutions(solutions) => {
                let variables = solutions
                    .variables()
                    .iter()
                    .map(|v| v.as_str().to_owned())
                    .collect();
                let rows = solutions
                    .map(|solution| solution.map(|s| QueryRow::from_solution(s.iter())))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| QueryError::Evaluation(Box::new(e)))?;
                Ok(QueryResultSet::new(variables, rows))
            }
            QueryResults::Boolean(value) => Ok(QueryResultSet::from_boolean(value)),
            QueryResults::Graph(triples) => {
                let triples = triples
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| QueryError::Evaluation(Box::new(e)))?;
                Ok(QueryResultSet::from_triples(&triples))
            }
        }
    }

    fn triple_count(&self) -> Result<usize, QueryError> {
        self.store
            .len()
            .map_err(|e| QueryError::Storage(Box::new(e)))
    }

    fn term_counts(&self) -> Result<TermCounts, QueryError> {
        let mut counter = TermCounter::new();
        for quad in self.store.iter() {
            let quad = quad.map_err(|e| QueryError::Storage(Box::new(e)))?;
            counter.add(quad.subject, quad.predicate, quad.object);
        }
        Ok(counter.finish())
    }
}
