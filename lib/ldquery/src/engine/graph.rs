use crate::engine::{EngineKind, RdfEngine, JSON_LD_MEDIA_TYPE};
use crate::error::{LoaderError, QueryError};
use crate::results::{QueryResultSet, QueryRow};
use crate::stats::{TermCounter, TermCounts};
use oxrdf::Dataset;
use oxrdfio::{RdfFormat, RdfParser};
use spareval::{QueryEvaluator, QueryResults};
use spargebra::SparqlParser;
use std::io::Read;

/// Keeps the triples in a plain [`Dataset`] and evaluates queries with [`QueryEvaluator`].
///
/// Nothing is indexed beyond what [`Dataset`] maintains itself, which is fine for the document
/// sizes this tool is meant for.
#[derive(Debug, Default)]
pub struct GraphBackend {
    dataset: Dataset,
}

impl GraphBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RdfEngine for GraphBackend {
    fn kind(&self) -> EngineKind {
        EngineKind::Graph
    }

    fn load(&mut self, reader: &mut dyn Read) -> Result<(), LoaderError> {
        let format = RdfFormat::from_media_type(JSON_LD_MEDIA_TYPE).ok_or(
            LoaderError::UnsupportedFormat {
                engine: self.kind().name(),
                media_type: JSON_LD_MEDIA_TYPE,
            },
        )?;
        let quads = RdfParser::from_format(format)
            .rename_blank_nodes()
            .for_reader(reader)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| LoaderError::Parsing(Box::new(e)))?;
        self.dataset.extend(quads);
        Ok(())
    }

    fn query(&self, query: &str) -> Result<QueryResultSet, QueryError> {
        let query = SparqlParser::new()
            .parse_query(query)
            .map_err(|e| QueryError::Syntax(Box::new(e)))?;
        let results = QueryEvaluator::new()
            .prepare(&query)
            .execute(&self.dataset)
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
        Ok(self.dataset.len())
    }

    fn term_counts(&self) -> Result<TermCounts, QueryError> {
        let mut counter = TermCounter::new();
        for quad in &self.dataset {
            counter.add(quad.subject, quad.predicate, quad.object);
        }
        Ok(counter.finish())
    }
}
