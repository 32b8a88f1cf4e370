use crate::cli::{OutputFormat, QueryArgs};
use ldquery::{EngineKind, NamedQuery};
use std::path::PathBuf;

/// Raised when the command line options do not describe a runnable command.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("Please provide either --query-name or --query")]
    MissingQuery,
}

/// Where the query text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuerySource {
    Named(NamedQuery),
    Literal(String),
}

impl QuerySource {
    pub fn sparql(&self) -> &str {
        match self {
            QuerySource::Named(query) => query.sparql(),
            QuerySource::Literal(query) => query,
        }
    }
}

/// A validated `query` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryConfig {
    pub file_path: PathBuf,
    pub source: QuerySource,
    pub engine: EngineKind,
    pub limit: Option<usize>,
    pub output: OutputFormat,
}

impl TryFrom<QueryArgs> for QueryConfig {
    type Error = UsageError;

    fn try_from(args: QueryArgs) -> Result<Self, Self::Error> {
        let source = match (args.query_name, args.query) {
            (Some(name), _) => QuerySource::Named(name),
            (None, Some(query)) if !query.trim().is_empty() => QuerySource::Literal(query),
            (None, _) => return Err(UsageError::MissingQuery),
        };
        Ok(Self {
            file_path: args.file_path,
            source,
            engine: args.engine,
            limit: (args.limit > 0).then_some(args.limit),
            output: args.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(query_name: Option<NamedQuery>, query: Option<&str>, limit: usize) -> QueryArgs {
        QueryArgs {
            file_path: PathBuf::from("knowledge_graph.jsonld"),
            query_name,
            query: query.map(str::to_owned),
            engine: EngineKind::Store,
            limit,
            output: OutputFormat::Json,
        }
    }

    #[test]
    fn named_query_is_resolved() -> Result<(), UsageError> {
        let config = QueryConfig::try_from(args(Some(NamedQuery::ChunkPositions), None, 10))?;
        assert_eq!(config.source, QuerySource::Named(NamedQuery::ChunkPositions));
        assert_eq!(config.source.sparql(), NamedQuery::ChunkPositions.sparql());
        assert_eq!(config.limit, Some(10));
        assert_eq!(config.engine, EngineKind::Store);
        Ok(())
    }

    #[test]
    fn literal_query_is_kept() -> Result<(), UsageError> {
        let config = QueryConfig::try_from(args(None, Some("ASK {}"), 0))?;
        assert_eq!(config.source.sparql(), "ASK {}");
        assert_eq!(config.limit, None);
        Ok(())
    }

    #[test]
    fn missing_query_is_a_usage_error() {
        assert!(matches!(
            QueryConfig::try_from(args(None, None, 10)),
            Err(UsageError::MissingQuery)
        ));
        assert!(matches!(
            QueryConfig::try_from(args(None, Some("  "), 10)),
            Err(UsageError::MissingQuery)
        ));
    }
}
