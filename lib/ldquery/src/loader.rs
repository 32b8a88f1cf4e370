use crate::engine::{EngineKind, RdfEngine};
use crate::error::{LoaderError, QueryError};
use crate::namespaces::NamespaceBindings;
use crate::results::QueryResultSet;
use crate::stats::{DatasetStats, TYPE_BREAKDOWN_QUERY};
use log::{debug, info};
use std::fs::File;
use std::path::Path;

/// Loads a single JSON-LD document into an RDF engine and queries it.
///
/// A loader starts empty and becomes loaded after the first successful call to
/// [`JsonLdLoader::load`]. Querying an empty loader fails with [`QueryError::NotLoaded`] and a
/// second load fails with [`LoaderError::AlreadyLoaded`].
///
/// Usage example:
/// ```no_run
/// use ldquery::catalogue::NamedQuery;
/// use ldquery::engine::EngineKind;
/// use ldquery::loader::JsonLdLoader;
///
/// let mut loader = JsonLdLoader::new(EngineKind::Store)?;
/// loader.load("knowledge_graph.jsonld")?;
/// let results = loader.query(NamedQuery::CountDocuments.sparql(), None)?;
/// println!("{:?}", results.rows()[0].get("count"));
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
pub struct JsonLdLoader {
    engine: Box<dyn RdfEngine>,
    namespaces: NamespaceBindings,
    loaded: bool,
}

impl JsonLdLoader {
    /// Creates an empty loader bound to the engine of the given `kind`.
    pub fn new(kind: EngineKind) -> Result<Self, LoaderError> {
        Ok(Self::with_engine(kind.create()?))
    }

    /// Creates an empty loader bound to the given engine.
    pub fn with_engine(engine: Box<dyn RdfEngine>) -> Self {
        Self {
            engine,
            namespaces: NamespaceBindings::default(),
            loaded: false,
        }
    }

    /// Returns which engine the loader is bound to.
    pub fn engine_kind(&self) -> EngineKind {
        self.engine.kind()
    }

    /// The prefixes used to display results.
    pub fn namespaces(&self) -> &NamespaceBindings {
        &self.namespaces
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Parses the JSON-LD file at `path` and returns the number of triples in the dataset.
    ///
    /// The file is closed as soon as it is parsed.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoaderError> {
        let path = path.as_ref();
        if self.loaded {
            return Err(LoaderError::AlreadyLoaded);
        }
        if !path.exists() {
            return Err(LoaderError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        info!("Loading JSON-LD from {}", path.display());
        {
            let mut file = File::open(path)?;
            self.engine.load(&mut file)?;
        }
        self.loaded = true;

        let triples = self.engine.triple_count().map_err(LoaderError::Count)?;
        info!(
            "Loaded into the {} engine. Triple count: {triples}",
            self.engine.kind()
        );
        Ok(triples)
    }

    /// Executes `query`.
    ///
    /// If `limit` is given and the query does not mention `LIMIT` (in any case), a `LIMIT`
    /// clause is appended. `Some(0)` is treated like `None`.
    pub fn query(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<QueryResultSet, QueryError> {
        self.ensure_loaded()?;
        let query = with_limit(query, limit);
        debug!("Executing SPARQL query:\n{query}");
        self.engine.query(&query)
    }

    /// Computes a summary of the loaded dataset.
    pub fn stats(&self) -> Result<DatasetStats, QueryError> {
        self.ensure_loaded()?;
        let total_triples = self.engine.triple_count()?;
        let distinct = self.engine.term_counts()?;
        let types = self.engine.query(TYPE_BREAKDOWN_QUERY)?;
        DatasetStats::new(total_triples, distinct, &types)
    }

    fn ensure_loaded(&self) -> Result<(), QueryError> {
        if self.loaded {
            Ok(())
        } else {
            Err(QueryError::NotLoaded)
        }
    }
}

/// Appends `LIMIT <limit>` to `query` unless it already contains the keyword.
///
/// The keyword check is a case-insensitive substring match.
pub fn with_limit(query: &str, limit: Option<usize>) -> String {
    match limit {
        Some(limit) if limit > 0 && !query.to_uppercase().contains("LIMIT") => {
            format!("{query}\nLIMIT {limit}")
        }
        _ => query.to_owned(),
    }
}
