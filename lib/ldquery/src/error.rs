use std::io;
use std::path::PathBuf;

/// A type-erased error raised by one of the RDF backends.
///
/// The backends are built on different crates, so their errors are kept unchanged but boxed.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error raised while creating a [`JsonLdLoader`](crate::loader::JsonLdLoader) or while
/// loading a file into it.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The backend could not allocate its dataset.
    #[error("Unable to initialize the {engine} engine")]
    Initialization {
        /// The name of the engine.
        engine: &'static str,
        /// The error raised by the backend.
        #[source]
        error: BackendError,
    },
    /// The file to load does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// The path that was given.
        path: PathBuf,
    },
    /// An error raised while opening the file.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The engine has no parser for the given media type.
    #[error("The {engine} engine is not able to parse {media_type}")]
    UnsupportedFormat {
        engine: &'static str,
        media_type: &'static str,
    },
    /// The file is not a valid JSON-LD document.
    #[error("Unable to parse the JSON-LD document")]
    Parsing(#[source] BackendError),
    /// The engine failed to report the size of the loaded dataset.
    #[error("Unable to count the loaded triples")]
    Count(#[source] QueryError),
    /// A dataset is loaded exactly once.
    #[error("A file has already been loaded into this dataset")]
    AlreadyLoaded,
}

/// An error raised while querying a [`JsonLdLoader`](crate::loader::JsonLdLoader).
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// No file has been loaded yet.
    #[error("No dataset loaded, load a file before querying")]
    NotLoaded,
    /// The query is not valid SPARQL.
    #[error("Invalid SPARQL query")]
    Syntax(#[source] BackendError),
    /// The engine failed while evaluating the query.
    #[error("Query evaluation failed")]
    Evaluation(#[source] BackendError),
    /// The engine failed while reading its storage.
    #[error("Unable to read the dataset")]
    Storage(#[source] BackendError),
    /// A count returned by the engine is not an integer.
    #[error("Expected an integer count, found '{0}'")]
    InvalidCount(String),
}
