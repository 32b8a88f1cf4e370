//! The catalogue of predefined SPARQL queries.
//!
//! The queries target knowledge graphs that describe documents (`prov:Entity`) split into content
//! chunks, together with an analysis of each chunk (competency questions, information needs,
//! semantic concepts).

use clap::ValueEnum;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The names of the predefined queries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum NamedQuery {
    /// Counts the documents.
    CountDocuments,
    /// Content chunks with their text and an optional heading.
    GetChunksWithText,
    /// Chunks whose text mentions "newport".
    FindChunksByKeyword,
    /// Documents with their chunks ordered by position.
    DocumentHierarchy,
    /// Competency questions with a relevance of at least 0.8.
    ChunksWithHighRelevanceQuestions,
    /// Information needs attached to the chunk analyses.
    InformationNeedsAnalysis,
    /// Start and end offsets of each chunk.
    ChunkPositions,
    /// Semantic concepts attached to the chunks.
    SemanticConcepts,
}

impl NamedQuery {
    /// All queries, in catalogue order.
    pub const ALL: [NamedQuery; 8] = [
        NamedQuery::CountDocuments,
        NamedQuery::GetChunksWithText,
        NamedQuery::FindChunksByKeyword,
        NamedQuery::DocumentHierarchy,
        NamedQuery::ChunksWithHighRelevanceQuestions,
        NamedQuery::InformationNeedsAnalysis,
        NamedQuery::ChunkPositions,
        NamedQuery::SemanticConcepts,
    ];

    /// The name under which the query is listed.
    pub fn name(self) -> &'static str {
        match self {
            NamedQuery::CountDocuments => "count_documents",
            NamedQuery::GetChunksWithText => "get_chunks_with_text",
            NamedQuery::FindChunksByKeyword => "find_chunks_by_keyword",
            NamedQuery::DocumentHierarchy => "document_hierarchy",
            NamedQuery::ChunksWithHighRelevanceQuestions => {
                "chunks_with_high_relevance_questions"
            }
            NamedQuery::InformationNeedsAnalysis => "information_needs_analysis",
            NamedQuery::ChunkPositions => "chunk_positions",
            NamedQuery::SemanticConcepts => "semantic_concepts",
        }
    }

    /// The SPARQL text of the query.
    pub fn sparql(self) -> &'static str {
        match self {
            NamedQuery::CountDocuments => COUNT_DOCUMENTS,
            NamedQuery::GetChunksWithText => GET_CHUNKS_WITH_TEXT,
            NamedQuery::FindChunksByKeyword => FIND_CHUNKS_BY_KEYWORD,
            NamedQuery::DocumentHierarchy => DOCUMENT_HIERARCHY,
            NamedQuery::ChunksWithHighRelevanceQuestions => {
                CHUNKS_WITH_HIGH_RELEVANCE_QUESTIONS
            }
            NamedQuery::InformationNeedsAnalysis => INFORMATION_NEEDS_ANALYSIS,
            NamedQuery::ChunkPositions => CHUNK_POSITIONS,
            NamedQuery::SemanticConcepts => SEMANTIC_CONCEPTS,
        }
    }
}

impl Display for NamedQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raised when looking up a name that is not part of the catalogue.
#[derive(Debug, thiserror::Error)]
#[error("Unknown query '{0}'")]
pub struct UnknownQueryError(String);

impl FromStr for NamedQuery {
    type Err = UnknownQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedQuery::ALL
            .into_iter()
            .find(|query| query.name() == s)
            .ok_or_else(|| UnknownQueryError(s.to_owned()))
    }
}

const COUNT_DOCUMENTS: &str = "PREFIX schema: <http://schema.org/>
PREFIX prov: <http://www.w3.org/ns/prov/>

SELECT (COUNT(DISTINCT ?doc) as ?count)
WHERE {
    ?doc a prov:Entity .
}
";

const GET_CHUNKS_WITH_TEXT: &str = "PREFIX schema: <http://schema.org/>
PREFIX ex: <http://example.org/kg/>

SELECT ?chunk ?text ?heading
WHERE {
    ?chunk a ex:content_chunk .
    ?chunk schema:text ?text .
    OPTIONAL { ?chunk ex:heading ?heading }
}
LIMIT 10
";

const FIND_CHUNKS_BY_KEYWORD: &str = "PREFIX schema: <http://schema.org/>
PREFIX ex: <http://example.org/kg/>

SELECT ?chunk ?text ?description
WHERE {
    ?chunk schema:text ?text .
    OPTIONAL { ?chunk schema:description ?description }
    FILTER(CONTAINS(LCASE(?text), \"newport\"))
}
";

const DOCUMENT_HIERARCHY: &str = "PREFIX schema: <http://schema.org/>
PREFIX prov: <http://www.w3.org/ns/prov/>

SELECT ?doc ?docName ?chunk ?chunkPosition ?subchunk
WHERE {
    ?doc a prov:Entity .
    ?doc schema:name ?docName .
    ?doc schema:hasPart ?chunk .
    ?chunk schema:position ?chunkPosition .
    OPTIONAL { ?chunk schema:hasPart ?subchunk }
}
ORDER BY ?doc ?chunkPosition
LIMIT 20
";

const CHUNKS_WITH_HIGH_RELEVANCE_QUESTIONS: &str = "PREFIX schema: <http://schema.org/>
PREFIX ex: <http://example.org/kg/>

SELECT ?chunk ?text ?question ?relevance ?explanation
WHERE {
    ?chunk schema:text ?text .
    ?chunk ex:contentAnalysis ?analysis .
    ?analysis ex:competencyQuestions ?cq .
    ?cq schema:question ?question .
    ?cq ex:relevance ?relevance .
    ?cq schema:explanation ?explanation .
    FILTER(?relevance >= 0.8)
}
ORDER BY DESC(?relevance)
LIMIT 10
";

const INFORMATION_NEEDS_ANALYSIS: &str = "PREFIX ex: <http://example.org/kg/>
PREFIX schema: <http://schema.org/>

SELECT ?chunk ?text ?need
WHERE {
    ?chunk schema:text ?text .
    ?chunk ex:contentAnalysis ?analysis .
    ?analysis ex:informationNeeds ?need .
}
LIMIT 20
";

const CHUNK_POSITIONS: &str = "PREFIX schema: <http://schema.org/>

SELECT ?chunk ?text ?startOffset ?endOffset ?pageNumber
WHERE {
    ?chunk schema:text ?text .
    ?chunk schema:textPosition ?pos .
    ?pos schema:startOffset ?startOffset .
    ?pos schema:endOffset ?endOffset .
    OPTIONAL { ?pos schema:pageNumber ?pageNumber }
}
LIMIT 10
";

const SEMANTIC_CONCEPTS: &str = "PREFIX ex: <http://example.org/kg/>
PREFIX skos: <http://www.w3.org/2004/02/skos/core#>

SELECT ?chunk ?concept ?label
WHERE {
    ?chunk ex:semantic_concepts ?concept .
    OPTIONAL { ?concept skos:prefLabel ?label }
}
LIMIT 20
";
