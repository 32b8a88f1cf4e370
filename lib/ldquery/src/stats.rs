use crate::error::QueryError;
use crate::results::QueryResultSet;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Groups the typed subjects by `rdf:type`, most frequent type first.
pub const TYPE_BREAKDOWN_QUERY: &str = "PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
SELECT ?type (COUNT(?s) as ?count)
WHERE { ?s rdf:type ?type }
GROUP BY ?type
ORDER BY DESC(?count)
";

/// The number of distinct terms in each position of the loaded triples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TermCounts {
    pub subjects: usize,
    pub predicates: usize,
    pub objects: usize,
}

/// Counts distinct subjects, predicates and objects over a stream of triples.
pub(crate) struct TermCounter<S, P, O> {
    subjects: FxHashSet<S>,
    predicates: FxHashSet<P>,
    objects: FxHashSet<O>,
}

impl<S: Hash + Eq, P: Hash + Eq, O: Hash + Eq> TermCounter<S, P, O> {
    pub(crate) fn new() -> Self {
        Self {
            subjects: FxHashSet::default(),
            predicates: FxHashSet::default(),
            objects: FxHashSet::default(),
        }
    }

    pub(crate) fn add(&mut self, subject: S, predicate: P, object: O) {
        self.subjects.insert(subject);
        self.predicates.insert(predicate);
        self.objects.insert(object);
    }

    pub(crate) fn finish(self) -> TermCounts {
        TermCounts {
            subjects: self.subjects.len(),
            predicates: self.predicates.len(),
            objects: self.objects.len(),
        }
    }
}

/// The number of subjects having a given `rdf:type`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeCount {
    /// The IRI (or blank node identifier) of the type.
    pub type_iri: String,
    pub count: u64,
}

/// A summary of the loaded dataset.
///
/// Both engines report every field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetStats {
    pub total_triples: usize,
    pub distinct: TermCounts,
    /// Sorted by descending count.
    pub types: Vec<TypeCount>,
}

impl DatasetStats {
    pub(crate) fn new(
        total_triples: usize,
        distinct: TermCounts,
        type_breakdown: &QueryResultSet,
    ) -> Result<Self, QueryError> {
        let types = type_breakdown
            .iter()
            .filter_map(|row| Some((row.get("type")?, row.get("count")?)))
            .map(|(type_iri, count)| {
                Ok(TypeCount {
                    type_iri: type_iri.to_owned(),
                    count: count
                        .parse()
                        .map_err(|_| QueryError::InvalidCount(count.to_owned()))?,
                })
            })
            .collect::<Result<Vec<_>, QueryError>>()?;
        Ok(Self {
            total_triples,
            distinct,
            types,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::QueryRow;

    fn breakdown(rows: &[(&str, &str)]) -> QueryResultSet {
        QueryResultSet::new(
            vec!["type".to_owned(), "count".to_owned()],
            rows.iter()
                .map(|(type_iri, count)| {
                    let mut row = QueryRow::new();
                    row.push("type", *type_iri);
                    row.push("count", *count);
                    row
                })
                .collect(),
        )
    }

    #[test]
    fn counter_ignores_duplicates() {
        let mut counter = TermCounter::new();
        counter.add("s1", "p1", "o1");
        counter.add("s1", "p2", "o1");
        counter.add("s2", "p1", "o2");
        assert_eq!(
            counter.finish(),
            TermCounts {
                subjects: 2,
                predicates: 2,
                objects: 2
            }
        );
    }

    #[test]
    fn type_breakdown_is_parsed() -> Result<(), QueryError> {
        let stats = DatasetStats::new(
            10,
            TermCounts::default(),
            &breakdown(&[
                ("http://www.w3.org/ns/prov/Entity", "3"),
                ("http://example.org/kg/content_chunk", "1"),
            ]),
        )?;
        assert_eq!(stats.types.len(), 2);
        assert_eq!(stats.types[0].type_iri, "http://www.w3.org/ns/prov/Entity");
        assert_eq!(stats.types[0].count, 3);
        Ok(())
    }

    #[test]
    fn non_numeric_count_is_an_error() {
        let result = DatasetStats::new(
            1,
            TermCounts::default(),
            &breakdown(&[("http://example.com/T", "many")]),
        );
        assert!(matches!(result, Err(QueryError::InvalidCount(count)) if count == "many"));
    }
}
