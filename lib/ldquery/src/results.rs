use oxrdf::{Term, Triple, Variable};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::slice;

/// The variable holding the answer of an `ASK` query.
pub const BOOLEAN_VARIABLE: &str = "boolean";
/// The variables describing the triples returned by `CONSTRUCT` and `DESCRIBE` queries.
pub const TRIPLE_VARIABLES: [&str; 3] = ["subject", "predicate", "object"];

/// A single row of a query result.
///
/// Maps the name of each bound variable to the lexical form of its value, in the order of the
/// query projection. Unbound variables are not part of the row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryRow {
    bindings: Vec<(String, String)>,
}

impl QueryRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a row from the bindings of a SPARQL solution.
    pub fn from_solution<'a>(
        bindings: impl IntoIterator<Item = (&'a Variable, &'a Term)>,
    ) -> Self {
        bindings
            .into_iter()
            .map(|(variable, value)| (variable.as_str().to_owned(), term_to_string(value)))
            .collect()
    }

    /// Creates a row from a triple returned by a graph query.
    pub fn from_triple(triple: &Triple) -> Self {
        let [subject, predicate, object] = TRIPLE_VARIABLES;
        let mut row = Self::new();
        row.push(subject, term_to_string(&Term::from(triple.subject.clone())));
        row.push(predicate, triple.predicate.as_str());
        row.push(object, term_to_string(&triple.object));
        row
    }

    /// Creates the single row answering an `ASK` query.
    pub fn from_boolean(value: bool) -> Self {
        let mut row = Self::new();
        row.push(BOOLEAN_VARIABLE, value.to_string());
        row
    }

    /// Appends a binding to the end of the row.
    pub fn push(&mut self, variable: impl Into<String>, value: impl Into<String>) {
        self.bindings.push((variable.into(), value.into()));
    }

    /// Returns the value bound to `variable`, if any.
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(name, _)| name == variable)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bindings in projection order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for QueryRow {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl Serialize for QueryRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.bindings.len()))?;
        for (name, value) in &self.bindings {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The rows returned by a query, together with the projected variables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryResultSet {
    variables: Vec<String>,
    rows: Vec<QueryRow>,
}

impl QueryResultSet {
    pub fn new(variables: Vec<String>, rows: Vec<QueryRow>) -> Self {
        Self { variables, rows }
    }

    /// Creates the result of an `ASK` query.
    pub fn from_boolean(value: bool) -> Self {
        Self::new(
            vec![BOOLEAN_VARIABLE.to_owned()],
            vec![QueryRow::from_boolean(value)],
        )
    }

    /// Creates the result of a `CONSTRUCT` or `DESCRIBE` query.
    pub fn from_triples(triples: &[Triple]) -> Self {
        Self::new(
            TRIPLE_VARIABLES.iter().map(|v| (*v).to_owned()).collect(),
            triples.iter().map(QueryRow::from_triple).collect(),
        )
    }

    /// The projected variables, in projection order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn rows(&self) -> &[QueryRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<QueryRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, QueryRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a QueryResultSet {
    type Item = &'a QueryRow;
    type IntoIter = slice::Iter<'a, QueryRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for QueryResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

/// Renders a term as a plain string.
///
/// IRIs and blank nodes are rendered without delimiters and literals as their lexical form.
/// Datatypes and language tags are dropped.
pub fn term_to_string(term: &Term) -> String {
    match term {
        Term::NamedNode(node) => node.as_str().to_owned(),
        Term::BlankNode(node) => node.as_str().to_owned(),
        Term::Literal(literal) => literal.value().to_owned(),
        #[allow(
            unreachable_patterns,
            reason = "Triple terms only exist when RDF 1.2 support is enabled"
        )]
        other => other.to_string(),
    }
}
