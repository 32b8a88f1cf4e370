/// Prefixes used to display IRIs and to write queries.
///
/// The bindings have no influence on query evaluation, as every SPARQL query declares its own
/// prefixes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceBindings {
    bindings: Vec<(String, String)>,
}

impl NamespaceBindings {
    /// Creates an empty set of bindings.
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Binds `prefix` to `namespace`, replacing an earlier binding of the same prefix.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        match self.bindings.iter_mut().find(|(p, _)| *p == prefix) {
            Some(binding) => binding.1 = namespace,
            None => self.bindings.push((prefix, namespace)),
        }
    }

    /// Returns the namespace bound to `prefix`.
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, ns)| ns.as_str())
    }

    /// Iterates over `(prefix, namespace)` pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    /// Shortens `iri` to `prefix:local` using the longest matching namespace.
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.bindings
            .iter()
            .filter(|(_, ns)| iri.len() > ns.len() && iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| format!("{prefix}:{}", &iri[ns.len()..]))
    }

    /// Shortens `iri` for display.
    ///
    /// Falls back to the part after the last `/` or `#` if no namespace matches.
    pub fn display_name(&self, iri: &str) -> String {
        self.compact(iri)
            .unwrap_or_else(|| local_name(iri).to_owned())
    }

    /// Renders the bindings as SPARQL `PREFIX` declarations.
    pub fn sparql_prologue(&self) -> String {
        self.bindings
            .iter()
            .map(|(prefix, ns)| format!("PREFIX {prefix}: <{ns}>\n"))
            .collect()
    }
}

impl Default for NamespaceBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind("schema", "http://schema.org/");
        bindings.bind("ex", "http://example.org/kg/");
        bindings.bind("prov", "http://www.w3.org/ns/prov/");
        bindings.bind("skos", "http://www.w3.org/2004/02/skos/core#");
        bindings.bind("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        bindings
    }
}

fn local_name(iri: &str) -> &str {
    iri.rsplit(['/', '#'])
        .find(|part| !part.is_empty())
        .unwrap_or(iri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_compact_known_iris() {
        let bindings = NamespaceBindings::default();
        assert_eq!(
            bindings.compact("http://www.w3.org/ns/prov/Entity").as_deref(),
            Some("prov:Entity")
        );
        assert_eq!(
            bindings.compact("http://www.w3.org/1999/02/22-rdf-syntax-ns#type").as_deref(),
            Some("rdf:type")
        );
        assert_eq!(bindings.compact("http://example.com/Thing"), None);
    }

    #[test]
    fn longest_namespace_wins() {
        let mut bindings = NamespaceBindings::empty();
        bindings.bind("ex", "http://example.org/");
        bindings.bind("kg", "http://example.org/kg/");
        assert_eq!(
            bindings.compact("http://example.org/kg/content_chunk").as_deref(),
            Some("kg:content_chunk")
        );
    }

    #[test]
    fn display_name_falls_back_to_local_name() {
        let bindings = NamespaceBindings::empty();
        assert_eq!(bindings.display_name("http://example.com/vocab#Report"), "Report");
        assert_eq!(bindings.display_name("http://example.com/types/Report/"), "Report");
    }

    #[test]
    fn rebinding_replaces_the_namespace() {
        let mut bindings = NamespaceBindings::default();
        bindings.bind("ex", "http://example.com/");
        assert_eq!(bindings.namespace("ex"), Some("http://example.com/"));
        assert_eq!(bindings.iter().filter(|(p, _)| *p == "ex").count(), 1);
    }

    #[test]
    fn prologue_declares_every_prefix() {
        let prologue = NamespaceBindings::default().sparql_prologue();
        assert!(prologue.contains("PREFIX schema: <http://schema.org/>\n"));
        assert_eq!(prologue.lines().count(), 5);
    }
}
