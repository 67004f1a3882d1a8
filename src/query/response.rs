//! Typed model of the SPARQL 1.1 Query Results JSON Format.

use serde::Deserialize;
use std::collections::HashMap;

/// A decoded SELECT response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SparqlResults {
    #[serde(default)]
    pub head: Head,
    pub results: ResultSet,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Head {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultSet {
    pub bindings: Vec<Binding>,
}

/// One solution row: variable name to bound term.
///
/// Variables left unbound by the query pattern are simply absent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Binding(HashMap<String, RdfTerm>);

impl Binding {
    pub fn get(&self, variable: &str) -> Option<&RdfTerm> {
        self.0.get(variable)
    }

    /// The lexical value bound to `variable`, if any.
    pub fn value(&self, variable: &str) -> Option<&str> {
        self.get(variable).map(|term| term.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, RdfTerm)> for Binding {
    fn from_iter<T: IntoIterator<Item = (String, RdfTerm)>>(iter: T) -> Self {
        Binding(iter.into_iter().collect())
    }
}

/// The value descriptor of a bound variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RdfTerm {
    #[serde(rename = "type", default)]
    pub kind: Option<TermKind>,
    pub value: String,
    #[serde(default)]
    pub datatype: Option<String>,
    #[serde(rename = "xml:lang", default)]
    pub language: Option<String>,
}

impl RdfTerm {
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            kind: Some(TermKind::Literal),
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    pub fn uri(value: impl Into<String>) -> Self {
        Self {
            kind: Some(TermKind::Uri),
            value: value.into(),
            datatype: None,
            language: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermKind {
    Uri,
    Literal,
    // SPARQL 1.0 endpoints still emit this for datatyped literals.
    TypedLiteral,
    Bnode,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINDAS_SAMPLE: &str = r#"{
      "head": {
        "vars": ["station", "value", "date"],
        "link": ["https://ld.admin.ch/query-info"]
      },
      "results": {
        "bindings": [
          {
            "station": { "type": "uri", "value": "https://ld.admin.ch/station/2135" },
            "value": { "type": "literal", "value": "Pegel Bern", "xml:lang": "de" },
            "date": {
              "type": "literal",
              "value": "2024-01-01",
              "datatype": "http://www.w3.org/2001/XMLSchema#date"
            }
          },
          {
            "station": { "type": "bnode", "value": "b0" },
            "value": { "type": "typed-literal", "value": "3.4",
                       "datatype": "http://www.w3.org/2001/XMLSchema#decimal" },
            "date": { "type": "literal", "value": "2024-01-02" }
          }
        ]
      }
    }"#;

    #[test]
    fn test_decode_sample_document() -> Result<(), serde_json::Error> {
        let results: SparqlResults = serde_json::from_str(LINDAS_SAMPLE)?;
        assert_eq!(results.head.vars, vec!["station", "value", "date"]);
        assert_eq!(results.results.bindings.len(), 2);

        let first = &results.results.bindings[0];
        let station = first.get("station").unwrap();
        assert_eq!(station.kind, Some(TermKind::Uri));
        assert_eq!(station.value, "https://ld.admin.ch/station/2135");
        assert_eq!(first.get("value").unwrap().language.as_deref(), Some("de"));
        assert_eq!(
            first.get("date").unwrap().datatype.as_deref(),
            Some("http://www.w3.org/2001/XMLSchema#date")
        );

        let second = &results.results.bindings[1];
        assert_eq!(second.get("station").unwrap().kind, Some(TermKind::Bnode));
        assert_eq!(
            second.get("value").unwrap().kind,
            Some(TermKind::TypedLiteral)
        );
        assert_eq!(second.value("value"), Some("3.4"));
        Ok(())
    }

    #[test]
    fn test_descriptor_needs_only_value() -> Result<(), serde_json::Error> {
        let doc = r#"{ "results": { "bindings": [ { "station": { "value": "A" } } ] } }"#;
        let results: SparqlResults = serde_json::from_str(doc)?;
        assert!(results.head.vars.is_empty());
        let term = results.results.bindings[0].get("station").unwrap();
        assert_eq!(term.kind, None);
        assert_eq!(term.value, "A");
        Ok(())
    }

    #[test]
    fn test_unbound_variable_is_absent() -> Result<(), serde_json::Error> {
        let doc = r#"{ "results": { "bindings": [ { "station": { "type": "literal", "value": "A" } } ] } }"#;
        let results: SparqlResults = serde_json::from_str(doc)?;
        let binding = &results.results.bindings[0];
        assert_eq!(binding.len(), 1);
        assert!(binding.get("date").is_none());
        assert_eq!(binding.value("date"), None);
        Ok(())
    }

    #[test]
    fn test_missing_results_is_rejected() {
        let doc = r#"{ "head": { "vars": [] }, "boolean": true }"#;
        assert!(serde_json::from_str::<SparqlResults>(doc).is_err());
    }

    #[test]
    fn test_descriptor_without_value_is_rejected() {
        let doc = r#"{ "results": { "bindings": [ { "station": { "type": "uri" } } ] } }"#;
        assert!(serde_json::from_str::<SparqlResults>(doc).is_err());
    }
}
