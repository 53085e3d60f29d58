//! Owned wrapper around the `graphql-parser` schema AST.
//!
//! [`SchemaDocument`] holds a fully owned (`'static`) parse of one SDL
//! source. Parsing and canonical printing are delegated entirely to
//! [`graphql-parser`]; this module only adds the accessors and the
//! order-preserving [`append`](SchemaDocument::append) the merge pipeline
//! is built on.
//!
//! [`graphql-parser`]: https://docs.rs/graphql-parser

use std::collections::BTreeMap;
use std::fmt;

use graphql_parser::schema::{Document, TypeDefinition};

pub use graphql_parser::schema::ParseError;

/// A top-level SDL construct: a type, interface, schema block, type
/// extension, or directive definition.
pub type Definition = graphql_parser::schema::Definition<'static, String>;

/// A parsed SDL document: an ordered sequence of top-level definitions.
///
/// # Examples
///
/// ```
/// use sdl_merge_core::SchemaDocument;
///
/// let doc = SchemaDocument::parse("type Query { hello: String }").unwrap();
/// assert_eq!(doc.definition_count(), 1);
/// assert!(doc.to_sdl().contains("type Query"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    document: Document<'static, String>,
}

impl SchemaDocument {
    /// Parses SDL source text into a document.
    ///
    /// # Errors
    ///
    /// Returns the parser's [`ParseError`] if the text is not valid SDL. The
    /// error message carries the offending line and column. No partial parse
    /// is returned.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let document = graphql_parser::parse_schema::<String>(source)?.into_static();
        Ok(Self { document })
    }

    /// Returns the top-level definitions in source order.
    pub fn definitions(&self) -> &[Definition] {
        &self.document.definitions
    }

    /// Returns the number of top-level definitions.
    pub fn definition_count(&self) -> usize {
        self.document.definitions.len()
    }

    /// Returns `true` if the document has no definitions.
    pub fn is_empty(&self) -> bool {
        self.document.definitions.is_empty()
    }

    /// Moves `other`'s definitions onto the end of this document.
    ///
    /// Both sequences keep their internal order; nothing is deduplicated or
    /// rewritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdl_merge_core::SchemaDocument;
    ///
    /// let mut doc = SchemaDocument::parse("type A { x: Int }").unwrap();
    /// let other = SchemaDocument::parse("type B { y: Int }").unwrap();
    /// doc.append(other);
    /// assert_eq!(doc.definition_count(), 2);
    /// ```
    pub fn append(&mut self, other: SchemaDocument) {
        self.document.definitions.extend(other.document.definitions);
    }

    /// Serializes the document back to SDL text using the parser crate's
    /// canonical printer.
    pub fn to_sdl(&self) -> String {
        self.document.to_string()
    }
}

impl fmt::Display for SchemaDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.document, f)
    }
}

/// Returns a short label for a definition's kind.
///
/// # Examples
///
/// ```
/// use sdl_merge_core::{SchemaDocument, definition_kind};
///
/// let doc = SchemaDocument::parse("enum Color { RED GREEN }").unwrap();
/// assert_eq!(definition_kind(&doc.definitions()[0]), "enum");
/// ```
pub fn definition_kind(definition: &Definition) -> &'static str {
    match definition {
        Definition::SchemaDefinition(_) => "schema",
        Definition::TypeDefinition(TypeDefinition::Scalar(_)) => "scalar",
        Definition::TypeDefinition(TypeDefinition::Object(_)) => "type",
        Definition::TypeDefinition(TypeDefinition::Interface(_)) => "interface",
        Definition::TypeDefinition(TypeDefinition::Union(_)) => "union",
        Definition::TypeDefinition(TypeDefinition::Enum(_)) => "enum",
        Definition::TypeDefinition(TypeDefinition::InputObject(_)) => "input",
        Definition::TypeExtension(_) => "extend",
        Definition::DirectiveDefinition(_) => "directive",
    }
}

/// Counts definitions by kind label.
pub fn kind_counts(definitions: &[Definition]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for definition in definitions {
        *counts.entry(definition_kind(definition)).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counts_definitions() {
        let doc = SchemaDocument::parse(
            "type Query { hello: String }\nenum Color { RED GREEN BLUE }",
        )
        .unwrap();
        assert_eq!(doc.definition_count(), 2);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_sdl() {
        let result = SchemaDocument::parse("type {");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_error_carries_position() {
        let message = SchemaDocument::parse("type Query {\n  hello String\n}")
            .unwrap_err()
            .to_string();
        assert!(message.contains("2"), "expected a line number in: {message}");
    }

    #[test]
    fn test_append_preserves_both_orders() {
        let mut doc = SchemaDocument::parse("type A { x: Int }\ntype B { y: Int }").unwrap();
        let other = SchemaDocument::parse("type C { z: Int }").unwrap();
        doc.append(other);

        let kinds: Vec<_> = doc.definitions().iter().map(definition_kind).collect();
        assert_eq!(kinds, vec!["type", "type", "type"]);
        assert_eq!(doc.definition_count(), 3);

        let sdl = doc.to_sdl();
        let a = sdl.find("type A").unwrap();
        let b = sdl.find("type B").unwrap();
        let c = sdl.find("type C").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_serialize_reparse_round_trips() {
        let original = SchemaDocument::parse("type Query { hello: String }").unwrap();
        let printed = original.to_sdl();

        let reparsed = SchemaDocument::parse(&printed).unwrap();
        assert_eq!(reparsed.definition_count(), 1);
        assert_eq!(reparsed.to_sdl(), printed);
    }

    #[test]
    fn test_definition_kind_labels() {
        let doc = SchemaDocument::parse(
            "schema { query: Query }\n\
             scalar Date\n\
             type Query { hello: String }\n\
             interface Node { id: ID! }\n\
             union Pet = Query\n\
             enum Color { RED }\n\
             input Filter { name: String }\n\
             extend type Query { extra: Int }\n\
             directive @tag(name: String!) on FIELD_DEFINITION",
        )
        .unwrap();

        let kinds: Vec<_> = doc.definitions().iter().map(definition_kind).collect();
        assert_eq!(
            kinds,
            vec![
                "schema",
                "scalar",
                "type",
                "interface",
                "union",
                "enum",
                "input",
                "extend",
                "directive"
            ]
        );
    }

    #[test]
    fn test_kind_counts() {
        let doc =
            SchemaDocument::parse("type A { x: Int }\ntype B { y: Int }\nenum C { ONE }").unwrap();
        let counts = kind_counts(doc.definitions());
        assert_eq!(counts.get("type"), Some(&2));
        assert_eq!(counts.get("enum"), Some(&1));
        assert_eq!(counts.get("union"), None);
    }

    #[test]
    fn test_display_matches_to_sdl() {
        let doc = SchemaDocument::parse("type Query { hello: String }").unwrap();
        assert_eq!(doc.to_string(), doc.to_sdl());
    }
}
