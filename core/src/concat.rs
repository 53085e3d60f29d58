//! Order-preserving document concatenation.
//!
//! "Merging" in this workspace means concatenation: the first document is
//! the accumulator and every later document's definitions are appended in
//! order. Duplicate names are not detected and the combined result is not
//! validated.

use crate::SchemaDocument;

/// Concatenates documents into one, preserving order.
///
/// The first document becomes the accumulator; each subsequent document's
/// definitions are appended to it in sequence. Returns `None` for an empty
/// input.
///
/// The merged definition count always equals the sum of the inputs' counts.
///
/// # Examples
///
/// ```
/// use sdl_merge_core::{SchemaDocument, concat_documents};
///
/// let docs = vec![
///     SchemaDocument::parse("type A { x: Int }").unwrap(),
///     SchemaDocument::parse("type B { y: Int }\ntype C { z: Int }").unwrap(),
/// ];
///
/// let merged = concat_documents(docs).unwrap();
/// assert_eq!(merged.definition_count(), 3);
/// ```
pub fn concat_documents(documents: Vec<SchemaDocument>) -> Option<SchemaDocument> {
    let mut documents = documents.into_iter();
    let mut merged = documents.next()?;
    for document in documents {
        merged.append(document);
    }
    Some(merged)
}
