//! Top-K document ranking against a query.
//!
//! # Responsibility
//! - Shape caller documents into scored, ordered results.
//! - Keep ranking pure: no hidden state, no caching, recompute per call.
//!
//! # Invariants
//! - Results are ordered by descending similarity; equal scores preserve the
//!   caller's document order.
//! - At most `min(top_k, documents.len())` results are returned.

use crate::search::embedding::{cosine_similarity, embed};

/// Default number of results when the caller has no preference.
pub const DEFAULT_TOP_K: usize = 5;

/// One candidate for ranking: opaque text plus optional caller metadata.
///
/// The index never inspects `metadata`; it is carried through to the result
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<M = ()> {
    pub text: String,
    pub metadata: Option<M>,
}

impl<M> Document<M> {
    /// Creates a document without metadata.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: None,
        }
    }

    /// Creates a document carrying caller metadata.
    pub fn with_metadata(text: impl Into<String>, metadata: M) -> Self {
        Self {
            text: text.into(),
            metadata: Some(metadata),
        }
    }
}

/// A document annotated with its similarity to the query, in `[-1, 1]`.
///
/// The embedding only produces non-negative components, so scores are
/// `[0, 1]` in practice.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDocument<M = ()> {
    pub document: Document<M>,
    pub similarity: f64,
}

/// Ranks `documents` against `query`, returning the best `top_k`.
///
/// The query is embedded once; every document is embedded per call (O(n·L),
/// acceptable for the small corpora this index serves). The sort is stable,
/// so tied scores keep input order. Blank queries or documents score 0.
pub fn rank_documents<M>(
    query: &str,
    documents: Vec<Document<M>>,
    top_k: usize,
) -> Vec<RankedDocument<M>> {
    let query_embedding = embed(query);

    let mut ranked: Vec<RankedDocument<M>> = documents
        .into_iter()
        .map(|document| {
            let document_embedding = embed(&document.text);
            // Both vectors come from `embed`, so the dimensions always agree.
            let similarity =
                cosine_similarity(&query_embedding, &document_embedding).unwrap_or(0.0);
            RankedDocument {
                document,
                similarity,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    ranked.truncate(top_k);
    ranked
}
