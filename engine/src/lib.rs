//! In-memory keyword search engine.
//!
//! Documents are tokenized upstream into raw whitespace-delimited tokens;
//! the engine normalizes them into keywords, counts occurrences per
//! document, and keeps a global index from keyword to its occurrence list
//! in descending frequency order. Queries are two-keyword unions bounded to
//! the top five documents.

pub mod index;
pub mod normalize;
pub mod query;
pub mod source;

use anyhow::{bail, Result};
use std::collections::HashSet;
use std::path::Path;

pub use index::{KeywordIndex, Occurrence};
pub use normalize::Normalizer;
pub use query::TOP_K;

/// The engine: a normalizer plus the global keyword index. Documents are
/// indexed one at a time; the per-keyword sort order is restored after each
/// merge, never deferred.
pub struct SearchEngine {
    normalizer: Normalizer,
    index: KeywordIndex,
    documents: HashSet<String>,
}

impl SearchEngine {
    /// Creates an empty engine with the given noise words.
    pub fn new<I, S>(noise_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            normalizer: Normalizer::new(noise_words),
            index: KeywordIndex::new(),
            documents: HashSet::new(),
        }
    }

    /// Indexes one document from its raw token stream and merges it into the
    /// global index. Each document may be merged exactly once; a repeated
    /// document name is an error, since re-merging would duplicate its
    /// entries in the occurrence lists.
    pub fn add_document<I, S>(&mut self, document: &str, tokens: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !self.documents.insert(document.to_string()) {
            bail!("document {document:?} is already indexed");
        }
        let counts = index::index_document(&self.normalizer, document, tokens);
        let keywords = counts.len();
        index::merge(&mut self.index, counts);
        tracing::debug!(document, keywords, "merged document into index");
        Ok(keywords)
    }

    /// Builds the index from an ordered document list, pulling each
    /// document's raw tokens from `token_source`. Documents are processed
    /// strictly in order, one merge at a time. A failing token source stops
    /// the build and surfaces the error.
    pub fn build<D, F, T, S>(&mut self, documents: D, mut token_source: F) -> Result<()>
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        F: FnMut(&str) -> Result<T>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for document in documents {
            let document = document.as_ref();
            let tokens = token_source(document)?;
            self.add_document(document, tokens)?;
        }
        tracing::info!(
            documents = self.documents.len(),
            keywords = self.index.len(),
            "index build complete"
        );
        Ok(())
    }

    /// Builds the engine from the two standard input files: a document list
    /// (one document path per line) and a noise-word list (one word per
    /// line). Each listed path is read as a document.
    pub fn build_from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        docs_path: P,
        noise_path: Q,
    ) -> Result<Self> {
        let noise_words = source::read_lines(noise_path)?;
        let documents = source::read_lines(docs_path)?;
        let mut engine = Self::new(noise_words);
        engine.build(&documents, |document| source::document_tokens(document))?;
        Ok(engine)
    }

    /// Answers "kw1 or kw2" with up to five documents, ranked by descending
    /// frequency with ties favoring `kw1`. `None` means neither keyword is
    /// in the index.
    pub fn query(&self, kw1: &str, kw2: &str) -> Option<Vec<String>> {
        query::top_k(&self.index, kw1, kw2, TOP_K)
    }

    /// Runs a raw word through the engine's normalizer.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        self.normalizer.normalize(raw)
    }

    /// The occurrence list for one keyword, highest frequency first.
    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.index.get(keyword).map(Vec::as_slice)
    }

    /// Read-only view of the whole index.
    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn keyword_count(&self) -> usize {
        self.index.len()
    }
}
