//! TF-IDF vector space built from a single request's documents

use crate::processing::text_processor::TextProcessor;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Sparse row: `(term index, weight)` pairs sorted by term index
pub type SparseRow = Vec<(usize, f64)>;

/// One L2-normalized row per document over a corpus-derived vocabulary
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusMatrix {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    rows: Vec<SparseRow>,
}

impl CorpusMatrix {
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn document_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&SparseRow> {
        self.rows.get(index)
    }

    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|i| self.idf[i])
    }

    /// Dot product of two rows; equals cosine similarity for normalized rows
    pub fn dot(&self, a: usize, b: usize) -> f64 {
        match (self.rows.get(a), self.rows.get(b)) {
            (Some(a), Some(b)) => sparse_dot(a, b),
            _ => 0.0,
        }
    }
}

/// Fits a fresh vocabulary on every call; nothing is retained between calls
pub struct TfIdfVectorizer<'a> {
    processor: &'a TextProcessor,
}

impl<'a> TfIdfVectorizer<'a> {
    pub fn new(processor: &'a TextProcessor) -> Self {
        Self { processor }
    }

    /// Build the matrix for already-normalized documents
    pub fn fit_transform(&self, documents: &[String]) -> CorpusMatrix {
        let term_counts: Vec<HashMap<&str, usize>> = documents
            .iter()
            .map(|doc| {
                let mut counts = HashMap::new();
                for term in self.processor.terms(doc) {
                    *counts.entry(term).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let terms: BTreeSet<&str> = term_counts
            .iter()
            .flat_map(|counts| counts.keys().copied())
            .collect();
        let vocabulary: BTreeMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for counts in &term_counts {
            for term in counts.keys() {
                if let Some(&i) = vocabulary.get(*term) {
                    document_frequency[i] += 1;
                }
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = term_counts
            .iter()
            .map(|counts| {
                let mut row: SparseRow = counts
                    .iter()
                    .filter_map(|(term, &tf)| {
                        vocabulary.get(*term).map(|&i| (i, tf as f64 * idf[i]))
                    })
                    .collect();
                row.sort_by_key(|&(i, _)| i);
                l2_normalize(&mut row);
                row
            })
            .collect();

        CorpusMatrix {
            vocabulary,
            idf,
            rows,
        }
    }
}

/// Zero rows are left as they are
fn l2_normalize(row: &mut SparseRow) {
    let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in row.iter_mut() {
            *w /= norm;
        }
    }
}

fn sparse_dot(a: &SparseRow, b: &SparseRow) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StopWordList;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_excludes_stop_words() {
        let processor = TextProcessor::default();
        let matrix = TfIdfVectorizer::new(&processor).fit_transform(&docs(&["the rust developer", "rust and tokio"]));

        assert_eq!(matrix.document_count(), 2);
        assert_eq!(matrix.vocabulary_size(), 3);
        assert!(matrix.term_index("the").is_none());
        assert!(matrix.term_index("developer").is_some());
    }

    #[test]
    fn test_smoothed_idf() {
        let processor = TextProcessor::new(&StopWordList::None);
        let matrix = TfIdfVectorizer::new(&processor).fit_transform(&docs(&["rust python", "rust", "java"]));

        // n = 3: rust appears in 2 documents, python in 1
        let rust = matrix.idf("rust").unwrap();
        let python = matrix.idf("python").unwrap();
        assert!((rust - ((4.0f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
        assert!((python - (2.0f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let processor = TextProcessor::default();
        let matrix = TfIdfVectorizer::new(&processor).fit_transform(&docs(&["rust rust python", "kubernetes"]));

        for index in 0..matrix.document_count() {
            let norm: f64 = matrix.row(index).unwrap().iter().map(|(_, w)| w * w).sum();
            assert!((norm - 1.0).abs() < 1e-9);
        }
        assert!((matrix.dot(0, 0) - 1.0).abs() < 1e-9);
        assert_eq!(matrix.dot(0, 1), 0.0);
    }

    #[test]
    fn test_empty_vocabulary() {
        let processor = TextProcessor::default();
        let matrix = TfIdfVectorizer::new(&processor).fit_transform(&docs(&["", "the and of"]));

        assert_eq!(matrix.vocabulary_size(), 0);
        assert!(matrix.row(0).unwrap().is_empty());
        assert_eq!(matrix.dot(0, 1), 0.0);
    }
}
