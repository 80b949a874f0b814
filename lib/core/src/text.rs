//! TF-IDF text index over scheme descriptions
//!
//! The index is built once from the whole catalog and then frozen: the
//! vocabulary and inverse document frequencies never change afterwards.
//! Adding schemes to a live catalog is unsupported; build a new index.

use crate::scheme::SchemeRecord;
use crate::vector::Vector;
use ahash::AHashMap;

/// Fixed English stop-word list, dropped from both documents and queries
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together",
    "too", "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up",
    "upon", "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your", "yours",
    "yourself", "yourselves",
];

#[inline]
fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// Tokenize text for indexing and querying.
/// Lowercases, splits on anything that is not alphanumeric, drops
/// single-character tokens and stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.chars().count() > 1 && !is_stop_word(s))
        .map(str::to_string)
        .collect()
}

/// Frozen vocabulary plus inverse document frequencies
#[derive(Debug, Clone, Default)]
pub struct TextIndex {
    // term -> column in every vector
    vocabulary: AHashMap<String, usize>,
    // column -> idf
    idf: Vec<f32>,
    document_count: usize,
}

impl TextIndex {
    /// Build the index from every scheme's descriptive text.
    ///
    /// Returns the index and one L2-normalized weight vector per scheme,
    /// in catalog order.
    pub fn build(schemes: &[SchemeRecord]) -> (Self, Vec<Vector>) {
        let documents: Vec<Vec<String>> = schemes
            .iter()
            .map(|s| tokenize(&s.descriptive_text()))
            .collect();

        // term -> document frequency
        let mut term_dfs: AHashMap<&str, u32> = AHashMap::new();
        for tokens in &documents {
            let mut seen: Vec<&str> = tokens.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *term_dfs.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<&str> = term_dfs.keys().copied().collect();
        terms.sort_unstable();

        let n = documents.len() as f32;
        let idf: Vec<f32> = terms
            .iter()
            .map(|term| {
                let df = term_dfs[term] as f32;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vocabulary: AHashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(column, term)| ((*term).to_string(), column))
            .collect();

        let index = Self {
            vocabulary,
            idf,
            document_count: documents.len(),
        };

        let vectors = documents
            .iter()
            .map(|tokens| index.weigh(tokens.iter().map(String::as_str)))
            .collect();

        (index, vectors)
    }

    /// Project arbitrary text into the frozen vector space.
    /// Terms outside the vocabulary are ignored.
    pub fn transform(&self, text: &str) -> Vector {
        let tokens = tokenize(text);
        self.weigh(tokens.iter().map(String::as_str))
    }

    fn weigh<'t>(&self, tokens: impl Iterator<Item = &'t str>) -> Vector {
        let mut vector = Vector::zeros(self.idf.len());
        let data = vector.as_mut_slice();
        for token in tokens {
            if let Some(&column) = self.vocabulary.get(token) {
                data[column] += 1.0;
            }
        }
        for (weight, idf) in data.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }
        vector.normalize();
        vector
    }

    #[inline]
    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.get(term).map(|&column| self.idf[column])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::Criteria;

    fn catalog() -> Vec<SchemeRecord> {
        vec![
            SchemeRecord::new(1u64, "Farmer Aid")
                .with_type("Agriculture")
                .with_criteria(Criteria::default().with_categories(["farmer"])),
            SchemeRecord::new(2u64, "Student Scholarship")
                .with_type("Education")
                .with_eligibility(["Enrolled student"]),
            SchemeRecord::new(3u64, "Pension Support").with_type("Agriculture"),
        ]
    }

    #[test]
    fn test_stop_words_sorted() {
        assert!(STOP_WORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("The Farmer, needs help with a TRACTOR!");
        assert_eq!(tokens, vec!["farmer", "needs", "help", "tractor"]);
    }

    #[test]
    fn test_build_vectors_are_normalized() {
        let (index, vectors) = TextIndex::build(&catalog());
        assert_eq!(index.document_count(), 3);
        assert_eq!(vectors.len(), 3);
        for v in &vectors {
            assert_eq!(v.dim(), index.vocabulary_len());
            assert!((v.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_common_terms_downweighted() {
        let (index, _) = TextIndex::build(&catalog());
        // "agriculture" appears in two documents, "scholarship" in one
        let common = index.idf("agriculture").unwrap();
        let rare = index.idf("scholarship").unwrap();
        assert!(rare > common);
    }

    #[test]
    fn test_transform_ignores_unknown_terms() {
        let (index, vectors) = TextIndex::build(&catalog());
        let query = index.transform("scholarship quantum");
        assert!(!query.is_zero());
        assert!(query.cosine_similarity(&vectors[1]) > 0.0);
        assert_eq!(query.cosine_similarity(&vectors[0]), 0.0);

        assert!(index.transform("zzz qqq").is_zero());
    }

    #[test]
    fn test_empty_catalog() {
        let (index, vectors) = TextIndex::build(&[]);
        assert_eq!(index.vocabulary_len(), 0);
        assert!(vectors.is_empty());
        let query = index.transform("farmer needs help");
        assert!(query.is_empty());
        assert!(query.is_zero());
    }
}
