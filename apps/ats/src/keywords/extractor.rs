//! Candidate keyword extraction: vocabulary hits plus frequency-ranked n-grams.
//!
//! One engine, several configurations. The ATS checker uses
//! [`ExtractorConfig::ats`]; the interview planner uses
//! [`ExtractorConfig::interview_topics`].

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::keywords::normalize::{normalize, tokens};
use crate::keywords::vocabulary::{ATS_STOP_WORDS, INTERVIEW_STOP_WORDS, TECH_KEYWORDS};

/// Tunables for one extractor instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    /// Longest n-gram emitted (1..=3).
    pub max_ngram: usize,
    pub stop_words: &'static [&'static str],
    /// A unigram must be strictly longer than this to be counted.
    pub min_unigram_len: usize,
    /// How many frequency-ranked n-grams survive.
    pub max_ranked: usize,
    /// Ranked candidates longer than this are dropped after the cap.
    pub max_keyword_chars: Option<usize>,
    /// Terms added whenever they occur as a substring of the normalized text.
    pub vocabulary: &'static [&'static str],
}

impl ExtractorConfig {
    /// Uni/bi/trigrams, top 40, plus the technical vocabulary.
    pub fn ats() -> Self {
        Self {
            max_ngram: 3,
            stop_words: ATS_STOP_WORDS,
            min_unigram_len: 2,
            max_ranked: 40,
            max_keyword_chars: None,
            vocabulary: TECH_KEYWORDS,
        }
    }

    /// Uni/bigrams, top 12, no vocabulary, readable length only.
    pub fn interview_topics() -> Self {
        Self {
            max_ngram: 2,
            stop_words: INTERVIEW_STOP_WORDS,
            min_unigram_len: 3,
            max_ranked: 12,
            max_keyword_chars: Some(40),
            vocabulary: &[],
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::ats()
    }
}

/// Extracts candidate keywords from a document according to its config.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    config: ExtractorConfig,
    stop_words: HashSet<&'static str>,
}

impl KeywordExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        let stop_words = config.stop_words.iter().copied().collect();
        Self { config, stop_words }
    }

    pub fn ats() -> Self {
        Self::new(ExtractorConfig::ats())
    }

    pub fn interview_topics() -> Self {
        Self::new(ExtractorConfig::interview_topics())
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Returns vocabulary hits first (vocabulary order), then the top ranked
    /// n-grams by descending frequency. No duplicates.
    pub fn extract(&self, document: &str) -> Vec<String> {
        let norm = normalize(document);
        if norm.is_empty() {
            return Vec::new();
        }

        let found_tech = self.vocabulary_hits(&norm);
        let ranked = self.ranked_ngrams(&norm);

        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::with_capacity(found_tech.len() + ranked.len());
        for keyword in found_tech
            .iter()
            .copied()
            .chain(ranked.iter().map(|(k, _)| k.as_str()))
        {
            if seen.insert(keyword) {
                out.push(keyword.to_string());
            }
        }

        debug!(
            "Extracted {} candidates ({} vocabulary, {} ranked)",
            out.len(),
            found_tech.len(),
            ranked.len()
        );
        out
    }

    /// Counts n-grams of normalized text and returns the top `max_ranked`
    /// with their frequencies. Ties keep first-seen order.
    pub fn ranked_ngrams(&self, normalized: &str) -> Vec<(String, usize)> {
        let toks = tokens(normalized);
        let mut counts = NgramCounts::default();

        for i in 0..toks.len() {
            let t1 = toks[i];
            if !self.is_stop_word(t1) && t1.len() > self.config.min_unigram_len {
                counts.bump(t1.to_string());
            }

            for n in 2..=self.config.max_ngram {
                if i + n > toks.len() {
                    break;
                }
                let window = &toks[i..i + n];
                if window.iter().any(|w| self.is_stop_word(w)) {
                    continue;
                }
                counts.bump(window.join(" "));
            }
        }

        let mut ranked = counts.into_sorted();
        ranked.truncate(self.config.max_ranked);
        if let Some(max_chars) = self.config.max_keyword_chars {
            ranked.retain(|(k, _)| k.len() <= max_chars);
        }
        ranked
    }

    fn vocabulary_hits<'a>(&'a self, normalized: &str) -> Vec<&'a str> {
        self.config
            .vocabulary
            .iter()
            .copied()
            .filter(|term| normalized.contains(term))
            .collect()
    }

    fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }
}

/// Frequency table that remembers insertion order.
#[derive(Default)]
struct NgramCounts {
    order: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl NgramCounts {
    fn bump(&mut self, ngram: String) {
        match self.index.get(&ngram) {
            Some(&slot) => self.order[slot].1 += 1,
            None => {
                self.index.insert(ngram.clone(), self.order.len());
                self.order.push((ngram, 1));
            }
        }
    }

    fn into_sorted(self) -> Vec<(String, usize)> {
        let mut order = self.order;
        // stable sort: equal counts stay in first-seen order
        order.sort_by(|a, b| b.1.cmp(&a.1));
        order
    }
}
