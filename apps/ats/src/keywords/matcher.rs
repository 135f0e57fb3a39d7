//! Matcher / scorer — tests each candidate keyword against a target document
//! and produces a weighted 0–100 score.
//!
//! Algorithm, per candidate:
//! 1. whole-phrase match (`\b<escaped>\b`, case-insensitive) against the
//!    normalized target; found if the count reaches `min_occurrences`
//! 2. otherwise per-token fallback: found if every token appears as a whole
//!    word; occurrences = sum of the individual token counts
//! 3. a pattern that fails to compile marks only that candidate not found
//!
//! score = round(100 × Σ weight(found) / Σ weight(all)), where vocabulary
//! terms weigh 1.2 and everything else 1.0.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::keywords::normalize::normalize;
use crate::keywords::vocabulary::is_tech_keyword;

const TECH_WEIGHT: f64 = 1.2;
const BASE_WEIGHT: f64 = 1.0;

/// Compiled size cap for one keyword pattern. Real keywords are a few
/// tokens long; anything past this is reported as not found.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Outcome of testing one candidate keyword against the target document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub found: bool,
    pub occurrences: usize,
}

impl KeywordEntry {
    pub fn weight(&self) -> f64 {
        if is_tech_keyword(&self.keyword) {
            TECH_WEIGHT
        } else {
            BASE_WEIGHT
        }
    }
}

/// Full analysis of one document pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u32, // 0 – 100
    pub total: usize,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub breakdown: Vec<KeywordEntry>,
}

impl AnalysisResult {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }
}

/// Scores `candidates` against `target`. Never fails; a candidate whose
/// pattern cannot be built is simply reported as missing.
pub fn score(candidates: &[String], target: &str, min_occurrences: usize) -> AnalysisResult {
    let target_norm = normalize(target);
    let min_occurrences = min_occurrences.max(1);

    let breakdown: Vec<KeywordEntry> = candidates
        .iter()
        .map(|keyword| {
            let (found, occurrences) = match_keyword(keyword, &target_norm, min_occurrences);
            KeywordEntry {
                keyword: keyword.clone(),
                found,
                occurrences,
            }
        })
        .collect();

    let mut total_weight = 0.0_f64;
    let mut found_weight = 0.0_f64;
    for entry in &breakdown {
        let weight = entry.weight();
        total_weight += weight;
        if entry.found {
            found_weight += weight;
        }
    }

    let score = if total_weight > 0.0 {
        ((found_weight / total_weight) * 100.0).round().clamp(0.0, 100.0) as u32
    } else {
        0
    };

    let (matched, missing): (Vec<&KeywordEntry>, Vec<&KeywordEntry>) =
        breakdown.iter().partition(|e| e.found);
    let matched = matched.into_iter().map(|e| e.keyword.clone()).collect();
    let missing = missing.into_iter().map(|e| e.keyword.clone()).collect();

    AnalysisResult {
        score,
        total: candidates.len(),
        matched,
        missing,
        breakdown,
    }
}

fn match_keyword(keyword: &str, target_norm: &str, min_occurrences: usize) -> (bool, usize) {
    let kw_norm = normalize(keyword);
    if kw_norm.is_empty() {
        return (false, 0);
    }

    match try_match(&kw_norm, target_norm, min_occurrences) {
        Ok(result) => result,
        Err(e) => {
            debug!("Skipping keyword {keyword:?}: pattern error: {e}");
            (false, 0)
        }
    }
}

fn try_match(
    kw_norm: &str,
    target_norm: &str,
    min_occurrences: usize,
) -> Result<(bool, usize), regex::Error> {
    let phrase_count = whole_word_pattern(kw_norm)?
        .find_iter(target_norm)
        .count();
    if phrase_count > 0 && phrase_count >= min_occurrences {
        return Ok((true, phrase_count));
    }

    // Per-token fallback. Counts each token independently, so a phrase
    // present once contributes once per token.
    let mut occurrences = 0;
    for token in kw_norm.split(' ').filter(|t| !t.is_empty()) {
        let count = whole_word_pattern(token)?.find_iter(target_norm).count();
        if count == 0 {
            return Ok((false, 0));
        }
        occurrences += count;
    }
    Ok((true, occurrences))
}

fn whole_word_pattern(text: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(text)))
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::extractor::KeywordExtractor;

    fn kws(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_candidates_score_zero() {
        let result = score(&[], "anything at all", 1);
        assert_eq!(result.score, 0);
        assert_eq!(result.total, 0);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn test_scenario_aws_docker_kubernetes() {
        let jd = "Looking for AWS and Kubernetes engineer with Docker experience";
        let resume = "Worked extensively with AWS and Docker in production.";
        let candidates = KeywordExtractor::ats().extract(jd);
        let result = score(&candidates, resume, 1);

        assert!(result.matched.contains(&"aws".to_string()));
        assert!(result.matched.contains(&"docker".to_string()));
        assert!(result.missing.iter().any(|k| k.contains("kubernetes")));
        assert!(result.score > 0 && result.score < 100, "score {}", result.score);
        // 2 × 1.2 found of 3 × 1.2 + 5 × 1.0 total
        assert_eq!(result.score, 28);
    }

    #[test]
    fn test_identical_document_scores_hundred() {
        let doc = "Senior platform engineer building Kubernetes operators in Go and Python \
                   with Terraform modules and Grafana dashboards for the data team";
        let candidates = KeywordExtractor::ats().extract(doc);
        assert!(!candidates.is_empty());
        let result = score(&candidates, doc, 1);
        assert_eq!(result.score, 100);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_matched_and_missing_partition_breakdown() {
        let candidates = kws(&["rust", "tokio", "kafka streams", "aws", "c++"]);
        let result = score(&candidates, "Rust services on AWS using tokio", 1);
        assert_eq!(result.matched.len() + result.missing.len(), result.breakdown.len());
        for entry in &result.breakdown {
            let in_matched = result.matched.contains(&entry.keyword);
            let in_missing = result.missing.contains(&entry.keyword);
            assert!(in_matched ^ in_missing, "{} in both or neither", entry.keyword);
            assert_eq!(in_matched, entry.found);
        }
        assert_eq!(result.matched, kws(&["rust", "tokio", "aws"]));
        assert_eq!(result.missing, kws(&["kafka streams", "c++"]));
    }

    #[test]
    fn test_phrase_occurrences_counted() {
        let result = score(&kws(&["ci/cd"]), "Built CI/CD pipelines. Owned ci/cd tooling.", 1);
        assert!(result.breakdown[0].found);
        assert_eq!(result.breakdown[0].occurrences, 2);
    }

    #[test]
    fn test_min_occurrences_falls_back_to_tokens() {
        // phrase appears once; both tokens also appear elsewhere
        let resume = "Ran incident response drills. Incident reviews drove faster response times.";
        let result = score(&kws(&["incident response"]), resume, 2);
        let entry = &result.breakdown[0];
        assert!(entry.found);
        // incident ×2 + response ×2, counted independently
        assert_eq!(entry.occurrences, 4);
    }

    #[test]
    fn test_min_occurrences_token_fallback_requires_every_token() {
        let result = score(&kws(&["incident response"]), "Handled incident triage", 2);
        assert!(!result.breakdown[0].found);
        assert_eq!(result.breakdown[0].occurrences, 0);
    }

    #[test]
    fn test_token_fallback_finds_scattered_words() {
        let result = score(&kws(&["kubernetes engineer"]), "Engineer who knows kubernetes", 1);
        assert!(result.breakdown[0].found);
        assert_eq!(result.breakdown[0].occurrences, 2);
    }

    #[test]
    fn test_whole_word_only() {
        let result = score(&kws(&["java"]), "Strong JavaScript skills", 1);
        assert!(!result.breakdown[0].found);
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        let result = score(&kws(&["node.js"]), "Backend in nodexjs and Node.js", 1);
        assert!(result.breakdown[0].found);
        assert_eq!(result.breakdown[0].occurrences, 1);
    }

    #[test]
    fn test_punctuation_only_keyword_is_missing() {
        let result = score(&kws(&["!!!", "rust"]), "rust", 1);
        assert_eq!(result.breakdown[0], KeywordEntry {
            keyword: "!!!".to_string(),
            found: false,
            occurrences: 0,
        });
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_oversized_keyword_is_missing_without_affecting_others() {
        let huge = "x".repeat(200_000);
        assert!(whole_word_pattern(&huge).is_err());

        // the target does contain it, so only the pattern error can hide it
        let target = format!("{huge} rust");
        let result = score(&kws(&[huge.as_str(), "rust"]), &target, 1);
        assert!(!result.breakdown[0].found);
        assert_eq!(result.breakdown[0].occurrences, 0);
        assert!(result.breakdown[1].found);
        assert_eq!(result.matched, kws(&["rust"]));
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_tech_keywords_weigh_more() {
        // aws (1.2) found, leadership (1.0) missing → 1.2 / 2.2 = 54.5 → 55
        let result = score(&kws(&["aws", "leadership"]), "AWS", 1);
        assert_eq!(result.score, 55);
        // reversed: 1.0 / 2.2 = 45.45 → 45
        let result = score(&kws(&["aws", "leadership"]), "leadership", 1);
        assert_eq!(result.score, 45);
    }

    #[test]
    fn test_score_always_within_bounds() {
        let docs = ["", "aws", "random words here", "docker docker docker"];
        let candidates = kws(&["aws", "docker", "random words", "zzz"]);
        for doc in docs {
            let result = score(&candidates, doc, 1);
            assert!(result.score <= 100);
        }
    }

    #[test]
    fn test_analysis_result_serializes_wire_names() {
        let result = score(&kws(&["aws"]), "aws", 1);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["score"], 100);
        assert_eq!(value["breakdown"][0]["keyword"], "aws");
        assert_eq!(value["breakdown"][0]["occurrences"], 1);
        assert_eq!(result.matched_count(), 1);
    }
}
