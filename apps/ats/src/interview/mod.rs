//! Interview prep planner: JD topics, question lists and a one-week plan.
//!
//! Topic extraction is the keyword engine with
//! [`ExtractorConfig::interview_topics`](crate::keywords::ExtractorConfig::interview_topics).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::keywords::KeywordExtractor;

pub mod level;
pub mod plan;
pub mod questions;

pub use level::Level;
pub use plan::prep_plan;
pub use questions::{behavioral_questions, tech_questions, DEFAULT_TECH_TOPICS};

const BEHAVIORAL_SEPARATOR: &str = "--- Behavioral ---";

/// Up to 12 readable topics from a job description.
pub fn extract_topics(jd: &str) -> Vec<String> {
    KeywordExtractor::interview_topics().extract(jd)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrepRequest {
    pub job_title: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub company: String,
    /// Comma-separated, e.g. "AWS, Docker, Kubernetes".
    pub tech_stack: String,
    #[serde(default)]
    pub jd_text: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewPlan {
    pub topics: Vec<String>,
    pub tech_questions: Vec<String>,
    pub behavioral_questions: Vec<String>,
    pub plan: Vec<String>,
}

impl InterviewPlan {
    pub fn build(request: &PrepRequest) -> Self {
        let topics = extract_topics(&request.jd_text);
        let tech_questions = tech_questions(&request.tech_stack, &topics);
        let plan = prep_plan(request.level, &topics);

        debug!(
            "Interview plan for '{}': {} topics, {} technical questions",
            request.job_title,
            topics.len(),
            tech_questions.len()
        );

        Self {
            topics,
            tech_questions,
            behavioral_questions: behavioral_questions(),
            plan,
        }
    }

    /// Topics to study: the JD's own, or a generic list when it had none.
    pub fn study_topics(&self) -> Vec<String> {
        if self.topics.is_empty() {
            DEFAULT_TECH_TOPICS.iter().map(|t| t.to_string()).collect()
        } else {
            self.topics.clone()
        }
    }

    /// Technical questions, a blank line, a separator, behavioural questions.
    pub fn combined_questions(&self) -> Vec<String> {
        let mut out = self.tech_questions.clone();
        out.push(String::new());
        out.push(BEHAVIORAL_SEPARATOR.to_string());
        out.extend(self.behavioral_questions.iter().cloned());
        out
    }

    /// [`combined_questions`](Self::combined_questions) as clipboard text.
    pub fn questions_text(&self) -> String {
        self.combined_questions().join("\n")
    }
}
