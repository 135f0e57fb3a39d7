//! Fixed word lists used by the extractor configurations.

/// Curated technical terms. Always eligible as candidates and weighted
/// higher when scoring. Order matters: vocabulary hits are emitted in
/// this order.
pub const TECH_KEYWORDS: &[&str] = &[
    "aws",
    "azure",
    "gcp",
    "terraform",
    "ansible",
    "kubernetes",
    "k8s",
    "docker",
    "jenkins",
    "github actions",
    "gitlab ci",
    "git",
    "linux",
    "ubuntu",
    "python",
    "node.js",
    "nodejs",
    "bash",
    "ci/cd",
    "prometheus",
    "grafana",
    "argocd",
    "monitoring",
    "automation",
    "powershell",
    "iis",
    "cdn",
    "sql server",
    "postgres",
    "mysql",
    "database",
    "security",
    "devops",
    "iac",
    "cloudformation",
    "sre",
    "nginx",
    "react",
    "java",
    "spring",
    "typescript",
    "react native",
    "graphql",
    "rest api",
];

pub const ATS_STOP_WORDS: &[&str] = &[
    "the", "and", "or", "a", "an", "to", "for", "with", "in", "on", "of", "by", "is", "are", "be",
    "as", "that", "this", "will", "can", "should", "from", "we", "you", "your", "their", "at",
    "it",
];

/// The ATS list plus role-generic words that say nothing about a topic.
pub const INTERVIEW_STOP_WORDS: &[&str] = &[
    "the", "and", "or", "a", "an", "to", "for", "with", "in", "on", "of", "by", "is", "are", "be",
    "as", "that", "this", "will", "can", "should", "from", "we", "you", "your", "their", "at",
    "it", "role", "position", "engineer", "developer",
];

/// Case-insensitive membership in [`TECH_KEYWORDS`].
pub fn is_tech_keyword(keyword: &str) -> bool {
    let lower = keyword.to_lowercase();
    TECH_KEYWORDS.iter().any(|&t| t == lower)
}
