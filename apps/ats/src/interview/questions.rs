//! Interview question bank keyed by technology.

const TECH_QUESTION_BANK: &[(&str, &[&str])] = &[
    (
        "docker",
        &[
            "Explain the difference between a container and a virtual machine.",
            "How do you reduce Docker image size in a production environment?",
            "What are best practices for writing Dockerfiles for microservices?",
        ],
    ),
    (
        "kubernetes",
        &[
            "Explain the difference between Deployment, StatefulSet, and DaemonSet.",
            "How would you debug a Pod stuck in CrashLoopBackOff?",
            "What are liveness and readiness probes and why are they important?",
        ],
    ),
    (
        "aws",
        &[
            "Explain the difference between EC2, ECS, and EKS.",
            "How would you design a highly available web app in AWS?",
            "What is an IAM role and how is it different from a user?",
        ],
    ),
    (
        "azure",
        &[
            "What are Azure Resource Groups and why are they useful?",
            "Explain the difference between Azure App Service and Azure Functions.",
        ],
    ),
    (
        "gcp",
        &["What is the difference between GKE, Cloud Run, and App Engine?"],
    ),
    (
        "terraform",
        &[
            "What is the difference between a module and a resource in Terraform?",
            "How do you manage Terraform state and remote backends?",
            "How do you structure Terraform code for multiple environments?",
        ],
    ),
    (
        "jenkins",
        &[
            "How does a Jenkins pipeline work end-to-end?",
            "How do you secure Jenkins and sensitive credentials?",
        ],
    ),
    (
        "github actions",
        &[
            "Explain how GitHub Actions workflows, jobs, and steps work.",
            "How do you handle secrets in GitHub Actions?",
        ],
    ),
    (
        "monitoring",
        &[
            "How do you decide what to monitor in a production system?",
            "Explain the difference between logs, metrics, and traces.",
        ],
    ),
    (
        "sre",
        &[
            "What are SLIs, SLOs, and error budgets?",
            "How do you design incident management and on-call processes?",
        ],
    ),
];

const GENERIC_TECH_QUESTIONS: &[&str] = &[
    "Walk me through how you would design a CI/CD pipeline for this role.",
    "How do you ensure reliability and observability in a distributed system?",
    "How do you approach debugging flaky production issues?",
];

const BEHAVIORAL_QUESTIONS: &[&str] = &[
    "Tell me about yourself and why you're interested in this role.",
    "Describe a time you faced a major production issue. What did you do?",
    "Tell me about a time you disagreed with a teammate or manager. How did you handle it?",
    "Give an example of when you improved a process or automated something.",
    "Describe a time you had to learn a new tool or technology quickly.",
    "Tell me about a failure or mistake you made. What did you learn?",
    "How do you prioritize tasks when everything feels urgent?",
];

/// Suggested study areas when the JD gives nothing to go on.
pub const DEFAULT_TECH_TOPICS: &[&str] = &[
    "CI/CD pipelines",
    "Containers & orchestration",
    "Cloud fundamentals (IAM, VPC/networking, compute, storage)",
    "Monitoring, logging, and alerting",
    "Security basics (least privilege, secrets management)",
];

/// Picks technical questions for a comma-separated stack.
///
/// A stack entry selects a bank key when either contains the other, so
/// both "aws lambda" and "terra" find their bank entries. Falls back to
/// generic questions, then adds one question about the leading JD topic.
/// Output is de-duplicated in order.
pub fn tech_questions(stack: &str, topics: &[String]) -> Vec<String> {
    let stack_tokens: Vec<String> = stack
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut picked: Vec<String> = Vec::new();
    for token in &stack_tokens {
        for (key, questions) in TECH_QUESTION_BANK {
            if token.contains(key) || key.contains(token.as_str()) {
                picked.extend(questions.iter().map(|q| q.to_string()));
            }
        }
    }

    if picked.is_empty() {
        picked.extend(GENERIC_TECH_QUESTIONS.iter().map(|q| q.to_string()));
    }

    if let Some(first) = topics.first() {
        picked.push(format!(
            "Looking at this job description, which mentions \"{first}\", how have you worked with this in the past?"
        ));
    }

    let mut seen = std::collections::HashSet::new();
    picked.retain(|q| seen.insert(q.clone()));
    picked
}

pub fn behavioral_questions() -> Vec<String> {
    BEHAVIORAL_QUESTIONS.iter().map(|q| q.to_string()).collect()
}
