use serde::{Deserialize, Serialize};

/// Candidate experience level. Drives the focus areas of the prep plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Junior,
    #[default]
    Mid,
    Senior,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Junior => "junior",
            Level::Mid => "mid",
            Level::Senior => "senior",
        }
    }

    pub fn focus_areas(&self) -> &'static [&'static str] {
        match self {
            Level::Junior => &[
                "Fundamentals of OS, networking, and basic scripting",
                "CI/CD basics and version control (Git)",
                "Containers 101 (Docker fundamentals)",
                "Cloud basics (IAM, compute, storage, networking concepts)",
            ],
            Level::Mid => &[
                "Designing CI/CD pipelines end-to-end",
                "Infrastructure as Code (Terraform / CloudFormation basics)",
                "Monitoring, alerting, and incident response",
                "Cost optimization / reliability trade-offs",
            ],
            Level::Senior => &[
                "System design and architecture decisions",
                "Scaling, reliability (SLOs, SLIs, error budgets)",
                "Security, compliance, and governance",
                "Mentoring, technical leadership, and stakeholder communication",
            ],
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
