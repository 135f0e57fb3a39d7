//! Salary estimator: expected annual pay in LPA (lakh rupees per annum)
//! from role, experience, city and self-rated skills, plus negotiation tips.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// LPA at zero years of experience, keyed by lower-cased role.
const BASE_SALARY_MAP: &[(&str, f64)] = &[
    ("devops engineer", 6.5),
    ("backend developer", 5.8),
    ("frontend developer", 5.5),
    ("fullstack developer", 6.2),
    ("sre engineer", 7.2),
    ("cloud engineer", 6.8),
    ("data engineer", 7.5),
    ("machine learning engineer", 7.8),
    ("cybersecurity engineer", 7.1),
];

const CITY_MULTIPLIER: &[(&str, f64)] = &[
    ("bangalore", 1.22),
    ("hyderabad", 1.18),
    ("pune", 1.15),
    ("mumbai", 1.25),
    ("chennai", 1.12),
    ("delhi", 1.2),
    ("remote", 1.1),
    ("tier2", 0.90),
    ("other", 1.0),
];

const NEGOTIATION_TIPS: &[&str] = &[
    "Show impact with numbers — reduction in cost, time, outages.",
    "Demonstrate ownership of CI/CD + reliability improvements.",
    "Prove you can solve problems without supervision.",
    "Align your ask with market average for role + city.",
    "Mention certifications + cloud cost optimizations.",
];

pub const DEFAULT_BASE_LPA: f64 = 6.0;
pub const DEFAULT_CITY_MULTIPLIER: f64 = 1.0;

const GROWTH_PER_YEAR: f64 = 0.18;
const SKILL_FLOOR: f64 = 0.85;
const SKILL_STEP: f64 = 0.07;
const LOW_BAND: f64 = 0.85;
const HIGH_BAND: f64 = 1.20;

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRating {
    pub name: String,
    /// 1 to 5; values outside are clamped.
    pub level: u8,
}

impl SkillRating {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryInput {
    pub role: String,
    pub years_experience: f64,
    pub city: String,
    #[serde(default)]
    pub skills: Vec<SkillRating>,
}

impl Default for SalaryInput {
    fn default() -> Self {
        Self {
            role: "DevOps Engineer".to_string(),
            years_experience: 1.0,
            city: "Bangalore".to_string(),
            skills: vec![
                SkillRating::new("AWS", 4),
                SkillRating::new("Docker", 4),
                SkillRating::new("Kubernetes", 3),
                SkillRating::new("Terraform", 3),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryEstimate {
    pub expected: f64,
    pub low: f64,
    pub high: f64,
}

impl SalaryEstimate {
    /// `"<value> LPA"` with one decimal for each figure, in expected/low/high order.
    pub fn display(&self) -> [String; 3] {
        [lpa(self.expected), lpa(self.low), lpa(self.high)]
    }
}

pub fn lpa(value: f64) -> String {
    format!("{value:.1} LPA")
}

/// Unknown roles start from [`DEFAULT_BASE_LPA`].
pub fn base_salary(role: &str) -> f64 {
    let role = role.trim().to_lowercase();
    BASE_SALARY_MAP
        .iter()
        .find(|(name, _)| *name == role)
        .map(|&(_, lpa)| lpa)
        .unwrap_or(DEFAULT_BASE_LPA)
}

/// Unknown cities weigh [`DEFAULT_CITY_MULTIPLIER`].
pub fn city_multiplier(city: &str) -> f64 {
    let city = city.trim().to_lowercase();
    CITY_MULTIPLIER
        .iter()
        .find(|(name, _)| *name == city)
        .map(|&(_, weight)| weight)
        .unwrap_or(DEFAULT_CITY_MULTIPLIER)
}

/// Cities offered for selection, in table order.
pub fn known_cities() -> Vec<&'static str> {
    CITY_MULTIPLIER.iter().map(|&(name, _)| name).collect()
}

/// `0.85 + 0.07 × average level`. No skills rated means no adjustment (1.0).
pub fn skill_multiplier(skills: &[SkillRating]) -> f64 {
    if skills.is_empty() {
        return 1.0;
    }
    let total: f64 = skills
        .iter()
        .map(|s| f64::from(s.level.clamp(MIN_SKILL_LEVEL, MAX_SKILL_LEVEL)))
        .sum();
    SKILL_FLOOR + SKILL_STEP * (total / skills.len() as f64)
}

pub fn estimate(input: &SalaryInput) -> SalaryEstimate {
    let base = base_salary(&input.role);
    let experience = 1.0 + GROWTH_PER_YEAR * input.years_experience.max(0.0);
    let skills = skill_multiplier(&input.skills);
    let city = city_multiplier(&input.city);

    let expected = base * experience * skills * city;
    debug!(
        "Salary estimate for '{}' in '{}': {expected:.2} LPA",
        input.role, input.city
    );

    SalaryEstimate {
        expected,
        low: expected * LOW_BAND,
        high: expected * HIGH_BAND,
    }
}

pub fn negotiation_tips() -> Vec<String> {
    NEGOTIATION_TIPS.iter().map(|t| t.to_string()).collect()
}
