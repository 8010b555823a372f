use serde::{Deserialize, Serialize};

/// Coarse seniority band inferred from resume wording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Junior,
    #[default]
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::MidLevel => "Mid-Level",
            ExperienceLevel::Senior => "Senior",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const SENIOR_INDICATORS: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "architect",
    "manager",
    "head of",
    "team lead",
];

pub const JUNIOR_INDICATORS: &[&str] = &["junior", "entry", "fresher", "intern", "trainee", "graduate"];

/// Number of distinct indicators present in already lower-cased text.
/// Each indicator counts at most once regardless of repetition.
fn count_present(text_lower: &str, indicators: &[&str]) -> usize {
    indicators
        .iter()
        .filter(|indicator| text_lower.contains(*indicator))
        .count()
}

/// Senior wins on a strictly higher senior count, Junior on a strictly higher
/// junior count; ties (including none at all) are Mid-Level.
pub fn classify_seniority(text: &str) -> ExperienceLevel {
    let text_lower = text.to_lowercase();
    let senior = count_present(&text_lower, SENIOR_INDICATORS);
    let junior = count_present(&text_lower, JUNIOR_INDICATORS);

    match senior.cmp(&junior) {
        std::cmp::Ordering::Greater => ExperienceLevel::Senior,
        std::cmp::Ordering::Less => ExperienceLevel::Junior,
        std::cmp::Ordering::Equal => ExperienceLevel::MidLevel,
    }
}
