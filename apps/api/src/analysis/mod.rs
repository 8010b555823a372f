//! Resume analysis — turns raw OCR text into interview signals and a summary.
//!
//! Pipeline: skills / seniority / years → difficulty → remote summary, falling
//! back to the rule-based template when the remote model is unavailable.
//! Everything except the summarizer call is a pure function of the text.

pub mod difficulty;
pub mod experience;
pub mod seniority;
pub mod skills;
pub mod summary;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::difficulty::{recommend_difficulty, Difficulty};
use crate::analysis::experience::estimate_years;
use crate::analysis::seniority::{classify_seniority, ExperienceLevel};
use crate::analysis::skills::extract_skills;
use crate::analysis::summary::generate_rule_based_summary;
use crate::summarizer::Summarizer;

const KEY_SKILLS_CAP: usize = 10;
const STRENGTHS_CAP: usize = 5;
const FOCUS_CAP: usize = 3;

pub const DEFAULT_STRENGTHS: [&str; 2] = ["Problem Solving", "Software Development"];
pub const DEFAULT_FOCUS: [&str; 3] = ["Data Structures", "Algorithms", "System Design"];

/// Which branch produced `professional_summary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummarySource {
    #[serde(rename = "AI Analysis (BART)")]
    RemoteModel,
    #[serde(rename = "Smart Rule-Based Analysis")]
    RuleBased,
}

/// Structured analysis of one resume. Rebuilt wholesale on every analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub professional_summary: String,
    pub key_skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub experience_years: u32,
    pub recommended_difficulty: Difficulty,
    pub technical_strengths: Vec<String>,
    pub interview_focus: Vec<String>,
    pub summary_source: SummarySource,
    pub skills_count: usize,
}

/// The deterministic half of the pipeline: everything derived from text alone.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeSignals {
    /// Full, uncapped detected-skill list. Every capped view is a prefix of it.
    pub skills: Vec<String>,
    pub level: ExperienceLevel,
    pub years: u32,
    pub difficulty: Difficulty,
}

impl ResumeSignals {
    pub fn from_text(text: &str) -> Self {
        let skills = extract_skills(text);
        let level = classify_seniority(text);
        let years = estimate_years(text);
        let difficulty = recommend_difficulty(level, skills.len(), years);
        Self {
            skills,
            level,
            years,
            difficulty,
        }
    }

    fn prefix_or(&self, cap: usize, default: &[&str]) -> Vec<String> {
        if self.skills.is_empty() {
            default.iter().map(|s| s.to_string()).collect()
        } else {
            self.skills.iter().take(cap).cloned().collect()
        }
    }

    /// Assembles the final record around an already-chosen summary.
    pub fn into_analysis(self, professional_summary: String, summary_source: SummarySource) -> ResumeAnalysis {
        let technical_strengths = self.prefix_or(STRENGTHS_CAP, &DEFAULT_STRENGTHS);
        let interview_focus = self.prefix_or(FOCUS_CAP, &DEFAULT_FOCUS);
        let skills_count = self.skills.len();
        let mut key_skills = self.skills;
        key_skills.truncate(KEY_SKILLS_CAP);

        ResumeAnalysis {
            professional_summary,
            key_skills,
            experience_level: self.level,
            experience_years: self.years,
            recommended_difficulty: self.difficulty,
            technical_strengths,
            interview_focus,
            summary_source,
            skills_count,
        }
    }
}

/// Runs the full analysis. Total: every input, including empty text, yields a
/// complete record. Summarizer failures are logged and absorbed here.
pub async fn analyze(text: &str, summarizer: &dyn Summarizer) -> ResumeAnalysis {
    let signals = ResumeSignals::from_text(text);

    info!(
        "Extracted {} skills; experience: {}, years: {}",
        signals.skills.len(),
        signals.level,
        signals.years
    );

    let (summary, source) = match summarizer.summarize(text).await {
        Ok(remote) => {
            info!("Using remote model summary");
            (remote, SummarySource::RemoteModel)
        }
        Err(e) => {
            warn!("Remote summarizer unavailable, using rule-based summary: {e}");
            (
                generate_rule_based_summary(&signals.skills, signals.level, signals.years),
                SummarySource::RuleBased,
            )
        }
    };

    signals.into_analysis(summary, source)
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;

    use crate::summarizer::{Summarizer, SummarizerError};

    /// Summarizer stub with a fixed outcome.
    pub enum StubSummarizer {
        Returns(String),
        TimesOut,
    }

    #[async_trait]
    impl Summarizer for StubSummarizer {
        async fn summarize(&self, _text: &str) -> Result<String, SummarizerError> {
            match self {
                StubSummarizer::Returns(text) => Ok(text.clone()),
                StubSummarizer::TimesOut => Err(SummarizerError::Timeout(
                    std::time::Duration::from_secs(30),
                )),
            }
        }
    }
}
