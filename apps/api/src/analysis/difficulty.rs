use serde::{Deserialize, Serialize};

use crate::analysis::seniority::ExperienceLevel;

/// Interview problem difficulty recommended for a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Hard is checked before Easy, so a Junior with 8+ years resolves Hard.
/// Keep that order: it is the observable behaviour interviewers already see.
pub fn recommend_difficulty(level: ExperienceLevel, skills_count: usize, years: u32) -> Difficulty {
    if (level == ExperienceLevel::Senior && skills_count >= 5) || years >= 8 {
        Difficulty::Hard
    } else if level == ExperienceLevel::Junior || skills_count <= 2 || years <= 2 {
        Difficulty::Easy
    } else {
        Difficulty::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senior_with_many_skills_is_hard() {
        assert_eq!(
            recommend_difficulty(ExperienceLevel::Senior, 6, 3),
            Difficulty::Hard
        );
    }

    #[test]
    fn test_many_years_is_hard_regardless_of_skills() {
        assert_eq!(
            recommend_difficulty(ExperienceLevel::MidLevel, 1, 9),
            Difficulty::Hard
        );
    }

    #[test]
    fn test_hard_checked_before_easy() {
        assert_eq!(
            recommend_difficulty(ExperienceLevel::Junior, 8, 10),
            Difficulty::Hard
        );
        assert_eq!(
            recommend_difficulty(ExperienceLevel::Senior, 1, 9),
            Difficulty::Hard
        );
    }

    #[test]
    fn test_junior_is_easy() {
        assert_eq!(
            recommend_difficulty(ExperienceLevel::Junior, 4, 4),
            Difficulty::Easy
        );
    }

    #[test]
    fn test_few_skills_or_few_years_is_easy() {
        assert_eq!(
            recommend_difficulty(ExperienceLevel::MidLevel, 2, 5),
            Difficulty::Easy
        );
        assert_eq!(
            recommend_difficulty(ExperienceLevel::MidLevel, 4, 2),
            Difficulty::Easy
        );
    }

    #[test]
    fn test_senior_with_few_skills_falls_through_to_medium() {
        assert_eq!(
            recommend_difficulty(ExperienceLevel::Senior, 4, 5),
            Difficulty::Medium
        );
    }

    #[test]
    fn test_mid_level_defaults_are_medium() {
        assert_eq!(
            recommend_difficulty(ExperienceLevel::MidLevel, 3, 3),
            Difficulty::Medium
        );
    }

    #[test]
    fn test_empty_text_defaults_resolve_easy() {
        // no skills trips the skills_count <= 2 clause
        assert_eq!(
            recommend_difficulty(ExperienceLevel::MidLevel, 0, 3),
            Difficulty::Easy
        );
    }
}
