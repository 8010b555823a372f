//! Rule-based summary — the deterministic fallback when the remote model is unavailable.

use crate::analysis::seniority::ExperienceLevel;

/// Builds a one-paragraph professional summary from the extracted signals.
///
/// Three templates only: seasoned Senior (5+ skills), Junior, and everyone else
/// (Mid-Level, or Senior with fewer than five skills).
pub fn generate_rule_based_summary(skills: &[String], level: ExperienceLevel, years: u32) -> String {
    let top_skills = skills.iter().take(3).map(String::as_str).collect::<Vec<_>>().join(", ");

    match level {
        ExperienceLevel::Senior if skills.len() >= 5 => format!(
            "Experienced {level} professional with {years}+ years of expertise in {top_skills}. \
             Strong background in system architecture, team leadership, and scalable solutions."
        ),
        ExperienceLevel::Junior => format!(
            "{level} level candidate with {years} years of experience in {}. \
             Strong foundation in computer science fundamentals and eager to learn new technologies.",
            or_default(&top_skills, "programming")
        ),
        _ => format!(
            "{level} level professional with {years} years of solid experience in {}. \
             Proven track record in building robust applications and solving complex problems.",
            or_default(&top_skills, "software development")
        ),
    }
}

fn or_default<'a>(joined: &'a str, default: &'a str) -> &'a str {
    if joined.is_empty() {
        default
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_senior_template_with_five_skills() {
        let s = skills(&["Python", "Rust", "Docker", "Aws", "Git"]);
        assert_eq!(
            generate_rule_based_summary(&s, ExperienceLevel::Senior, 9),
            "Experienced Senior professional with 9+ years of expertise in Python, Rust, Docker. \
             Strong background in system architecture, team leadership, and scalable solutions."
        );
    }

    #[test]
    fn test_junior_template_without_skills() {
        assert_eq!(
            generate_rule_based_summary(&[], ExperienceLevel::Junior, 1),
            "Junior level candidate with 1 years of experience in programming. \
             Strong foundation in computer science fundamentals and eager to learn new technologies."
        );
    }

    #[test]
    fn test_junior_template_with_skills() {
        let s = skills(&["Java", "Html"]);
        assert!(generate_rule_based_summary(&s, ExperienceLevel::Junior, 2)
            .starts_with("Junior level candidate with 2 years of experience in Java, Html."));
    }

    #[test]
    fn test_mid_level_template_without_skills() {
        assert_eq!(
            generate_rule_based_summary(&[], ExperienceLevel::MidLevel, 3),
            "Mid-Level level professional with 3 years of solid experience in software development. \
             Proven track record in building robust applications and solving complex problems."
        );
    }

    #[test]
    fn test_senior_with_few_skills_uses_general_template() {
        let s = skills(&["Go", "Linux"]);
        assert_eq!(
            generate_rule_based_summary(&s, ExperienceLevel::Senior, 8),
            "Senior level professional with 8 years of solid experience in Go, Linux. \
             Proven track record in building robust applications and solving complex problems."
        );
    }
}
