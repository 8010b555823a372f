//! Skill extraction — fixed taxonomy, plain substring containment.
//!
//! Matching is deliberately naive: "go" fires inside "algorithm", "java" inside
//! "javascript". Tightening this to word boundaries changes observable output.

/// Category name → lower-case skill tokens, scanned in this order.
pub const SKILL_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Programming",
        &[
            "python", "javascript", "java", "c++", "c#", "go", "rust", "php", "ruby", "swift",
            "kotlin",
        ],
    ),
    (
        "Frontend",
        &[
            "react", "angular", "vue", "typescript", "html", "css", "sass", "bootstrap",
            "tailwind",
        ],
    ),
    (
        "Backend",
        &[
            "node.js", "django", "flask", "spring", "express", "fastapi", "laravel", "rails",
        ],
    ),
    (
        "Database",
        &[
            "mysql",
            "postgresql",
            "mongodb",
            "redis",
            "sqlite",
            "oracle",
            "sql server",
        ],
    ),
    (
        "Cloud",
        &[
            "aws",
            "azure",
            "gcp",
            "docker",
            "kubernetes",
            "jenkins",
            "terraform",
            "ci/cd",
        ],
    ),
    (
        "Data Science",
        &[
            "pandas",
            "numpy",
            "tensorflow",
            "pytorch",
            "machine learning",
            "deep learning",
            "nlp",
        ],
    ),
    (
        "Mobile",
        &["android", "ios", "react native", "flutter", "swift"],
    ),
    (
        "Tools",
        &["git", "linux", "bash", "jira", "confluence", "figma"],
    ),
];

/// Returns the distinct display names of every taxonomy token found in `text`.
///
/// Order is taxonomy order of first detection; duplicates (e.g. "swift" listed
/// under two categories) collapse onto their first position.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut detected: Vec<String> = Vec::new();

    for (_category, tokens) in SKILL_TAXONOMY {
        for token in tokens.iter() {
            if !text_lower.contains(token) {
                continue;
            }
            let display = display_name(token);
            if !detected.contains(&display) {
                detected.push(display);
            }
        }
    }

    detected
}

/// Display form of a taxonomy token: title case, with a couple of fixed spellings.
pub fn display_name(token: &str) -> String {
    match token {
        "node.js" => "Node.js".to_string(),
        "ci/cd" => "CI/CD".to_string(),
        other => title_case(other),
    }
}

/// Upper-cases every letter that follows a non-letter, lower-cases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
