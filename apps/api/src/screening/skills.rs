use std::collections::BTreeSet;

use crate::models::taxonomy::Taxonomy;

/// Returns every taxonomy skill that occurs as a substring of `normalized_text`.
///
/// Matching is plain substring search, so a keyword embedded in a longer word
/// also counts (e.g. "java" inside "javascript").
pub fn extract_skills(normalized_text: &str, taxonomy: &Taxonomy) -> BTreeSet<String> {
    let haystack = normalized_text.to_lowercase();

    taxonomy
        .all_skills()
        .filter(|skill| haystack.contains(*skill))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::taxonomy::RoleSkills;

    fn data_science_only() -> Taxonomy {
        Taxonomy::new(vec![RoleSkills {
            role: "Data Science".to_string(),
            skills: ["python", "pandas", "numpy", "scikit-learn", "sql"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }])
        .unwrap()
    }

    #[test]
    fn test_finds_python_and_sql() {
        let found = extract_skills("skilled in python and sql for data science", &data_science_only());
        let expected: BTreeSet<String> = ["python", "sql"].iter().map(|s| s.to_string()).collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_empty_text_finds_nothing() {
        assert!(extract_skills("", &Taxonomy::builtin()).is_empty());
    }

    #[test]
    fn test_substring_matches_inside_words() {
        let found = extract_skills("expert javascript engineer", &Taxonomy::builtin());
        assert!(found.contains("javascript"));
        assert!(found.contains("java"));
    }

    #[test]
    fn test_multi_word_skills_match() {
        let found = extract_skills("led talent acquisition and onboarding", &Taxonomy::builtin());
        assert!(found.contains("talent acquisition"));
        assert!(found.contains("onboarding"));
    }

    #[test]
    fn test_punctuated_skills_never_match_normalized_text() {
        // "scikit-learn" and "ci/cd" keep their punctuation; normalized text has none.
        let found = extract_skills("scikit learn ci cd", &Taxonomy::builtin());
        assert!(!found.contains("scikit-learn"));
        assert!(!found.contains("ci/cd"));
    }

    #[test]
    fn test_is_deterministic() {
        let text = "python docker kubernetes aws linux sql";
        let taxonomy = Taxonomy::builtin();
        assert_eq!(extract_skills(text, &taxonomy), extract_skills(text, &taxonomy));
    }
}
