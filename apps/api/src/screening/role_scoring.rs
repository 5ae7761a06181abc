//! Skill-overlap role ranking.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::taxonomy::{RoleSkills, Taxonomy};

/// Number of secondary roles suggested after the primary one.
pub const SECONDARY_ROLE_COUNT: usize = 2;
/// Rows shown in the role-match chart.
pub const CHART_ROLE_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleScore {
    pub role: String,
    pub matched: usize,
    pub required: usize,
    /// matched / required × 100; 0 when the role lists no skills.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleGap {
    pub role: String,
    /// Missing skills in the role's own list order.
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRanking {
    pub primary: RoleGap,
    pub secondary: Vec<RoleGap>,
    /// Every role, highest overlap first; ties keep taxonomy order.
    pub scores: Vec<RoleScore>,
}

/// Counts `|found ∩ required|` for one role (set semantics).
pub fn match_count(found: &BTreeSet<String>, role: &RoleSkills) -> usize {
    let required: HashSet<&str> = role.skills.iter().map(String::as_str).collect();
    required.iter().filter(|s| found.contains(**s)).count()
}

/// Ranks every role by overlap with `found`. `None` only for an empty taxonomy.
pub fn rank_roles(found: &BTreeSet<String>, taxonomy: &Taxonomy) -> Option<RoleRanking> {
    let mut scores: Vec<RoleScore> = taxonomy
        .roles()
        .iter()
        .map(|role| {
            let matched = match_count(found, role);
            let required = role.skills.len();
            RoleScore {
                role: role.role.clone(),
                matched,
                required,
                percent: percent(matched, required),
            }
        })
        .collect();

    // sort_by is stable: equal counts stay in taxonomy order
    scores.sort_by(|a, b| b.matched.cmp(&a.matched));

    let primary_name = scores.first()?.role.clone();
    let primary = role_gap(&primary_name, found, taxonomy)?;
    let secondary = scores
        .iter()
        .skip(1)
        .take(SECONDARY_ROLE_COUNT)
        .filter_map(|s| role_gap(&s.role, found, taxonomy))
        .collect();

    Some(RoleRanking {
        primary,
        secondary,
        scores,
    })
}

/// Skills of `role` not present in `found`, deduplicated, in list order.
/// `None` when the role is not part of the taxonomy.
pub fn role_gap(role: &str, found: &BTreeSet<String>, taxonomy: &Taxonomy) -> Option<RoleGap> {
    let entry = taxonomy.get(role)?;
    let mut seen = HashSet::new();
    let missing = entry
        .skills
        .iter()
        .filter(|s| !found.contains(*s) && seen.insert(s.as_str()))
        .cloned()
        .collect();

    Some(RoleGap {
        role: entry.role.clone(),
        missing,
    })
}

/// Top `CHART_ROLE_COUNT` roles by match percentage, ties in taxonomy order.
pub fn chart_rows(found: &BTreeSet<String>, taxonomy: &Taxonomy) -> Vec<RoleScore> {
    let mut rows: Vec<RoleScore> = taxonomy
        .roles()
        .iter()
        .map(|role| {
            let matched = match_count(found, role);
            RoleScore {
                role: role.role.clone(),
                matched,
                required: role.skills.len(),
                percent: percent(matched, role.skills.len()),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    rows.truncate(CHART_ROLE_COUNT);
    rows
}

fn percent(matched: usize, required: usize) -> f64 {
    if required == 0 {
        0.0
    } else {
        matched as f64 / required as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn role(name: &str, items: &[&str]) -> RoleSkills {
        RoleSkills {
            role: name.to_string(),
            skills: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_data_science_match_count_is_two() {
        let taxonomy = Taxonomy::builtin();
        let ds = taxonomy.get("Data Science").unwrap();
        assert_eq!(match_count(&skills(&["python", "sql"]), ds), 2);
    }

    #[test]
    fn test_primary_is_highest_overlap() {
        let found = skills(&["docker", "kubernetes", "aws", "linux"]);
        let ranking = rank_roles(&found, &Taxonomy::builtin()).unwrap();
        assert_eq!(ranking.primary.role, "DevOps Engineer");
        assert_eq!(ranking.primary.missing, vec!["ci/cd"]);
        assert_eq!(ranking.secondary.len(), SECONDARY_ROLE_COUNT);
    }

    #[test]
    fn test_ties_broken_by_taxonomy_order() {
        let taxonomy = Taxonomy::new(vec![
            role("First", &["a", "b"]),
            role("Second", &["a", "c"]),
            role("Third", &["a", "d"]),
            role("Fourth", &["a", "e"]),
        ])
        .unwrap();

        let ranking = rank_roles(&skills(&["a"]), &taxonomy).unwrap();
        assert_eq!(ranking.primary.role, "First");
        let secondary: Vec<_> = ranking.secondary.iter().map(|g| g.role.as_str()).collect();
        assert_eq!(secondary, vec!["Second", "Third"]);
    }

    #[test]
    fn test_no_skills_selects_first_role() {
        let ranking = rank_roles(&BTreeSet::new(), &Taxonomy::builtin()).unwrap();
        assert_eq!(ranking.primary.role, "Data Science");
        assert_eq!(ranking.primary.missing.len(), 5);
        assert_eq!(ranking.secondary[0].role, "HR");
        assert_eq!(ranking.secondary[1].role, "Arts Teacher");
    }

    #[test]
    fn test_missing_keeps_list_order_and_dedups() {
        let taxonomy = Taxonomy::new(vec![role("R", &["z", "a", "z", "m"])]).unwrap();
        let gap = role_gap("R", &skills(&["a"]), &taxonomy).unwrap();
        assert_eq!(gap.missing, vec!["z", "m"]);
    }

    #[test]
    fn test_single_role_has_no_secondary() {
        let taxonomy = Taxonomy::new(vec![role("Only", &["x"])]).unwrap();
        let ranking = rank_roles(&skills(&["x"]), &taxonomy).unwrap();
        assert_eq!(ranking.primary.role, "Only");
        assert!(ranking.primary.missing.is_empty());
        assert!(ranking.secondary.is_empty());
    }

    #[test]
    fn test_ranking_is_stable_across_runs() {
        let found = skills(&["python", "sql", "java", "linux"]);
        let taxonomy = Taxonomy::builtin();
        let first = rank_roles(&found, &taxonomy).unwrap();
        for _ in 0..5 {
            assert_eq!(rank_roles(&found, &taxonomy).unwrap(), first);
        }
    }

    #[test]
    fn test_chart_rows_top_six_by_percent() {
        let taxonomy = Taxonomy::new(vec![
            role("Half", &["a", "b"]),
            role("Empty", &[]),
            role("Full", &["a"]),
            role("R4", &["q"]),
            role("R5", &["q"]),
            role("R6", &["q"]),
            role("R7", &["q"]),
        ])
        .unwrap();

        let rows = chart_rows(&skills(&["a"]), &taxonomy);
        assert_eq!(rows.len(), CHART_ROLE_COUNT);
        assert_eq!(rows[0].role, "Full");
        assert!((rows[0].percent - 100.0).abs() < f64::EPSILON);
        assert_eq!(rows[1].role, "Half");
        assert!((rows[1].percent - 50.0).abs() < f64::EPSILON);
        // zero-percent rows keep taxonomy order; "R7" falls off the chart
        assert_eq!(rows[2].role, "Empty");
        assert_eq!(rows[2].percent, 0.0);
        assert!(rows.iter().all(|r| r.role != "R7"));
    }
}
