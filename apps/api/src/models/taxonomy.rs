use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// One role and the skill keywords that define it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSkills {
    pub role: String,
    pub skills: Vec<String>,
}

/// Ordered role → required-skills map.
///
/// Role order is significant: it breaks ties when ranking roles, so the
/// taxonomy is a list rather than a hash map. Skills are stored lowercase.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Taxonomy {
    roles: Vec<RoleSkills>,
}

/// Built-in taxonomy: top five skills per role, derived from the labeled
/// resume dataset categories.
pub const DEFAULT_ROLE_SKILLS: &[(&str, &[&str])] = &[
    ("Data Science", &["python", "pandas", "numpy", "scikit-learn", "sql"]),
    ("HR", &["recruitment", "talent acquisition", "interviewing", "onboarding", "hr policies"]),
    ("Arts Teacher", &["creativity", "communication", "drawing", "painting", "art history"]),
    ("Web Designer", &["html", "css", "javascript", "ux/ui design", "responsive design"]),
    ("Mechanical Engineer", &["solidworks", "autocad", "matlab", "mechanics", "thermodynamics"]),
    ("Sales", &["negotiation", "crm", "communication", "lead generation", "sales strategy"]),
    (
        "Health and Fitness Trainer",
        &["exercise planning", "nutrition", "communication", "client management", "fitness assessment"],
    ),
    (
        "Civil Engineer",
        &["autocad", "structural analysis", "surveying", "project management", "construction materials"],
    ),
    ("Java Developer", &["java", "spring", "hibernate", "sql", "oop"]),
    ("Python Developer", &["python", "django", "flask", "api development", "oop"]),
    ("Full Stack Developer", &["javascript", "react", "nodejs", "sql", "api development"]),
    ("Frontend Developer", &["html", "css", "javascript", "react", "responsive design"]),
    ("Database Engineer", &["sql", "mysql", "postgresql", "database design", "performance tuning"]),
    ("DevOps Engineer", &["docker", "kubernetes", "ci/cd", "aws", "linux"]),
    (
        "Network Security Engineer",
        &["firewall", "penetration testing", "network protocols", "linux", "vpn"],
    ),
    ("Ethical Hacker", &["penetration testing", "network security", "python", "linux", "exploitation"]),
    ("Business Analyst", &["excel", "sql", "power bi", "tableau", "data analysis"]),
    ("Automation Tester", &["selenium", "test cases", "automation", "java", "python"]),
    ("PMO", &["project management", "planning", "communication", "risk management", "reporting"]),
    ("Blockchain Developer", &["solidity", "ethereum", "smart contracts", "nodejs", "cryptography"]),
    ("ETL Developer", &["sql", "python", "data warehousing", "etl tools", "oracle"]),
    ("SAP Developer", &["sap abap", "sap modules", "integration", "sql", "business processes"]),
];

impl Taxonomy {
    /// Builds a taxonomy, lowercasing skills and rejecting empty or duplicate roles.
    pub fn new(roles: Vec<RoleSkills>) -> Result<Self> {
        if roles.is_empty() {
            bail!("role-skills taxonomy must contain at least one role");
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(roles.len());
        for entry in roles {
            let role = entry.role.trim().to_string();
            if role.is_empty() {
                bail!("role-skills taxonomy contains a role with an empty name");
            }
            if !seen.insert(role.clone()) {
                bail!("role '{role}' appears more than once in the taxonomy");
            }
            let skills = entry
                .skills
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
            normalized.push(RoleSkills { role, skills });
        }

        Ok(Taxonomy { roles: normalized })
    }

    pub fn builtin() -> Self {
        let roles = DEFAULT_ROLE_SKILLS
            .iter()
            .map(|(role, skills)| RoleSkills {
                role: role.to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        // The built-in table is non-empty with unique role names.
        Taxonomy { roles }
    }

    /// Reads a JSON array of `{"role": ..., "skills": [...]}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read role-skills file '{}'", path.display()))?;
        let roles: Vec<RoleSkills> = serde_json::from_str(&raw)
            .with_context(|| format!("Role-skills file '{}' is not valid JSON", path.display()))?;
        Self::new(roles)
    }

    /// Loads from `path` when given, otherwise falls back to the built-in table.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => Ok(Self::builtin()),
        }
    }

    pub fn roles(&self) -> &[RoleSkills] {
        &self.roles
    }

    pub fn get(&self, role: &str) -> Option<&RoleSkills> {
        self.roles.iter().find(|r| r.role == role)
    }

    /// Every skill keyword across all roles, in role order. Repeats are kept.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.roles
            .iter()
            .flat_map(|r| r.skills.iter().map(String::as_str))
    }

    /// Sum of per-role list lengths, counting skills shared between roles once per role.
    pub fn total_skill_keywords(&self) -> usize {
        self.roles.iter().map(|r| r.skills.len()).sum()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.roles)?)
    }
}
