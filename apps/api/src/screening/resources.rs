//! Static learning-resource and practice-question catalogs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Link target used when a skill has no mapped resource.
pub const PLACEHOLDER_URL: &str = "#";

const SKILL_RESOURCES: &[(&str, &str)] = &[
    ("python", "https://www.learnpython.org/"),
    ("django", "https://www.djangoproject.com/start/"),
    ("flask", "https://flask.palletsprojects.com/en/2.3.x/tutorial/"),
    ("aws", "https://aws.amazon.com/training/"),
    ("docker", "https://www.docker.com/101-tutorial"),
    ("kubernetes", "https://kubernetes.io/docs/tutorials/"),
    ("sql", "https://www.w3schools.com/sql/"),
    ("excel", "https://www.coursera.org/learn/excel-data-analysis"),
    ("javascript", "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Guide"),
    ("react", "https://reactjs.org/tutorial/tutorial.html"),
    ("java", "https://www.learnjavaonline.org/"),
    ("spring", "https://spring.io/guides"),
    ("selenium", "https://www.selenium.dev/documentation/"),
    ("cpp", "https://www.learncpp.com/"),
    ("exploitation", "https://owasp.org/"),
    ("firewall", "https://www.pfsense.org/learn/"),
    ("api", "https://swagger.io/docs/"),
    ("angular", "https://angular.io/tutorial"),
    ("css", "https://developer.mozilla.org/en-US/docs/Web/CSS"),
    ("html", "https://developer.mozilla.org/en-US/docs/Web/HTML"),
    ("linux", "https://linuxjourney.com/"),
    ("automation", "https://www.ansible.com/resources/get-started"),
    ("bash", "https://linuxcommand.org/"),
    ("git", "https://git-scm.com/docs/gittutorial"),
    ("nodejs", "https://nodejs.dev/learn"),
    ("typescript", "https://www.typescriptlang.org/docs/handbook/intro.html"),
    ("graphql", "https://graphql.org/learn/"),
    ("rest", "https://restfulapi.net/"),
    ("ci_cd", "https://www.jenkins.io/doc/tutorials/"),
    ("security", "https://www.mitre.org/"),
];

type QuestionSet = &'static [(&'static str, &'static str)];

const ROLE_PRACTICE_QUESTIONS: &[(&str, QuestionSet)] = &[
    (
        "Data Science",
        &[
            ("Two Sum", "https://leetcode.com/problems/two-sum/"),
            ("Median of Two Sorted Arrays", "https://leetcode.com/problems/median-of-two-sorted-arrays/"),
            ("Kth Largest Element in an Array", "https://leetcode.com/problems/kth-largest-element-in-an-array/"),
        ],
    ),
    (
        "HR",
        &[
            ("Valid Parentheses", "https://leetcode.com/problems/valid-parentheses/"),
            ("Group Anagrams", "https://leetcode.com/problems/group-anagrams/"),
            ("Meeting Rooms II", "https://leetcode.com/problems/meeting-rooms-ii/"),
        ],
    ),
    (
        "Arts Teacher",
        &[
            ("Flood Fill", "https://leetcode.com/problems/flood-fill/"),
            ("Unique Paths", "https://leetcode.com/problems/unique-paths/"),
            ("Generate Parentheses", "https://leetcode.com/problems/generate-parentheses/"),
        ],
    ),
    (
        "Web Designer",
        &[
            ("Valid Palindrome", "https://leetcode.com/problems/valid-palindrome/"),
            ("Minimum Window Substring", "https://leetcode.com/problems/minimum-window-substring/"),
            ("Longest Common Prefix", "https://leetcode.com/problems/longest-common-prefix/"),
        ],
    ),
    (
        "Mechanical Engineer",
        &[
            ("Design HashMap", "https://leetcode.com/problems/design-hashmap/"),
            ("Rotate Image", "https://leetcode.com/problems/rotate-image/"),
            ("Trapping Rain Water", "https://leetcode.com/problems/trapping-rain-water/"),
        ],
    ),
    (
        "Sales",
        &[
            ("Best Time to Buy and Sell Stock", "https://leetcode.com/problems/best-time-to-buy-and-sell-stock/"),
            ("Task Scheduler", "https://leetcode.com/problems/task-scheduler/"),
            ("Top K Frequent Elements", "https://leetcode.com/problems/top-k-frequent-elements/"),
        ],
    ),
    (
        "Health and Fitness Trainer",
        &[
            ("Climbing Stairs", "https://leetcode.com/problems/climbing-stairs/"),
            ("Maximum Subarray", "https://leetcode.com/problems/maximum-subarray/"),
            ("Longest Increasing Subsequence", "https://leetcode.com/problems/longest-increasing-subsequence/"),
        ],
    ),
    (
        "Civil Engineer",
        &[
            ("Max Area of Island", "https://leetcode.com/problems/max-area-of-island/"),
            ("Walls and Gates", "https://leetcode.com/problems/walls-and-gates/"),
            ("Course Schedule", "https://leetcode.com/problems/course-schedule/"),
        ],
    ),
    (
        "Java Developer",
        &[
            ("Implement strStr()", "https://leetcode.com/problems/implement-strstr/"),
            ("Reverse Integer", "https://leetcode.com/problems/reverse-integer/"),
            ("Valid Parentheses", "https://leetcode.com/problems/valid-parentheses/"),
        ],
    ),
    (
        "Python Developer",
        &[
            ("Add Two Numbers", "https://leetcode.com/problems/add-two-numbers/"),
            ("Valid Anagram", "https://leetcode.com/problems/valid-anagram/"),
            ("Word Break", "https://leetcode.com/problems/word-break/"),
        ],
    ),
    (
        "Full Stack Developer",
        &[
            ("Design Twitter", "https://leetcode.com/problems/design-twitter/"),
            ("LFU Cache", "https://leetcode.com/problems/lfu-cache/"),
            ("Serialize and Deserialize Binary Tree", "https://leetcode.com/problems/serialize-and-deserialize-binary-tree/"),
        ],
    ),
    (
        "Frontend Developer",
        &[
            ("Design Browser History", "https://leetcode.com/problems/design-browser-history/"),
            ("Number of Islands", "https://leetcode.com/problems/number-of-islands/"),
            ("Longest Increasing Subsequence", "https://leetcode.com/problems/longest-increasing-subsequence/"),
        ],
    ),
    (
        "Database Engineer",
        &[
            ("Database Queries (SQL I)", "https://leetcode.com/studyplan/sql/"),
            ("Employees Earning More Than Their Managers", "https://leetcode.com/problems/employees-earning-more-than-their-managers/"),
            ("Department Highest Salary", "https://leetcode.com/problems/department-highest-salary/"),
        ],
    ),
    (
        "DevOps Engineer",
        &[
            ("Min Stack", "https://leetcode.com/problems/min-stack/"),
            ("Evaluate Reverse Polish Notation", "https://leetcode.com/problems/evaluate-reverse-polish-notation/"),
            ("Design Circular Queue", "https://leetcode.com/problems/design-circular-queue/"),
        ],
    ),
    (
        "Network Security Engineer",
        &[
            ("Network Delay Time", "https://leetcode.com/problems/network-delay-time/"),
            ("Evaluate Division", "https://leetcode.com/problems/evaluate-division/"),
            ("Redundant Connection", "https://leetcode.com/problems/redundant-connection/"),
        ],
    ),
    (
        "Ethical Hacker",
        &[
            ("Keys and Rooms", "https://leetcode.com/problems/keys-and-rooms/"),
            ("Word Ladder", "https://leetcode.com/problems/word-ladder/"),
            ("Open the Lock", "https://leetcode.com/problems/open-the-lock/"),
        ],
    ),
    (
        "Business Analyst",
        &[
            ("Range Sum Query - Immutable", "https://leetcode.com/problems/range-sum-query-immutable/"),
            ("Product of Array Except Self", "https://leetcode.com/problems/product-of-array-except-self/"),
            ("Pivot Index", "https://leetcode.com/problems/find-pivot-index/"),
        ],
    ),
    (
        "Automation Tester",
        &[
            ("Implement Queue using Stacks", "https://leetcode.com/problems/implement-queue-using-stacks/"),
            ("String to Integer (atoi)", "https://leetcode.com/problems/string-to-integer-atoi/"),
            ("Valid Sudoku", "https://leetcode.com/problems/valid-sudoku/"),
        ],
    ),
    (
        "PMO",
        &[
            ("Meeting Rooms II", "https://leetcode.com/problems/meeting-rooms-ii/"),
            ("Course Schedule II", "https://leetcode.com/problems/course-schedule-ii/"),
            ("Task Scheduler", "https://leetcode.com/problems/task-scheduler/"),
        ],
    ),
    (
        "Blockchain Developer",
        &[
            ("Valid Blockchain Transactions (custom-like)", "https://leetcode.com/problems/valid-parentheses/"),
            ("Encode and Decode Strings", "https://leetcode.com/problems/encode-and-decode-strings/"),
            ("Find Duplicate Subtrees", "https://leetcode.com/problems/find-duplicate-subtrees/"),
        ],
    ),
    (
        "ETL Developer",
        &[
            ("Data Stream as Disjoint Intervals", "https://leetcode.com/problems/data-stream-as-disjoint-intervals/"),
            ("Intersection of Two Arrays II", "https://leetcode.com/problems/intersection-of-two-arrays-ii/"),
            ("Find All Anagrams in a String", "https://leetcode.com/problems/find-all-anagrams-in-a-string/"),
        ],
    ),
    (
        "SAP Developer",
        &[
            ("Merge Intervals", "https://leetcode.com/problems/merge-intervals/"),
            ("Insert Interval", "https://leetcode.com/problems/insert-interval/"),
            ("Minimum Path Sum", "https://leetcode.com/problems/minimum-path-sum/"),
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLink {
    pub skill: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionLink {
    pub name: String,
    pub url: String,
}

/// Immutable lookup tables built once at startup.
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    skill_resources: HashMap<&'static str, &'static str>,
    practice_questions: HashMap<&'static str, QuestionSet>,
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ResourceCatalog {
    pub fn builtin() -> Self {
        ResourceCatalog {
            skill_resources: SKILL_RESOURCES.iter().copied().collect(),
            practice_questions: ROLE_PRACTICE_QUESTIONS.iter().copied().collect(),
        }
    }

    /// Learning URL for a skill, or `PLACEHOLDER_URL` when unmapped.
    pub fn learning_url(&self, skill: &str) -> &str {
        self.skill_resources
            .get(skill)
            .copied()
            .unwrap_or(PLACEHOLDER_URL)
    }

    pub fn learning_links(&self, skills: &[String]) -> Vec<SkillLink> {
        skills
            .iter()
            .map(|skill| SkillLink {
                skill: skill.clone(),
                url: self.learning_url(skill).to_string(),
            })
            .collect()
    }

    /// Practice questions for a role in curated order; empty when unmapped.
    pub fn practice_questions(&self, role: &str) -> Vec<QuestionLink> {
        self.practice_questions
            .get(role)
            .map(|questions| {
                questions
                    .iter()
                    .map(|(name, url)| QuestionLink {
                        name: name.to_string(),
                        url: url.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
