//! Rule-based career recommendations.
//!
//! A [`RecommendationEngine`] holds an ordered table of [`Rule`]s. Each rule
//! tests the presence set (top interests and top aptitudes combined) and
//! contributes a fixed list of career paths when it matches. Every matching
//! rule fires; the combined output is deduplicated in first-seen order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Aptitude, Interest, SubCategory};
use crate::scoring::ScoreResult;

/// Message shown by callers when no rule produced a recommendation.
pub const BALANCED_PROFILE_MESSAGE: &str = "Your profile is balanced across several areas. \
     Explore a range of fields and speak with a counsellor to narrow down your options.";

/// A conjunctive rule over the presence set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Short identifier, used in logs and rule files.
    pub name: String,
    /// Every code here must be present.
    #[serde(default)]
    pub all_of: Vec<SubCategory>,
    /// No code here may be present.
    #[serde(default)]
    pub none_of: Vec<SubCategory>,
    /// Career paths appended on match.
    pub careers: Vec<String>,
}

impl Rule {
    pub fn matches(&self, present: &HashSet<SubCategory>) -> bool {
        self.all_of.iter().all(|code| present.contains(code))
            && !self.none_of.iter().any(|code| present.contains(code))
    }
}

/// Ordered rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEngine {
    rules: Vec<Rule>,
}

impl RecommendationEngine {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The shipped rule table.
    pub fn standard() -> Self {
        let rules = STANDARD_RULES
            .iter()
            .map(|rule| Rule {
                name: rule.name.to_string(),
                all_of: rule.all_of.to_vec(),
                none_of: rule.none_of.to_vec(),
                careers: rule.careers.iter().map(|c| c.to_string()).collect(),
            })
            .collect();
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Career paths for the given top interests and aptitudes.
    ///
    /// An empty result means no strong match; callers fall back to
    /// [`BALANCED_PROFILE_MESSAGE`].
    pub fn recommend(&self, top_interests: &[Interest], top_aptitudes: &[Aptitude]) -> Vec<String> {
        let present = top_interests
            .iter()
            .copied()
            .map(SubCategory::from)
            .chain(top_aptitudes.iter().copied().map(SubCategory::from));
        self.recommend_present(present)
    }

    pub fn recommend_for(&self, scores: &ScoreResult) -> Vec<String> {
        self.recommend(&scores.top_interests, &scores.top_aptitudes)
    }

    /// Evaluate every rule against an arbitrary presence set.
    pub fn recommend_present<I>(&self, present: I) -> Vec<String>
    where
        I: IntoIterator<Item = SubCategory>,
    {
        let present: HashSet<SubCategory> = present.into_iter().collect();
        let mut seen = HashSet::new();
        let mut careers = Vec::new();

        for rule in self.rules.iter().filter(|rule| rule.matches(&present)) {
            tracing::trace!(rule = %rule.name, "recommendation rule matched");
            for career in &rule.careers {
                if seen.insert(career.as_str()) {
                    careers.push(career.clone());
                }
            }
        }

        careers
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::standard()
    }
}

struct StaticRule {
    name: &'static str,
    all_of: &'static [SubCategory],
    none_of: &'static [SubCategory],
    careers: &'static [&'static str],
}

const REALISTIC: SubCategory = SubCategory::Interest(Interest::Realistic);
const INVESTIGATIVE: SubCategory = SubCategory::Interest(Interest::Investigative);
const ARTISTIC: SubCategory = SubCategory::Interest(Interest::Artistic);
const SOCIAL: SubCategory = SubCategory::Interest(Interest::Social);
const ENTERPRISING: SubCategory = SubCategory::Interest(Interest::Enterprising);
const CONVENTIONAL: SubCategory = SubCategory::Interest(Interest::Conventional);
const LOGICAL: SubCategory = SubCategory::Aptitude(Aptitude::Logical);
const NUMERICAL: SubCategory = SubCategory::Aptitude(Aptitude::Numerical);
const VERBAL: SubCategory = SubCategory::Aptitude(Aptitude::Verbal);
const SPATIAL: SubCategory = SubCategory::Aptitude(Aptitude::Spatial);

const STANDARD_RULES: &[StaticRule] = &[
    StaticRule {
        name: "investigative-realistic",
        all_of: &[INVESTIGATIVE, REALISTIC],
        none_of: &[],
        careers: &["Engineering", "Robotics", "Pilot", "Biotechnology"],
    },
    StaticRule {
        name: "investigative-artistic",
        all_of: &[INVESTIGATIVE, ARTISTIC],
        none_of: &[],
        careers: &["Architecture", "Product Design", "UX/UI Design"],
    },
    StaticRule {
        name: "investigative-social",
        all_of: &[INVESTIGATIVE, SOCIAL],
        none_of: &[],
        careers: &["Medicine", "Psychology", "Nursing", "Public Health"],
    },
    StaticRule {
        name: "investigative",
        all_of: &[INVESTIGATIVE],
        none_of: &[REALISTIC, ARTISTIC, SOCIAL],
        careers: &["Research Scientist", "Data Analyst", "Cybersecurity"],
    },
    StaticRule {
        name: "artistic-enterprising",
        all_of: &[ARTISTIC, ENTERPRISING],
        none_of: &[],
        careers: &[
            "Advertising",
            "Media Management",
            "Entrepreneurship",
            "Fashion Management",
        ],
    },
    StaticRule {
        name: "artistic-social",
        all_of: &[ARTISTIC, SOCIAL],
        none_of: &[],
        careers: &["Teaching Arts", "Therapy", "Journalism"],
    },
    StaticRule {
        name: "artistic",
        all_of: &[ARTISTIC],
        none_of: &[],
        careers: &["Graphic Design", "Content Creation", "Film-making", "Animation"],
    },
    StaticRule {
        name: "social-enterprising",
        all_of: &[SOCIAL, ENTERPRISING],
        none_of: &[],
        careers: &["Human Resources", "Event Management", "Public Relations"],
    },
    StaticRule {
        name: "social",
        all_of: &[SOCIAL],
        none_of: &[],
        careers: &["Social Work", "Counseling", "Teaching", "Hospitality"],
    },
    StaticRule {
        name: "enterprising-conventional",
        all_of: &[ENTERPRISING, CONVENTIONAL],
        none_of: &[],
        careers: &["Business Administration", "Finance", "Accounting", "Banking"],
    },
    StaticRule {
        name: "enterprising",
        all_of: &[ENTERPRISING],
        none_of: &[],
        careers: &["Sales", "Marketing", "Management", "Real Estate"],
    },
    StaticRule {
        name: "conventional",
        all_of: &[CONVENTIONAL],
        none_of: &[],
        careers: &[
            "Accounting",
            "Banking",
            "Data Entry",
            "Logistics",
            "Library Science",
        ],
    },
    StaticRule {
        name: "realistic",
        all_of: &[REALISTIC],
        none_of: &[],
        careers: &[
            "Mechanical Trades",
            "Agriculture",
            "Armed Forces",
            "Sports Science",
        ],
    },
    StaticRule {
        name: "numerical-logical",
        all_of: &[NUMERICAL, LOGICAL],
        none_of: &[],
        careers: &["Data Science", "Actuarial Science"],
    },
    StaticRule {
        name: "verbal-social",
        all_of: &[VERBAL, SOCIAL],
        none_of: &[],
        careers: &["Law", "Mass Communication"],
    },
    StaticRule {
        name: "spatial-realistic",
        all_of: &[SPATIAL, REALISTIC],
        none_of: &[],
        careers: &["Civil Engineering", "Interior Design"],
    },
];
