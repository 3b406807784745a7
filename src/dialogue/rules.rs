// ABOUTME: Keyword rule tables — ordered substring rules that classify a lower-cased query.
// ABOUTME: First matching rule wins; table order is the priority order.

use super::types::{Intent, Region};

/// One entry in an ordered keyword table.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T> {
    pub target: T,
    pub keywords: &'static [&'static str],
}

impl<T: Copy> Rule<T> {
    /// Whether any keyword occurs as a substring of the (already lower-cased) query.
    pub fn matches(&self, lower: &str) -> bool {
        self.keywords.iter().any(|kw| lower.contains(kw))
    }
}

/// Intent rules evaluated while the conversation is idle.
///
/// Matching is plain substring containment, so "hi" also fires inside
/// "this" and "profile" counts as a resume request. Order matters.
pub const INTENT_RULES: &[Rule<Intent>] = &[
    Rule {
        target: Intent::Resume,
        keywords: &["resume", "cv", "download", "profile"],
    },
    Rule {
        target: Intent::Skills,
        keywords: &["skill", "stack", "tech"],
    },
    Rule {
        target: Intent::Projects,
        keywords: &["project", "work"],
    },
    Rule {
        target: Intent::Education,
        keywords: &["education", "study", "degree"],
    },
    Rule {
        target: Intent::Contact,
        keywords: &["contact", "email", "hire"],
    },
    Rule {
        target: Intent::Experience,
        keywords: &["experience", "job"],
    },
    Rule {
        target: Intent::Greeting,
        keywords: &["hello", "hi"],
    },
];

/// Region rules evaluated while awaiting the resume version. UK is checked first.
pub const REGION_RULES: &[Rule<Region>] = &[
    Rule {
        target: Region::UnitedKingdom,
        keywords: &["uk", "united kingdom"],
    },
    Rule {
        target: Region::India,
        keywords: &["india"],
    },
];

fn first_match<T: Copy>(rules: &[Rule<T>], lower: &str) -> Option<T> {
    rules.iter().find(|r| r.matches(lower)).map(|r| r.target)
}

/// Classify a lower-cased query, falling back when no rule matches.
pub fn classify(lower: &str) -> Intent {
    first_match(INTENT_RULES, lower).unwrap_or(Intent::Fallback)
}

/// Pick the resume region named in a lower-cased query, if any.
pub fn match_region(lower: &str) -> Option<Region> {
    first_match(REGION_RULES, lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_rule_matches_its_keywords() {
        for rule in INTENT_RULES {
            for kw in rule.keywords {
                assert!(rule.matches(kw), "{:?} should match {:?}", rule.target, kw);
            }
        }
    }

    #[test]
    fn table_order_is_priority_order() {
        let order: Vec<Intent> = INTENT_RULES.iter().map(|r| r.target).collect();
        assert_eq!(
            order,
            vec![
                Intent::Resume,
                Intent::Skills,
                Intent::Projects,
                Intent::Education,
                Intent::Contact,
                Intent::Experience,
                Intent::Greeting,
            ]
        );
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        // "download" (resume) beats "project".
        assert_eq!(classify("download the project list"), Intent::Resume);
        // "tech" (skills) beats "job".
        assert_eq!(classify("what tech do you use at your job"), Intent::Skills);
        // "project" beats "hello".
        assert_eq!(classify("hello, tell me about your project"), Intent::Projects);
    }

    #[test]
    fn substring_matching_is_literal() {
        assert_eq!(classify("this"), Intent::Greeting);
        assert_eq!(classify("my linkedin profile"), Intent::Resume);
        assert_eq!(classify("networking"), Intent::Projects);
    }

    #[test]
    fn unmatched_query_falls_back() {
        assert_eq!(classify("xyzabc"), Intent::Fallback);
        assert_eq!(classify(""), Intent::Fallback);
    }

    #[test]
    fn uk_checked_before_india() {
        assert_eq!(match_region("uk or india"), Some(Region::UnitedKingdom));
        assert_eq!(match_region("india please"), Some(Region::India));
        assert_eq!(match_region("the united kingdom one"), Some(Region::UnitedKingdom));
        assert_eq!(match_region("not sure"), None);
    }
}
