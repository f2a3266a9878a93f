//! Keyword category classification.
//!
//! Every downstream consumer (scorer, gap type, content suggestion, LLM
//! strategy, simulation) switches on the same [`KeywordProfile`], each with
//! its own priority order over [`KeywordCategory`].

/// A semantic tag a keyword can carry. A keyword may carry several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// "first time", "what to expect"
    FirstTimer,
    /// "parking"
    Parking,
    /// "tickets", "cheap"
    Tickets,
    /// "seating"
    Seating,
    /// "arena"
    Arena,
}

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 5] = [
        Self::FirstTimer,
        Self::Parking,
        Self::Tickets,
        Self::Seating,
        Self::Arena,
    ];

    /// Substrings that put a keyword in this category.
    pub fn triggers(&self) -> &'static [&'static str] {
        match self {
            Self::FirstTimer => &["first time", "what to expect"],
            Self::Parking => &["parking"],
            Self::Tickets => &["tickets", "cheap"],
            Self::Seating => &["seating"],
            Self::Arena => &["arena"],
        }
    }
}

/// The set of categories a keyword falls into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordProfile {
    keyword: String,
    categories: Vec<KeywordCategory>,
}

impl KeywordProfile {
    /// Classify a keyword. Matching is case-insensitive.
    pub fn classify(keyword: &str) -> Self {
        let lowered = keyword.to_lowercase();
        let categories = KeywordCategory::ALL
            .into_iter()
            .filter(|c| c.triggers().iter().any(|t| lowered.contains(t)))
            .collect();

        Self {
            keyword: keyword.to_string(),
            categories,
        }
    }

    /// The keyword as submitted.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn has(&self, category: KeywordCategory) -> bool {
        self.categories.contains(&category)
    }

    /// The first category of `priority` this keyword carries.
    pub fn first_of(&self, priority: &[KeywordCategory]) -> Option<KeywordCategory> {
        priority.iter().copied().find(|c| self.has(*c))
    }

    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use KeywordCategory::*;

    #[test]
    fn test_single_category() {
        let profile = KeywordProfile::classify("bruins parking");
        assert_eq!(profile.categories(), &[Parking]);
    }

    #[test]
    fn test_multiple_categories() {
        let profile = KeywordProfile::classify("cheap tickets and parking at the arena");
        assert!(profile.has(Parking));
        assert!(profile.has(Tickets));
        assert!(profile.has(Arena));
        assert!(!profile.has(FirstTimer));
        assert!(!profile.has(Seating));
    }

    #[test]
    fn test_case_insensitive() {
        let profile = KeywordProfile::classify("What To Expect at TD Garden");
        assert!(profile.has(FirstTimer));
    }

    #[test]
    fn test_first_time_phrase() {
        assert!(KeywordProfile::classify("first time at td garden").has(FirstTimer));
        // "first" alone is not enough
        assert!(!KeywordProfile::classify("first period score").has(FirstTimer));
    }

    #[test]
    fn test_singular_ticket_is_not_tickets() {
        assert!(!KeywordProfile::classify("bruins ticket").has(Tickets));
        assert!(KeywordProfile::classify("cheap bruins seats").has(Tickets));
    }

    #[test]
    fn test_first_of_respects_priority() {
        let profile = KeywordProfile::classify("parking and seating");
        assert_eq!(profile.first_of(&[Seating, Parking]), Some(Seating));
        assert_eq!(profile.first_of(&[Parking, Seating]), Some(Parking));
        assert_eq!(profile.first_of(&[FirstTimer, Tickets]), None);
    }

    #[test]
    fn test_no_categories() {
        let profile = KeywordProfile::classify("bruins schedule");
        assert!(profile.categories().is_empty());
        assert_eq!(profile.keyword(), "bruins schedule");
    }
}
