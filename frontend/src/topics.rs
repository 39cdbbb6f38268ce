use crate::content::ContentError;
use crate::entities::CyberAwarenessTopic;

/// Whether `topic` should stay in the list for the search box contents.
///
/// Case-insensitive substring match on name, short description or category.
/// An empty query keeps everything.
pub fn matches_query(topic: &CyberAwarenessTopic, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        &topic.topic_name,
        &topic.short_description,
        &topic.threat_category,
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_topics<'a>(topics: &'a [CyberAwarenessTopic], query: &str) -> Vec<&'a CyberAwarenessTopic> {
    topics.iter().filter(|t| matches_query(t, query)).collect()
}

/// Other topics in exactly the same category, first `limit` in store order.
pub fn related_topics(
    source: &CyberAwarenessTopic,
    all: &[CyberAwarenessTopic],
    limit: usize,
) -> Vec<CyberAwarenessTopic> {
    all.iter()
        .filter(|t| t.id != source.id && t.threat_category == source.threat_category)
        .take(limit)
        .cloned()
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryStyle {
    Fraud,
    IdentityTheft,
    Scam,
    Malware,
    Default,
}

impl CategoryStyle {
    pub fn for_category(category: Option<&str>) -> Self {
        match category.map(str::to_lowercase).as_deref() {
            Some("fraud") => CategoryStyle::Fraud,
            Some("identity theft") => CategoryStyle::IdentityTheft,
            Some("scam") => CategoryStyle::Scam,
            Some("malware") => CategoryStyle::Malware,
            _ => CategoryStyle::Default,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CategoryStyle::Fraud => "category-fraud",
            CategoryStyle::IdentityTheft => "category-identity-theft",
            CategoryStyle::Scam => "category-scam",
            CategoryStyle::Malware => "category-malware",
            CategoryStyle::Default => "category-default",
        }
    }
}

/// Shared by the list and detail pages.
pub const CATEGORY_CSS: &str = r#"
.category-badge {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 500;
    border: 1px solid;
}
.category-fraud { background: rgba(220, 38, 38, 0.1); color: #dc2626; border-color: rgba(220, 38, 38, 0.2); }
.category-identity-theft { background: rgba(120, 176, 255, 0.1); color: #3b7ddd; border-color: rgba(120, 176, 255, 0.2); }
.category-scam { background: rgba(167, 139, 250, 0.1); color: #7c5fd6; border-color: rgba(167, 139, 250, 0.2); }
.category-malware { background: rgba(187, 247, 208, 0.3); color: #2d3748; border-color: rgba(187, 247, 208, 0.4); }
.category-default { background: rgba(94, 234, 212, 0.1); color: #2d3748; border-color: rgba(94, 234, 212, 0.2); }
"#;

#[derive(Clone, Debug, PartialEq)]
pub enum TopicListState {
    Loading,
    Loaded(Vec<CyberAwarenessTopic>),
    Empty,
    Error(ContentError),
}

impl TopicListState {
    pub fn from_fetch(result: Result<Vec<CyberAwarenessTopic>, ContentError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => TopicListState::Empty,
            Ok(items) => TopicListState::Loaded(items),
            Err(e) => TopicListState::Error(e),
        }
    }
}

/// Body text under "No topics found".
pub fn no_results_message(query: &str) -> &'static str {
    if query.is_empty() {
        "No cyber awareness topics available yet"
    } else {
        "Try adjusting your search query"
    }
}

pub fn results_heading(query: &str, count: usize) -> String {
    if query.is_empty() {
        "All Topics".to_string()
    } else {
        format!("Search Results ({})", count)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    NotFound,
    Unavailable(ContentError),
    Loaded {
        topic: CyberAwarenessTopic,
        related: Vec<CyberAwarenessTopic>,
    },
}

impl DetailState {
    /// A missing record ends on the not-found page. Any other lookup failure
    /// means the store could not answer, which is shown as unavailable.
    pub fn from_lookup(
        lookup: Result<CyberAwarenessTopic, ContentError>,
        all: Result<Vec<CyberAwarenessTopic>, ContentError>,
        limit: usize,
    ) -> Self {
        match lookup {
            Ok(topic) => {
                let related = all
                    .map(|items| related_topics(&topic, &items, limit))
                    .unwrap_or_default();
                DetailState::Loaded { topic, related }
            }
            Err(ContentError::NotFound) => DetailState::NotFound,
            Err(e) => DetailState::Unavailable(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn topic(id: &str, name: Option<&str>, desc: Option<&str>, category: Option<&str>) -> CyberAwarenessTopic {
        CyberAwarenessTopic {
            id: id.into(),
            topic_name: name.map(Into::into),
            short_description: desc.map(Into::into),
            threat_category: category.map(Into::into),
            ..Default::default()
        }
    }

    fn store() -> Vec<CyberAwarenessTopic> {
        vec![
            topic("1", Some("SIM Swap"), Some("Porting your number"), Some("Fraud")),
            topic("2", Some("Phishing Mail"), Some("Fake bank emails"), Some("Scam")),
            topic("3", Some("UPI Collect Requests"), Some("Money pulled, not pushed"), Some("fraud")),
            topic("4", Some("Ransomware"), None, Some("Malware")),
            topic("5", None, None, None),
        ]
    }

    #[rstest]
    #[case("fraud")]
    #[case("FRAUD")]
    #[case("FrAuD")]
    fn filters_by_category_in_any_case(#[case] query: &str) {
        let topics = store();
        let ids: Vec<_> = filter_topics(&topics, query).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[rstest]
    #[case("sim", true)]
    #[case("porting", true)]
    #[case("fraud", true)]
    #[case("ransom", false)]
    fn matches_any_of_the_three_fields(#[case] query: &str, #[case] expected: bool) {
        let t = topic("1", Some("SIM Swap"), Some("Porting your number"), Some("Fraud"));
        assert_eq!(matches_query(&t, query), expected);
    }

    #[test]
    fn missing_fields_never_match_a_real_query() {
        let bare = topic("5", None, None, None);
        assert!(!matches_query(&bare, "a"));
        assert!(matches_query(&bare, ""));
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let topics = store();
        let ids: Vec<_> = filter_topics(&topics, "").iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn empty_store_says_nothing_is_available() {
        assert_eq!(TopicListState::from_fetch(Ok(vec![])), TopicListState::Empty);
        assert_eq!(no_results_message(""), "No cyber awareness topics available yet");
        assert_eq!(no_results_message("zzz"), "Try adjusting your search query");
    }

    #[test]
    fn fetch_failure_is_an_error_state() {
        let state = TopicListState::from_fetch(Err(ContentError::Status(503)));
        assert_eq!(state, TopicListState::Error(ContentError::Status(503)));
    }

    #[test]
    fn heading_counts_search_results() {
        assert_eq!(results_heading("", 5), "All Topics");
        assert_eq!(results_heading("scam", 1), "Search Results (1)");
    }

    #[test]
    fn related_topics_share_the_exact_category() {
        let scams = vec![
            topic("A", Some("A"), None, Some("Scam")),
            topic("B", Some("B"), None, Some("Scam")),
            topic("X", Some("X"), None, Some("scam")),
            topic("C", Some("C"), None, Some("Scam")),
            topic("D", Some("D"), None, Some("Scam")),
        ];
        let related = related_topics(&scams[0], &scams, 3);
        let ids: Vec<_> = related.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["B", "C", "D"]);
    }

    #[test]
    fn related_topics_respect_the_cap_and_skip_self() {
        let many: Vec<_> = (0..10)
            .map(|i| topic(&i.to_string(), None, None, Some("Scam")))
            .collect();
        let related = related_topics(&many[4], &many, 3);
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|t| t.id != "4"));
    }

    #[test]
    fn related_topics_with_few_matches() {
        let topics = vec![
            topic("A", None, None, Some("Scam")),
            topic("B", None, None, Some("Scam")),
            topic("C", None, None, Some("Scam")),
            topic("E", None, None, Some("Fraud")),
        ];
        let ids: Vec<_> = related_topics(&topics[0], &topics, 3).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, ["B", "C"]);
    }

    #[test]
    fn unknown_id_ends_on_not_found() {
        let state = DetailState::from_lookup(Err(ContentError::NotFound), Ok(store()), 3);
        assert_eq!(state, DetailState::NotFound);
    }

    #[rstest]
    #[case(ContentError::Network("offline".into()))]
    #[case(ContentError::Status(503))]
    #[case(ContentError::Decode("expected value".into()))]
    fn store_failure_is_not_reported_as_missing(#[case] error: ContentError) {
        let state = DetailState::from_lookup(Err(error.clone()), Err(error.clone()), 3);
        assert_ne!(state, DetailState::NotFound);
        assert_eq!(state, DetailState::Unavailable(error));
    }

    #[test]
    fn failed_collection_fetch_leaves_related_empty() {
        let source = store().remove(0);
        let state = DetailState::from_lookup(Ok(source.clone()), Err(ContentError::Network("down".into())), 3);
        assert_eq!(state, DetailState::Loaded { topic: source, related: vec![] });
    }

    #[rstest]
    #[case(Some("Fraud"), CategoryStyle::Fraud)]
    #[case(Some("IDENTITY THEFT"), CategoryStyle::IdentityTheft)]
    #[case(Some("scam"), CategoryStyle::Scam)]
    #[case(Some("Malware"), CategoryStyle::Malware)]
    #[case(Some("Phishing"), CategoryStyle::Default)]
    #[case(Some(""), CategoryStyle::Default)]
    #[case(None, CategoryStyle::Default)]
    fn category_styles_are_total(#[case] category: Option<&str>, #[case] expected: CategoryStyle) {
        assert_eq!(CategoryStyle::for_category(category), expected);
    }

    #[test]
    fn every_style_has_its_own_class() {
        let classes = [
            CategoryStyle::Fraud,
            CategoryStyle::IdentityTheft,
            CategoryStyle::Scam,
            CategoryStyle::Malware,
            CategoryStyle::Default,
        ]
        .map(CategoryStyle::class);
        let unique: std::collections::HashSet<_> = classes.iter().collect();
        assert_eq!(unique.len(), 5);
    }
}
