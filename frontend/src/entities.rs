use chrono::{DateTime, Datelike, NaiveDate};
use serde::Deserialize;

/// A cyber-awareness topic as served by the `cyberawarenesstopics` CMS collection.
///
/// Only `id` is guaranteed. Every other field may be missing and the pages
/// fall back to placeholder copy when it is.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct CyberAwarenessTopic {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default)]
    pub created_at: Option<String>,
    #[serde(rename = "_updatedDate", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "topicName", default)]
    pub topic_name: Option<String>,
    #[serde(rename = "shortDescription", default)]
    pub short_description: Option<String>,
    #[serde(rename = "detailedContent", default)]
    pub detailed_content: Option<String>,
    #[serde(rename = "topicImage", default)]
    pub topic_image: Option<String>,
    #[serde(rename = "threatCategory", default)]
    pub threat_category: Option<String>,
    #[serde(rename = "lastUpdated", default)]
    pub last_updated: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TopicsResponse {
    #[serde(default)]
    pub items: Vec<CyberAwarenessTopic>,
}

impl CyberAwarenessTopic {
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.topic_name.as_deref().unwrap_or(fallback)
    }

    pub fn last_updated_date(&self) -> Option<NaiveDate> {
        self.last_updated.as_deref().and_then(parse_display_date)
    }

    /// Card form, e.g. `12 Mar 2025`.
    pub fn last_updated_short(&self) -> Option<String> {
        self.last_updated_date().map(|d| format_date(d, MonthStyle::Short))
    }

    /// Detail page form, e.g. `12 March 2025`.
    pub fn last_updated_long(&self) -> Option<String> {
        self.last_updated_date().map(|d| format_date(d, MonthStyle::Long))
    }
}

/// The CMS stores dates either as full timestamps or as bare dates.
pub fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MonthStyle {
    Short,
    Long,
}

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Day-month-year in the Indian English style (`en-IN`). The short month
/// table exists because en-IN abbreviates September as "Sept", not `%b`'s "Sep".
pub fn format_date(date: NaiveDate, style: MonthStyle) -> String {
    match style {
        MonthStyle::Short => format!(
            "{} {} {}",
            date.day(),
            SHORT_MONTHS[date.month0() as usize],
            date.year()
        ),
        MonthStyle::Long => date.format("%-d %B %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_cms_field_names() {
        let topic: CyberAwarenessTopic = serde_json::from_value(json!({
            "_id": "t-1",
            "_createdDate": "2025-01-02T10:00:00Z",
            "topicName": "SIM Swap Fraud",
            "shortDescription": "Criminals port your number",
            "threatCategory": "Fraud",
            "lastUpdated": "2025-03-12T08:30:00.000Z"
        }))
        .unwrap();

        assert_eq!(topic.id, "t-1");
        assert_eq!(topic.topic_name.as_deref(), Some("SIM Swap Fraud"));
        assert_eq!(topic.threat_category.as_deref(), Some("Fraud"));
        assert!(topic.detailed_content.is_none());
        assert!(topic.topic_image.is_none());
    }

    #[test]
    fn tolerates_a_bare_record() {
        let topic: CyberAwarenessTopic = serde_json::from_str(r#"{"_id":"x"}"#).unwrap();
        assert_eq!(topic.name_or("Cyber threat topic"), "Cyber threat topic");
        assert_eq!(topic.last_updated_short(), None);
    }

    #[test]
    fn collection_response_defaults_to_empty() {
        let response: TopicsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn formats_dates_in_regional_style() {
        let topic = CyberAwarenessTopic {
            id: "a".into(),
            last_updated: Some("2025-03-12".into()),
            ..Default::default()
        };
        assert_eq!(topic.last_updated_short().as_deref(), Some("12 Mar 2025"));
        assert_eq!(topic.last_updated_long().as_deref(), Some("12 March 2025"));

        let september = NaiveDate::from_ymd_opt(2024, 9, 5).unwrap();
        assert_eq!(format_date(september, MonthStyle::Short), "5 Sept 2024");
        assert_eq!(format_date(september, MonthStyle::Long), "5 September 2024");
    }

    #[test]
    fn unparseable_date_counts_as_missing() {
        assert_eq!(parse_display_date("last tuesday"), None);
    }
}
