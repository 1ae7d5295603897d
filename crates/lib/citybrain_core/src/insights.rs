//! Rule-based insights over the chat log.
//!
//! Pure aggregation: given per-topic question counts, emit hotspot and
//! coverage insights with a human-readable recommendation each.

use serde::Serialize;

use crate::chat_log::TopicCount;

/// Topics with more questions than this are flagged as hotspots.
const HOTSPOT_THRESHOLD: i64 = 3;

/// Share of untagged questions (greetings and fallback replies) above which
/// a coverage gap is reported.
const COVERAGE_GAP_RATIO: f64 = 0.4;

/// One generated insight.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Insight {
    pub kind: String,
    pub message: String,
    pub recommendation: String,
}

/// Generate insights from per-topic counts.
///
/// Emits a `topic_hotspot` per topic over [`HOTSPOT_THRESHOLD`] questions and
/// a single `coverage_gap` when untagged questions dominate the log.
pub fn generate_insights(counts: &[TopicCount]) -> Vec<Insight> {
    let mut insights = Vec::new();

    let total: i64 = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return insights;
    }

    for entry in counts {
        let Some(topic) = &entry.topic else { continue };
        if entry.count > HOTSPOT_THRESHOLD {
            insights.push(Insight {
                kind: "topic_hotspot".into(),
                message: format!("{} questions about {topic} in the chat log", entry.count),
                recommendation: format!(
                    "Review open {topic} complaints and deploy a field team to investigate the root cause"
                ),
            });
        }
    }

    let untagged: i64 = counts
        .iter()
        .filter(|c| c.topic.is_none())
        .map(|c| c.count)
        .sum();
    let untagged_ratio = untagged as f64 / total as f64;
    if untagged_ratio > COVERAGE_GAP_RATIO {
        insights.push(Insight {
            kind: "coverage_gap".into(),
            message: format!(
                "{untagged}/{total} questions ({:.0}%) matched no known city service topic",
                untagged_ratio * 100.0
            ),
            recommendation: "Extend the keyword table to cover the services citizens are asking about".into(),
        });
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(topic: Option<&str>, count: i64) -> TopicCount {
        TopicCount {
            topic: topic.map(String::from),
            count,
        }
    }

    #[test]
    fn empty_log_yields_no_insights() {
        assert!(generate_insights(&[]).is_empty());
    }

    #[test]
    fn topic_over_threshold_is_a_hotspot() {
        let counts = vec![count(Some("garbage"), 5), count(Some("water"), 2)];
        let insights = generate_insights(&counts);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, "topic_hotspot");
        assert!(insights[0].message.contains("garbage"));
    }

    #[test]
    fn topic_at_threshold_is_not_flagged() {
        let counts = vec![count(Some("roads"), HOTSPOT_THRESHOLD)];
        assert!(generate_insights(&counts).is_empty());
    }

    #[test]
    fn mostly_untagged_log_reports_coverage_gap() {
        let counts = vec![count(None, 6), count(Some("water"), 2)];
        let insights = generate_insights(&counts);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, "coverage_gap");
        assert!(insights[0].message.contains("6/8"));
    }

    #[test]
    fn hotspot_and_coverage_gap_can_coexist() {
        let counts = vec![count(None, 10), count(Some("garbage"), 4)];
        let insights = generate_insights(&counts);
        let kinds: Vec<&str> = insights.iter().map(|i| i.kind.as_str()).collect();
        assert_eq!(kinds, vec!["topic_hotspot", "coverage_gap"]);
    }
}
