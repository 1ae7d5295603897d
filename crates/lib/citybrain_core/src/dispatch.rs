//! Chat dispatch — normalization, greeting lookup, keyword scan, fallback.
//!
//! The dispatcher is a pure function of the question and two static tables.
//! It never fails: empty and unrecognized input both resolve to the fixed
//! fallback reply.

/// Exact-phrase greetings, checked first against the normalized question.
const GREETINGS: &[(&str, &str)] = &[
    (
        "hi",
        "Hello! I'm CityBrain, your city services assistant. How can I help you today?",
    ),
    (
        "hello",
        "Hi there! Ask me about garbage, water supply, roads, streetlights, property tax or disaster alerts.",
    ),
    (
        "hey",
        "Hey! I'm here to help with city service issues. What's on your mind?",
    ),
    (
        "good morning",
        "Good morning! How can CityBrain assist you with city services today?",
    ),
    (
        "namaste",
        "Namaste! Tell me about any city service issue and I'll route it to the right department.",
    ),
];

/// Substring keywords scanned in declaration order; the first match wins.
///
/// Each entry carries a topic tag used when the exchange is persisted, so the
/// insights report can aggregate questions per city department.
const KEYWORDS: &[(&str, &str, &str)] = &[
    (
        "garbage",
        "garbage",
        "Garbage complaints are routed to the Sanitation department. A field team is dispatched to investigate collection gaps and overflowing bins in the reported ward.",
    ),
    (
        "water",
        "water",
        "Water supply issues go to the Water Works department. Please include your ward so engineers can check the distribution line for leakage or low pressure.",
    ),
    (
        "road",
        "roads",
        "Road damage reports are forwarded to the Public Works department for pothole repair and resurfacing prioritization.",
    ),
    (
        "traffic",
        "roads",
        "Traffic congestion data is shared with the Traffic Control cell. Signal timing and junction load are reviewed for the affected corridor.",
    ),
    (
        "streetlight",
        "electricity",
        "Streetlight outages are logged with the Electrical department. Faulty poles are usually restored within two working days.",
    ),
    (
        "electricity",
        "electricity",
        "Electricity supply issues are escalated to the Electrical department along with the distribution company for the area.",
    ),
    (
        "drain",
        "drainage",
        "Drainage and sewage blockages are sent to the Drainage cell. During monsoon these are treated as high priority to prevent waterlogging.",
    ),
    (
        "tax",
        "property",
        "Property tax questions are handled by the Revenue department. You can check dues and pay online through the citizen portal.",
    ),
    (
        "property",
        "property",
        "Property registry and valuation queries go to the Revenue department. Carry your property ID for faster processing.",
    ),
    (
        "disaster",
        "disaster",
        "Disaster alerts come from the Emergency Operations Center. High-severity zones trigger evacuation planning and resource deployment.",
    ),
    (
        "flood",
        "disaster",
        "Flood risk reports activate the Emergency Operations Center. Stay clear of low-lying areas and follow official evacuation advisories.",
    ),
];

/// Fixed reply when nothing in either table matches.
const FALLBACK: &str = "I can help with garbage, water supply, roads, streetlights, drainage, property tax and disaster alerts. Could you describe the issue in a bit more detail?";

/// Result of dispatching one question.
///
/// `topic` is `Some` only for keyword matches; greetings and the fallback
/// carry no topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    pub answer: &'static str,
    pub topic: Option<&'static str>,
}

/// Produce a deterministic answer for a free-text question.
///
/// Total over all string inputs: trim + lowercase, exact greeting lookup,
/// then an in-order keyword scan, then the fixed fallback.
pub fn dispatch(question: &str) -> Reply {
    let normalized = question.trim().to_lowercase();

    for (phrase, answer) in GREETINGS {
        if normalized == *phrase {
            return Reply {
                answer,
                topic: None,
            };
        }
    }

    for (keyword, topic, answer) in KEYWORDS {
        if normalized.contains(keyword) {
            return Reply {
                answer,
                topic: Some(topic),
            };
        }
    }

    Reply {
        answer: FALLBACK,
        topic: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_matches_exactly() {
        let reply = dispatch("hi");
        assert_eq!(reply.answer, GREETINGS[0].1);
        assert_eq!(reply.topic, None);
    }

    #[test]
    fn greeting_is_case_insensitive_and_trimmed() {
        assert_eq!(dispatch("Hi"), dispatch("hi"));
        assert_eq!(dispatch("  HELLO  "), dispatch("hello"));
        assert_eq!(dispatch("Good Morning"), dispatch("good morning"));
    }

    #[test]
    fn keyword_matches_anywhere_in_question() {
        let reply = dispatch("There is a garbage problem");
        assert_eq!(reply.topic, Some("garbage"));
        assert!(reply.answer.contains("Sanitation"));
    }

    #[test]
    fn first_declared_keyword_wins() {
        // "garbage" is declared before "water"
        let reply = dispatch("garbage floating in the water line");
        assert_eq!(reply.topic, Some("garbage"));
    }

    #[test]
    fn unmatched_input_returns_fallback() {
        let reply = dispatch("xyz123");
        assert_eq!(reply.answer, FALLBACK);
        assert_eq!(reply.topic, None);
    }

    #[test]
    fn empty_input_returns_fallback() {
        assert_eq!(dispatch("").answer, FALLBACK);
        assert_eq!(dispatch("   ").answer, FALLBACK);
    }

    #[test]
    fn greeting_embedded_in_longer_sentence_is_not_exact() {
        // "hi" inside a sentence is not an exact greeting; it may still hit
        // a keyword or the fallback.
        let reply = dispatch("hi, my streetlight is broken");
        assert_eq!(reply.topic, Some("electricity"));
    }
}
