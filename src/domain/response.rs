use crate::domain::alert::{AlertDraft, AlertSeverity};

/// Category a concerning question/response pair is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Wellness,
    Sleep,
    Pain,
    Medication,
    Energy,
    Hydration,
    Activity,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Wellness => "wellness",
            Topic::Sleep => "sleep",
            Topic::Pain => "pain",
            Topic::Medication => "medication",
            Topic::Energy => "energy",
            Topic::Hydration => "hydration",
            Topic::Activity => "activity",
        }
    }
}

// Responses that flag concern on ordinary questions.
const NEGATIVE_RESPONSES: [&str; 7] = [
    "not great",
    "not good",
    "poor",
    "no",
    "not really",
    "bad",
    "terrible",
];

// For pain questions an affirmative answer is the concerning one.
const AFFIRMATIVE_PAIN_RESPONSES: [&str; 6] =
    ["yes", "yeah", "yep", "quite a bit", "a lot", "severe"];

struct TopicRoute {
    keywords: &'static [&'static str],
    topic: Topic,
    severity: AlertSeverity,
    title: &'static str,
    metric: &'static str,
}

// Evaluated top to bottom against the question text; the first route whose
// keyword set matches wins. Pain is the only alert-severity outcome.
const TOPIC_ROUTES: [TopicRoute; 7] = [
    TopicRoute {
        keywords: &["feeling", "how are you"],
        topic: Topic::Wellness,
        severity: AlertSeverity::Warning,
        title: "Wellness Check Concern",
        metric: "mood",
    },
    TopicRoute {
        keywords: &["sleep"],
        topic: Topic::Sleep,
        severity: AlertSeverity::Warning,
        title: "Sleep Quality Concern",
        metric: "sleep",
    },
    TopicRoute {
        keywords: &["pain", "discomfort"],
        topic: Topic::Pain,
        severity: AlertSeverity::Alert,
        title: "Pain or Discomfort Reported",
        metric: "pain",
    },
    TopicRoute {
        keywords: &["medication"],
        topic: Topic::Medication,
        severity: AlertSeverity::Warning,
        title: "Medication Adherence Concern",
        metric: "medication",
    },
    TopicRoute {
        keywords: &["energy"],
        topic: Topic::Energy,
        severity: AlertSeverity::Warning,
        title: "Low Energy Reported",
        metric: "energy",
    },
    TopicRoute {
        keywords: &["hydrat", "water"],
        topic: Topic::Hydration,
        severity: AlertSeverity::Info,
        title: "Hydration Reminder Needed",
        metric: "hydration",
    },
    TopicRoute {
        keywords: &["walk", "exercise"],
        topic: Topic::Activity,
        severity: AlertSeverity::Info,
        title: "Activity Level Concern",
        metric: "activity",
    },
];

/// Classify a free-text check-in answer. Returns at most one draft: the
/// response must first register as concerning, then the question must route
/// to a known topic. Matching is case-insensitive substring containment
/// throughout.
pub fn classify(question: &str, response: &str) -> Option<(Topic, AlertDraft)> {
    let question_lower = question.to_lowercase();
    let response_lower = response.to_lowercase();

    let is_pain_question =
        question_lower.contains("pain") || question_lower.contains("discomfort");

    let concerning = if is_pain_question {
        AFFIRMATIVE_PAIN_RESPONSES
            .iter()
            .any(|term| response_lower.contains(term))
    } else {
        NEGATIVE_RESPONSES
            .iter()
            .any(|term| response_lower.contains(term))
    };

    if !concerning {
        return None;
    }

    let route = TOPIC_ROUTES.iter().find(|route| {
        route
            .keywords
            .iter()
            .any(|keyword| question_lower.contains(keyword))
    })?;

    Some((
        route.topic,
        AlertDraft {
            severity: route.severity,
            title: route.title.to_string(),
            message: message_for(route.topic, response),
            metric: route.metric,
            value: response.to_string(),
        },
    ))
}

fn message_for(topic: Topic, response: &str) -> String {
    match topic {
        Topic::Wellness => format!(
            "Parent reported feeling \"{response}\" when asked about their wellbeing"
        ),
        Topic::Sleep => format!("Parent reported \"{response}\" when asked about sleep"),
        Topic::Pain => {
            format!("Parent reported \"{response}\" when asked about pain or discomfort")
        }
        Topic::Medication => {
            format!("Parent reported \"{response}\" when asked about medications")
        }
        Topic::Energy => format!("Parent reported \"{response}\" energy level"),
        Topic::Hydration => {
            format!("Parent reported \"{response}\" when asked about hydration")
        }
        Topic::Activity => {
            format!("Parent reported \"{response}\" when asked about physical activity")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pain_question_with_affirmative_answer() {
        let (topic, draft) = classify("How is your pain today?", "yes").unwrap();
        assert_eq!(topic, Topic::Pain);
        assert_eq!(draft.severity, AlertSeverity::Alert);
        assert_eq!(draft.title, "Pain or Discomfort Reported");
        assert_eq!(draft.value, "yes");
    }

    #[test]
    fn test_affirmative_is_not_concerning_outside_pain() {
        // "yes" only flags concern under the pain/discomfort branch.
        assert!(classify("Did you take your medication?", "yes").is_none());
        assert!(classify("How are you feeling?", "yes, great").is_none());
    }

    #[test]
    fn test_pain_question_with_denial() {
        // The negative lexicon does not apply on the pain branch.
        assert!(classify("Any pain or discomfort?", "none at all").is_none());
    }

    #[test]
    fn test_wellness_route() {
        let (topic, draft) = classify("How are you feeling?", "not great").unwrap();
        assert_eq!(topic, Topic::Wellness);
        assert_eq!(draft.severity, AlertSeverity::Warning);
        assert_eq!(draft.metric, "mood");
        assert_eq!(
            draft.message,
            "Parent reported feeling \"not great\" when asked about their wellbeing"
        );
    }

    #[test]
    fn test_exercise_routes_to_activity_info() {
        let (topic, draft) = classify("Did you exercise?", "not really").unwrap();
        assert_eq!(topic, Topic::Activity);
        assert_eq!(draft.severity, AlertSeverity::Info);
    }

    #[test]
    fn test_sleep_and_hydration_routes() {
        let (topic, draft) = classify("How did you sleep?", "terrible").unwrap();
        assert_eq!(topic, Topic::Sleep);
        assert_eq!(draft.severity, AlertSeverity::Warning);

        let (topic, draft) = classify("Have you been drinking enough water?", "not really").unwrap();
        assert_eq!(topic, Topic::Hydration);
        assert_eq!(draft.severity, AlertSeverity::Info);
    }

    #[test]
    fn test_first_route_wins() {
        // "feeling" outranks "sleep" when both keywords appear.
        let (topic, _) = classify("How are you feeling about your sleep?", "poor").unwrap();
        assert_eq!(topic, Topic::Wellness);
    }

    #[test]
    fn test_concerning_without_keyword_emits_nothing() {
        assert!(classify("Did you enjoy the visit?", "not really").is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let (topic, _) = classify("ANY PAIN TODAY?", "YES").unwrap();
        assert_eq!(topic, Topic::Pain);
    }
}
