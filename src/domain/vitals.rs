use crate::domain::alert::{AlertDraft, AlertSeverity};
use crate::domain::thresholds::ThresholdSet;

/// The vital-sign slice of one health sample, as the evaluator sees it.
/// An absent metric is never alert-worthy on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleVitals {
    pub heart_rate: Option<i32>,
    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub activity_level: Option<i32>,
}

/// Evaluate one sample against the resolved thresholds. Each metric is
/// checked independently, in presentation order: heart rate, blood
/// pressure, sleep, activity. Total over its input domain; every branch
/// has a "no draft" fallthrough.
pub fn evaluate(vitals: &SampleVitals, thresholds: &ThresholdSet) -> Vec<AlertDraft> {
    let mut drafts = Vec::new();

    if let Some(heart_rate) = vitals.heart_rate {
        if heart_rate > thresholds.heart_rate_max {
            drafts.push(AlertDraft {
                severity: AlertSeverity::Warning,
                title: "Elevated Heart Rate".to_string(),
                message: format!(
                    "Heart rate is {} bpm, above normal range ({}-{} bpm)",
                    heart_rate, thresholds.heart_rate_min, thresholds.heart_rate_max
                ),
                metric: "heartRate",
                value: heart_rate.to_string(),
            });
        } else if heart_rate < thresholds.heart_rate_min {
            drafts.push(AlertDraft {
                severity: AlertSeverity::Warning,
                title: "Low Heart Rate".to_string(),
                message: format!(
                    "Heart rate is {} bpm, below normal range ({}-{} bpm)",
                    heart_rate, thresholds.heart_rate_min, thresholds.heart_rate_max
                ),
                metric: "heartRate",
                value: heart_rate.to_string(),
            });
        }
    }

    // Blood pressure is only judged when both halves were measured.
    if let (Some(systolic), Some(diastolic)) = (
        vitals.blood_pressure_systolic,
        vitals.blood_pressure_diastolic,
    ) {
        if systolic > thresholds.bp_systolic_max || diastolic > thresholds.bp_diastolic_max {
            drafts.push(AlertDraft {
                severity: AlertSeverity::Alert,
                title: "High Blood Pressure".to_string(),
                message: format!(
                    "Blood pressure is {}/{}, above target range ({}/{}) mmHg",
                    systolic, diastolic, thresholds.bp_systolic_max, thresholds.bp_diastolic_max
                ),
                metric: "bloodPressure",
                value: format!("{}/{}", systolic, diastolic),
            });
        }
    }

    if let Some(sleep_hours) = vitals.sleep_hours {
        if sleep_hours < thresholds.sleep_hours_min {
            drafts.push(AlertDraft {
                severity: AlertSeverity::Warning,
                title: "Insufficient Sleep".to_string(),
                message: format!(
                    "Only {} hours of sleep, below minimum ({}) hours",
                    sleep_hours, thresholds.sleep_hours_min
                ),
                metric: "sleep",
                value: sleep_hours.to_string(),
            });
        }
    }

    if let Some(activity_level) = vitals.activity_level {
        if activity_level < thresholds.activity_level_min {
            drafts.push(AlertDraft {
                severity: AlertSeverity::Warning,
                title: "Low Activity Level".to_string(),
                message: format!(
                    "Activity level is {}, below minimum ({})",
                    activity_level, thresholds.activity_level_min
                ),
                metric: "activity",
                value: activity_level.to_string(),
            });
        }
    }

    drafts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> ThresholdSet {
        ThresholdSet::default()
    }

    #[test]
    fn test_elevated_heart_rate() {
        let vitals = SampleVitals {
            heart_rate: Some(130),
            ..Default::default()
        };
        let drafts = evaluate(&vitals, &defaults());

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Elevated Heart Rate");
        assert_eq!(drafts[0].severity, AlertSeverity::Warning);
        assert_eq!(drafts[0].metric, "heartRate");
        assert_eq!(drafts[0].value, "130");
        assert!(drafts[0].message.contains("60-100 bpm"));
    }

    #[test]
    fn test_low_heart_rate() {
        let vitals = SampleVitals {
            heart_rate: Some(45),
            ..Default::default()
        };
        let drafts = evaluate(&vitals, &defaults());

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Low Heart Rate");
        assert_eq!(drafts[0].value, "45");
    }

    #[test]
    fn test_heart_rate_band_is_inclusive() {
        for rate in [60, 80, 100] {
            let vitals = SampleVitals {
                heart_rate: Some(rate),
                ..Default::default()
            };
            assert!(evaluate(&vitals, &defaults()).is_empty(), "rate {rate}");
        }
    }

    #[test]
    fn test_blood_pressure_needs_both_halves() {
        let vitals = SampleVitals {
            blood_pressure_systolic: Some(180),
            ..Default::default()
        };
        assert!(evaluate(&vitals, &defaults()).is_empty());

        let vitals = SampleVitals {
            blood_pressure_diastolic: Some(110),
            ..Default::default()
        };
        assert!(evaluate(&vitals, &defaults()).is_empty());
    }

    #[test]
    fn test_blood_pressure_fires_on_either_bound() {
        let high_systolic = SampleVitals {
            blood_pressure_systolic: Some(150),
            blood_pressure_diastolic: Some(80),
            ..Default::default()
        };
        let drafts = evaluate(&high_systolic, &defaults());
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].severity, AlertSeverity::Alert);
        assert_eq!(drafts[0].title, "High Blood Pressure");
        assert_eq!(drafts[0].value, "150/80");

        let high_diastolic = SampleVitals {
            blood_pressure_systolic: Some(120),
            blood_pressure_diastolic: Some(95),
            ..Default::default()
        };
        let drafts = evaluate(&high_diastolic, &defaults());
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].value, "120/95");
    }

    #[test]
    fn test_sleep_and_activity_minimums() {
        let vitals = SampleVitals {
            sleep_hours: Some(4.5),
            activity_level: Some(10),
            ..Default::default()
        };
        let drafts = evaluate(&vitals, &defaults());

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "Insufficient Sleep");
        assert_eq!(drafts[0].value, "4.5");
        assert_eq!(drafts[1].title, "Low Activity Level");
        assert_eq!(drafts[1].value, "10");
    }

    #[test]
    fn test_zero_values_are_still_evaluated() {
        let vitals = SampleVitals {
            sleep_hours: Some(0.0),
            activity_level: Some(0),
            ..Default::default()
        };
        assert_eq!(evaluate(&vitals, &defaults()).len(), 2);
    }

    #[test]
    fn test_in_range_sample_is_a_no_op() {
        let vitals = SampleVitals {
            heart_rate: Some(72),
            blood_pressure_systolic: Some(120),
            blood_pressure_diastolic: Some(80),
            sleep_hours: Some(7.5),
            activity_level: Some(55),
        };
        assert!(evaluate(&vitals, &defaults()).is_empty());
    }

    #[test]
    fn test_drafts_keep_presentation_order() {
        let vitals = SampleVitals {
            heart_rate: Some(130),
            blood_pressure_systolic: Some(150),
            blood_pressure_diastolic: Some(95),
            sleep_hours: Some(3.0),
            activity_level: Some(5),
        };
        let drafts = evaluate(&vitals, &defaults());

        let metrics: Vec<&str> = drafts.iter().map(|d| d.metric).collect();
        assert_eq!(metrics, vec!["heartRate", "bloodPressure", "sleep", "activity"]);
    }

    #[test]
    fn test_custom_thresholds_shift_the_band() {
        let overrides = crate::domain::thresholds::ThresholdOverrides {
            heart_rate_max: Some(120),
            ..Default::default()
        };
        let thresholds = ThresholdSet::default().merged(&overrides);

        let vitals = SampleVitals {
            heart_rate: Some(110),
            ..Default::default()
        };
        assert!(evaluate(&vitals, &thresholds).is_empty());

        let vitals = SampleVitals {
            heart_rate: Some(125),
            ..Default::default()
        };
        let drafts = evaluate(&vitals, &thresholds);
        assert_eq!(drafts.len(), 1);
        assert!(drafts[0].message.contains("60-120 bpm"));
    }
}
