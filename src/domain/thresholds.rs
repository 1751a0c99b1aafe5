use serde::{Deserialize, Serialize};

/// The per-metric bounds used to decide whether a sample value is
/// alert-worthy. Field names match the camelCase keys stored in the
/// user profile's `alert_thresholds` JSON.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdSet {
    pub heart_rate_min: i32,
    pub heart_rate_max: i32,
    pub bp_systolic_max: i32,
    pub bp_diastolic_max: i32,
    pub sleep_hours_min: f64,
    pub activity_level_min: i32,
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            heart_rate_min: 60,
            heart_rate_max: 100,
            bp_systolic_max: 140,
            bp_diastolic_max: 90,
            sleep_hours_min: 6.0,
            activity_level_min: 30,
        }
    }
}

/// A user's stored override set. Every key is optional; an absent key falls
/// back to the default bound, never to zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThresholdOverrides {
    pub heart_rate_min: Option<i32>,
    pub heart_rate_max: Option<i32>,
    pub bp_systolic_max: Option<i32>,
    pub bp_diastolic_max: Option<i32>,
    pub sleep_hours_min: Option<f64>,
    pub activity_level_min: Option<i32>,
}

impl ThresholdSet {
    /// Left-biased merge: literal override keys win, everything else keeps
    /// the value already in `self`.
    pub fn merged(mut self, overrides: &ThresholdOverrides) -> Self {
        if let Some(value) = overrides.heart_rate_min {
            self.heart_rate_min = value;
        }
        if let Some(value) = overrides.heart_rate_max {
            self.heart_rate_max = value;
        }
        if let Some(value) = overrides.bp_systolic_max {
            self.bp_systolic_max = value;
        }
        if let Some(value) = overrides.bp_diastolic_max {
            self.bp_diastolic_max = value;
        }
        if let Some(value) = overrides.sleep_hours_min {
            self.sleep_hours_min = value;
        }
        if let Some(value) = overrides.activity_level_min {
            self.activity_level_min = value;
        }
        self
    }

    /// Invariant check applied when a caregiver submits new overrides:
    /// every bound positive, min below max where both exist.
    pub fn validate(&self) -> Result<(), String> {
        if self.heart_rate_min <= 0
            || self.heart_rate_max <= 0
            || self.bp_systolic_max <= 0
            || self.bp_diastolic_max <= 0
            || self.activity_level_min <= 0
            || self.sleep_hours_min <= 0.0
        {
            return Err("all thresholds must be positive".to_string());
        }
        if self.heart_rate_min > self.heart_rate_max {
            return Err("heartRateMin must not exceed heartRateMax".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let set = ThresholdSet::default();
        assert_eq!(set.heart_rate_min, 60);
        assert_eq!(set.heart_rate_max, 100);
        assert_eq!(set.bp_systolic_max, 140);
        assert_eq!(set.bp_diastolic_max, 90);
        assert_eq!(set.sleep_hours_min, 6.0);
        assert_eq!(set.activity_level_min, 30);
    }

    #[test]
    fn test_merge_is_left_biased() {
        let overrides = ThresholdOverrides {
            heart_rate_max: Some(120),
            ..Default::default()
        };
        let merged = ThresholdSet::default().merged(&overrides);

        assert_eq!(merged.heart_rate_max, 120);
        // Untouched keys stay exactly at their defaults.
        assert_eq!(merged.heart_rate_min, 60);
        assert_eq!(merged.bp_systolic_max, 140);
        assert_eq!(merged.bp_diastolic_max, 90);
        assert_eq!(merged.sleep_hours_min, 6.0);
        assert_eq!(merged.activity_level_min, 30);
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let merged = ThresholdSet::default().merged(&ThresholdOverrides::default());
        assert_eq!(merged, ThresholdSet::default());
    }

    #[test]
    fn test_overrides_decode_from_stored_json() {
        let raw = serde_json::json!({ "heartRateMax": 120, "sleepHoursMin": 5.5 });
        let overrides: ThresholdOverrides = serde_json::from_value(raw).unwrap();
        assert_eq!(overrides.heart_rate_max, Some(120));
        assert_eq!(overrides.sleep_hours_min, Some(5.5));
        assert_eq!(overrides.heart_rate_min, None);
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        let mut set = ThresholdSet::default();
        set.heart_rate_min = 110;
        assert!(set.validate().is_err());

        let mut set = ThresholdSet::default();
        set.activity_level_min = 0;
        assert!(set.validate().is_err());

        assert!(ThresholdSet::default().validate().is_ok());
    }
}
