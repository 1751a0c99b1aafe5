use chrono::{DateTime, Duration, Timelike, Utc};
use rand::Rng;

use crate::domain::alert::{AlertDraft, AlertSeverity};

/// One generated measurement batch, ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSample {
    pub timestamp: DateTime<Utc>,
    pub heart_rate: i32,
    pub blood_pressure_systolic: i32,
    pub blood_pressure_diastolic: i32,
    pub sleep_hours: Option<f64>,
    pub sleep_quality: Option<i32>,
    pub steps: i32,
    pub activity_level: i32,
}

/// Generate a demonstration series: hourly points for today up to the
/// current hour, one noon daily summary per previous day. The generator is
/// driven entirely by the injected rng, so a fixed seed reproduces the
/// exact series.
pub fn generate_series<R: Rng>(
    days: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<SimulatedSample> {
    let mut samples = Vec::new();

    for day in 0..days {
        let date = (now - Duration::days(i64::from(day))).date_naive();
        if day == 0 {
            for hour in 0..=now.hour() {
                let Some(timestamp) = date.and_hms_opt(hour, 0, 0) else {
                    continue;
                };
                samples.push(generate_point(timestamp.and_utc(), hour, false, rng));
            }
        } else {
            let Some(timestamp) = date.and_hms_opt(12, 0, 0) else {
                continue;
            };
            samples.push(generate_point(timestamp.and_utc(), 12, true, rng));
        }
    }

    samples
}

fn generate_point<R: Rng>(
    timestamp: DateTime<Utc>,
    hour: u32,
    daily_summary: bool,
    rng: &mut R,
) -> SimulatedSample {
    let is_night_time = hour < 6 || hour > 22;
    let night_shift = if is_night_time { -10.0 } else { 0.0 };

    let heart_rate =
        ((72.0 + (rng.gen::<f64>() - 0.5) * 20.0 + night_shift) as i32).clamp(60, 100);
    let systolic = ((120.0 + (rng.gen::<f64>() - 0.5) * 30.0) as i32).clamp(90, 160);
    let diastolic = ((80.0 + (rng.gen::<f64>() - 0.5) * 20.0) as i32).clamp(60, 100);

    let (sleep_hours, sleep_quality) = if daily_summary {
        (
            Some(((6.5 + rng.gen::<f64>() * 2.0) * 10.0).round() / 10.0),
            Some((6.0 + rng.gen::<f64>() * 4.0) as i32),
        )
    } else {
        (None, None)
    };

    let (activity_level, steps) = if !is_night_time {
        let level = (20.0 + rng.gen::<f64>() * 60.0) as i32;
        let daily_steps = 3000.0 + rng.gen::<f64>() * 7000.0;
        let steps = if daily_summary {
            daily_steps as i32
        } else {
            (daily_steps / 16.0) as i32
        };
        (level, steps)
    } else {
        (
            (rng.gen::<f64>() * 10.0) as i32,
            (rng.gen::<f64>() * 100.0) as i32,
        )
    };

    SimulatedSample {
        timestamp,
        heart_rate,
        blood_pressure_systolic: systolic,
        blood_pressure_diastolic: diastolic,
        sleep_hours,
        sleep_quality,
        steps,
        activity_level,
    }
}

/// Occasionally produce demonstration pattern alerts alongside a simulated
/// series: a 30% gate for the batch, then a coin flip per candidate.
pub fn pattern_alerts<R: Rng>(rng: &mut R) -> Vec<AlertDraft> {
    if rng.gen::<f64>() >= 0.3 {
        return Vec::new();
    }

    let candidates = [
        (
            AlertSeverity::Info,
            "Heart Rate Pattern Change",
            "Heart rate patterns show unusual variation",
            "heartRate",
            "15",
        ),
        (
            AlertSeverity::Warning,
            "Low Activity Pattern",
            "Activity levels have been consistently low",
            "activity",
            "25",
        ),
    ];

    let mut drafts = Vec::new();
    for (severity, title, message, metric, value) in candidates {
        if rng.gen::<f64>() < 0.5 {
            drafts.push(AlertDraft {
                severity,
                title: title.to_string(),
                message: message.to_string(),
                metric,
                value: value.to_string(),
            });
        }
    }
    drafts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_now() -> DateTime<Utc> {
        "2025-03-10T15:30:00Z".parse().unwrap()
    }

    #[test]
    fn test_same_seed_reproduces_the_series() {
        let a = generate_series(7, fixed_now(), &mut StdRng::seed_from_u64(42));
        let b = generate_series(7, fixed_now(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let c = generate_series(7, fixed_now(), &mut StdRng::seed_from_u64(43));
        assert_ne!(a, c);
    }

    #[test]
    fn test_series_shape() {
        let samples = generate_series(3, fixed_now(), &mut StdRng::seed_from_u64(7));

        // 16 hourly points for today (hours 0..=15) plus 2 daily summaries.
        assert_eq!(samples.len(), 18);

        let today: Vec<_> = samples.iter().take(16).collect();
        assert!(today.iter().all(|s| s.sleep_hours.is_none()));
        assert_eq!(today.last().unwrap().timestamp.hour(), 15);

        let summaries: Vec<_> = samples.iter().skip(16).collect();
        for summary in summaries {
            assert_eq!(summary.timestamp.hour(), 12);
            assert!(summary.sleep_hours.is_some());
            assert!(summary.sleep_quality.is_some());
        }
    }

    #[test]
    fn test_values_stay_in_clamped_ranges() {
        let samples = generate_series(7, fixed_now(), &mut StdRng::seed_from_u64(99));
        for sample in &samples {
            assert!((60..=100).contains(&sample.heart_rate));
            assert!((90..=160).contains(&sample.blood_pressure_systolic));
            assert!((60..=100).contains(&sample.blood_pressure_diastolic));
            assert!(sample.steps >= 0);
            assert!((0..=100).contains(&sample.activity_level));
            if let Some(hours) = sample.sleep_hours {
                assert!((6.5..=8.5).contains(&hours));
            }
        }
    }

    #[test]
    fn test_pattern_alerts_are_bounded() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let drafts = pattern_alerts(&mut rng);
            assert!(drafts.len() <= 2);
        }
    }
}
