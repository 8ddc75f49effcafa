//! Security analytics handlers - network logs, model predictions, attack stats

use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};
use rand::Rng;

use crate::models::{AttackStat, IntrusionPrediction, NetworkLogEntry};
use crate::{AppResult, AppState};

const ATTACK_CATEGORIES: [&str; 4] = ["DoS", "Reconnaissance", "Fuzzers", "Normal"];

/// Most recent network events, newest first, capped at 50
pub async fn recent_logs(State(state): State<AppState>) -> AppResult<Json<Vec<NetworkLogEntry>>> {
    if state.db.is_mock() {
        return Ok(Json(mock_logs()));
    }

    let logs = NetworkLogEntry::recent(&state.db).await?;
    Ok(Json(logs))
}

/// Events scored by the intrusion-detection model view, capped at 50
pub async fn predictions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<IntrusionPrediction>>> {
    if state.db.is_mock() {
        return Ok(Json(mock_predictions()));
    }

    let predictions = IntrusionPrediction::recent(&state.db).await?;
    Ok(Json(predictions))
}

/// Occurrence counts per attack category
pub async fn attack_stats(State(state): State<AppState>) -> AppResult<Json<Vec<AttackStat>>> {
    if state.db.is_mock() {
        return Ok(Json(mock_stats()));
    }

    let stats = AttackStat::list(&state.db).await?;
    Ok(Json(stats))
}

/// Ten sampled events, spaced 10 minutes apart going backwards from now.
/// Values are drawn fresh per call; only the shape is stable.
fn mock_logs() -> Vec<NetworkLogEntry> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    (0..10i64)
        .map(|i| {
            let attack_cat = ATTACK_CATEGORIES[rng.gen_range(0..ATTACK_CATEGORIES.len())];
            NetworkLogEntry {
                log_id: 100 + i,
                src_ip: format!("192.168.1.{}", rng.gen_range(10..=99)),
                dst_ip: "10.0.0.5".to_string(),
                attack_cat: attack_cat.to_string(),
                label: if attack_cat == "Normal" { 0 } else { 1 },
                timestamp: now - Duration::minutes(i * 10),
            }
        })
        .collect()
}

/// Sampled events scored as if the model were perfect.
fn mock_predictions() -> Vec<IntrusionPrediction> {
    mock_logs()
        .into_iter()
        .map(|log| IntrusionPrediction {
            predicted_label: log.label,
            probability: if log.label == 1 { 0.95 } else { 0.02 },
            log_id: log.log_id,
            src_ip: log.src_ip,
            dst_ip: log.dst_ip,
            attack_cat: log.attack_cat,
            label: log.label,
            timestamp: log.timestamp,
        })
        .collect()
}

fn mock_stats() -> Vec<AttackStat> {
    vec![
        AttackStat {
            attack_cat: "DoS".to_string(),
            count: 150,
        },
        AttackStat {
            attack_cat: "Reconnaissance".to_string(),
            count: 80,
        },
        AttackStat {
            attack_cat: "Fuzzers".to_string(),
            count: 45,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_logs_match_expected_shape() {
        let logs = mock_logs();
        assert_eq!(logs.len(), 10);

        for (i, log) in logs.iter().enumerate() {
            assert_eq!(log.log_id, 100 + i as i64);
            assert_eq!(log.dst_ip, "10.0.0.5");
            assert!(ATTACK_CATEGORIES.contains(&log.attack_cat.as_str()));

            let octet: u8 = log
                .src_ip
                .strip_prefix("192.168.1.")
                .expect("src_ip stays in the 192.168.1.0/24 range")
                .parse()
                .expect("final octet is numeric");
            assert!((10..=99).contains(&octet));
        }
    }

    #[test]
    fn mock_label_tracks_attack_category() {
        for log in mock_logs() {
            if log.attack_cat == "Normal" {
                assert_eq!(log.label, 0);
            } else {
                assert_eq!(log.label, 1);
            }
        }
    }

    #[test]
    fn mock_predictions_agree_with_labels() {
        let predictions = mock_predictions();
        assert_eq!(predictions.len(), 10);

        for p in predictions {
            assert_eq!(p.predicted_label, p.label);
            let expected = if p.label == 1 { 0.95 } else { 0.02 };
            assert_eq!(p.probability, expected);
        }
    }

    #[test]
    fn mock_stats_cover_known_categories() {
        let stats = mock_stats();
        assert_eq!(stats.len(), 3);
        assert!(stats.iter().all(|s| s.count > 0));
    }
}
