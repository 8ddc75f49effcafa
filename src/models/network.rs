//! Network security models - event logs, model predictions, aggregate stats

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::db::{Db, QueryError};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NetworkLogEntry {
    pub log_id: i64,
    pub src_ip: String,
    pub dst_ip: String,
    pub attack_cat: String,
    /// 0 = benign, 1 = malicious
    pub label: i16,
    pub timestamp: DateTime<Utc>,
}

/// A log entry scored by the intrusion-detection model view.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct IntrusionPrediction {
    pub log_id: i64,
    pub src_ip: String,
    pub dst_ip: String,
    pub attack_cat: String,
    pub label: i16,
    pub timestamp: DateTime<Utc>,
    pub predicted_label: i16,
    pub probability: f64,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AttackStat {
    pub attack_cat: String,
    pub count: i64,
}

impl NetworkLogEntry {
    pub async fn recent(db: &Db) -> Result<Vec<Self>, QueryError> {
        db.fetch_all(
            "SELECT log_id, src_ip, dst_ip, attack_cat, label, log_timestamp AS timestamp \
             FROM network_logs ORDER BY log_timestamp DESC LIMIT 50",
        )
        .await
    }
}

impl IntrusionPrediction {
    pub async fn recent(db: &Db) -> Result<Vec<Self>, QueryError> {
        db.fetch_all(
            "SELECT log_id, src_ip, dst_ip, attack_cat, label, log_timestamp AS timestamp, \
                    predicted_label, probability \
             FROM vw_intrusion_predictions LIMIT 50",
        )
        .await
    }
}

impl AttackStat {
    pub async fn list(db: &Db) -> Result<Vec<Self>, QueryError> {
        db.fetch_all("SELECT attack_cat, attack_count AS count FROM vw_attack_stats")
            .await
    }
}
