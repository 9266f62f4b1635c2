use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Name of the file as uploaded.
    pub file_name: String,
    /// Storage location: filesystem path or `s3://bucket/key`.
    pub file_path: String,
    pub extracted_text: String,
    /// Vocabulary skills found in `extracted_text`, in vocabulary order.
    pub skills: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
}
