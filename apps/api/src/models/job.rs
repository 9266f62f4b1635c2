use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub required_skills: Vec<String>,
    pub min_experience: Option<i32>,
    pub qualifications: Vec<String>,
    pub posted_by: Uuid,
    pub posted_at: DateTime<Utc>,
    pub is_active: bool,
}
