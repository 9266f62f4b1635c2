use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::service::{analyze_resume, AnalysisResponse};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::jobs::queries::require_job;
use crate::matching::{extract_skills, score, MatchResult, SkillSet};
use crate::resumes::queries::require_owned_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_id: Uuid,
    pub job_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume_skills: SkillSet,
    pub job_skills: SkillSet,
    pub min_experience: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: SkillSet,
}

/// POST /api/v1/analysis
///
/// Scores one of the caller's resumes against a job.
pub async fn handle_analyze(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let resume = require_owned_resume(&state.db, req.resume_id, caller.user_id).await?;
    let job = require_job(&state.db, req.job_id).await?;

    let analysis = analyze_resume(&resume, &job);
    info!(
        "Analyzed resume {} against job {}: {:.2}%",
        resume.id, job.id, analysis.match_percentage
    );
    Ok(Json(analysis))
}

/// POST /api/v1/analysis/score
///
/// Stateless scoring of two skill lists. The result uses the same camelCase
/// field names as the stored-resume analysis.
pub async fn handle_score(Json(req): Json<ScoreRequest>) -> Json<MatchResult> {
    Json(score(&req.resume_skills, &req.job_skills, req.min_experience))
}

/// POST /api/v1/skills/extract
pub async fn handle_extract_skills(
    Json(req): Json<ExtractSkillsRequest>,
) -> Json<ExtractSkillsResponse> {
    Json(ExtractSkillsResponse {
        skills: extract_skills(&req.text),
    })
}
