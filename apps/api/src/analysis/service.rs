//! Resume analysis: scores a stored resume against a stored job.
//!
//! Scoring itself lives in `matching::scorer`; this layer picks the inputs off
//! the rows and attaches the echo fields the client displays alongside the score.

use serde::Serialize;
use uuid::Uuid;

use crate::matching::score;
use crate::models::job::JobRow;
use crate::models::resume::ResumeRow;

/// Response body of `POST /api/v1/analysis`. Field names are camelCase on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_suggestions: Vec<String>,
    pub resume_text: String,
    pub job_title: String,
    pub resume_id: Uuid,
    pub job_id: Uuid,
}

pub fn analyze_resume(resume: &ResumeRow, job: &JobRow) -> AnalysisResponse {
    let result = score(&resume.skills, &job.required_skills, job.min_experience);

    AnalysisResponse {
        match_percentage: result.match_percentage,
        matched_skills: result.matched_skills,
        missing_skills: result.missing_skills,
        skill_suggestions: result.suggestions,
        resume_text: resume.extracted_text.clone(),
        job_title: job.title.clone(),
        resume_id: resume.id,
        job_id: job.id,
    }
}
