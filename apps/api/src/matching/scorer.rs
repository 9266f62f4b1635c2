//! Match Scorer: compares a resume's skills against a job's required skills.
//!
//! Comparison is case-insensitive everywhere. Output preserves the casing of
//! the side each entry came from: matched skills carry resume casing, missing
//! skills carry job casing.

use serde::{Deserialize, Serialize};

use crate::matching::skills::SkillSet;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Result of scoring one resume against one job. Not persisted.
/// Field names are camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_percentage: f64,
    pub matched_skills: SkillSet,
    pub missing_skills: SkillSet,
    #[serde(rename = "skillSuggestions")]
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores `resume_skills` against `job_skills`.
///
/// - matched: resume entries with a counterpart in the job list (resume order, duplicates kept)
/// - missing: job entries with no counterpart in the resume list (job order)
/// - percentage: matched resume entries / job entries × 100, rounded to 2 decimals
///
/// Every duplicate resume entry counts toward the numerator, so a resume listing
/// "Java" twice against a one-skill "Java" job scores 200.0.
pub fn score(
    resume_skills: &[String],
    job_skills: &[String],
    min_experience: Option<i32>,
) -> MatchResult {
    let job_lower: Vec<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();
    let resume_lower: Vec<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();

    let matched_skills: SkillSet = resume_skills
        .iter()
        .zip(&resume_lower)
        .filter(|(_, lower)| job_lower.contains(lower))
        .map(|(skill, _)| skill.clone())
        .collect();

    let missing_skills: SkillSet = job_skills
        .iter()
        .zip(&job_lower)
        .filter(|(_, lower)| !resume_lower.contains(lower))
        .map(|(skill, _)| skill.clone())
        .collect();

    let match_percentage = if job_skills.is_empty() || resume_skills.is_empty() {
        0.0
    } else {
        round_to_cents(matched_skills.len() as f64 / job_skills.len() as f64 * 100.0)
    };

    let suggestions = build_suggestions(&missing_skills, min_experience);

    MatchResult {
        match_percentage,
        matched_skills,
        missing_skills,
        suggestions,
    }
}

/// One suggestion per missing skill, followed by an experience suggestion when
/// the job asks for more than zero years.
pub fn build_suggestions(missing_skills: &[String], min_experience: Option<i32>) -> Vec<String> {
    let mut suggestions: Vec<String> = missing_skills
        .iter()
        .map(|skill| format!("Consider learning or improving: {skill}"))
        .collect();

    if let Some(years) = min_experience.filter(|&y| y > 0) {
        suggestions.push(format!(
            "Gain at least {years} years of relevant experience"
        ));
    }

    suggestions
}

/// Half-up rounding to two decimal places. Inputs are never negative.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let result = score(&[], &skills(&["Java"]), None);
        assert_eq!(result.match_percentage, 0.0);
        assert!(result.matched_skills.is_empty());
        assert_eq!(result.missing_skills, vec!["Java"]);
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let result = score(&skills(&["Java", "Rust"]), &[], None);
        assert_eq!(result.match_percentage, 0.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_both_empty() {
        let result = score(&[], &[], Some(2));
        assert_eq!(result.match_percentage, 0.0);
        assert_eq!(
            result.suggestions,
            vec!["Gain at least 2 years of relevant experience"]
        );
    }

    #[test]
    fn test_case_insensitive_match_keeps_resume_casing() {
        let result = score(&skills(&["java", "python"]), &skills(&["Java", "C++"]), None);
        assert_eq!(result.matched_skills, vec!["java"]);
        assert_eq!(result.missing_skills, vec!["C++"]);
        assert_eq!(result.match_percentage, 50.0);
    }

    #[test]
    fn test_duplicate_resume_entries_each_count() {
        let result = score(&skills(&["Java", "Java"]), &skills(&["Java"]), None);
        assert_eq!(result.matched_skills, vec!["Java", "Java"]);
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.match_percentage, 200.0);
    }

    #[test]
    fn test_full_match_is_one_hundred() {
        let result = score(
            &skills(&["Docker", "AWS", "Rust"]),
            &skills(&["rust", "docker", "aws"]),
            None,
        );
        assert_eq!(result.match_percentage, 100.0);
        assert_eq!(result.matched_skills, vec!["Docker", "AWS", "Rust"]);
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        let result = score(
            &skills(&["Java"]),
            &skills(&["Java", "Python", "Go"]),
            None,
        );
        assert_eq!(result.match_percentage, 33.33);

        let result = score(
            &skills(&["Java", "Python"]),
            &skills(&["Java", "Python", "Go"]),
            None,
        );
        assert_eq!(result.match_percentage, 66.67);
    }

    #[test]
    fn test_matched_and_missing_cover_job_skills() {
        let job = skills(&["Java", "Docker", "Kubernetes", "AWS"]);
        let result = score(&skills(&["docker", "aws", "Python"]), &job, None);

        let mut covered: Vec<String> = result
            .matched_skills
            .iter()
            .chain(&result.missing_skills)
            .map(|s| s.to_lowercase())
            .collect();
        covered.sort();
        let mut expected: Vec<String> = job.iter().map(|s| s.to_lowercase()).collect();
        expected.sort();
        assert_eq!(covered, expected);
    }

    #[test]
    fn test_missing_skills_follow_job_order() {
        let result = score(
            &skills(&["Git"]),
            &skills(&["Scrum", "Git", "Agile", "Jira"]),
            None,
        );
        assert_eq!(result.missing_skills, vec!["Scrum", "Agile", "Jira"]);
    }

    #[test]
    fn test_suggestions_with_experience() {
        let suggestions = build_suggestions(&skills(&["AWS"]), Some(3));
        assert_eq!(
            suggestions,
            vec![
                "Consider learning or improving: AWS",
                "Gain at least 3 years of relevant experience",
            ]
        );
    }

    #[test]
    fn test_zero_or_missing_experience_adds_nothing() {
        assert_eq!(
            build_suggestions(&skills(&["AWS"]), Some(0)),
            vec!["Consider learning or improving: AWS"]
        );
        assert_eq!(
            build_suggestions(&skills(&["AWS"]), None),
            vec!["Consider learning or improving: AWS"]
        );
    }

    #[test]
    fn test_score_suggestions_follow_missing_order() {
        let result = score(&skills(&["Java"]), &skills(&["Java", "AWS", "Docker"]), Some(5));
        assert_eq!(
            result.suggestions,
            vec![
                "Consider learning or improving: AWS",
                "Consider learning or improving: Docker",
                "Gain at least 5 years of relevant experience",
            ]
        );
    }

    #[test]
    fn test_result_serializes_with_wire_field_names() {
        let value = serde_json::to_value(score(&skills(&["java"]), &skills(&["Java"]), Some(1)))
            .unwrap();

        assert_eq!(value["matchPercentage"], 100.0);
        assert_eq!(value["matchedSkills"], serde_json::json!(["java"]));
        assert_eq!(value["missingSkills"], serde_json::json!([]));
        assert_eq!(
            value["skillSuggestions"],
            serde_json::json!(["Gain at least 1 years of relevant experience"])
        );
        assert!(value.get("match_percentage").is_none());
        assert!(value.get("suggestions").is_none());
    }
}
