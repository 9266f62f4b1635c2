use serde::Deserialize;

use crate::errors::AppError;

/// Body of job create and update requests.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRequest {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub required_skills: Vec<String>,
    pub min_experience: Option<i32>,
    pub qualifications: Option<Vec<String>>,
}

impl JobRequest {
    /// Rejects blank text fields, an empty skill list, and negative experience.
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("company", &self.company),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} cannot be empty")));
            }
        }

        if self.required_skills.is_empty() {
            return Err(AppError::Validation(
                "required_skills must list at least one skill".to_string(),
            ));
        }
        if self.required_skills.iter().any(|s| s.trim().is_empty()) {
            return Err(AppError::Validation(
                "required_skills cannot contain blank entries".to_string(),
            ));
        }

        if matches!(self.min_experience, Some(years) if years < 0) {
            return Err(AppError::Validation(
                "min_experience cannot be negative".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> JobRequest {
        JobRequest {
            title: "Backend Engineer".to_string(),
            description: "Build APIs".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            required_skills: vec!["Java".to_string(), "Docker".to_string()],
            min_experience: Some(3),
            qualifications: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let req = JobRequest {
            title: "   ".to_string(),
            ..valid_request()
        };
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_blank_location_rejected() {
        let req = JobRequest {
            location: String::new(),
            ..valid_request()
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_empty_skill_list_rejected() {
        let req = JobRequest {
            required_skills: vec![],
            ..valid_request()
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_blank_skill_entry_rejected() {
        let req = JobRequest {
            required_skills: vec!["Java".to_string(), " ".to_string()],
            ..valid_request()
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_negative_experience_rejected() {
        let req = JobRequest {
            min_experience: Some(-1),
            ..valid_request()
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_missing_experience_and_qualifications_allowed() {
        let req = JobRequest {
            min_experience: None,
            qualifications: None,
            ..valid_request()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let json = r#"{
            "title": "Data Engineer",
            "description": "Pipelines",
            "company": "Acme",
            "location": "Berlin",
            "required_skills": ["Python", "SQL"]
        }"#;
        let req: JobRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.required_skills, vec!["Python", "SQL"]);
        assert!(req.min_experience.is_none());
        assert!(req.qualifications.is_none());
    }
}
