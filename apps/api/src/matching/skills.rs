use crate::matching::vocabulary::SKILL_VOCABULARY;

/// Ordered list of skill names. Not deduplicated by type: resume and job
/// skill lists are compared as sequences, duplicates included.
pub type SkillSet = Vec<String>;

/// Returns every vocabulary entry that occurs in `text`, case-insensitively.
///
/// Matching is plain substring search over the lower-cased text, so "Java"
/// is reported for a resume that only mentions "JavaScript" and "Go" for one
/// that mentions "Google". Results follow vocabulary order, each entry at most once.
pub fn extract_skills(text: &str) -> SkillSet {
    let text_lower = text.to_lowercase();
    if text_lower.trim().is_empty() {
        return Vec::new();
    }

    SKILL_VOCABULARY
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}
