// Resume-to-job matching core.
// Text extraction, fixed-vocabulary skill extraction, and match scoring.
// Everything here is pure and synchronous; handlers own I/O and persistence.

pub mod scorer;
pub mod skills;
pub mod text_extractor;
pub mod vocabulary;

pub use scorer::{score, MatchResult};
pub use skills::{extract_skills, SkillSet};
pub use text_extractor::{extract_with_format, DocumentFormat, ExtractError};
