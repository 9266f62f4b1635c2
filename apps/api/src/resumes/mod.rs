// Resume upload and retrieval.
// Uploads are parsed to text on the blocking pool, scanned for vocabulary
// skills, stored through the configured FileStore, then recorded in Postgres.

pub mod handlers;
pub mod queries;
pub mod upload;
