// Job listings.
// Recruiters and admins post jobs; the poster or an admin may edit or retire them.
// Deletion is soft: retired jobs drop out of the active listing but stay scorable.

pub mod handlers;
pub mod queries;
pub mod validation;
