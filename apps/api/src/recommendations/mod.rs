// Job-seeker facing recommendation endpoints.
// Handlers load a profile and a catalog, then hand both to the matching engine.

pub mod dashboard;
pub mod handlers;
