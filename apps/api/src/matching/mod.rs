// Profile-to-job matching engine.
// Normalizer → factor scorers → aggregator → ranker, fronted by `MatchingEngine`.
// Pure functions only: no database, no HTTP, no tracing in here.

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod factors;
mod lenient;
pub mod normalize;
pub mod ranker;
pub mod skill_gap;
pub mod types;

pub use engine::MatchingEngine;
pub use error::MatchError;
pub use ranker::DEFAULT_LIMIT;
pub use types::{CandidateProfile, ExperienceLevel, JobPosting, JobType, ScoredJob, WorkMode};
