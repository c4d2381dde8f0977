// Job recommendation engine.
// Pure scoring (location, salary, role, company) plus ranking, swipe learning,
// and listing classification. Nothing in here performs I/O; handlers own the HTTP edge.

pub mod classify;
pub mod company;
pub mod handlers;
pub mod learning;
pub mod location;
pub mod ranking;
pub mod role;
pub mod salary;
pub mod scorer;
mod text;

pub use scorer::{JobScorer, PreferenceScorer};
