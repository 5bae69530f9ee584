// Job matching: weighted scoring of a candidate profile against a job posting.
// Pure functions only; profiles and postings are loaded by the store layer.

pub mod handlers;
pub mod keywords;
pub mod scorer;
pub mod weights;
