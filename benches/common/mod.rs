pub mod bezier;
pub mod samples;
