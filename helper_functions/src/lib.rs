pub mod error;
pub mod misc;
pub mod mutators;
pub mod predicates;
