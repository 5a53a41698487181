//! Collaborator tools for the fitness agent
//!
//! Everything the dialogue layer calls out to lives here:
//! - `bmi`: the pure BMI engine
//! - `api`: blocking api-ninjas client for nutrition and exercise data
//! - `fallback`: static exercise table used when the remote provider fails
//! - `motivation`: motivational content store

pub mod api;
pub mod bmi;
pub mod fallback;
pub mod motivation;

pub use api::ApiNinjasClient;
pub use bmi::{BmiCategory, BmiRecord};
pub use fallback::fallback_exercises;
pub use motivation::MotivationStore;
