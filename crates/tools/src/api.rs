//! Blocking api-ninjas client for nutrition and exercise data.
//!
//! One client serves both endpoints. Nutrition failures surface as a
//! provider error; exercise failures degrade to the local fallback table
//! first and only error when that is empty too.

use std::time::Duration;

use fitness_agent_config::ApiConfig;
use fitness_agent_core::{
    Exercise, ExerciseFilter, ExerciseProvider, NutritionFacts, NutritionProvider, ProviderError,
};

use crate::fallback::fallback_exercises;

pub struct ApiNinjasClient {
    base_url: String,
    api_key: Option<String>,
    exercise_limit: usize,
    http: reqwest::blocking::Client,
}

impl ApiNinjasClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ProviderError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ProviderError::new(format!("http client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            exercise_limit: config.exercise_limit,
            http,
        })
    }

    fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<reqwest::blocking::Response, ProviderError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::new("API key not configured"))?;

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .header("X-Api-Key", key)
            .query(params)
            .send()
            .map_err(|e| ProviderError::new(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| ProviderError::new(format!("bad status: {e}")))?;

        Ok(response)
    }

    fn fetch_exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, ProviderError> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(muscle) = filter.muscle.as_deref() {
            params.push(("muscle", muscle));
        }
        if let Some(exercise_type) = filter.exercise_type.as_deref() {
            params.push(("type", exercise_type));
        }
        if let Some(difficulty) = filter.difficulty.as_deref() {
            params.push(("difficulty", difficulty));
        }
        // An unconstrained query would page through the whole catalogue.
        if params.is_empty() {
            params.push(("muscle", "chest"));
        }

        let mut exercises: Vec<Exercise> = self
            .get("/exercises", &params)?
            .json()
            .map_err(|e| ProviderError::new(format!("malformed payload: {e}")))?;

        if exercises.is_empty() {
            return Err(ProviderError::new("empty exercise payload"));
        }

        exercises.truncate(self.exercise_limit);
        Ok(exercises)
    }
}

impl NutritionProvider for ApiNinjasClient {
    fn nutrition(&self, food_item: &str) -> Result<NutritionFacts, ProviderError> {
        let results: Vec<NutritionFacts> = self
            .get("/nutrition", &[("query", food_item)])?
            .json()
            .map_err(|e| ProviderError::new(format!("malformed payload: {e}")))?;

        results
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::new(format!("no nutrition data found for '{food_item}'")))
    }
}

impl ExerciseProvider for ApiNinjasClient {
    fn exercises(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>, ProviderError> {
        match self.fetch_exercises(filter) {
            Ok(exercises) => Ok(exercises),
            Err(err) => {
                tracing::warn!("exercise lookup failed, using fallback table: {err}");
                let fallback = fallback_exercises(filter);
                if fallback.is_empty() {
                    Err(ProviderError::new("no exercises found for your criteria"))
                } else {
                    Ok(fallback)
                }
            }
        }
    }
}
