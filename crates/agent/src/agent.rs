//! The turn engine.
//!
//! One `FitnessAgent` serves many sessions; each session's
//! `ConversationState` is owned by the caller and passed into every turn.
//! Turn processing never fails: provider errors, validation errors, and
//! classifier ambiguity all render as user-facing text.

use fitness_agent_config::{ClassifierMode, Settings};
use fitness_agent_core::{
    ConversationState, ExerciseProvider, Intent, IntentPredictor, NutritionProvider, TurnRole,
};
use fitness_agent_text_processing::{
    extract_exercise_filter, extract_food_item, IntentClassifier, KeywordClassifier,
    KeywordLexicon, PredictorClassifier, ScoredClassifier,
};
use fitness_agent_tools::{ApiNinjasClient, MotivationStore};

use crate::dialogue::{DialogueOutcome, DialogueStateMachine};
use crate::{response, AgentError};

pub struct FitnessAgent {
    agent_name: String,
    dialogue: DialogueStateMachine,
    nutrition: Box<dyn NutritionProvider>,
    exercise: Box<dyn ExerciseProvider>,
    motivation: MotivationStore,
}

impl FitnessAgent {
    /// Build from settings with the configured keyword-family classifier
    /// and the remote data provider (which degrades to the local fallback
    /// table on its own).
    pub fn from_settings(settings: &Settings) -> Result<Self, AgentError> {
        let classifier = build_classifier(settings, None);
        Self::assemble(settings, classifier)
    }

    /// Same, with an external statistical predictor installed.
    pub fn with_predictor(
        settings: &Settings,
        predictor: Box<dyn IntentPredictor>,
    ) -> Result<Self, AgentError> {
        let classifier = build_classifier(settings, Some(predictor));
        Self::assemble(settings, classifier)
    }

    /// Fully custom wiring, used by tests and embedders.
    pub fn new(
        agent_name: impl Into<String>,
        classifier: Box<dyn IntentClassifier>,
        nutrition: Box<dyn NutritionProvider>,
        exercise: Box<dyn ExerciseProvider>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            dialogue: DialogueStateMachine::new(classifier),
            nutrition,
            exercise,
            motivation: MotivationStore::new(),
        }
    }

    fn assemble(
        settings: &Settings,
        classifier: Box<dyn IntentClassifier>,
    ) -> Result<Self, AgentError> {
        let nutrition = ApiNinjasClient::new(&settings.api)?;
        let exercise = ApiNinjasClient::new(&settings.api)?;
        Ok(Self::new(
            settings.agent.name.clone(),
            classifier,
            Box::new(nutrition),
            Box::new(exercise),
        ))
    }

    /// Which classifier strategy is active.
    pub fn strategy_name(&self) -> &'static str {
        self.dialogue.strategy_name()
    }

    /// Process one conversational turn. The caller must serialize turns for
    /// a given session; no two turns on the same state may run concurrently.
    pub fn process(&self, state: &mut ConversationState, input: &str) -> String {
        if input.trim().is_empty() {
            return response::empty_input();
        }

        state.push_turn(TurnRole::User, input);
        let reply = match self.dialogue.advance(state, input) {
            DialogueOutcome::BmiResult(measurement, record) => {
                response::bmi_result(&measurement, &record)
            }
            DialogueOutcome::BmiPrompt => response::bmi_prompt(),
            DialogueOutcome::BmiReprompt => response::bmi_reprompt(),
            DialogueOutcome::BmiFailed => response::bmi_failed(),
            DialogueOutcome::Routed(classification) => self.respond(classification.intent, input),
        };
        state.push_turn(TurnRole::Assistant, &reply);
        reply
    }

    fn respond(&self, intent: Intent, input: &str) -> String {
        match intent {
            Intent::Greeting => response::greeting(&self.agent_name),
            Intent::Workout => {
                let filter = extract_exercise_filter(input);
                match self.exercise.exercises(&filter) {
                    Ok(list) => response::exercises(&list),
                    Err(err) => {
                        tracing::warn!("exercise provider unavailable: {err}");
                        response::unavailable(&err)
                    }
                }
            }
            Intent::Nutrition => {
                let food_item = extract_food_item(input);
                match self.nutrition.nutrition(&food_item) {
                    Ok(facts) => response::nutrition(&facts),
                    Err(err) => {
                        tracing::warn!("nutrition provider unavailable: {err}");
                        response::unavailable(&err)
                    }
                }
            }
            Intent::Motivation => response::motivation(&self.motivation.motivation(input)),
            // The dialogue machine intercepts bmi turns before routing; this
            // arm is a defensive terminal that re-prompts.
            Intent::Bmi => response::bmi_prompt(),
            Intent::Unknown => response::unknown(),
        }
    }
}

fn build_classifier(
    settings: &Settings,
    predictor: Option<Box<dyn IntentPredictor>>,
) -> Box<dyn IntentClassifier> {
    let cfg = &settings.classifier;
    let lexicon = KeywordLexicon::default().with_overrides(&cfg.keywords);
    let keyword = KeywordClassifier::new(lexicon.clone(), cfg.unknown_confidence);

    if let Some(predictor) = predictor {
        return Box::new(PredictorClassifier::new(
            predictor,
            keyword,
            cfg.low_confidence_threshold,
        ));
    }

    match cfg.mode {
        ClassifierMode::Scored => Box::new(ScoredClassifier::new(lexicon, cfg.unknown_confidence)),
        ClassifierMode::Keyword => Box::new(keyword),
        ClassifierMode::Predictor => {
            tracing::warn!("predictor mode configured but no predictor installed, using keywords");
            Box::new(keyword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_agent_core::{
        Exercise, ExerciseFilter, NutritionFacts, Prediction, ProviderError,
    };

    struct StubNutrition;

    impl NutritionProvider for StubNutrition {
        fn nutrition(&self, food_item: &str) -> Result<NutritionFacts, ProviderError> {
            Ok(NutritionFacts {
                name: food_item.to_string(),
                calories: Some(165.0),
                protein_g: Some(31.0),
                ..Default::default()
            })
        }
    }

    struct FailingExercise;

    impl ExerciseProvider for FailingExercise {
        fn exercises(&self, _filter: &ExerciseFilter) -> Result<Vec<Exercise>, ProviderError> {
            Err(ProviderError::new("connection refused"))
        }
    }

    fn agent() -> FitnessAgent {
        // Default settings carry no API key, so the provider serves the
        // static fallback table without touching the network.
        FitnessAgent::from_settings(&Settings::default()).unwrap()
    }

    #[test]
    fn empty_input_short_circuits() {
        let agent = agent();
        let mut state = ConversationState::new();
        assert_eq!(agent.process(&mut state, "   "), "Please enter a message!");
        assert!(state.turns().is_empty());
    }

    #[test]
    fn greeting_turn_uses_the_configured_name() {
        let agent = agent();
        let mut state = ConversationState::new();
        let reply = agent.process(&mut state, "Hello");
        assert!(reply.contains("Welcome to your AI Fitness Assistant!"));
    }

    #[test]
    fn immediate_bmi_turn_yields_a_result() {
        let agent = agent();
        let mut state = ConversationState::new();
        let reply = agent.process(&mut state, "I weigh 70 kg and I'm 1.75 meters tall");
        assert!(reply.contains("BMI Calculation Results"));
        assert!(reply.contains("22.86"));
        assert!(reply.contains("Normal"));
        assert!(!state.awaiting_measurement());
    }

    #[test]
    fn two_turn_bmi_flow() {
        let agent = agent();
        let mut state = ConversationState::new();

        let prompt = agent.process(&mut state, "Calculate my BMI");
        assert!(prompt.contains("BMI Calculator"));
        assert!(state.awaiting_measurement());

        let reprompt = agent.process(&mut state, "no idea");
        assert!(reprompt.contains("couldn't understand"));
        assert!(state.awaiting_measurement());

        let result = agent.process(&mut state, "I weigh 70 kg and I'm 1.75 meters tall");
        assert!(result.contains("BMI Calculation Results"));
        assert!(!state.awaiting_measurement());
    }

    #[test]
    fn workout_turn_serves_the_fallback_table_offline() {
        let agent = agent();
        let mut state = ConversationState::new();
        let reply = agent.process(&mut state, "Show me chest exercises");
        assert!(reply.contains("Recommended Exercises"));
        assert!(reply.contains("Push-ups"));
        // The underlying key/network failure never reaches the user.
        assert!(!reply.contains("API key"));
    }

    #[test]
    fn exercise_provider_error_renders_the_uniform_line() {
        let agent = FitnessAgent::new(
            "Coach",
            Box::new(KeywordClassifier::default()),
            Box::new(StubNutrition),
            Box::new(FailingExercise),
        );
        let mut state = ConversationState::new();
        let reply = agent.process(&mut state, "Show me chest exercises");
        assert!(reply.starts_with("❌ "));
    }

    #[test]
    fn nutrition_turn_formats_provider_data() {
        let agent = FitnessAgent::new(
            "Coach",
            Box::new(KeywordClassifier::default()),
            Box::new(StubNutrition),
            Box::new(FailingExercise),
        );
        let mut state = ConversationState::new();
        let reply = agent.process(&mut state, "calories in chicken breast");
        assert!(reply.contains("Nutrition Information for Chicken Breast"));
        assert!(reply.contains("165 kcal"));
    }

    #[test]
    fn motivation_turn_renders_the_triple() {
        let agent = agent();
        let mut state = ConversationState::new();
        let reply = agent.process(&mut state, "I feel so lazy today");
        assert!(reply.contains("Motivation Boost"));
        assert!(reply.contains("Quick Encouragement"));
        assert!(reply.contains("Start small today"));
    }

    #[test]
    fn unknown_turn_gets_the_help_text() {
        let agent = agent();
        let mut state = ConversationState::new();
        let reply = agent.process(&mut state, "what's the capital of France");
        assert!(reply.contains("not sure how to help"));
    }

    #[test]
    fn transcript_records_both_sides_of_each_turn() {
        let agent = agent();
        let mut state = ConversationState::new();
        agent.process(&mut state, "Hello");
        agent.process(&mut state, "Calculate my BMI");
        assert_eq!(state.turns().len(), 4);
        assert_eq!(state.turns()[0].role, TurnRole::User);
        assert_eq!(state.turns()[1].role, TurnRole::Assistant);
    }

    #[test]
    fn sessions_do_not_share_state() {
        let agent = agent();
        let mut first = ConversationState::new();
        let mut second = ConversationState::new();

        agent.process(&mut first, "Calculate my BMI");
        assert!(first.awaiting_measurement());
        assert!(!second.awaiting_measurement());

        let reply = agent.process(&mut second, "Hello");
        assert!(reply.contains("Welcome"));
    }

    #[test]
    fn predictor_wiring_reports_its_strategy() {
        struct FixedPredictor;
        impl IntentPredictor for FixedPredictor {
            fn predict(&self, _text: &str) -> Result<Prediction, ProviderError> {
                Ok(Prediction {
                    label: "greeting".to_string(),
                    probability: 0.9,
                })
            }
        }

        let agent =
            FitnessAgent::with_predictor(&Settings::default(), Box::new(FixedPredictor)).unwrap();
        assert_eq!(agent.strategy_name(), "predictor");

        let keyword_agent = agent_with_default_settings_strategy();
        assert_eq!(keyword_agent.strategy_name(), "keyword");
    }

    fn agent_with_default_settings_strategy() -> FitnessAgent {
        FitnessAgent::from_settings(&Settings::default()).unwrap()
    }
}
