//! Two-state dialogue machine for the BMI slot-filling flow.
//!
//! `Idle` routes every turn through the intent classifier;
//! `AwaitingMeasurement` bypasses classification entirely and feeds the
//! turn straight into the measurement extractor until it is satisfied.
//! Only the BMI intent ever enters the awaiting state.

use fitness_agent_core::{
    Classification, ConversationState, DialoguePhase, Intent, NormalizedMeasurement,
};
use fitness_agent_text_processing::{IntentClassifier, MeasurementExtractor};
use fitness_agent_tools::{bmi, BmiRecord};

/// What the turn produced; the response synthesizer maps each variant to a
/// template.
#[derive(Debug)]
pub enum DialogueOutcome {
    /// Measurement in hand, BMI computed.
    BmiResult(NormalizedMeasurement, BmiRecord),
    /// BMI requested without a measurement; now awaiting one.
    BmiPrompt,
    /// Still awaiting a measurement after an unreadable turn.
    BmiReprompt,
    /// BMI engine rejected the extracted values; awaiting state cleared.
    BmiFailed,
    /// Not a BMI turn; the caller dispatches on the classified intent.
    Routed(Classification),
}

pub struct DialogueStateMachine {
    classifier: Box<dyn IntentClassifier>,
    extractor: MeasurementExtractor,
}

impl DialogueStateMachine {
    pub fn new(classifier: Box<dyn IntentClassifier>) -> Self {
        Self {
            classifier,
            extractor: MeasurementExtractor::new(),
        }
    }

    /// Which classifier strategy is active.
    pub fn strategy_name(&self) -> &'static str {
        self.classifier.strategy_name()
    }

    /// Advance the machine by one turn. The awaiting flag persists until a
    /// readable measurement arrives or the engine rejects one; there is no
    /// turn limit.
    pub fn advance(&self, state: &mut ConversationState, utterance: &str) -> DialogueOutcome {
        if state.awaiting_measurement() {
            return match self.extractor.extract(utterance) {
                Some(measurement) => {
                    state.set_phase(DialoguePhase::Idle);
                    self.complete_bmi(measurement)
                }
                None => {
                    tracing::debug!("no measurement in slot-filling turn, re-prompting");
                    DialogueOutcome::BmiReprompt
                }
            };
        }

        let classification = self.classifier.classify(utterance);
        tracing::debug!(
            intent = %classification.intent,
            confidence = classification.confidence,
            strategy = self.strategy_name(),
            "turn classified"
        );

        if classification.intent != Intent::Bmi {
            return DialogueOutcome::Routed(classification);
        }

        match self.extractor.extract(utterance) {
            Some(measurement) => self.complete_bmi(measurement),
            None => {
                state.set_phase(DialoguePhase::AwaitingMeasurement);
                DialogueOutcome::BmiPrompt
            }
        }
    }

    fn complete_bmi(&self, measurement: NormalizedMeasurement) -> DialogueOutcome {
        match bmi::compute(measurement.weight_kg, measurement.height_m) {
            Ok(record) => DialogueOutcome::BmiResult(measurement, record),
            Err(err) => {
                tracing::debug!("bmi computation rejected extracted values: {err}");
                DialogueOutcome::BmiFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_agent_text_processing::KeywordClassifier;
    use fitness_agent_tools::BmiCategory;

    fn machine() -> DialogueStateMachine {
        DialogueStateMachine::new(Box::new(KeywordClassifier::default()))
    }

    #[test]
    fn bmi_with_measurement_completes_in_one_turn() {
        let machine = machine();
        let mut state = ConversationState::new();

        let outcome = machine.advance(&mut state, "I weigh 70 kg and I'm 1.75 meters tall");
        match outcome {
            DialogueOutcome::BmiResult(m, record) => {
                assert_eq!(m.weight_kg, 70.0);
                assert_eq!(record.category, BmiCategory::Normal);
            }
            other => panic!("expected BmiResult, got {other:?}"),
        }
        assert!(!state.awaiting_measurement());
    }

    #[test]
    fn bmi_without_measurement_enters_awaiting() {
        let machine = machine();
        let mut state = ConversationState::new();

        let outcome = machine.advance(&mut state, "Calculate my BMI");
        assert!(matches!(outcome, DialogueOutcome::BmiPrompt));
        assert!(state.awaiting_measurement());
    }

    #[test]
    fn awaiting_turn_bypasses_the_classifier() {
        let machine = machine();
        let mut state = ConversationState::new();
        machine.advance(&mut state, "Calculate my BMI");

        // A greeting-looking utterance would classify as greeting, but the
        // awaiting state reads it for measurements first.
        let outcome = machine.advance(&mut state, "hello, I weigh 70 kg and I'm 1.75 meters tall");
        assert!(matches!(outcome, DialogueOutcome::BmiResult(_, _)));
        assert!(!state.awaiting_measurement());
    }

    #[test]
    fn unreadable_slot_filling_turns_reprompt_without_limit() {
        let machine = machine();
        let mut state = ConversationState::new();
        machine.advance(&mut state, "Calculate my BMI");

        for _ in 0..4 {
            let outcome = machine.advance(&mut state, "umm I don't know");
            assert!(matches!(outcome, DialogueOutcome::BmiReprompt));
            assert!(state.awaiting_measurement());
        }
    }

    #[test]
    fn non_bmi_turns_are_routed_with_their_classification() {
        let machine = machine();
        let mut state = ConversationState::new();

        match machine.advance(&mut state, "Show me chest exercises") {
            DialogueOutcome::Routed(classification) => {
                assert_eq!(classification.intent, Intent::Workout);
            }
            other => panic!("expected Routed, got {other:?}"),
        }
        assert!(!state.awaiting_measurement());
    }
}
