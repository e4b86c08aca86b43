//! Per-field corruption rules
//!
//! Each rule runs one independent trial against the randomness source and
//! either passes the clean value through or degrades it. The rules differ
//! only in the wire shape of the degraded outcome.

use crate::rng::Randomness;
use havoc_types::Degradable;

/// Applies independent corruption trials to clean field values.
pub struct FieldCorruptor<'a> {
    rng: &'a dyn Randomness,
}

impl<'a> FieldCorruptor<'a> {
    pub fn new(rng: &'a dyn Randomness) -> Self {
        Self { rng }
    }

    /// Trial success turns the value into a wire `null`; the key stays.
    pub fn nullable(&self, probability: f64, value: String) -> Option<String> {
        if self.rng.chance(probability) {
            None
        } else {
            Some(value)
        }
    }

    /// Trial success removes the field from the record entirely.
    pub fn droppable(&self, probability: f64, value: String) -> Option<String> {
        if self.rng.chance(probability) {
            None
        } else {
            Some(value)
        }
    }

    /// Trial success blanks the value: present, but empty.
    pub fn blankable(&self, probability: f64, value: String) -> String {
        if self.rng.chance(probability) {
            String::new()
        } else {
            value
        }
    }

    /// Trial success substitutes a fixed degraded placeholder.
    pub fn substitutable(&self, probability: f64, value: String, placeholder: &str) -> String {
        if self.rng.chance(probability) {
            placeholder.to_string()
        } else {
            value
        }
    }

    /// Trial success nulls a tri-state field; dropping it is a separate,
    /// later trial owned by the generator.
    pub fn degradable<T>(&self, probability: f64, value: T) -> Degradable<T> {
        if self.rng.chance(probability) {
            Degradable::Nulled
        } else {
            Degradable::Intact(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::testing::AlwaysRandomness;

    #[test]
    fn test_trials_pass_values_through() {
        let rng = AlwaysRandomness::passing();
        let corruptor = FieldCorruptor::new(&rng);

        assert_eq!(
            corruptor.nullable(0.3, "Ada".to_string()),
            Some("Ada".to_string())
        );
        assert_eq!(
            corruptor.droppable(0.2, "555".to_string()),
            Some("555".to_string())
        );
        assert_eq!(corruptor.blankable(0.2, "Engineer".to_string()), "Engineer");
        assert_eq!(
            corruptor.substitutable(0.15, "good".to_string(), "bad"),
            "good"
        );
        assert!(corruptor.degradable(0.2, 42).is_intact());
    }

    #[test]
    fn test_trials_degrade_on_success() {
        let rng = AlwaysRandomness::firing();
        let corruptor = FieldCorruptor::new(&rng);

        assert_eq!(corruptor.nullable(0.3, "Ada".to_string()), None);
        assert_eq!(corruptor.droppable(0.2, "555".to_string()), None);
        assert_eq!(corruptor.blankable(0.2, "Engineer".to_string()), "");
        assert_eq!(
            corruptor.substitutable(0.15, "good".to_string(), "bad"),
            "bad"
        );
        assert!(corruptor.degradable(0.2, 42).is_nulled());
    }
}
