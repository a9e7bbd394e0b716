//! Answer validation rules for each prompted field

use regex::Regex;
use truckfleet_types::{Error, Result};

const QUIT_WORDS: [&str; 2] = ["q", "quit"];
const NEGATIVE_WORDS: [&str; 3] = ["n", "no", "not"];
const AFFIRMATIVE_WORDS: [&str; 2] = ["y", "yes"];

/// Prompt, re-prompt and acceptance check for one field
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub prompt: &'static str,
    pub error_prompt: &'static str,
    pattern: Regex,
}

impl FieldRule {
    fn pattern(prompt: &'static str, error_prompt: &'static str, pattern: &str) -> Result<Self> {
        let re = Regex::new(pattern).map_err(|e| Error::InvalidPattern(e.to_string()))?;
        Ok(Self {
            prompt,
            error_prompt,
            pattern: re,
        })
    }

    pub fn accepts(&self, answer: &str) -> bool {
        self.pattern.is_match(answer)
    }
}

/// The full set of rules used by the fleet dialogue
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub brand: FieldRule,
    pub model: FieldRule,
    pub engine_cc: FieldRule,
    pub axle_count: FieldRule,
    pub weight: FieldRule,
    pub max_load: FieldRule,
    pub fleet_size: FieldRule,
    pub truck_number: FieldRule,
}

impl FieldRules {
    pub fn standard() -> Result<Self> {
        Ok(Self {
            // Letters only; letter-like numerals such as roman numeral signs are rejected
            brand: FieldRule::pattern(
                "Brand: ",
                "Brand name should not contain numbers; please try again: ",
                r"^\p{L}+$",
            )?,
            // Prefix match: anything may follow the digits
            model: FieldRule::pattern(
                "Model: ",
                "Model name should have the pattern of two letters followed by space followed by a series of numbers, \
                 e.g. \"SC 3200\"; please try again: ",
                r"^[A-Za-z]{2} [0-9]+",
            )?,
            engine_cc: FieldRule::pattern(
                "Engine size (in cubic centimeters): ",
                "Engine size should contain only numbers; please try again: ",
                r"^[0-9]+$",
            )?,
            axle_count: FieldRule::pattern(
                "Number of truck axles: ",
                "Please enter only a single- or double-digit whole number: ",
                r"^[0-9]{1,2}$",
            )?,
            weight: FieldRule::pattern(
                "Truck weight in metric tonnes: ",
                "Truck weight should contain only whole or decimal numbers; please try again: ",
                r"^[0-9]+(\.[0-9]*)?$",
            )?,
            max_load: FieldRule::pattern(
                "Truck maximal load in metric tonnes: ",
                "Maximal load should contain only whole or decimal numbers; please try again: ",
                r"^[0-9]+(\.[0-9]*)?$",
            )?,
            fleet_size: FieldRule::pattern(
                "How many vehicles are there in this fleet? ",
                "Please provide whole numbers only: ",
                r"^[0-9]+$",
            )?,
            truck_number: FieldRule::pattern(
                "What is the number of truck that contains incorrect information? ",
                "Please provide whole numbers only: ",
                r"^[0-9]+$",
            )?,
        })
    }
}

fn matches_any(answer: &str, words: &[&str]) -> bool {
    let answer = answer.trim();
    words.iter().any(|w| answer.eq_ignore_ascii_case(w))
}

pub fn is_quit(answer: &str) -> bool {
    matches_any(answer, &QUIT_WORDS)
}

pub fn is_negative(answer: &str) -> bool {
    matches_any(answer, &NEGATIVE_WORDS)
}

pub fn is_affirmative(answer: &str) -> bool {
    matches_any(answer, &AFFIRMATIVE_WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> FieldRules {
        FieldRules::standard().unwrap()
    }

    #[test]
    fn test_brand_is_alphabetic_only() {
        let r = rules();
        assert!(r.brand.accepts("Scania"));
        assert!(r.brand.accepts("Škoda"));
        assert!(!r.brand.accepts(""));
        assert!(!r.brand.accepts("Volvo2"));
        assert!(!r.brand.accepts("Mercedes-Benz"));
        assert!(!r.brand.accepts("Iveco "));
        assert!(!r.brand.accepts("Ⅻ"));
        assert!(!r.brand.accepts("Tatra\u{2163}"));
    }

    #[test]
    fn test_model_prefix_pattern() {
        let r = rules();
        assert!(r.model.accepts("SC 3200"));
        assert!(r.model.accepts("fh 16 Globetrotter"));
        assert!(!r.model.accepts("SC3200"));
        assert!(!r.model.accepts("S 3200"));
        assert!(!r.model.accepts("SCA 3200"));
        assert!(!r.model.accepts(" SC 3200"));
    }

    #[test]
    fn test_numeric_fields() {
        let r = rules();
        assert!(r.engine_cc.accepts("12700"));
        assert!(!r.engine_cc.accepts("12.7"));
        assert!(!r.engine_cc.accepts("-1"));

        assert!(r.axle_count.accepts("3"));
        assert!(r.axle_count.accepts("12"));
        assert!(!r.axle_count.accepts("123"));
        assert!(!r.axle_count.accepts(""));

        for rule in [&r.weight, &r.max_load] {
            assert!(rule.accepts("9"));
            assert!(rule.accepts("9.5"));
            assert!(rule.accepts("9."));
            assert!(!rule.accepts(".5"));
            assert!(!rule.accepts("-9"));
            assert!(!rule.accepts("9,5"));
        }
    }

    #[test]
    fn test_keywords() {
        assert!(is_quit("q"));
        assert!(is_quit("QUIT"));
        assert!(is_quit(" Quit "));
        assert!(!is_quit("quitting"));

        assert!(is_negative("N"));
        assert!(is_negative("not"));
        assert!(!is_negative("nope"));

        assert!(is_affirmative("Yes"));
        assert!(!is_affirmative("yeah"));
    }
}
