use std::borrow::Cow;
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{
    PROBABILITY_NUMBER_WARNING, PROBABILITY_SUM_WARNING, PROBABILITY_TARGET, PROBABILITY_TOLERANCE,
};
use crate::roulette_prize::AdminPrize;
use crate::roulette_slots::PrizeSlot;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

pub fn validate_slot_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR.is_match(color) {
        let mut err = ValidationError::new("invalid_slot_color");
        err.add_param(Cow::from("color"), &color);
        return Err(err);
    }
    Ok(())
}

/// Checks a wheel configuration before it is turned into a `SlotRing`.
pub fn validate_slots(slots: &[PrizeSlot]) -> Result<(), ValidationError> {
    if slots.is_empty() {
        return Err(ValidationError::new("empty_slot_ring"));
    }

    let mut seen = HashSet::with_capacity(slots.len());
    for slot in slots {
        if !seen.insert(slot.id) {
            let mut err = ValidationError::new("duplicate_slot_id");
            err.add_param(Cow::from("id"), &slot.id);
            return Err(err);
        }
        validate_slot_color(&slot.color)?;
        if slot.weight.is_nan() || slot.weight < 0.0 {
            let mut err = ValidationError::new("negative_weight");
            err.add_param(Cow::from("id"), &slot.id);
            return Err(err);
        }
    }
    Ok(())
}

/// Sum of the probabilities of the active rows of an admin prize table.
pub fn probability_total(rows: &[AdminPrize]) -> f64 {
    rows.iter()
        .filter(|row| row.active)
        .map(|row| row.probability)
        .sum()
}

// Advisory only: the prize table is authoritative on the server.
pub fn validate_probability_total(probabilities: &[f64]) -> Result<(), ValidationError> {
    let total: f64 = probabilities.iter().sum();
    if !total.is_finite() || (total - PROBABILITY_TARGET).abs() > PROBABILITY_TOLERANCE {
        let mut err = ValidationError::new("probability_sum");
        err.message = Some(Cow::from(PROBABILITY_SUM_WARNING));
        err.add_param(Cow::from("total"), &total);
        return Err(err);
    }
    Ok(())
}

pub fn validate_prize_table(rows: &[AdminPrize]) -> Result<(), ValidationError> {
    if let Some(row) = rows.iter().find(|row| !row.probability.is_finite()) {
        let mut err = ValidationError::new("invalid_probability");
        err.message = Some(Cow::from(PROBABILITY_NUMBER_WARNING));
        err.add_param(Cow::from("id"), &row.id);
        return Err(err);
    }
    if let Some(row) = rows.iter().find(|row| row.probability < 0.0) {
        let mut err = ValidationError::new("negative_weight");
        err.add_param(Cow::from("id"), &row.id);
        return Err(err);
    }
    let active: Vec<f64> = rows
        .iter()
        .filter(|row| row.active)
        .map(|row| row.probability)
        .collect();
    validate_probability_total(&active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roulette_slots::SlotRing;

    fn row(id: u32, probability: f64, active: bool) -> AdminPrize {
        AdminPrize {
            id,
            name: format!("Prize {}", id),
            kind: "cash".to_string(),
            value: 10.0,
            probability,
            active,
            image: None,
        }
    }

    #[test]
    fn test_probability_total_ignores_inactive_rows() {
        let rows = vec![row(1, 60.0, true), row(2, 40.0, true), row(3, 25.0, false)];
        assert_eq!(probability_total(&rows), 100.0);
        assert!(validate_prize_table(&rows).is_ok());
    }

    #[test]
    fn test_probability_sum_mismatch_reports_total() {
        let err = validate_probability_total(&[50.0, 30.0, 10.0]).unwrap_err();
        assert_eq!(err.code, "probability_sum");
        assert_eq!(err.params["total"], serde_json::json!(90.0));
    }

    #[test]
    fn test_probability_sum_tolerates_rounding() {
        assert!(validate_probability_total(&[33.333, 33.333, 33.334]).is_ok());
        assert!(validate_probability_total(&[33.3, 33.3, 33.3]).is_err());
    }

    #[test]
    fn test_negative_probability_rejected() {
        let rows = vec![row(1, 110.0, true), row(2, -10.0, true)];
        let err = validate_prize_table(&rows).unwrap_err();
        assert_eq!(err.code, "negative_weight");
    }

    #[test]
    fn test_non_finite_probability_rejected() {
        let rows = vec![row(1, 100.0, true), row(2, f64::NAN, true)];
        let err = validate_prize_table(&rows).unwrap_err();
        assert_eq!(err.code, "invalid_probability");
        assert_eq!(err.params["id"], serde_json::json!(2));

        // Inactive rows are still sent to the server
        let rows = vec![row(1, 100.0, true), row(2, f64::INFINITY, false)];
        assert_eq!(validate_prize_table(&rows).unwrap_err().code, "invalid_probability");

        assert!(validate_probability_total(&[f64::NAN]).is_err());
        assert!(validate_probability_total(&[100.0, f64::NEG_INFINITY]).is_err());
    }

    #[test]
    fn test_slot_color_formats() {
        assert!(validate_slot_color("#fff").is_ok());
        assert!(validate_slot_color("#F97316").is_ok());
        assert!(validate_slot_color("orange").is_err());
        assert!(validate_slot_color("#12345").is_err());
    }

    #[test]
    fn test_slots_reject_duplicates_and_empty() {
        assert_eq!(validate_slots(&[]).unwrap_err().code, "empty_slot_ring");

        let mut slots: Vec<PrizeSlot> = SlotRing::default().iter().cloned().collect();
        slots[1].id = slots[0].id;
        assert_eq!(validate_slots(&slots).unwrap_err().code, "duplicate_slot_id");
    }
}
