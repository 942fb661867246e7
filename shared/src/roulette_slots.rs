use std::f64::consts::TAU;

use once_cell::sync::Lazy;
use validator::ValidationError;

use crate::validation::validate_slots;

/// Canvas angle of the fixed pointer (straight up, y grows downwards).
pub const POINTER_ANGLE: f64 = 1.5 * std::f64::consts::PI;

/// One visual segment of the wheel. The list of slots is client configuration
/// and does not reflect the server's probability table.
#[derive(Debug, Clone, PartialEq)]
pub struct PrizeSlot {
    pub id: u32,
    pub display_name: String,
    pub short_label: String,
    pub color: String,
    pub weight: f64,
    pub cash_value: f64,
    pub icon: String,
}

impl PrizeSlot {
    pub fn new(
        id: u32,
        display_name: &str,
        short_label: &str,
        color: &str,
        weight: f64,
        cash_value: f64,
        icon: &str,
    ) -> Self {
        Self {
            id,
            display_name: display_name.to_string(),
            short_label: short_label.to_string(),
            color: color.to_string(),
            weight,
            cash_value,
            icon: icon.to_string(),
        }
    }
}

static DEFAULT_SLOTS: Lazy<Vec<PrizeSlot>> = Lazy::new(|| {
    vec![
        PrizeSlot::new(1, "$100 Cash", "$100", "#f59e0b", 2.0, 100.0, "💰"),
        PrizeSlot::new(2, "10 Points", "10 pts", "#06b6d4", 25.0, 0.0, "⭐"),
        PrizeSlot::new(3, "$50 Cash", "$50", "#10b981", 5.0, 50.0, "💵"),
        PrizeSlot::new(4, "Free Spin", "SPIN", "#8b5cf6", 15.0, 0.0, "🔄"),
        PrizeSlot::new(5, "$25 Cash", "$25", "#ef4444", 10.0, 25.0, "💵"),
        PrizeSlot::new(6, "20% Deposit Bonus", "20%", "#ec4899", 18.0, 0.0, "🎁"),
        PrizeSlot::new(7, "Freeroll Ticket", "TICKET", "#3b82f6", 10.0, 0.0, "🎟"),
        PrizeSlot::new(8, "$10 Cash", "$10", "#f97316", 15.0, 10.0, "💵"),
    ]
});

/// Ordered, non-empty set of slots and the geometry that follows from it.
///
/// Slot `k` covers the wheel-local arc `(POINTER_ANGLE - (k + 1) * segment,
/// POINTER_ANGLE - k * segment]`, so slots run counter-clockwise from the
/// pointer when the wheel is at rest. Both the canvas and slot resolution use
/// this layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRing {
    slots: Vec<PrizeSlot>,
}

impl SlotRing {
    pub fn new(slots: Vec<PrizeSlot>) -> Result<Self, ValidationError> {
        validate_slots(&slots)?;
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn segment_angle(&self) -> f64 {
        TAU / self.slots.len() as f64
    }

    pub fn slot(&self, index: usize) -> Option<&PrizeSlot> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrizeSlot> {
        self.slots.iter()
    }

    /// Wheel-local `(start, end)` of a slot's arc, in radians.
    pub fn arc(&self, index: usize) -> (f64, f64) {
        let segment = self.segment_angle();
        let end = POINTER_ANGLE - index as f64 * segment;
        (end - segment, end)
    }

    pub fn slot_at_local_angle(&self, local: f64) -> usize {
        slot_at_local_angle(local, self.slots.len())
    }
}

impl Default for SlotRing {
    fn default() -> Self {
        Self {
            slots: DEFAULT_SLOTS.clone(),
        }
    }
}

/// Inverse of `SlotRing::arc` for a ring of `slot_count` equal segments.
pub fn slot_at_local_angle(local: f64, slot_count: usize) -> usize {
    if slot_count == 0 {
        return 0;
    }
    let segment = TAU / slot_count as f64;
    let offset = (POINTER_ANGLE - local).rem_euclid(TAU);
    ((offset / segment).floor() as usize).min(slot_count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ring_is_valid() {
        let ring = SlotRing::default();
        assert_eq!(ring.len(), 8);
        assert!(SlotRing::new(ring.iter().cloned().collect()).is_ok());
        let total: f64 = ring.iter().map(|s| s.weight).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_arcs_tile_the_circle() {
        let ring = SlotRing::default();
        for i in 0..ring.len() - 1 {
            let (start, _) = ring.arc(i);
            let (_, next_end) = ring.arc(i + 1);
            assert!((start - next_end).abs() < 1e-12);
        }
        let (_, first_end) = ring.arc(0);
        let (last_start, _) = ring.arc(ring.len() - 1);
        assert!((first_end - last_start - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_arc_midpoint_maps_back_to_slot() {
        for count in [1usize, 3, 8, 12] {
            let slots = (0..count as u32)
                .map(|id| PrizeSlot::new(id, "Prize", "P", "#abcdef", 1.0, 0.0, ""))
                .collect();
            let ring = SlotRing::new(slots).unwrap();
            for i in 0..count {
                let (start, end) = ring.arc(i);
                assert_eq!(ring.slot_at_local_angle((start + end) / 2.0), i);
            }
        }
    }

    #[test]
    fn test_empty_ring_rejected() {
        assert!(SlotRing::new(Vec::new()).is_err());
    }
}
