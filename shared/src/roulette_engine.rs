//! Frame-driven spin animation for the prize wheel.
//!
//! The server decides the prize. The engine only picks a plausible slot to
//! aim at, decelerates the dial with multiplicative friction, eases into the
//! target and reports which slot ended up under the pointer.

use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::roulette_prize::ResolvedPrize;
use crate::roulette_slots::{slot_at_local_angle, SlotRing, POINTER_ANGLE};

/// Animation constants. Angles are radians, velocities radians per frame.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpinTuning {
    /// Whole rotations before landing, sampled from `min_rotations..max_rotations`.
    pub min_rotations: u32,
    pub max_rotations: u32,
    pub min_velocity: f64,
    pub max_velocity: f64,
    pub friction: f64,
    pub velocity_epsilon: f64,
    pub settle_blend: f64,
    pub snap_tolerance: f64,
    pub celebration_threshold: f64,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            min_rotations: 5,
            max_rotations: 8,
            min_velocity: 0.4,
            max_velocity: 0.6,
            friction: 0.98,
            velocity_epsilon: 0.005,
            settle_blend: 0.1,
            snap_tolerance: 0.1,
            celebration_threshold: 50.0,
        }
    }
}

impl SpinTuning {
    /// Falls back to defaults for any setting that would stop the animation
    /// from terminating.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut tuning = self;
        if !(tuning.friction > 0.0 && tuning.friction < 1.0) {
            log::warn!("Ignoring friction {}", tuning.friction);
            tuning.friction = defaults.friction;
        }
        if !(tuning.settle_blend > 0.0 && tuning.settle_blend <= 1.0) {
            log::warn!("Ignoring settle blend {}", tuning.settle_blend);
            tuning.settle_blend = defaults.settle_blend;
        }
        if !(tuning.velocity_epsilon > 0.0) || !(tuning.snap_tolerance > 0.0) {
            tuning.velocity_epsilon = defaults.velocity_epsilon;
            tuning.snap_tolerance = defaults.snap_tolerance;
        }
        if tuning.min_rotations >= tuning.max_rotations {
            tuning.min_rotations = defaults.min_rotations;
            tuning.max_rotations = defaults.max_rotations;
        }
        if !(tuning.min_velocity > 0.0 && tuning.min_velocity < tuning.max_velocity) {
            tuning.min_velocity = defaults.min_velocity;
            tuning.max_velocity = defaults.max_velocity;
        }
        tuning
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Spinning,
    Settling,
}

/// Reported to the completion callback once the dial has come to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinCompletion {
    pub slot_index: usize,
    pub cash_value: f64,
    pub celebrate: bool,
}

/// Target rotation that rests the pointer on the middle of `slot_index`.
pub fn target_angle_for_slot(slot_index: usize, rotations: u32, slot_count: usize) -> f64 {
    let segment = TAU / slot_count.max(1) as f64;
    rotations as f64 * TAU + slot_index as f64 * segment + segment / 2.0
}

/// Index of the slot under the pointer when the wheel is rotated by `angle`.
pub fn resolve_slot_from_angle(angle: f64, slot_count: usize) -> usize {
    let normalized = angle.rem_euclid(TAU);
    let under_pointer = (POINTER_ANGLE - normalized).rem_euclid(TAU);
    slot_at_local_angle(under_pointer, slot_count)
}

pub type CompletionCallback = Box<dyn FnMut(&SpinCompletion)>;

pub struct SpinEngine {
    ring: SlotRing,
    tuning: SpinTuning,
    phase: SpinPhase,
    current_angle: f64,
    velocity: f64,
    target_angle: f64,
    target_slot: Option<usize>,
    resolved_slot: Option<usize>,
    on_complete: Option<CompletionCallback>,
}

impl SpinEngine {
    pub fn new(ring: SlotRing, tuning: SpinTuning) -> Self {
        Self {
            ring,
            tuning: tuning.sanitized(),
            phase: SpinPhase::Idle,
            current_angle: 0.0,
            velocity: 0.0,
            target_angle: 0.0,
            target_slot: None,
            resolved_slot: None,
            on_complete: None,
        }
    }

    pub fn set_on_complete<F>(&mut self, callback: F)
    where
        F: FnMut(&SpinCompletion) + 'static,
    {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn ring(&self) -> &SlotRing {
        &self.ring
    }

    pub fn tuning(&self) -> &SpinTuning {
        &self.tuning
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase != SpinPhase::Idle
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target_angle(&self) -> f64 {
        self.target_angle
    }

    pub fn target_slot(&self) -> Option<usize> {
        self.target_slot
    }

    pub fn resolved_slot(&self) -> Option<usize> {
        self.resolved_slot
    }

    /// Starts a spin toward a random slot. Ignored while a spin is in flight.
    pub fn start_spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.is_animating() {
            log::debug!("Spin requested while {:?}, ignoring", self.phase);
            return false;
        }
        let slot = rng.gen_range(0..self.ring.len());
        let rotations = rng.gen_range(self.tuning.min_rotations..self.tuning.max_rotations);
        let velocity = rng.gen_range(self.tuning.min_velocity..self.tuning.max_velocity);
        self.aim_spin(slot, rotations, velocity)
    }

    /// Starts a spin toward a chosen slot with explicit rotations and velocity.
    pub fn aim_spin(&mut self, slot_index: usize, rotations: u32, velocity: f64) -> bool {
        if self.is_animating() {
            log::debug!("Spin requested while {:?}, ignoring", self.phase);
            return false;
        }
        if slot_index >= self.ring.len() || !(velocity > 0.0) {
            log::warn!("Ignoring spin toward slot {} at velocity {}", slot_index, velocity);
            return false;
        }

        self.current_angle = self.current_angle.rem_euclid(TAU);
        self.target_angle = target_angle_for_slot(slot_index, rotations, self.ring.len());
        self.target_slot = Some(slot_index);
        self.resolved_slot = None;
        self.velocity = velocity;
        self.phase = SpinPhase::Spinning;

        log::debug!(
            "Spin started toward slot {} ({} rotations, v0 = {:.3})",
            slot_index,
            rotations,
            velocity
        );
        true
    }

    /// Advances the animation by one display frame and returns the phase after it.
    pub fn on_frame(&mut self) -> SpinPhase {
        match self.phase {
            SpinPhase::Idle => return SpinPhase::Idle,
            SpinPhase::Spinning => {
                self.velocity *= self.tuning.friction;
                if self.velocity >= self.tuning.velocity_epsilon {
                    self.current_angle += self.velocity;
                    return SpinPhase::Spinning;
                }
                log::debug!("Settling at {:.3} rad", self.current_angle);
                self.phase = SpinPhase::Settling;
            }
            SpinPhase::Settling => {}
        }

        self.current_angle += (self.target_angle - self.current_angle) * self.tuning.settle_blend;
        if (self.target_angle - self.current_angle).abs() <= self.tuning.snap_tolerance {
            self.current_angle = self.target_angle;
            self.finish();
        }
        self.phase
    }

    /// Moves a resting wheel to `angle`, normalised into `[0, 2π)`. Ignored
    /// while animating.
    pub fn rest_at(&mut self, angle: f64) -> bool {
        if self.is_animating() || !angle.is_finite() {
            return false;
        }
        self.current_angle = angle.rem_euclid(TAU);
        true
    }

    /// Stops any animation without reporting completion. Used when the host
    /// view goes away mid-spin.
    pub fn teardown(&mut self) {
        if self.is_animating() {
            log::debug!("Spin torn down while {:?}", self.phase);
        }
        self.phase = SpinPhase::Idle;
        self.velocity = 0.0;
    }

    fn finish(&mut self) {
        self.velocity = 0.0;
        self.phase = SpinPhase::Idle;

        let slot_index = resolve_slot_from_angle(self.current_angle, self.ring.len());
        self.resolved_slot = Some(slot_index);
        let cash_value = self.ring.slot(slot_index).map(|s| s.cash_value).unwrap_or(0.0);
        let completion = SpinCompletion {
            slot_index,
            cash_value,
            celebrate: cash_value >= self.tuning.celebration_threshold,
        };

        log::info!("Spin settled on slot {} (cash {})", slot_index, cash_value);
        if let Some(callback) = self.on_complete.as_mut() {
            callback(&completion);
        }
    }
}

/// Turns the host's `is_spinning` flag into a one-shot trigger.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinSignal {
    was_spinning: bool,
}

impl SpinSignal {
    /// True only on a false→true transition.
    pub fn observe(&mut self, is_spinning: bool) -> bool {
        let rising = is_spinning && !self.was_spinning;
        self.was_spinning = is_spinning;
        rising
    }
}

/// What the host passes in: the spinning flag and, once known, the prize.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelInput {
    pub is_spinning: bool,
    pub resolved_prize: Option<ResolvedPrize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roulette_slots::PrizeSlot;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::Cell;
    use std::f64::consts::PI;
    use std::rc::Rc;

    fn ring_with_cash(values: &[f64]) -> SlotRing {
        let slots = values
            .iter()
            .enumerate()
            .map(|(i, v)| PrizeSlot::new(i as u32, "Prize", "P", "#123456", 1.0, *v, ""))
            .collect();
        SlotRing::new(slots).unwrap()
    }

    /// Upper bound on free-spin frames before the epsilon is reached.
    fn max_spinning_frames(tuning: &SpinTuning) -> u32 {
        ((tuning.velocity_epsilon / tuning.max_velocity).ln() / tuning.friction.ln()).ceil() as u32
    }

    fn run_to_idle(engine: &mut SpinEngine) -> u32 {
        let mut frames = 0;
        while engine.on_frame() != SpinPhase::Idle {
            frames += 1;
            assert!(frames < 10_000, "spin never settled");
        }
        frames + 1
    }

    fn counting_engine(ring: SlotRing) -> (SpinEngine, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let mut engine = SpinEngine::new(ring, SpinTuning::default());
        let counter = count.clone();
        engine.set_on_complete(move |_| counter.set(counter.get() + 1));
        (engine, count)
    }

    #[test]
    fn test_resolve_stays_in_range() {
        for count in [1usize, 2, 5, 8, 13] {
            let mut angle = 0.0;
            while angle < TAU {
                assert!(resolve_slot_from_angle(angle, count) < count);
                angle += 0.001;
            }
            assert!(resolve_slot_from_angle(TAU - 1e-15, count) < count);
            assert!(resolve_slot_from_angle(-3.0 * TAU - 0.2, count) < count);
        }
    }

    #[test]
    fn test_target_round_trips_for_every_slot() {
        for count in [1usize, 3, 6, 8, 10, 37] {
            for slot in 0..count {
                for rotations in 5..8 {
                    let target = target_angle_for_slot(slot, rotations, count);
                    assert_eq!(resolve_slot_from_angle(target, count), slot);
                }
            }
        }
    }

    #[test]
    fn test_eight_slot_scenario() {
        let segment = PI / 4.0;
        for n in 5..8 {
            let target = target_angle_for_slot(3, n, 8);
            let expected = n as f64 * 2.0 * PI + 3.0 * segment + PI / 8.0;
            assert!((target - expected).abs() < 1e-9);
            assert_eq!(resolve_slot_from_angle(target, 8), 3);
        }
    }

    #[test]
    fn test_engine_lands_on_aimed_slot() {
        let mut rng = StdRng::seed_from_u64(7);
        let (mut engine, count) = counting_engine(SlotRing::default());
        for _ in 0..20 {
            assert!(engine.start_spin(&mut rng));
            let aimed = engine.target_slot().unwrap();
            run_to_idle(&mut engine);
            assert_eq!(engine.resolved_slot(), Some(aimed));
            assert_eq!(engine.current_angle(), engine.target_angle());
        }
        assert_eq!(count.get(), 20);
    }

    #[test]
    fn test_start_spin_samples_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut engine = SpinEngine::new(SlotRing::default(), SpinTuning::default());
        for _ in 0..50 {
            engine.start_spin(&mut rng);
            assert!(engine.velocity() >= 0.4 && engine.velocity() < 0.6);
            let rotations = (engine.target_angle() / TAU).floor() as u32;
            assert!((5..8).contains(&rotations));
            engine.teardown();
        }
    }

    #[test]
    fn test_velocity_converges_within_bound() {
        let tuning = SpinTuning::default();
        for v0 in [0.4, 0.45, 0.5, 0.599_999] {
            let bound = ((0.005f64 / v0).ln() / 0.98f64.ln()).ceil() as u32;
            let mut engine = SpinEngine::new(SlotRing::default(), tuning);
            engine.aim_spin(0, 5, v0);
            let mut last = engine.velocity();
            let mut frames = 0;
            while engine.phase() == SpinPhase::Spinning {
                engine.on_frame();
                frames += 1;
                if engine.phase() == SpinPhase::Spinning {
                    assert!(engine.velocity() < last);
                    last = engine.velocity();
                }
            }
            assert!(frames <= bound, "{} frames for v0 {}", frames, v0);
            assert!(frames <= max_spinning_frames(&tuning));
        }
    }

    #[test]
    fn test_second_start_is_ignored() {
        let mut rng = StdRng::seed_from_u64(3);
        let (mut engine, count) = counting_engine(SlotRing::default());
        assert!(engine.start_spin(&mut rng));
        let target = engine.target_angle();
        for _ in 0..10 {
            engine.on_frame();
        }
        let angle = engine.current_angle();

        assert!(!engine.start_spin(&mut rng));
        assert!(!engine.aim_spin(0, 5, 0.5));
        assert_eq!(engine.target_angle(), target);
        assert_eq!(engine.current_angle(), angle);

        run_to_idle(&mut engine);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_completion_fires_once_despite_extra_frames() {
        let (mut engine, count) = counting_engine(SlotRing::default());
        engine.aim_spin(2, 6, 0.5);
        run_to_idle(&mut engine);
        for _ in 0..100 {
            assert_eq!(engine.on_frame(), SpinPhase::Idle);
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_phases_follow_state_machine() {
        let mut engine = SpinEngine::new(SlotRing::default(), SpinTuning::default());
        assert_eq!(engine.phase(), SpinPhase::Idle);
        engine.aim_spin(1, 5, 0.5);
        assert_eq!(engine.phase(), SpinPhase::Spinning);

        let mut seen_settling = false;
        loop {
            let phase = engine.on_frame();
            match phase {
                SpinPhase::Spinning => assert!(!seen_settling),
                SpinPhase::Settling => seen_settling = true,
                SpinPhase::Idle => break,
            }
        }
        assert!(seen_settling);
        assert_eq!(engine.velocity(), 0.0);
    }

    #[test]
    fn test_celebration_boundary() {
        let ring = ring_with_cash(&[50.0, 49.0, 0.0, 100.0]);
        let seen = Rc::new(Cell::new(None));
        let mut engine = SpinEngine::new(ring, SpinTuning::default());
        let sink = seen.clone();
        engine.set_on_complete(move |c| sink.set(Some(*c)));

        engine.aim_spin(0, 5, 0.5);
        run_to_idle(&mut engine);
        let first = seen.get().unwrap();
        assert_eq!(first.slot_index, 0);
        assert!(first.celebrate);

        engine.aim_spin(1, 5, 0.5);
        run_to_idle(&mut engine);
        let second = seen.get().unwrap();
        assert_eq!(second.slot_index, 1);
        assert_eq!(second.cash_value, 49.0);
        assert!(!second.celebrate);
    }

    #[test]
    fn test_teardown_mid_spin_stops_mutation() {
        let (mut engine, count) = counting_engine(SlotRing::default());
        engine.aim_spin(4, 7, 0.55);
        for _ in 0..30 {
            engine.on_frame();
        }
        assert!(engine.is_animating());

        engine.teardown();
        let angle = engine.current_angle();
        assert_eq!(engine.on_frame(), SpinPhase::Idle);
        assert_eq!(engine.current_angle(), angle);
        assert_eq!(engine.velocity(), 0.0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_next_spin_restarts_from_normalized_angle() {
        let mut engine = SpinEngine::new(SlotRing::default(), SpinTuning::default());
        engine.aim_spin(5, 7, 0.5);
        run_to_idle(&mut engine);
        let rest = engine.current_angle();
        assert!(rest > TAU);

        engine.aim_spin(2, 5, 0.5);
        assert!((engine.current_angle() - rest.rem_euclid(TAU)).abs() < 1e-12);
        assert!(engine.current_angle() < engine.target_angle());
        run_to_idle(&mut engine);
        assert_eq!(engine.resolved_slot(), Some(2));
    }

    #[test]
    fn test_rest_at_keeps_wheel_in_place() {
        let mut engine = SpinEngine::new(SlotRing::default(), SpinTuning::default());
        assert!(engine.rest_at(2.0 * PI + 1.25));
        assert!((engine.current_angle() - 1.25).abs() < 1e-9);
        assert!(!engine.rest_at(f64::NAN));

        engine.aim_spin(0, 5, 0.5);
        assert!(!engine.rest_at(0.0));
        assert!((engine.current_angle() - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_aim_is_ignored() {
        let mut engine = SpinEngine::new(SlotRing::default(), SpinTuning::default());
        assert!(!engine.aim_spin(8, 5, 0.5));
        assert!(!engine.aim_spin(0, 5, 0.0));
        assert_eq!(engine.phase(), SpinPhase::Idle);
    }

    #[test]
    fn test_sanitized_restores_terminating_values() {
        let tuning = SpinTuning {
            friction: 1.0,
            settle_blend: 0.0,
            min_rotations: 8,
            max_rotations: 8,
            ..SpinTuning::default()
        }
        .sanitized();
        assert_eq!(tuning, SpinTuning::default());
    }

    #[test]
    fn test_tuning_partial_json_uses_defaults() {
        let tuning: SpinTuning = serde_json::from_str(r#"{"friction": 0.97}"#).unwrap();
        assert_eq!(tuning.friction, 0.97);
        assert_eq!(tuning.min_rotations, 5);
        assert_eq!(tuning.celebration_threshold, 50.0);
    }

    #[test]
    fn test_spin_signal_rising_edge() {
        let mut signal = SpinSignal::default();
        assert!(!signal.observe(false));
        assert!(signal.observe(true));
        assert!(!signal.observe(true));
        assert!(!signal.observe(false));
        assert!(signal.observe(true));
    }
}
