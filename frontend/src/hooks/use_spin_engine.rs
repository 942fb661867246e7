use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use shared::roulette_engine::{SpinCompletion, SpinEngine, SpinPhase, SpinSignal, SpinTuning};
use shared::roulette_slots::SlotRing;
use yew::prelude::*;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;
type CompletionSink = Rc<RefCell<Callback<SpinCompletion>>>;

#[derive(Clone, PartialEq)]
pub struct SpinView {
    pub rotation: f64,
    pub phase: SpinPhase,
    /// The ring the engine resolves against. Draw this one.
    pub ring: SlotRing,
}

fn engine_for(ring: &SlotRing, tuning: SpinTuning, sink: &CompletionSink) -> SpinEngine {
    let mut engine = SpinEngine::new(ring.clone(), tuning);
    let sink = sink.clone();
    engine.set_on_complete(move |completion| sink.borrow().emit(*completion));
    engine
}

fn schedule_frame(
    engine: Rc<RefCell<SpinEngine>>,
    slot: FrameSlot,
    surface: NodeRef,
    rotation: UseStateHandle<f64>,
    phase: UseStateHandle<SpinPhase>,
) {
    let next = slot.clone();
    let handle = request_animation_frame(move |_timestamp| {
        // This frame has fired; its handle is spent
        next.borrow_mut().take();

        if surface.get().is_none() {
            log::debug!("Wheel canvas is gone, aborting animation");
            engine.borrow_mut().teardown();
            phase.set(SpinPhase::Idle);
            return;
        }

        let (now, angle) = {
            let mut engine = engine.borrow_mut();
            let now = engine.on_frame();
            (now, engine.current_angle())
        };
        rotation.set(angle);
        phase.set(now);

        if now != SpinPhase::Idle {
            schedule_frame(engine, next, surface, rotation, phase);
        }
    });
    *slot.borrow_mut() = Some(handle);
}

/// Hosts a `SpinEngine` for one wheel. A false→true change of `is_spinning`
/// starts a spin; the frame loop runs until the wheel is idle again and is
/// cancelled when the component unmounts.
#[hook]
pub fn use_spin_engine(
    ring: &SlotRing,
    tuning: SpinTuning,
    is_spinning: bool,
    surface: NodeRef,
    on_complete: Callback<SpinCompletion>,
) -> SpinView {
    let sink: CompletionSink = use_mut_ref(|| on_complete.clone());
    *sink.borrow_mut() = on_complete;

    let engine = {
        let sink = sink.clone();
        let ring = ring.clone();
        use_mut_ref(move || engine_for(&ring, tuning, &sink))
    };
    let frame: FrameSlot = use_mut_ref(|| None);
    let signal = use_mut_ref(SpinSignal::default);
    let rotation = use_state(|| 0.0_f64);
    let phase = use_state_eq(|| SpinPhase::Idle);
    let drawn_ring = use_state_eq(|| ring.clone());

    // Re-checked when the phase changes so a swap deferred by a spin lands at Idle
    {
        let engine = engine.clone();
        let sink = sink.clone();
        let drawn_ring = drawn_ring.clone();
        use_effect_with((ring.clone(), tuning, *phase), move |(ring, tuning, phase)| {
            let mut current = engine.borrow_mut();
            if current.ring() != ring || current.tuning() != &tuning.sanitized() {
                if *phase != SpinPhase::Idle || current.is_animating() {
                    log::debug!("Wheel slots changed mid-spin, applying after it settles");
                } else {
                    let angle = current.current_angle();
                    *current = engine_for(ring, *tuning, &sink);
                    current.rest_at(angle);
                    drawn_ring.set(ring.clone());
                }
            }
            || ()
        });
    }

    {
        let engine = engine.clone();
        let frame = frame.clone();
        let rotation = rotation.clone();
        let phase = phase.clone();
        use_effect_with(is_spinning, move |is_spinning| {
            if signal.borrow_mut().observe(*is_spinning) {
                let started = engine.borrow_mut().start_spin(&mut rand::thread_rng());
                if started {
                    phase.set(SpinPhase::Spinning);
                    schedule_frame(engine, frame, surface, rotation, phase);
                }
            }
            || ()
        });
    }

    {
        let engine = engine.clone();
        let frame = frame.clone();
        use_effect_with((), move |_| {
            move || {
                frame.borrow_mut().take();
                engine.borrow_mut().teardown();
            }
        });
    }

    SpinView {
        rotation: *rotation,
        phase: *phase,
        ring: (*drawn_ring).clone(),
    }
}
