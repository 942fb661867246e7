use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use shared::confetti::ConfettiBurst;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::components::canvas::{context_2d, viewport_size};
use crate::styles;

type BurstSlot = Rc<RefCell<Option<ConfettiBurst>>>;
type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    /// Each new non-zero value fires a fresh burst.
    pub trigger: u32,
    #[prop_or(160)]
    pub count: usize,
}

fn draw(context: &CanvasRenderingContext2d, burst: &ConfettiBurst, width: f64, height: f64) {
    context.clear_rect(0.0, 0.0, width, height);
    for p in burst.particles() {
        context.save();
        let _ = context.translate(p.x, p.y);
        let _ = context.rotate(p.rotation);
        context.set_global_alpha(p.opacity(burst.max_life()));
        context.set_fill_style_str(p.color);
        context.fill_rect(-p.size / 2.0, -p.size / 4.0, p.size, p.size / 2.0);
        context.restore();
    }
    context.set_global_alpha(1.0);
}

fn animate(canvas_ref: NodeRef, burst: BurstSlot, frame: FrameSlot, visible: UseStateHandle<bool>) {
    let next = frame.clone();
    let handle = request_animation_frame(move |_| {
        next.borrow_mut().take();

        let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
            burst.borrow_mut().take();
            return;
        };
        let Some(context) = context_2d(&canvas) else {
            burst.borrow_mut().take();
            return;
        };
        let (width, height) = (canvas.width() as f64, canvas.height() as f64);

        let finished = match burst.borrow_mut().as_mut() {
            Some(current) => {
                current.step();
                draw(&context, current, width, height);
                current.is_finished()
            }
            None => true,
        };

        if finished {
            burst.borrow_mut().take();
            context.clear_rect(0.0, 0.0, width, height);
            visible.set(false);
        } else {
            animate(canvas_ref, burst, next, visible);
        }
    });
    *frame.borrow_mut() = Some(handle);
}

/// Full-screen confetti overlay. Draws nothing until `trigger` changes.
#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let canvas_ref = use_node_ref();
    let burst: BurstSlot = use_mut_ref(|| None);
    let frame: FrameSlot = use_mut_ref(|| None);
    let visible = use_state_eq(|| false);

    {
        let canvas_ref = canvas_ref.clone();
        let burst = burst.clone();
        let frame = frame.clone();
        let visible = visible.clone();
        let count = props.count;
        use_effect_with(props.trigger, move |trigger| {
            if *trigger > 0 {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let (width, height) = viewport_size();
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);

                    let origin = (width / 2.0, height * 0.6);
                    let mut rng = rand::thread_rng();
                    *burst.borrow_mut() = Some(ConfettiBurst::new(origin, count, height, &mut rng));
                    log::debug!("Confetti burst of {} particles", count);
                    visible.set(true);
                    if frame.borrow().is_none() {
                        animate(canvas_ref, burst, frame, visible);
                    }
                }
            }
            || ()
        });
    }

    {
        let burst = burst.clone();
        let frame = frame.clone();
        use_effect_with((), move |_| {
            move || {
                frame.borrow_mut().take();
                burst.borrow_mut().take();
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            class={classes!(styles::CONFETTI_LAYER, (!*visible).then_some("hidden"))}
        />
    }
}
