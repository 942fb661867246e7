use std::f64::consts::{PI, TAU};

use shared::roulette_engine::{SpinCompletion, SpinPhase, SpinTuning, WheelInput};
use shared::roulette_slots::SlotRing;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::components::canvas::{context_2d, is_dark_mode};
use crate::hooks::use_spin_engine;

const CANVAS_SIZE: u32 = 450;
const LABEL_FONT: &str = "bold 18px 'Segoe UI', Roboto, system-ui, sans-serif";
const ICON_FONT: &str = "22px system-ui, sans-serif";

#[derive(Properties, PartialEq)]
pub struct RouletteWheelProps {
    pub input: WheelInput,
    pub ring: SlotRing,
    pub tuning: SpinTuning,
    pub on_complete: Callback<SpinCompletion>,
}

fn draw_segments(
    context: &CanvasRenderingContext2d,
    ring: &SlotRing,
    cx: f64,
    cy: f64,
    radius: f64,
    spinning: bool,
) {
    for (index, slot) in ring.iter().enumerate() {
        let (start, end) = ring.arc(index);
        context.begin_path();
        context.set_fill_style_str(&slot.color);
        context.move_to(cx, cy);
        let _ = context.arc(cx, cy, radius, start, end);
        context.close_path();
        context.fill();

        if spinning {
            let shimmer = (js_sys::Date::now() / 400.0 + index as f64).sin() * 0.08 + 0.1;
            context.set_fill_style_str(&format!("rgba(255, 255, 255, {})", shimmer));
            context.fill();
        }
    }

    context.set_stroke_style_str("rgba(255, 255, 255, 0.85)");
    context.set_line_width(2.5);
    for index in 0..ring.len() {
        let (start, _) = ring.arc(index);
        context.begin_path();
        context.move_to(cx, cy);
        context.line_to(cx + radius * start.cos(), cy + radius * start.sin());
        context.stroke();
    }
}

fn draw_labels(
    context: &CanvasRenderingContext2d,
    ring: &SlotRing,
    cx: f64,
    cy: f64,
    radius: f64,
    dark: bool,
) {
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#ffffff");
    context.set_shadow_color(if dark { "rgba(0, 0, 0, 0.7)" } else { "rgba(0, 0, 0, 0.5)" });
    context.set_shadow_blur(3.0);
    context.set_shadow_offset_x(1.0);
    context.set_shadow_offset_y(1.0);

    for (index, slot) in ring.iter().enumerate() {
        let (start, end) = ring.arc(index);
        context.save();
        let _ = context.translate(cx, cy);
        let _ = context.rotate((start + end) / 2.0);

        context.set_font(LABEL_FONT);
        let _ = context.fill_text(&slot.short_label, radius * 0.6, 0.0);
        if !slot.icon.is_empty() {
            context.set_font(ICON_FONT);
            let _ = context.fill_text(&slot.icon, radius * 0.84, 0.0);
        }
        context.restore();
    }

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
    context.set_shadow_offset_x(0.0);
    context.set_shadow_offset_y(0.0);
}

fn draw_hub(context: &CanvasRenderingContext2d, cx: f64, cy: f64, radius: f64, dark: bool) {
    let inner = radius * 0.22;
    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#1f2937" });
    let _ = context.arc(cx, cy, inner, 0.0, TAU);
    context.fill();

    context.set_stroke_style_str("#f59e0b");
    context.set_line_width(3.0);
    context.stroke();

    // Poker chip edge marks
    let marks = 8;
    context.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
    context.set_line_width(4.0);
    for i in 0..marks {
        let angle = i as f64 * TAU / marks as f64;
        context.begin_path();
        let _ = context.arc(cx, cy, inner * 0.8, angle, angle + PI / 16.0);
        context.stroke();
    }
}

fn draw_pointer(
    context: &CanvasRenderingContext2d,
    cx: f64,
    cy: f64,
    radius: f64,
    spinning: bool,
) {
    context.set_shadow_color(if spinning {
        "rgba(255, 215, 130, 0.8)"
    } else {
        "rgba(255, 215, 0, 0.6)"
    });
    context.set_shadow_blur(if spinning { 10.0 } else { 4.0 });

    let half_width = 18.0;
    let height = 28.0;
    let tip_y = cy - radius + 8.0;
    context.begin_path();
    context.move_to(cx, tip_y);
    context.line_to(cx - half_width, tip_y - height);
    context.line_to(cx + half_width, tip_y - height);
    context.close_path();
    context.set_fill_style_str(if spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

/// Paints the wheel turned by `rotation` radians. Slot arcs are wheel-local,
/// the pointer stays fixed at the top.
pub fn draw_wheel(canvas: &HtmlCanvasElement, ring: &SlotRing, rotation: f64, phase: SpinPhase) {
    let Some(context) = context_2d(canvas) else {
        log::warn!("Wheel canvas has no 2d context");
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = width.min(height) / 2.0 - 30.0;
    let spinning = phase != SpinPhase::Idle;
    let dark = is_dark_mode();

    context.clear_rect(0.0, 0.0, width, height);

    context.begin_path();
    let glow = if spinning { 0.25 } else { 0.15 };
    context.set_fill_style_str(&format!("rgba(245, 158, 11, {})", glow));
    let _ = context.arc(cx, cy, radius + 15.0, 0.0, TAU);
    context.fill();

    context.save();
    let _ = context.translate(cx, cy);
    let _ = context.rotate(rotation);
    let _ = context.translate(-cx, -cy);

    draw_segments(&context, ring, cx, cy, radius, spinning);
    draw_labels(&context, ring, cx, cy, radius, dark);
    context.restore();

    draw_hub(&context, cx, cy, radius, dark);

    context.begin_path();
    context.set_stroke_style_str(if dark {
        "rgba(250, 204, 21, 0.6)"
    } else {
        "rgba(180, 83, 9, 0.6)"
    });
    context.set_line_width(if spinning { 5.0 } else { 4.0 });
    let _ = context.arc(cx, cy, radius - 2.0, 0.0, TAU);
    context.stroke();

    draw_pointer(&context, cx, cy, radius, spinning);
}

#[function_component(RouletteWheel)]
pub fn roulette_wheel(props: &RouletteWheelProps) -> Html {
    let canvas_ref = use_node_ref();
    let view = use_spin_engine(
        &props.ring,
        props.tuning,
        props.input.is_spinning,
        canvas_ref.clone(),
        props.on_complete.clone(),
    );

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (view.rotation, view.phase, view.ring.clone()),
            move |(rotation, phase, ring)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    draw_wheel(&canvas, ring, *rotation, *phase);
                }
                || ()
            },
        );
    }

    let spinning = view.phase != SpinPhase::Idle;
    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(245, 158, 11, 0.45));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
