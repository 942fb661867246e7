use shared::roulette_prize::{PrizeKind, ResolvedPrize};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PrizeRevealProps {
    pub prize: Option<ResolvedPrize>,
    pub show: bool,
    pub on_close: Callback<MouseEvent>,
}

fn headline(kind: Option<&PrizeKind>) -> (&'static str, &'static str) {
    match kind {
        Some(PrizeKind::Cash(_)) => ("You won cash!", "from-green-400 to-emerald-600"),
        Some(PrizeKind::Bonus(_)) => ("Deposit bonus unlocked!", "from-pink-400 to-pink-600"),
        Some(PrizeKind::Points(_)) => ("Club points added!", "from-cyan-400 to-blue-600"),
        Some(PrizeKind::ExtraSpin) => ("Spin again!", "from-violet-400 to-violet-600"),
        Some(PrizeKind::Special(_)) => ("Special prize!", "from-orange-400 to-orange-600"),
        None => ("Spin complete", "from-gray-400 to-gray-600"),
    }
}

/// Overlay announcing the server-resolved prize.
#[function_component(PrizeReveal)]
pub fn prize_reveal(props: &PrizeRevealProps) -> Html {
    if !props.show {
        return html! {};
    }
    let Some(prize) = &props.prize else {
        return html! {};
    };

    let (message, gradient) = headline(prize.kind.as_ref());

    html! {
        <div class={styles::REVEAL_OVERLAY}>
            <div class={classes!(styles::REVEAL_CARD, "animate-pop-in")}>
                <div class={classes!(
                    "mx-auto",
                    "mb-4",
                    "px-6",
                    "py-3",
                    "rounded-xl",
                    "bg-gradient-to-r",
                    "text-white",
                    "font-bold",
                    "text-xl",
                    "shadow-lg",
                    gradient
                )}>
                    {message}
                </div>

                <h2 class="text-2xl font-bold text-gray-900 dark:text-white">{prize.title()}</h2>
                <dl class="mt-4 grid grid-cols-2 gap-2 text-left">
                    <dt class={styles::TEXT_SMALL}>{"Value"}</dt>
                    <dd class="text-sm font-semibold text-gray-900 dark:text-white text-right">{prize.value_label()}</dd>
                    <dt class={styles::TEXT_SMALL}>{"Type"}</dt>
                    <dd class="text-sm font-semibold text-gray-900 dark:text-white text-right">{prize.category_label()}</dd>
                </dl>

                if let Some(code) = &prize.redemption_code {
                    <div class="mt-4 text-sm text-gray-600 dark:text-gray-300 bg-gray-100 dark:bg-gray-900 px-4 py-2 rounded-full font-mono">
                        {format!("Code: {}", code)}
                    </div>
                }

                <div class="mt-4">
                    if prize.is_demo() {
                        <span class={styles::BADGE_DEMO}>{"Demo spin"}</span>
                    } else {
                        <span class={styles::BADGE_REAL}>{"Credited to your account"}</span>
                    }
                </div>

                <button onclick={props.on_close.clone()} class={classes!(styles::BUTTON_PRIMARY, "mt-6", "w-full")}>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub request_pending: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let busy = props.is_spinning || props.request_pending;
    let label = if props.is_spinning {
        "Spinning..."
    } else if props.request_pending {
        "Contacting table..."
    } else {
        "Spin the wheel"
    };

    let button_class = if busy {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0 animate-pulse-subtle"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={busy}
                class="relative w-full px-8 py-4 font-bold text-lg bg-transparent border-2 border-transparent hover:border-white focus:outline-none focus:ring-4 focus:ring-yellow-300 focus:ring-opacity-50 transition-all duration-300"
            >
                <div class="flex items-center justify-center">
                    <svg
                        class={if busy { "inline-block mr-2 animate-spin" } else { "hidden" }}
                        xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24"
                        fill="none" stroke="currentColor" stroke-width="2"
                    >
                        <circle cx="12" cy="12" r="10" />
                        <path d="M12 6v6l4 2" />
                    </svg>
                    <span>{label}</span>
                </div>
            </button>
        </div>
    }
}
