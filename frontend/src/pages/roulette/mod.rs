mod roulette_utils;
mod wheel_canvas;

use shared::constants::REVEAL_DELAY_MS;
use shared::roulette_engine::{SpinCompletion, WheelInput};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Confetti;
use crate::config::spin_tuning;
use crate::hooks::{use_roulette, use_style_sheet};
use crate::styles;
use crate::tasks::ScopedTimeout;

use roulette_utils::{PrizeReveal, SpinButton};
use wheel_canvas::RouletteWheel;

#[function_component(RoulettePage)]
pub fn roulette_page() -> Html {
    use_style_sheet(styles::ROULETTE_CSS);

    let roulette = use_roulette();
    let tuning = use_memo((), |_| spin_tuning());
    let promo_code = use_state(String::new);
    let show_reveal = use_state_eq(|| false);
    let confetti = use_state(|| 0u32);
    let reveal_timer = use_mut_ref(|| None::<ScopedTimeout>);

    {
        let reveal_timer = reveal_timer.clone();
        use_effect_with((), move |_| {
            move || {
                reveal_timer.borrow_mut().take();
            }
        });
    }

    let on_complete = {
        let finish = roulette.finish.clone();
        let show_reveal = show_reveal.clone();
        let confetti = confetti.clone();
        let reveal_timer = reveal_timer.clone();
        Callback::from(move |completion: SpinCompletion| {
            log::info!(
                "Wheel stopped on slot {} (cash value {})",
                completion.slot_index,
                completion.cash_value
            );
            finish.emit(());
            if completion.celebrate {
                confetti.set(*confetti + 1);
            }

            let show_reveal = show_reveal.clone();
            *reveal_timer.borrow_mut() = Some(ScopedTimeout::new(REVEAL_DELAY_MS, move || {
                show_reveal.set(true);
            }));
        })
    };

    let on_spin = {
        let spin = roulette.spin.clone();
        let promo_code = promo_code.clone();
        let show_reveal = show_reveal.clone();
        let reveal_timer = reveal_timer.clone();
        Callback::from(move |_: MouseEvent| {
            reveal_timer.borrow_mut().take();
            show_reveal.set(false);
            spin.emit(Some((*promo_code).clone()));
        })
    };

    let on_code_input = {
        let promo_code = promo_code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            promo_code.set(input.value());
        })
    };

    let on_close_reveal = {
        let show_reveal = show_reveal.clone();
        Callback::from(move |_: MouseEvent| show_reveal.set(false))
    };

    let input = WheelInput {
        is_spinning: roulette.is_spinning,
        resolved_prize: roulette.resolved.clone(),
    };
    let busy = roulette.is_spinning || roulette.request_pending;

    html! {
        <div class={styles::CONTAINER}>
            <h1 class={styles::TEXT_TITLE}>
                <span class={styles::TEXT_TITLE_GRADIENT}>{"Club Roulette"}</span>
            </h1>

            <div class={styles::PANEL}>
                <div class="relative mx-auto mb-8 flex justify-center items-center">
                    <div class="w-full max-w-[450px] mx-auto">
                        <RouletteWheel
                            input={input.clone()}
                            ring={roulette.ring.clone()}
                            tuning={*tuning}
                            on_complete={on_complete}
                        />
                    </div>
                </div>

                if let Some(error) = &roulette.error {
                    <div class={classes!(styles::CARD_ERROR, "mb-6", "text-center")}>{error}</div>
                }

                <div class="max-w-[300px] mx-auto space-y-4">
                    <div>
                        <label for="promo-code" class={styles::TEXT_LABEL}>{"Promo code (optional)"}</label>
                        <input
                            id="promo-code"
                            type="text"
                            class={classes!(styles::INPUT, "mt-2")}
                            placeholder="e.g. FRIDAY25"
                            value={(*promo_code).clone()}
                            oninput={on_code_input}
                            disabled={busy}
                        />
                    </div>
                    <SpinButton
                        is_spinning={roulette.is_spinning}
                        request_pending={roulette.request_pending}
                        onclick={on_spin}
                    />
                </div>

                <div class="mt-8 text-center bg-gray-50 dark:bg-gray-700/30 p-6 rounded-xl shadow-sm">
                    <h3 class="font-bold text-lg mb-3 text-gray-800 dark:text-gray-200">{"Prizes on the wheel"}</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                        { for roulette.ring.iter().map(|slot| html! {
                            <div
                                key={slot.id}
                                class="bg-white dark:bg-gray-800 p-3 rounded-lg shadow-sm flex items-center border-l-4"
                                style={format!("border-color: {}", slot.color)}
                            >
                                <div class="w-4 h-4 rounded-full mr-3 flex-shrink-0" style={format!("background-color: {}", slot.color)}></div>
                                <div class="text-left">
                                    <div class="font-medium text-gray-900 dark:text-white">{format!("{} {}", slot.icon, slot.display_name)}</div>
                                </div>
                            </div>
                        }) }
                    </div>
                    <p class={classes!(styles::TEXT_SMALL, "mt-4")}>
                        {"Prizes are drawn by the club server. The wheel is for show."}
                    </p>
                </div>
            </div>

            <PrizeReveal
                prize={input.resolved_prize}
                show={*show_reveal}
                on_close={on_close_reveal}
            />
            <Confetti trigger={*confetti} />
        </div>
    }
}
