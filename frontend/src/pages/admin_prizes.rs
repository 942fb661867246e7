use shared::progress::ProgressState;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::get_asset_url;
use crate::hooks::{use_prize_table, use_upload_progress, PrizeEdit};
use crate::styles;

#[derive(Properties, PartialEq)]
struct UploadStatusProps {
    percent: u8,
    state: ProgressState,
    error: Option<String>,
}

#[function_component(UploadStatus)]
fn upload_status(props: &UploadStatusProps) -> Html {
    match props.state {
        ProgressState::Idle => html! {},
        ProgressState::Running | ProgressState::Done => html! {
            <div class="mb-4">
                <div class="mb-1 flex justify-between items-center">
                    <span class={styles::TEXT_SMALL}>
                        { if props.state == ProgressState::Done { "Upload complete" } else { "Uploading image..." } }
                    </span>
                    <span class="text-sm font-bold text-blue-600 dark:text-blue-400">{format!("{}%", props.percent)}</span>
                </div>
                <div class={styles::PROGRESS_TRACK}>
                    <div class={styles::PROGRESS_BAR} style={format!("width: {}%", props.percent)}></div>
                </div>
            </div>
        },
        ProgressState::Failed => html! {
            <div class={classes!(styles::CARD_ERROR, "mb-4")}>
                {props.error.clone().unwrap_or_else(|| shared::constants::UPLOAD_FAILED_ERROR.to_string())}
            </div>
        },
    }
}

#[function_component(AdminPrizes)]
pub fn admin_prizes() -> Html {
    let table = use_prize_table();
    let upload = use_upload_progress();
    let upload_target = use_state(|| None::<u32>);

    {
        let edit = table.edit.clone();
        let upload_target = upload_target.clone();
        use_effect_with(upload.url.clone(), move |url| {
            if let (Some(url), Some(id)) = (url.clone(), *upload_target) {
                edit.emit(PrizeEdit::Image(id, url));
                upload_target.set(None);
            }
            || ()
        });
    }

    let on_save = {
        let save = table.save.clone();
        Callback::from(move |_: MouseEvent| save.emit(()))
    };

    let uploading = upload.state == ProgressState::Running;
    let can_save = table.warning.is_none() && !table.saving && !table.loading;

    let rows = table.rows.iter().map(|row| {
        let id = row.id;
        let on_probability = {
            let edit = table.edit.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                match input.value().trim().parse::<f64>() {
                    Ok(value) => edit.emit(PrizeEdit::Probability(id, value)),
                    Err(_) => {
                        log::warn!("Ignoring probability {:?} for prize {}", input.value(), id)
                    }
                }
            })
        };
        let on_active = {
            let edit = table.edit.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                edit.emit(PrizeEdit::Active(id, input.checked()));
            })
        };
        let on_file = {
            let start = upload.upload.clone();
            let upload_target = upload_target.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    upload_target.set(Some(id));
                    start.emit(file);
                }
                input.set_value("");
            })
        };

        html! {
            <tr key={id} class={if row.active { "" } else { "opacity-50" }}>
                <td class={styles::TABLE_CELL}>
                    if let Some(image) = &row.image {
                        <img src={get_asset_url(image)} alt={row.name.clone()} class="w-8 h-8 rounded object-cover" />
                    } else {
                        <div class="w-8 h-8 rounded bg-gray-200 dark:bg-gray-700"></div>
                    }
                </td>
                <td class={styles::TABLE_CELL}>{&row.name}</td>
                <td class={styles::TABLE_CELL}>{&row.kind}</td>
                <td class={styles::TABLE_CELL}>{row.value}</td>
                <td class={styles::TABLE_CELL}>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        class={styles::INPUT_NUMBER}
                        value={row.probability.to_string()}
                        onchange={on_probability}
                    />
                </td>
                <td class={styles::TABLE_CELL}>
                    <input type="checkbox" checked={row.active} onchange={on_active} />
                </td>
                <td class={styles::TABLE_CELL}>
                    <label class={classes!(styles::BUTTON_SECONDARY, if uploading { "opacity-50 cursor-not-allowed" } else { "cursor-pointer" })}>
                        {"Upload"}
                        <input type="file" accept="image/*" class="hidden" disabled={uploading} onchange={on_file} />
                    </label>
                </td>
            </tr>
        }
    });

    html! {
        <div class={styles::CONTAINER}>
            <h1 class={styles::TEXT_TITLE}>{"Roulette Prizes"}</h1>

            <div class={styles::PANEL_WIDE}>
                if table.loading {
                    <div class="flex justify-center py-8">
                        <div class={styles::LOADING_SPINNER}></div>
                    </div>
                } else {
                    if let Some(error) = &table.error {
                        <div class={classes!(styles::CARD_ERROR, "mb-4")}>{error}</div>
                    }
                    if let Some(warning) = &table.warning {
                        <div class={styles::ALERT_WARNING}>
                            {format!("{} (currently {:.2}%)", warning, table.total)}
                        </div>
                    }
                    if table.saved {
                        <div class={classes!(styles::CARD_SUCCESS, "mb-4")}>{"Prize table saved"}</div>
                    }

                    <UploadStatus percent={upload.percent} state={upload.state} error={upload.error.clone()} />

                    <div class="overflow-x-auto">
                        <table class={styles::TABLE}>
                            <thead>
                                <tr>
                                    <th class={styles::TABLE_HEAD}>{"Icon"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Name"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Type"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Value"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Probability %"}</th>
                                    <th class={styles::TABLE_HEAD}>{"Active"}</th>
                                    <th class={styles::TABLE_HEAD}></th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-100 dark:divide-gray-700">
                                { for rows }
                            </tbody>
                        </table>
                    </div>

                    <div class="mt-6 flex items-center justify-between">
                        <span class={styles::TEXT_BODY}>{format!("Total: {:.2}%", table.total)}</span>
                        <button class={styles::BUTTON_PRIMARY} disabled={!can_save} onclick={on_save}>
                            { if table.saving { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                }
            </div>
        </div>
    }
}
