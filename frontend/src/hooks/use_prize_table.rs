use gloo_net::http::Request;
use shared::constants::{ADMIN_PRIZES_ENDPOINT, SAVED_NOTICE_MS};
use shared::roulette_prize::AdminPrize;
use shared::validation::{probability_total, validate_prize_table};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::api_url;
use crate::error::ApiError;
use crate::hooks::auth_token::bearer_header;
use crate::tasks::{sleep, CancelToken};

pub async fn fetch_admin_prizes() -> Result<Vec<AdminPrize>, ApiError> {
    let auth = bearer_header()?;
    let response = Request::get(&api_url(ADMIN_PRIZES_ENDPOINT))
        .header("Authorization", &auth)
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<Vec<AdminPrize>>().await?)
}

pub async fn save_admin_prizes(rows: &[AdminPrize]) -> Result<(), ApiError> {
    let auth = bearer_header()?;
    let response = Request::put(&api_url(ADMIN_PRIZES_ENDPOINT))
        .header("Authorization", &auth)
        .json(&rows)?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

#[derive(Clone, PartialEq)]
pub enum PrizeEdit {
    Probability(u32, f64),
    Active(u32, bool),
    Image(u32, String),
}

#[derive(Clone, PartialEq)]
pub struct PrizeTableHandle {
    pub rows: Vec<AdminPrize>,
    pub loading: bool,
    pub saving: bool,
    pub total: f64,
    /// Set while the active probabilities do not add up to 100%.
    pub warning: Option<String>,
    pub error: Option<String>,
    pub saved: bool,
    pub edit: Callback<PrizeEdit>,
    pub save: Callback<()>,
}

#[hook]
pub fn use_prize_table() -> PrizeTableHandle {
    let rows = use_state(Vec::<AdminPrize>::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);
    let saved = use_state(|| false);
    let alive = use_memo((), |_| CancelToken::new());

    {
        let rows = rows.clone();
        let loading = loading.clone();
        let error = error.clone();
        let alive = alive.clone();
        use_effect_with((), move |_| {
            let token = (*alive).clone();
            spawn_local(async move {
                let result = fetch_admin_prizes().await;
                if token.is_cancelled() {
                    return;
                }
                match result {
                    Ok(fetched) => rows.set(fetched),
                    Err(e) => {
                        log::error!("Failed to load prize table: {:?}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            move || alive.cancel()
        });
    }

    let edit = {
        let rows = rows.clone();
        let saved = saved.clone();
        Callback::from(move |change: PrizeEdit| {
            let mut next = (*rows).clone();
            match change {
                PrizeEdit::Probability(id, probability) => {
                    if let Some(row) = next.iter_mut().find(|r| r.id == id) {
                        row.probability = probability;
                    }
                }
                PrizeEdit::Active(id, active) => {
                    if let Some(row) = next.iter_mut().find(|r| r.id == id) {
                        row.active = active;
                    }
                }
                PrizeEdit::Image(id, url) => {
                    if let Some(row) = next.iter_mut().find(|r| r.id == id) {
                        log::debug!("Prize {} image set to {}", id, url);
                        row.image = Some(url);
                    }
                }
            }
            saved.set(false);
            rows.set(next);
        })
    };

    let check = validate_prize_table(&rows);

    let save = {
        let rows = rows.clone();
        let saving = saving.clone();
        let error = error.clone();
        let saved = saved.clone();
        let alive = alive.clone();
        let valid = check.is_ok();
        Callback::from(move |_| {
            if !valid || *saving {
                return;
            }
            saving.set(true);
            error.set(None);

            let snapshot = (*rows).clone();
            let token = (*alive).clone();
            let saving = saving.clone();
            let error = error.clone();
            let saved = saved.clone();
            spawn_local(async move {
                let result = save_admin_prizes(&snapshot).await;
                if token.is_cancelled() {
                    return;
                }
                saving.set(false);
                match result {
                    Ok(()) => {
                        log::info!("Saved {} prize rows", snapshot.len());
                        saved.set(true);
                        if sleep(SAVED_NOTICE_MS, &token).await {
                            saved.set(false);
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to save prize table: {:?}", e);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    PrizeTableHandle {
        total: probability_total(&rows),
        warning: check.err().map(|e| {
            e.message
                .map(|m| m.to_string())
                .unwrap_or_else(|| e.code.to_string())
        }),
        rows: (*rows).clone(),
        loading: *loading,
        saving: *saving,
        error: (*error).clone(),
        saved: *saved,
        edit,
        save,
    }
}
