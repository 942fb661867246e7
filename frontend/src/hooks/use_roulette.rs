use gloo_net::http::Request;
use shared::constants::{ROULETTE_SPIN_ENDPOINT, SPIN_FAILED_ERROR};
use shared::roulette_prize::{ResolvedPrize, SpinRequest, SpinResultPayload};
use shared::roulette_slots::SlotRing;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::api_url;
use crate::error::ApiError;
use crate::hooks::auth_token::bearer_header;
use crate::tasks::CancelToken;

pub async fn request_spin(code: Option<String>) -> Result<SpinResultPayload, ApiError> {
    let auth = bearer_header()?;
    let body = SpinRequest {
        code,
        timestamp: js_sys::Date::now() as u64,
    };

    let response = Request::post(&api_url(ROULETTE_SPIN_ENDPOINT))
        .header("Authorization", &auth)
        .json(&body)?
        .send()
        .await?;

    if !response.ok() {
        // Rejections (used code, cooldown) still carry a message
        return match response.json::<SpinResultPayload>().await {
            Ok(SpinResultPayload { message: Some(msg), .. }) => Err(ApiError::Rejected(msg)),
            _ => Err(ApiError::Status(response.status())),
        };
    }

    let payload = response.json::<SpinResultPayload>().await?;
    if !payload.success && payload.prize.is_none() {
        return Err(ApiError::Rejected(
            payload.message.unwrap_or_else(|| SPIN_FAILED_ERROR.to_string()),
        ));
    }
    Ok(payload)
}

#[derive(Clone, PartialEq)]
pub struct RouletteHandle {
    /// Fixed for the lifetime of the page.
    pub ring: SlotRing,
    pub is_spinning: bool,
    pub request_pending: bool,
    pub resolved: Option<ResolvedPrize>,
    pub error: Option<String>,
    /// Requests a spin, optionally redeeming a promo code.
    pub spin: Callback<Option<String>>,
    /// Ends the spin cycle once the wheel has settled.
    pub finish: Callback<()>,
}

#[hook]
pub fn use_roulette() -> RouletteHandle {
    let ring = use_memo((), |_| SlotRing::default());
    let is_spinning = use_state(|| false);
    let request_pending = use_state(|| false);
    let resolved = use_state(|| None::<ResolvedPrize>);
    let error = use_state(|| None::<String>);
    let alive = use_memo((), |_| CancelToken::new());

    {
        let alive = alive.clone();
        use_effect_with((), move |_| move || alive.cancel());
    }

    let spin = {
        let is_spinning = is_spinning.clone();
        let request_pending = request_pending.clone();
        let resolved = resolved.clone();
        let error = error.clone();
        let alive = alive.clone();

        Callback::from(move |code: Option<String>| {
            if *is_spinning || *request_pending {
                return;
            }
            request_pending.set(true);
            error.set(None);
            resolved.set(None);

            let token = (*alive).clone();
            let is_spinning = is_spinning.clone();
            let request_pending = request_pending.clone();
            let resolved = resolved.clone();
            let error = error.clone();
            let code = code.map(|c| c.trim().to_string()).filter(|c| !c.is_empty());

            spawn_local(async move {
                let result = request_spin(code).await;
                if token.is_cancelled() {
                    return;
                }
                request_pending.set(false);
                match result {
                    Ok(payload) => {
                        resolved.set(Some(ResolvedPrize::from_payload(&payload)));
                        is_spinning.set(true);
                    }
                    Err(e) => {
                        log::error!("Spin request failed: {:?}", e);
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let finish = {
        let is_spinning = is_spinning.clone();
        Callback::from(move |_| is_spinning.set(false))
    };

    RouletteHandle {
        ring: (*ring).clone(),
        is_spinning: *is_spinning,
        request_pending: *request_pending,
        resolved: (*resolved).clone(),
        error: (*error).clone(),
        spin,
        finish,
    }
}
