use gloo_net::http::Request;
use serde::Deserialize;
use shared::constants::{ADMIN_UPLOAD_ENDPOINT, UPLOAD_TICK_MS};
use shared::progress::{ProgressState, SimulatedProgress};
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FormData};
use yew::prelude::*;

use crate::config::api_url;
use crate::error::ApiError;
use crate::hooks::auth_token::bearer_header;
use crate::tasks::ScopedInterval;

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

pub async fn upload_image(file: File) -> Result<String, ApiError> {
    let auth = bearer_header()?;
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let response = Request::post(&api_url(ADMIN_UPLOAD_ENDPOINT))
        .header("Authorization", &auth)
        .body(form)?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<UploadResponse>().await?.url)
}

#[derive(Clone, PartialEq)]
pub struct UploadHandle {
    pub percent: u8,
    pub state: ProgressState,
    pub url: Option<String>,
    pub error: Option<String>,
    pub upload: Callback<File>,
}

/// Uploads an image while showing simulated progress. The ticker is owned by
/// the hook and stops when the upload settles or the component unmounts.
#[hook]
pub fn use_upload_progress() -> UploadHandle {
    let model = use_mut_ref(SimulatedProgress::default);
    let ticker = use_mut_ref(|| None::<ScopedInterval>);
    let percent = use_state_eq(|| 0u8);
    let state = use_state_eq(|| ProgressState::Idle);
    let url = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);

    {
        let ticker = ticker.clone();
        use_effect_with((), move |_| {
            move || {
                ticker.borrow_mut().take();
            }
        });
    }

    let upload = {
        let model = model.clone();
        let ticker = ticker.clone();
        let percent = percent.clone();
        let state = state.clone();
        let url = url.clone();
        let error = error.clone();

        Callback::from(move |file: File| {
            if model.borrow().is_running() {
                return;
            }
            model.borrow_mut().start();
            percent.set(0);
            state.set(ProgressState::Running);
            error.set(None);

            let interval = {
                let model = model.clone();
                let percent = percent.clone();
                ScopedInterval::new(UPLOAD_TICK_MS, move || {
                    let value = model.borrow_mut().tick();
                    percent.set(value);
                })
            };
            let token = interval.token();
            *ticker.borrow_mut() = Some(interval);

            let model = model.clone();
            let ticker = ticker.clone();
            let percent = percent.clone();
            let state = state.clone();
            let url = url.clone();
            let error = error.clone();
            spawn_local(async move {
                let result = upload_image(file).await;
                if token.is_cancelled() {
                    return;
                }
                ticker.borrow_mut().take();

                match result {
                    Ok(uploaded) => {
                        log::info!("Uploaded prize image to {}", uploaded);
                        model.borrow_mut().complete();
                        url.set(Some(uploaded));
                    }
                    Err(e) => {
                        log::error!("Prize image upload failed: {:?}", e);
                        model.borrow_mut().fail();
                        error.set(Some(e.to_string()));
                    }
                }
                let settled = *model.borrow();
                percent.set(settled.percent());
                state.set(settled.state());
            });
        })
    };

    UploadHandle {
        percent: *percent,
        state: *state,
        url: (*url).clone(),
        error: (*error).clone(),
        upload,
    }
}
