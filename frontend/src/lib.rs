pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod styles;
pub mod tasks;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{admin_prizes::AdminPrizes, roulette::RoulettePage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Roulette,
   #[at("/admin/roulette/prizes")] AdminPrizes,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full bg-gray-50 dark:bg-gray-900">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Roulette => html! { <RoulettePage /> },
       Route::AdminPrizes => html! { <AdminPrizes /> },
       Route::NotFound => html! { <Redirect<Route> to={Route::Roulette} /> },
   }
}
