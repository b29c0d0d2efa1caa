/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Application route definitions.
//!
//! Extracted into its own module so that both the binary entry-point
//! (`main.rs`) and integration tests can share the same `Route` enum.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::admin::AdminPage;
use crate::pages::embed::EmbedPage;
use crate::pages::home::Home;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin")]
    Admin,
    #[at("/embed")]
    Embed,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Admin => html! { <AdminPage /> },
        Route::Embed => html! { <EmbedPage /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{ "404" }</h1>
                <p>{"Oops! Page not found"}</p>
                <Link<Route> to={Route::Home}>{"Return to Home"}</Link<Route>>
            </div>
        },
    }
}
