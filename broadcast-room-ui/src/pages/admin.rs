// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::admin_panel::AdminPanel;
use crate::routing::Route;

#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let navigator = use_navigator();
    let on_back = Callback::from(move |_: ()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! { <AdminPanel {on_back} /> }
}
