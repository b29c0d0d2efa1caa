// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::broadcast_view::BroadcastView;
use crate::components::embed_code_panel::EmbedCodePanel;
use crate::routing::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Broadcast,
    Embed,
}

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();
    let tab = use_state(|| Tab::Broadcast);

    let select = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };
    let tab_class = |target: Tab| classes!("tab", (*tab == target).then_some("active"));

    let on_admin_click = Callback::from(move |_: ()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Admin);
        }
    });

    html! {
        <div class="home">
            <nav class="tabs" role="tablist">
                <button class={tab_class(Tab::Broadcast)} role="tab" onclick={select(Tab::Broadcast)}>
                    {"Audio broadcast"}
                </button>
                <button class={tab_class(Tab::Embed)} role="tab" onclick={select(Tab::Embed)}>
                    {"Embed code"}
                </button>
            </nav>
            {
                match *tab {
                    Tab::Broadcast => html! { <BroadcastView is_admin=true {on_admin_click} /> },
                    Tab::Embed => html! {
                        <div class="embed-tab">
                            <h1>{"Embed the audio broadcast"}</h1>
                            <p class="subtitle">{"Put the broadcast join button on your website"}</p>
                            <EmbedCodePanel />
                        </div>
                    },
                }
            }
        </div>
    }
}
