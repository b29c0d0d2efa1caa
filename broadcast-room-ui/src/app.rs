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

//! Root component and the providers every page relies on.

use broadcast_room_types::Roster;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::config_error::ConfigError;
use crate::components::toast::ToastProvider;
use crate::constants::{app_config, split_origins, RuntimeConfig};
use crate::context::{RosterAction, RosterCtx, RosterState};
use crate::embed_bridge::JoinMessageListener;
use crate::fixtures::seeded_roster;
use crate::routing::{switch, Route};

#[derive(Properties, PartialEq)]
pub struct RosterProviderProps {
    pub config: RuntimeConfig,
    #[prop_or_default]
    pub children: Children,
}

/// Owns the moderation roster for the lifetime of the page.
///
/// With a non-empty `allowedOrigins`, join requests posted by embedded
/// forms on those origins are appended as new pending requests.
#[function_component(RosterProvider)]
pub fn roster_provider(props: &RosterProviderProps) -> Html {
    let seed = broadcast_room_types::truthy(Some(props.config.seed_fixtures.as_str()));
    let roster = use_reducer(move || {
        if seed {
            RosterState::new(seeded_roster(js_sys::Date::now() as i64))
        } else {
            RosterState::new(Roster::default())
        }
    });

    {
        let dispatcher = roster.dispatcher();
        let allowed = split_origins(Some(props.config.allowed_origins.as_str()));
        use_effect_with(allowed, move |allowed| {
            let listener = if allowed.is_empty() {
                log::debug!("No allowedOrigins configured; embedded join requests are not accepted");
                None
            } else {
                let on_join = Callback::from(move |payload| {
                    dispatcher.dispatch(RosterAction::Submit(payload));
                });
                match JoinMessageListener::install(allowed.clone(), on_join) {
                    Ok(listener) => {
                        log::info!("Accepting join requests from {}", allowed.join(", "));
                        Some(listener)
                    }
                    Err(e) => {
                        log::error!("{e}");
                        None
                    }
                }
            };
            move || drop(listener)
        });
    }

    html! {
        <ContextProvider<RosterCtx> context={roster}>
            { props.children.clone() }
        </ContextProvider<RosterCtx>>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = match app_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return html! { <ConfigError message={e} /> };
        }
    };

    html! {
        <ToastProvider>
            <RosterProvider {config}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </RosterProvider>
        </ToastProvider>
    }
}
