/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

/// Shown instead of the app when `window.__APP_CONFIG` is missing or invalid.
#[function_component(ConfigError)]
pub fn config_error(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="error-container">
            <h2>{"Configuration error"}</h2>
            <p class="error-message">{ props.message.clone() }</p>
            <p class="hint">{"Check the window.__APP_CONFIG block in index.html."}</p>
        </div>
    }
}
