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

//! Transient notifications.
//!
//! [`ToastProvider`] owns the queue and exposes it as [`ToastCtx`]; every
//! toast removes itself after [`TOAST_DURATION_MS`].

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::constants::TOAST_DURATION_MS;
use crate::context::{Toast, ToastAction, ToastCtx, ToastList, ToastVariant};

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastCtx> context={toasts.clone()}>
            { props.children.clone() }
            <div class="toast-viewport">
                { for toasts.toasts.iter().map(|toast| html! {
                    <ToastItem
                        key={toast.id}
                        toast={toast.clone()}
                        on_dismiss={on_dismiss.clone()}
                    />
                }) }
            </div>
        </ContextProvider<ToastCtx>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let class = classes!(
        "toast",
        (props.toast.variant == ToastVariant::Destructive).then_some("toast-destructive")
    );
    let onclick = {
        let id = props.toast.id;
        props.on_dismiss.reform(move |_: MouseEvent| id)
    };

    html! {
        <div {class} role="status">
            <div class="toast-title">{ &props.toast.title }</div>
            <div class="toast-description">{ &props.toast.description }</div>
            <button class="toast-close" aria-label="Dismiss" {onclick}>{"×"}</button>
        </div>
    }
}
