// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! This module centralises shared state that needs to be accessed across
//! the component tree through Yew's `ContextProvider`: the toast queue and
//! the moderation roster.

use std::rc::Rc;

use broadcast_room_types::roster::Moderation;
use broadcast_room_types::{JoinRequestPayload, RequestId, Roster};
use yew::prelude::*;

// -----------------------------------------------------------------------------
// Toasts
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Transient notifications currently on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastList {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push {
        title: String,
        description: String,
        variant: ToastVariant,
    },
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push {
                title,
                description,
                variant,
            } => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    title,
                    description,
                    variant,
                });
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => {
                if !next.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                next.toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(next)
    }
}

pub type ToastCtx = UseReducerHandle<ToastList>;

/// Show a toast if a [`ToastCtx`] is in scope. The message is logged either
/// way.
pub fn notify(
    toasts: Option<&ToastCtx>,
    title: impl Into<String>,
    description: impl Into<String>,
    variant: ToastVariant,
) {
    let title = title.into();
    let description = description.into();
    match variant {
        ToastVariant::Default => log::info!("{title}: {description}"),
        ToastVariant::Destructive => log::warn!("{title}: {description}"),
    }
    if let Some(toasts) = toasts {
        toasts.dispatch(ToastAction::Push {
            title,
            description,
            variant,
        });
    }
}

// -----------------------------------------------------------------------------
// Roster
// -----------------------------------------------------------------------------

/// Reducer wrapper around the moderation [`Roster`].
///
/// Failed actions return the previous `Rc` untouched, so nothing re-renders.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterState {
    pub roster: Roster,
    next_seq: u64,
}

impl RosterState {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            next_seq: 1,
        }
    }
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new(Roster::default())
    }
}

pub enum RosterAction {
    Moderate(RequestId, Moderation),
    /// A join request forwarded by an embedded form.
    Submit(JoinRequestPayload),
}

impl Reducible for RosterState {
    type Action = RosterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RosterAction::Moderate(id, moderation) => match next.roster.apply(&id, moderation) {
                Ok(t) => log::info!("{} '{}' ({}): {} -> {}", t.action, t.name, t.id, t.from, t.to),
                Err(e) => {
                    log::debug!("Ignoring moderation action: {e}");
                    return self;
                }
            },
            RosterAction::Submit(payload) => {
                let id = RequestId::new(format!("embed-{}", next.next_seq));
                next.next_seq += 1;
                let name = payload.name.clone();
                match next.roster.submit(payload.into_request(id.clone())) {
                    Ok(()) => log::info!("New join request '{name}' ({id})"),
                    Err(e) => {
                        log::debug!("Ignoring join request: {e}");
                        return self;
                    }
                }
            }
        }
        Rc::new(next)
    }
}

pub type RosterCtx = UseReducerHandle<RosterState>;
