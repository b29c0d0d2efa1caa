// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the BroadcastView.
//
// Verifies the fixed slot grid, how approved requests fill it, and the
// admin button visibility.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{cleanup, count, create_mount_point, query, settle, text};
use wasm_bindgen_test::*;
use yew::prelude::*;

use broadcast_room_types::{JoinRequest, Roster};
use broadcast_room_ui::components::broadcast_view::BroadcastView;
use broadcast_room_ui::context::{RosterCtx, RosterState};
use broadcast_room_ui::fixtures::seeded_roster;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn renders_five_slots_with_approved_participants_first() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        let roster = use_reducer(|| RosterState::new(seeded_roster(0)));
        html! {
            <ContextProvider<RosterCtx> context={roster}>
                <BroadcastView />
            </ContextProvider<RosterCtx>>
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    assert_eq!(count(&mount, ".participant-slot"), 5);
    assert_eq!(count(&mount, ".participant-slot.active"), 1);

    let names: Vec<String> = {
        let list = mount.query_selector_all(".participant-name").unwrap();
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|n| n.text_content().unwrap_or_default().trim().to_string())
            .collect()
    };
    assert_eq!(
        names,
        vec![
            "Mohammed Hassan",
            "Participant 2",
            "Participant 3",
            "Participant 4",
            "Participant 5"
        ]
    );
    assert!(text(&mount).contains("Active participants: 1 / 5"));
    assert!(query(&mount, ".admin-button").is_none(), "not an admin");
    assert!(text(&mount).contains("Start broadcast"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn over_capacity_is_shown_but_slots_stay_fixed() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        let roster = use_reducer(|| {
            let mut roster = Roster::default();
            for i in 0..7 {
                let id = format!("r{i}");
                roster
                    .submit(JoinRequest::new(id.as_str().into(), format!("Guest {i}"), 0))
                    .unwrap();
                roster.approve(&id.as_str().into()).unwrap();
            }
            RosterState::new(roster)
        });
        html! {
            <ContextProvider<RosterCtx> context={roster}>
                <BroadcastView is_admin=true />
            </ContextProvider<RosterCtx>>
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    assert_eq!(count(&mount, ".participant-slot"), 5);
    assert_eq!(count(&mount, ".participant-slot.active"), 5);
    assert!(text(&mount).contains("Active participants: 7 / 5"));
    assert!(query(&mount, ".admin-button").is_some());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn renders_empty_slots_without_roster() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <BroadcastView /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    settle().await;

    assert_eq!(count(&mount, ".participant-slot.active"), 0);
    assert!(text(&mount).contains("Participant 1"));
    assert!(text(&mount).contains("Active participants: 0 / 5"));

    cleanup(&mount);
}
