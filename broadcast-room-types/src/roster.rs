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

//! The moderation roster: the authoritative list of join requests and the
//! transitions an admin may apply to them.
//!
//! Storage sits behind [`RequestStore`] so a persistent backend can replace
//! [`MemoryStore`] without touching the transition rules. Display partitions
//! are always recomputed from the flat list by [`Roster::partitions`].
//!
//! Allowed transitions:
//!
//! | action                  | from                          | to         |
//! |-------------------------|-------------------------------|------------|
//! | approve                 | pending                       | approved   |
//! | reject                  | pending                       | rejected   |
//! | remove from broadcast   | approved                      | rejected   |
//! | ban                     | pending, approved, rejected   | banned     |
//!
//! Nothing leaves `banned`.

use std::collections::BTreeSet;

use crate::error::ModerationError;
use crate::name::validate_display_name;
use crate::request::{JoinRequest, RequestId, RequestStatus};

/// Displayed room capacity. Shown to the admin, never enforced.
pub const MAX_ACTIVE_PARTICIPANTS: usize = 5;

/// Backing storage for join requests.
pub trait RequestStore {
    /// Every request, in insertion order.
    fn all(&self) -> &[JoinRequest];

    fn get_mut(&mut self, id: &RequestId) -> Option<&mut JoinRequest>;

    fn insert(&mut self, request: JoinRequest);

    fn get(&self, id: &RequestId) -> Option<&JoinRequest> {
        self.all().iter().find(|r| &r.id == id)
    }
}

/// Volatile store; lives as long as the page does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    requests: Vec<JoinRequest>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RequestStore for MemoryStore {
    fn all(&self) -> &[JoinRequest] {
        &self.requests
    }

    fn get_mut(&mut self, id: &RequestId) -> Option<&mut JoinRequest> {
        self.requests.iter_mut().find(|r| &r.id == id)
    }

    fn insert(&mut self, request: JoinRequest) {
        self.requests.push(request);
    }
}

/// An admin-initiated status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Moderation {
    Approve,
    Reject,
    Ban,
    RemoveFromBroadcast,
}

impl Moderation {
    /// Status reached by applying `self` to a request in `from`, or `None`
    /// when the transition is not allowed.
    pub fn target(self, from: RequestStatus) -> Option<RequestStatus> {
        use RequestStatus::*;
        match (self, from) {
            (Moderation::Approve, Pending) => Some(Approved),
            (Moderation::Reject, Pending) => Some(Rejected),
            (Moderation::RemoveFromBroadcast, Approved) => Some(Rejected),
            (Moderation::Ban, Pending | Approved | Rejected) => Some(Banned),
            _ => None,
        }
    }
}

impl std::fmt::Display for Moderation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Moderation::Approve => "approve",
            Moderation::Reject => "reject",
            Moderation::Ban => "ban",
            Moderation::RemoveFromBroadcast => "remove from broadcast",
        };
        f.write_str(s)
    }
}

/// Outcome of a successful moderation action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub id: RequestId,
    pub name: String,
    pub action: Moderation,
    pub from: RequestStatus,
    pub to: RequestStatus,
}

/// Requests grouped by status. Disjoint, and together they cover the whole
/// list.
#[derive(Debug, Default)]
pub struct Partitions<'a> {
    pub pending: Vec<&'a JoinRequest>,
    pub approved: Vec<&'a JoinRequest>,
    pub rejected: Vec<&'a JoinRequest>,
    pub banned: Vec<&'a JoinRequest>,
}

impl Partitions<'_> {
    pub fn len(&self) -> usize {
        self.pending.len() + self.approved.len() + self.rejected.len() + self.banned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster<S = MemoryStore> {
    store: S,
    approved: BTreeSet<RequestId>,
    banned: BTreeSet<RequestId>,
}

impl Default for Roster<MemoryStore> {
    fn default() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl<S: RequestStore> Roster<S> {
    /// Wrap a store, deriving the approved and banned id sets from whatever
    /// it already holds.
    pub fn new(store: S) -> Self {
        let ids_with = |status| {
            store
                .all()
                .iter()
                .filter(|r| r.status() == status)
                .map(|r| r.id.clone())
                .collect::<BTreeSet<_>>()
        };
        let approved = ids_with(RequestStatus::Approved);
        let banned = ids_with(RequestStatus::Banned);
        Self {
            store,
            approved,
            banned,
        }
    }

    pub fn requests(&self) -> &[JoinRequest] {
        self.store.all()
    }

    pub fn get(&self, id: &RequestId) -> Option<&JoinRequest> {
        self.store.get(id)
    }

    pub fn approved_ids(&self) -> &BTreeSet<RequestId> {
        &self.approved
    }

    pub fn banned_ids(&self) -> &BTreeSet<RequestId> {
        &self.banned
    }

    /// Add a new request. It always enters as pending, whatever status the
    /// caller built it with, and its name is stored trimmed.
    pub fn submit(&mut self, mut request: JoinRequest) -> Result<(), ModerationError> {
        request.name = validate_display_name(&request.name).map_err(|reason| {
            ModerationError::InvalidName {
                id: request.id.clone(),
                reason,
            }
        })?;
        if self.store.get(&request.id).is_some() {
            return Err(ModerationError::DuplicateRequest(request.id));
        }
        request.set_status(RequestStatus::Pending);
        self.store.insert(request);
        Ok(())
    }

    /// Work out what `action` would do to `id` without changing anything.
    pub fn check(&self, id: &RequestId, action: Moderation) -> Result<Transition, ModerationError> {
        let request = self
            .store
            .get(id)
            .ok_or_else(|| ModerationError::UnknownRequest(id.clone()))?;
        let from = request.status();
        let to = action
            .target(from)
            .ok_or_else(|| ModerationError::InvalidTransition {
                id: id.clone(),
                from,
                action,
            })?;
        Ok(Transition {
            id: id.clone(),
            name: request.name.clone(),
            action,
            from,
            to,
        })
    }

    /// Apply `action` to `id`. On error the roster is unchanged.
    pub fn apply(&mut self, id: &RequestId, action: Moderation) -> Result<Transition, ModerationError> {
        let transition = self.check(id, action)?;
        if let Some(request) = self.store.get_mut(id) {
            request.set_status(transition.to);
        }
        match transition.to {
            RequestStatus::Approved => {
                self.approved.insert(id.clone());
            }
            RequestStatus::Banned => {
                self.approved.remove(id);
                self.banned.insert(id.clone());
            }
            RequestStatus::Rejected => {
                self.approved.remove(id);
            }
            RequestStatus::Pending => {}
        }
        Ok(transition)
    }

    pub fn approve(&mut self, id: &RequestId) -> Result<Transition, ModerationError> {
        self.apply(id, Moderation::Approve)
    }

    pub fn reject(&mut self, id: &RequestId) -> Result<Transition, ModerationError> {
        self.apply(id, Moderation::Reject)
    }

    pub fn ban(&mut self, id: &RequestId) -> Result<Transition, ModerationError> {
        self.apply(id, Moderation::Ban)
    }

    /// Disconnect an approved participant.
    pub fn remove_from_broadcast(&mut self, id: &RequestId) -> Result<Transition, ModerationError> {
        self.apply(id, Moderation::RemoveFromBroadcast)
    }

    pub fn partitions(&self) -> Partitions<'_> {
        let mut partitions = Partitions::default();
        for request in self.store.all() {
            match request.status() {
                RequestStatus::Pending => partitions.pending.push(request),
                RequestStatus::Approved => partitions.approved.push(request),
                RequestStatus::Rejected => partitions.rejected.push(request),
                RequestStatus::Banned => partitions.banned.push(request),
            }
        }
        partitions
    }

    pub fn active_count(&self) -> usize {
        self.store
            .all()
            .iter()
            .filter(|r| r.status() == RequestStatus::Approved)
            .count()
    }

    /// More approved participants than the room is meant to hold.
    pub fn over_capacity(&self) -> bool {
        self.active_count() > MAX_ACTIVE_PARTICIPANTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NameError;

    fn roster_with(ids: &[&str]) -> Roster {
        let mut roster = Roster::default();
        for (i, id) in ids.iter().enumerate() {
            roster
                .submit(JoinRequest::new((*id).into(), format!("user {id}"), i as i64))
                .unwrap();
        }
        roster
    }

    fn assert_consistent(roster: &Roster) {
        let parts = roster.partitions();
        assert_eq!(parts.len(), roster.requests().len());

        let mut seen = BTreeSet::new();
        for r in parts
            .pending
            .iter()
            .chain(&parts.approved)
            .chain(&parts.rejected)
            .chain(&parts.banned)
        {
            assert!(seen.insert(r.id.clone()), "{} in two partitions", r.id);
        }

        let approved: BTreeSet<_> = parts.approved.iter().map(|r| r.id.clone()).collect();
        let banned: BTreeSet<_> = parts.banned.iter().map(|r| r.id.clone()).collect();
        assert_eq!(&approved, roster.approved_ids());
        assert_eq!(&banned, roster.banned_ids());
        assert!(approved.is_disjoint(&banned));
    }

    #[test]
    fn approve_moves_pending_to_approved() {
        let mut roster = roster_with(&["1", "2"]);
        let t = roster.approve(&"1".into()).unwrap();
        assert_eq!(t.from, RequestStatus::Pending);
        assert_eq!(t.to, RequestStatus::Approved);

        let parts = roster.partitions();
        assert!(parts.approved.iter().any(|r| r.id.as_str() == "1"));
        assert!(!parts.pending.iter().any(|r| r.id.as_str() == "1"));
        assert_consistent(&roster);
    }

    #[test]
    fn ban_after_approve_leaves_approved_set() {
        let mut roster = roster_with(&["1"]);
        let id = RequestId::from("1");
        roster.approve(&id).unwrap();
        roster.ban(&id).unwrap();

        assert!(roster.banned_ids().contains(&id));
        assert!(!roster.approved_ids().contains(&id));
        let parts = roster.partitions();
        assert_eq!(parts.banned.len(), 1);
        assert!(parts.approved.is_empty());
        assert_consistent(&roster);
    }

    #[test]
    fn remove_from_broadcast_rejects_approved() {
        let mut roster = roster_with(&["1"]);
        let id = RequestId::from("1");
        roster.approve(&id).unwrap();
        roster.remove_from_broadcast(&id).unwrap();

        assert_eq!(roster.get(&id).unwrap().status(), RequestStatus::Rejected);
        assert!(!roster.approved_ids().contains(&id));
        assert_consistent(&roster);
    }

    #[test]
    fn reject_pending() {
        let mut roster = roster_with(&["1"]);
        roster.reject(&"1".into()).unwrap();
        assert_eq!(roster.partitions().rejected.len(), 1);
        assert_consistent(&roster);
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut roster = roster_with(&["1"]);
        let before = roster.clone();
        let err = roster.approve(&"nope".into()).unwrap_err();
        assert_eq!(err, ModerationError::UnknownRequest("nope".into()));
        assert_eq!(roster, before);
    }

    #[test]
    fn banned_is_sticky() {
        let mut roster = roster_with(&["1"]);
        let id = RequestId::from("1");
        roster.ban(&id).unwrap();
        let before = roster.clone();

        for action in [
            Moderation::Approve,
            Moderation::Reject,
            Moderation::RemoveFromBroadcast,
            Moderation::Ban,
        ] {
            assert!(matches!(
                roster.apply(&id, action),
                Err(ModerationError::InvalidTransition {
                    from: RequestStatus::Banned,
                    ..
                })
            ));
        }
        assert_eq!(roster, before);
    }

    #[test]
    fn disallowed_transitions_are_refused() {
        let mut roster = roster_with(&["1", "2"]);
        // remove only applies to approved participants
        assert!(roster.remove_from_broadcast(&"1".into()).is_err());
        roster.reject(&"2".into()).unwrap();
        // a rejected request cannot be approved again
        assert!(roster.approve(&"2".into()).is_err());
        // but it can still be banned
        assert!(roster.ban(&"2".into()).is_ok());
        assert_consistent(&roster);
    }

    #[test]
    fn check_does_not_mutate() {
        let roster = roster_with(&["1"]);
        let t = roster.check(&"1".into(), Moderation::Approve).unwrap();
        assert_eq!(t.name, "user 1");
        assert_eq!(roster.get(&"1".into()).unwrap().status(), RequestStatus::Pending);
    }

    #[test]
    fn capacity_is_soft() {
        let ids = ["1", "2", "3", "4", "5", "6"];
        let mut roster = roster_with(&ids);
        for id in ids {
            roster.approve(&id.into()).unwrap();
        }
        assert_eq!(roster.active_count(), 6);
        assert!(roster.over_capacity());
        assert_consistent(&roster);
    }

    #[test]
    fn submit_forces_pending_and_rejects_duplicates() {
        let mut roster = roster_with(&["1"]);
        roster.approve(&"1".into()).unwrap();

        let mut dup = JoinRequest::new("1".into(), "again", 0);
        dup.set_status(RequestStatus::Approved);
        assert_eq!(
            roster.submit(dup),
            Err(ModerationError::DuplicateRequest("1".into()))
        );

        let mut fresh = JoinRequest::new("2".into(), "new", 0);
        fresh.set_status(RequestStatus::Banned);
        roster.submit(fresh).unwrap();
        assert_eq!(roster.get(&"2".into()).unwrap().status(), RequestStatus::Pending);
        assert_consistent(&roster);
    }

    #[test]
    fn submit_refuses_names_outside_limits() {
        let mut roster = Roster::default();
        let too_long = "x".repeat(51);
        for (id, name, reason) in [
            ("empty", "", NameError::Required),
            ("blank", "   ", NameError::Required),
            ("short", "A", NameError::TooShort),
            ("long", too_long.as_str(), NameError::TooLong),
        ] {
            assert_eq!(
                roster.submit(JoinRequest::new(id.into(), name, 0)),
                Err(ModerationError::InvalidName {
                    id: id.into(),
                    reason
                })
            );
        }
        assert!(roster.requests().is_empty());

        roster
            .submit(JoinRequest::new("ok".into(), "  Ahmad  ", 0))
            .unwrap();
        assert_eq!(roster.get(&"ok".into()).unwrap().name, "Ahmad");
        assert_consistent(&roster);
    }

    #[test]
    fn new_derives_sets_from_store() {
        let mut store = MemoryStore::new();
        let mut a = JoinRequest::new("a".into(), "A1", 0);
        a.set_status(RequestStatus::Approved);
        let mut b = JoinRequest::new("b".into(), "B1", 0);
        b.set_status(RequestStatus::Banned);
        store.insert(a);
        store.insert(b);

        let roster = Roster::new(store);
        assert!(roster.approved_ids().contains(&"a".into()));
        assert!(roster.banned_ids().contains(&"b".into()));
        assert_consistent(&roster);
    }

    #[test]
    fn every_three_step_sequence_keeps_partitions_consistent() {
        let actions = [
            Moderation::Approve,
            Moderation::Reject,
            Moderation::Ban,
            Moderation::RemoveFromBroadcast,
        ];
        let ids = ["1", "2", "ghost"];
        let steps: Vec<(Moderation, &str)> = actions
            .iter()
            .flat_map(|a| ids.iter().map(move |id| (*a, *id)))
            .collect();

        for first in &steps {
            for second in &steps {
                for third in &steps {
                    let mut roster = roster_with(&["1", "2"]);
                    for (action, id) in [first, second, third] {
                        let _ = roster.apply(&(*id).into(), *action);
                        assert_consistent(&roster);
                    }
                }
            }
        }
    }
}
