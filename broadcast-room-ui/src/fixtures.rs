// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo requests the admin panel starts with when `seedFixtures` is on.

use broadcast_room_types::{GeoInfo, JoinRequest, RequestId, Roster};

struct Fixture {
    id: &'static str,
    name: &'static str,
    minutes_ago: i64,
    ip: &'static str,
    country: &'static str,
    country_code: &'static str,
    city: &'static str,
    approved: bool,
}

const FIXTURES: [Fixture; 3] = [
    Fixture {
        id: "1",
        name: "Ahmad Mohammed",
        minutes_ago: 0,
        ip: "192.168.1.100",
        country: "Saudi Arabia",
        country_code: "SA",
        city: "Riyadh",
        approved: false,
    },
    Fixture {
        id: "2",
        name: "Fatima Ali",
        minutes_ago: 5,
        ip: "10.0.0.50",
        country: "United Arab Emirates",
        country_code: "AE",
        city: "Dubai",
        approved: false,
    },
    Fixture {
        id: "3",
        name: "Mohammed Hassan",
        minutes_ago: 10,
        ip: "172.16.0.25",
        country: "Egypt",
        country_code: "EG",
        city: "Cairo",
        approved: true,
    },
];

/// Two pending requests and one approved participant, timed relative to
/// `now_ms`.
pub fn seeded_roster(now_ms: i64) -> Roster {
    let mut roster = Roster::default();
    for f in &FIXTURES {
        let id = RequestId::from(f.id);
        let request = JoinRequest::new(id.clone(), f.name, now_ms - f.minutes_ago * 60_000)
            .with_geo(GeoInfo {
                ip: f.ip.to_string(),
                country: f.country.to_string(),
                country_code: f.country_code.to_string(),
                city: f.city.to_string(),
            });
        if let Err(e) = roster.submit(request) {
            log::error!("Bad fixture: {e}");
            continue;
        }
        if f.approved {
            if let Err(e) = roster.approve(&id) {
                log::error!("Bad fixture: {e}");
            }
        }
    }
    roster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_seed_two_pending_one_approved() {
        let roster = seeded_roster(60 * 60_000);
        let parts = roster.partitions();
        assert_eq!(parts.pending.len(), 2);
        assert_eq!(parts.approved.len(), 1);
        assert_eq!(parts.approved[0].id.as_str(), "3");
        assert!(roster.approved_ids().contains(&"3".into()));
        assert_eq!(
            roster.get(&"2".into()).unwrap().minutes_waiting(60 * 60_000),
            5
        );
    }
}
