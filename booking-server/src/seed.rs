//! Demo crew fixture.
//!
//! Registers a minimal operating crew (one conductor, three stewards) so a
//! freshly started server can pass the journey operability check. Opt-in
//! via `BOOKING_SEED=1`; individual failures are logged and skipped so a
//! partially seeded store never prevents startup.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::booking::PersonnelService;
use crate::domain::{NationalId, PersonnelRole};

/// Registers the demo crew through the personnel service.
///
/// Returns the number of crew members that were actually registered.
pub fn demo_crew(personnel: &PersonnelService) -> usize {
    let fixtures: [(&str, &str, &str, (i32, u32, u32), PersonnelRole, &str); 4] = [
        (
            "John",
            "Driver",
            "78.05.12-456.78",
            (1978, 5, 12),
            PersonnelRole::Conductor,
            "driver licence B1",
        ),
        (
            "Anna",
            "Smith",
            "88.09.25-567.89",
            (1988, 9, 25),
            PersonnelRole::Steward,
            "safety",
        ),
        (
            "Bob",
            "Johnson",
            "91.07.14-678.90",
            (1991, 7, 14),
            PersonnelRole::Steward,
            "tourism",
        ),
        (
            "Clara",
            "Brown",
            "89.12.05-789.01",
            (1989, 12, 5),
            PersonnelRole::Steward,
            "safety",
        ),
    ];

    let mut seeded = 0;
    for (first, last, id, (y, m, d), role, certification) in fixtures {
        let Ok(national_id) = NationalId::parse(id) else {
            warn!(national_id = id, "skipping demo crew member: bad fixture id");
            continue;
        };
        let Some(birth_date) = NaiveDate::from_ymd_opt(y, m, d) else {
            warn!(national_id = id, "skipping demo crew member: bad fixture date");
            continue;
        };

        match personnel.register(first, last, national_id.clone(), birth_date, role) {
            Ok(_) => {
                seeded += 1;
                if let Err(e) = personnel.add_certification(&national_id, certification) {
                    warn!(national_id = %national_id, error = %e, "could not certify demo crew member");
                }
            }
            Err(e) => {
                warn!(national_id = %national_id, error = %e, "could not register demo crew member");
            }
        }
    }

    info!(seeded, "seeded demo crew");
    seeded
}
