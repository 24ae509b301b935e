//! Crew registration and certification management.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{BookingError, BookingResult, NationalId, Personnel, PersonnelRole};
use crate::store::PersonnelStore;

use super::{Clock, SystemClock, non_blank};

/// Registers crew members and manages their certifications.
pub struct PersonnelService {
    store: Arc<PersonnelStore>,
    clock: Arc<dyn Clock>,
}

impl PersonnelService {
    /// Builds a service over the given store, using the system clock.
    pub fn new(store: Arc<PersonnelStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Builds a service with an explicit clock, letting tests pin time.
    pub fn with_clock(store: Arc<PersonnelStore>, clock: Arc<dyn Clock>) -> Self {
        PersonnelService { store, clock }
    }

    /// Registers a new crew member with no certifications yet.
    ///
    /// Validation matches passenger registration: trimmed non-blank
    /// names, no future birth dates, no duplicate national IDs.
    pub fn register(
        &self,
        first_name: &str,
        last_name: &str,
        national_id: NationalId,
        birth_date: NaiveDate,
        role: PersonnelRole,
    ) -> BookingResult<Personnel> {
        let first_name = non_blank(first_name, "first name")?;
        let last_name = non_blank(last_name, "last name")?;
        if birth_date > self.clock.now().date() {
            return Err(BookingError::validation(
                "birth date cannot be in the future",
            ));
        }

        let member = Personnel::new(first_name, last_name, national_id, birth_date, role);
        if !self.store.save_new(member.clone()) {
            return Err(BookingError::validation(format!(
                "a crew member with national id {} already exists",
                member.national_id()
            )));
        }

        debug!(national_id = %member.national_id(), role = %role, "registered crew member");
        Ok(member)
    }

    /// Records a certification for a crew member and returns the updated
    /// record.
    pub fn add_certification(
        &self,
        national_id: &NationalId,
        certification: &str,
    ) -> BookingResult<Personnel> {
        let certification = non_blank(certification, "certification")?;
        self.store
            .update(national_id, |member| {
                member.add_certification(certification);
                member.clone()
            })
            .ok_or_else(|| BookingError::not_found("personnel", national_id))
    }

    /// Looks up a crew member by national ID.
    pub fn find_by_national_id(&self, national_id: &NationalId) -> BookingResult<Personnel> {
        self.store
            .find(national_id)
            .ok_or_else(|| BookingError::not_found("personnel", national_id))
    }

    /// Snapshot of every registered crew member. Order is not defined.
    pub fn list_all(&self) -> Vec<Personnel> {
        self.store.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::clock::FixedClock;
    use chrono::NaiveDate;

    fn service() -> PersonnelService {
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2026, 3, 5)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        );
        PersonnelService::with_clock(Arc::new(PersonnelStore::new()), Arc::new(clock))
    }

    fn national_id(s: &str) -> NationalId {
        NationalId::parse(s).unwrap()
    }

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1978, 5, 12).unwrap()
    }

    #[test]
    fn register_keeps_role() {
        let service = service();
        let member = service
            .register(
                "John",
                "Driver",
                national_id("78.05.12-456.78"),
                birth_date(),
                PersonnelRole::Conductor,
            )
            .unwrap();

        assert_eq!(member.role(), PersonnelRole::Conductor);
        assert!(member.certifications().is_empty());
    }

    #[test]
    fn duplicate_national_id_rejected() {
        let service = service();
        service
            .register(
                "John",
                "Driver",
                national_id("78.05.12-456.78"),
                birth_date(),
                PersonnelRole::Conductor,
            )
            .unwrap();

        let err = service
            .register(
                "Johan",
                "Chauffeur",
                national_id("78.05.12-456.78"),
                birth_date(),
                PersonnelRole::Steward,
            )
            .unwrap_err();
        assert!(matches!(err, BookingError::Validation(_)));

        // First registration wins
        let kept = service
            .find_by_national_id(&national_id("78.05.12-456.78"))
            .unwrap();
        assert_eq!(kept.role(), PersonnelRole::Conductor);
    }

    #[test]
    fn add_certification_appends_and_persists() {
        let service = service();
        let id = national_id("78.05.12-456.78");
        service
            .register("John", "Driver", id.clone(), birth_date(), PersonnelRole::Conductor)
            .unwrap();

        let updated = service.add_certification(&id, "driver licence B1").unwrap();
        assert!(updated.has_certification("driver licence B1"));

        service.add_certification(&id, "safety").unwrap();
        let found = service.find_by_national_id(&id).unwrap();
        assert_eq!(found.certifications(), ["driver licence B1", "safety"]);
    }

    #[test]
    fn add_certification_rejects_blank() {
        let service = service();
        let id = national_id("78.05.12-456.78");
        service
            .register("John", "Driver", id.clone(), birth_date(), PersonnelRole::Conductor)
            .unwrap();

        let err = service.add_certification(&id, "   ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation failed: certification cannot be blank"
        );
        assert!(
            service
                .find_by_national_id(&id)
                .unwrap()
                .certifications()
                .is_empty()
        );
    }

    #[test]
    fn add_certification_to_missing_member_is_not_found() {
        let service = service();
        let err = service
            .add_certification(&national_id("78.05.12-456.78"), "safety")
            .unwrap_err();
        assert_eq!(err.to_string(), "personnel not found: 78.05.12-456.78");
    }
}
