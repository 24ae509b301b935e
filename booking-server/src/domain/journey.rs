//! Scheduled journeys.

use std::fmt;

use chrono::NaiveDateTime;

use super::{JourneyId, Personnel, PersonnelRole, SeatClass, Train};

/// Minimum number of conductors a journey needs to operate.
pub const MIN_CONDUCTORS: usize = 1;

/// Minimum number of stewards a journey needs to operate.
pub const MIN_STEWARDS: usize = 3;

/// A scheduled trip between two stations.
///
/// Journeys start bare and grow monotonically: assigning a train captures
/// a snapshot of it (re-assigning replaces the snapshot), and assigning
/// personnel appends. Nothing is ever un-assigned.
///
/// Whether a journey can operate is a derived property, not stored state:
/// it needs a train and a crew of at least [`MIN_CONDUCTORS`] conductor
/// and [`MIN_STEWARDS`] stewards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    id: JourneyId,
    departure_station: String,
    arrival_station: String,
    departure_time: NaiveDateTime,
    train: Option<Train>,
    personnel: Vec<Personnel>,
}

impl Journey {
    /// Builds a journey with a fresh ID and nothing assigned yet.
    ///
    /// Station names are validated by the journey service; this
    /// constructor trusts its inputs.
    pub fn new(
        departure_station: String,
        arrival_station: String,
        departure_time: NaiveDateTime,
    ) -> Self {
        Journey {
            id: JourneyId::new(),
            departure_station,
            arrival_station,
            departure_time,
            train: None,
            personnel: Vec::new(),
        }
    }

    /// Returns the generated journey ID.
    pub fn id(&self) -> JourneyId {
        self.id
    }

    /// Returns the departure station name.
    pub fn departure_station(&self) -> &str {
        &self.departure_station
    }

    /// Returns the arrival station name.
    pub fn arrival_station(&self) -> &str {
        &self.arrival_station
    }

    /// Returns the scheduled departure time.
    pub fn departure_time(&self) -> NaiveDateTime {
        self.departure_time
    }

    /// Returns the assigned train snapshot, if any.
    pub fn train(&self) -> Option<&Train> {
        self.train.as_ref()
    }

    /// True once a train has been assigned.
    pub fn has_train(&self) -> bool {
        self.train.is_some()
    }

    /// Returns the assigned crew in assignment order.
    pub fn personnel(&self) -> &[Personnel] {
        &self.personnel
    }

    /// Assigns a train, replacing any previous assignment.
    pub fn assign_train(&mut self, train: Train) {
        self.train = Some(train);
    }

    /// Adds a crew member to this journey.
    pub fn assign_personnel(&mut self, personnel: Personnel) {
        self.personnel.push(personnel);
    }

    /// Counts assigned crew holding `role`.
    pub fn crew_count(&self, role: PersonnelRole) -> usize {
        self.personnel.iter().filter(|p| p.role() == role).count()
    }

    /// True when the crew meets the staffing minimum.
    pub fn crew_meets_minimum(&self) -> bool {
        self.crew_count(PersonnelRole::Conductor) >= MIN_CONDUCTORS
            && self.crew_count(PersonnelRole::Steward) >= MIN_STEWARDS
    }

    /// Seats for one class on the assigned train, or 0 while no train is
    /// assigned.
    pub fn capacity(&self, class: SeatClass) -> usize {
        self.train.as_ref().map_or(0, |t| t.capacity_for(class))
    }
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} at {}",
            self.departure_station,
            self.arrival_station,
            self.departure_time.format("%Y-%m-%d %H:%M")
        )?;
        match &self.train {
            Some(train) => write!(f, " ({})", train.id()),
            None => write!(f, " (no train assigned)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Locomotive, LocomotiveClass, NationalId, TrainId, Wagon};
    use chrono::NaiveDate;

    fn departure() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 5)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    fn journey() -> Journey {
        Journey::new("Brussels South".into(), "Paris North".into(), departure())
    }

    fn crew(n: u32, role: PersonnelRole) -> Personnel {
        Personnel::new(
            format!("Crew{n}"),
            "Member".into(),
            NationalId::parse(&format!("80.01.0{n}-00{n}.0{n}")).unwrap(),
            NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            role,
        )
    }

    fn train_with_wagons() -> Train {
        let mut t = Train::new(
            TrainId::parse("E320-01").unwrap(),
            Locomotive::new(LocomotiveClass::Class373),
        );
        t.add_wagon(Wagon::new(1, SeatClass::First, 30).unwrap())
            .unwrap();
        t.add_wagon(Wagon::new(2, SeatClass::Second, 70).unwrap())
            .unwrap();
        t
    }

    #[test]
    fn new_journey_is_bare() {
        let j = journey();
        assert!(!j.has_train());
        assert!(j.personnel().is_empty());
        assert_eq!(j.capacity(SeatClass::First), 0);
        assert_eq!(j.capacity(SeatClass::Second), 0);
        assert!(!j.crew_meets_minimum());
    }

    #[test]
    fn assign_train_replaces() {
        let mut j = journey();
        j.assign_train(train_with_wagons());
        assert_eq!(j.capacity(SeatClass::First), 30);

        // Re-assigning swaps in the new snapshot wholesale
        let other = Train::new(
            TrainId::parse("E320-02").unwrap(),
            Locomotive::new(LocomotiveClass::Class374),
        );
        j.assign_train(other);
        assert_eq!(j.train().unwrap().id().as_str(), "E320-02");
        assert_eq!(j.capacity(SeatClass::First), 0);
    }

    #[test]
    fn assigned_train_is_a_snapshot() {
        let mut t = train_with_wagons();
        let mut j = journey();
        j.assign_train(t.clone());

        // Growing the original train later does not affect the journey
        t.add_wagon(Wagon::new(3, SeatClass::First, 30).unwrap())
            .unwrap();
        assert_eq!(j.capacity(SeatClass::First), 30);
    }

    #[test]
    fn crew_minimum_requires_one_conductor_and_three_stewards() {
        let mut j = journey();
        j.assign_personnel(crew(1, PersonnelRole::Steward));
        j.assign_personnel(crew(2, PersonnelRole::Steward));
        j.assign_personnel(crew(3, PersonnelRole::Steward));
        assert!(!j.crew_meets_minimum());

        j.assign_personnel(crew(4, PersonnelRole::Conductor));
        assert!(j.crew_meets_minimum());
    }

    #[test]
    fn baggage_handlers_do_not_count_toward_minimum() {
        let mut j = journey();
        j.assign_personnel(crew(1, PersonnelRole::Conductor));
        j.assign_personnel(crew(2, PersonnelRole::Steward));
        j.assign_personnel(crew(3, PersonnelRole::Steward));
        j.assign_personnel(crew(4, PersonnelRole::BaggageHandler));
        assert_eq!(j.crew_count(PersonnelRole::BaggageHandler), 1);
        assert!(!j.crew_meets_minimum());

        j.assign_personnel(crew(5, PersonnelRole::Steward));
        assert!(j.crew_meets_minimum());
    }

    #[test]
    fn display_mentions_train_once_assigned() {
        let mut j = journey();
        assert_eq!(
            j.to_string(),
            "Brussels South -> Paris North at 2026-03-05 12:30 (no train assigned)"
        );

        j.assign_train(train_with_wagons());
        assert_eq!(
            j.to_string(),
            "Brussels South -> Paris North at 2026-03-05 12:30 (E320-01)"
        );
    }
}
