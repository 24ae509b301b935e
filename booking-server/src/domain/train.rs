//! Train composition: seat classes, locomotives, wagons and the trains
//! they form.

use std::fmt;

use super::{BookingError, BookingResult};

/// Error returned when parsing an invalid seat class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid seat class: {value:?} (expected first or second)")]
pub struct InvalidSeatClass {
    value: String,
}

/// Seating class of a wagon and of the tickets sold for it.
///
/// Capacity is tracked per class: a sold-out first class never spills
/// into second class seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatClass {
    /// Premium seating
    First,
    /// Standard seating
    Second,
}

impl SeatClass {
    /// Both classes, first class first.
    pub const ALL: [SeatClass; 2] = [SeatClass::First, SeatClass::Second];

    /// Parse a seat class from its request-body name (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, InvalidSeatClass> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(SeatClass::First),
            "second" => Ok(SeatClass::Second),
            _ => Err(InvalidSeatClass {
                value: s.to_string(),
            }),
        }
    }

    /// The lowercase name used in request and response bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatClass::First => "first",
            SeatClass::Second => "second",
        }
    }
}

impl fmt::Display for SeatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an invalid locomotive class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid locomotive class: {value:?} (expected class373 or class374)")]
pub struct InvalidLocomotiveClass {
    value: String,
}

/// The locomotive classes the operator runs.
///
/// Each class fixes how many wagons the locomotive can pull and how many
/// passengers the power car itself carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotiveClass {
    /// Class 373: pulls up to 12 wagons, seats 80
    Class373,
    /// Class 374: pulls up to 14 wagons, seats 80
    Class374,
}

impl LocomotiveClass {
    /// All classes the operator runs.
    pub const ALL: [LocomotiveClass; 2] = [LocomotiveClass::Class373, LocomotiveClass::Class374];

    /// Maximum number of wagons this class can pull.
    pub fn max_wagons(&self) -> usize {
        match self {
            LocomotiveClass::Class373 => 12,
            LocomotiveClass::Class374 => 14,
        }
    }

    /// Seats in the power car itself.
    pub fn base_capacity(&self) -> usize {
        match self {
            LocomotiveClass::Class373 => 80,
            LocomotiveClass::Class374 => 80,
        }
    }

    /// Display name, e.g. `Class 373`.
    pub fn name(&self) -> &'static str {
        match self {
            LocomotiveClass::Class373 => "Class 373",
            LocomotiveClass::Class374 => "Class 374",
        }
    }

    /// Parse a class from a request string such as `class373` or `373`.
    pub fn parse(s: &str) -> Result<Self, InvalidLocomotiveClass> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        match normalized.as_str() {
            "class373" | "373" => Ok(LocomotiveClass::Class373),
            "class374" | "374" => Ok(LocomotiveClass::Class374),
            _ => Err(InvalidLocomotiveClass {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for LocomotiveClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The powered vehicle at the head of a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locomotive {
    class: LocomotiveClass,
}

impl Locomotive {
    /// Builds a locomotive of the given class.
    pub fn new(class: LocomotiveClass) -> Self {
        Locomotive { class }
    }

    /// Returns the locomotive's class.
    pub fn class(&self) -> LocomotiveClass {
        self.class
    }

    /// Maximum number of wagons this locomotive can pull.
    pub fn max_wagons(&self) -> usize {
        self.class.max_wagons()
    }

    /// Seats in the locomotive itself.
    pub fn capacity(&self) -> usize {
        self.class.base_capacity()
    }
}

/// Error returned when parsing an invalid train ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train id: {reason}")]
pub struct InvalidTrainId {
    reason: &'static str,
}

/// Operator-chosen identifier of a train, e.g. `E320-01`.
///
/// Train IDs are free-form but must be non-blank; surrounding whitespace
/// is trimmed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TrainId(String);

impl TrainId {
    /// Parse a train ID from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidTrainId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidTrainId {
                reason: "train id cannot be blank",
            });
        }
        Ok(TrainId(trimmed.to_string()))
    }

    /// Returns the train ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.0)
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when constructing an invalid wagon.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid wagon: {reason}")]
pub struct InvalidWagon {
    reason: &'static str,
}

/// A passenger car attached to a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wagon {
    number: u32,
    class: SeatClass,
    seats: usize,
}

impl Wagon {
    /// Builds a wagon. The seat count must be strictly positive.
    pub fn new(number: u32, class: SeatClass, seats: usize) -> Result<Self, InvalidWagon> {
        if seats == 0 {
            return Err(InvalidWagon {
                reason: "wagon must have at least one seat",
            });
        }
        Ok(Wagon {
            number,
            class,
            seats,
        })
    }

    /// Returns the wagon number chosen by the operator.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns the wagon's seat class.
    pub fn class(&self) -> SeatClass {
        self.class
    }

    /// Returns the number of seats.
    pub fn seats(&self) -> usize {
        self.seats
    }
}

/// A locomotive plus the wagons it pulls.
///
/// The wagon list only grows through [`Train::add_wagon`], which checks
/// the locomotive's pulling limit before mutating anything: a rejected
/// add leaves the train exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    id: TrainId,
    locomotive: Locomotive,
    wagons: Vec<Wagon>,
}

impl Train {
    /// Builds a train with no wagons yet.
    pub fn new(id: TrainId, locomotive: Locomotive) -> Self {
        Train {
            id,
            locomotive,
            wagons: Vec::new(),
        }
    }

    /// Returns the train's ID.
    pub fn id(&self) -> &TrainId {
        &self.id
    }

    /// Returns the locomotive.
    pub fn locomotive(&self) -> &Locomotive {
        &self.locomotive
    }

    /// Returns the wagons in the order they were attached.
    pub fn wagons(&self) -> &[Wagon] {
        &self.wagons
    }

    /// Attaches a wagon.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidTrain` if the locomotive is already
    /// pulling its maximum number of wagons.
    pub fn add_wagon(&mut self, wagon: Wagon) -> BookingResult<()> {
        if self.wagons.len() >= self.locomotive.max_wagons() {
            return Err(BookingError::InvalidTrain(format!(
                "{} pulls at most {} wagons",
                self.locomotive.class().name(),
                self.locomotive.max_wagons()
            )));
        }
        self.wagons.push(wagon);
        Ok(())
    }

    /// Seats for one class: the seat sum of that class's wagons.
    pub fn capacity_for(&self, class: SeatClass) -> usize {
        self.wagons
            .iter()
            .filter(|w| w.class() == class)
            .map(|w| w.seats())
            .sum()
    }

    /// Total seats across the locomotive and every wagon.
    pub fn total_capacity(&self) -> usize {
        let wagon_seats: usize = self.wagons.iter().map(|w| w.seats()).sum();
        self.locomotive.capacity() + wagon_seats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(class: LocomotiveClass) -> Train {
        Train::new(TrainId::parse("E320-01").unwrap(), Locomotive::new(class))
    }

    fn wagon(number: u32, class: SeatClass, seats: usize) -> Wagon {
        Wagon::new(number, class, seats).unwrap()
    }

    #[test]
    fn seat_class_parse() {
        assert_eq!(SeatClass::parse("first").unwrap(), SeatClass::First);
        assert_eq!(SeatClass::parse(" SECOND ").unwrap(), SeatClass::Second);
        assert!(SeatClass::parse("third").is_err());
        assert!(SeatClass::parse("").is_err());
    }

    #[test]
    fn locomotive_class_parse() {
        assert_eq!(
            LocomotiveClass::parse("class373").unwrap(),
            LocomotiveClass::Class373
        );
        assert_eq!(
            LocomotiveClass::parse("Class 374").unwrap(),
            LocomotiveClass::Class374
        );
        assert_eq!(
            LocomotiveClass::parse("373").unwrap(),
            LocomotiveClass::Class373
        );
        assert!(LocomotiveClass::parse("class999").is_err());
        assert!(LocomotiveClass::parse("").is_err());
    }

    #[test]
    fn locomotive_class_table() {
        assert_eq!(LocomotiveClass::Class373.max_wagons(), 12);
        assert_eq!(LocomotiveClass::Class374.max_wagons(), 14);
        assert_eq!(LocomotiveClass::Class373.base_capacity(), 80);
        assert_eq!(LocomotiveClass::Class374.base_capacity(), 80);
        assert_eq!(LocomotiveClass::Class373.name(), "Class 373");
        assert_eq!(format!("{}", LocomotiveClass::Class374), "Class 374");
    }

    #[test]
    fn train_id_rejects_blank() {
        assert!(TrainId::parse("").is_err());
        assert!(TrainId::parse("   ").is_err());
        assert_eq!(TrainId::parse(" E320-01 ").unwrap().as_str(), "E320-01");
        assert_eq!(
            format!("{:?}", TrainId::parse("E320-01").unwrap()),
            "TrainId(E320-01)"
        );
    }

    #[test]
    fn wagon_rejects_zero_seats() {
        assert!(Wagon::new(1, SeatClass::First, 0).is_err());
        assert!(Wagon::new(1, SeatClass::First, 1).is_ok());
    }

    #[test]
    fn new_train_is_empty() {
        let t = train(LocomotiveClass::Class373);
        assert!(t.wagons().is_empty());
        assert_eq!(t.capacity_for(SeatClass::First), 0);
        assert_eq!(t.capacity_for(SeatClass::Second), 0);
        // Locomotive seats still count toward the total
        assert_eq!(t.total_capacity(), 80);
    }

    #[test]
    fn wagon_limit_enforced_for_class373() {
        let mut t = train(LocomotiveClass::Class373);
        for n in 1..=12 {
            t.add_wagon(wagon(n, SeatClass::Second, 1)).unwrap();
        }

        let err = t.add_wagon(wagon(13, SeatClass::Second, 1)).unwrap_err();
        assert!(matches!(err, BookingError::InvalidTrain(_)));
        assert_eq!(
            err.to_string(),
            "invalid train: Class 373 pulls at most 12 wagons"
        );

        // The rejected add changed nothing
        assert_eq!(t.wagons().len(), 12);
        assert_eq!(t.capacity_for(SeatClass::Second), 12);
    }

    #[test]
    fn wagon_limit_enforced_for_class374() {
        let mut t = train(LocomotiveClass::Class374);
        for n in 1..=14 {
            t.add_wagon(wagon(n, SeatClass::First, 10)).unwrap();
        }
        assert!(t.add_wagon(wagon(15, SeatClass::First, 10)).is_err());
        assert_eq!(t.wagons().len(), 14);
    }

    #[test]
    fn capacity_is_tracked_per_class() {
        let mut t = train(LocomotiveClass::Class374);
        t.add_wagon(wagon(1, SeatClass::First, 30)).unwrap();
        t.add_wagon(wagon(2, SeatClass::Second, 70)).unwrap();
        t.add_wagon(wagon(3, SeatClass::Second, 70)).unwrap();

        assert_eq!(t.capacity_for(SeatClass::First), 30);
        assert_eq!(t.capacity_for(SeatClass::Second), 140);
        assert_eq!(t.total_capacity(), 80 + 30 + 140);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn locomotive_class() -> impl Strategy<Value = LocomotiveClass> {
        prop_oneof![
            Just(LocomotiveClass::Class373),
            Just(LocomotiveClass::Class374)
        ]
    }

    fn seat_class() -> impl Strategy<Value = SeatClass> {
        prop_oneof![Just(SeatClass::First), Just(SeatClass::Second)]
    }

    proptest! {
        /// The wagon count never exceeds the locomotive limit, however many
        /// adds are attempted
        #[test]
        fn wagon_count_never_exceeds_limit(
            class in locomotive_class(),
            adds in proptest::collection::vec((seat_class(), 1usize..200), 0..40),
        ) {
            let mut t = Train::new(TrainId::parse("T-1").unwrap(), Locomotive::new(class));
            for (n, (sc, seats)) in adds.into_iter().enumerate() {
                let _ = t.add_wagon(Wagon::new(n as u32 + 1, sc, seats).unwrap());
                prop_assert!(t.wagons().len() <= class.max_wagons());
            }
        }

        /// Per-class capacities always sum to the wagon seat total
        #[test]
        fn class_capacities_partition_wagon_seats(
            adds in proptest::collection::vec((seat_class(), 1usize..200), 0..12),
        ) {
            let mut t = Train::new(
                TrainId::parse("T-1").unwrap(),
                Locomotive::new(LocomotiveClass::Class373),
            );
            for (n, (sc, seats)) in adds.into_iter().enumerate() {
                t.add_wagon(Wagon::new(n as u32 + 1, sc, seats).unwrap()).unwrap();
            }

            let by_class: usize = SeatClass::ALL
                .iter()
                .map(|&c| t.capacity_for(c))
                .sum();
            prop_assert_eq!(
                by_class + t.locomotive().capacity(),
                t.total_capacity()
            );
        }
    }
}
