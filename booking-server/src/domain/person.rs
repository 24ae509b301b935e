//! People: passengers and operating personnel.

use std::fmt;

use chrono::NaiveDate;

use super::NationalId;

/// Error returned when parsing an invalid personnel role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid personnel role: {value:?} (expected conductor, steward or baggage)")]
pub struct InvalidRole {
    value: String,
}

/// The operating roles a crew member can hold.
///
/// The set is closed on purpose: journey staffing rules are written in
/// terms of these roles, so adding one is a domain change rather than a
/// data change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonnelRole {
    /// Drives the train
    Conductor,
    /// Looks after passengers on board
    Steward,
    /// Loads and unloads luggage
    BaggageHandler,
}

impl PersonnelRole {
    /// All roles, in report order.
    pub const ALL: [PersonnelRole; 3] = [
        PersonnelRole::Conductor,
        PersonnelRole::Steward,
        PersonnelRole::BaggageHandler,
    ];

    /// Parse a role from its request-body name (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, InvalidRole> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conductor" => Ok(PersonnelRole::Conductor),
            "steward" => Ok(PersonnelRole::Steward),
            "baggage" | "baggage-handler" => Ok(PersonnelRole::BaggageHandler),
            _ => Err(InvalidRole {
                value: s.to_string(),
            }),
        }
    }

    /// The lowercase name used in request and response bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonnelRole::Conductor => "conductor",
            PersonnelRole::Steward => "steward",
            PersonnelRole::BaggageHandler => "baggage-handler",
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            PersonnelRole::Conductor => "Conductor",
            PersonnelRole::Steward => "Steward",
            PersonnelRole::BaggageHandler => "Baggage handler",
        }
    }
}

impl fmt::Display for PersonnelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered passenger.
///
/// Passengers are keyed by national ID; the passenger service guarantees
/// at most one registration per ID and validates the name fields, so a
/// constructed `Passenger` always carries trimmed, non-blank names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    first_name: String,
    last_name: String,
    national_id: NationalId,
    birth_date: NaiveDate,
}

impl Passenger {
    /// Builds a passenger from already-validated fields.
    pub fn new(
        first_name: String,
        last_name: String,
        national_id: NationalId,
        birth_date: NaiveDate,
    ) -> Self {
        Passenger {
            first_name,
            last_name,
            national_id,
            birth_date,
        }
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns "first last" for display in listings and reports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the national ID that keys this passenger.
    pub fn national_id(&self) -> &NationalId {
        &self.national_id
    }

    /// Returns the birth date.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

/// A crew member who can be assigned to journeys.
///
/// Like passengers, personnel are keyed by national ID. Each crew member
/// holds one role and a list of free-form certifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Personnel {
    first_name: String,
    last_name: String,
    national_id: NationalId,
    birth_date: NaiveDate,
    role: PersonnelRole,
    certifications: Vec<String>,
}

impl Personnel {
    /// Builds a crew member with no certifications yet.
    pub fn new(
        first_name: String,
        last_name: String,
        national_id: NationalId,
        birth_date: NaiveDate,
        role: PersonnelRole,
    ) -> Self {
        Personnel {
            first_name,
            last_name,
            national_id,
            birth_date,
            role,
            certifications: Vec::new(),
        }
    }

    /// Returns the first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns "first last" for display in listings and reports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the national ID that keys this crew member.
    pub fn national_id(&self) -> &NationalId {
        &self.national_id
    }

    /// Returns the birth date.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Returns the crew member's role.
    pub fn role(&self) -> PersonnelRole {
        self.role
    }

    /// Returns the certifications in the order they were added.
    pub fn certifications(&self) -> &[String] {
        &self.certifications
    }

    /// Records a certification. Callers validate non-blankness.
    pub fn add_certification(&mut self, certification: String) {
        self.certifications.push(certification);
    }

    /// True if the exact certification string has been recorded.
    pub fn has_certification(&self, certification: &str) -> bool {
        self.certifications.iter().any(|c| c == certification)
    }
}
