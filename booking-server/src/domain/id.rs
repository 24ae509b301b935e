//! Generated identifiers.
//!
//! Journeys and tickets have no natural key, so they get a random 128-bit
//! identifier at creation. Each gets its own newtype so a journey ID can
//! never be handed to an API expecting a ticket ID.

use std::fmt;

use uuid::Uuid;

/// Error returned when parsing a generated identifier from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {value:?} is not a valid UUID")]
pub struct InvalidId {
    kind: &'static str,
    value: String,
}

macro_rules! generated_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID. Lets tests pin identifiers.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parse an identifier from its string form.
            pub fn parse(s: &str) -> Result<Self, InvalidId> {
                match Uuid::parse_str(s.trim()) {
                    Ok(uuid) => Ok(Self(uuid)),
                    Err(_) => Err(InvalidId {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

generated_id!(
    /// Identifier of a scheduled journey.
    JourneyId,
    "journey"
);

generated_id!(
    /// Identifier of a sold ticket.
    TicketId,
    "ticket"
);
