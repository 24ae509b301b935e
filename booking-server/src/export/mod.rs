//! Boarding-list export.
//!
//! A read-only collaborator of the booking core: it consumes a journey and
//! the tickets sold for it, renders a plain-text report and writes it next
//! to the server. It never mutates booking state and owns no invariants.

use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{Journey, SeatClass, Ticket};

/// A compiled boarding list, ready to render or write out.
///
/// Compilation snapshots everything it needs from the journey and ticket
/// set, so the report stays consistent even if sales continue afterwards.
pub struct BoardingList {
    journey: Journey,
    tickets: Vec<Ticket>,
}

impl BoardingList {
    /// Compiles a boarding list from a journey and the tickets sold for it.
    ///
    /// The caller passes the ticket set (from
    /// `TicketService::tickets_for_journey`); tickets for other journeys
    /// are ignored rather than rejected.
    pub fn compile(journey: Journey, tickets: Vec<Ticket>) -> Self {
        let tickets = tickets
            .into_iter()
            .filter(|t| t.journey() == journey.id())
            .collect();
        BoardingList { journey, tickets }
    }

    /// Renders the report as plain text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(70);

        let _ = writeln!(out, "BOARDING LIST");
        let _ = writeln!(
            out,
            "Journey: {} -> {}",
            self.journey.departure_station(),
            self.journey.arrival_station()
        );
        let _ = writeln!(
            out,
            "Departure: {}",
            self.journey.departure_time().format("%Y-%m-%d %H:%M")
        );
        let train = match self.journey.train() {
            Some(train) => train.id().as_str(),
            None => "not assigned",
        };
        let _ = writeln!(out, "Train: {train}");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out);

        for class in SeatClass::ALL {
            let _ = writeln!(out, "{} CLASS:", class.as_str().to_uppercase());
            let mut seat = 0;
            for ticket in self.tickets.iter().filter(|t| t.class() == class) {
                seat += 1;
                let passenger = ticket.passenger();
                let _ = writeln!(
                    out,
                    "  {seat}. {} (national id {}, born {})",
                    passenger.full_name(),
                    passenger.national_id(),
                    passenger.birth_date().format("%Y-%m-%d")
                );
            }
            if seat == 0 {
                let _ = writeln!(out, "  No passengers");
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "ASSIGNED PERSONNEL:");
        if self.journey.personnel().is_empty() {
            let _ = writeln!(out, "  No personnel assigned");
        }
        for member in self.journey.personnel() {
            let _ = writeln!(
                out,
                "  {}: {} (national id {})",
                member.role().label(),
                member.full_name(),
                member.national_id()
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Total tickets: {}", self.tickets.len());

        out
    }

    /// The file name the report is written under:
    /// `<From>_<To>_<departure>.txt`, with whitespace in station names
    /// collapsed to underscores and colons stripped from the timestamp.
    pub fn file_name(&self) -> String {
        let from = sanitize(self.journey.departure_station());
        let to = sanitize(self.journey.arrival_station());
        let departure = self
            .journey
            .departure_time()
            .format("%Y-%m-%dT%H%M")
            .to_string();
        format!("{from}_{to}_{departure}.txt")
    }

    /// Writes the rendered report into `dir` and returns the full path.
    pub fn write_to_dir(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.render())?;
        Ok(path)
    }
}

fn sanitize(station: &str) -> String {
    station
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
