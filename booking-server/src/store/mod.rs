//! In-memory entity stores.
//!
//! Each entity type lives in exactly one store, which owns the entity for
//! the lifetime of the process. Reads hand out cloned snapshots; the maps
//! themselves are never exposed, so all mutation funnels through [`Store`]
//! methods under the store's lock.

mod tickets;

pub use tickets::TicketStore;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use parking_lot::RwLock;

use crate::domain::{Journey, JourneyId, NationalId, Passenger, Personnel, Train, TrainId};

/// Types that carry their own store key.
pub trait Keyed {
    /// The key the store indexes by.
    type Key: Clone + Eq + Hash;

    /// Returns the key for this value.
    fn key(&self) -> Self::Key;
}

impl Keyed for Passenger {
    type Key = NationalId;

    fn key(&self) -> NationalId {
        self.national_id().clone()
    }
}

impl Keyed for Personnel {
    type Key = NationalId;

    fn key(&self) -> NationalId {
        self.national_id().clone()
    }
}

impl Keyed for Train {
    type Key = TrainId;

    fn key(&self) -> TrainId {
        self.id().clone()
    }
}

impl Keyed for Journey {
    type Key = JourneyId;

    fn key(&self) -> JourneyId {
        self.id()
    }
}

/// A keyed in-memory store.
///
/// `save` upserts under the value's own key; `save_new` refuses to
/// replace. Single-key atomicity only: multi-entity consistency is the
/// services' problem.
pub struct Store<V: Keyed> {
    entries: RwLock<HashMap<V::Key, V>>,
}

impl<V: Keyed + Clone> Store<V> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts or replaces the value under its own key.
    pub fn save(&self, value: V) {
        let mut entries = self.entries.write();
        entries.insert(value.key(), value);
    }

    /// Inserts the value only if its key is still free.
    ///
    /// Returns false (dropping the value) when the key is already taken.
    /// The check and the insert run under one write lock, so duplicate
    /// registrations cannot slip past each other.
    pub fn save_new(&self, value: V) -> bool {
        let mut entries = self.entries.write();
        match entries.entry(value.key()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    /// Returns a snapshot of the value under `key`, if present.
    pub fn find(&self, key: &V::Key) -> Option<V> {
        let entries = self.entries.read();
        entries.get(key).cloned()
    }

    /// Returns a snapshot of every stored value. Order is not defined.
    pub fn all(&self) -> Vec<V> {
        let entries = self.entries.read();
        entries.values().cloned().collect()
    }

    /// True if a value is stored under `key`.
    pub fn contains(&self, key: &V::Key) -> bool {
        let entries = self.entries.read();
        entries.contains_key(key)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        let entries = self.entries.read();
        entries.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs `f` on the value under `key` while holding the write lock.
    ///
    /// Check-then-mutate sequences (wagon limits, crew appends) stay
    /// atomic per entity this way: no other writer can interleave between
    /// the check inside `f` and the mutation. Returns `None` if the key
    /// is absent.
    pub fn update<R>(&self, key: &V::Key, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        let mut entries = self.entries.write();
        entries.get_mut(key).map(f)
    }
}

impl<V: Keyed + Clone> Default for Store<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registered passengers, keyed by national ID.
pub type PassengerStore = Store<Passenger>;

/// Registered crew members, keyed by national ID.
pub type PersonnelStore = Store<Personnel>;

/// Composed trains, keyed by train ID.
pub type TrainStore = Store<Train>;

/// Scheduled journeys, keyed by generated journey ID.
pub type JourneyStore = Store<Journey>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Locomotive, LocomotiveClass, SeatClass, Wagon};
    use chrono::NaiveDate;

    fn passenger(id: &str, first: &str) -> Passenger {
        Passenger::new(
            first.into(),
            "Test".into(),
            NationalId::parse(id).unwrap(),
            NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
        )
    }

    #[test]
    fn save_then_find_returns_snapshot() {
        let store = PassengerStore::new();
        assert!(store.is_empty());

        store.save(passenger("90.01.15-123.45", "Anna"));

        let key = NationalId::parse("90.01.15-123.45").unwrap();
        let found = store.find(&key).unwrap();
        assert_eq!(found.first_name(), "Anna");
        assert_eq!(store.len(), 1);
        assert!(store.contains(&key));
    }

    #[test]
    fn find_missing_returns_none() {
        let store = PassengerStore::new();
        let key = NationalId::parse("90.01.15-123.45").unwrap();
        assert!(store.find(&key).is_none());
        assert!(!store.contains(&key));
    }

    #[test]
    fn save_upserts() {
        let store = PassengerStore::new();
        store.save(passenger("90.01.15-123.45", "Anna"));
        store.save(passenger("90.01.15-123.45", "Annabel"));

        assert_eq!(store.len(), 1);
        let key = NationalId::parse("90.01.15-123.45").unwrap();
        assert_eq!(store.find(&key).unwrap().first_name(), "Annabel");
    }

    #[test]
    fn save_new_refuses_taken_keys() {
        let store = PassengerStore::new();
        assert!(store.save_new(passenger("90.01.15-123.45", "Anna")));
        assert!(!store.save_new(passenger("90.01.15-123.45", "Impostor")));

        // The first registration is untouched
        let key = NationalId::parse("90.01.15-123.45").unwrap();
        assert_eq!(store.find(&key).unwrap().first_name(), "Anna");
    }

    #[test]
    fn all_returns_every_value() {
        let store = PassengerStore::new();
        store.save(passenger("90.01.15-123.45", "Anna"));
        store.save(passenger("88.09.25-567.89", "Bob"));
        store.save(passenger("78.05.12-456.78", "Clara"));

        let mut names: Vec<_> = store.all().iter().map(|p| p.first_name().to_string()).collect();
        names.sort();
        assert_eq!(names, ["Anna", "Bob", "Clara"]);
    }

    #[test]
    fn update_mutates_in_place() {
        let store = TrainStore::new();
        let id = TrainId::parse("E320-01").unwrap();
        store.save(Train::new(id.clone(), Locomotive::new(LocomotiveClass::Class373)));

        let wagons = store
            .update(&id, |train| {
                train
                    .add_wagon(Wagon::new(1, SeatClass::First, 30).unwrap())
                    .unwrap();
                train.wagons().len()
            })
            .unwrap();

        assert_eq!(wagons, 1);
        assert_eq!(store.find(&id).unwrap().wagons().len(), 1);
    }

    #[test]
    fn update_missing_returns_none() {
        let store = TrainStore::new();
        let id = TrainId::parse("ghost").unwrap();
        assert!(store.update(&id, |_| ()).is_none());
    }

    #[test]
    fn reads_are_defensive_copies() {
        let store = TrainStore::new();
        let id = TrainId::parse("E320-01").unwrap();
        store.save(Train::new(id.clone(), Locomotive::new(LocomotiveClass::Class373)));

        // Mutating the returned snapshot must not leak into the store
        let mut snapshot = store.find(&id).unwrap();
        snapshot
            .add_wagon(Wagon::new(1, SeatClass::First, 30).unwrap())
            .unwrap();

        assert!(store.find(&id).unwrap().wagons().is_empty());
    }
}
