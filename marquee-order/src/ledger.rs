use std::collections::{BTreeSet, HashMap};

use marquee_catalog::MovieId;
use marquee_core::CustomerId;

/// Seats one customer holds, partitioned by movie and showing time.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub customer: CustomerId,
    tickets: HashMap<MovieId, HashMap<String, Vec<u32>>>,
}

impl LedgerEntry {
    fn new(customer: CustomerId) -> Self {
        Self {
            customer,
            tickets: HashMap::new(),
        }
    }

    /// Seats held for one showing, in booking order. Empty when none.
    pub fn seats(&self, movie: MovieId, showing: &str) -> &[u32] {
        self.tickets
            .get(&movie)
            .and_then(|showings| showings.get(showing))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Per-customer record of held seats.
///
/// An entry is created on the first recorded booking and kept for the rest of
/// the session; showing keys are dropped as soon as their seat list empties.
#[derive(Debug, Default)]
pub struct TicketLedger {
    entries: HashMap<CustomerId, LedgerEntry>,
}

impl TicketLedger {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn entry(&self, customer: &CustomerId) -> Option<&LedgerEntry> {
        self.entries.get(customer)
    }

    pub fn held(&self, customer: &CustomerId, movie: MovieId, showing: &str) -> &[u32] {
        self.entries
            .get(customer)
            .map(|entry| entry.seats(movie, showing))
            .unwrap_or(&[])
    }

    /// Append newly booked seats after any the customer already holds.
    pub fn record(&mut self, customer: &CustomerId, movie: MovieId, showing: &str, seats: &[u32]) {
        self.entries
            .entry(customer.clone())
            .or_insert_with(|| LedgerEntry::new(customer.clone()))
            .tickets
            .entry(movie)
            .or_default()
            .entry(showing.to_string())
            .or_default()
            .extend_from_slice(seats);
    }

    /// Pick the `quantity` lowest-numbered seats the customer holds for the
    /// showing, ascending. Nothing is mutated.
    pub fn plan_withdrawal(
        &self,
        customer: &CustomerId,
        movie: MovieId,
        showing: &str,
        quantity: u32,
    ) -> Result<Vec<u32>, LedgerError> {
        let held = self.held(customer, movie, showing);
        if held.is_empty() {
            return Err(LedgerError::NoSuchBooking);
        }
        if (held.len() as u32) < quantity {
            return Err(LedgerError::TooFewHeld {
                requested: quantity,
                held: held.len() as u32,
            });
        }

        let mut sorted = held.to_vec();
        sorted.sort_unstable();
        sorted.truncate(quantity as usize);
        Ok(sorted)
    }

    /// Remove exactly `seats` from the customer's list for the showing,
    /// keeping the survivors in order. All-or-nothing.
    pub fn withdraw(
        &mut self,
        customer: &CustomerId,
        movie: MovieId,
        showing: &str,
        seats: &[u32],
    ) -> Result<(), LedgerError> {
        let showings = self
            .entries
            .get_mut(customer)
            .and_then(|entry| entry.tickets.get_mut(&movie))
            .ok_or(LedgerError::NoSuchBooking)?;
        let held = showings.get_mut(showing).ok_or(LedgerError::NoSuchBooking)?;

        if held.len() < seats.len() {
            return Err(LedgerError::TooFewHeld {
                requested: seats.len() as u32,
                held: held.len() as u32,
            });
        }
        if let Some(&seat) = seats.iter().find(|&&seat| !held.contains(&seat)) {
            return Err(LedgerError::SeatNotHeld(seat));
        }

        let removed: BTreeSet<u32> = seats.iter().copied().collect();
        held.retain(|seat| !removed.contains(seat));

        if held.is_empty() {
            showings.remove(showing);
            if showings.is_empty() {
                if let Some(entry) = self.entries.get_mut(customer) {
                    entry.tickets.remove(&movie);
                }
            }
        }
        Ok(())
    }

    /// Union of every customer's seats for one showing, ascending.
    pub fn showing_seats(&self, movie: MovieId, showing: &str) -> Vec<u32> {
        let seats: BTreeSet<u32> = self
            .entries
            .values()
            .flat_map(|entry| entry.seats(movie, showing).iter().copied())
            .collect();
        seats.into_iter().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("No booking found for the given show time and mobile number")]
    NoSuchBooking,

    #[error("Customer holds {held} ticket(s), requested {requested}")]
    TooFewHeld {
        requested: u32,
        held: u32,
    },

    #[error("Seat {0} is not held by this customer")]
    SeatNotHeld(u32),
}
