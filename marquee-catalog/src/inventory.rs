use serde::{Deserialize, Serialize};

/// State of a single seat slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatState {
    Free,
    Held,
}

/// Fixed-size seat map for one showing.
///
/// Seats are numbered from 1. Both allocation and release always pick the
/// lowest-numbered eligible seats first, so repeated book/cancel cycles hand
/// out predictable seat numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatInventory {
    seats: Box<[SeatState]>,
}

impl SeatInventory {
    pub fn new(total_seats: u32) -> Self {
        Self {
            seats: vec![SeatState::Free; total_seats as usize].into_boxed_slice(),
        }
    }

    pub fn total(&self) -> u32 {
        self.seats.len() as u32
    }

    pub fn available(&self) -> u32 {
        self.count(SeatState::Free)
    }

    pub fn held(&self) -> u32 {
        self.count(SeatState::Held)
    }

    /// State of a seat, `None` when the number is outside the showing.
    pub fn state(&self, seat: u32) -> Option<SeatState> {
        let index = (seat as usize).checked_sub(1)?;
        self.seats.get(index).copied()
    }

    /// All held seat numbers, ascending.
    pub fn held_seats(&self) -> Vec<u32> {
        self.lowest(SeatState::Held, self.seats.len())
    }

    /// Hold the `quantity` lowest-numbered free seats.
    pub fn reserve(&mut self, quantity: u32) -> Result<Vec<u32>, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::ZeroQuantity);
        }

        let available = self.available();
        if quantity > available {
            return Err(InventoryError::InsufficientSeats {
                requested: quantity,
                available,
            });
        }

        let seats = self.lowest(SeatState::Free, quantity as usize);
        self.set_all(&seats, SeatState::Held);
        Ok(seats)
    }

    /// Free the `quantity` lowest-numbered held seats.
    pub fn release(&mut self, quantity: u32) -> Result<Vec<u32>, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::ZeroQuantity);
        }

        let held = self.held();
        if quantity > held {
            return Err(InventoryError::InsufficientHeld {
                requested: quantity,
                held,
            });
        }

        let seats = self.lowest(SeatState::Held, quantity as usize);
        self.set_all(&seats, SeatState::Free);
        Ok(seats)
    }

    /// Verify every listed seat is currently held, without mutating anything.
    pub fn check_held(&self, seats: &[u32]) -> Result<(), InventoryError> {
        if seats.is_empty() {
            return Err(InventoryError::ZeroQuantity);
        }

        let held = self.held();
        if seats.len() as u32 > held {
            return Err(InventoryError::InsufficientHeld {
                requested: seats.len() as u32,
                held,
            });
        }

        match seats.iter().find(|&&seat| self.state(seat) != Some(SeatState::Held)) {
            Some(&seat) => Err(InventoryError::SeatNotHeld(seat)),
            None => Ok(()),
        }
    }

    /// Free exactly the listed seats. All-or-nothing: nothing changes unless
    /// every seat is currently held.
    pub fn release_seats(&mut self, seats: &[u32]) -> Result<(), InventoryError> {
        self.check_held(seats)?;
        self.set_all(seats, SeatState::Free);
        Ok(())
    }

    fn count(&self, state: SeatState) -> u32 {
        self.seats.iter().filter(|&&s| s == state).count() as u32
    }

    fn lowest(&self, state: SeatState, limit: usize) -> Vec<u32> {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == state)
            .take(limit)
            .map(|(index, _)| index as u32 + 1)
            .collect()
    }

    fn set_all(&mut self, seats: &[u32], state: SeatState) {
        for &seat in seats {
            self.seats[seat as usize - 1] = state;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    #[error("Insufficient seats: requested {requested}, available {available}")]
    InsufficientSeats {
        requested: u32,
        available: u32,
    },

    #[error("Insufficient held seats: requested {requested}, held {held}")]
    InsufficientHeld {
        requested: u32,
        held: u32,
    },

    #[error("Seat {0} is not held")]
    SeatNotHeld(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_lifecycle() {
        let mut inventory = SeatInventory::new(5);
        assert_eq!(inventory.total(), 5);
        assert_eq!(inventory.available(), 5);

        // Reserve fills from the front
        assert_eq!(inventory.reserve(2).unwrap(), vec![1, 2]);
        assert_eq!(inventory.reserve(2).unwrap(), vec![3, 4]);
        assert_eq!(inventory.available(), 1);
        assert_eq!(inventory.held(), 4);

        // Release also starts with the lowest held seat
        assert_eq!(inventory.release(1).unwrap(), vec![1]);
        assert_eq!(inventory.held_seats(), vec![2, 3, 4]);

        // The freed seat is handed out again before seat 5
        assert_eq!(inventory.reserve(2).unwrap(), vec![1, 5]);
        assert_eq!(inventory.available(), 0);
    }

    #[test]
    fn test_reserve_beyond_capacity_is_rejected_without_mutation() {
        let mut inventory = SeatInventory::new(3);
        inventory.reserve(2).unwrap();

        let result = inventory.reserve(2);
        assert_eq!(
            result,
            Err(InventoryError::InsufficientSeats { requested: 2, available: 1 })
        );
        assert_eq!(inventory.held_seats(), vec![1, 2]);
    }

    #[test]
    fn test_release_beyond_held_is_rejected_without_mutation() {
        let mut inventory = SeatInventory::new(3);
        inventory.reserve(1).unwrap();

        assert_eq!(
            inventory.release(2),
            Err(InventoryError::InsufficientHeld { requested: 2, held: 1 })
        );
        assert_eq!(inventory.held_seats(), vec![1]);
    }

    #[test]
    fn test_zero_quantity() {
        let mut inventory = SeatInventory::new(3);
        assert_eq!(inventory.reserve(0), Err(InventoryError::ZeroQuantity));
        assert_eq!(inventory.release(0), Err(InventoryError::ZeroQuantity));
    }

    #[test]
    fn test_reserve_release_round_trip() {
        let mut inventory = SeatInventory::new(10);
        let booked = inventory.reserve(4).unwrap();
        assert_eq!(inventory.release(4).unwrap(), booked);
        assert_eq!(inventory.available(), 10);
    }

    #[test]
    fn test_release_specific_seats() {
        let mut inventory = SeatInventory::new(4);
        inventory.reserve(4).unwrap();

        inventory.release_seats(&[2, 4]).unwrap();
        assert_eq!(inventory.held_seats(), vec![1, 3]);

        // Seat 2 is already free, so nothing is released
        assert_eq!(
            inventory.release_seats(&[1, 2]),
            Err(InventoryError::SeatNotHeld(2))
        );
        assert_eq!(inventory.held_seats(), vec![1, 3]);

        assert_eq!(inventory.check_held(&[9]), Err(InventoryError::SeatNotHeld(9)));
        assert_eq!(inventory.check_held(&[0]), Err(InventoryError::SeatNotHeld(0)));
    }

    #[test]
    fn test_counts_always_sum_to_total() {
        let mut inventory = SeatInventory::new(7);
        for step in 1..=3 {
            inventory.reserve(step).unwrap();
            assert_eq!(inventory.available() + inventory.held(), inventory.total());
        }
        inventory.release(4).unwrap();
        assert_eq!(inventory.available() + inventory.held(), inventory.total());
    }

    #[test]
    fn test_state_lookup() {
        let mut inventory = SeatInventory::new(2);
        inventory.reserve(1).unwrap();
        assert_eq!(inventory.state(1), Some(SeatState::Held));
        assert_eq!(inventory.state(2), Some(SeatState::Free));
        assert_eq!(inventory.state(0), None);
        assert_eq!(inventory.state(3), None);
    }
}
