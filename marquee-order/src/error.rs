use marquee_catalog::{CatalogError, InventoryError};
use marquee_core::{CoreError, IdentityError};

use crate::ledger::LedgerError;

/// Every way a book or cancel request can be refused. None of these are fatal;
/// the message is meant to be shown to the customer as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid mobile number.")]
    InvalidIdentifier,

    #[error("Number of tickets must be at least 1.")]
    InvalidQuantity,

    #[error("Unable to find Movie.")]
    UnknownEntity(String),

    #[error("Invalid show time.")]
    UnknownShowing {
        title: String,
        showing: String,
    },

    #[error("Sorry, only {available} seat(s) available for {title} - {showing}.")]
    InsufficientSeats {
        title: String,
        showing: String,
        available: u32,
    },

    #[error("You can only cancel up to {held} ticket(s) for {showing}.")]
    InsufficientHeld {
        title: String,
        showing: String,
        held: u32,
    },

    #[error("No booking found for the given mobile number.")]
    NoBookings,

    #[error("No booking found for the given show time and mobile number.")]
    NoSuchBooking {
        title: String,
        showing: String,
    },

    #[error("You can only cancel up to {held} ticket(s) for {title} - {showing}.")]
    TooFewHeld {
        title: String,
        showing: String,
        held: u32,
    },

    /// Inventory and ledger disagree about a seat. Never expected while the
    /// service is the only writer.
    #[error("Seat {seat} for {title} - {showing} is out of sync with the ledger.")]
    SeatMismatch {
        title: String,
        showing: String,
        seat: u32,
    },

    #[error(transparent)]
    Catalog(CatalogError),
}

impl BookingError {
    /// Attach movie/showing context to an inventory failure.
    pub(crate) fn from_inventory(err: InventoryError, title: &str, showing: &str) -> Self {
        let (title, showing) = (title.to_string(), showing.to_string());
        match err {
            InventoryError::ZeroQuantity => BookingError::InvalidQuantity,
            InventoryError::InsufficientSeats { available, .. } => {
                BookingError::InsufficientSeats { title, showing, available }
            }
            InventoryError::InsufficientHeld { held, .. } => {
                BookingError::InsufficientHeld { title, showing, held }
            }
            InventoryError::SeatNotHeld(seat) => BookingError::SeatMismatch { title, showing, seat },
        }
    }

    pub(crate) fn from_ledger(err: LedgerError, title: &str, showing: &str) -> Self {
        let (title, showing) = (title.to_string(), showing.to_string());
        match err {
            LedgerError::NoSuchBooking => BookingError::NoSuchBooking { title, showing },
            LedgerError::TooFewHeld { held, .. } => BookingError::TooFewHeld { title, showing, held },
            LedgerError::SeatNotHeld(seat) => BookingError::SeatMismatch { title, showing, seat },
        }
    }
}

impl From<IdentityError> for BookingError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::InvalidFormat => BookingError::InvalidIdentifier,
        }
    }
}

impl From<CoreError> for BookingError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::IdentityError(err) => err.into(),
            CoreError::ValidationError(_) => BookingError::InvalidQuantity,
        }
    }
}

impl From<CatalogError> for BookingError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownMovie(title) => BookingError::UnknownEntity(title),
            CatalogError::UnknownShowing { title, showing } => {
                BookingError::UnknownShowing { title, showing }
            }
            other => BookingError::Catalog(other),
        }
    }
}
