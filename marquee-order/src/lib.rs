pub mod booking;
pub mod error;
pub mod ledger;
pub mod models;

pub use booking::BookingService;
pub use error::BookingError;
pub use ledger::{LedgerEntry, LedgerError, TicketLedger};
pub use models::{BookingAction, BookingOutcome, CustomerBooking};
