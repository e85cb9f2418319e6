pub mod catalog;
pub mod inventory;
pub mod movie;

pub use catalog::{Catalog, MovieStatus, ShowingStatus};
pub use inventory::{InventoryError, SeatInventory, SeatState};
pub use movie::{Movie, MovieId, Showing, ShowingSpec};

/// Catalog-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Unable to find Movie: {0}")]
    UnknownMovie(String),

    #[error("Invalid show time {showing} for {title}")]
    UnknownShowing {
        title: String,
        showing: String,
    },

    #[error("Movie already exists: {0}")]
    DuplicateMovie(String),

    #[error("Duplicate show time {showing} for {title}")]
    DuplicateShowing {
        title: String,
        showing: String,
    },

    #[error("Movie {0} has no show times")]
    NoShowings(String),

    #[error("Show time {showing} for {title} has no seats")]
    NoSeats {
        title: String,
        showing: String,
    },
}
