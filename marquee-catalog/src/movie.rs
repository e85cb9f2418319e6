use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::inventory::SeatInventory;
use crate::CatalogError;

/// Canonical identity of a movie, assigned once when it enters the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub Uuid);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Requested showing when adding a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowingSpec {
    pub time: String,
    pub total_seats: u32,
}

impl ShowingSpec {
    pub fn new(time: impl Into<String>, total_seats: u32) -> Self {
        Self {
            time: time.into(),
            total_seats,
        }
    }
}

/// One scheduled time slot with its own seat pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showing {
    pub time: String,
    pub seats: SeatInventory,
}

impl Showing {
    pub fn new(time: impl Into<String>, total_seats: u32) -> Self {
        Self {
            time: time.into(),
            seats: SeatInventory::new(total_seats),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    showings: Vec<Showing>,
}

impl Movie {
    /// Build a movie, rejecting a missing schedule, duplicate showing times and
    /// empty seat pools. The title is stored trimmed.
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        showings: Vec<ShowingSpec>,
    ) -> Result<Self, CatalogError> {
        let title = title.into().trim().to_string();
        if showings.is_empty() {
            return Err(CatalogError::NoShowings(title));
        }

        let mut built: Vec<Showing> = Vec::with_capacity(showings.len());

        for spec in showings {
            if spec.total_seats == 0 {
                return Err(CatalogError::NoSeats {
                    title,
                    showing: spec.time,
                });
            }
            if built.iter().any(|s| s.time == spec.time) {
                return Err(CatalogError::DuplicateShowing {
                    title,
                    showing: spec.time,
                });
            }
            built.push(Showing::new(spec.time, spec.total_seats));
        }

        Ok(Self {
            id: MovieId::new(),
            title,
            genre: genre.into(),
            showings: built,
        })
    }

    /// Showings in display order.
    pub fn showings(&self) -> &[Showing] {
        &self.showings
    }

    /// Exact-match lookup by showing time.
    pub fn showing(&self, time: &str) -> Result<&Showing, CatalogError> {
        self.showings
            .iter()
            .find(|s| s.time == time)
            .ok_or_else(|| self.unknown_showing(time))
    }

    pub fn showing_mut(&mut self, time: &str) -> Result<&mut Showing, CatalogError> {
        match self.showings.iter().position(|s| s.time == time) {
            Some(index) => Ok(&mut self.showings[index]),
            None => Err(self.unknown_showing(time)),
        }
    }

    pub fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.trim().to_lowercase()
    }

    fn unknown_showing(&self, time: &str) -> CatalogError {
        CatalogError::UnknownShowing {
            title: self.title.clone(),
            showing: time.to_string(),
        }
    }
}
