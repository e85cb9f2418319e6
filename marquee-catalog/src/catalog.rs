use serde::{Deserialize, Serialize};

use crate::movie::{Movie, MovieId, ShowingSpec};
use crate::CatalogError;

/// Seat counts for one showing as shown on the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowingStatus {
    pub time: String,
    pub total_seats: u32,
    pub available_seats: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieStatus {
    pub title: String,
    pub genre: String,
    pub showings: Vec<ShowingStatus>,
}

/// Append-only list of movies, in the order they were added.
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    pub fn add_movie(
        &mut self,
        title: &str,
        genre: &str,
        showings: Vec<ShowingSpec>,
    ) -> Result<MovieId, CatalogError> {
        if self.movies.iter().any(|m| m.matches_title(title)) {
            return Err(CatalogError::DuplicateMovie(title.to_string()));
        }

        let movie = Movie::new(title, genre, showings)?;
        let id = movie.id;
        tracing::debug!(%id, title, "Movie added to catalog");
        self.movies.push(movie);
        Ok(id)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Case-insensitive lookup by title.
    pub fn find(&self, title: &str) -> Result<&Movie, CatalogError> {
        self.movies
            .iter()
            .find(|m| m.matches_title(title))
            .ok_or_else(|| CatalogError::UnknownMovie(title.to_string()))
    }

    pub fn find_mut(&mut self, title: &str) -> Result<&mut Movie, CatalogError> {
        self.movies
            .iter_mut()
            .find(|m| m.matches_title(title))
            .ok_or_else(|| CatalogError::UnknownMovie(title.to_string()))
    }

    pub fn status(&self) -> Vec<MovieStatus> {
        self.movies
            .iter()
            .map(|movie| MovieStatus {
                title: movie.title.clone(),
                genre: movie.genre.clone(),
                showings: movie
                    .showings()
                    .iter()
                    .map(|s| ShowingStatus {
                        time: s.time.clone(),
                        total_seats: s.seats.total(),
                        available_seats: s.seats.available(),
                    })
                    .collect(),
            })
            .collect()
    }
}
