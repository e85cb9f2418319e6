use chrono::Utc;

use marquee_catalog::{Catalog, CatalogError, MovieId, MovieStatus, ShowingSpec};
use marquee_core::{validate_request, CustomerId};
use marquee_shared::{BookingEvent, SeatsBookedEvent, SeatsCancelledEvent};

use crate::error::BookingError;
use crate::ledger::TicketLedger;
use crate::models::{BookingAction, BookingOutcome, CustomerBooking};

/// Owns the catalog, the ticket ledger and the booking history for a session.
///
/// Every request runs to completion before the next one starts. Cancellation
/// is check-then-commit: the ledger and the seat inventory are both validated
/// before either is touched, so they can never drift apart.
#[derive(Debug, Default)]
pub struct BookingService {
    catalog: Catalog,
    ledger: TicketLedger,
    events: Vec<BookingEvent>,
}

impl BookingService {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            ledger: TicketLedger::new(),
            events: Vec::new(),
        }
    }

    pub fn add_movie(
        &mut self,
        title: &str,
        genre: &str,
        showings: Vec<ShowingSpec>,
    ) -> Result<MovieId, CatalogError> {
        self.catalog.add_movie(title, genre, showings)
    }

    pub fn status(&self) -> Vec<MovieStatus> {
        self.catalog.status()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &TicketLedger {
        &self.ledger
    }

    pub fn events(&self) -> &[BookingEvent] {
        &self.events
    }

    pub fn book(
        &mut self,
        title: &str,
        showing: &str,
        quantity: u32,
        customer: &str,
    ) -> Result<BookingOutcome, BookingError> {
        self.try_book(title, showing, quantity, customer)
            .inspect_err(|err| tracing::warn!(title, showing, quantity, %err, "Booking rejected"))
    }

    pub fn cancel(
        &mut self,
        title: &str,
        showing: &str,
        quantity: u32,
        customer: &str,
    ) -> Result<BookingOutcome, BookingError> {
        self.try_cancel(title, showing, quantity, customer)
            .inspect_err(|err| tracing::warn!(title, showing, quantity, %err, "Cancellation rejected"))
    }

    /// Seats the customer currently holds, in catalog then showing order.
    pub fn bookings(&self, customer: &str) -> Result<Vec<CustomerBooking>, BookingError> {
        let customer = CustomerId::parse(customer)?;
        let Some(entry) = self.ledger.entry(&customer).filter(|e| !e.is_empty()) else {
            return Ok(Vec::new());
        };

        let bookings = self
            .catalog
            .movies()
            .iter()
            .flat_map(|movie| {
                movie.showings().iter().filter_map(move |showing| {
                    let seats = entry.seats(movie.id, &showing.time);
                    (!seats.is_empty()).then(|| CustomerBooking {
                        title: movie.title.clone(),
                        showing: showing.time.clone(),
                        seats: seats.to_vec(),
                    })
                })
            })
            .collect();
        Ok(bookings)
    }

    fn try_book(
        &mut self,
        title: &str,
        time: &str,
        quantity: u32,
        customer: &str,
    ) -> Result<BookingOutcome, BookingError> {
        let customer = validate_request(customer, quantity)?;

        let movie = self.catalog.find_mut(title)?;
        let (movie_id, title) = (movie.id, movie.title.clone());
        tracing::debug!(%movie_id, %title, time, "Resolved movie");
        let showing = movie.showing_mut(time)?;

        let seats = showing
            .seats
            .reserve(quantity)
            .map_err(|e| BookingError::from_inventory(e, &title, &showing.time))?;
        let time = showing.time.clone();

        self.ledger.record(&customer, movie_id, &time, &seats);

        tracing::info!(%title, %time, customer = %customer.masked(), ?seats, "Tickets booked");
        self.events.push(BookingEvent::SeatsBooked(SeatsBookedEvent {
            movie_id: movie_id.0,
            title: title.clone(),
            showing: time.clone(),
            customer_id: customer.masked(),
            seats: seats.clone(),
            booked_at: Utc::now(),
        }));

        Ok(BookingOutcome {
            action: BookingAction::Booked,
            title,
            showing: time,
            seats,
        })
    }

    fn try_cancel(
        &mut self,
        title: &str,
        time: &str,
        quantity: u32,
        customer: &str,
    ) -> Result<BookingOutcome, BookingError> {
        let customer = validate_request(customer, quantity)?;

        let movie = self.catalog.find_mut(title)?;
        let (movie_id, title) = (movie.id, movie.title.clone());
        let showing = movie.showing_mut(time)?;
        let time = showing.time.clone();

        // Check phase: nothing below mutates until both sides agree.
        if self.ledger.entry(&customer).is_none() {
            return Err(BookingError::NoBookings);
        }
        if self.ledger.held(&customer, movie_id, &time).is_empty() {
            return Err(BookingError::NoSuchBooking { title, showing: time });
        }
        let held = showing.seats.held();
        if quantity > held {
            return Err(BookingError::InsufficientHeld { title, showing: time, held });
        }
        let seats = self
            .ledger
            .plan_withdrawal(&customer, movie_id, &time, quantity)
            .map_err(|e| BookingError::from_ledger(e, &title, &time))?;
        showing
            .seats
            .check_held(&seats)
            .map_err(|e| BookingError::from_inventory(e, &title, &time))?;

        // Commit phase
        showing
            .seats
            .release_seats(&seats)
            .map_err(|e| BookingError::from_inventory(e, &title, &time))?;
        self.ledger
            .withdraw(&customer, movie_id, &time, &seats)
            .map_err(|e| BookingError::from_ledger(e, &title, &time))?;

        tracing::info!(%title, %time, customer = %customer.masked(), ?seats, "Tickets canceled");
        self.events.push(BookingEvent::SeatsCancelled(SeatsCancelledEvent {
            movie_id: movie_id.0,
            title: title.clone(),
            showing: time.clone(),
            customer_id: customer.masked(),
            seats: seats.clone(),
            cancelled_at: Utc::now(),
        }));

        Ok(BookingOutcome {
            action: BookingAction::Cancelled,
            title,
            showing: time,
            seats,
        })
    }
}
