use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::Masked;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct SeatsBookedEvent {
    pub movie_id: Uuid,
    pub title: String,
    pub showing: String,
    pub customer_id: Masked<String>,
    pub seats: Vec<u32>,
    pub booked_at: DateTime<Utc>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct SeatsCancelledEvent {
    pub movie_id: Uuid,
    pub title: String,
    pub showing: String,
    pub customer_id: Masked<String>,
    pub seats: Vec<u32>,
    pub cancelled_at: DateTime<Utc>,
}

/// Booking history entry, one per committed book/cancel request.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingEvent {
    SeatsBooked(SeatsBookedEvent),
    SeatsCancelled(SeatsCancelledEvent),
}
