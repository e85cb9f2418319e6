use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingAction {
    Booked,
    Cancelled,
}

/// Result of a committed book or cancel request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingOutcome {
    pub action: BookingAction,
    pub title: String,
    pub showing: String,
    pub seats: Vec<u32>,
}

impl fmt::Display for BookingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.action {
            BookingAction::Booked => "booked",
            BookingAction::Cancelled => "canceled",
        };
        write!(
            f,
            "Tickets {} for {} - {}. Seat number(s): {}",
            verb,
            self.title,
            self.showing,
            join_seats(&self.seats)
        )
    }
}

/// Seats a customer currently holds for one showing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerBooking {
    pub title: String,
    pub showing: String,
    pub seats: Vec<u32>,
}

impl fmt::Display for CustomerBooking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}: Seat number(s): {}", self.title, self.showing, join_seats(&self.seats))
    }
}

pub(crate) fn join_seats(seats: &[u32]) -> String {
    seats
        .iter()
        .map(|seat| seat.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        let mut outcome = BookingOutcome {
            action: BookingAction::Booked,
            title: "Titanic".to_string(),
            showing: "12:00 PM".to_string(),
            seats: vec![1, 2],
        };
        assert_eq!(
            outcome.to_string(),
            "Tickets booked for Titanic - 12:00 PM. Seat number(s): 1, 2"
        );

        outcome.action = BookingAction::Cancelled;
        outcome.seats = vec![1];
        assert_eq!(
            outcome.to_string(),
            "Tickets canceled for Titanic - 12:00 PM. Seat number(s): 1"
        );
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = BookingOutcome {
            action: BookingAction::Cancelled,
            title: "Thor".to_string(),
            showing: "01:00 PM".to_string(),
            seats: vec![3],
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["action"], "CANCELLED");
        assert_eq!(json["seats"], serde_json::json!([3]));
    }
}
