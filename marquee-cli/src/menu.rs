use std::io::{self, BufRead, Write};

use marquee_order::BookingService;

const SEPARATOR: &str = "-----------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Schedule,
    Book,
    Cancel,
    MyTickets,
    Exit,
}

impl Choice {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Choice::Schedule),
            "2" => Some(Choice::Book),
            "3" => Some(Choice::Cancel),
            "4" => Some(Choice::MyTickets),
            "5" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// Prompts for one book/cancel request.
struct RequestPrompts {
    showtime: &'static str,
    quantity: &'static str,
    mobile: &'static str,
}

const BOOK_PROMPTS: RequestPrompts = RequestPrompts {
    showtime: "Enter a showtime to book (e.g. 12:00 PM):",
    quantity: "How many tickets do you want to book?",
    mobile: "Enter mobile number:",
};

const CANCEL_PROMPTS: RequestPrompts = RequestPrompts {
    showtime: "Enter showtime of the ticket (e.g. 12:00 PM):",
    quantity: "How many tickets do you want to cancel?",
    mobile: "Enter Mobile number, which you have used to book the ticket",
};

struct Request {
    title: String,
    showtime: String,
    quantity: u32,
    mobile: String,
}

/// Interactive terminal menu over any line-based input and output.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self, service: &mut BookingService) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match Choice::parse(&line) {
                Some(Choice::Schedule) => self.show_schedule(service)?,
                Some(Choice::Book) => {
                    let Some(request) = self.read_request(&BOOK_PROMPTS)? else {
                        break;
                    };
                    if let Some(request) = request {
                        let message = match service.book(
                            &request.title,
                            &request.showtime,
                            request.quantity,
                            &request.mobile,
                        ) {
                            Ok(outcome) => outcome.to_string(),
                            Err(err) => err.to_string(),
                        };
                        writeln!(self.output, "{}", message)?;
                    }
                }
                Some(Choice::Cancel) => {
                    let Some(request) = self.read_request(&CANCEL_PROMPTS)? else {
                        break;
                    };
                    if let Some(request) = request {
                        let message = match service.cancel(
                            &request.title,
                            &request.showtime,
                            request.quantity,
                            &request.mobile,
                        ) {
                            Ok(outcome) => outcome.to_string(),
                            Err(err) => err.to_string(),
                        };
                        writeln!(self.output, "{}", message)?;
                    }
                }
                Some(Choice::MyTickets) => {
                    let Some(mobile) = self.ask("Enter mobile number:")? else {
                        break;
                    };
                    self.show_tickets(service, &mobile)?;
                }
                Some(Choice::Exit) => {
                    writeln!(self.output, "Thank you for using Ticket Booking System. Goodbye!")?;
                    break;
                }
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Movie Ticket Booking System")?;
        writeln!(self.output)?;
        writeln!(self.output, "1. Display Movie Schedule")?;
        writeln!(self.output, "2. Book a Ticket")?;
        writeln!(self.output, "3. Cancel a Ticket")?;
        writeln!(self.output, "4. View My Tickets")?;
        writeln!(self.output, "5. Exit")?;
        self.output.flush()
    }

    fn show_schedule(&mut self, service: &BookingService) -> io::Result<()> {
        for movie in service.status() {
            writeln!(self.output, "Movie: {} (Genre: {})", movie.title, movie.genre)?;
            for showing in &movie.showings {
                writeln!(
                    self.output,
                    "  Show: {}, Total Seats: {}, Available Seats: {}",
                    showing.time, showing.total_seats, showing.available_seats
                )?;
            }
            writeln!(self.output, "{}", SEPARATOR)?;
        }
        Ok(())
    }

    fn show_tickets(&mut self, service: &BookingService, mobile: &str) -> io::Result<()> {
        match service.bookings(mobile) {
            Ok(bookings) if bookings.is_empty() => {
                writeln!(self.output, "No tickets found for the given mobile number.")
            }
            Ok(bookings) => {
                for booking in bookings {
                    writeln!(self.output, "{}", booking)?;
                }
                Ok(())
            }
            Err(err) => writeln!(self.output, "{}", err),
        }
    }

    /// Outer `None` means input ended; inner `None` means the request was
    /// rejected before reaching the service.
    fn read_request(&mut self, prompts: &RequestPrompts) -> io::Result<Option<Option<Request>>> {
        let Some(title) = self.ask("Enter movie title:")? else {
            return Ok(None);
        };
        let Some(showtime) = self.ask(prompts.showtime)? else {
            return Ok(None);
        };
        let Some(quantity) = self.ask(prompts.quantity)? else {
            return Ok(None);
        };
        let Some(mobile) = self.ask(prompts.mobile)? else {
            return Ok(None);
        };

        let Ok(quantity) = quantity.parse::<u32>() else {
            writeln!(self.output, "Please enter a valid number of tickets.")?;
            return Ok(Some(None));
        };

        Ok(Some(Some(Request {
            title,
            showtime,
            quantity,
            mobile,
        })))
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_catalog::ShowingSpec;
    use std::io::Cursor;

    fn service() -> BookingService {
        let mut service = BookingService::new();
        service
            .add_movie("Titanic", "Documentary", vec![ShowingSpec::new("12:00 PM", 3)])
            .unwrap();
        service
    }

    fn run(service: &mut BookingService, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(Cursor::new(script.as_bytes()), &mut output).run(service).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_book_view_cancel_session() {
        let mut service = service();
        let output = run(
            &mut service,
            "2\ntitanic\n12:00 PM\n2\n1234567890\n\
             4\n1234567890\n\
             3\nTitanic\n12:00 PM\n1\n1234567890\n\
             1\n5\n",
        );

        assert!(output.contains("Tickets booked for Titanic - 12:00 PM. Seat number(s): 1, 2"));
        assert!(output.contains("Titanic - 12:00 PM: Seat number(s): 1, 2"));
        assert!(output.contains("Tickets canceled for Titanic - 12:00 PM. Seat number(s): 1"));
        assert!(output.contains("  Show: 12:00 PM, Total Seats: 3, Available Seats: 2"));
        assert!(output.ends_with("Thank you for using Ticket Booking System. Goodbye!\n"));
    }

    #[test]
    fn test_rejections_are_reported() {
        let mut service = service();
        let output = run(
            &mut service,
            "2\nTitanic\n12:00 PM\nfour\n1234567890\n\
             2\nTitanic\n12:00 PM\n1\n12345\n\
             2\nTitanic\n12:00 PM\n9\n1234567890\n\
             4\n1234567890\n\
             9\n",
        );

        assert!(output.contains("Please enter a valid number of tickets."));
        assert!(output.contains("Invalid mobile number."));
        assert!(output.contains("Sorry, only 3 seat(s) available for Titanic - 12:00 PM."));
        assert!(output.contains("No tickets found for the given mobile number."));
        assert!(output.contains("Invalid choice. Please try again."));
        assert_eq!(service.status()[0].showings[0].available_seats, 3);
    }

    #[test]
    fn test_stops_at_end_of_input() {
        let mut service = service();
        let output = run(&mut service, "2\nTitanic\n");
        assert!(output.ends_with("Enter a showtime to book (e.g. 12:00 PM):\n"));
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!(Choice::parse(" 1 "), Some(Choice::Schedule));
        assert_eq!(Choice::parse("5"), Some(Choice::Exit));
        assert_eq!(Choice::parse("exit"), None);
    }
}
