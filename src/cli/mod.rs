use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use crate::application::ReservationService;
use crate::domain::format_cents;
use crate::io::load_seed;

/// Locanda - hotel reservation desk
#[derive(Parser)]
#[command(name = "locanda")]
#[command(about = "An in-memory hotel reservation desk")]
#[command(version)]
pub struct Cli {
    /// JSON seed file with rooms and payment methods (built-in seed if omitted)
    #[arg(short, long)]
    pub seed: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let service = match &self.seed {
            Some(path) => {
                let (rooms, fees) = load_seed(path)?;
                if self.verbose {
                    eprintln!(
                        "[seed] Loaded {} room(s) and {} payment method(s) from {}",
                        rooms.len(),
                        fees.len(),
                        path.display()
                    );
                }
                ReservationService::new(rooms, fees)
            }
            None => ReservationService::with_standard_seed(),
        };

        run_menu(service)
    }
}

fn run_menu(mut service: ReservationService) -> Result<()> {
    loop {
        println!();
        println!("===== HOTEL RESERVATION DESK =====");
        println!("  [1] Search available rooms");
        println!("  [2] Make a reservation");
        println!("  [3] View booking details");
        println!("  [4] Process payment");
        println!("  [5] Exit");

        // EOF on stdin ends the session like an explicit exit.
        let Some(line) = prompt("Choose an option")? else {
            println!("Exiting.");
            return Ok(());
        };

        match line.trim().parse::<u32>() {
            Ok(1) => run_search(&service)?,
            Ok(2) => run_reserve(&mut service)?,
            Ok(3) => run_view(&service)?,
            Ok(4) => run_payment(&service)?,
            Ok(5) => {
                println!("Exiting.");
                return Ok(());
            }
            _ => println!("Invalid option! Please try again."),
        }
    }
}

fn run_search(service: &ReservationService) -> Result<()> {
    let Some(category) = prompt("Enter room category (e.g. Single/Double/Suite)")? else {
        return Ok(());
    };

    let rooms = service.search_rooms(category.trim());
    if rooms.is_empty() {
        println!("No available rooms in the {} category.", category.trim());
    } else {
        println!("Available rooms in the {} category:", category.trim());
        for room in rooms {
            println!("  {}", room);
        }
    }
    Ok(())
}

fn run_reserve(service: &mut ReservationService) -> Result<()> {
    let Some(room_number) = prompt_u32("Enter room number to book")? else {
        return Ok(());
    };
    let Some(guest_name) = prompt("Enter guest name")? else {
        return Ok(());
    };
    let Some(check_in) = prompt_date("Enter check-in date (YYYY-MM-DD)")? else {
        return Ok(());
    };
    let Some(check_out) = prompt_date("Enter check-out date (YYYY-MM-DD)")? else {
        return Ok(());
    };

    match service.make_reservation(room_number, guest_name.trim(), check_in, check_out) {
        Ok(booking) => println!(
            "Reservation made successfully! Booking ID: {}",
            booking.id
        ),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn run_view(service: &ReservationService) -> Result<()> {
    let Some(id) = prompt_u32("Enter booking ID to view")? else {
        return Ok(());
    };

    match service.booking_details(id) {
        Ok(booking) => {
            println!("Booking ID:     {}", booking.id);
            println!(
                "Room:           Room {} ({}) - ${}",
                booking.room_number,
                booking.room_category,
                format_cents(booking.nightly_price_cents)
            );
            println!("Guest name:     {}", booking.guest_name);
            println!("Check-in date:  {}", booking.check_in);
            println!("Check-out date: {}", booking.check_out);
            println!("Total cost:     ${}", format_cents(booking.total_cost_cents));
        }
        Err(err) => println!("{}", err),
    }
    Ok(())
}

fn run_payment(service: &ReservationService) -> Result<()> {
    let Some(id) = prompt_u32("Enter booking ID to process payment")? else {
        return Ok(());
    };
    let Some(method) = prompt("Enter payment method (Cash/Credit Card/Debit Card)")? else {
        return Ok(());
    };

    // The fee table is case-sensitive, so the method goes through verbatim.
    match service.process_payment(id, method.trim()) {
        Ok(receipt) => println!(
            "Payment processed successfully! Total amount due: ${}",
            format_cents(receipt.amount_cents)
        ),
        Err(err) => println!("{}", err),
    }
    Ok(())
}

/// Print a prompt and read one line from stdin. Returns None on EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt for a whole number; reports a bad value and returns None so the
/// menu loop just comes back around.
fn prompt_u32(label: &str) -> Result<Option<u32>> {
    let Some(line) = prompt(label)? else {
        return Ok(None);
    };
    match line.trim().parse() {
        Ok(n) => Ok(Some(n)),
        Err(_) => {
            println!("Invalid number: '{}'", line.trim());
            Ok(None)
        }
    }
}

/// Prompt for a calendar date. Parse failures are reported here and never
/// reach the reservation service.
fn prompt_date(label: &str) -> Result<Option<NaiveDate>> {
    let Some(line) = prompt(label)? else {
        return Ok(None);
    };
    match parse_date(line.trim()) {
        Ok(date) => Ok(Some(date)),
        Err(_) => {
            println!("Invalid date format! Please use YYYY-MM-DD.");
            Ok(None)
        }
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").context("Date must be in YYYY-MM-DD format")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-04").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()
        );
        assert!(parse_date("04/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("not-a-date").is_err());
    }
}
