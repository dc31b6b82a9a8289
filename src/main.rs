use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use trippay::application::booking_system::BookingSystem;
use trippay::application::payment_service::PaymentService;
use trippay::domain::payment::PaymentMethod;
use trippay::infrastructure::processors::adapters_for;
use trippay::interfaces::csv::reservation_reader::ReservationReader;
use trippay::interfaces::csv::reservation_writer::ReservationWriter;
use trippay::interfaces::json::BookingReport;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter (e.g. "debug", "trippay=trace"); takes precedence over RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Charge an amount through a payment method
    Pay {
        /// paypal, credit-card or crypto
        #[arg(long)]
        method: PaymentMethod,
        #[arg(long)]
        amount: Decimal,
        /// Card number, account e-mail or wallet address
        #[arg(long, default_value = "")]
        details: String,
    },
    /// Refund an earlier payment
    Refund {
        #[arg(long)]
        method: PaymentMethod,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        transaction_id: String,
    },
    /// Import reservation requests from CSV and print the resulting bookings
    Bookings {
        /// Input reservations CSV file
        input: PathBuf,
        /// Reservation IDs to cancel after import (e.g. RES-2)
        #[arg(long)]
        cancel: Vec<String>,
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn payment_service(method: PaymentMethod) -> PaymentService {
    let (processor, validator) = adapters_for(method);
    PaymentService::new(processor, validator)
}

fn outcome(approved: bool, label: &str) -> ExitCode {
    if approved {
        println!("{label} approved");
        ExitCode::SUCCESS
    } else {
        println!("{label} declined");
        ExitCode::FAILURE
    }
}

fn run_bookings(input: PathBuf, cancel: Vec<String>, format: Format) -> Result<()> {
    let system = BookingSystem::new();

    let file = File::open(input).into_diagnostic()?;
    let reader = ReservationReader::new(file);
    for record in reader.records() {
        let (tag, form) = match record {
            Ok(record) => record.into_parts(),
            Err(e) => {
                eprintln!("Error reading reservation: {}", e);
                continue;
            }
        };
        if let Err(e) = system.create_reservation(&tag, form) {
            eprintln!("Error creating reservation: {}", e);
        }
    }

    for id in &cancel {
        if !system.cancel_reservation(id) {
            eprintln!("Reservation {} not found", id);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Csv => {
            ReservationWriter::new(&mut out)
                .write_reservations(&system.reservations())
                .into_diagnostic()?;
            writeln!(out, "Total booking value: {}", system.total_booking_value())
                .into_diagnostic()?;
        }
        Format::Json => {
            BookingReport::snapshot(&system)
                .write_json(&mut out)
                .into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    }

    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match cli.command {
        Command::Pay {
            method,
            amount,
            details,
        } => {
            let service = payment_service(method);
            Ok(outcome(service.make_payment(amount, &details), "payment"))
        }
        Command::Refund {
            method,
            amount,
            transaction_id,
        } => {
            let service = payment_service(method);
            Ok(outcome(service.refund_payment(amount, &transaction_id), "refund"))
        }
        Command::Bookings {
            input,
            cancel,
            format,
        } => {
            run_bookings(input, cancel, format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
