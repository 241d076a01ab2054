mod colors;
mod config;
mod forms;
mod fractal;
mod media;
mod nav;
mod notify;
mod page;
mod remote;
mod settings;
mod surface;
mod terminal;

use clap::{Parser, Subcommand};
use config::DemoConfig;
use forms::booking::{BookingForm, FALLBACK_CONTACT};
use forms::consultation::ConsultationForm;
use forms::referral::ReferralForm;
use forms::{Form, Outcome};
use notify::NoticeBoard;
use remote::{HttpEndpoint, DEFAULT_ENDPOINT};
use settings::Settings;
use std::io;

#[derive(Parser)]
#[command(name = "tutorterm")]
#[command(author = "BrightPath Tutoring")]
#[command(version = "0.2.0")]
#[command(about = "Terminal companion for a small tutoring service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive page demo: fractal canvas, menu drawer, intro clip
    Demo {
        /// Frame delay in seconds
        #[arg(short, long, default_value = "0.03")]
        time: f32,

        /// Color scheme (0=slate, 1=ember, 2=ice, 3=violet, 4=chalk)
        #[arg(short, long)]
        scheme: Option<u8>,
    },

    /// Book a tutoring session
    Book {
        /// Your name
        #[arg(long)]
        name: String,

        /// Student the session is for
        #[arg(long)]
        student: String,

        /// Email for the confirmation
        #[arg(long)]
        email: String,

        /// Subject to cover
        #[arg(long)]
        subject: String,

        /// Session day (YYYY-MM-DD, weekdays only)
        #[arg(long)]
        day: String,

        /// Time slot: "4:00-5:00 pm", "5:30-6:30 pm" or "7:00-8:00 pm"
        #[arg(long)]
        slot: String,

        /// Booking endpoint override
        #[arg(long)]
        endpoint: Option<String>,

        #[arg(long, hide = true, default_value = "")]
        company: String,
    },

    /// Refer a student
    Refer {
        /// Your name
        #[arg(long)]
        referrer: String,

        /// Student you are referring
        #[arg(long)]
        referred: String,

        /// How we reach you
        #[arg(long)]
        contact: String,
    },

    /// Schedule a free consultation
    Consult {
        /// Your name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Consultation date (YYYY-MM-DD, weekdays only)
        #[arg(long)]
        date: String,

        /// Consultation hour: "12:00 pm" through "3:00 pm"
        #[arg(long)]
        time: String,
    },
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load();

    match cli.command {
        Commands::Demo { time, scheme } => {
            let config = DemoConfig {
                time_step: time.max(0.005),
                scheme: scheme.or(settings.demo.scheme).unwrap_or(0),
            };
            page::run(config)?;
        }

        Commands::Book {
            name,
            student,
            email,
            subject,
            day,
            slot,
            endpoint,
            company,
        } => {
            let mut booking = BookingForm::new();
            booking.form.set_value("name", &name);
            booking.form.set_value("student", &student);
            booking.form.set_value("email", &email);
            booking.form.set_value("subject", &subject);
            booking.form.set_value("day", &day);
            booking.form.set_value("slot", &slot);
            booking.set_honeypot(&company);

            let url = endpoint
                .or(settings.booking.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
            let contact = settings
                .booking
                .fallback_contact
                .unwrap_or_else(|| FALLBACK_CONTACT.to_string());

            let mut board = NoticeBoard::new();
            let outcome = booking.submit(&HttpEndpoint::new(url), &mut board, &contact);
            finish(outcome, &booking.form, &board);
        }

        Commands::Refer {
            referrer,
            referred,
            contact,
        } => {
            let mut referral = ReferralForm::new();
            referral.form.set_value("referrer", &referrer);
            referral.form.set_value("referred", &referred);
            referral.form.set_value("contact", &contact);

            let mut board = NoticeBoard::new();
            let outcome = referral.submit(&mut board);
            finish(outcome, &referral.form, &board);
        }

        Commands::Consult {
            name,
            email,
            date,
            time,
        } => {
            let mut consultation = ConsultationForm::new();
            consultation.form.set_value("name", &name);
            consultation.form.set_value("email", &email);
            consultation.form.set_value("date", &date);
            consultation.form.set_value("time", &time);

            let mut board = NoticeBoard::new();
            let outcome = consultation.submit(&mut board);
            finish(outcome, &consultation.form, &board);
        }
    }

    Ok(())
}

/// Print per-field errors or the resulting notices; exit non-zero on
/// invalid input and on failed submissions
fn finish(outcome: Outcome, form: &Form, board: &NoticeBoard) {
    match outcome {
        Outcome::Invalid => {
            eprintln!("Please correct the following:");
            for (label, error) in form.errors() {
                eprintln!("  {}: {}", label, error);
            }
            std::process::exit(1);
        }
        Outcome::Failure => {
            for text in board.texts() {
                eprintln!("{}", text);
            }
            std::process::exit(1);
        }
        _ => {
            for text in board.texts() {
                println!("{}", text);
            }
        }
    }
}
