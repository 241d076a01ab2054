//! Session booking flow
//!
//! The only form that talks to the network: valid fields are posted to the
//! booking endpoint and the ack decides between a confirmation and the
//! generic failure notice.

use super::{Field, Form, Outcome, Rule};
use crate::notify::NoticeBoard;
use crate::remote::{BookingEndpoint, BookingRequest, SubmitOutcome};

/// Session slots on offer
pub const SLOTS: &[&str] = &["4:00-5:00 pm", "5:30-6:30 pm", "7:00-8:00 pm"];

/// Surfaced in the failure notice so people can still reach us
pub const FALLBACK_CONTACT: &str = "hello@brightpath-tutoring.com";

pub struct BookingForm {
    pub form: Form,
    // Hidden trap field; humans never see it, bots fill it
    honeypot: String,
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Field::new("name", "Your name", Rule::Required),
                Field::new("student", "Student name", Rule::Required),
                Field::new("email", "Email", Rule::Email),
                Field::new("subject", "Subject", Rule::Required),
                Field::new("day", "Day", Rule::WeekdayDate),
                Field::new("slot", "Time slot", Rule::OneOf(SLOTS)),
            ]),
            honeypot: String::new(),
        }
    }

    pub fn set_honeypot(&mut self, value: &str) {
        self.honeypot = value.to_string();
    }

    /// Run one submit attempt.
    ///
    /// Populated honeypot: drop the attempt silently, no notice, no call,
    /// no reset. Invalid fields: no network call. Otherwise one POST; the
    /// confirmation clears the form, the failure notice keeps user input
    /// for retry.
    pub fn submit<E: BookingEndpoint>(
        &mut self,
        endpoint: &E,
        board: &mut NoticeBoard,
        fallback_contact: &str,
    ) -> Outcome {
        if !self.honeypot.trim().is_empty() {
            return self.form.outcome();
        }

        if !self.form.validate_all() {
            return Outcome::Invalid;
        }

        if !self.form.begin_submit() {
            return self.form.outcome();
        }

        let outcome = {
            let request = BookingRequest {
                name: self.form.value("name"),
                student: self.form.value("student"),
                email: self.form.value("email"),
                subject: self.form.value("subject"),
                day: self.form.value("day"),
                slot: self.form.value("slot"),
            };
            endpoint.submit(&request)
        };

        // Captured before resolve: success wipes the fields
        let email = self.form.value("email").to_string();
        let day = self.form.value("day").to_string();
        let slot = self.form.value("slot").to_string();

        match outcome {
            SubmitOutcome::Accepted => {
                self.form.resolve(true);
                board.post(format!(
                    "Booked: {} at {}. Confirmation sent to {}.",
                    day, slot, email
                ));
            }
            SubmitOutcome::Failed => {
                self.form.resolve(false);
                board.post(format!(
                    "Something went wrong sending your booking. Please email {}.",
                    fallback_contact
                ));
            }
        }

        self.form.outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct MockEndpoint {
        outcome: SubmitOutcome,
        calls: Cell<usize>,
    }

    impl MockEndpoint {
        fn new(outcome: SubmitOutcome) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
            }
        }
    }

    impl BookingEndpoint for MockEndpoint {
        fn submit(&self, _request: &BookingRequest<'_>) -> SubmitOutcome {
            self.calls.set(self.calls.get() + 1);
            self.outcome
        }
    }

    fn filled_form() -> BookingForm {
        let mut booking = BookingForm::new();
        booking.form.set_value("name", "Ada Lovelace");
        booking.form.set_value("student", "Byron");
        booking.form.set_value("email", "ada@lovelace.org");
        booking.form.set_value("subject", "Mathematics");
        booking.form.set_value("day", "2024-06-10");
        booking.form.set_value("slot", "5:30-6:30 pm");
        booking
    }

    #[test]
    fn accepted_booking_notifies_and_clears() {
        let mut booking = filled_form();
        let endpoint = MockEndpoint::new(SubmitOutcome::Accepted);
        let mut board = NoticeBoard::new();

        let outcome = booking.submit(&endpoint, &mut board, FALLBACK_CONTACT);

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(endpoint.calls.get(), 1);
        let notice = board.texts().next().unwrap().to_string();
        assert!(notice.contains("2024-06-10"));
        assert!(notice.contains("5:30-6:30 pm"));
        assert_eq!(booking.form.value("name"), "");
        assert_eq!(booking.form.value("day"), "");
    }

    #[test]
    fn failed_booking_notifies_fallback_and_retains_input() {
        let mut booking = filled_form();
        let endpoint = MockEndpoint::new(SubmitOutcome::Failed);
        let mut board = NoticeBoard::new();

        let outcome = booking.submit(&endpoint, &mut board, FALLBACK_CONTACT);

        assert_eq!(outcome, Outcome::Failure);
        let notice = board.texts().next().unwrap();
        assert!(notice.contains(FALLBACK_CONTACT));
        assert_eq!(booking.form.value("name"), "Ada Lovelace");
        assert_eq!(booking.form.value("slot"), "5:30-6:30 pm");
    }

    #[test]
    fn invalid_fields_never_reach_the_network() {
        let mut booking = filled_form();
        booking.form.set_value("email", "not-an-email");
        booking.form.set_value("day", "2024-06-08"); // Saturday
        let endpoint = MockEndpoint::new(SubmitOutcome::Accepted);
        let mut board = NoticeBoard::new();

        let outcome = booking.submit(&endpoint, &mut board, FALLBACK_CONTACT);

        assert_eq!(outcome, Outcome::Invalid);
        assert_eq!(endpoint.calls.get(), 0);
        assert!(board.is_empty());
        assert_eq!(booking.form.errors().count(), 2);
    }

    #[test]
    fn unlisted_slot_is_invalid() {
        let mut booking = filled_form();
        booking.form.set_value("slot", "9:00-10:00 pm");
        let endpoint = MockEndpoint::new(SubmitOutcome::Accepted);
        let mut board = NoticeBoard::new();

        assert_eq!(
            booking.submit(&endpoint, &mut board, FALLBACK_CONTACT),
            Outcome::Invalid
        );
        assert_eq!(endpoint.calls.get(), 0);
    }

    #[test]
    fn populated_honeypot_drops_the_attempt_silently() {
        let mut booking = filled_form();
        booking.set_honeypot("https://spam.example");
        let endpoint = MockEndpoint::new(SubmitOutcome::Accepted);
        let mut board = NoticeBoard::new();

        let outcome = booking.submit(&endpoint, &mut board, FALLBACK_CONTACT);

        assert_eq!(outcome, Outcome::Idle);
        assert_eq!(endpoint.calls.get(), 0);
        assert!(board.is_empty());
        assert_eq!(booking.form.value("name"), "Ada Lovelace");
    }

    #[test]
    fn in_flight_submission_blocks_a_second_attempt() {
        let mut booking = filled_form();
        let endpoint = MockEndpoint::new(SubmitOutcome::Accepted);
        let mut board = NoticeBoard::new();

        assert!(booking.form.begin_submit());
        let outcome = booking.submit(&endpoint, &mut board, FALLBACK_CONTACT);

        assert_eq!(outcome, Outcome::Submitting);
        assert_eq!(endpoint.calls.get(), 0);
        assert!(board.is_empty());
    }
}
