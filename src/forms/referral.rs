//! Referral flow
//!
//! Purely local: three required fields, no network round trip.

use super::{Field, Form, Outcome, Rule};
use crate::notify::NoticeBoard;

pub struct ReferralForm {
    pub form: Form,
}

impl ReferralForm {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Field::new("referrer", "Your name", Rule::Required),
                Field::new("referred", "Student you are referring", Rule::Required),
                Field::new("contact", "Contact details", Rule::Required),
            ]),
        }
    }

    pub fn submit(&mut self, board: &mut NoticeBoard) -> Outcome {
        if !self.form.validate_all() {
            return Outcome::Invalid;
        }
        self.form.resolve(true);
        board.post("Thank you! Your referral has been recorded.");
        Outcome::Success
    }
}
