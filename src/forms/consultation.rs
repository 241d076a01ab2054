//! Consultation flow
//!
//! Local like the referral flow, but with the strictest field set:
//! consultations run on weekdays only, within fixed early-afternoon hours.

use super::{Field, Form, Outcome, Rule};
use crate::notify::NoticeBoard;

/// Consultation hours on offer (12:00-3:00 pm)
pub const HOURS: &[&str] = &["12:00 pm", "1:00 pm", "2:00 pm", "3:00 pm"];

pub struct ConsultationForm {
    pub form: Form,
}

impl ConsultationForm {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Field::new("name", "Your name", Rule::Required),
                Field::new("email", "Email", Rule::Email),
                Field::new("date", "Date", Rule::WeekdayDate),
                Field::new("time", "Time", Rule::OneOf(HOURS)),
            ]),
        }
    }

    pub fn submit(&mut self, board: &mut NoticeBoard) -> Outcome {
        if !self.form.validate_all() {
            return Outcome::Invalid;
        }

        let email = self.form.value("email").to_string();
        let date = self.form.value("date").to_string();
        let time = self.form.value("time").to_string();
        self.form.resolve(true);
        board.post(format!(
            "Consultation scheduled {} at {}. Confirmation sent to {}.",
            date, time, email
        ));
        Outcome::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ConsultationForm {
        let mut consultation = ConsultationForm::new();
        consultation.form.set_value("name", "Grace");
        consultation.form.set_value("email", "grace@hopper.navy");
        consultation.form.set_value("date", "2024-06-10");
        consultation.form.set_value("time", "1:00 pm");
        consultation
    }

    #[test]
    fn weekday_consultation_is_scheduled() {
        let mut consultation = filled_form();
        let mut board = NoticeBoard::new();

        assert_eq!(consultation.submit(&mut board), Outcome::Success);
        let notice = board.texts().next().unwrap();
        assert!(notice.contains("2024-06-10"));
        assert!(notice.contains("1:00 pm"));
        assert_eq!(consultation.form.value("name"), "");
    }

    #[test]
    fn weekend_date_is_rejected() {
        let mut consultation = filled_form();
        consultation.form.set_value("date", "2024-06-09"); // Sunday
        let mut board = NoticeBoard::new();

        assert_eq!(consultation.submit(&mut board), Outcome::Invalid);
        assert!(board.is_empty());
        let (_, error) = consultation.form.errors().next().unwrap();
        assert!(error.contains("weekday"));
    }

    #[test]
    fn off_hours_time_is_rejected() {
        let mut consultation = filled_form();
        consultation.form.set_value("time", "9:00 pm");
        let mut board = NoticeBoard::new();

        assert_eq!(consultation.submit(&mut board), Outcome::Invalid);
    }
}
