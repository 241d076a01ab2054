//! Form field validation and submission state
//!
//! Each flow owns an ordered set of named fields. A submit attempt evaluates
//! every field (no short-circuit) so one attempt reports every problem at
//! once, then either refuses (invalid) or resolves to success/failure.

pub mod booking;
pub mod consultation;
pub mod referral;

use chrono::{Datelike, NaiveDate, Weekday};

/// Validity predicate attached to a field
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Rule {
    /// Non-empty after trimming whitespace
    Required,
    /// Non-empty and shaped like an email address
    Email,
    /// Non-empty, ISO date, and not a Saturday/Sunday
    WeekdayDate,
    /// Non-empty and a member of a fixed offer list
    OneOf(&'static [&'static str]),
}

/// A named form field with its current value and error slot
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub rule: Rule,
    pub error: Option<String>,
}

impl Field {
    pub fn new(name: &'static str, label: &'static str, rule: Rule) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            rule,
            error: None,
        }
    }

    /// Evaluate the predicate against the current value
    fn check(&self) -> Option<String> {
        let value = self.value.trim();
        if value.is_empty() {
            return Some("This field is required.".to_string());
        }
        match self.rule {
            Rule::Required => None,
            Rule::Email => {
                if is_email(value) {
                    None
                } else {
                    Some("Please enter a valid email.".to_string())
                }
            }
            Rule::WeekdayDate => {
                if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
                    Some("Please give the date as YYYY-MM-DD.".to_string())
                } else if !is_weekday(value) {
                    Some("Weekdays only. Please pick a weekday.".to_string())
                } else {
                    None
                }
            }
            Rule::OneOf(options) => {
                if options.iter().any(|option| *option == value) {
                    None
                } else {
                    Some(format!(
                        "Please choose one of: {}.",
                        options.join(", ")
                    ))
                }
            }
        }
    }
}

/// Email shape check: non-whitespace @ non-whitespace . non-whitespace
pub fn is_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// True when the ISO date falls on Monday through Friday.
///
/// Calendar-date math only; no instant conversion, so the day can never
/// shift across a timezone boundary. Malformed dates are not weekdays.
pub fn is_weekday(date_str: &str) -> bool {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => !matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        Err(_) => false,
    }
}

/// Where a submit attempt currently stands
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Outcome {
    Idle,
    Invalid,
    Submitting,
    Success,
    Failure,
}

/// Ordered fields plus submission state for one form
pub struct Form {
    fields: Vec<Field>,
    outcome: Outcome,
    in_flight: bool,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            outcome: Outcome::Idle,
            in_flight: false,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Current value of a named field ("" if absent)
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.to_string();
        }
    }

    /// Evaluate every field, setting or clearing each error slot.
    ///
    /// All fields are checked even after the first failure, so a single
    /// attempt reports every invalid field. Returns true when all passed.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in &mut self.fields {
            field.error = field.check();
            if field.error.is_some() {
                all_valid = false;
            }
        }
        if !all_valid {
            self.outcome = Outcome::Invalid;
        }
        all_valid
    }

    /// Fields currently carrying an error, in declaration order
    pub fn errors(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields
            .iter()
            .filter_map(|f| f.error.as_deref().map(|e| (f.label, e)))
    }

    /// Claim the in-flight slot. Refuses while a submission is outstanding,
    /// so a second submit cannot race the first.
    pub fn begin_submit(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.outcome = Outcome::Submitting;
        true
    }

    /// Record the terminal outcome of an attempt. Success clears values and
    /// error slots; failure keeps user input for retry.
    pub fn resolve(&mut self, ok: bool) {
        self.in_flight = false;
        if ok {
            self.outcome = Outcome::Success;
            self.reset();
        } else {
            self.outcome = Outcome::Failure;
        }
    }

    /// Clear all values and error slots
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
    }
}
