//! Remote booking submission
//!
//! One POST, URL-encoded body, JSON ack. The endpoint either accepts the
//! booking or it does not; transport errors, non-2xx statuses and
//! unparseable bodies all collapse into the same failed outcome, which the
//! flow reports with a single generic notice.

use serde::Deserialize;

/// Production endpoint; override with --endpoint or the settings file
pub const DEFAULT_ENDPOINT: &str = "https://forms.brightpath-tutoring.com/api/bookings";

/// Field values posted for one booking
pub struct BookingRequest<'a> {
    pub name: &'a str,
    pub student: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub day: &'a str,
    pub slot: &'a str,
}

impl BookingRequest<'_> {
    fn pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("name", self.name),
            ("student", self.student),
            ("email", self.email),
            ("subject", self.subject),
            ("day", self.day),
            ("slot", self.slot),
        ]
    }
}

/// Terminal result of a submission attempt
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SubmitOutcome {
    Accepted,
    Failed,
}

/// Seam between the booking flow and the wire, so flows are testable
/// without a network
pub trait BookingEndpoint {
    fn submit(&self, request: &BookingRequest<'_>) -> SubmitOutcome;
}

/// Ack body; a missing status field is the sentinel failure value
#[derive(Debug, Deserialize)]
struct SubmitAck {
    #[serde(default)]
    status: String,
}

/// Blocking HTTP endpoint
pub struct HttpEndpoint {
    url: String,
    agent: ureq::Agent,
}

impl HttpEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl BookingEndpoint for HttpEndpoint {
    fn submit(&self, request: &BookingRequest<'_>) -> SubmitOutcome {
        let body = form_body(&request.pairs());

        let response = match self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/x-www-form-urlencoded")
            .send_string(&body)
        {
            Ok(response) => response,
            Err(_) => return SubmitOutcome::Failed,
        };

        match response.into_json::<SubmitAck>() {
            Ok(ack) if ack.status == "ok" => SubmitOutcome::Accepted,
            _ => SubmitOutcome::Failed,
        }
    }
}

/// URL-encode key/value pairs into a form body
fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
