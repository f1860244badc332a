use crate::domain::model::{Inquiry, SelectionState, ServiceKind};

pub const DEFAULT_RECIPIENT: &str = "reston@mollysdogcare.com";
pub const DEFAULT_SUBJECT: &str = "Grooming Estimate Request";

/// Label used when the selected service key is not one we sell.
pub const UNKNOWN_SERVICE_LABEL: &str = "Not specified";

/// Lays out the inquiry lines for a selection. `quote` is the text the user
/// was last shown, so the message matches what was on screen.
pub fn compose(selection: &SelectionState, quote: &str) -> Inquiry {
    let mut lines = Vec::with_capacity(5);

    lines.push(format!("Breed: {}", selection.selected_breed()));
    lines.push(format!(
        "Service: {}",
        service_label(selection.selected_service())
    ));

    if !selection.selected_addons().is_empty() {
        lines.push(format!(
            "Add\u{2011}ons: {}",
            selection.selected_addons().join(", ")
        ));
    }

    let notes = selection.notes().trim();
    if !notes.is_empty() {
        lines.push(format!("Notes: {}", notes));
    }

    lines.push(format!("Quote: {}", quote));

    Inquiry::new(lines)
}

pub fn service_label(service_key: &str) -> &'static str {
    match ServiceKind::from_key(service_key) {
        Some(kind) => kind.label(),
        None => {
            tracing::debug!("No label for service key '{}'", service_key);
            UNKNOWN_SERVICE_LABEL
        }
    }
}

/// A pre-filled email, ready to hand to a mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoMessage {
    pub fn new(recipient: &str, subject: &str, inquiry: &Inquiry) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: inquiry.body(),
        }
    }

    pub fn to_link(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }

    /// Plain-text rendering with simple headers, for saving to disk.
    pub fn to_text(&self) -> String {
        format!(
            "To: {}\nSubject: {}\n\n{}\n",
            self.recipient, self.subject, self.body
        )
    }
}

/// URI-component encoding with the same unreserved set as JavaScript's
/// `encodeURIComponent`: `!'()*` stay as they are.
pub fn encode_component(text: &str) -> String {
    // only these five characters can produce these escapes; a literal `%` is `%25`
    urlencoding::encode(text)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}
