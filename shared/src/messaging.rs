//! Outbound message and share-link building
//!
//! Pure string construction. Opening the resulting `wa.me` link is the
//! host page's job; nothing here performs network I/O or confirms
//! delivery.

use crate::models::LeadEnquiry;

/// Base URL of the WhatsApp click-to-chat service
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Join the present, non-empty parts with newlines, order preserved
pub fn build_message<I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Click-to-chat link carrying a prefilled, percent-encoded message
///
/// The destination number is deployment configuration, never user input.
pub fn build_deep_link(number: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        number,
        urlencoding::encode(message)
    )
}

/// Share line for a just-revealed score
pub fn share_text(score: u32) -> String {
    format!("My V60 score is {}/1000", score)
}

/// Opening line of every outbound message
pub fn greeting(business_name: &str) -> String {
    format!("Hi {} 👋", business_name)
}

/// CTA message used before the user has revealed a score
pub fn improve_prompt(business_name: &str) -> String {
    format!("Hi {} 👋 I want to improve my V60!", business_name)
}

/// Compose the enquiry message from the lead form
///
/// Greeting, interest, and name always appear; phone, best score, and
/// note only when present. A blank name becomes "(not provided)" so the
/// line structure stays stable.
pub fn lead_message(business_name: &str, lead: &LeadEnquiry, best_score: Option<u32>) -> String {
    let name = if lead.name.is_empty() {
        "(not provided)"
    } else {
        lead.name.as_str()
    };

    build_message([
        Some(greeting(business_name)),
        Some(format!("I'm interested in: {}", lead.interest)),
        Some(format!("Name: {}", name)),
        lead.phone
            .as_deref()
            .filter(|phone| !phone.is_empty())
            .map(|phone| format!("Phone: {}", phone)),
        best_score.map(|best| format!("My latest V60 score: {}/1000", best)),
        lead.note
            .as_deref()
            .filter(|note| !note.is_empty())
            .map(|note| format!("Note: {}", note)),
    ])
}
