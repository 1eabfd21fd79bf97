use std::fmt::Write;

use folio_config::Portfolio;

use super::section_heading;
use crate::html::escape_html;

/// Render the contact page. Every field is optional.
#[must_use]
pub fn render_contact(portfolio: &Portfolio) -> String {
    let contact = &portfolio.contact;
    let mut out = section_heading("Let’s", "Connect");
    out.push_str(r#"<div class="columns"><div class="column">"#);

    if let Some(email) = &contact.email {
        let email = escape_html(email);
        let _ = write!(
            out,
            r#"<p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>"#
        );
    }
    if let Some(location) = &contact.location {
        let _ = write!(out, "<p><strong>Location:</strong> {}</p>", escape_html(location));
    }
    if let Some(availability) = &contact.availability {
        let _ = write!(
            out,
            "<p><strong>Availability:</strong> {}</p>",
            escape_html(availability)
        );
    }

    let mut phones = contact.phones().peekable();
    if phones.peek().is_some() {
        out.push_str("<p><strong>Phone:</strong></p>");
        for phone in phones {
            let _ = write!(out, r#"<p class="phone">{}</p>"#, escape_html(phone));
        }
    }

    out.push_str(r#"</div><div class="column">"#);
    if let Some(calendly) = &contact.calendly {
        let calendly = escape_html(calendly);
        let _ = write!(
            out,
            r#"<p><strong>Book a call:</strong> <a href="{calendly}" target="_blank" rel="noopener noreferrer">{calendly}</a></p>"#
        );
    }
    out.push_str("<p>You can also reach out via any of the social links in the sidebar.</p>");
    out.push_str("</div></div>");
    out
}
