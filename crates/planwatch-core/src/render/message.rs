use crate::model::message::portal_datetime;
use crate::model::Message;
use crate::notify::Notification;

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML body for an inbox message notification
///
/// Sender, send time and content; content newlines become `<br/>`.
pub fn render_message_html(message: &Message) -> String {
    let content = escape_html(&message.content).replace('\n', "<br/>");
    format!(
        "<p><strong>From: </strong>{}</p>\n\
         <p><strong>Sent at: </strong>{}</p>\n\
         <p><strong>Content:</strong></p>{}",
        escape_html(&message.sender),
        portal_datetime::format(&message.sent_at),
        content
    )
}

/// Notification for one inbox message; the subject is the message subject
pub fn message_notification(message: &Message) -> Notification {
    Notification::html(message.subject.clone(), render_message_html(message))
}
