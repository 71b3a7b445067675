use super::dto::Notification;
use time::OffsetDateTime;

///
/// Item markup mounted on the surface: icon by kind, escaped message,
/// relative age, zero-or-one action control, a close control.
///
pub fn notification_html(notification: &Notification, now: OffsetDateTime) -> String {
    let kind = notification.kind;
    let id = &notification.id;

    let mut html = format!(
        "<div class=\"notification notification-{kind}\" data-notification-id=\"{id}\">"
    );

    html.push_str(&format!(
        "<i class=\"notification-icon fa {}\"></i>",
        kind.icon_class()
    ));
    html.push_str(&format!(
        "<span class=\"notification-message\">{}</span>",
        escape_html(&notification.message)
    ));
    html.push_str(&format!(
        "<span class=\"notification-time\">{}</span>",
        relative_age(notification.created_at, now)
    ));

    if kind.has_action_control() {
        if let Some(action) = &notification.action {
            html.push_str(&format!(
                "<button class=\"notification-action\" data-action=\"{}\">Review</button>",
                action.kind
            ));
        }
    }

    html.push_str(&format!(
        "<button class=\"notification-close\" data-notification-id=\"{id}\" \
         aria-label=\"Dismiss\">&times;</button>"
    ));
    html.push_str("</div>");

    html
}

///
/// Relative-age label. Missing timestamps and timestamps from the
/// future both render "Just now".
///
pub fn relative_age(created_at: Option<OffsetDateTime>, now: OffsetDateTime) -> String {
    let Some(created_at) = created_at else {
        return "Just now".to_string();
    };

    let elapsed = now - created_at;
    if elapsed < time::Duration::minutes(1) {
        "Just now".to_string()
    } else if elapsed < time::Duration::hours(1) {
        format!("{}m ago", elapsed.whole_minutes())
    } else if elapsed < time::Duration::days(1) {
        format!("{}h ago", elapsed.whole_hours())
    } else {
        format!("{}d ago", elapsed.whole_days())
    }
}

///
/// Message text is untrusted and must not be able to inject markup.
///
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(character),
        }
    }
    escaped
}
