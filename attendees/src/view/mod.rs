//! HTML rendering of the attendee list.
pub mod table;
pub mod attendee_table;

pub use self::attendee_table::render_attendee_list;

/// Escape text for use in element content and double quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other)
        }
    }
    escaped
}

pub fn nav_link(label: &str, href: &str) -> String {
    format!(r#"<a class="nav-link" href="{href}">{label}</a>"#, href = escape(href), label = escape(label))
}

/// Full page around `body`, `body` is inserted as is
pub fn render_document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<header><nav>{attendees}</nav></header>
{body}
</body>
</html>
"#,
        title = escape(title),
        attendees = nav_link("Participantes", "/attendees"),
        body = body
    )
}
