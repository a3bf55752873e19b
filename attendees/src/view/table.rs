//! Presentational table pieces, every `content` argument is already rendered HTML.
use super::escape;

pub fn table(head: &str, body: &str, foot: &str) -> String {
    format!(
        r#"<section class="table-frame"><table><thead><tr>{head}</tr></thead><tbody>{body}</tbody><tfoot><tr>{foot}</tr></tfoot></table></section>"#,
        head = head, body = body, foot = foot
    )
}

pub fn table_header(content: &str, width: Option<u32>) -> String {
    match width {
        Some(width) => format!(r#"<th style="width: {}px">{}</th>"#, width, content),
        None => format!("<th>{}</th>", content)
    }
}

pub fn table_row(cells: &[String]) -> String {
    format!("<tr>{}</tr>", cells.concat())
}

pub fn table_cell(content: &str) -> String {
    format!("<td>{}</td>", content)
}

pub fn table_cell_spanning(content: &str, colspan: u32, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(r#"<td class="{}" colspan="{}">{}</td>"#, escape(class), colspan, content),
        None => format!(r#"<td colspan="{}">{}</td>"#, colspan, content)
    }
}

pub fn checkbox() -> String {
    r#"<input type="checkbox">"#.to_owned()
}

/// A disabled button, or one without a target, has no link
pub fn icon_button(glyph: &str, label: &str, href: Option<&str>, disabled: bool) -> String {
    match href {
        Some(href) if !disabled => format!(
            r#"<a class="icon-button" href="{}" title="{}">{}</a>"#,
            escape(href), escape(label), escape(glyph)
        ),
        _ if disabled => format!(
            r#"<span class="icon-button" aria-disabled="true" title="{}">{}</span>"#,
            escape(label), escape(glyph)
        ),
        _ => format!(r#"<span class="icon-button" title="{}">{}</span>"#, escape(label), escape(glyph))
    }
}
