use chrono::{DateTime, Utc};
use crate::fetcher::{AttendeeFetcher, LoadStatus};
use crate::page_state::PageStateController;
use crate::passin::model::Attendee;
use crate::relative_time::from_now;
use super::escape;
use super::table::{checkbox, icon_button, table, table_cell, table_cell_spanning, table_header, table_row};

pub const NO_CHECK_IN: &'static str = "Não fez check-in";

fn search_box(controller: &PageStateController) -> String {
    format!(
        r#"<form class="search" method="get"><input type="hidden" name="page" value="1"><input type="search" name="search" value="{}" placeholder="Buscar participante..."></form>"#,
        escape(&controller.state().search)
    )
}

fn status_banner(status: &LoadStatus) -> String {
    match status {
        LoadStatus::Idle | LoadStatus::Loaded => String::new(),
        LoadStatus::Loading => r#"<p class="status">Carregando...</p>"#.to_owned(),
        LoadStatus::Failed(message) => format!(
            r#"<p class="status error">Não foi possível carregar os participantes: {}</p>"#,
            escape(message)
        )
    }
}

fn header_row() -> String {
    [
        table_header(&checkbox(), Some(48)),
        table_header("Código", None),
        table_header("Participante", None),
        table_header("Data de inscrição", None),
        table_header("Data do check-in", None),
        table_header("", Some(64)),
    ].concat()
}

fn attendee_row(attendee: &Attendee, now: DateTime<Utc>) -> String {
    let check_in = match attendee.check_in_at {
        Some(check_in_at) => escape(&from_now(now, check_in_at)),
        None => format!(r#"<span class="placeholder">{}</span>"#, NO_CHECK_IN)
    };
    table_row(&[
        table_cell(&checkbox()),
        table_cell(&escape(&attendee.id)),
        table_cell(&format!(
            r#"<div class="attendee"><span class="name">{}</span><span class="email">{}</span></div>"#,
            escape(&attendee.name), escape(&attendee.email)
        )),
        table_cell(&escape(&from_now(now, attendee.created_at))),
        table_cell(&check_in),
        table_cell(&icon_button("…", "Mais opções", None, false)),
    ])
}

fn page_link<F: FnOnce(&mut PageStateController)>(controller: &PageStateController, query: &str, navigate: F) -> String {
    let mut target = controller.clone();
    navigate(&mut target);
    format!("?{}", target.location(query))
}

fn footer_cells(controller: &PageStateController, shown: usize, total: u64, query: &str) -> String {
    let navigation = controller.navigation(total);
    let first = page_link(controller, query, |target| target.first_page());
    let previous = page_link(controller, query, |target| target.previous_page());
    let next = page_link(controller, query, |target| target.next_page());
    let last = page_link(controller, query, |target| target.last_page(navigation.total_pages));

    let controls = format!(
        r#"<div class="pagination"><span>Página {page} de {total_pages}</span><div class="controls">{first}{previous}{next}{last}</div></div>"#,
        page = navigation.page,
        total_pages = navigation.total_pages,
        first = icon_button("«", "Primeira página", Some(first.as_str()), navigation.first_disabled()),
        previous = icon_button("‹", "Página anterior", Some(previous.as_str()), navigation.previous_disabled()),
        next = icon_button("›", "Próxima página", Some(next.as_str()), navigation.next_disabled()),
        last = icon_button("»", "Última página", Some(last.as_str()), navigation.last_disabled())
    );
    [
        table_cell_spanning(&format!("Mostrando {} de {} itens", shown, total), 3, None),
        table_cell_spanning(&controls, 3, Some("text-right")),
    ].concat()
}

/// Render the list for the current state and the fetcher's latest outcome
///
/// `query` is the current query string, parameters other than `search` and `page` are kept in the navigation links.
pub fn render_attendee_list(controller: &PageStateController, fetcher: &AttendeeFetcher, query: &str, now: DateTime<Utc>) -> String {
    let result_set = fetcher.result_set();
    let rows: String = result_set.attendees.iter()
        .map(|attendee| attendee_row(attendee, now))
        .collect();

    format!(
        r#"<main class="attendee-list"><section class="toolbar"><h1>Participantes</h1>{search}</section>{status}{table}</main>"#,
        search = search_box(controller),
        status = status_banner(fetcher.status()),
        table = table(&header_row(), &rows, &footer_cells(controller, result_set.attendees.len(), result_set.total, query))
    )
}
