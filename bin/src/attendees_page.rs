use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use chrono::Utc;
use pass_in_attendees::fetcher::{AttendeeFetcher, LoadStatus};
use pass_in_attendees::page_state::PageStateController;
use pass_in_attendees::passin::ApiConfig;
use pass_in_attendees::view::{render_attendee_list, render_document};

use crate::errors::AttendeesPageError;

pub struct WebState {
    pub http: reqwest::Client,
    pub api: ApiConfig
}

pub async fn attendees_page(state: web::Data<WebState>, request: HttpRequest) -> Result<HttpResponse, AttendeesPageError> {
    let query = request.query_string();
    let controller = PageStateController::from_query(query);
    let mut fetcher = AttendeeFetcher::default();
    fetcher.refresh(&state.http, &state.api, controller.state()).await
        .map_err(|error| AttendeesPageError::MisconfiguredEndpoint { cause: error })?;

    let status = match fetcher.status() {
        LoadStatus::Failed(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK
    };
    let body = render_attendee_list(&controller, &fetcher, query, Utc::now());
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(render_document("Participantes", &body)))
}
