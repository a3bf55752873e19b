extern crate actix_web;
extern crate pass_in_attendees;
#[macro_use]
extern crate failure_derive;
extern crate failure;
#[macro_use]
extern crate log;
extern crate env_logger;

mod attendees_page;
mod config;
mod errors;

use std::io;
use actix_web::{web, App, HttpServer};
use attendees_page::{attendees_page, WebState};
use pass_in_attendees::passin::attendees::http_client;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let settings = config::from_env();

    info!("Starting attendee list on {} for event {} of {}", settings.bind_address, settings.api.event_id, settings.api.base_url);
    let http = http_client(&settings.api)
        .map_err(|error| io::Error::new(io::ErrorKind::Other, error.to_string()))?;
    let state = web::Data::new(WebState { http, api: settings.api });

    HttpServer::new(move ||
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(attendees_page))
            .route("/attendees", web::get().to(attendees_page)))
        .bind(&settings.bind_address)?
        .run()
        .await
}
