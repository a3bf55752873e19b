use failure::Error;

#[derive(Debug, Fail)]
pub enum PassInError {
    #[fail(display = "error while loading attendees for event {} at page index {}", event_id, page_index)]
    AttendeesLoadError {
        event_id: String,
        page_index: u32,
        #[cause] cause: Error
    },
    #[fail(display = "invalid attendees endpoint {}", url)]
    InvalidEndpoint {
        url: String,
        #[cause] cause: Error
    }
}
