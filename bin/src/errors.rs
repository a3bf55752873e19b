use actix_web::{error, http::StatusCode, HttpResponse};
use failure::Error;

#[derive(Fail, Debug)]
pub enum AttendeesPageError {
    #[fail(display = "Attendee list endpoint is misconfigured")]
    MisconfiguredEndpoint { cause: Error },
}

impl error::ResponseError for AttendeesPageError {
    fn status_code(&self) -> StatusCode {
        match *self {
            AttendeesPageError::MisconfiguredEndpoint { .. } => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        match *self {
            AttendeesPageError::MisconfiguredEndpoint { cause: ref e } => HttpResponse::build(self.status_code()).body(format!("{} : {}", self, e))
        }
    }
}
