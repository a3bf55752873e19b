use failure::Error;
use reqwest::Client;
use crate::page_state::PageState;
use crate::passin::ApiConfig;
use crate::passin::attendees::{attendees_url, load_attendees};
use crate::passin::model::ResultSet;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String)
}

/// Handle of one fetch, stamped with the generation it was issued at
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    pub generation: u64,
    pub state: PageState
}

/// Keeps the result set of the latest requested page.
///
/// Every request supersedes the previous ones: an outcome resolved with an
/// older ticket is dropped, whatever order the responses arrive in.
#[derive(Debug)]
pub struct AttendeeFetcher {
    generation: u64,
    result_set: ResultSet,
    status: LoadStatus
}

impl Default for AttendeeFetcher {
    fn default() -> Self {
        AttendeeFetcher { generation: 0, result_set: ResultSet::default(), status: LoadStatus::Idle }
    }
}

impl AttendeeFetcher {
    pub fn request(&mut self, state: &PageState) -> FetchTicket {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        FetchTicket { generation: self.generation, state: state.clone() }
    }

    /// Apply the outcome of `ticket`, returns false when the ticket was superseded
    pub fn resolve(&mut self, ticket: &FetchTicket, result: Result<ResultSet, Error>) -> bool {
        if ticket.generation != self.generation {
            warn!("Discarding attendees for {:?}, generation {} was superseded by {}", ticket.state, ticket.generation, self.generation);
            return false;
        }
        match result {
            Ok(result_set) => {
                self.result_set = result_set;
                self.status = LoadStatus::Loaded;
            }
            Err(error) => {
                error!("Attendees could not be loaded : {}", error);
                self.result_set = ResultSet::default();
                self.status = LoadStatus::Failed(error.to_string());
            }
        }
        true
    }

    /// Request, load and resolve the page of `state`
    ///
    /// An endpoint that cannot be built is returned as an error before any request is issued,
    /// load failures end up in `LoadStatus::Failed`.
    pub async fn refresh(&mut self, client: &Client, config: &ApiConfig, state: &PageState) -> Result<bool, Error> {
        let url = attendees_url(config, state)?;
        let ticket = self.request(state);
        let result = load_attendees(client, url, config, &ticket.state).await;
        Ok(self.resolve(&ticket, result))
    }

    pub fn result_set(&self) -> &ResultSet {
        &self.result_set
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
