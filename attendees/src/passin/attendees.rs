use std::future::Future;
use reqwest::Client;
use failure::Error;
use url::Url;
use super::model::ResultSet;
use super::errors::PassInError;
use super::ApiConfig;
use crate::page_state::PageState;

/// Build the attendee list endpoint for the given state
///
/// `pageIndex` is zero based, `query` is only sent when a search is active
pub fn attendees_url(config: &ApiConfig, state: &PageState) -> Result<Url, Error> {
    let raw = format!("{base_url}/events/{event_id}/attendees", base_url = config.base_url.trim_end_matches('/'), event_id = config.event_id);
    let mut url = Url::parse(&raw)
        .map_err(|err| PassInError::InvalidEndpoint { url: raw.clone(), cause: err.into() })?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("pageIndex", &state.page_index().to_string());
        if !state.search.is_empty() {
            pairs.append_pair("query", &state.search);
        }
    }
    Ok(url)
}

/// Client shared by every attendee page request, requests give up after `config.timeout`
pub fn http_client(config: &ApiConfig) -> Result<Client, Error> {
    let client = Client::builder()
        .timeout(config.timeout)
        .build()?;
    Ok(client)
}

async fn fetch_attendees_page(client: &Client, url: Url) -> Result<ResultSet, Error> {
    let result_set = client.get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(result_set)
}

async fn fetch_result_set<F, Fut>(fetch: F, url: Url, config: &ApiConfig, state: &PageState) -> Result<ResultSet, Error>
    where F: FnOnce(Url) -> Fut,
          Fut: Future<Output = Result<ResultSet, Error>> {
    debug!("Fetching attendees from {}", url);
    fetch(url).await
        .map_err(|err| PassInError::AttendeesLoadError { event_id: config.event_id.clone(), page_index: state.page_index(), cause: err }.into())
}

/// Load the page of `state` from `url`, as built by `attendees_url`
pub async fn load_attendees(client: &Client, url: Url, config: &ApiConfig, state: &PageState) -> Result<ResultSet, Error> {
    fetch_result_set(|url| fetch_attendees_page(client, url), url, config, state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::model::Attendee;
    use chrono::{TimeZone, Utc};
    use std::cell::RefCell;

    fn config() -> ApiConfig {
        ApiConfig { base_url: "https://pass-in.test".to_owned(), event_id: "9e9bd979".to_owned(), ..ApiConfig::default() }
    }

    fn state(search: &str, page: u32) -> PageState {
        PageState { search: search.to_owned(), page }
    }

    #[test]
    fn test_attendees_url() {
        assert_eq!(attendees_url(&config(), &state("", 3)).unwrap().as_str(), "https://pass-in.test/events/9e9bd979/attendees?pageIndex=2");
        assert_eq!(attendees_url(&config(), &state("ana", 1)).unwrap().as_str(), "https://pass-in.test/events/9e9bd979/attendees?pageIndex=0&query=ana");
        assert_eq!(attendees_url(&config(), &state("ana maria&co", 1)).unwrap().as_str(), "https://pass-in.test/events/9e9bd979/attendees?pageIndex=0&query=ana+maria%26co");
    }

    #[test]
    fn test_attendees_url_ignores_trailing_slash() {
        let config = ApiConfig { base_url: "http://127.0.0.1:3333/".to_owned(), event_id: "ev".to_owned(), ..ApiConfig::default() };
        assert_eq!(attendees_url(&config, &state("", 1)).unwrap().as_str(), "http://127.0.0.1:3333/events/ev/attendees?pageIndex=0");
    }

    #[test]
    fn test_attendees_url_invalid_base() {
        let config = ApiConfig { base_url: "not a url".to_owned(), event_id: "ev".to_owned(), ..ApiConfig::default() };
        let actual = attendees_url(&config, &state("", 1));
        assert!(actual.is_err());
        assert!(matches!(actual.unwrap_err().downcast::<PassInError>(), Ok(PassInError::InvalidEndpoint { .. })));
    }

    #[tokio::test]
    async fn test_fetch_result_set() {
        let requested = RefCell::new(None);
        let fetch = |url: Url| {
            *requested.borrow_mut() = Some(url.to_string());
            async {
                Ok::<ResultSet, failure::Error>(ResultSet {
                    attendees: vec![Attendee {
                        id: "a1".to_owned(),
                        name: "Ana".to_owned(),
                        email: "ana@mail.com".to_owned(),
                        created_at: Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap(),
                        check_in_at: None,
                    }],
                    total: 11,
                })
            }
        };

        let url = attendees_url(&config(), &state("ana", 2)).unwrap();
        let actual = fetch_result_set(fetch, url, &config(), &state("ana", 2)).await;
        assert_eq!(requested.into_inner(), Some("https://pass-in.test/events/9e9bd979/attendees?pageIndex=1&query=ana".to_owned()));
        let result_set = actual.unwrap();
        assert_eq!(result_set.total, 11);
        assert_eq!(result_set.attendees[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_fetch_result_set_error() {
        use std::io::Error;
        use std::io::ErrorKind;

        let fetch = |_url: Url| async {
            Err::<ResultSet, failure::Error>(Error::new(ErrorKind::ConnectionRefused, "Fake error").into())
        };

        let url = attendees_url(&config(), &state("", 4)).unwrap();
        let actual = fetch_result_set(fetch, url, &config(), &state("", 4)).await;
        assert!(actual.is_err());
        match actual.unwrap_err().downcast::<PassInError>().unwrap() {
            PassInError::AttendeesLoadError { event_id, page_index, cause } => {
                assert_eq!(event_id, "9e9bd979");
                assert_eq!(page_index, 3);
                assert_eq!(cause.downcast::<Error>().unwrap().kind(), ErrorKind::ConnectionRefused);
            }
            other => panic!("unexpected error {}", other)
        }
    }

    #[test]
    fn test_http_client() {
        let config = ApiConfig { timeout: std::time::Duration::from_millis(250), ..ApiConfig::default() };
        assert!(http_client(&config).is_ok());
    }
}
