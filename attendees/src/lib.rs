extern crate failure;
#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate serde_derive;
extern crate serde;
extern crate reqwest;
extern crate url;
extern crate chrono;
#[macro_use]
extern crate log;

pub mod passin;
pub mod page_state;
pub mod fetcher;
pub mod relative_time;
pub mod view;
