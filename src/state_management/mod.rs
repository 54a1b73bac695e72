mod config;
mod fetch_error;
mod output_api;
mod resource;

pub fn use_init_services() -> prelude::OutputApi {
    log::debug!("init_services - start");
    let output_api = output_api::use_output_api_service();
    log::debug!("init_services - finished");
    output_api
}

pub mod prelude {
    pub use super::fetch_error::FetchError;
    pub use super::output_api::{Fetcher, OutputApi};
    pub use super::resource::{OutputProperties, OutputResource};
}
