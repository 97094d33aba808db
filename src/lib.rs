pub mod config;
pub mod error;
pub mod fetcher;
pub mod format;
pub mod locale;
pub mod models;
pub mod presenter;
pub mod render;
pub mod requester;
pub mod revalidator;
pub mod server;
pub mod util;

#[cfg(test)]
mod test_server;
