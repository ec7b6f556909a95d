mod api_url;
mod client;
mod credentials;
pub mod domain;
pub mod dto;

pub(crate) use api_url::*;

pub use client::*;
pub use credentials::*;
