// Adapters layer: concrete implementations of the ports (http client, documents).

pub mod http;
pub mod memory;
pub mod page;

#[cfg(feature = "cli")]
pub mod browser;
