// Domain layer: markup model and the ports the fetcher is wired through.

pub mod model;
pub mod ports;
