//! Administrator dashboard aggregation

mod service;

#[cfg(test)]
mod tests;

pub use service::AdminService;
