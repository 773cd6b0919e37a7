//! Fork classification: walks the user's forks page by page, completes each
//! fork's branch list and reduces it to a [`types::RiskLevel`].

pub mod branch;
#[cfg(test)]
mod fake;
pub mod page;
pub mod reduce;
pub mod refs;
pub mod types;
pub mod walk;

pub use walk::classify_forks;
