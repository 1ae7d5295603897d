//! # citybrain_core
//!
//! Core domain logic for CityBrain.

pub mod chat_log;
pub mod dispatch;
pub mod insights;
pub mod migrate;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
