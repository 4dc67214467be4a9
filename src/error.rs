use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("table full: all {capacity} slots are occupied")]
    TableFull { capacity: usize },
    #[error("no available slot on the probe cycle of key '{key}' after {probes} probes")]
    UnboundedProbe { key: String, probes: usize },
    #[error("table capacity must be at least 1")]
    ZeroCapacity,
}

pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let full = TableError::TableFull { capacity: 11 };
        assert_eq!(full.to_string(), "table full: all 11 slots are occupied");

        let probe = TableError::UnboundedProbe {
            key: "bc".to_string(),
            probes: 10,
        };
        assert!(probe.to_string().contains("'bc'"));
    }
}
