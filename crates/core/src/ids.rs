//! Identifier generation.
//!
//! Ids are random UUID v4 strings. Nothing checks them against the store;
//! collisions are treated as impossible in practice.

use uuid::Uuid;

/// Produces a fresh identifier on every call.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// UUID v4 identifiers in their hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_uuid_generator_produces_valid_uuids() {
        let id = UuidGenerator.generate();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id, parsed.to_string());
    }

    #[test]
    fn test_uuid_generator_does_not_repeat() {
        let ids: HashSet<String> = (0..1_000).map(|_| UuidGenerator.generate()).collect();
        assert_eq!(ids.len(), 1_000);
    }
}
