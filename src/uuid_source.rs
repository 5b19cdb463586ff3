use uuid::Uuid;

use crate::errors::GenerateError;

pub trait UuidSource: Send + Sync {
    fn next_uuid(&self) -> Result<Uuid, GenerateError>;
}

/// Random (version 4) UUIDs backed by the OS random number generator.
#[derive(Debug, Default)]
pub struct RandomUuidSource;

impl RandomUuidSource {
    pub fn new() -> Self {
        Self
    }
}

impl UuidSource for RandomUuidSource {
    fn next_uuid(&self) -> Result<Uuid, GenerateError> {
        Ok(Uuid::new_v4())
    }
}

#[cfg(test)]
mod tests {
    use uuid::{Variant, Version};

    use super::{RandomUuidSource, UuidSource};

    #[test]
    fn random_source_yields_version_four() {
        let uuid = RandomUuidSource::new().next_uuid().expect("uuid");
        assert_eq!(uuid.get_version(), Some(Version::Random));
        assert_eq!(uuid.get_variant(), Variant::RFC4122);
    }
}
