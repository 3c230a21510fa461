//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type PaymentId = Id<markers::Payment>;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: uuid::Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    /// Convert to UUID
    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct User;

    /// Marker for Campaign IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Campaign;

    /// Marker for Review IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Review;

    /// Marker for DonorIntent IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DonorIntent;

    /// Marker for Payment IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Payment;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type CampaignId = Id<markers::Campaign>;
pub type ReviewId = Id<markers::Review>;
pub type DonorIntentId = Id<markers::DonorIntent>;
pub type PaymentId = Id<markers::Payment>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let payment_id: PaymentId = Id::new();
        let intent_id: DonorIntentId = Id::new();

        // These are different types, cannot be mixed
        let _p: Uuid = payment_id.into_uuid();
        let _i: Uuid = intent_id.into_uuid();
    }

    #[test]
    fn test_id_roundtrip() {
        let uuid = Uuid::new_v4();
        let id: CampaignId = Id::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
        assert_eq!(id.into_uuid(), uuid);
    }

    #[test]
    fn test_id_display() {
        let uuid = Uuid::nil();
        let id: UserId = Id::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }
}
