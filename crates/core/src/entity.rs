//! Entity trait: identity + continuity across state changes.

use crate::error::DomainResult;
use crate::id::IntegerId;

/// Entity marker + minimal interface.
pub trait Entity: Sized {
    /// Strongly-typed entity identifier.
    type Id: IntegerId;

    /// Lowercase entity name used in errors and logs (e.g. `"product"`).
    const KIND: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Returns the same entity under a different identifier.
    ///
    /// Used by stores that allocate identifiers on insert. The identifier is
    /// validated the same way construction validates it.
    fn with_id(self, id: Self::Id) -> DomainResult<Self>;
}
