//! Administrator credential.

use super::AdminCapId;

/// Possession-based administrator credential.
///
/// Holding an `AdminCap` is the authorization proof for privileged
/// operations: they take `&AdminCap` as a parameter instead of checking a
/// role flag. The type is move-only and can only be minted by the ledger's
/// genesis bootstrap, so credentials can be handed over but never
/// duplicated.
#[derive(Debug, PartialEq, Eq)]
pub struct AdminCap {
    id: AdminCapId,
}

impl AdminCap {
    pub(crate) fn mint() -> Self {
        Self {
            id: AdminCapId::new(),
        }
    }

    /// Returns the credential identifier.
    #[must_use]
    pub const fn id(&self) -> AdminCapId {
        self.id
    }
}
