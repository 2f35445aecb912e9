//! Well-known role identifiers.

/// Holders may grant and revoke every role, including this one.
/// The instantiating account receives it.
pub const DEFAULT_ADMIN_ROLE: &str = "DEFAULT_ADMIN_ROLE";

/// Holders may submit inbound finalizations.
pub const ORACLE_ROLE: &str = "ORACLE_ROLE";

/// All roles the bridge recognises.
pub const ALL_ROLES: [&str; 2] = [DEFAULT_ADMIN_ROLE, ORACLE_ROLE];

/// Whether `role` is one of [`ALL_ROLES`].
pub fn is_known_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}
