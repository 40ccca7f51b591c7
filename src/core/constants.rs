/*!
Constants for the algorithm menu.
*/

/// Label of the top-level cascading entry holding all type submenus
pub const DEFAULT_ROOT_LABEL: &str = "Encryption/Decryption";

/// Source identifier passed to the error sink
pub const DEFAULT_LOG_SOURCE: &str = "crypto-menu";

/// `log` target used by this crate
pub const LOG_TARGET: &str = "crypto_menu";

/// Field separators used when hashing a menu tree
pub mod fingerprint {
    /// Separates fields within a node
    pub const FIELD_SEP: u8 = 0x1f;

    /// Terminates a node
    pub const NODE_SEP: u8 = 0x1e;
}
