/*!
Algorithm type categories.

Registries tag every entry with a raw type identifier. The menu groups
entries by the translated, human-readable form of that identifier, which
is produced by a [`TypeTranslator`].
*/

use std::fmt;

/// Standard algorithm categories of the workbench
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmType {
    /// Asymmetric block ciphers (RSA, ElGamal)
    AsymmetricBlockCipher,
    /// Asymmetric hybrid ciphers
    AsymmetricHybridCipher,
    /// Symmetric block ciphers (AES, DES)
    BlockCipher,
    /// Message digests
    Hash,
    /// Message authentication codes
    Mac,
    /// Pseudo random number generators
    RandomNumberGenerator,
    /// Digital signatures
    Signature,
    /// Stream ciphers
    StreamCipher,
    /// Anything not covered above
    Misc,
}

impl AlgorithmType {
    /// All known categories
    pub const ALL: [AlgorithmType; 9] = [
        AlgorithmType::AsymmetricBlockCipher,
        AlgorithmType::AsymmetricHybridCipher,
        AlgorithmType::BlockCipher,
        AlgorithmType::Hash,
        AlgorithmType::Mac,
        AlgorithmType::RandomNumberGenerator,
        AlgorithmType::Signature,
        AlgorithmType::StreamCipher,
        AlgorithmType::Misc,
    ];

    /// Raw identifier as stored in a registry
    pub fn raw(&self) -> &'static str {
        match self {
            AlgorithmType::AsymmetricBlockCipher => "asymmetricBlockCipher",
            AlgorithmType::AsymmetricHybridCipher => "asymmetricHybridCipher",
            AlgorithmType::BlockCipher => "blockCipher",
            AlgorithmType::Hash => "hash",
            AlgorithmType::Mac => "mac",
            AlgorithmType::RandomNumberGenerator => "randomNumberGenerator",
            AlgorithmType::Signature => "signature",
            AlgorithmType::StreamCipher => "streamCipher",
            AlgorithmType::Misc => "misc",
        }
    }

    /// Display name shown in the menu
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmType::AsymmetricBlockCipher => "Asymmetric Block Ciphers",
            AlgorithmType::AsymmetricHybridCipher => "Asymmetric Hybrid Ciphers",
            AlgorithmType::BlockCipher => "Block Ciphers",
            AlgorithmType::Hash => "Hash Functions",
            AlgorithmType::Mac => "Message Authentication Codes",
            AlgorithmType::RandomNumberGenerator => "Random Number Generators",
            AlgorithmType::Signature => "Signatures",
            AlgorithmType::StreamCipher => "Stream Ciphers",
            AlgorithmType::Misc => "Miscellaneous",
        }
    }

    /// Look up a category by raw identifier (exact match)
    pub fn from_raw(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.raw() == raw)
    }
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Presentation lookup from a raw type identifier to its menu label.
///
/// Implementations must be pure: the same input always yields the same label.
pub trait TypeTranslator {
    /// Translate a raw type identifier
    fn translate(&self, raw_type: &str) -> String;
}

impl<F> TypeTranslator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, raw_type: &str) -> String {
        self(raw_type)
    }
}

/// Translator for the built-in categories; unknown identifiers pass through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTypeTranslator;

impl TypeTranslator for DefaultTypeTranslator {
    fn translate(&self, raw_type: &str) -> String {
        match AlgorithmType::from_raw(raw_type) {
            Some(known) => known.name().to_string(),
            None => raw_type.to_string(),
        }
    }
}
