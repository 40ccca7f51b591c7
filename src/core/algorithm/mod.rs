/*!
Algorithm entries and type categories.
*/

pub mod entry;
pub mod types;

pub use entry::{AlgorithmEntry, CommandBinding, LegacyAction};
pub use types::{AlgorithmType, DefaultTypeTranslator, TypeTranslator};
