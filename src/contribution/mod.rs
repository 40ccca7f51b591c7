//! Assembled menu contribution: the public menu-open and activation surface.

pub mod builder;
pub mod item;

pub use builder::ContributionBuilder;
pub use item::CryptoContribution;
