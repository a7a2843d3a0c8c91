//! Price Cascade Resolution
//!
//! Resolving the price applicable to an enrollment walks a fixed
//! specificity cascade from the most to the least specific rule scope.
//! A missing rule is a business condition ("pricing not configured"),
//! never a fault and never a fabricated zero-price default.

mod cascade;
mod resolver;

pub use cascade::{RuleScope, cascade};
pub use resolver::{resolve, resolve_for_enrollment};
