//! Structural notation handling for smigen.
//!
//! This crate provides:
//! - A scanner for SMILES/CXSMILES template strings
//! - A pluggable Normalizer trait for the (currently inert) template
//!   generalization stage

pub mod normalize;
pub mod scan;

pub use normalize::{IdentityNormalizer, Normalizer, WildcardNormalizer};
pub use scan::{scan, NotationError, Token, TokenKind};
