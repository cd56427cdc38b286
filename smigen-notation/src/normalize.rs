//! Template normalization stage.
//!
//! The active pipeline runs templates through IdentityNormalizer, which is a
//! no-op. WildcardNormalizer erases element identity so templates are not
//! atom-specific; it is wired in behind the same trait so the stage can be
//! enabled without changing the reader or formatter contracts.

use crate::scan::{scan, NotationError};

/// Pluggable normalization of a template notation string.
pub trait Normalizer: Send + Sync {
    /// Normalize one template entry.
    fn normalize(&self, notation: &str) -> Result<String, NotationError>;
}

/// No-op normalizer used by the active pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNormalizer;

impl IdentityNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for IdentityNormalizer {
    fn normalize(&self, notation: &str) -> Result<String, NotationError> {
        Ok(notation.to_string())
    }
}

/// Rewrites every atom to the wildcard atom `*`, preserving branch and ring
/// topology and any CXSMILES extension block.
///
/// TODO: replace bonds with query bonds as well, so templates are also
/// bond-order agnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct WildcardNormalizer;

impl WildcardNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl Normalizer for WildcardNormalizer {
    fn normalize(&self, notation: &str) -> Result<String, NotationError> {
        let tokens = scan(notation)?;
        let mut out = String::with_capacity(notation.len());
        for token in &tokens {
            if token.is_atom() {
                out.push('*');
            } else {
                out.push_str(&token.text);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // IdentityNormalizer Tests
    // ===========================================

    #[test]
    fn test_identity_returns_input() {
        let normalizer = IdentityNormalizer::new();
        assert_eq!(normalizer.normalize("CC(C)O").expect("normalize"), "CC(C)O");
    }

    #[test]
    fn test_identity_does_not_validate() {
        // The inert stage must pass entries through untouched, even ones the
        // scanner would reject
        let normalizer = IdentityNormalizer::new();
        assert_eq!(
            normalizer.normalize("not a smiles").expect("normalize"),
            "not a smiles"
        );
    }

    #[test]
    fn test_identity_empty() {
        let normalizer = IdentityNormalizer::new();
        assert_eq!(normalizer.normalize("").expect("normalize"), "");
    }

    // ===========================================
    // WildcardNormalizer Tests
    // ===========================================

    #[test]
    fn test_wildcard_simple_chain() {
        let normalizer = WildcardNormalizer::new();
        assert_eq!(normalizer.normalize("CCO").expect("normalize"), "***");
    }

    #[test]
    fn test_wildcard_preserves_branches() {
        let normalizer = WildcardNormalizer::new();
        assert_eq!(normalizer.normalize("CC(C)O").expect("normalize"), "**(*)*");
    }

    #[test]
    fn test_wildcard_preserves_ring_closures() {
        let normalizer = WildcardNormalizer::new();
        assert_eq!(
            normalizer.normalize("c1ccccc1").expect("normalize"),
            "*1*****1"
        );
    }

    #[test]
    fn test_wildcard_preserves_bonds() {
        // Bonds are not yet generalized; they pass through as-is
        let normalizer = WildcardNormalizer::new();
        assert_eq!(normalizer.normalize("C=C#N").expect("normalize"), "*=*#*");
    }

    #[test]
    fn test_wildcard_bracket_atom_collapsed() {
        let normalizer = WildcardNormalizer::new();
        assert_eq!(
            normalizer.normalize("[C@H](N)C").expect("normalize"),
            "*(*)*"
        );
    }

    #[test]
    fn test_wildcard_two_letter_atoms() {
        let normalizer = WildcardNormalizer::new();
        assert_eq!(normalizer.normalize("ClCBr").expect("normalize"), "***");
    }

    #[test]
    fn test_wildcard_preserves_extension_block() {
        let normalizer = WildcardNormalizer::new();
        assert_eq!(
            normalizer
                .normalize("CCO |(1.5,0,;0,0,;-1.5,0,)|")
                .expect("normalize"),
            "*** |(1.5,0,;0,0,;-1.5,0,)|"
        );
    }

    #[test]
    fn test_wildcard_atoms_stay_wildcard() {
        let normalizer = WildcardNormalizer::new();
        assert_eq!(normalizer.normalize("*1***1").expect("normalize"), "*1***1");
    }

    #[test]
    fn test_wildcard_invalid_notation() {
        let normalizer = WildcardNormalizer::new();
        let result = normalizer.normalize("not a smiles");
        assert!(result.is_err());
    }

    #[test]
    fn test_wildcard_empty_is_parse_error() {
        let normalizer = WildcardNormalizer::new();
        assert_eq!(normalizer.normalize(""), Err(NotationError::Empty));
    }

    #[test]
    fn test_wildcard_idempotent() {
        let normalizer = WildcardNormalizer::new();
        let once = normalizer.normalize("CC(C)O").expect("first");
        let twice = normalizer.normalize(&once).expect("second");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalizer_trait_object() {
        let normalizers: Vec<Box<dyn Normalizer>> = vec![
            Box::new(IdentityNormalizer::new()),
            Box::new(WildcardNormalizer::new()),
        ];
        for n in &normalizers {
            assert!(n.normalize("CCO").is_ok());
        }
    }
}
