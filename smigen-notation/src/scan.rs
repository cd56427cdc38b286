//! Scanner for SMILES/CXSMILES template strings.
//!
//! Splits a notation string into tokens while preserving every source byte,
//! so a rewrite of atom tokens leaves connectivity, branches, ring closures
//! and any CXSMILES extension block untouched.

use thiserror::Error;

/// Errors from scanning a notation string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty notation string")]
    Empty,

    #[error("unexpected character {found:?} at position {position}")]
    UnexpectedChar { position: usize, found: char },

    #[error("unterminated bracket atom starting at position {position}")]
    UnterminatedBracket { position: usize },

    #[error("ring closure %% at position {position} requires two digits")]
    BadRingClosure { position: usize },
}

/// Kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Bracket atom such as `[C@H]` or `[nH]`, including the brackets.
    BracketAtom,
    /// Organic-subset atom: B, C, N, O, P, S, F, Cl, Br, I.
    OrganicAtom,
    /// Aromatic organic atom: b, c, n, o, p, s.
    AromaticAtom,
    /// Wildcard atom `*`.
    WildcardAtom,
    /// Explicit bond: `-` `=` `#` `$` `:` `/` `\` `~`.
    Bond,
    /// Branch open `(`.
    OpenBranch,
    /// Branch close `)`.
    CloseBranch,
    /// Ring closure digit or `%nn` pair.
    RingClosure,
    /// Component separator `.`.
    Dot,
    /// CXSMILES extension block, preserved verbatim including the
    /// separating whitespace.
    Extension,
}

/// A scanned token carrying its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Whether this token represents an atom.
    pub fn is_atom(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::BracketAtom
                | TokenKind::OrganicAtom
                | TokenKind::AromaticAtom
                | TokenKind::WildcardAtom
        )
    }
}

/// Scan a notation string into tokens.
///
/// The concatenation of the returned token texts always reproduces the
/// input exactly.
pub fn scan(notation: &str) -> Result<Vec<Token>, NotationError> {
    if notation.is_empty() {
        return Err(NotationError::Empty);
    }

    let chars: Vec<char> = notation.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '[' => {
                let start = i;
                let mut j = i + 1;
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    return Err(NotationError::UnterminatedBracket { position: start });
                }
                let text: String = chars[start..=j].iter().collect();
                tokens.push(Token::new(TokenKind::BracketAtom, text));
                i = j + 1;
            }
            // Two-letter organic atoms Cl and Br
            'C' if chars.get(i + 1) == Some(&'l') => {
                tokens.push(Token::new(TokenKind::OrganicAtom, "Cl"));
                i += 2;
            }
            'B' if chars.get(i + 1) == Some(&'r') => {
                tokens.push(Token::new(TokenKind::OrganicAtom, "Br"));
                i += 2;
            }
            'B' | 'C' | 'N' | 'O' | 'P' | 'S' | 'F' | 'I' => {
                tokens.push(Token::new(TokenKind::OrganicAtom, c));
                i += 1;
            }
            'b' | 'c' | 'n' | 'o' | 'p' | 's' => {
                tokens.push(Token::new(TokenKind::AromaticAtom, c));
                i += 1;
            }
            '*' => {
                tokens.push(Token::new(TokenKind::WildcardAtom, c));
                i += 1;
            }
            '-' | '=' | '#' | '$' | ':' | '/' | '\\' | '~' => {
                tokens.push(Token::new(TokenKind::Bond, c));
                i += 1;
            }
            '(' => {
                tokens.push(Token::new(TokenKind::OpenBranch, c));
                i += 1;
            }
            ')' => {
                tokens.push(Token::new(TokenKind::CloseBranch, c));
                i += 1;
            }
            '0'..='9' => {
                tokens.push(Token::new(TokenKind::RingClosure, c));
                i += 1;
            }
            '%' => {
                if i + 2 < chars.len()
                    && chars[i + 1].is_ascii_digit()
                    && chars[i + 2].is_ascii_digit()
                {
                    let text: String = chars[i..i + 3].iter().collect();
                    tokens.push(Token::new(TokenKind::RingClosure, text));
                    i += 3;
                } else {
                    return Err(NotationError::BadRingClosure { position: i });
                }
            }
            '.' => {
                tokens.push(Token::new(TokenKind::Dot, c));
                i += 1;
            }
            ' ' | '\t' => {
                // CXSMILES extension block: whitespace then |...| to the end
                let rest: String = chars[i..].iter().collect();
                let trimmed = rest.trim_start();
                if trimmed.starts_with('|') {
                    tokens.push(Token::new(TokenKind::Extension, rest));
                    return Ok(tokens);
                }
                return Err(NotationError::UnexpectedChar {
                    position: i,
                    found: c,
                });
            }
            _ => {
                return Err(NotationError::UnexpectedChar {
                    position: i,
                    found: c,
                });
            }
        }
    }

    Ok(tokens)
}
