//! Literals are atoms paired with a (boolean) polarity.
//!
//! ```rust
//! # use agm_lib::structures::atom::Atom;
//! # use agm_lib::structures::literal::Literal;
//! let p = Literal::new(Atom::try_from("P").unwrap(), true);
//! let not_p = p.negate();
//!
//! assert!(!not_p.polarity());
//! assert!(p.is_complement_of(&not_p));
//! assert_eq!(not_p.to_string(), "¬P");
//! ```
//!
//! Literals are ordered by atom and then polarity, with the positive literal first.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    atom: Atom,
    polarity: bool,
}

impl Literal {
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Whether one of the two literals is the negation of the other.
    pub fn is_complement_of(&self, other: &Self) -> bool {
        self.atom == other.atom && self.polarity != other.polarity
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "¬{}", self.atom),
        }
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            if self.polarity == other.polarity {
                std::cmp::Ordering::Equal
            } else if self.polarity {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Greater
            }
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}
