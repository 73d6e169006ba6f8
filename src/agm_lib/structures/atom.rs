/*!
An atom (aka. a 'variable').

Atoms are non-empty runs of uppercase ASCII letters, e.g. `A`, `P`, `RAIN`.

```rust
# use agm_lib::structures::atom::Atom;
let atom = Atom::try_from("RAIN").unwrap();
assert_eq!(atom.name(), "RAIN");

assert!(Atom::try_from("rain").is_err());
assert!(Atom::try_from("").is_err());
```

Atoms are ordered by name, and this order fixes the order of literals within a clause.
*/

use crate::types::err::{self};

/// An atom, aka. a 'variable'.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom(String);

impl Atom {
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether the character may occur in the name of an atom.
    pub fn is_atom_char(c: char) -> bool {
        c.is_ascii_uppercase()
    }
}

impl TryFrom<&str> for Atom {
    type Error = err::ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !value.is_empty() && value.chars().all(Atom::is_atom_char) {
            Ok(Atom(value.to_owned()))
        } else {
            Err(err::ParseError::InvalidAtom(value.to_owned()))
        }
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
