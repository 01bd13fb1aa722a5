// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The three verbs relating two nouns.

use std::fmt;

/// Relation between two nouns of different types.
///
/// Only `Is` and `IsNot` are ever recorded as marks. `Maybe` is the
/// absence of a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    IsNot,
    Maybe,
    Is,
}

impl Verb {
    /// Numeric sign: negative for `IsNot`, zero for `Maybe`, positive for `Is`.
    pub fn sign(self) -> i8 {
        match self {
            Verb::IsNot => -1,
            Verb::Maybe => 0,
            Verb::Is => 1,
        }
    }

    /// Single-character grid code.
    pub fn code(self) -> char {
        match self {
            Verb::IsNot => 'X',
            Verb::Maybe => ' ',
            Verb::Is => 'O',
        }
    }

    pub fn is_positive(self) -> bool {
        self.sign() > 0
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verb::IsNot => "is not",
            Verb::Maybe => "may be",
            Verb::Is => "is",
        };
        f.write_str(name)
    }
}
