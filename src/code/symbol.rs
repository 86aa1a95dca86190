// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Signed crossing symbols.
//!
//! Every crossing of two curves (or self-crossing of one curve) has a label.
//! Traversing the crossing along one curve records the label with `+`, along
//! the other with `-`. Optionally a symbol also records whether its curve
//! passes under at the crossing.
//!
//! # Examples
//!
//! ```
//! use euler_codes::code::{Sign, Symbol};
//!
//! let s: Symbol = "12+".parse().unwrap();
//! assert_eq!(s.label(), "12");
//! assert_eq!(s.sign(), Sign::Plus);
//! assert!(s.is_partner_of(&Symbol::plain("12", Sign::Minus)));
//! assert_eq!(format!("{}", s), "12+");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::EnumIter;

/// Sign of a symbol occurrence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Serialize, Deserialize,
)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn opposite(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Sign::Plus),
            '-' => Some(Sign::Minus),
            _ => None,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// One occurrence of a crossing label in a curve word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Plain { label: String, sign: Sign },
    /// Symbol that also knows whether its curve passes under the other.
    Crossing {
        label: String,
        sign: Sign,
        under: bool,
    },
}

impl Symbol {
    pub fn plain(label: impl Into<String>, sign: Sign) -> Self {
        Symbol::Plain {
            label: label.into(),
            sign,
        }
    }

    pub fn crossing(label: impl Into<String>, sign: Sign, under: bool) -> Self {
        Symbol::Crossing {
            label: label.into(),
            sign,
            under,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Symbol::Plain { label, .. } | Symbol::Crossing { label, .. } => label,
        }
    }

    pub fn sign(&self) -> Sign {
        match self {
            Symbol::Plain { sign, .. } | Symbol::Crossing { sign, .. } => *sign,
        }
    }

    /// Under/over information, if this symbol records it.
    pub fn under(&self) -> Option<bool> {
        match self {
            Symbol::Plain { .. } => None,
            Symbol::Crossing { under, .. } => Some(*under),
        }
    }

    /// The `(label, sign)` pair identifying this occurrence.
    pub fn key(&self) -> (&str, Sign) {
        (self.label(), self.sign())
    }

    /// True if both symbols name the same occurrence, ignoring under/over data.
    pub fn same_occurrence(&self, other: &Symbol) -> bool {
        self.key() == other.key()
    }

    /// Partners share a label and have opposite signs.
    pub fn is_partner_of(&self, other: &Symbol) -> bool {
        self.label() == other.label() && self.sign() == other.sign().opposite()
    }

    pub fn with_label(&self, label: impl Into<String>) -> Self {
        match self {
            Symbol::Plain { sign, .. } => Symbol::plain(label, *sign),
            Symbol::Crossing { sign, under, .. } => Symbol::crossing(label, *sign, *under),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label(), self.sign())
    }
}

/// Error message for a symbol that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolParseError(pub &'static str);

impl FromStr for Symbol {
    type Err = SymbolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let last = chars.next_back().ok_or(SymbolParseError("Wrong symbol"))?;
        let sign = Sign::from_char(last).ok_or(SymbolParseError("Wrong sign"))?;
        let label = chars.as_str();
        if label.is_empty() || label.contains(['+', '-', ':']) {
            return Err(SymbolParseError("Wrong symbol"));
        }
        Ok(Symbol::plain(label, sign))
    }
}
