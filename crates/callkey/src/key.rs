//! Call key derivation
//!
//! A key is the positional values in order plus the named values sorted by
//! name, so `f(a=1, b=2)` and `f(b=2, a=1)` land on the same entry.

use crate::args::Args;
use crate::error::{ArgPosition, KeyError, Result};
use crate::value::KeyAtom;

/// Normalized, hashable identity of one call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallKey {
    positional: Vec<KeyAtom>,
    named: Vec<(String, KeyAtom)>,
}

impl CallKey {
    /// Build a key from an argument list
    ///
    /// Fails on the first argument that holds a list or map, checking
    /// positional arguments first, then named ones in sorted order.
    pub fn from_args(args: &Args) -> Result<Self> {
        let positional = args
            .positional_values()
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                value.freeze().map_err(|kind| KeyError::Unhashable {
                    position: ArgPosition::Positional(idx),
                    kind,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut sorted: Vec<_> = args.named_values().iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let named = sorted
            .into_iter()
            .map(|(name, value)| {
                value
                    .freeze()
                    .map(|atom| (name.clone(), atom))
                    .map_err(|kind| KeyError::Unhashable {
                        position: ArgPosition::Named(name.clone()),
                        kind,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { positional, named })
    }

    /// Number of positional values in the key
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Names of the named values, in key (sorted) order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.named.iter().map(|(name, _)| name.as_str())
    }

    /// Total number of values in the key
    pub fn arity(&self) -> usize {
        self.positional.len() + self.named.len()
    }
}

impl TryFrom<&Args> for CallKey {
    type Error = KeyError;

    fn try_from(args: &Args) -> Result<Self> {
        CallKey::from_args(args)
    }
}
