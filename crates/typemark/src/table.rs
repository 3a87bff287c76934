//! Type table - a sealed label-to-label mapping

use std::collections::HashMap;
use std::fmt;

use typemark_core::{Label, LabelInput, Mode, TypemarkError, TypemarkResult};

/// Key that debug introspection probes for; never fails a checked read
pub const INSPECT_KEY: &str = "inspect";

/// How reads of absent keys are treated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadCheck {
    /// Absent keys fail with `UnknownLabel`
    Checked,
    /// Absent keys read as `None`
    Plain,
}

/// Immutable mapping from each label to itself
///
/// There is no mutator: the key set is fixed at construction. [`TypeTable::set`]
/// exists only to report `FrozenWrite` to callers that attempt a write.
#[derive(Clone)]
pub struct TypeTable {
    entries: HashMap<Label, Label>,
    /// Labels in input order
    order: Vec<Label>,
    mode: Mode,
    reads: ReadCheck,
}

impl TypeTable {
    pub(crate) fn new(labels: Vec<Label>, mode: Mode, reads: ReadCheck) -> Self {
        let mut entries = HashMap::with_capacity(labels.len());
        let mut order = Vec::with_capacity(labels.len());

        for label in labels {
            if entries.insert(label.clone(), label.clone()).is_none() {
                order.push(label);
            }
        }

        TypeTable {
            entries,
            order,
            mode,
            reads,
        }
    }

    /// Read a label.
    ///
    /// With checked reads an absent key fails with `UnknownLabel`, except
    /// [`INSPECT_KEY`]. Otherwise an absent key is `Ok(None)`.
    pub fn get(&self, key: &str) -> TypemarkResult<Option<&str>> {
        match self.entries.get(key) {
            Some(value) => Ok(Some(value.as_str())),
            None if self.reads == ReadCheck::Checked && key != INSPECT_KEY => {
                Err(TypemarkError::UnknownLabel {
                    key: key.to_string(),
                })
            }
            None => Ok(None),
        }
    }

    /// Read a label, treating absence as `None` regardless of mode
    #[inline]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(Label::as_str)
    }

    /// The stored label for a key
    pub fn label(&self, key: &str) -> Option<&Label> {
        self.entries.get(key)
    }

    /// Attempt a write. Tables are frozen, so this always fails.
    pub fn set(&self, key: &str, _value: impl Into<LabelInput>) -> TypemarkResult<()> {
        Err(TypemarkError::FrozenWrite {
            key: key.to_string(),
        })
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Mode the table was created under
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn read_check(&self) -> ReadCheck {
        self.reads
    }

    /// Iterate over `(key, value)` pairs in input order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().map(|label| {
            let value = &self.entries[label];
            (label.as_str(), value.as_str())
        })
    }

    /// Iterate over labels in input order
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.order.iter()
    }

    /// Copy the entries out as owned strings
    pub fn to_map(&self) -> HashMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl PartialEq for TypeTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for TypeTable {}

impl PartialEq<HashMap<String, String>> for TypeTable {
    fn eq(&self, other: &HashMap<String, String>) -> bool {
        self.entries.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(k, v)| other.get(k.as_str()).map(String::as_str) == Some(v.as_str()))
    }
}

impl fmt::Debug for TypeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for TypeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}
