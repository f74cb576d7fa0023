//! Per-field message overrides
//!
//! The source is a pipe-delimited list lined up with the field's rule list:
//!
//! ```text
//! Required message | {1,2,3}Invalid email address
//! ```
//!
//! A plain entry takes the next rule slot. An entry starting with an index set
//! `{i,j,...}` covers those (0-based) slots instead, and the plain entries that
//! follow resume after the highest index in the set. Blank entries hold their slot
//! open so the catalog message is used.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use crate::error::{ConfigError, Result};

/// One entry of a custom message source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEntry {
    message: String,
    slots: Option<BTreeSet<usize>>,
}

impl CustomEntry {
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The explicit index set, for compensation entries.
    pub fn slots(&self) -> Option<&BTreeSet<usize>> {
        self.slots.as_ref()
    }

    pub fn is_compensation(&self) -> bool {
        self.slots.is_some()
    }
}

/// Parsed custom messages, with each rule slot resolved to the entry that claims it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomMessages {
    entries: Vec<CustomEntry>,
    // slot -> index into `entries`
    slots: BTreeMap<usize, usize>,
}

impl CustomMessages {
    /// Parses a custom message source.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MalformedIndexSet`] when an index set is empty, unterminated or
    /// holds something other than non-negative integers.
    pub fn parse(source: &str) -> Result<Self> {
        let mut messages = Self::default();
        if source.trim().is_empty() {
            return Ok(messages);
        }

        let mut cursor = 0;
        for raw in source.split('|') {
            let entry = parse_entry(raw.trim())?;
            let position = messages.entries.len();

            match &entry.slots {
                Some(set) => {
                    if !entry.message.is_empty() {
                        for &slot in set {
                            messages.slots.entry(slot).or_insert(position);
                        }
                    }
                    if let Some(&highest) = set.last() {
                        cursor = cursor.max(highest + 1);
                    }
                }
                None => {
                    if !entry.message.is_empty() {
                        messages.slots.entry(cursor).or_insert(position);
                    }
                    cursor += 1;
                }
            }
            messages.entries.push(entry);
        }
        Ok(messages)
    }

    /// The override for rule slot `slot`, if any entry claims it.
    pub fn get(&self, slot: usize) -> Option<&str> {
        self.slots
            .get(&slot)
            .map(|&index| self.entries[index].message.as_str())
    }

    pub fn entries(&self) -> &[CustomEntry] {
        &self.entries
    }

    /// True when no slot is overridden.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl FromStr for CustomMessages {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_entry(raw: &str) -> Result<CustomEntry> {
    let Some(rest) = raw.strip_prefix('{') else {
        return Ok(CustomEntry {
            message: raw.to_owned(),
            slots: None,
        });
    };
    let (set, message) = rest
        .split_once('}')
        .ok_or_else(|| ConfigError::malformed_index_set(raw, "missing closing `}`"))?;

    let slots = set
        .split(',')
        .map(str::trim)
        .filter(|index| !index.is_empty())
        .map(|index| {
            index.parse::<usize>().map_err(|_| {
                ConfigError::malformed_index_set(raw, format!("`{index}` is not a rule index"))
            })
        })
        .collect::<Result<BTreeSet<usize>>>()?;
    if slots.is_empty() {
        return Err(ConfigError::malformed_index_set(raw, "index set is empty"));
    }

    Ok(CustomEntry {
        message: message.trim().to_owned(),
        slots: Some(slots),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_entries() {
        let messages = CustomMessages::parse("first | second").unwrap();
        assert_eq!(messages.get(0), Some("first"));
        assert_eq!(messages.get(1), Some("second"));
        assert_eq!(messages.get(2), None);
    }

    #[test]
    fn test_compensation_entry() {
        let messages =
            CustomMessages::parse("Required message | {1,2,3}Invalid email address").unwrap();
        assert_eq!(messages.get(0), Some("Required message"));
        for slot in 1..=3 {
            assert_eq!(messages.get(slot), Some("Invalid email address"));
        }
        assert_eq!(messages.get(4), None);
        assert!(messages.entries()[1].is_compensation());
    }

    #[test]
    fn test_plain_entries_resume_after_set() {
        let messages = CustomMessages::parse("{0,1}shared | third").unwrap();
        assert_eq!(messages.get(1), Some("shared"));
        assert_eq!(messages.get(2), Some("third"));
    }

    #[test]
    fn test_first_claim_wins() {
        let messages = CustomMessages::parse("zero | {0,1}both").unwrap();
        assert_eq!(messages.get(0), Some("zero"));
        assert_eq!(messages.get(1), Some("both"));
    }

    #[test]
    fn test_blank_entries_leave_slot_open() {
        let messages = CustomMessages::parse(" | second").unwrap();
        assert_eq!(messages.get(0), None);
        assert_eq!(messages.get(1), Some("second"));
        assert!(CustomMessages::parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_index_sets() {
        for source in ["{1,x}oops", "{}oops", "{1,2 oops", "{ , }oops"] {
            assert!(
                matches!(
                    CustomMessages::parse(source),
                    Err(ConfigError::MalformedIndexSet { .. })
                ),
                "{source} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_str() {
        let messages: CustomMessages = "{2}late".parse().unwrap();
        assert_eq!(messages.get(2), Some("late"));
        assert_eq!(messages.get(0), None);
    }
}
