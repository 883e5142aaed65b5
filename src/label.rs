//! Williams–Beer style labels for atoms.
//!
//! A label is derived from the atom's nested tuple rendering: separators are
//! removed, parentheses become braces, and the outermost pair is dropped.
//! `((2,), (1, 3))` becomes `{2}{13}`.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use crate::error::LatticeError;

/// Convert a nested tuple rendering into its compact label.
pub fn pretty_label(raw: &str) -> String {
    let braced: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .map(|c| match c {
            '(' => '{',
            ')' => '}',
            other => other,
        })
        .collect();

    let mut chars = braced.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}

/// Map each item to its label, failing if two items share one.
pub fn pretty_labels_map<T, I>(items: I) -> Result<BTreeMap<T, String>, LatticeError>
where
    T: Display + Ord,
    I: IntoIterator<Item = T>,
{
    let mut labels = BTreeMap::new();
    let mut owners: HashMap<String, String> = HashMap::new();

    for item in items {
        let raw = item.to_string();
        let label = pretty_label(&raw);
        match owners.get(&label) {
            Some(owner) if *owner != raw => {
                return Err(LatticeError::LabelCollision { label });
            }
            Some(_) => {}
            None => {
                owners.insert(label.clone(), raw);
            }
        }
        labels.insert(item, label);
    }

    Ok(labels)
}
