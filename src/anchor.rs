//! Link-safe anchors derived from technique names.

use crate::cookbook::Catalog;
use crate::errors::CookbookError;
use std::collections::HashMap;

/// Normalize a name into an anchor: lower-cased, non-alphanumeric
/// characters dropped, words joined by a single `separator`.
///
/// `"Replace Temp with Query"` becomes `replace-temp-with-query`.
pub fn anchor_for(name: &str, separator: char) -> String {
    let mut anchor = String::with_capacity(name.len());
    for word in name.split_whitespace() {
        let word: String = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        if word.is_empty() {
            continue;
        }
        if !anchor.is_empty() {
            anchor.push(separator);
        }
        anchor.push_str(&word);
    }
    anchor
}

/// Compute the anchor of every entry, in catalog order.
///
/// Fails if two entries normalize to the same anchor instead of letting
/// the second silently shadow the first link target.
pub fn catalog_anchors(catalog: &Catalog, separator: char) -> Result<Vec<String>, CookbookError> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(catalog.len());
    let mut anchors = Vec::with_capacity(catalog.len());

    for entry in catalog.all() {
        let anchor = anchor_for(entry.name(), separator);
        if let Some(first) = seen.insert(anchor.clone(), entry.name()) {
            return Err(CookbookError::AnchorCollision {
                anchor,
                first: first.to_string(),
                second: entry.name().to_string(),
            });
        }
        anchors.push(anchor);
    }

    Ok(anchors)
}
