//! Entry merging: dedup by normalized key, then a deterministic sort.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::entry::{Entry, NormalizedKey};

/// Merge `old` and `new` into a deduplicated, sorted entry list.
///
/// Entries are visited old-first. The first occurrence of a key wins for both
/// its comment and its position in the dedup pass; later duplicates are
/// dropped. Every kept value is rewritten to its normalized form, then the
/// whole list is sorted with [`compare_entries`].
pub fn merge_entries(old: &[Entry], new: &[Entry]) -> Vec<Entry> {
    let mut seen: HashSet<NormalizedKey> = HashSet::new();
    let mut merged: Vec<Entry> = Vec::with_capacity(old.len() + new.len());
    let mut dropped = 0usize;

    for entry in old.iter().chain(new.iter()) {
        let key = entry.key();
        if seen.contains(&key) {
            tracing::debug!(key = %key, comment = %entry.comment, "dropping duplicate entry");
            dropped += 1;
            continue;
        }
        seen.insert(key);
        merged.push(entry.clone().normalized());
    }

    merged.sort_by(compare_entries);

    tracing::debug!(
        old = old.len(),
        new = new.len(),
        merged = merged.len(),
        dropped,
        "merged blocklist entries"
    );
    merged
}

/// Sort class of a value: numeric ids before everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortClass<'a> {
    Numeric { negative: bool, magnitude: &'a str },
    Lexical,
}

fn classify(value: &str) -> SortClass<'_> {
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return SortClass::Lexical;
    }
    let magnitude = digits.trim_start_matches('0');
    // `-0` and `0` are the same integer.
    let negative = negative && !magnitude.is_empty();
    SortClass::Numeric {
        negative,
        magnitude,
    }
}

/// Compare two non-negative decimal magnitudes without leading zeros.
fn compare_magnitude(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_numeric(a: (bool, &str), b: (bool, &str)) -> Ordering {
    match (a.0, b.0) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare_magnitude(a.1, b.1),
        (true, true) => compare_magnitude(b.1, a.1),
    }
}

/// Total order used for blocklist output.
///
/// Values that are all digits after stripping one leading `-` come first,
/// ordered by integer value (any length). All other values follow, ordered by
/// their lowercase form. Ties fall back to the raw value so the order never
/// depends on input position.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    compare_values(&a.value, &b.value)
}

/// [`compare_entries`] on bare values.
pub fn compare_values(a: &str, b: &str) -> Ordering {
    let primary = match (classify(a), classify(b)) {
        (
            SortClass::Numeric {
                negative: na,
                magnitude: ma,
            },
            SortClass::Numeric {
                negative: nb,
                magnitude: mb,
            },
        ) => compare_numeric((na, ma), (nb, mb)),
        (SortClass::Numeric { .. }, SortClass::Lexical) => Ordering::Less,
        (SortClass::Lexical, SortClass::Numeric { .. }) => Ordering::Greater,
        (SortClass::Lexical, SortClass::Lexical) => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    primary.then_with(|| a.cmp(b))
}
