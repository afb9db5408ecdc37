use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::normalize::Normalizer;

/// One keyword's presence in one document: the document name and how many
/// times the keyword occurs there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// The global keyword index: each keyword maps to its occurrences across all
/// indexed documents, kept in descending order of frequency at all times.
pub type KeywordIndex = HashMap<String, Vec<Occurrence>>;

/// Counts keyword occurrences for a single document. Every token is run
/// through the normalizer; rejected tokens are skipped. The result holds at
/// most one `Occurrence` per keyword, with its frequency equal to the number
/// of accepted tokens that normalized to it.
pub fn index_document<I, S>(
    normalizer: &Normalizer,
    document: &str,
    tokens: I,
) -> HashMap<String, Occurrence>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: HashMap<String, Occurrence> = HashMap::new();
    for token in tokens {
        let Some(keyword) = normalizer.normalize(token.as_ref()) else {
            continue;
        };
        counts
            .entry(keyword)
            .and_modify(|occ| occ.frequency += 1)
            .or_insert_with(|| Occurrence::new(document, 1));
    }
    counts
}

/// Folds one document's keyword counts into the global index. A keyword seen
/// for the first time starts a fresh one-element list; otherwise the new
/// occurrence is appended and moved to its sorted position. The descending
/// frequency order holds again before this function returns, keyword by
/// keyword.
pub fn merge(index: &mut KeywordIndex, counts: HashMap<String, Occurrence>) {
    for (keyword, occ) in counts {
        match index.entry(keyword) {
            Entry::Vacant(slot) => {
                slot.insert(vec![occ]);
            }
            Entry::Occupied(mut slot) => {
                let list = slot.get_mut();
                list.push(occ);
                insert_last_occurrence(list);
            }
        }
    }
}

/// Moves the last element of `occs` to its correct position, assuming
/// elements `0..n-2` are already sorted by descending frequency. The spot is
/// found by binary search; an occurrence whose frequency ties an existing run
/// goes immediately after that run, so equal-frequency documents stay in
/// insertion order.
///
/// Returns the sequence of midpoints the search examined, which exists only
/// so tests can check the search path; `None` if the list has a single
/// element and no search was needed.
pub fn insert_last_occurrence(occs: &mut Vec<Occurrence>) -> Option<Vec<usize>> {
    debug_assert!(!occs.is_empty(), "ordered insert on empty occurrence list");
    if occs.len() == 1 {
        return None;
    }

    let freq = occs[occs.len() - 1].frequency;
    let mut lo: isize = 0;
    let mut hi: isize = occs.len() as isize - 2;
    let mut midpoints = Vec::new();
    let mut target = None;

    while lo <= hi {
        let mid = ((lo + hi) / 2) as usize;
        midpoints.push(mid);
        if freq > occs[mid].frequency {
            hi = mid as isize - 1;
        } else if freq < occs[mid].frequency {
            lo = mid as isize + 1;
        } else {
            // Tie: place after the run of equal-frequency entries.
            let mut idx = mid + 1;
            while idx < occs.len() - 1 && occs[idx].frequency == freq {
                idx += 1;
            }
            target = Some(idx);
            break;
        }
    }

    let idx = target.unwrap_or(lo as usize);
    if let Some(occ) = occs.pop() {
        occs.insert(idx, occ);
    }
    Some(midpoints)
}
