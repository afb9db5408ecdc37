use crate::index::{KeywordIndex, Occurrence};

/// Default result bound for union queries.
pub const TOP_K: usize = 5;

/// Answers "kw1 or kw2": up to `k` documents containing either keyword, in
/// descending order of occurrence frequency. A document appears at most once;
/// frequency ties are broken in favor of `kw1`. Returns `None` when neither
/// keyword is in the index at all.
pub fn top_k(index: &KeywordIndex, kw1: &str, kw2: &str, k: usize) -> Option<Vec<String>> {
    let list1 = index.get(kw1);
    let list2 = index.get(kw2);
    if list1.is_none() && list2.is_none() {
        return None;
    }
    // A keyword missing from the index contributes an empty list.
    let list1 = list1.map_or(&[] as &[Occurrence], Vec::as_slice);
    let list2 = list2.map_or(&[] as &[Occurrence], Vec::as_slice);

    let mut results: Vec<String> = Vec::with_capacity(k.min(list1.len() + list2.len()));
    let mut i = 0;
    let mut j = 0;
    while results.len() < k && (i < list1.len() || j < list2.len()) {
        // An exhausted cursor loses every comparison, so the other list
        // drains on its own.
        let f1 = list1.get(i).map_or(i64::MIN, |occ| i64::from(occ.frequency));
        let f2 = list2.get(j).map_or(i64::MIN, |occ| i64::from(occ.frequency));
        let (occ, cursor) = if f1 >= f2 {
            (&list1[i], &mut i)
        } else {
            (&list2[j], &mut j)
        };
        if !results.iter().any(|doc| doc == &occ.document) {
            results.push(occ.document.clone());
        }
        *cursor += 1;
    }
    Some(results)
}
