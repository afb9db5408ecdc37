use engine::index::{index_document, insert_last_occurrence, merge};
use engine::{KeywordIndex, Normalizer, Occurrence, SearchEngine};
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn assert_sorted(index: &KeywordIndex) {
    for (kw, occs) in index {
        assert!(
            occs.windows(2).all(|w| w[0].frequency >= w[1].frequency),
            "occurrence list for {kw:?} is not in descending order: {occs:?}"
        );
    }
}

#[test]
fn noise_and_punctuation_handling() {
    let engine = {
        let mut e = SearchEngine::new(["the", "is"]);
        e.add_document("D1", ["The", "Cat", "sat."]).unwrap();
        e
    };
    assert_eq!(
        engine.occurrences("cat"),
        Some(&[Occurrence::new("D1", 1)][..])
    );
    assert_eq!(
        engine.occurrences("sat"),
        Some(&[Occurrence::new("D1", 1)][..])
    );
    assert_eq!(engine.occurrences("the"), None);
}

#[test]
fn higher_frequency_document_ranks_first() {
    let mut engine = SearchEngine::new(Vec::<&str>::new());
    engine.add_document("D1", vec!["dog"; 3]).unwrap();
    engine.add_document("D2", vec!["dog"; 5]).unwrap();
    assert_eq!(
        engine.occurrences("dog"),
        Some(&[Occurrence::new("D2", 5), Occurrence::new("D1", 3)][..])
    );
}

#[test]
fn equal_frequencies_keep_insertion_order() {
    let mut engine = SearchEngine::new(Vec::<&str>::new());
    engine.add_document("D1", vec!["cat"; 2]).unwrap();
    engine.add_document("D2", vec!["cat"; 2]).unwrap();
    assert_eq!(
        engine.occurrences("cat"),
        Some(&[Occurrence::new("D1", 2), Occurrence::new("D2", 2)][..])
    );
}

#[test]
fn sort_invariant_holds_after_every_merge() {
    let normalizer = Normalizer::new(Vec::<&str>::new());
    let mut index = KeywordIndex::new();
    let docs: &[(&str, &[&str])] = &[
        ("D1", &["ant", "bee", "bee", "cow"]),
        ("D2", &["bee", "cow", "cow", "cow"]),
        ("D3", &["ant", "ant", "ant", "bee"]),
        ("D4", &["cow", "bee", "ant", "bee"]),
    ];
    for (doc, tokens) in docs {
        merge(&mut index, index_document(&normalizer, doc, tokens.iter()));
        assert_sorted(&index);
    }
    // Global uniqueness: no keyword lists a document twice.
    for (kw, occs) in &index {
        let mut seen = std::collections::HashSet::new();
        for occ in occs {
            assert!(seen.insert(&occ.document), "{kw:?} lists {:?} twice", occ.document);
        }
    }
}

#[test]
fn duplicate_document_is_rejected() {
    let mut engine = SearchEngine::new(Vec::<&str>::new());
    engine.add_document("D1", ["cat"]).unwrap();
    assert!(engine.add_document("D1", ["dog"]).is_err());
    assert_eq!(engine.document_count(), 1);
}

#[test]
fn top5_union_matches_worked_example() {
    let mut index = KeywordIndex::new();
    index.insert(
        "cat".into(),
        vec![Occurrence::new("D1", 5), Occurrence::new("D3", 2)],
    );
    index.insert(
        "dog".into(),
        vec![Occurrence::new("D2", 5), Occurrence::new("D1", 1)],
    );
    assert_eq!(
        engine::query::top_k(&index, "cat", "dog", engine::TOP_K),
        Some(vec!["D1".into(), "D2".into(), "D3".into()])
    );
}

#[test]
fn query_on_unknown_keywords_is_none() {
    let engine = SearchEngine::new(Vec::<&str>::new());
    assert_eq!(engine.query("zzz", "yyy"), None);
}

#[test]
fn query_never_exceeds_five_results() {
    let mut engine = SearchEngine::new(Vec::<&str>::new());
    for i in 0..8 {
        let doc = format!("D{i}");
        engine.add_document(&doc, vec!["bird"; i + 1]).unwrap();
    }
    let results = engine.query("bird", "bird").unwrap();
    assert_eq!(results.len(), 5);
    assert_eq!(results[0], "D7");
}

#[test]
fn midpoint_diagnostic_reports_probes_in_order() {
    let mut occs = vec![
        Occurrence::new("a", 10),
        Occurrence::new("b", 8),
        Occurrence::new("c", 6),
        Occurrence::new("d", 4),
        Occurrence::new("e", 2),
        Occurrence::new("f", 7),
    ];
    let mids = insert_last_occurrence(&mut occs).unwrap();
    // Probes 2 (6 < 7, left), then 0 (10 > 7, right), then 1 (8 > 7, right).
    assert_eq!(mids, vec![2, 0, 1]);
    assert_eq!(occs[2], Occurrence::new("f", 7));
}

#[test]
fn build_from_files_end_to_end() {
    let dir = tempdir().unwrap();
    let d1 = dir.path().join("d1.txt");
    let d2 = dir.path().join("d2.txt");
    fs::write(&d1, "The Cat sat. The cat ran!").unwrap();
    fs::write(&d2, "A dog, a cat; and the dog again.").unwrap();

    let docs = dir.path().join("docs.txt");
    fs::write(
        &docs,
        format!("{}\n{}\n", d1.display(), d2.display()),
    )
    .unwrap();
    let noise = dir.path().join("noise.txt");
    fs::write(&noise, "the\na\nand\n").unwrap();

    let engine = SearchEngine::build_from_files(&docs, &noise).unwrap();
    assert_eq!(engine.document_count(), 2);

    let cat = engine.occurrences("cat").unwrap();
    assert_eq!(cat.len(), 2);
    assert_eq!(cat[0], Occurrence::new(d1.display().to_string(), 2));
    assert_eq!(cat[1], Occurrence::new(d2.display().to_string(), 1));

    let results = engine.query("dog", "cat").unwrap();
    assert_eq!(
        results,
        vec![
            d2.display().to_string(),
            d1.display().to_string(),
        ]
    );
}

#[test]
fn build_fails_on_missing_document() {
    let dir = tempdir().unwrap();
    let docs = dir.path().join("docs.txt");
    fs::write(&docs, format!("{}\n", dir.path().join("ghost.txt").display())).unwrap();
    let noise = dir.path().join("noise.txt");
    fs::write(&noise, "the\n").unwrap();
    assert!(SearchEngine::build_from_files(&docs, &noise).is_err());
}

#[test]
fn rejected_tokens_are_skipped_not_fatal() {
    let normalizer = Normalizer::new(["the"]);
    let counts: HashMap<String, Occurrence> = index_document(
        &normalizer,
        "D1",
        ["the", "42", "owl?", "owl", "!!!", ""],
    );
    assert_eq!(counts.len(), 1);
    assert_eq!(counts["owl"], Occurrence::new("D1", 2));
}
