use fuzztrie::prelude::*;
use std::collections::HashSet;

#[test]
fn test_single_edit_matching() {
    let dfa = ByteAutomaton::from_pattern("hello", 1);

    assert!(dfa.matches("hell"), "one deletion");
    assert!(dfa.matches("hellp"), "one substitution");
    assert!(dfa.matches("helloo"), "one insertion");
    assert!(dfa.matches("hello"), "exact");
    assert!(!dfa.matches("hall"), "two edits away");
    assert!(!dfa.matches("help me"), "far away");
}

#[test]
fn test_zero_distance_is_exact_match() {
    let dfa = ByteAutomaton::from_pattern("hello", 0);
    assert!(dfa.matches("hello"));
    assert!(!dfa.matches("hell"));
    assert!(!dfa.matches("helloo"));
}

#[test]
fn test_retrieval_scenarios() {
    let index: ByteIndex<&str> = ByteIndex::from_pairs(vec![
        ("hello", "world"),
        ("hall", "vestibule"),
    ]);

    let hell: HashSet<&str> = index.retrieve("hell", 1).collect();
    assert_eq!(hell, HashSet::from(["world", "vestibule"]));

    let hall: HashSet<&str> = index.retrieve("hall", 1).collect();
    assert_eq!(hall, HashSet::from(["vestibule"]));

    assert_eq!(index.retrieve_list("hello", 0), vec!["world"]);
}

#[test]
fn test_retrieval_against_reference_distance() {
    let words = [
        "bat", "cat", "cart", "card", "care", "cast", "chat", "coat", "cost", "scat",
    ];
    let index: ByteIndex<String> =
        ByteIndex::from_pairs(words.iter().map(|w| (*w, w.to_string())));

    for max_distance in 0..3 {
        let found: HashSet<String> = index.retrieve("cat", max_distance).collect();
        let expected: HashSet<String> = words
            .iter()
            .filter(|w| levenshtein_distance("cat", w) <= max_distance)
            .map(|w| w.to_string())
            .collect();
        assert_eq!(found, expected, "max_distance = {max_distance}");
    }
}

#[test]
fn test_large_distance_returns_everything() {
    let words = ["foo", "bar", "baz", "qux", "quo"];
    let index: ByteIndex<String> =
        ByteIndex::from_pairs(words.iter().map(|w| (*w, w.to_string())));

    let found: HashSet<String> = index.retrieve("quuo", 99).collect();
    let expected: HashSet<String> = words.iter().map(|w| w.to_string()).collect();
    assert_eq!(found, expected);
}

#[test]
fn test_unicode_char_level() {
    let dfa = CharAutomaton::from_pattern("über", 1);
    assert!(dfa.matches("uber"));
    assert!(dfa.matches("über"));
    assert!(!dfa.matches("ober "));

    let index: CharIndex<u32> = CharIndex::from_pairs(vec![("café", 1), ("carve", 2)]);
    let found: HashSet<u32> = index.retrieve("cafe", 1).collect();
    assert_eq!(found, HashSet::from([1]));
}

#[test]
fn test_byte_level_multibyte_penalty() {
    // At byte level a two-byte code point costs two edits.
    let dfa = ByteAutomaton::from_pattern("café", 1);
    assert!(!dfa.matches("cafe"));

    let dfa = ByteAutomaton::from_pattern("café", 2);
    assert!(dfa.matches("cafe"));
}

#[test]
fn test_empty_query_and_pattern() {
    let empty = ByteAutomaton::from_pattern("", 0);
    assert!(empty.matches(""));
    assert!(!empty.matches("a"));

    let loose = ByteAutomaton::from_pattern("", 2);
    assert!(loose.matches("ab"));
    assert!(!loose.matches("abc"));

    let word = ByteAutomaton::from_pattern("ab", 2);
    assert!(word.matches(""));
}

#[test]
fn test_query_much_longer_than_pattern() {
    let dfa = ByteAutomaton::from_pattern("hr", 5);
    assert!(dfa.matches("aahaara"), "distance is 5");
    assert!(!ByteAutomaton::from_pattern("hr", 4).matches("aahaara"));
}

#[test]
fn test_builder_end_to_end() {
    let dfa: ByteAutomaton = AutomatonBuilder::new()
        .pattern("builder")
        .max_distance(1)
        .build()
        .unwrap();
    assert!(dfa.matches("bulder"));

    let missing: Result<ByteAutomaton, _> = AutomatonBuilder::new().build();
    assert_eq!(missing.unwrap_err(), BuilderError::MissingPattern);
}

#[test]
fn test_debug_print_smoke() {
    let dfa = ByteAutomaton::from_pattern("ab", 1);
    let mut listing = String::new();
    dfa.debug_print(&mut listing).unwrap();

    eprintln!("{listing}");
    assert!(listing.starts_with("state 0"));
    assert!(listing.contains("->"));
}

#[test]
fn test_index_traversal_surfaces() {
    let index: ByteIndex<u32> =
        ByteIndex::from_pairs(vec![("pear", 4), ("apple", 1), ("plum", 5)]);

    let listed: Vec<(String, u32)> = index.to_list();
    let streamed: Vec<(String, u32)> = index.pairs().collect();
    assert_eq!(listed, streamed);

    let total = index.fold(0, |acc, _, value| acc + value);
    assert_eq!(total, 10);

    let mut seen = 0;
    index.for_each(|_, _| seen += 1);
    assert_eq!(seen, 3);
}

#[test]
fn test_removed_keys_are_not_retrieved() {
    let index: ByteIndex<&str> = ByteIndex::from_pairs(vec![("hello", "a"), ("hullo", "b")]);
    let pruned = index.remove("hullo");

    let found: HashSet<&str> = pruned.retrieve("hello", 1).collect();
    assert_eq!(found, HashSet::from(["a"]));

    // The original index still sees both.
    assert_eq!(index.retrieve_list("hello", 1).len(), 2);
}
