use std::io::Write;

use word_finder::{FinderError, WordFinder, WordQuery};

#[test]
fn loads_word_list_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "listen\nsilent\nenlist\ntinsel\nlist\nsilt\n\ninlets").unwrap();

    let finder = WordFinder::load(file.path()).unwrap();
    assert_eq!(finder.len(), 7);
    assert!(finder.is_word("Tinsel"));

    let found = finder
        .find_words(&WordQuery::new("listen", "s_____"))
        .unwrap();
    assert_eq!(found.found_words, ["SILENT"]);
    assert_eq!(found.total_matches, 1);

    let found = finder.find_words(&WordQuery::new("listen", "")).unwrap();
    assert_eq!(
        found.found_words,
        ["LIST", "SILT", "ENLIST", "INLETS", "LISTEN", "SILENT", "TINSEL"]
    );
}

#[test]
fn missing_word_list_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    let err = WordFinder::load(&path).err().unwrap();
    assert!(matches!(err, FinderError::Load { .. }));
    assert!(err.to_string().contains("words.txt"));
}
