// tests/integration_tests/ranking_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use wordtop::{count_file, Entry};

#[test]
fn test_ranking_descends_with_deterministic_ties() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let table = count_file(&temp_dir.path().join("greeting.txt"))?;
    let top = table.top_n(3);

    assert_eq!(top, vec![
        Entry::new("hello", 2),
        Entry::new("world", 2),
        Entry::new("go", 1),
    ]);

    Ok(())
}

#[test]
fn test_default_top_twenty_of_alphabet() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let table = count_file(&temp_dir.path().join("alphabet.txt"))?;
    let top = table.top_n(20);

    assert_eq!(top.len(), 20, "26 letters available, 20 requested");
    let expected: Vec<Entry> = ('a'..='t').map(|c| Entry::new(&c.to_string(), 8)).collect();
    assert_eq!(top, expected, "all-equal counts rank alphabetically");

    Ok(())
}
