// tests/integration_tests/counting_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use wordtop::count_file;

#[test]
fn test_counting_a_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let table = count_file(&temp_dir.path().join("greeting.txt"))?;

    assert_eq!(table.distinct(), 3, "hello, world and go are distinct");
    assert_eq!(table.count("hello"), 2);
    assert_eq!(table.count("world"), 2);
    assert_eq!(table.count("go"), 1);
    assert_eq!(table.count("missing"), 0);
    assert_eq!(
        table.total(),
        5,
        "count sum should equal the number of tokens read"
    );

    Ok(())
}

#[test]
fn test_counting_is_case_insensitive() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = super::common::create_test_file(
        temp_dir.path(),
        "cases.txt",
        "Word word WORD wOrD\n",
    )?;

    let table = count_file(&path)?;

    assert_eq!(table.distinct(), 1, "all casings fold to one word");
    assert_eq!(table.count("word"), 4);

    Ok(())
}
