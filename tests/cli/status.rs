use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_status_table() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello", "farewell": "Bye"}"#),
        ("fr.json", r#"{"greet": "Bonjour"}"#),
        ("de.json", r#"{"greet": "Hallo", "farewell": "Tschüss"}"#),
    ])?;

    let (code, stdout, _) = run(&mut test.status_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Translation status (source: en)"));
    assert!(stdout.contains("Locale"));
    assert!(stdout.contains("Complete"));
    assert!(stdout.contains("Missing"));
    assert!(stdout.contains("1 (50%)"));
    assert!(stdout.contains("2 (100%)"));
    assert!(stdout.contains("0 (0%)"));

    Ok(())
}

#[test]
fn test_status_orphan_note() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello"}"#),
        ("fr.json", r#"{"greet": "Bonjour", "extra": "Supplément"}"#),
    ])?;

    let (code, stdout, _) = run(&mut test.status_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("1 key(s) exist in target locales but not in en"));

    Ok(())
}

#[test]
fn test_status_warns_on_unparsable_locale() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello"}"#),
        ("fr.json", "{ broken"),
    ])?;

    let (code, stdout, stderr) = run(&mut test.status_command())?;

    // The broken locale is dropped from the table but not silently
    assert_eq!(code, 0);
    assert!(!stdout.contains("fr"));
    assert!(stderr.contains("1 locale file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_status_verbose_lists_parse_failures() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello"}"#),
        ("fr.json", "{ broken"),
    ])?;

    let (code, _, stderr) = run(test.status_command().arg("-v"))?;

    assert_eq!(code, 0);
    assert!(stderr.contains("fr.json"));
    assert!(!stderr.contains("could not be parsed (use"));

    Ok(())
}

#[test]
fn test_status_empty_target() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello"}"#),
        ("fr.json", r#"{}"#),
    ])?;

    let (code, stdout, _) = run(&mut test.status_command())?;

    // An empty target is 0% complete, not an error
    assert_eq!(code, 0);
    assert!(stdout.contains("0 (0%)"));
    assert!(stdout.contains("1 (100%)"));

    Ok(())
}
