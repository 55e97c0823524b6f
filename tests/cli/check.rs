use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_check_clean_locales() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello {name}", "farewell": "Bye"}"#),
        ("fr.json", r#"{"greet": "Bonjour {name}", "farewell": "Au revoir"}"#),
    ])?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));
    assert!(stdout.contains("2 locale files"));
    assert!(stdout.contains("2 keys"));

    Ok(())
}

#[test]
fn test_check_missing_key() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello", "farewell": "Bye"}"#),
        ("fr.json", r#"{"greet": "Bonjour"}"#),
    ])?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("error: \"farewell\"  missing-key"));
    assert!(stdout.contains("missing in: fr"));
    assert!(stdout.contains("en.json"));
    assert!(stdout.contains("1 error"));

    Ok(())
}

#[test]
fn test_check_orphan_key_is_warning() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello"}"#),
        ("fr.json", r#"{"greet": "Bonjour", "extra": "Supplément"}"#),
    ])?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    // Warnings alone do not fail the run
    assert_eq!(code, 0);
    assert!(stdout.contains("warning: \"extra\"  orphan-key"));
    assert!(stdout.contains("defined in fr but not in en"));

    Ok(())
}

#[test]
fn test_check_placeholder_mismatch() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello {name}"}"#),
        ("fr.json", r#"{"greet": "Bonjour"}"#),
    ])?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("placeholder-mismatch"));
    assert!(stdout.contains("fr missing {name}"));

    Ok(())
}

#[test]
fn test_check_markup_mismatch() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"note": "<b>Bold</b> text"}"#),
        ("fr.json", r#"{"note": "Texte"}"#),
    ])?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    // markup-mismatch is a warning
    assert_eq!(code, 0);
    assert!(stdout.contains("markup-mismatch"));
    assert!(stdout.contains("source has 2 tag(s), fr has 0"));

    Ok(())
}

#[test]
fn test_check_markup_count_only() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"note": "<b>Bold</b>"}"#),
        ("fr.json", r#"{"note": "<i>Gras</i>"}"#),
    ])?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    // Same tag count, different tags: consistent by design
    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_rule_selection() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello {name}", "farewell": "Bye"}"#),
        ("fr.json", r#"{"greet": "Bonjour"}"#),
    ])?;

    let (code, stdout, _) = run(test.check_command().arg("placeholders"))?;

    assert_eq!(code, 1);
    assert!(stdout.contains("placeholder-mismatch"));
    assert!(!stdout.contains("missing-key"));

    Ok(())
}

#[test]
fn test_check_unparsable_locale() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello"}"#),
        ("fr.json", "{ broken"),
    ])?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("fr.json"));

    Ok(())
}

#[test]
fn test_check_missing_source_locale_fails() -> Result<()> {
    let test = CliTest::with_locales(&[("fr.json", r#"{"greet": "Bonjour"}"#)])?;

    let (code, _, stderr) = run(&mut test.check_command())?;

    assert_eq!(code, 1);
    assert!(stderr.contains("Source locale 'en' not found"));

    Ok(())
}

#[test]
fn test_check_source_locale_override() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("de.json", r#"{"greet": "Hallo"}"#),
        ("en.json", r#"{"greet": "Hello"}"#),
    ])?;

    let (code, stdout, _) = run(test
        .check_command()
        .args(["--source-locale", "de"]))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_config_ignore_keys() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello", "debug": {"dump": "x"}}"#),
        ("fr.json", r#"{"greet": "Bonjour"}"#),
    ])?;

    test.write_file(".translintrc.json", r#"{ "ignoreKeys": ["debug.*"] }"#)?;

    let (code, stdout, _) = run(&mut test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_locales_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/en.json", r#"{"greet": "Hello"}"#)?;
    test.write_file("i18n/fr.json", r#"{"greet": "Bonjour"}"#)?;

    let (code, stdout, _) = run(test.check_command().args(["--locales-root", "i18n"]))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("--help"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("check"));
    assert!(stdout.contains("status"));
    assert!(stdout.contains("export"));
    assert!(stdout.contains("init"));

    Ok(())
}
