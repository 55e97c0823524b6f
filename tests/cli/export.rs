use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_export_all_locales() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello, world", "farewell": "Bye"}"#),
        ("fr.json", r#"{"greet": "Bonjour"}"#),
    ])?;

    let (code, stdout, _) = run(&mut test.export_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Exported 2 keys for 1 locale"));
    assert!(stdout.contains("app_translations_all.csv"));

    let csv = test.read_file("app_translations_all.csv")?;
    assert!(csv.starts_with("key,en,fr\n"));
    // Commas in values are escaped, missing translations are empty strings
    assert!(csv.contains(r#"greet,"Hello\, world","Bonjour""#));
    assert!(csv.contains(r#"farewell,"Bye","""#));

    Ok(())
}

#[test]
fn test_export_single_locale() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello"}"#),
        ("fr.json", r#"{"greet": "Bonjour"}"#),
        ("de.json", r#"{"greet": "Hallo"}"#),
    ])?;

    let (code, _, _) = run(test.export_command().args(["--locale", "fr"]))?;

    assert_eq!(code, 0);
    let csv = test.read_file("app_translations_fr.csv")?;
    assert!(csv.starts_with("key,en,fr\n"));
    assert!(!csv.contains("de"));

    Ok(())
}

#[test]
fn test_export_warns_on_unparsable_locale() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello"}"#),
        ("fr.json", "{ broken"),
    ])?;

    let (code, _, stderr) = run(&mut test.export_command())?;

    assert_eq!(code, 0);
    assert!(stderr.contains("1 locale file(s) could not be parsed"));

    let csv = test.read_file("app_translations_all.csv")?;
    assert!(csv.starts_with("key,en\n"));

    Ok(())
}

#[test]
fn test_export_source_locale_rejected() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello"}"#),
        ("fr.json", r#"{"greet": "Bonjour"}"#),
    ])?;

    let (code, _, stderr) = run(test.export_command().args(["--locale", "en"]))?;

    assert_eq!(code, 1);
    assert!(stderr.contains("'en' is the source locale"));
    assert!(!test.root().join("app_translations_en.csv").exists());

    Ok(())
}

#[test]
fn test_export_unknown_locale_fails() -> Result<()> {
    let test = CliTest::with_locales(&[("en.json", r#"{"greet": "Hello"}"#)])?;

    let (code, _, stderr) = run(test.export_command().args(["--locale", "xx"]))?;

    assert_eq!(code, 1);
    assert!(stderr.contains("Locale 'xx' not found"));

    Ok(())
}

#[test]
fn test_export_product_prefix_from_config() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello"}"#),
        ("fr.json", r#"{"greet": "Bonjour"}"#),
    ])?;
    test.write_file(".translintrc.json", r#"{ "product": "crm" }"#)?;

    let (code, stdout, _) = run(&mut test.export_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("crm_translations_all.csv"));
    assert!(test.read_file("crm_translations_all.csv").is_ok());

    Ok(())
}

#[test]
fn test_export_out_dir() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en.json", r#"{"greet": "Hello"}"#),
        ("fr.json", r#"{"greet": "Bonjour"}"#),
    ])?;

    let (code, _, _) = run(test.export_command().args(["--out", "exports"]))?;

    assert_eq!(code, 0);
    assert!(test.root().join("exports/app_translations_all.csv").exists());

    Ok(())
}
