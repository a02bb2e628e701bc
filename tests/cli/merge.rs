use std::fs;

use anyhow::Result;
use insta::assert_snapshot;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

fn parse(content: &str) -> Result<Value> {
    Ok(serde_json::from_str(content)?)
}

#[test]
fn test_merge_creates_bundle_and_cache() -> Result<()> {
    let test = CliTest::with_layout()?;
    test.write_file(
        "src/features/billing/fr.json",
        r#"{"title": "Facturation"}"#,
    )?;

    let output = test.merge_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @r"
    [i18n Processing]: Saving updated translations for locale: fr
    ✓ Total translation files: 1
    ✓ Unchanged files: 0
    ✓ Updated namespaces: BillingFeature
    ");
    assert_snapshot!(test.read_file("messages/fr.json")?, @r#"
    {
      "BillingFeature": {
        "title": "Facturation"
      }
    }
    "#);

    let cache = parse(&test.read_file("messages/.translation-cache.json")?)?;
    assert_eq!(
        cache["fr"]["BillingFeature"]["content"],
        json!({ "title": "Facturation" })
    );
    assert_eq!(
        cache["fr"]["BillingFeature"]["hash"]
            .as_str()
            .map(|h| h.len()),
        Some(40)
    );
    Ok(())
}

#[test]
fn test_second_run_is_a_no_op() -> Result<()> {
    let test = CliTest::with_layout()?;
    test.write_file(
        "src/features/billing/fr.json",
        r#"{"title": "Facturation"}"#,
    )?;
    test.write_file("src/features/auth/fr.json", r#"{"login": "Connexion"}"#)?;
    assert!(test.merge_command().output()?.status.success());
    let bundle = test.read_file("messages/fr.json")?;
    let modified = fs::metadata(test.root().join("messages/fr.json"))?.modified()?;

    let output = test.merge_command().output()?;

    assert!(output.status.success());
    assert_snapshot!(stdout(&output), @r"
    ✓ No changes detected in any locale, skipping file writes
    ✓ Total translation files: 2
    ✓ Unchanged files: 2
    ✓ No changes detected in translation files
    ");
    assert_eq!(test.read_file("messages/fr.json")?, bundle);
    assert_eq!(
        fs::metadata(test.root().join("messages/fr.json"))?.modified()?,
        modified
    );
    Ok(())
}

#[test]
fn test_edit_updates_only_edited_namespace() -> Result<()> {
    let test = CliTest::with_layout()?;
    test.write_file(
        "src/features/billing/fr.json",
        r#"{"title": "Facturation"}"#,
    )?;
    test.write_file("src/features/auth/fr.json", r#"{"login": "Connexion"}"#)?;
    assert!(test.merge_command().output()?.status.success());

    test.write_file(
        "src/features/billing/fr.json",
        r#"{"title": "Facturation", "subtitle": "Détails"}"#,
    )?;
    let output = test.merge_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Updated namespaces: BillingFeature\n"));
    assert!(stdout(&output).contains("Unchanged files: 1"));
    assert_snapshot!(test.read_file("messages/fr.json")?, @r#"
    {
      "AuthFeature": {
        "login": "Connexion"
      },
      "BillingFeature": {
        "title": "Facturation",
        "subtitle": "Détails"
      }
    }
    "#);
    Ok(())
}

#[test]
fn test_existing_namespaces_are_preserved() -> Result<()> {
    let test = CliTest::with_layout()?;
    test.write_file(
        "messages/fr.json",
        r#"{"SharedFeature": {"ok": "D'accord"}}"#,
    )?;
    test.write_file(
        "src/features/billing/fr.json",
        r#"{"title": "Facturation"}"#,
    )?;

    let output = test.merge_command().output()?;

    assert!(output.status.success());
    let bundle = parse(&test.read_file("messages/fr.json")?)?;
    assert_eq!(
        bundle,
        json!({
            "SharedFeature": { "ok": "D'accord" },
            "BillingFeature": { "title": "Facturation" }
        })
    );
    Ok(())
}

#[test]
fn test_invalid_json_aborts_without_writes() -> Result<()> {
    let test = CliTest::with_layout()?;
    test.write_file(
        "src/features/billing/fr.json",
        r#"{"title": "Facturation"}"#,
    )?;
    test.write_file("src/features/auth/fr.json", r#"{"login": "#)?;

    let output = test.merge_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("[Translation Error]"));
    assert!(err.contains("Failed to process file"));
    assert!(err.contains("auth/fr.json"));
    assert!(err.contains("invalid JSON"));
    assert!(!test.exists("messages/fr.json"));
    assert!(!test.exists("messages/.translation-cache.json"));
    Ok(())
}

#[test]
fn test_missing_features_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.merge_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("src/features directory does not exist"));
    Ok(())
}

#[test]
fn test_no_translation_files() -> Result<()> {
    let test = CliTest::with_layout()?;
    test.write_file("src/features/billing/index.ts", "export {}")?;

    let output = test.merge_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No translation files found"));
    Ok(())
}

#[test]
fn test_missing_messages_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/features/billing/fr.json",
        r#"{"title": "Facturation"}"#,
    )?;

    let output = test.merge_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("messages directory does not exist"));
    Ok(())
}

#[test]
fn test_corrupt_cache_is_rebuilt() -> Result<()> {
    let test = CliTest::with_layout()?;
    test.write_file(
        "src/features/billing/fr.json",
        r#"{"title": "Facturation"}"#,
    )?;
    test.write_file("messages/.translation-cache.json", "not json")?;

    let output = test.merge_command().output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("Failed to load cache"));
    assert!(stdout(&output).contains("Updated namespaces: BillingFeature"));
    let cache = parse(&test.read_file("messages/.translation-cache.json")?)?;
    assert!(cache["fr"]["BillingFeature"].is_object());
    Ok(())
}

#[test]
fn test_config_file_locales_and_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nmergerc.json",
        r#"{
            "locales": ["fr", "de"],
            "featuresRoot": "./app/modules",
            "messagesRoot": "./i18n",
            "namespaceSuffix": "Module"
        }"#,
    )?;
    fs::create_dir_all(test.root().join("i18n"))?;
    test.write_file("app/modules/cart/fr.json", r#"{"checkout": "Payer"}"#)?;
    test.write_file("app/modules/cart/de.json", r#"{"checkout": "Bezahlen"}"#)?;

    let output = test.merge_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        parse(&test.read_file("i18n/fr.json")?)?,
        json!({ "CartModule": { "checkout": "Payer" } })
    );
    assert_eq!(
        parse(&test.read_file("i18n/de.json")?)?,
        json!({ "CartModule": { "checkout": "Bezahlen" } })
    );
    Ok(())
}

#[test]
fn test_cli_arguments_override_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nmergerc.json", r#"{ "locales": ["de"] }"#)?;
    fs::create_dir_all(test.root().join("out"))?;
    test.write_file("src/features/billing/es.json", r#"{"title": "Facturación"}"#)?;

    let output = test
        .merge_command()
        .args(["--locale", "es", "--messages-root", "out"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        parse(&test.read_file("out/es.json")?)?,
        json!({ "BillingFeature": { "title": "Facturación" } })
    );
    Ok(())
}

#[test]
fn test_root_argument() -> Result<()> {
    let test = CliTest::with_layout()?;
    test.write_file(
        "src/features/billing/fr.json",
        r#"{"title": "Facturation"}"#,
    )?;

    let mut cmd = test.merge_command();
    cmd.current_dir(std::env::temp_dir());
    cmd.arg("--root").arg(test.root());
    let output = cmd.output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.exists("messages/fr.json"));
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_layout()?;
    test.write_file(".i18nmergerc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = test.merge_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("ignores"));
    Ok(())
}
