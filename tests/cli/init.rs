use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .i18nmergerc.json"));
    let config: Value = serde_json::from_str(&test.read_file(".i18nmergerc.json")?)?;
    assert_eq!(config["locales"], serde_json::json!(["fr"]));
    assert_eq!(config["featuresRoot"], "./src/features");
    assert_eq!(config["messagesRoot"], "./messages");
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nmergerc.json", r#"{ "locales": ["de"] }"#)?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".i18nmergerc.json already exists"));
    assert_eq!(test.read_file(".i18nmergerc.json")?, r#"{ "locales": ["de"] }"#);
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("merge"));
    assert!(stdout(&output).contains("watch"));
    Ok(())
}
