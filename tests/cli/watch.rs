use anyhow::Result;

use crate::{CliTest, stderr};

#[test]
fn test_watch_fails_without_features_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("watch").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("src/features directory does not exist"));
    Ok(())
}

#[test]
fn test_watch_fails_on_broken_bundle() -> Result<()> {
    let test = CliTest::with_layout()?;
    test.write_file("messages/fr.json", "{ broken")?;

    let output = test.command().arg("watch").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load existing translations"));
    Ok(())
}
