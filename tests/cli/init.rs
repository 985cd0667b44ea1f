use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "\u{2713} Created .transkitrc.json\n");

    let content = test.read_file(".transkitrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["output"], "locales/en.json");
    assert_eq!(parsed["transComponents"][0], "Trans");
    assert_eq!(parsed["translationFunctions"][0], "t");
    assert!(content.contains("\n  \"includes\""), "2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".transkitrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: .transkitrc.json already exists"));
    assert_eq!(test.read_file(".transkitrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("src/app.tsx", r#"export const App = () => <Trans>Hi</Trans>;"#)?;

    let output = test.extract_command().output()?;

    assert!(
        output.status.success(),
        "extract should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("locales/en.json").exists());

    Ok(())
}
