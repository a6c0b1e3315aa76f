//! Invocation of the external OpenAPI code generator.
//!
//! The generator is an opaque subprocess: spec document in, directory of
//! TypeScript sources out. Nonzero exit is fatal for the unit of work.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::error::Error;

/// Fixed generator tool name, resolved via PATH.
pub const GENERATOR_BIN: &str = "openapi-generator-cli";

/// Target language/framework profile passed as `-g`.
pub const GENERATOR_PROFILE: &str = "typescript-fetch";

/// Join generator properties into the comma-separated form the tool expects
/// for `--additional-properties`.
pub fn join_properties(properties: &[(String, String)]) -> String {
    properties
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(",")
}

/// Run the generator on `input`, writing into `output`. Blocks until the
/// subprocess exits.
pub fn run_generator(input: &Path, output: &Path, properties: &[(String, String)]) -> Result<()> {
    let mut command = Command::new(GENERATOR_BIN);
    command
        .arg("generate")
        .arg("-g")
        .arg(GENERATOR_PROFILE)
        .arg("-i")
        .arg(input)
        .arg("-o")
        .arg(output);
    if !properties.is_empty() {
        command.arg("--additional-properties").arg(join_properties(properties));
    }

    let result = command.output().with_context(|| {
        format!(
            "Failed to invoke {}. Is it installed and in PATH?",
            GENERATOR_BIN
        )
    })?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
        return Err(Error::GeneratorFailed {
            status: result.status.code().unwrap_or(-1),
            stderr,
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_properties() {
        let props = vec![
            ("npmName".to_string(), "@org/build".to_string()),
            ("supportsES6".to_string(), "true".to_string()),
        ];
        assert_eq!(join_properties(&props), "npmName=@org/build,supportsES6=true");
        assert_eq!(join_properties(&[]), "");
    }
}
