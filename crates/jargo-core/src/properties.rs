use std::collections::BTreeMap;
use std::path::Path;

/// Loads a `.jargo.env` file (shell-style `KEY=value` format).
///
/// `.jargo.env` holds publish secrets and credentials (repository passwords,
/// CI tokens). Values are available via `${env:VAR}` interpolation in
/// `Jargo.toml`, which keeps credentials out of committed manifests.
pub fn load_env_file(path: &Path) -> miette::Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    if !path.is_file() {
        return Ok(map);
    }
    let content = std::fs::read_to_string(path).map_err(jargo_util::errors::JargoError::Io)?;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
        if let Some((key, value)) = trimmed.split_once('=') {
            map.insert(key.trim().to_string(), unquote(value.trim()).to_string());
        }
    }
    tracing::debug!("loaded {} entries from {}", map.len(), path.display());
    Ok(map)
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Interpolate `${env:VAR}` references in a string.
///
/// Looks up values first from the provided `env_overrides` map (populated
/// from `.jargo.env`), then falls back to actual process environment
/// variables. Unknown variables resolve to the empty string.
pub fn interpolate(input: &str, env_overrides: &BTreeMap<String, String>) -> String {
    let mut result = input.to_string();
    while let Some(start) = result.find("${env:") {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let end = start + end;
        let key = &result[start + 6..end];
        let value = env_overrides
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
            .unwrap_or_default();
        result.replace_range(start..=end, &value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_from_overrides() {
        let mut overrides = BTreeMap::new();
        overrides.insert("REPO_PASS".to_string(), "s3cret".to_string());
        let out = interpolate("password = \"${env:REPO_PASS}\"", &overrides);
        assert_eq!(out, "password = \"s3cret\"");
    }

    #[test]
    fn unknown_variable_resolves_empty() {
        let out = interpolate("x${env:JARGO_DOES_NOT_EXIST_XYZ}y", &BTreeMap::new());
        assert_eq!(out, "xy");
    }

    #[test]
    fn env_file_strips_export_and_quotes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let env_path = tmp.path().join(".jargo.env");
        std::fs::write(
            &env_path,
            "# credentials\nexport REPO_USER=ci\nREPO_PASS=\"p@ss\"\n",
        )
        .unwrap();
        let map = load_env_file(&env_path).unwrap();
        assert_eq!(map.get("REPO_USER").map(String::as_str), Some("ci"));
        assert_eq!(map.get("REPO_PASS").map(String::as_str), Some("p@ss"));
    }

    #[test]
    fn missing_env_file_is_empty() {
        let tmp = tempfile::TempDir::new().unwrap();
        let map = load_env_file(&tmp.path().join(".jargo.env")).unwrap();
        assert!(map.is_empty());
    }
}
