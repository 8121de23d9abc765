use crate::error::{local_config_error, CanvasResult};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// One `[name, token]` entry from the keys file
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct Credential {
    pub name: String,
    pub token: String,
}

impl From<(String, String)> for Credential {
    fn from((name, token): (String, String)) -> Self {
        Self { name, token }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("name", &self.name)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Read and validate the credentials file. An empty list is an error.
pub fn load_credentials(path: &Path) -> CanvasResult<Vec<Credential>> {
    let content = fs::read_to_string(path).map_err(|e| {
        local_config_error(&format!("Error loading {}: {}", path.display(), e))
    })?;
    parse_credentials(&content, path)
}

pub fn parse_credentials(content: &str, path: &Path) -> CanvasResult<Vec<Credential>> {
    let credentials: Vec<Credential> = serde_json::from_str(content).map_err(|e| {
        local_config_error(&format!("Error loading {}: {}", path.display(), e))
    })?;

    if credentials.is_empty() {
        return Err(local_config_error(&format!(
            "No API keys found in {}.",
            path.display()
        )));
    }

    Ok(credentials)
}

/// Turn a 1-based menu answer into an index into `count` entries
pub fn parse_selection(input: &str, count: usize) -> CanvasResult<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=count).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| local_config_error("Invalid choice."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_credentials() {
        let path = Path::new("keys.json");
        let creds = parse_credentials(r#"[["Alice", "tok-a"], ["Bob", "tok-b"]]"#, path).unwrap();
        assert_eq!(creds.len(), 2);
        assert_eq!(creds[0].name, "Alice");
        assert_eq!(creds[1].token, "tok-b");

        // Wrong shapes are rejected
        assert!(parse_credentials(r#"{"Alice": "tok-a"}"#, path).is_err());
        assert!(parse_credentials(r#"[["Alice"]]"#, path).is_err());
        assert!(parse_credentials("[]", path).is_err());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1", 3).unwrap(), 0);
        assert_eq!(parse_selection(" 3\n", 3).unwrap(), 2);

        assert!(parse_selection("0", 3).is_err()); // Menu is 1-based
        assert!(parse_selection("4", 3).is_err()); // Past the end
        assert!(parse_selection("-1", 3).is_err());
        assert!(parse_selection("two", 3).is_err());
        assert!(parse_selection("", 3).is_err());
    }

    #[test]
    fn test_debug_hides_token() {
        let cred = Credential::from(("Alice".to_string(), "13096~secret".to_string()));
        assert!(!format!("{:?}", cred).contains("13096~secret"));
    }
}
