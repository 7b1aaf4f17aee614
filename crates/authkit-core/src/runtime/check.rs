//! Required tool detection on PATH

use crate::error::{Error, Result};
use std::path::PathBuf;

/// A required tool resolved on the search path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub path: PathBuf,
}

/// Resolve every tool in order, stopping at the first one that is missing
pub fn check_env<S: AsRef<str>>(tools: &[S]) -> Result<Vec<ToolInfo>> {
    tools
        .iter()
        .map(|tool| {
            let name = tool.as_ref();
            which::which(name)
                .map(|path| ToolInfo {
                    name: name.to_string(),
                    path,
                })
                .map_err(|_| Error::ToolNotFound {
                    tool: name.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING_TOOL: &str = "definitely-not-a-tool-12345";

    #[test]
    fn test_empty_requirements() {
        let tools: [&str; 0] = [];
        assert!(check_env(&tools).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_resolves_known_tool() {
        let tools = check_env(&["sh"]).unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "sh");
        assert!(tools[0].path.is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn test_reports_missing_tool() {
        let err = check_env(&["sh", MISSING_TOOL]).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { ref tool } if tool == MISSING_TOOL));
    }

    #[test]
    fn test_stops_at_first_missing_tool() {
        let second = format!("{}-2", MISSING_TOOL);
        let err = check_env(&[MISSING_TOOL.to_string(), second]).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { ref tool } if tool == MISSING_TOOL));
    }
}
