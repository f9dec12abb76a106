//! Configuration type definitions.

use knuffel::Decode;
use std::path::PathBuf;

/// Expand tilde (~) prefix to the user's home directory.
/// Handles both "~" alone and "~/path/to/something" patterns.
pub(crate) fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Main configuration structure parsed from rolecache.kdl.
#[derive(Debug, Decode, Clone)]
pub struct Config {
    #[knuffel(child)]
    pub defaults: Option<Defaults>,

    #[knuffel(child)]
    pub tool: Option<ToolConfig>,
}

/// Default settings for rolecache.
#[derive(Debug, Decode, Clone, Default)]
pub struct Defaults {
    /// Directory holding the credential snapshot files.
    #[knuffel(property(name = "snapshots_path"))]
    pub snapshots_path: Option<String>,

    /// Snapshot time-to-live in seconds.
    #[knuffel(property)]
    pub ttl: Option<u64>,

    /// Filename prefix used to enumerate cached snapshots when the user
    /// does not name a role on the command line.
    #[knuffel(property(name = "default_role"))]
    pub default_role: Option<String>,

    /// Region exported as AWS_DEFAULT_REGION alongside the credentials.
    #[knuffel(property)]
    pub region: Option<String>,

    /// Regex recognizing the organization project code inside a role
    /// fragment, used only to derive display labels.
    #[knuffel(property(name = "project_pattern"))]
    pub project_pattern: Option<String>,

    /// Name of the one-line file caching the selected home directory.
    #[knuffel(property(name = "home_pointer"))]
    pub home_pointer: Option<String>,
}

/// Configuration for the external authentication tool.
#[derive(Debug, Decode, Clone, Default)]
pub struct ToolConfig {
    /// Executable name (default: aws-adfs).
    #[knuffel(property)]
    pub command: Option<String>,

    /// ADFS host passed to the login flow.
    #[knuffel(property)]
    pub host: Option<String>,

    /// Auth file passed to the login flow.
    #[knuffel(property)]
    pub authfile: Option<String>,

    /// Run `<command> reset` before logging in (default: true).
    #[knuffel(property)]
    pub reset: Option<bool>,

    /// Ordered list of directories to check for the tool executable
    /// before falling back to $PATH.
    #[knuffel(children(name = "search-path"))]
    pub search_paths: Vec<SearchPath>,
}

/// One candidate directory for locating the tool executable.
#[derive(Debug, Decode, Clone)]
pub struct SearchPath {
    #[knuffel(argument)]
    pub path: String,
}

impl Config {
    /// Get the snapshots directory, defaulting to the current directory.
    /// Expands ~ to the user's home directory if present.
    pub fn snapshots_path(&self) -> PathBuf {
        self.defaults
            .as_ref()
            .and_then(|d| d.snapshots_path.clone())
            .map(|p| expand_tilde(&p))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the snapshot TTL in seconds, defaulting to 3600 (1 hour).
    pub fn ttl(&self) -> u64 {
        self.defaults.as_ref().and_then(|d| d.ttl).unwrap_or(3600)
    }

    /// Get the default role prefix (if set).
    pub fn default_role(&self) -> Option<String> {
        self.defaults.as_ref().and_then(|d| d.default_role.clone())
    }

    /// Get the region exported as AWS_DEFAULT_REGION (if set).
    pub fn region(&self) -> Option<String> {
        self.defaults.as_ref().and_then(|d| d.region.clone())
    }

    /// Get the project-code pattern used for role labels.
    pub fn project_pattern(&self) -> String {
        self.defaults
            .as_ref()
            .and_then(|d| d.project_pattern.clone())
            .unwrap_or_else(|| r"esol-ap\d+-\w+".to_string())
    }

    /// Get the path of the home directory pointer file.
    pub fn home_pointer_path(&self) -> PathBuf {
        let name = self
            .defaults
            .as_ref()
            .and_then(|d| d.home_pointer.clone())
            .unwrap_or_else(|| "HomeDir.txt".to_string());
        self.snapshots_path().join(name)
    }

    /// Get the auth tool executable name, defaulting to "aws-adfs".
    pub fn tool_command(&self) -> String {
        self.tool
            .as_ref()
            .and_then(|t| t.command.clone())
            .unwrap_or_else(|| "aws-adfs".to_string())
    }

    /// Get the ADFS host for the login flow (if set).
    pub fn tool_host(&self) -> Option<String> {
        self.tool.as_ref().and_then(|t| t.host.clone())
    }

    /// Get the auth file for the login flow (if set).
    pub fn tool_authfile(&self) -> Option<String> {
        self.tool.as_ref().and_then(|t| t.authfile.clone())
    }

    /// Whether to run `<tool> reset` before logging in.
    pub fn tool_reset(&self) -> bool {
        self.tool.as_ref().and_then(|t| t.reset).unwrap_or(true)
    }

    /// Ordered candidate directories to check for the tool executable.
    pub fn tool_search_paths(&self) -> Vec<PathBuf> {
        self.tool
            .as_ref()
            .map(|t| t.search_paths.iter().map(|p| expand_tilde(&p.path)).collect())
            .unwrap_or_default()
    }

    /// Update a default setting.
    pub fn set_default(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let defaults = self.defaults.get_or_insert(Defaults::default());
        match key {
            "snapshots_path" => defaults.snapshots_path = Some(value.to_string()),
            "ttl" => defaults.ttl = Some(value.parse().map_err(|_| "Invalid number for ttl")?),
            "default_role" => defaults.default_role = Some(value.to_string()),
            "region" => defaults.region = Some(value.to_string()),
            "project_pattern" => defaults.project_pattern = Some(value.to_string()),
            "home_pointer" => defaults.home_pointer = Some(value.to_string()),
            _ => {
                return Err(format!(
                    "Unknown setting: {}. Valid settings: snapshots_path, ttl, default_role, \
                     region, project_pattern, home_pointer",
                    key
                ));
            }
        }
        Ok(())
    }

    /// Get a default setting value as string.
    pub fn get_default(&self, key: &str) -> std::result::Result<String, String> {
        match key {
            "snapshots_path" => Ok(self.snapshots_path().to_string_lossy().to_string()),
            "ttl" => Ok(self.ttl().to_string()),
            "default_role" => Ok(self.default_role().unwrap_or_else(|| "(not set)".to_string())),
            "region" => Ok(self.region().unwrap_or_else(|| "(not set)".to_string())),
            "project_pattern" => Ok(self.project_pattern()),
            "home_pointer" => Ok(self.home_pointer_path().to_string_lossy().to_string()),
            _ => Err(format!(
                "Unknown setting: {}. Valid settings: snapshots_path, ttl, default_role, \
                 region, project_pattern, home_pointer",
                key
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let config = Config {
            defaults: None,
            tool: None,
        };
        assert_eq!(config.snapshots_path(), PathBuf::from("."));
        assert_eq!(config.ttl(), 3600);
        assert_eq!(config.default_role(), None);
        assert_eq!(config.tool_command(), "aws-adfs");
        assert!(config.tool_reset());
        assert_eq!(config.project_pattern(), r"esol-ap\d+-\w+");
    }

    #[test]
    fn test_set_and_get_default() {
        let mut config = Config {
            defaults: None,
            tool: None,
        };
        config.set_default("ttl", "7200").unwrap();
        assert_eq!(config.get_default("ttl").unwrap(), "7200");

        config.set_default("default_role", "esol-ap1234-test").unwrap();
        assert_eq!(
            config.get_default("default_role").unwrap(),
            "esol-ap1234-test"
        );

        assert!(config.set_default("ttl", "not-a-number").is_err());
        assert!(config.set_default("bogus", "x").is_err());
        assert!(config.get_default("bogus").is_err());
    }

    #[test]
    fn test_parse_kdl() {
        let content = r#"
defaults snapshots_path="~/creds" ttl=1800 default_role="esol-ap1234-test" region="eu-central-1"

tool command="aws-adfs" host="sts.example.com" authfile="awsauth" reset=false {
    search-path "/opt/aws-adfs/bin"
    search-path "~/tools"
}
"#;
        let config = knuffel::parse::<Config>("rolecache.kdl", content).unwrap();
        assert_eq!(config.ttl(), 1800);
        assert_eq!(config.region().as_deref(), Some("eu-central-1"));
        assert_eq!(config.tool_host().as_deref(), Some("sts.example.com"));
        assert!(!config.tool_reset());
        assert_eq!(config.tool_search_paths().len(), 2);
        assert_eq!(
            config.tool_search_paths()[0],
            PathBuf::from("/opt/aws-adfs/bin")
        );
    }
}
