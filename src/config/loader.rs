//! Configuration file loading and saving.

use std::path::{Path, PathBuf};

use crate::error::{Result, RolecacheError};

use super::types::Config;

impl Config {
    /// Get the explicit ~/.config/rolecache/rolecache.kdl path (XDG-style, cross-platform)
    fn xdg_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config/rolecache/rolecache.kdl"))
    }

    /// Get the list of config file search paths in priority order
    fn get_config_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. ./rolecache.kdl (current directory - highest priority for project-local config)
        paths.push(PathBuf::from("rolecache.kdl"));

        // 2. ~/.config/rolecache/rolecache.kdl (XDG-style, explicit cross-platform support)
        if let Some(xdg_path) = Self::xdg_config_path() {
            paths.push(xdg_path);
        }

        // 3. Platform-native config directory (~/Library/Application Support/ on macOS)
        // Skip if it's the same as the XDG path (e.g., on Linux where they're identical)
        if let Some(config_dir) = dirs::config_dir() {
            let native_path = config_dir.join("rolecache/rolecache.kdl");
            if Self::xdg_config_path().as_ref() != Some(&native_path) {
                paths.push(native_path);
            }
        }

        // 4. ~/.local/share/rolecache/rolecache.kdl (XDG data directory)
        if let Some(data_dir) = dirs::data_dir() {
            paths.push(data_dir.join("rolecache/rolecache.kdl"));
        }

        paths
    }

    /// Find existing config file by searching all standard locations
    /// Returns the path to the first existing config file found, or None
    pub fn find_existing_config() -> Option<PathBuf> {
        Self::get_config_search_paths()
            .into_iter()
            .find(|path| path.exists())
    }

    /// Get the default config path (~/.config/rolecache/rolecache.kdl)
    pub fn default_config_path() -> PathBuf {
        Self::xdg_config_path().unwrap_or_else(|| PathBuf::from("rolecache.kdl"))
    }

    /// Load configuration from a specific path
    fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = knuffel::parse::<Config>("rolecache.kdl", &content)
            .map_err(|e| RolecacheError::config(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration from rolecache.kdl, searching multiple locations
    pub fn load() -> Result<Self> {
        let search_paths = Self::get_config_search_paths();

        // Try each path in priority order
        for path in &search_paths {
            if path.exists() {
                return Self::load_from_path(path);
            }
        }

        // Return default config if no file found
        Ok(Config {
            defaults: None,
            tool: None,
        })
    }

    /// Generate a config file with default values
    pub fn generate_config_file(path: Option<PathBuf>, overwrite: bool) -> Result<PathBuf> {
        let config_path = path.unwrap_or_else(Self::default_config_path);

        // Check if file exists and overwrite flag
        if config_path.exists() && !overwrite {
            return Err(RolecacheError::config(format!(
                "Config file already exists at: {}. Use --overwrite to replace it.",
                config_path.display()
            )));
        }

        // Create parent directories if they don't exist
        if let Some(parent) = config_path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let kdl_content = r#"// Global defaults
// ttl is in seconds (default: 3600 = 1 hour) and controls when cached
// credential snapshots are purged.
// default_role is the filename prefix offered when no role is named.
defaults snapshots_path="." ttl=3600
// default_role="esol-ap1234-test"
// region="eu-central-1"

// External authentication tool (ADFS/SSO flow).
// search-path entries are checked in order before falling back to $PATH.
tool command="aws-adfs" authfile="awsauth" {
    // host "sts.example.com"
    // search-path "/opt/aws-adfs/bin"
    // search-path "~/tools/aws-adfs"
}
"#;

        std::fs::write(&config_path, kdl_content)?;
        Ok(config_path)
    }

    /// Serialize config to KDL format
    pub fn to_kdl(&self) -> String {
        let mut output = String::new();

        // Write header comment
        output.push_str("// rolecache configuration file\n");
        output.push_str("// ttl is in seconds (default: 3600 = 1 hour)\n\n");

        // Write defaults
        let defaults = self.defaults.as_ref();
        output.push_str("defaults");

        if let Some(d) = defaults {
            if let Some(snapshots_path) = &d.snapshots_path {
                output.push_str(&format!(" snapshots_path=\"{}\"", snapshots_path));
            }
            if let Some(ttl) = d.ttl {
                output.push_str(&format!(" ttl={}", ttl));
            }
            if let Some(default_role) = &d.default_role {
                output.push_str(&format!(" default_role=\"{}\"", default_role));
            }
            if let Some(region) = &d.region {
                output.push_str(&format!(" region=\"{}\"", region));
            }
            if let Some(project_pattern) = &d.project_pattern {
                output.push_str(&format!(" project_pattern=\"{}\"", project_pattern));
            }
            if let Some(home_pointer) = &d.home_pointer {
                output.push_str(&format!(" home_pointer=\"{}\"", home_pointer));
            }
        }
        output.push('\n');

        // Write the tool block
        if let Some(t) = &self.tool {
            output.push_str("\ntool");
            if let Some(command) = &t.command {
                output.push_str(&format!(" command=\"{}\"", command));
            }
            if let Some(host) = &t.host {
                output.push_str(&format!(" host=\"{}\"", host));
            }
            if let Some(authfile) = &t.authfile {
                output.push_str(&format!(" authfile=\"{}\"", authfile));
            }
            if let Some(reset) = t.reset {
                output.push_str(&format!(" reset={}", reset));
            }

            if t.search_paths.is_empty() {
                output.push('\n');
            } else {
                output.push_str(" {\n");
                for search_path in &t.search_paths {
                    output.push_str(&format!("    search-path \"{}\"\n", search_path.path));
                }
                output.push_str("}\n");
            }
        }

        output
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_kdl())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kdl_round_trip() {
        let content = r#"
defaults snapshots_path="/tmp/snaps" ttl=1800 default_role="roleA"

tool command="aws-adfs" host="sts.example.com" {
    search-path "/opt/bin"
}
"#;
        let config = knuffel::parse::<Config>("rolecache.kdl", content).unwrap();
        let rendered = config.to_kdl();
        let reparsed = knuffel::parse::<Config>("rolecache.kdl", &rendered).unwrap();

        assert_eq!(reparsed.ttl(), 1800);
        assert_eq!(reparsed.default_role().as_deref(), Some("roleA"));
        assert_eq!(reparsed.tool_host().as_deref(), Some("sts.example.com"));
        assert_eq!(reparsed.tool_search_paths().len(), 1);
    }
}
