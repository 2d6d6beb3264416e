// src/data_input/config_resolver.rs

use std::fmt;
use std::path::PathBuf;

use crate::constants::DEFAULT_CONFIG_FILE;
use crate::data_input::cli_args::parse_positional_params;
use crate::data_input::config_file::load_config_file;
use crate::data_input::params::ParameterSet;
use crate::error::Result;

/// Where a resolved parameter set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    CommandLine,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::CommandLine => write!(f, "command line"),
            ConfigSource::File(path) => write!(f, "'{}'", path.display()),
        }
    }
}

/// Chooses between positional arguments and the configuration file.
///
/// Relative config file names are resolved against `base_dir`, which the
/// caller passes in explicitly instead of it being looked up globally.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    base_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Overrides the configuration file name (default `config.yml`).
    pub fn with_config_file(mut self, config_file: impl Into<PathBuf>) -> Self {
        self.config_file = config_file.into();
        self
    }

    /// Full path of the configuration file. An absolute `config_file` is
    /// returned unchanged.
    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(&self.config_file)
    }

    /// Resolves the parameter set: exactly six positional values are used
    /// directly, any other count loads the configuration file.
    ///
    /// The step is not validated here; that happens before sampling.
    pub fn resolve<S: AsRef<str>>(&self, positional: &[S]) -> Result<(ParameterSet, ConfigSource)> {
        if let Some(params) = parse_positional_params(positional)? {
            log::debug!("Using {} positional parameters", positional.len());
            return Ok((params, ConfigSource::CommandLine));
        }

        let path = self.config_path();
        if !positional.is_empty() {
            log::warn!(
                "Ignoring {} positional argument(s): expected exactly 6, falling back to '{}'",
                positional.len(),
                path.display()
            );
        }
        let params = load_config_file(&path)?;
        Ok((params, ConfigSource::File(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FunctionPlotError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_path_is_relative_to_base_dir() {
        let resolver = ConfigResolver::new("/opt/tool");
        assert_eq!(resolver.config_path(), PathBuf::from("/opt/tool/config.yml"));

        let custom = ConfigResolver::new("/opt/tool").with_config_file("other.yaml");
        assert_eq!(custom.config_path(), PathBuf::from("/opt/tool/other.yaml"));

        let absolute = ConfigResolver::new("/opt/tool").with_config_file("/etc/params.yml");
        assert_eq!(absolute.config_path(), PathBuf::from("/etc/params.yml"));
    }

    #[test]
    fn test_positional_args_bypass_missing_file() {
        let dir = TempDir::new().unwrap();
        let resolver = ConfigResolver::new(dir.path());
        let (params, source) = resolver.resolve(&["0", "1", "5", "2", "1", "0"]).unwrap();
        assert_eq!(source, ConfigSource::CommandLine);
        assert_eq!(params.to_ordered(), [0.0, 1.0, 5.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_wrong_count_loads_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.yml"),
            "xmin: 1\nstep: 2\nxmax: 3\na: 4\nb: 5\nc: 6\n",
        )
        .unwrap();
        let resolver = ConfigResolver::new(dir.path());
        let (params, source) = resolver.resolve(&["1", "2"]).unwrap();
        assert_eq!(source, ConfigSource::File(dir.path().join("config.yml")));
        assert_eq!(params.to_ordered(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_missing_file_reported() {
        let dir = TempDir::new().unwrap();
        let resolver = ConfigResolver::new(dir.path());
        let empty: [&str; 0] = [];
        let err = resolver.resolve(&empty).unwrap_err();
        assert!(matches!(err, FunctionPlotError::ConfigNotFound { .. }));
    }
}
