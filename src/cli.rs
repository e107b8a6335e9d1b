use clap::Parser;
use std::path::PathBuf;
use tagsphere::config::{DEFAULT_DRIFT_RANGE, DEFAULT_SPIN_ANGLE};
use tagsphere::error::{CloudError, Result};
use tagsphere::CloudConfig;

const DEFAULT_TAGS: [&str; 6] = ["hello", "hola", "o hai yo", "adios", "amingo", "c la vi"];

/// Spin a cloud of tags on a sphere in the terminal.
///
/// Drag with the left mouse button to rotate, click a tag to highlight it.
/// Keys: q quit, p pause, d debug overlay, r new layout.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Tags to place on the sphere
    pub tags: Vec<String>,

    /// Frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Ambient rotation per frame, in radians
    #[arg(long, default_value_t = DEFAULT_SPIN_ANGLE)]
    pub spin: f64,

    /// Inertia speed lost per frame, in cells per second
    #[arg(long, default_value_t = 2.0)]
    pub friction: f64,

    /// Bound for the random drift axis components
    #[arg(long, default_value_t = DEFAULT_DRIFT_RANGE)]
    pub drift_range: f64,

    /// Seed for a reproducible drift axis
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write log records to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated demo settings
#[derive(Debug)]
pub struct Settings {
    pub config: CloudConfig,
    pub fps: u32,
    pub tags: Vec<String>,
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn into_settings(self) -> Result<Settings> {
        if self.fps == 0 {
            return Err(CloudError::Config("fps must be at least 1".to_string()));
        }
        let config = CloudConfig {
            spin_angle: self.spin,
            inertia_decrement: self.friction,
            drift_range: self.drift_range,
            seed: self.seed,
        };
        config.validate()?;

        let tags = if self.tags.is_empty() {
            DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()
        } else {
            self.tags
        };

        Ok(Settings {
            config,
            fps: self.fps,
            tags,
            log_file: self.log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Args::parse_from(["tagsphere"]).into_settings().unwrap();
        assert_eq!(settings.fps, 60);
        assert_eq!(settings.tags.len(), 6);
        assert_eq!(settings.config.spin_angle, DEFAULT_SPIN_ANGLE);
        assert_eq!(settings.config.inertia_decrement, 2.0);
        assert!(settings.config.seed.is_none());
    }

    #[test]
    fn test_explicit_tags_and_seed() {
        let args = Args::parse_from(["tagsphere", "--seed", "9", "rust", "sphere"]);
        let settings = args.into_settings().unwrap();
        assert_eq!(settings.tags, vec!["rust", "sphere"]);
        assert_eq!(settings.config.seed, Some(9));
    }

    #[test]
    fn test_rejects_zero_fps() {
        let args = Args::parse_from(["tagsphere", "--fps", "0"]);
        assert!(matches!(args.into_settings(), Err(CloudError::Config(_))));
    }

    #[test]
    fn test_rejects_negative_friction() {
        let args = Args::parse_from(["tagsphere", "--friction=-1"]);
        assert!(args.into_settings().is_err());
    }
}
