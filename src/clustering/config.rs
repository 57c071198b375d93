use crate::clustering::error::ClusterError;
use crate::clustering::kmeans::KMeansParams;
use log::{error, LevelFilter};
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Deserialize)]
pub struct ClusteringConfig {
    pub number_of_clusters: usize,
    pub max_iterations: usize,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String, // Log level, e.g., "info", "debug", "warn", "error"
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub clustering: ClusteringConfig,
    pub logging: LoggingConfig,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Clustering:")?;
        writeln!(
            f,
            "    Number of Clusters: {}",
            self.clustering.number_of_clusters
        )?;
        writeln!(f, "    Max Iterations: {}", self.clustering.max_iterations)?;
        writeln!(f, "  Logging:")?;
        writeln!(f, "    Level: {}", self.logging.level)?;
        Ok(())
    }
}

impl Config {
    /// Reads the YAML configuration file and returns a `Config` instance.
    pub fn from_file(file_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(file_path)?;
        let config: Config = serde_yaml::from_str(&file_content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.clustering.number_of_clusters == 0 {
            return Err(ClusterError::invalid_parameter(
                "number_of_clusters must be greater than 0",
            ));
        }
        if self.clustering.max_iterations == 0 {
            return Err(ClusterError::invalid_parameter(
                "max_iterations must be greater than 0",
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ClusterError::invalid_parameter(format!(
                "Unsupported log level: {}",
                other
            ))),
        }
    }

    /// Converts the clustering section into `KMeansParams`.
    pub fn to_params(&self) -> KMeansParams {
        KMeansParams {
            number_of_clusters: self.clustering.number_of_clusters,
            max_iterations: self.clustering.max_iterations,
        }
    }

    /// Sets up logging based on the logging level in the configuration.
    pub fn setup_logging(&self) {
        let level_filter = match self.logging.level.to_lowercase().as_str() {
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        };

        if let Err(e) = env_logger::Builder::new()
            .filter_level(level_filter)
            .try_init()
        {
            error!("Failed to initialize logger: {}", e);
        }
    }
}
