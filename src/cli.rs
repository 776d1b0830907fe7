// Command line interface.
// Startup options for choosing a paper, opening its slides and managing the settings file.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "paperdeck",
    version,
    about = "Terminal explainer for AI research papers"
)]
pub struct Cli {
    /// Open this paper page on startup (e.g. zep, alphaqubit).
    #[arg(long, value_name = "ID")]
    pub paper: Option<String>,

    /// Also open the slide deck of the startup paper.
    #[arg(long, default_value_t = false)]
    pub slides: bool,

    /// Print the paper catalog and exit.
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Settings file. Defaults to the platform config directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the default settings file and exit.
    #[arg(long, default_value_t = false)]
    pub init_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["paperdeck"]).unwrap();
        assert!(cli.paper.is_none());
        assert!(!cli.slides);
        assert!(!cli.list);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_paper_with_slides() {
        let cli = Cli::try_parse_from(["paperdeck", "--paper", "zep", "--slides"]).unwrap();
        assert_eq!(cli.paper.as_deref(), Some("zep"));
        assert!(cli.slides);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["paperdeck", "--theme", "dark"]).is_err());
    }

    #[test]
    fn test_parse_config_path() {
        let cli =
            Cli::try_parse_from(["paperdeck", "--config", "/tmp/s.json", "--init-config"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/s.json")));
        assert!(cli.init_config);
    }
}
