//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the CLI argument structure, and how it maps
//! onto the library's configuration types.
//!
//! # Example
//!
//! ```rust
//! use clap::Parser;
//! use postpack::cli::Args;
//!
//! let args = Args::parse_from(["postpack", "--skip-extract", "--title", "My posts"]);
//! assert!(args.skip_extract);
//! assert_eq!(args.html_config().title, "My posts");
//! ```

use clap::Parser;

use crate::config::{ExtractConfig, HtmlConfig};

/// Convert a Facebook data download into a CSV file and a static
/// HTML gallery of your posts.
#[derive(Parser, Debug, Clone)]
#[command(name = "postpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    postpack
    postpack --zip-dir ~/Downloads/facebook --output-dir site
    postpack --skip-extract --extract-dir extracted_data
    postpack --no-html --csv posts.csv")]
pub struct Args {
    /// Directory containing the downloaded export zip files
    #[arg(long, value_name = "DIR", default_value = "downloaded_facebook_data")]
    pub zip_dir: String,

    /// Directory the archives are extracted into (also the media root)
    #[arg(long, value_name = "DIR", default_value = "extracted_data")]
    pub extract_dir: String,

    /// Directory for index.html and photos/
    #[arg(short, long, value_name = "DIR", default_value = "website")]
    pub output_dir: String,

    /// Path of the CSV export
    #[arg(long, value_name = "FILE", default_value = "facebook_posts.csv")]
    pub csv: String,

    /// Page title for the HTML gallery
    #[arg(long)]
    pub title: Option<String>,

    /// Value of the page's lang attribute
    #[arg(long)]
    pub lang: Option<String>,

    /// Use already extracted files in --extract-dir instead of unpacking archives
    #[arg(long)]
    pub skip_extract: bool,

    /// Don't write the CSV export
    #[arg(long)]
    pub no_csv: bool,

    /// Don't render the HTML gallery
    #[arg(long)]
    pub no_html: bool,
}

impl Args {
    /// Builds the gallery configuration from the flags.
    pub fn html_config(&self) -> HtmlConfig {
        let mut config = HtmlConfig::new();
        if let Some(ref title) = self.title {
            config = config.with_title(title.clone());
        }
        if let Some(ref lang) = self.lang {
            config = config.with_lang(lang.clone());
        }
        config
    }

    /// Builds the extraction configuration.
    pub fn extract_config(&self) -> ExtractConfig {
        ExtractConfig::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["postpack"]);
        assert_eq!(args.zip_dir, "downloaded_facebook_data");
        assert_eq!(args.extract_dir, "extracted_data");
        assert_eq!(args.output_dir, "website");
        assert_eq!(args.csv, "facebook_posts.csv");
        assert!(!args.skip_extract);
        assert!(!args.no_csv);
        assert!(!args.no_html);
        assert_eq!(args.html_config(), HtmlConfig::default());
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "postpack",
            "--zip-dir",
            "zips",
            "-o",
            "site",
            "--lang",
            "sk",
            "--no-csv",
        ]);
        assert_eq!(args.zip_dir, "zips");
        assert_eq!(args.output_dir, "site");
        assert!(args.no_csv);
        assert_eq!(args.html_config().lang, "sk");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["postpack", "--format"]).is_err());
    }
}
