use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::{Choice, FilterSelection};

/// Medical insurance charges dashboard.
#[derive(Debug, Parser)]
#[command(name = "insurance-dashboard", version, about)]
pub struct Cli {
    /// CSV file to load at startup
    #[arg(default_value = "insurance.csv")]
    pub data: PathBuf,

    /// Print the summary for the selected filters as JSON and exit
    #[arg(long)]
    pub summary: bool,

    /// Initial region filter ("all" for every region)
    #[arg(long, default_value = Choice::ALL_TEXT)]
    pub region: String,

    /// Initial smoker filter ("yes", "no" or "all")
    #[arg(long, default_value = Choice::ALL_TEXT)]
    pub smoker: String,

    /// Initial sex filter ("female", "male" or "all")
    #[arg(long, default_value = Choice::ALL_TEXT)]
    pub sex: String,
}

impl Cli {
    /// The filter selection requested on the command line.
    pub fn selection(&self) -> FilterSelection {
        FilterSelection {
            region: Choice::parse(&self.region),
            smoker: Choice::parse(&self.smoker),
            sex: Choice::parse(&self.sex),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["insurance-dashboard"]);
        assert_eq!(cli.data, PathBuf::from("insurance.csv"));
        assert!(!cli.summary);
        assert!(cli.selection().is_unconstrained());
    }

    #[test]
    fn filters_from_flags() {
        let cli = Cli::parse_from([
            "insurance-dashboard",
            "data/other.csv",
            "--summary",
            "--smoker",
            "yes",
            "--region",
            "southeast",
        ]);
        assert_eq!(cli.data, PathBuf::from("data/other.csv"));
        assert!(cli.summary);
        let sel = cli.selection();
        assert_eq!(sel.smoker, Choice::Value("yes".to_string()));
        assert_eq!(sel.region, Choice::Value("southeast".to_string()));
        assert_eq!(sel.sex, Choice::All);
    }
}
