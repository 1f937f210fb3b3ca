use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use lazypick::InputMode;
use lazypick::config::PickerOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Typed text is searched after the debounce interval
    Text,
    /// The list is opened with Tab; typed text is not searched
    Toggle,
}

impl From<ModeArg> for InputMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Text => Self::TextDriven,
            ModeArg::Toggle => Self::ToggleDriven,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lazypick", version, about = "Pick one item from a list in the terminal")]
pub struct Args {
    /// Items to choose from
    pub items: Vec<String>,

    /// Read items from a file, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Initial search text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Quiet period in milliseconds before a search is applied
    #[arg(short, long, allow_negative_numbers = true)]
    pub debounce_ms: Option<i64>,

    /// How search text reaches the picker
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Config file to use instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Override config file options with the ones given on the command line.
    pub fn apply(&self, options: &mut PickerOptions) {
        if let Some(mode) = self.mode {
            options.mode = mode.into();
        }
        if let Some(ms) = self.debounce_ms {
            options.debounce_ms = ms;
        }
        if let Some(query) = &self.query {
            options.initial_search = Some(query.clone());
        }
    }

    /// Positional items followed by the non-empty lines of `--file`.
    pub fn read_items(&self) -> Result<Vec<String>> {
        let mut items = self.items.clone();
        if let Some(path) = &self.file {
            let content = fs::read_to_string(path)?;
            items.extend(
                content
                    .lines()
                    .map(str::trim_end)
                    .filter(|line| !line.is_empty())
                    .map(ToString::to_string),
            );
        }

        if items.is_empty() {
            return Err(eyre!("No items to pick from, pass them as arguments or with --file"));
        }
        Ok(items)
    }
}
