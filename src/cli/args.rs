//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::config::APP_ID_ENV;

/// Command line tools for Goo labs API (https://labs.goo.ne.jp/api/).
#[derive(Parser, Debug)]
#[command(name = "goolabs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every API subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ApiArgs {
    /// Application id (falls back to the environment, then the config file)
    #[arg(short = 'a', long = "app-id", env = APP_ID_ENV, hide_env_values = true)]
    pub app_id: Option<String>,

    /// Request id echoed back by the service
    #[arg(short = 'r', long = "request-id")]
    pub request_id: Option<String>,

    /// Print the raw response as formatted JSON
    #[arg(short = 'j', long = "json", overrides_with = "no_json")]
    pub json: bool,

    /// Print the human-readable projection (default)
    #[arg(long = "no-json", overrides_with = "json")]
    pub no_json: bool,
}

impl ApiArgs {
    /// The last of `--json` / `--no-json` on the command line wins.
    pub fn json_output(&self) -> bool {
        self.json && !self.no_json
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Morphological analysis for Japanese.
    Morph {
        /// Sentence to analyze
        sentence: Option<String>,
        /// form,pos,read
        #[arg(short = 'i', long = "info-filter")]
        info_filter: Option<String>,
        /// 名詞,動詞活用語尾,句点..etc
        #[arg(short = 'p', long = "pos-filter")]
        pos_filter: Option<String>,
        /// Read the sentence from a file
        #[arg(short = 'f', long = "file", value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        #[command(flatten)]
        api: ApiArgs,
    },

    /// Scoring the similarity of two words.
    Similarity {
        /// The two words to compare
        #[arg(num_args = 2, required = true, value_names = ["WORD1", "WORD2"])]
        query_pair: Vec<String>,
        #[command(flatten)]
        api: ApiArgs,
    },

    /// Convert the Japanese to Hiragana or Katakana.
    Hiragana {
        /// Sentence to convert
        sentence: Option<String>,
        #[arg(short = 'o', long = "output-type", value_enum, default_value_t = OutputType::Hiragana)]
        output_type: OutputType,
        /// Read the sentence from a file
        #[arg(short = 'f', long = "file", value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        #[command(flatten)]
        api: ApiArgs,
    },

    /// Extract unique representation from sentence.
    Entity {
        /// Sentence to scan
        sentence: Option<String>,
        /// ART,ORG,PSN,LOC,DAT
        #[arg(short = 'c', long = "class-filter")]
        class_filter: Option<String>,
        /// Read the sentence from a file
        #[arg(short = 'f', long = "file", value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        #[command(flatten)]
        api: ApiArgs,
    },

    /// Summarize reviews into a short summary.
    Shortsum {
        /// Reviews, one per line
        review: Option<String>,
        /// Summary length
        #[arg(short = 'l', long = "length", value_parser = ["60", "120", "180"])]
        length: Option<String>,
        /// Read the reviews from a file
        #[arg(short = 'f', long = "file", value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        #[command(flatten)]
        api: ApiArgs,
    },

    /// Extract "keywords" from an input document.
    Keyword {
        /// Document title
        title: String,
        /// Document body
        body: Option<String>,
        /// Maximum number of keywords
        #[arg(short = 'm', long = "max_num")]
        max_num: Option<u32>,
        /// Entity class to focus on
        #[arg(long = "forcus", value_parser = ["ORG", "PSN", "LOC"])]
        forcus: Option<String>,
        /// Read the body from a file
        #[arg(short = 'f', long = "file", value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        #[command(flatten)]
        api: ApiArgs,
    },

    /// Extract expression expressing date and time and normalize its value
    Chrono {
        /// Sentence to scan
        sentence: Option<String>,
        /// Document time used as the reference point
        #[arg(short = 'd', long = "doc-time")]
        doc_time: Option<String>,
        /// Read the sentence from a file
        #[arg(short = 'f', long = "file", value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        #[command(flatten)]
        api: ApiArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config path
    Path,
}

/// Target script for the hiragana operation.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    #[default]
    Hiragana,
    Katakana,
}

impl OutputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Hiragana => "hiragana",
            OutputType::Katakana => "katakana",
        }
    }
}
