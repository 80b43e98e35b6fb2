use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "gleaner",
    version,
    about = "Scrape blog posts and news summaries, and normalize text for analysis"
)]
pub struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape blog articles and print them as JSON
    Blog {
        /// Ignore the cache file and scrape again
        #[arg(long)]
        refresh: bool,
        urls: Vec<String>,
    },
    /// Scrape news summaries for each topic and print them as JSON
    News {
        /// Ignore the cache file and scrape again
        #[arg(long)]
        refresh: bool,
        topics: Vec<String>,
    },
    /// Show every preparation step applied to a piece of text
    Clean { text: String },
    /// Add cleaned text columns to a CSV file
    Prepare {
        #[arg(long)]
        input: PathBuf,
        /// Text column, defaults to the configured one
        #[arg(long)]
        column: Option<String>,
        /// Output CSV, stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
        /// Add clean, stemmed and lemmatized columns instead of a single clean column
        #[arg(long)]
        all_columns: bool,
        /// Extra stopword, repeatable
        #[arg(long = "extra-word")]
        extra_words: Vec<String>,
        /// Word to keep even if it is a stopword, repeatable
        #[arg(long = "exclude-word")]
        exclude_words: Vec<String>,
        /// Lemmatizer override as WORD=LEMMA, repeatable
        #[arg(long = "lemma", value_parser = parse_lemma_exception)]
        lemma_exceptions: Vec<(String, String)>,
    },
    /// Print the effective configuration
    Config,
}

fn parse_lemma_exception(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((word, lemma)) if !word.is_empty() && !lemma.is_empty() => {
            Ok((word.to_string(), lemma.to_string()))
        }
        _ => Err(format!("expected WORD=LEMMA, got `{arg}`")),
    }
}
