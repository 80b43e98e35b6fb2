use std::io;
use std::path::Path;

use anyhow::Context;
use gleaner_acquire::{Acquirer, CachePolicy};
use gleaner_config::Config;
use gleaner_config::prepare::PrepareConfig;
use gleaner_core::{
    DefaultPreprocessor, Preprocessor, TextTable, add_cleaned_column, add_processed_columns,
    basic_clean, tokenize,
};
use serde::Serialize;

use crate::cli::Command;

/// Every intermediate form of a text, printed by `gleaner clean`
#[derive(Debug, Serialize)]
pub struct CleanReport {
    pub basic_clean: String,
    pub tokens: Vec<String>,
    pub stemmed: String,
    pub lemmatized: String,
    pub without_stopwords: String,
    pub processed: String,
}

impl CleanReport {
    pub fn new(preprocessor: &DefaultPreprocessor, text: &str) -> Self {
        Self {
            basic_clean: basic_clean(text),
            tokens: tokenize(text),
            stemmed: preprocessor.stem(text),
            lemmatized: preprocessor.lemmatize(text),
            without_stopwords: preprocessor.remove_stopwords(text),
            processed: preprocessor.process(text),
        }
    }
}

pub async fn run(command: Command, mut config: Config) -> anyhow::Result<()> {
    match command {
        Command::Blog { refresh, urls } => {
            let acquirer = Acquirer::new(config.acquire)?;
            let articles = acquirer
                .blog_articles(&urls, cache_policy(refresh))
                .await
                .context("Failed to get blog articles")?;
            print_json(&articles)
        }
        Command::News { refresh, topics } => {
            let acquirer = Acquirer::new(config.acquire)?;
            let summaries = acquirer
                .news_articles(&topics, cache_policy(refresh))
                .await
                .context("Failed to get news articles")?;
            print_json(&summaries)
        }
        Command::Clean { text } => {
            let preprocessor = DefaultPreprocessor::from_config(&config.prepare);
            print_json(&CleanReport::new(&preprocessor, &text))
        }
        Command::Prepare {
            input,
            column,
            output,
            all_columns,
            extra_words,
            exclude_words,
            lemma_exceptions,
        } => {
            config.prepare.extra_words.extend(extra_words);
            config.prepare.exclude_words.extend(exclude_words);
            config.prepare.lemma_exceptions.extend(lemma_exceptions);
            if let Some(column) = column {
                config.prepare.text_column = column;
            }

            let table = prepare_table(&input, &config.prepare, all_columns)?;

            match output {
                Some(path) => {
                    table
                        .write_csv_path(&path)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote {} rows to {}", table.len(), path.display());
                }
                None => table.write_csv(io::stdout().lock())?,
            }

            Ok(())
        }
        Command::Config => print_json(&config),
    }
}

/// Read a CSV and add the cleaned column(s) for the configured text column
pub fn prepare_table(
    input: &Path,
    config: &PrepareConfig,
    all_columns: bool,
) -> anyhow::Result<TextTable> {
    let mut table = TextTable::from_csv_path(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let preprocessor = DefaultPreprocessor::from_config(config);

    if all_columns {
        add_processed_columns(&mut table, &config.text_column, &preprocessor)?;
    } else {
        add_cleaned_column(
            &mut table,
            &config.text_column,
            &config.output_column,
            &preprocessor,
        )?;
    }

    Ok(table)
}

fn cache_policy(refresh: bool) -> CachePolicy {
    if refresh {
        CachePolicy::Refresh
    } else {
        CachePolicy::UseExisting
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
