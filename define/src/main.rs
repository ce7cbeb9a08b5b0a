use std::process::ExitCode;

use clap::Parser;
use dictionary::{Dictionary, DictionaryConfig};
use tracing_subscriber::EnvFilter;
use utilities::{input, split_command};

mod utilities;

#[derive(Parser)]
#[command(name = "define")]
#[command(about = "Look up word definitions in the free dictionary API")]
#[command(version)]
struct Args {
    /// Word to look up, starts an interactive prompt when omitted
    #[arg(value_name = "WORD")]
    words: Vec<String>,

    /// Dictionary language code [default: $DICTIONARY_LANGUAGE or en]
    #[arg(short, long, value_name = "CODE")]
    language: Option<String>,

    /// Print the structured first entry as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Give up on a request after this many seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let mut config = DictionaryConfig::from_env();
    if let Some(language) = args.language {
        config.language = language;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_seconds = Some(timeout);
    }
    let dict = Dictionary::with_config(&config)?;

    let word = args.words.join(" ");
    if word.trim().is_empty() {
        interactive(&dict, config.language).await?;
        return Ok(ExitCode::SUCCESS);
    }
    if define_word(&dict, word.trim(), &config.language, args.json).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn interactive(dict: &Dictionary, mut language: String) -> anyhow::Result<()> {
    tracing::debug!(%language, "starting interactive prompt");
    while let Some(line) = input(">> ")? {
        let Some((command, argument)) = split_command(&line) else {
            continue;
        };
        match &command[..] {
            "exit" | "leave" | "quit" | "e" | "q" | "l" => {
                break;
            }
            "define" | "find" => {
                define_word(dict, &argument, &language, false).await;
            }
            "json" => {
                define_word(dict, &argument, &language, true).await;
            }
            "language" => {
                if argument.is_empty() {
                    println!("Current language is {language}.");
                } else {
                    language = argument;
                    println!("Switched to the '{language}' dictionary.");
                }
            }
            _ => {
                define_word(dict, line.trim(), &language, false).await;
            }
        }
    }
    Ok(())
}

/// Prints the lookup result, returns whether the lookup succeeded.
async fn define_word(dict: &Dictionary, word: &str, language: &str, json: bool) -> bool {
    if word.is_empty() {
        println!("Please enter a word to look up.");
        return false;
    }
    match lookup(dict, word, language, json).await {
        Ok(output) => {
            println!("{output}");
            true
        }
        Err(error) => {
            eprintln!("Failed to look up '{word}': {error}");
            false
        }
    }
}

async fn lookup(dict: &Dictionary, word: &str, language: &str, json: bool) -> anyhow::Result<String> {
    if json {
        let entry = dict.define_structured(word, language).await?;
        Ok(serde_json::to_string_pretty(&entry)?)
    } else {
        Ok(dict.define(word, language).await?)
    }
}
