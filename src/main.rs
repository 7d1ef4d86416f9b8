//! InsightSnap - AI micro-courses in your terminal
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use insightsnap::common::prelude::*;
use insightsnap::i18n::{self, Language};

/// InsightSnap - AI micro-courses in your terminal
#[derive(Parser, Debug)]
#[command(name = "insightsnap")]
#[command(about = "Generate and browse AI micro-courses (3 cards + 1 quiz)", long_about = None)]
struct Args {
    /// Topic to generate immediately on startup
    #[arg(value_name = "TOPIC")]
    topic: Option<String>,

    /// Interface and generation language (zh-CN or en)
    #[arg(long, value_parser = clap::value_parser!(Language))]
    language: Option<Language>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match insightsnap::run(args.topic, args.language).await {
        Err(Error::ApiKeyMissing) => {
            let language = args.language.unwrap_or_else(i18n::detect_system_language);
            eprintln!("{}", language.translations().api_key_not_set);
            std::process::exit(1);
        }
        result => result,
    }
}
