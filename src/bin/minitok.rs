use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::Env;
use log::info;
use minitok::config::{CorpusConfig, VocabConfig};
use minitok::corpus::load_text_corpus;
use minitok::vocab::{build_vocabulary, TokenId};
use minitok::{serialization, MiniTokenizer};
use serde_json::json;

const DEFAULT_OUTPUT: &str = "vocab.json";

#[derive(Parser, Debug)]
#[command(author, version, about = "Word-level tokenizer toolkit", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a vocabulary from text inputs
    Train(TrainArgs),
    /// Encode text files with a built vocabulary
    Encode(EncodeArgs),
    /// Decode token ids back into text
    Decode(DecodeArgs),
    /// Inspect vocabulary metadata
    Info(InfoArgs),
}

#[derive(Args, Debug)]
struct TrainArgs {
    /// Files or directories to ingest
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output path for vocab.json
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Override the unknown-token spelling
    #[arg(long, value_name = "TOKEN")]
    unk_token: Option<String>,

    /// Override the document separator token
    #[arg(long, value_name = "TOKEN")]
    separator: Option<String>,

    /// Disable recursive directory traversal
    #[arg(long)]
    no_recursive: bool,

    /// Follow symlinks during traversal
    #[arg(long)]
    follow_symlinks: bool,

    /// Emit pretty JSON
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Vocabulary JSON to load
    #[arg(short = 'm', long, value_name = "PATH")]
    vocab: PathBuf,

    /// Text inputs to encode
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Emit JSON lines instead of human-readable output
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Vocabulary JSON to load
    #[arg(short = 'm', long, value_name = "PATH")]
    vocab: PathBuf,

    /// Path to whitespace separated token ids
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Token ids to decode when --input is omitted
    #[arg(value_name = "ID", required_unless_present = "input")]
    tokens: Vec<TokenId>,

    /// Output file for decoded text (defaults to stdout)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InfoArgs {
    /// Vocabulary JSON to inspect
    #[arg(short = 'm', long, value_name = "PATH")]
    vocab: PathBuf,

    /// Emit machine-readable JSON summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Train(args) => run_train(args),
        Commands::Encode(args) => run_encode(args),
        Commands::Decode(args) => run_decode(args),
        Commands::Info(args) => run_info(args),
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    use log::LevelFilter;

    let level = if quiet > 0 {
        match quiet {
            1 => LevelFilter::Warn,
            _ => LevelFilter::Error,
        }
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    builder.filter_level(level);
    let _ = builder.try_init();
}

fn run_train(args: TrainArgs) -> Result<()> {
    let mut vocab_cfg = VocabConfig::builder();
    if let Some(token) = args.unk_token {
        vocab_cfg = vocab_cfg.unk_token(token);
    }
    let vocab_cfg = vocab_cfg.build()?;

    let mut corpus_cfg = CorpusConfig::builder()
        .recursive(!args.no_recursive)
        .follow_symlinks(args.follow_symlinks);
    if let Some(separator) = args.separator {
        corpus_cfg = corpus_cfg.separator(separator);
    }
    let corpus_cfg = corpus_cfg.build()?;

    let corpus = load_text_corpus(&args.inputs, &corpus_cfg)
        .with_context(|| "failed to load text corpus")?;
    info!("loaded corpus of {} chars", corpus.chars().count());

    let vocab = build_vocabulary(&corpus, &vocab_cfg);
    serialization::save_vocabulary(&vocab, &args.output, args.pretty)
        .with_context(|| format!("failed to save vocabulary to {}", args.output.display()))?;

    info!(
        "vocabulary built: entries={} unk_id={}",
        vocab.len(),
        vocab.unk_id()
    );
    println!(
        "wrote vocabulary with {} entries to {}",
        vocab.len(),
        args.output.display()
    );

    Ok(())
}

fn run_encode(args: EncodeArgs) -> Result<()> {
    let vocab = serialization::load_vocabulary(&args.vocab)
        .with_context(|| format!("failed to load vocabulary from {}", args.vocab.display()))?;
    let codec = MiniTokenizer::new(vocab);

    for path in &args.inputs {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let tokens = codec.encode(&text);

        if args.json {
            let record = json!({
                "path": path.display().to_string(),
                "tokens": tokens
            });
            println!("{}", serde_json::to_string(&record)?);
        } else {
            print!("{}:\t", path.display());
            for (idx, token) in tokens.iter().enumerate() {
                if idx > 0 {
                    print!(" ");
                }
                print!("{token}");
            }
            println!();
        }
    }

    Ok(())
}

fn run_decode(args: DecodeArgs) -> Result<()> {
    let vocab = serialization::load_vocabulary(&args.vocab)
        .with_context(|| format!("failed to load vocabulary from {}", args.vocab.display()))?;
    let codec = MiniTokenizer::new(vocab);

    let tokens = if let Some(input_path) = &args.input {
        let contents = fs::read_to_string(input_path)
            .with_context(|| format!("failed to read {}", input_path.display()))?;
        parse_token_list(&contents)?
    } else {
        args.tokens
    };

    let text = codec.decode(&tokens)?;

    if let Some(path) = &args.output {
        let mut file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(text.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {} bytes to {}", text.len(), path.display());
    } else {
        io::stdout().write_all(text.as_bytes())?;
    }

    Ok(())
}

fn run_info(args: InfoArgs) -> Result<()> {
    let vocab = serialization::load_vocabulary(&args.vocab)
        .with_context(|| format!("failed to load vocabulary from {}", args.vocab.display()))?;

    let summary = json!({
        "path": args.vocab.display().to_string(),
        "vocab_size": vocab.len(),
        "unk_token": vocab.unk_token(),
        "unk_id": vocab.unk_id(),
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Vocab size: {}", vocab.len());
        println!("Unk token : {}", vocab.unk_token());
        println!("Unk id    : {}", vocab.unk_id());
    }

    Ok(())
}

fn parse_token_list(contents: &str) -> Result<Vec<TokenId>> {
    contents
        .split_whitespace()
        .map(|chunk| {
            chunk
                .parse::<TokenId>()
                .with_context(|| format!("invalid token id {chunk:?}"))
        })
        .collect()
}
