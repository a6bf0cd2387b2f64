use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use csvframe::{
    CsvReadOptions, CsvWriteOptions, Error, Manifest, Pipeline, TextEncoding, read_csv,
};

#[derive(Parser)]
#[command(
    name = "csvframe",
    version,
    about = "Ingest CSV tables, filter them by key membership, and export the results"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every merge step of a manifest and export each result.
    Run(RunArgs),
    /// Ingest one manifest table and print it as a text table.
    Show(ShowArgs),
}

#[derive(Args, Clone)]
struct RunArgs {
    /// Path to the JSON manifest.
    #[arg(long, short = 'f', value_name = "FILE")]
    manifest: PathBuf,
    /// Directory that merge outputs are written to.
    #[arg(long = "out-dir", value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,
    /// Write UTF-8 instead of ISO-8859-1.
    #[arg(long)]
    utf8: bool,
}

#[derive(Args, Clone)]
struct ShowArgs {
    /// Path to the JSON manifest.
    #[arg(long, short = 'f', value_name = "FILE")]
    manifest: PathBuf,
    /// Zero-based index of the table in the manifest.
    #[arg(long, value_name = "N")]
    table: usize,
}

fn main() {
    // Initialize tracing subscriber to respect RUST_LOG environment variable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        tracing::debug!("csvframe failed: {err:?}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run_pipeline(args),
        Command::Show(args) => run_show(args),
    }
}

fn run_pipeline(args: RunArgs) -> Result<(), Error> {
    let manifest = Manifest::from_path(&args.manifest)?;
    let encoding = if args.utf8 {
        TextEncoding::Utf8
    } else {
        TextEncoding::Latin1
    };
    let write_options = CsvWriteOptions {
        encoding,
        ..Default::default()
    };

    let summaries = Pipeline::new(&manifest)
        .with_out_dir(&args.out_dir)
        .with_write_options(write_options)
        .run()?;

    println!(
        "  {:<6} {:<6} {:<24} {:>10} {:>10}  Output",
        "Left", "Right", "Key", "Rows in", "Rows out"
    );
    for summary in &summaries {
        println!(
            "  {:<6} {:<6} {:<24} {:>10} {:>10}  {}",
            summary.left,
            summary.right,
            summary.key_column,
            summary.left_rows,
            summary.rows_written,
            summary.output.display()
        );
    }
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<(), Error> {
    let manifest = Manifest::from_path(&args.manifest)?;
    let spec = manifest.table(args.table)?;
    let store = read_csv(&spec.path, &spec.schema()?, &CsvReadOptions::default())?;
    println!("{}", store.pretty_format()?);
    Ok(())
}
