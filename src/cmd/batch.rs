use crate::reports;
use clap::Args;
use gesture_grid::config::OutputFormat;
use gesture_grid::export::{write_curves_csv, write_curves_json};
use gesture_grid::{Grid, GridResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Word list, one word per line
    #[arg(short, long)]
    pub words: PathBuf,

    /// Destination file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

fn read_words<R: BufRead>(reader: R) -> GridResult<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

pub fn run(args: BatchArgs, grid: &Grid) -> GridResult<()> {
    let words = read_words(BufReader::new(File::open(&args.words)?))?;
    info!("📖 Loaded {} words from {}", words.len(), args.words.display());

    let start = Instant::now();
    let curves = grid.get_centered_curves(&words);
    info!("✅ Converted {} words in {:.2?}", words.len(), start.elapsed());

    if args.format == OutputFormat::Table {
        if let Some(path) = &args.output {
            warn!(
                "⚠️  Table format prints a summary to stdout; ignoring --output {}",
                path.display()
            );
        }
        reports::print_batch_summary(&words, &curves);
        return Ok(());
    }

    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Json => write_curves_json(&mut sink, &words, &curves)?,
        _ => write_curves_csv(&mut sink, &words, &curves)?,
    }
    sink.flush()?;

    if let Some(path) = &args.output {
        info!("💾 Wrote curves to {}", path.display());
    }
    Ok(())
}
