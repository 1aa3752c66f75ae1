use crate::reports;
use clap::Args;
use gesture_grid::config::OutputFormat;
use gesture_grid::export::{write_curves_csv, write_curves_json};
use gesture_grid::{Grid, GridResult};
use std::io;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct CurveArgs {
    #[arg(required = true)]
    pub words: Vec<String>,

    #[arg(short, long, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

pub fn run(args: CurveArgs, grid: &Grid) -> GridResult<()> {
    let curves: Vec<_> = args
        .words
        .iter()
        .map(|w| grid.get_centered_curve(w))
        .collect();

    for (word, curve) in args.words.iter().zip(&curves) {
        let total = word.chars().count();
        if curve.len() < total {
            warn!(
                "⚠️  '{}': {} of {} characters have no hitbox",
                word,
                total - curve.len(),
                total
            );
        }
    }

    match args.format {
        OutputFormat::Json => {
            write_curves_json(io::stdout().lock(), &args.words, &curves)?;
            println!();
        }
        OutputFormat::Csv => write_curves_csv(io::stdout().lock(), &args.words, &curves)?,
        OutputFormat::Table => {
            for (word, curve) in args.words.iter().zip(&curves) {
                reports::print_curve_table(word, curve);
            }
        }
    }
    Ok(())
}
