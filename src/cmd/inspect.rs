use crate::reports;
use clap::Args;
use gesture_grid::config::OutputFormat;
use gesture_grid::{Grid, GridResult, Hitbox};
use serde::Serialize;
use std::io;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[arg(short, long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct LabeledHitbox<'a> {
    label: char,
    #[serde(flatten)]
    hitbox: &'a Hitbox,
}

pub fn run(args: InspectArgs, grid: &Grid) -> GridResult<()> {
    match args.format {
        OutputFormat::Table => reports::print_hitbox_table(grid),
        OutputFormat::Json => {
            let entries: Vec<LabeledHitbox> = grid
                .iter()
                .map(|(label, hitbox)| LabeledHitbox { label, hitbox })
                .collect();
            serde_json::to_writer_pretty(io::stdout().lock(), &entries)?;
            println!();
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(io::stdout().lock());
            wtr.write_record(["label", "left", "top", "right", "bottom", "cx", "cy"])?;
            for (label, hb) in grid.iter() {
                wtr.write_record([
                    label.to_string(),
                    hb.left().to_string(),
                    hb.top().to_string(),
                    hb.right().to_string(),
                    hb.bottom().to_string(),
                    hb.cx().to_string(),
                    hb.cy().to_string(),
                ])?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}
