use clap::Args;
use gesture_grid::{Grid, GridResult};
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub x: f32,

    #[arg(long, allow_negative_numbers = true)]
    pub y: f32,
}

pub fn run(args: LookupArgs, grid: &Grid) -> GridResult<()> {
    let label = grid.get_nearest_hitbox(args.x, args.y);
    debug!(x = args.x, y = args.y, %label, "Resolved point");
    println!("{}", label);
    Ok(())
}
