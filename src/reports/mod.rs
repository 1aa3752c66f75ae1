use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gesture_grid::{GestureCurve, Grid};

pub fn print_hitbox_table(grid: &Grid) {
    println!("\nHitboxes: {}", grid.len());
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Label").add_attribute(Attribute::Bold),
        Cell::new("Left"),
        Cell::new("Top"),
        Cell::new("Right"),
        Cell::new("Bottom"),
        Cell::new("W"),
        Cell::new("H"),
        Cell::new("Center").fg(Color::Cyan),
    ]);

    for (label, hb) in grid.iter() {
        table.add_row(vec![
            Cell::new(label).set_alignment(CellAlignment::Center),
            Cell::new(hb.left()).set_alignment(CellAlignment::Right),
            Cell::new(hb.top()).set_alignment(CellAlignment::Right),
            Cell::new(hb.right()).set_alignment(CellAlignment::Right),
            Cell::new(hb.bottom()).set_alignment(CellAlignment::Right),
            Cell::new(hb.width()).set_alignment(CellAlignment::Right),
            Cell::new(hb.height()).set_alignment(CellAlignment::Right),
            Cell::new(format!("({:.1}, {:.1})", hb.cx(), hb.cy())),
        ]);
    }
    println!("{}", table);
}

pub fn print_curve_table(word: &str, curve: &GestureCurve) {
    println!("\nWord: {}", word);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["#", "X", "Y"]);

    for (i, [x, y]) in curve.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(format!("{:.1}", x)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", y)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_batch_summary(words: &[String], curves: &[GestureCurve]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Points"),
        Cell::new("Dropped").fg(Color::Red),
    ]);

    let mut dropped_total = 0;
    for (word, curve) in words.iter().zip(curves) {
        let dropped = word.chars().count() - curve.len();
        dropped_total += dropped;
        table.add_row(vec![
            Cell::new(word),
            Cell::new(curve.len()).set_alignment(CellAlignment::Right),
            Cell::new(dropped).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
    println!(
        "{} words, {} characters without a hitbox",
        words.len(),
        dropped_total
    );
}
