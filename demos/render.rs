//! Render Example - boxes as plain rows and drawn in place
//!
//! Run with: cargo run --example render

use std::io::stdout;

use crossterm::{cursor::MoveToNextLine, execute, terminal::{Clear, ClearType}};
use spark_rect::{draw, BorderStyle, Edges, Rect, ValidationError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== spark-rect Render Example ===\n");

    // Plain rows
    let mut card = Rect::new()
        .with_dim((22, 3))
        .and_then(|r| r.with_border(Edges::ALL))
        .and_then(|r| r.with_padding((0, 0, 1, 1)))?;
    card.set_border_style(BorderStyle::Rounded);

    for row in card.render(&["spark-rect", "", "box layout for terminals"]) {
        println!("{row}");
    }

    // Every alignment on the same content
    println!();
    for (name, align) in [
        ("top-left", Edges::TOP | Edges::LEFT),
        ("center", Edges::empty()),
        ("bottom-right", Edges::BOTTOM | Edges::RIGHT),
    ] {
        let rect = aligned(align)?;
        println!("{name}:");
        for row in rect.render(&["hi"]) {
            println!("{row}");
        }
    }

    // Draw at an absolute position
    println!("\nPress Enter to draw in place...");
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    let mut out = stdout();
    execute!(out, Clear(ClearType::All))?;
    let placed = aligned(Edges::empty())?.with_pos((10, 4))?;
    draw(&placed, &["placed at (10, 4)"], &mut out)?;
    execute!(out, MoveToNextLine(2))?;

    Ok(())
}

fn aligned(align: Edges) -> Result<Rect, ValidationError> {
    Rect::new()
        .with_dim((19, 3))
        .and_then(|r| r.with_border(Edges::ALL))
        .and_then(|r| r.with_align(align))
}
