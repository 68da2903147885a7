// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Foreground, background, and underline colors.
//!
//! Run w/ `cargo run --example colors`.

use std::io::{Write, stdout};

use miette::IntoDiagnostic;
use r3bl_ansi_csi::{CsiStyledText, LineEnding, RESET, bg, bg_rgb, fg, lookup, styled,
                    text, try_lookup, underline};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut stdout = stdout().lock();

    styled("Red on white", fg::RED)
        .with(bg::WHITE)
        .write_to_with(&mut stdout, LineEnding::Lf)
        .into_diagnostic()?;
    styled("Bright green", fg::bright::GREEN)
        .write_to_with(&mut stdout, LineEnding::Lf)
        .into_diagnostic()?;
    styled("RGB background", bg::rgb(123, 42, 98))
        .write_to_with(&mut stdout, LineEnding::Lf)
        .into_diagnostic()?;
    styled("Curly pink underline", text::UNDERLINE)
        .with(underline::rgb(255, 105, 180))
        .write_to_with(&mut stdout, LineEnding::Lf)
        .into_diagnostic()?;

    // The 256 color palette, 16 swatches per row.
    for row in 0..16_u8 {
        for col in 0..16_u8 {
            let index = row * 16 + col;
            write!(stdout, "{}{index:>4}", bg::set(index)).into_diagnostic()?;
        }
        writeln!(stdout, "{}", bg::DEFAULT).into_diagnostic()?;
    }

    // Picked by name, eg: from a config file.
    let from_config = ["fg::bright::magenta", "text::bold"];
    let mut line = CsiStyledText::new("Styled from names");
    for name in from_config {
        line = line.with(try_lookup(name)?);
    }
    line.println();

    if lookup("fg::purple").is_none() {
        println!("{}no purple here{RESET}", bg_rgb!(40, 40, 40));
    }

    Ok(())
}
