// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Text styles, three ways: typed values, styled text, and compile time literals.
//!
//! Run w/ `cargo run --example styles`. Trace output goes to stderr, so redirect it to
//! see only the styled text, eg: `cargo run --example styles 2>/dev/null`.

use std::io::{Write, stdout};

use miette::IntoDiagnostic;
use r3bl_ansi_csi::{CsiStyledText, LineEnding, RESET, WriteOptions, WriteToBuf,
                    literal, text, write_all_to};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut stdout = stdout().lock();

    // Typed values, written back to back.
    write_all_to(&mut stdout, &[text::BOLD, text::ITALIC, text::UNDERLINE, text::BLINK])
        .into_diagnostic()?;
    writeln!(stdout, "Hello, world! Nice to see you!").into_diagnostic()?;
    RESET.write_to(&mut stdout).into_diagnostic()?;

    // Styled text, w/ a reset added after the text.
    CsiStyledText::new("Double underline, overline, and strike.")
        .with(text::DOUBLE_UNDERLINE)
        .with(text::OVERLINE)
        .with(text::STRIKE)
        .write_to_with(&mut stdout, LineEnding::Lf)
        .into_diagnostic()?;

    // Undo one style and keep the rest.
    CsiStyledText::new("Faint and inverted, ")
        .with(text::FAINT)
        .with(text::INVERT)
        .without_reset()
        .write_to(&mut stdout)
        .into_diagnostic()?;
    CsiStyledText::new("then only faint.")
        .with(text::un::INVERT)
        .write_to_with(&mut stdout, WriteOptions::from(LineEnding::Lf).with_flush())
        .into_diagnostic()?;

    // The same bytes as literals.
    writeln!(
        stdout,
        "{}{}{}{}Hello, world! Nice to see you!{}",
        literal::BOLD,
        literal::ITALIC,
        literal::UNDERLINE,
        literal::BLINK,
        literal::RESET
    )
    .into_diagnostic()?;

    Ok(())
}
