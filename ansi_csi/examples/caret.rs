// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Caret movement. Clears the screen first.
//!
//! Run w/ `cargo run --example caret`.

use std::io::{Write, stdout};

use miette::IntoDiagnostic;
use r3bl_ansi_csi::{AnyCsi, WriteToBuf, cup, cursor, erase, write_all_to};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut stdout = stdout().lock();

    let clear: [AnyCsi; 2] = [
        erase::all(erase::EraseDisplayMode::Whole).into(),
        cursor::home().into(),
    ];
    write_all_to(&mut stdout, &clear).into_diagnostic()?;

    writeln!(stdout, "Hello, world!").into_diagnostic()?;
    cursor::up(1).write_to(&mut stdout).into_diagnostic()?;
    writeln!(stdout, "!dlrow ,olleH").into_diagnostic()?;

    write!(stdout, "{}* (15, 15)", cursor::move_to(15, 15)).into_diagnostic()?;
    write!(stdout, "{}{}* (10, 30)", cursor::save(), cup!(10, 30)).into_diagnostic()?;
    write!(stdout, "{}<- back", cursor::restore()).into_diagnostic()?;

    cursor::move_to(17, 1).write_to(&mut stdout).into_diagnostic()?;
    stdout.flush().into_diagnostic()?;

    Ok(())
}
