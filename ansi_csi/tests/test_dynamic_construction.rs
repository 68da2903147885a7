// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{self, Write},
          sync::{Arc, Mutex}};

use miette::Diagnostic;
use pretty_assertions::assert_eq;
use r3bl_ansi_csi::{CatalogError, CommonResult, Csi, CsiShapeError, WriteToBuf,
                    try_lookup};

/// Parses `"row;col"` the way a caller holding text from a config file would.
fn move_from_config(value: &str) -> CommonResult<Csi<2>> {
    let params: Vec<u16> = value
        .split(';')
        .map(|it| it.trim().parse::<u16>().unwrap_or(u16::MAX))
        .collect();
    Ok(Csi::try_from_wide(&params, 'H')?)
}

#[test]
fn test_config_value_builds_sequence() {
    let seq = move_from_config("3;7").unwrap();
    assert_eq!(seq.render(), "\x1b[3;7H");
}

#[test]
fn test_config_value_wrong_arity_is_a_diagnostic() {
    let report = move_from_config("3;7;9").unwrap_err();
    let error = report.downcast_ref::<CsiShapeError>().unwrap();
    assert_eq!(
        error,
        &CsiShapeError::ArityMismatch {
            expected: 2,
            actual: 3,
            terminator: 'H',
        }
    );
    assert_eq!(
        error.code().map(|it| it.to_string()),
        Some("r3bl_ansi_csi::shape::arity_mismatch".to_string())
    );
}

#[test]
fn test_config_value_out_of_range_is_a_diagnostic() {
    let report = move_from_config("300;7").unwrap_err();
    assert_eq!(
        report.to_string(),
        "Parameter 0 of CSI sequence 'H' is 300, which does not fit in a byte"
    );
}

#[test]
fn test_try_lookup_unknown_name() {
    let report = try_lookup("text::sparkle").unwrap_err();
    assert!(report.downcast_ref::<CatalogError>().is_some());
    assert!(report.help().is_some());
}

/// Collects formatted log lines, so a test can assert on what was logged.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

impl CapturedLogs {
    fn get_copy_as_string(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[test]
fn test_shape_errors_are_logged() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert!(Csi::<1>::try_from_params(&[], 'A').is_err());
        assert!(Csi::<1>::try_from_wide(&[300], 'B').is_err());
    });

    let output = logs.get_copy_as_string();
    assert!(output.contains("DEBUG"), "{output}");
    assert!(output.contains("rejected CSI construction"), "{output}");
    assert!(
        output.contains("ArityMismatch { expected: 1, actual: 0, terminator: 'A' }"),
        "{output}"
    );
    assert!(
        output.contains("ParamOutOfRange { index: 0, value: 300, terminator: 'B' }"),
        "{output}"
    );
}

#[test]
fn test_valid_construction_logs_nothing() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        assert!(Csi::<2>::try_from_params(&[3, 7], 'H').is_ok());
    });

    assert_eq!(logs.get_copy_as_string(), "");
}
