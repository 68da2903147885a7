// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In memory [`Write`] sink for tests.

use std::{io::{Error, ErrorKind, Result, Write},
          sync::{Arc, Mutex}};

use strip_ansi_escapes::strip;

/// You can safely clone this struct, since it only contains [`Arc`]s. The inner buffer
/// will not be cloned, just the [`Arc`] will be cloned.
#[derive(Debug, Clone, Default)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
    writes: Arc<Mutex<usize>>,
    flushes: Arc<Mutex<usize>>,
    failing: bool,
}

impl StdoutMock {
    pub fn new() -> Self { Self::default() }

    /// Every write fails w/ [`ErrorKind::BrokenPipe`].
    pub fn new_failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn get_copy_of_buffer_as_string(&self) -> String {
        let buffer_data = self.buffer.lock().unwrap();
        String::from_utf8(buffer_data.clone()).expect("utf8")
    }

    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let buffer_data = self.buffer.lock().unwrap();
        String::from_utf8(strip(buffer_data.as_slice())).expect("utf8")
    }

    pub fn write_count(&self) -> usize { *self.writes.lock().unwrap() }

    pub fn flush_count(&self) -> usize { *self.flushes.lock().unwrap() }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        if self.failing {
            return Err(Error::from(ErrorKind::BrokenPipe));
        }
        self.buffer.lock().unwrap().extend_from_slice(buf);
        *self.writes.lock().unwrap() += 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        *self.flushes.lock().unwrap() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_stdout_mock_no_strip_ansi() {
        let mut stdout_mock = StdoutMock::default();
        let stdout_mock_clone = stdout_mock.clone(); // Points to the same inner value.

        let normal_text = "hello world";
        stdout_mock.write_all(normal_text.as_bytes()).unwrap();
        stdout_mock.flush().unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), normal_text);
        assert_eq!(stdout_mock_clone.get_copy_of_buffer_as_string(), normal_text);
        assert_eq!(stdout_mock_clone.flush_count(), 1);
    }

    #[test]
    fn test_stdout_mock_strip_ansi() {
        let mut stdout_mock = StdoutMock::default();

        let normal_text = "hello world";
        let red_text = format!("\x1b[31m{normal_text}\x1b[0m");
        stdout_mock.write_all(red_text.as_bytes()).unwrap();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string_strip_ansi(),
            normal_text
        );
    }
}
