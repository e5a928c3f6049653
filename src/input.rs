// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Reading puzzle input files

use std::error::Error;
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// The input file that solutions read when no path is given
pub const DEFAULT_INPUT: &str = "input.txt";

/// The input file that solutions read when asked to run against the puzzle's sample
pub const SAMPLE_INPUT: &str = "sample.txt";

#[derive(Debug)]
/// An error occured while reading an input file
pub enum InputError {
    /// The file could not be opened
    Open {
        /// the path that was requested
        path: PathBuf,
        /// the underlying error
        source: io::Error,
    },
    /// The file was opened, but reading a line failed
    Read {
        /// the path that was being read
        path: PathBuf,
        /// 0-based number of the line that could not be read
        line: usize,
        /// the underlying error
        source: io::Error,
    },
}

impl Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Open { path, source } => {
                write!(f, "unable to open file {}: {source}", path.display())
            }
            InputError::Read { path, line, source } => write!(
                f,
                "unable to read line {} of {}: {source}",
                line + 1,
                path.display()
            ),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::Open { source, .. } | InputError::Read { source, .. } => Some(source),
        }
    }
}

/// Choose which file a solution reads: `path` if one was given, otherwise [`SAMPLE_INPUT`] when
/// `sample` is set and [`DEFAULT_INPUT`] when it isn't.
pub fn input_path(path: Option<PathBuf>, sample: bool) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from(if sample { SAMPLE_INPUT } else { DEFAULT_INPUT }))
}

/// Read the file at `path` into a [`Vec`] of its lines, in order.
///
/// Line terminators (`\n` or `\r\n`) are stripped. A trailing newline at the end of the file does
/// not produce an extra empty line.
pub fn read_file_lines(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = BufReader::new(file)
        .lines()
        .enumerate()
        .map(|(line, result)| {
            result.map_err(|source| InputError::Read {
                path: path.to_path_buf(),
                line,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(path = %path.display(), lines = lines.len(), "read input file");
    Ok(lines)
}
