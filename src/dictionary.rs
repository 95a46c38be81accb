// Copyright (c) Sienna Satterwhite, LexiSkip Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::io::BufRead;

use tracing::{
    info,
    instrument,
};

use crate::{
    comparator::{
        CaseInsensitive,
        Comparator,
    },
    config::Config,
    errs::Error,
    skiplist::{
        LevelGenerator,
        OrderedSkipList,
    },
};

/// A word list where lookups ignore ASCII case.
pub type Dictionary = OrderedSkipList<String, CaseInsensitive>;

/// Create an empty [`Dictionary`] shaped by `config`.
pub fn new_dictionary(config: &Config) -> Result<Dictionary, Error> {
    match config.seed() {
        | Some(seed) => Dictionary::with_seed(config.max_height(), CaseInsensitive, seed),
        | None => Dictionary::new(config.max_height(), CaseInsensitive),
    }
}

/// Read one word per line from `reader` into `list`, returning how many words
/// were inserted.
///
/// The line terminator (`\n` or `\r\n`) is stripped and blank lines are
/// skipped. Every word is inserted as its own `String`. Bytes that aren't
/// valid UTF-8 are replaced rather than failing the whole load.
#[instrument(level = "debug", skip_all)]
pub fn load_dictionary<R, C, G>(
    mut reader: R,
    list: &mut OrderedSkipList<String, C, G>,
) -> Result<usize, Error>
where
    R: BufRead,
    C: Comparator<String>,
    G: LevelGenerator,
{
    let mut buf = Vec::new();
    let mut loaded = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let mut line = buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
        if line.is_empty() {
            continue;
        }

        list.insert(String::from_utf8_lossy(line).into_owned())?;
        loaded += 1;
    }

    info!(loaded, top_level = list.top_level(), "dictionary loaded");
    Ok(loaded)
}
