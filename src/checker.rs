// Copyright (c) Sienna Satterwhite, LexiSkip Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::{
    fs::File,
    io::{
        BufReader,
        Read,
        Write,
    },
    path::Path,
};

use tracing::{
    info,
    instrument,
};

use crate::{
    comparator::Comparator,
    config::Config,
    dictionary::{
        load_dictionary,
        new_dictionary,
    },
    errs::Error,
    skiplist::OrderedSkipList,
    tokens::Tokens,
};

/// Every word of `text` missing from `dictionary`, in the order they appear.
/// A misspelling that appears twice is reported twice.
#[instrument(level = "debug", skip_all)]
pub fn find_errors<R, C, G>(
    dictionary: &OrderedSkipList<String, C, G>,
    text: R,
) -> Result<Vec<String>, Error>
where
    R: Read,
    C: Comparator<str>,
{
    let mut errors = Vec::new();
    let mut checked = 0usize;
    for token in Tokens::new(text) {
        let token = token?;
        checked += 1;
        if !dictionary.contains(token.as_str()) {
            errors.push(token);
        }
    }

    info!(checked, errors = errors.len(), "text checked");
    Ok(errors)
}

/// Write the misspelled words as a human readable report.
pub fn write_report<W: Write>(mut out: W, errors: &[String]) -> Result<(), Error> {
    writeln!(out, "Errors found:")?;
    for word in errors {
        writeln!(out, "  - {}", word)?;
    }
    out.flush()?;
    Ok(())
}

/// Load the dictionary at `dictionary_path` and return the words of
/// `text_path` it doesn't know about.
#[instrument(level = "debug", skip(config))]
pub fn check_files(
    dictionary_path: &Path,
    text_path: &Path,
    config: &Config,
) -> Result<Vec<String>, Error> {
    let dictionary_file = BufReader::new(File::open(dictionary_path)?);
    let text_file = File::open(text_path)?;

    let mut dictionary = new_dictionary(config)?;
    load_dictionary(dictionary_file, &mut dictionary)?;
    let errors = find_errors(&dictionary, text_file)?;
    dictionary.clear();

    Ok(errors)
}

/// Same as [`check_files`], but narrates each phase to `out` and finishes with
/// the [`write_report`] output.
#[instrument(level = "debug", skip(out, config))]
pub fn report_files<W: Write>(
    mut out: W,
    dictionary_path: &Path,
    text_path: &Path,
    config: &Config,
) -> Result<Vec<String>, Error> {
    let dictionary_file = BufReader::new(File::open(dictionary_path)?);
    let text_file = File::open(text_path)?;
    let mut dictionary = new_dictionary(config)?;

    writeln!(out, "Loading dictionary...")?;
    load_dictionary(dictionary_file, &mut dictionary)?;
    writeln!(out, "Finding errors...")?;
    let errors = find_errors(&dictionary, text_file)?;
    write_report(&mut out, &errors)?;
    dictionary.clear();

    Ok(errors)
}
