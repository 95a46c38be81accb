// Copyright (c) Sienna Satterwhite, LexiSkip Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::{
    collections::TryReserveError,
    io,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("os i/o error: {0}")]
    IoError(#[from] io::Error),
    #[error("max height must be at least 1, got {0}")]
    InvalidMaxHeight(usize),
    #[error("level generator drew {level} levels, expected 1..={max_height}")]
    InvalidLevel { level: usize, max_height: usize },
    #[error("promotion probability must be in (0, 1), got {0}")]
    InvalidProbability(f64),
    #[error("unable to allocate a skiplist node")]
    AllocationFailed(#[from] TryReserveError),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("invalid argument for {name}: {value:?}")]
    InvalidArgument { name: &'static str, value: String },
}
