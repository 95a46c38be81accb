use std::{
    fmt,
    fs::File,
    io::{
        BufReader,
        Write,
    },
    path::Path,
    time::{
        Duration,
        Instant,
    },
};

use tracing::{
    info,
    instrument,
};

use crate::{
    config::Config,
    dictionary::{
        load_dictionary,
        new_dictionary,
    },
    errs::Error,
    tokens::Tokens,
};

/// Timings for one dictionary build and check at a given max height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSample {
    pub max_height: usize,
    pub words: usize,
    pub tokens: usize,
    pub insert: Duration,
    pub search: Duration,
}

impl fmt::Display for ProfileSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[PROFILER]<operation=INSERT, max_height={}>: Completed in {:.6} seconds.",
            self.max_height,
            self.insert.as_secs_f64()
        )?;
        write!(
            f,
            "[PROFILER]<operation=SEARCH, max_height={}>: Completed in {:.6} seconds.",
            self.max_height,
            self.search.as_secs_f64()
        )
    }
}

/// Time loading `dictionary_path` and looking up every word of `text_path`,
/// once per entry of `max_heights`.
///
/// The text is tokenized once up front so only the skiplist work is measured.
/// Each height gets a fresh dictionary, read again from disk.
#[instrument(level = "debug", skip(max_heights))]
pub fn profile(
    dictionary_path: &Path,
    text_path: &Path,
    max_heights: &[usize],
) -> Result<Vec<ProfileSample>, Error> {
    let words = Tokens::new(File::open(text_path)?).collect::<Result<Vec<_>, _>>()?;
    info!(tokens = words.len(), "text loaded");

    let mut samples = Vec::with_capacity(max_heights.len());
    for &max_height in max_heights {
        let mut dictionary = new_dictionary(&Config::new(max_height)?)?;
        let reader = BufReader::new(File::open(dictionary_path)?);

        let start = Instant::now();
        let loaded = load_dictionary(reader, &mut dictionary)?;
        let insert = start.elapsed();

        let start = Instant::now();
        for word in &words {
            // keep the lookup from being optimized away
            std::hint::black_box(dictionary.search(word.as_str()));
        }
        let search = start.elapsed();

        info!(max_height, ?insert, ?search, "profiled");
        samples.push(ProfileSample {
            max_height,
            words: loaded,
            tokens: words.len(),
            insert,
            search,
        });
    }

    Ok(samples)
}

/// Same as [`profile`], but narrates setup, each sample and shutdown to `out`
/// as `[PROFILER]` lines.
pub fn report_profile<W: Write>(
    mut out: W,
    dictionary_path: &Path,
    text_path: &Path,
    max_heights: &[usize],
) -> Result<Vec<ProfileSample>, Error> {
    writeln!(out, "[PROFILER]: Initializing profiler...")?;
    writeln!(out, "[PROFILER]: Initializing text...")?;
    let samples = profile(dictionary_path, text_path, max_heights)?;
    writeln!(out, "[PROFILER]: Profiler initialized.")?;

    writeln!(out, "[PROFILER]: Processing...")?;
    for sample in &samples {
        writeln!(out, "{}", sample)?;
    }

    writeln!(out, "[PROFILER]: Shutting down profiler...")?;
    writeln!(out, "[PROFILER]: Deallocating text...")?;
    writeln!(out, "[PROFILER]: Profiler shut down.")?;
    out.flush()?;
    Ok(samples)
}
