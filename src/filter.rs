//! Boilerplate filter over whole files or arbitrary streams.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::FilterOptions;
use crate::error::FilterError;
use crate::executor::{RunResult, execute};
use crate::patterns::PatternSet;
use crate::progress::ProgressReporter;
use crate::stage::BoilerplateStage;

/// Copy every record of `input` to `output` unless its text starts with one
/// of `patterns`.
///
/// Records are read, decided, and written one at a time, so memory use is
/// bounded by the largest record rather than by the input size.
pub fn run<R, W>(input: R, output: &mut W, patterns: &PatternSet) -> Result<RunResult, FilterError>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut stage = BoilerplateStage::new(patterns);
    let result = execute(input, output, &mut stage)?;

    log::debug!(
        "kept {} records, removed {} of {}",
        result.kept,
        result.removed,
        result.total()
    );
    for (pattern, hits) in stage.hit_summary() {
        log::debug!("{hits:>10}  {pattern}");
    }

    Ok(result)
}

/// Filter the file at `input_path` into `output_path`.
///
/// The output is created or truncated. Path sanity checks are the caller's
/// job, see [`crate::paths::check_paths`].
pub fn filter_file(
    input_path: &Path,
    output_path: &Path,
    patterns: &PatternSet,
    options: &FilterOptions,
) -> Result<RunResult, FilterError> {
    let open_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| FilterError::Open { path, source }
    };

    let input = File::open(input_path).map_err(open_error(input_path))?;
    let total_bytes = input.metadata().map(|m| m.len()).unwrap_or(0);
    let output = File::create(output_path).map_err(open_error(output_path))?;

    let progress = ProgressReporter::new(options.show_progress, total_bytes);
    let reader = BufReader::with_capacity(options.capacity(), progress.wrap_read(input));
    let mut writer = BufWriter::with_capacity(options.capacity(), output);

    let result = run(reader, &mut writer, patterns)?;
    writer.flush()?;
    progress.finish(&result);

    Ok(result)
}
