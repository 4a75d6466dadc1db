//! Command implementations for the tokdist CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::debug;

use crate::cli::args::TokdistArgs;
use crate::distance::TokenAwareEditDistance;
use crate::error::{Result, TokdistError};

/// Execute the comparison described by the parsed arguments.
pub fn execute_command(args: TokdistArgs) -> Result<()> {
    let config = args.to_config()?;
    debug!("using config: {config:?}");

    let ed = TokenAwareEditDistance::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.inputs.as_slice() {
        [str1, str2] => write_comparison(&ed, str1, str2, &mut out),
        [file_name] => compare_file(&ed, Path::new(file_name), &mut out),
        _ => Err(TokdistError::invalid_input(
            "expected two strings or one tab-separated file",
        )),
    }
}

/// Compare every tab-separated pair in a file, one pair per line.
///
/// Every line must have exactly two tab-separated fields; anything else is
/// an input error.
pub fn compare_file<W: Write>(
    ed: &TokenAwareEditDistance,
    path: &Path,
    out: &mut W,
) -> Result<()> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut pair_count = 0usize;
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 {
            return Err(TokdistError::invalid_input(format!(
                "expecting two inputs on line {} of {}; found {}: {}",
                line_num + 1,
                path.display(),
                fields.len(),
                line
            )));
        }

        write_comparison(ed, fields[0], fields[1], out)?;
        pair_count += 1;
    }

    debug!("compared {pair_count} pairs from {}", path.display());
    Ok(())
}

/// Compare one pair and write the result line.
pub fn write_comparison<W: Write>(
    ed: &TokenAwareEditDistance,
    str1: &str,
    str2: &str,
    out: &mut W,
) -> Result<()> {
    let dist = ed.distance(str1, str2);
    writeln!(out, "{}\t{}\t{}", format_distance(dist), str1, str2)?;
    Ok(())
}

/// Format a distance for output: `9999` for over-limit, two decimals
/// otherwise.
pub fn format_distance(dist: f32) -> String {
    if dist.is_infinite() {
        "9999".to_string()
    } else {
        format!("{dist:.2}")
    }
}
