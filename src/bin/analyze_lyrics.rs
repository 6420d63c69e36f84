//! Print syllable and rhyme reports for lyric files.
//!
//! Usage: cargo run --bin analyze_lyrics -- [--json] [FILE|-]...
//!
//! With no files, or with `-`, lyrics are read from stdin. Files are analyzed
//! in parallel; output keeps the order given on the command line.

use std::io::Read;

use anyhow::{Context, Result};
use lyricsmith::analysis::{analyze_bytes, LyricReport};
use rayon::prelude::*;
use serde::Serialize;

const STDIN_MARKER: &str = "-";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileReport {
    path: String,
    #[serde(flatten)]
    report: LyricReport,
}

fn read_source(path: &str) -> Result<Vec<u8>> {
    if path == STDIN_MARKER {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).context("Failed to read lyrics from stdin")?;
        return Ok(buf);
    }
    Ok(fs_err::read(path)?)
}

fn analyze_source(path: &str) -> Result<LyricReport> {
    let bytes = read_source(path)?;
    analyze_bytes(&bytes).with_context(|| format!("Failed to analyze {path}"))
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let mut paths: Vec<String> = args.into_iter().filter(|a| a != "--json").collect();
    if paths.is_empty() {
        paths.push(STDIN_MARKER.to_string());
    }

    // Stdin can only be consumed once
    if paths.iter().filter(|p| *p == STDIN_MARKER).count() > 1 {
        anyhow::bail!("stdin ('-') may only be given once");
    }

    let reports: Vec<FileReport> = paths
        .par_iter()
        .map(|path| {
            analyze_source(path).map(|report| FileReport {
                path: path.clone(),
                report,
            })
        })
        .collect::<Result<_>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let show_headers = reports.len() > 1;
    for (i, file) in reports.iter().enumerate() {
        if i > 0 {
            println!();
        }
        if show_headers {
            println!("==> {} <==", file.path);
        }
        println!("{}", file.report.syllable_report);
        println!();
        println!("{}", file.report.rhyme_report);
    }

    Ok(())
}
