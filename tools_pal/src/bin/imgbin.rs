use std::path::{Path, PathBuf};

use clap::Parser;
use lib_pal::convert::{convert_directory_with, is_bmp, ConvertError, DirectoryError, Progress};
use lib_pal::{convert_file, Conversion, DirectoryReport};

/// Convert BMP images to a packed 4bpp binary format using the VGA palette
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// BMP file or directory containing BMP files
    input: PathBuf,

    /// Enable verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// A line for the user; errors go to stderr, the rest to stdout.
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Out(String),
    Err(String),
}

impl Line {
    fn print(&self) {
        match self {
            Line::Out(text) => println!("{}", text),
            Line::Err(text) => eprintln!("{}", text),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn started_lines(input: &Path, verbose: bool) -> Vec<Line> {
    if verbose && is_bmp(input) {
        vec![Line::Out(format!("\nProcessing {}...", file_name(input)))]
    } else {
        Vec::new()
    }
}

fn finished_lines(input: &Path, result: &Result<Conversion, ConvertError>, verbose: bool) -> Vec<Line> {
    match result {
        Ok(Conversion::Skipped) if verbose => vec![Line::Out(format!(
            "Skipping {}: not a BMP file.",
            file_name(input)
        ))],
        Ok(Conversion::Converted {
            output,
            width,
            height,
            bytes,
        }) if verbose => vec![
            Line::Out(format!("Image size: {}x{} pixels", width, height)),
            Line::Out(format!("Successfully converted to {}", output.display())),
            Line::Out(format!("Output file size: {} bytes", bytes)),
        ],
        Ok(_) => Vec::new(),
        Err(err) => vec![Line::Err(format!(
            "Error processing {}: {}",
            file_name(input),
            err
        ))],
    }
}

fn progress_lines(progress: Progress<'_>, dir: &Path, verbose: bool) -> Vec<Line> {
    match progress {
        Progress::Found(count) if verbose => vec![Line::Out(format!(
            "Found {} BMP files in {}",
            count,
            dir.display()
        ))],
        Progress::Found(_) => Vec::new(),
        Progress::Started(path) => started_lines(path, verbose),
        Progress::Finished(path, result) => finished_lines(path, result, verbose),
    }
}

fn summary_lines(report: &Result<DirectoryReport, DirectoryError>, verbose: bool) -> Vec<Line> {
    match report {
        Ok(report) if verbose => vec![Line::Out(format!(
            "\nProcessing complete: {}/{} files converted successfully",
            report.converted, report.found
        ))],
        Ok(_) => Vec::new(),
        Err(DirectoryError::NotADirectory(path)) => vec![Line::Err(format!(
            "Error: {} is not a directory",
            path.display()
        ))],
        Err(err) => vec![Line::Err(err.to_string())],
    }
}

fn run_directory(dir: &Path, verbose: bool) {
    let report = convert_directory_with(dir, |progress| {
        progress_lines(progress, dir, verbose)
            .iter()
            .for_each(Line::print);
    });
    summary_lines(&report, verbose).iter().for_each(Line::print);
}

fn run_file(input: &Path, verbose: bool) {
    started_lines(input, verbose).iter().for_each(Line::print);
    let result = convert_file(input);
    finished_lines(input, &result, verbose)
        .iter()
        .for_each(Line::print);
}

fn main() {
    let args = Args::parse();
    lib_pal::init_logging(args.verbose);

    if args.input.is_dir() {
        run_directory(&args.input, args.verbose);
    } else {
        run_file(&args.input, args.verbose);
    }
}
