use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Instance to decide, plain text (`n` then `n` lines of corner coordinates)
    /// or a `.json` tiling
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder to write the JSON report (and optional SVG render) to.
    /// Without it only the verdict is printed
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Render the instance to an SVG in the output folder
    #[arg(long)]
    pub svg: bool,
    /// Cross-check the verdict against the reference checker and a shuffled
    /// rerun, regardless of the config
    #[arg(long)]
    pub cross_check: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
