use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use clap::Parser as ClapParser;
use itertools::Itertools;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rand::seq::SliceRandom;
use thousands::Separable;

use gsep::config::GsepConfig;
use gsep::io;
use gsep::io::cli::Cli;
use gsep::io::output::{GsepOutput, SepReport};
use gsep::io::svg_export::tiling_to_svg;
use guillotine_rs::entities::Tiling;
use guillotine_rs::io::import::Importer;
use guillotine_rs::separability::{decide, reference};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GsepConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed GsepConfig: {config:?}");

    let ext_tiling = io::read_tiling_file(args.input_file.as_path())?;
    info!(
        "[MAIN] loaded instance {} with {} tiles",
        args.input_file.display(),
        ext_tiling.tiles.len().separate_with_commas()
    );

    let importer = Importer::new(config.validate_input);
    let tiling = importer.import_tiling(&ext_tiling)?;

    let start = Instant::now();
    let verdict = decide(&tiling);
    let run_time = start.elapsed();

    info!(
        "[MAIN] verdict {} in {:?} ({} cuts, {} recollects, {} windows, peak stack {})",
        match verdict.separable {
            true => "separable",
            false => "not separable",
        },
        run_time,
        verdict.n_cuts.separate_with_commas(),
        verdict.n_recollects.separate_with_commas(),
        verdict.n_windows.separate_with_commas(),
        verdict.peak_stack.separate_with_commas(),
    );

    if args.cross_check || config.cross_check {
        cross_check(&tiling, verdict.separable, config.prng_seed)?;
        info!("[MAIN] cross-check passed: reference checker and shuffled rerun agree");
    }

    println!(
        "{}",
        match verdict.separable {
            true => "YES",
            false => "NO",
        }
    );

    if let Some(output_folder) = args.output_folder {
        if !output_folder.exists() {
            fs::create_dir_all(&output_folder).with_context(|| {
                format!("could not create output folder: {}", output_folder.display())
            })?;
        }
        let input_stem = args
            .input_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .context("input file has no valid name")?;

        let output = GsepOutput {
            report: SepReport::new(tiling.n_tiles(), verdict, run_time),
            instance: ext_tiling,
            config,
        };
        let report_path = output_folder.join(format!("report_{input_stem}.json"));
        io::write_json(&output, report_path.as_path())?;

        if args.svg {
            let svg_path = output_folder.join(format!("{input_stem}.svg"));
            let svg = tiling_to_svg(&tiling, config.svg_draw_options);
            io::write_svg(&svg, svg_path.as_path())?;
        }
    }

    Ok(())
}

/// Re-decides the instance with the naive reference checker and with a
/// shuffled rerun of the engine. Any disagreement is a bug in the engine,
/// not a property of the input.
fn cross_check(tiling: &Tiling, separable: bool, prng_seed: Option<u64>) -> Result<()> {
    let mut rects = tiling.tiles.iter().map(|tile| tile.rect).collect_vec();

    ensure!(
        reference::is_separable(&rects) == separable,
        "cross-check failed: reference checker disagrees with the engine"
    );

    let mut rng = match prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    rects.shuffle(&mut rng);
    ensure!(
        decide(&Tiling::new(rects)).separable == separable,
        "cross-check failed: verdict is not permutation invariant"
    );
    Ok(())
}
