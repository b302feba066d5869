use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use guillotine_rs::Coord;
use guillotine_rs::io::ext_repr::{ExtRect, ExtTiling};

use crate::EPOCH;

pub mod cli;
pub mod output;
pub mod svg_export;
pub mod svg_util;

/// Reads a tiling instance from `path`.
/// `.json` files hold an [`ExtTiling`], anything else is treated as plain
/// text: a tile count followed by four corner coordinates per tile.
pub fn read_tiling_file(path: &Path) -> Result<ExtTiling> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => {
            let file = File::open(path)
                .with_context(|| format!("could not open instance file: {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("could not parse instance file: {}", path.display()))
        }
        _ => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("could not open instance file: {}", path.display()))?;
            parse_text_instance(&contents)
                .with_context(|| format!("could not parse instance file: {}", path.display()))
        }
    }
}

fn parse_text_instance(contents: &str) -> Result<ExtTiling> {
    let mut tokens = contents.split_whitespace();
    let n: usize = tokens
        .next()
        .context("empty instance")?
        .parse()
        .context("invalid tile count")?;
    let mut tiles = Vec::with_capacity(n);
    for i in 0..n {
        let x_min = next_coord(&mut tokens, i)?;
        let y_min = next_coord(&mut tokens, i)?;
        let x_max = next_coord(&mut tokens, i)?;
        let y_max = next_coord(&mut tokens, i)?;
        tiles.push(ExtRect {
            x_min,
            y_min,
            x_max,
            y_max,
        });
    }
    ensure!(
        tokens.next().is_none(),
        "trailing data after {n} declared tiles"
    );
    Ok(ExtTiling { tiles })
}

fn next_coord<'a>(tokens: &mut impl Iterator<Item = &'a str>, tile: usize) -> Result<Coord> {
    match tokens.next() {
        Some(token) => token
            .parse()
            .with_context(|| format!("tile {tile}: invalid coordinate {token:?}")),
        None => bail!("tile {tile}: missing coordinates"),
    }
}

pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create output file: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("could not write output file: {}", path.display()))?;
    info!("[IO] report written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
