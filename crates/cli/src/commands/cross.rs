use anyhow::{Context, Result};
use serde::Serialize;
use synapsis_engine::recombination::{crossover_with_breakpoints, Breakpoint};
use synapsis_engine::{Alignment, EngineConfig};

use crate::args::{CrossArgs, OutputFormat};
use crate::input::{read_two, Tokens};
use crate::printing::{print_json, print_offspring};

#[derive(Serialize)]
struct CrossoverOutput {
    offspring: [Tokens; 2],
    breakpoints: Vec<Breakpoint>,
}

pub fn cross_sequences(
    args: &CrossArgs,
    mut config: EngineConfig,
    format: OutputFormat,
) -> Result<()> {
    args.distance.apply(&mut config.crossover);
    config.validate()?;

    let (left, right) = read_two(&args.input)?;
    let generator = config
        .crossover
        .build_generator()
        .context("Failed to build distance generator")?;

    let alignment = Alignment::new(&left, &right, |a, b| a == b);
    let (first, second, breakpoints) =
        crossover_with_breakpoints(&left, &right, &alignment, generator);
    tracing::debug!(
        lcs = alignment.len(),
        breakpoints = breakpoints.len(),
        "crossed over"
    );

    match format {
        OutputFormat::Text => print_offspring(&first, &second, &breakpoints),
        OutputFormat::Json => print_json(&CrossoverOutput {
            offspring: [first, second],
            breakpoints,
        })?,
    }
    Ok(())
}
