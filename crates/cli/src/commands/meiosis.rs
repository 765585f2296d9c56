use anyhow::{Context, Result};
use synapsis_engine::{EngineConfig, Meiosis};

use super::sequence_metric;
use crate::args::{MeiosisArgs, OutputFormat};
use crate::input::read_sequences;
use crate::printing::{print_gametes, print_json};

pub fn run_meiosis(
    args: &MeiosisArgs,
    mut config: EngineConfig,
    format: OutputFormat,
) -> Result<()> {
    args.apply(&mut config);
    config.validate()?;

    let genome = read_sequences(&args.input)?;
    let generator = config
        .crossover
        .build_generator()
        .context("Failed to build distance generator")?;

    let result = Meiosis::new(&genome, &config.pairing).run(
        sequence_metric(config.pairing.sense),
        |a, b| a == b,
        generator,
    );

    match format {
        OutputFormat::Text => print_gametes(&result),
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(())
}
