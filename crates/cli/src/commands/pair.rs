use anyhow::Result;
use synapsis_engine::EngineConfig;

use super::sequence_metric;
use crate::args::{OutputFormat, PairArgs};
use crate::input::{read_sequences, Tokens};
use crate::printing::{print_json, print_pairs};

pub fn pair_sequences(
    args: &PairArgs,
    mut config: EngineConfig,
    format: OutputFormat,
) -> Result<()> {
    args.pairing.apply(&mut config.pairing);
    config.validate()?;

    let sequences = read_sequences(&args.input)?;
    let metric = sequence_metric(config.pairing.sense);
    let pairs = config
        .pairing
        .resolver()
        .resolve(&sequences, |a: &Tokens, b: &Tokens| metric(a, b));

    match format {
        OutputFormat::Text => print_pairs(&pairs, sequences.len()),
        OutputFormat::Json => print_json(&pairs)?,
    }
    Ok(())
}
