use anyhow::Result;
use serde::Serialize;
use synapsis_engine::alignment::{AlignmentStep, Anchor};
use synapsis_engine::Alignment;

use crate::args::{AlignArgs, OutputFormat};
use crate::input::read_two;
use crate::printing::{print_alignment, print_json};

#[derive(Serialize)]
struct AlignmentOutput<'a> {
    left_size: usize,
    right_size: usize,
    lcs_length: usize,
    anchors: &'a [Anchor],
    walk: Vec<AlignmentStep>,
}

pub fn align_sequences(args: &AlignArgs, format: OutputFormat) -> Result<()> {
    let (left, right) = read_two(&args.input)?;
    let alignment = Alignment::new(&left, &right, |a, b| a == b);

    match format {
        OutputFormat::Text => print_alignment(&alignment, &left, &right),
        OutputFormat::Json => print_json(&AlignmentOutput {
            left_size: alignment.left_size(),
            right_size: alignment.right_size(),
            lcs_length: alignment.len(),
            anchors: alignment.anchors(),
            walk: alignment.walk().collect(),
        })?,
    }
    Ok(())
}
