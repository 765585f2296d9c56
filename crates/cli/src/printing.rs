use anyhow::{Context, Result};
use serde::Serialize;
use synapsis_engine::alignment::{Alignment, AlignmentStep};
use synapsis_engine::recombination::{Breakpoint, Gametes};
use synapsis_engine::Pair;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Index and token of one side of an alignment step, `-` for a gap.
fn cell(index: Option<usize>, tokens: &[String]) -> (String, &str) {
    match index {
        Some(i) => (i.to_string(), tokens[i].as_str()),
        None => ("-".to_string(), "-"),
    }
}

fn join(tokens: &[String]) -> String {
    tokens.join(" ")
}

pub fn print_pairs(pairs: &[Pair<f64>], sequences: usize) {
    println!("\n🔗 Pairs ({sequences} sequences)");
    for pair in pairs {
        match pair {
            Pair::Paired {
                left,
                right,
                metric,
            } => println!("  {left} <-> {right}  metric {metric:.4}"),
            Pair::Single { index } => println!("  {index} (single)"),
        }
    }
}

pub fn print_alignment(alignment: &Alignment, left: &[String], right: &[String]) {
    println!("\n🧬 Alignment");
    println!(
        "  • Lengths: {} / {}",
        alignment.left_size(),
        alignment.right_size()
    );
    println!("  • LCS length: {}", alignment.len());
    println!();

    for AlignmentStep { left: l, right: r } in alignment.walk() {
        let marker = if l.is_some() && r.is_some() { '=' } else { ' ' };
        let (left_index, left_token) = cell(l, left);
        let (right_index, right_token) = cell(r, right);
        println!("  {left_index:>5} {left_token:<12} {marker} {right_index:>5} {right_token}");
    }
}

pub fn print_offspring(first: &[String], second: &[String], breakpoints: &[Breakpoint]) {
    println!("\n🔀 Crossover");
    println!("  offspring A: {}", join(first));
    println!("  offspring B: {}", join(second));
    let cuts: Vec<String> = breakpoints
        .iter()
        .map(|cut| format!("({}, {})", cut.left, cut.right))
        .collect();
    println!("  breakpoints: {}", cuts.join(" "));
}

pub fn print_gametes(result: &Gametes<String>) {
    for (number, gamete) in result.gametes.iter().enumerate() {
        println!("\n🥚 Gamete {number}");
        for chromosome in gamete {
            println!("  {}", join(chromosome));
        }
    }

    println!("\n📋 Slots");
    for (slot, report) in result.report.slots.iter().enumerate() {
        match &report.pair {
            Pair::Paired { left, right, .. } => println!(
                "  {slot}: {left} x {right} (lcs {}, {} breakpoints)",
                report.lcs_length,
                report.breakpoints.len()
            ),
            Pair::Single { index } => println!("  {slot}: {index} copied"),
        }
    }
}
