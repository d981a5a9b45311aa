use itertools::Itertools;
use rand::distributions::{Distribution, Uniform};
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufRead};
use std::path::Path;

/// Output path, relative to the working directory. Not configurable.
const OUTPUT_PATH: &str = "weights.txt";
/// A line break follows every WRAP_EVERY-th entry.
const WRAP_EVERY: usize = 5;
/// Continuation lines are indented to sit under the opening brace.
const INDENT: &str = "                     "; // 21 spaces
/// Each value is left-justified in a field this wide.
const FIELD_WIDTH: usize = 8;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let count = prompt_count(stdin.lock(), io::stdout())?;
    let weights = generate_weights(if count > 0 { count as usize } else { 0 });
    let literal = format_literal(count, &weights);
    write_literal(Path::new(OUTPUT_PATH), &literal)?;
    Ok(())
}

/// Prompt for the weight count and parse the reply as a base-10 integer.
fn prompt_count<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<i64> {
    write!(output, "How many weights? ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().parse()?)
}

/// `count` independent uniform draws in [0, 1), each rounded to 4 decimal places.
fn generate_weights(count: usize) -> Vec<f64> {
    let uniform = Uniform::new(0.0_f64, 1.0_f64);
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| round4(uniform.sample(&mut rng)))
        .collect()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Render the weights as a C array initializer, wrapped every five entries.
///
/// Each value sits left-justified in an 8-column field followed by a comma,
/// and entries are joined with a single space. The trailing comma is stripped
/// only when it is the last character of the joined body, so a count that is
/// a multiple of five keeps its wrap indentation right before the closing
/// brace.
fn format_literal(count: i64, weights: &[f64]) -> String {
    let mut body = weights
        .iter()
        .enumerate()
        .map(|(i, weight)| {
            let mut entry = format!(
                "{:<width$},",
                lexical::to_string(*weight),
                width = FIELD_WIDTH
            );
            if (i + 1) % WRAP_EVERY == 0 {
                entry.push('\n');
                entry.push_str(INDENT);
            }
            entry
        })
        .join(" ");
    if body.ends_with(',') {
        body.pop();
    }

    format!("float weights[{}] = {{{}}};", count, body)
}

/// Create-or-truncate the output file and write the literal in one operation.
fn write_literal(path: &Path, literal: &str) -> Result<()> {
    File::create(path)?.write_all(literal.as_bytes())?;
    Ok(())
}
