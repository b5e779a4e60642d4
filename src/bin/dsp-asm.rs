use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use dsp_asm::{source::clean_lines, AsmConfig, Assembler};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Parse DSP assembly and print its canonical mem/equ/instr tables"
)]
struct Opts {
    /// Assembly source (stdin when omitted)
    #[arg(value_name = "ASMFILE")]
    input: Option<PathBuf>,
    /// Limits as JSON; missing fields keep their defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Delay-memory budget in samples
    #[arg(long)]
    memory_budget: Option<u32>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opts = Opts::parse();
    let mut cfg = match &opts.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<AsmConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => AsmConfig::default(),
    };
    if let Some(budget) = opts.memory_budget {
        cfg.memory_budget = budget;
    }

    let reader: Box<dyn BufRead> = match &opts.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut asm = Assembler::new(cfg);
    for line in clean_lines(reader, cfg.max_line_len) {
        asm.feed_line(&line?)?;
    }
    let model = asm.finish();

    let mut out = io::stdout().lock();
    match opts.format {
        OutputFormat::Text => {
            for line in model.render() {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &model)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
