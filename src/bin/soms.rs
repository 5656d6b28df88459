//! Command line front end: reads program dumps and prints the public symbol graph.
//!
//! Run with `cargo run --bin soms -- dump.json` (the `cli` feature is on by default).

#[cfg(not(feature = "cli"))]
pub fn main() {
    eprintln!(
        "The 'soms' binary requires the 'cli' feature. \
Enable it with `cargo run --features cli --bin soms`."
    );
    std::process::exit(1);
}

#[cfg(feature = "cli")]
mod cli {
    use std::fs::File;
    use std::io::{self, BufWriter, Write};
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use log::LevelFilter;

    use soms::surface::{build_surface, describe_record, SurfaceGraph};
    use soms::ProgramLoader;

    #[derive(Debug, Parser)]
    #[command(name = "soms", version, about = "Extract the public API surface of a program dump")]
    pub struct Cli {
        /// Program dumps to load, in order.
        #[arg(required = true)]
        pub inputs: Vec<PathBuf>,

        /// Write the graph here instead of stdout.
        #[arg(short, long)]
        pub output: Option<PathBuf>,

        /// Indent the JSON output.
        #[arg(long)]
        pub pretty: bool,

        /// Print one summary line per record instead of JSON.
        #[arg(long, conflicts_with = "pretty")]
        pub summary: bool,

        /// Increase log verbosity (-v info, -vv debug, -vvv trace).
        #[arg(short, long, action = clap::ArgAction::Count)]
        pub verbose: u8,
    }

    fn init_logging(verbose: u8) {
        let level = match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }

    fn emit(graph: &SurfaceGraph, cli: &Cli, mut writer: impl Write) -> anyhow::Result<()> {
        if cli.summary {
            for record in graph {
                writeln!(writer, "{}", describe_record(record))?;
            }
        } else {
            graph
                .write_json(&mut writer, cli.pretty)
                .context("failed to encode the surface graph")?;
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn run() -> anyhow::Result<()> {
        let cli = Cli::parse();
        init_logging(cli.verbose);

        let mut loader = ProgramLoader::new();
        for input in &cli.inputs {
            loader
                .load_file(input)
                .with_context(|| format!("failed to load `{}`", input.display()))?;
        }
        let loaded = loader.finish();
        let checker = loaded.checker();
        let graph = build_surface(&loaded.program, &checker)?;

        match &cli.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create `{}`", path.display()))?;
                emit(&graph, &cli, BufWriter::new(file))
            }
            None => emit(&graph, &cli, io::stdout().lock()),
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    cli::run()
}
