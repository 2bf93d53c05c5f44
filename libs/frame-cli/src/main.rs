//! `frame-gen`: generate a building frame GLB from the command line.
//!
//! ```text
//! frame-gen --material steel --floors 3                 # static/building_steel_3_floors_<ts>.glb
//! frame-gen --floors 2 --stdout > frame.glb
//! frame-gen --output-dir out --keep 2                   # prune older output after writing
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `info`).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use building_frame::{
    prune_generated_keeping, FrameGenerator, FrameRequest, GeneratorConfig, MaterialPolicy, OutputMode,
};
use clap::Parser;
use config::constants::{
    DEFAULT_FILES_TO_KEEP, DEFAULT_FLOORS, DEFAULT_MATERIAL, DEFAULT_OUTPUT_DIR,
    DEFAULT_SLAB_THICKNESS,
};

#[derive(Debug, Parser)]
#[command(name = "frame-gen", version, about = "Generate a multi-story building frame as GLB")]
struct Cli {
    /// Material key: wood, steel or concrete
    #[arg(short, long, default_value = DEFAULT_MATERIAL)]
    material: String,

    /// Number of floors (values below 1 are treated as 1)
    #[arg(short, long, default_value_t = i64::from(DEFAULT_FLOORS), allow_negative_numbers = true)]
    floors: i64,

    /// Slab thickness in meters (values below 0.05 are raised to 0.05)
    #[arg(short, long, default_value_t = DEFAULT_SLAB_THICKNESS, allow_negative_numbers = true)]
    slab_thickness: f64,

    /// Directory output files are written into
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Write the GLB to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Fail on unknown materials instead of rendering them gray
    #[arg(long)]
    strict: bool,

    /// After writing, keep only the newest N generated files, including the
    /// one just written (a small default when given without a value)
    #[arg(long, value_name = "N", conflicts_with = "stdout")]
    keep: Option<Option<usize>>,
}

impl Cli {
    fn generator(&self) -> FrameGenerator {
        let policy = if self.strict {
            MaterialPolicy::Strict
        } else {
            MaterialPolicy::Permissive
        };
        FrameGenerator::new(
            GeneratorConfig::default()
                .with_output_dir(&self.output_dir)
                .with_material_policy(policy),
        )
    }

    fn request(&self) -> FrameRequest {
        FrameRequest::new(&self.material, self.floors, self.slab_thickness)
    }

    /// Retention limit, if pruning was requested.
    fn files_to_keep(&self) -> Option<usize> {
        self.keep.map(|n| n.unwrap_or(DEFAULT_FILES_TO_KEEP))
    }

    fn mode(&self) -> OutputMode {
        if self.stdout {
            OutputMode::Bytes
        } else {
            OutputMode::File
        }
    }
}

/// Runs one generation. GLB bytes go to `out` in stdout mode; in file mode
/// the written path is printed to `out` instead.
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let request = cli.request();
    let asset = cli
        .generator()
        .try_generate(&request, cli.mode())
        .with_context(|| format!("failed to generate {request:?}"))?;

    if let Some(glb) = asset.as_bytes() {
        out.write_all(glb).context("failed to write GLB to stdout")?;
        out.flush()?;
        return Ok(());
    }

    let Some(path) = asset.path() else {
        return Ok(());
    };
    writeln!(out, "{}", path.display())?;

    if let Some(keep) = cli.files_to_keep() {
        let removed = prune_generated_keeping(&cli.output_dir, keep, path)
            .with_context(|| format!("failed to prune {}", cli.output_dir.display()))?;
        log::info!("removed {} old output file(s)", removed.len());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
