//! Tessera block inspector
//!
//! Builds the stock block types and logs every compact id with its decoded
//! state, the faces its transform turns the local north and up faces onto,
//! and where the local lower half of the block ends up.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p tessera-inspect -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `--block <NAME>`: Only inspect the named block type (repeatable)
//! - `--id-bits <N>`: Width of the compact id in bits (default: 4)
//! - `--max-properties <N>`: Properties allowed per block type (default: 4)
//! - `-h, --help`: Print help message
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod blocks;

use anyhow::{bail, Context};
use glam::DVec3;
use tessera_block::{BlockDef, BlockRegistry, BlockType, CompactId};
use tessera_core::{Aabb, BlockPos, CodecConfig, Face};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Lower half of the block in local space.
const LOWER_HALF: Aabb = Aabb::new(DVec3::new(-0.5, -0.5, -0.5), DVec3::new(0.5, 0.0, 0.5));

#[derive(Debug, Default)]
struct Args {
    blocks: Vec<String>,
    config: CodecConfig,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .with_context(|| format!("{flag} expects a value"))
            };
            match arg.as_str() {
                "--block" => parsed.blocks.push(value("--block")?),
                "--id-bits" => {
                    parsed.config.id_bits = value("--id-bits")?
                        .parse()
                        .context("--id-bits expects an integer")?;
                }
                "--max-properties" => {
                    parsed.config.max_properties = value("--max-properties")?
                        .parse()
                        .context("--max-properties expects an integer")?;
                }
                other => bail!("unknown argument: {other}"),
            }
        }
        Ok(parsed)
    }
}

fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let registry = BlockRegistry::new(args.config)?;
    info!(
        id_bits = args.config.id_bits,
        max_properties = args.config.max_properties,
        "Tessera block inspector"
    );

    for def in select(blocks::stock(), &args.blocks)? {
        let block = registry
            .resolve(&def)
            .with_context(|| format!("failed to build block type {}", def.name()))?;
        inspect(&block);
    }
    Ok(())
}

/// Stock definitions named on the command line, or all of them when none
/// are named.
fn select(stock: Vec<BlockDef>, names: &[String]) -> anyhow::Result<Vec<BlockDef>> {
    if let Some(unknown) = names
        .iter()
        .find(|name| !stock.iter().any(|def| def.name() == name.as_str()))
    {
        let known: Vec<&str> = stock.iter().map(BlockDef::name).collect();
        bail!("unknown block {unknown} (stock blocks: {})", known.join(", "));
    }
    Ok(stock
        .into_iter()
        .filter(|def| names.is_empty() || names.iter().any(|name| name == def.name()))
        .collect())
}

fn inspect(block: &BlockType) {
    let layout = block.layout();
    info!(
        block = block.name(),
        properties = layout.len(),
        combinations = layout.combinations(),
        capacity = layout.config().capacity(),
        "block type"
    );
    let pos = BlockPos::ZERO;
    for raw in 0..layout.config().capacity() {
        let id = CompactId::new(raw as u16);
        let state = block.decode(id);
        let t = block.local_to_global_transform(id, pos);
        let model_origin = block.render_transform(id, pos).origin;
        info!(
            block = block.name(),
            %id,
            state = %layout.describe(&state),
            reencoded = %block.encode(&state),
            north = %t.apply_face(Face::North),
            up = %t.apply_face(Face::Up),
            mirrored = t.rotation.is_reflection(),
            lower_half = ?t.apply_aabb(&LOWER_HALF),
            model_origin = ?model_origin,
            "compact id"
        );
    }
}

fn print_help() {
    eprintln!(
        "Tessera block inspector

Logs every compact id of the stock block types with its decoded state and
where the local north and up faces and the lower half land in world space.

USAGE:
    cargo run -p tessera-inspect -- [OPTIONS]

OPTIONS:
    --block <NAME>           Only inspect the named block type (repeatable)
    --id-bits <N>            Width of the compact id in bits (default: 4)
    --max-properties <N>     Properties allowed per block type (default: 4)
    -h, --help               Print this help message

ENVIRONMENT:
    RUST_LOG                 Set log level (e.g., info, debug, trace)"
    );
}
