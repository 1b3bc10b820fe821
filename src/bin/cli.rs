//! ksm-tllv CLI
//!
//! Encode and inspect TLLV blocks from the command line.

use clap::{Parser, Subcommand};
use ksm_tllv::tllv::{decode_block, parse_tag, KnownTag, TllvBlock};
use ksm_tllv::{Config, Result, TllvError};
use tracing_subscriber::{fmt, EnvFilter};

/// ksm-tllv CLI
#[derive(Parser, Debug)]
#[command(name = "ksm-tllv")]
#[command(about = "Encode and decode TLLV blocks")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serialize a value as a TLLV block
    Encode {
        /// Tag name (e.g. asset-id) or hex value (0x...)
        #[arg(short, long)]
        tag: String,

        /// Value bytes as hex
        #[arg(short, long, default_value = "")]
        value: String,
    },

    /// Decode a serialized TLLV block
    Decode {
        /// Serialized block as hex
        block: String,

        /// Accept any padding length
        #[arg(long)]
        lenient: bool,

        /// Maximum accepted block length in bytes
        #[arg(long, default_value_t = ksm_tllv::config::DEFAULT_MAX_BLOCK_LENGTH)]
        max_block_length: u32,
    },

    /// List the known tags
    Tags,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ksm_tllv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Encode { tag, value } => {
            let tag = parse_tag(&tag)?;
            let value = parse_hex(&value)?;

            let block = TllvBlock::new(tag, value);
            tracing::debug!(
                "Encoding {} value bytes with {} padding bytes",
                block.value_length(),
                block.padding_length()
            );

            println!("{}", hex::encode(block.serialize()?));
        }

        Commands::Decode {
            block,
            lenient,
            max_block_length,
        } => {
            let config = Config::builder()
                .strict_padding(!lenient)
                .max_block_length(max_block_length)
                .try_build()?;
            let bytes = parse_hex(&block)?;

            let (decoded, consumed) = decode_block(&bytes, &config)?;
            if consumed < bytes.len() {
                tracing::warn!("Ignoring {} trailing bytes", bytes.len() - consumed);
            }

            let tag_name = decoded
                .known_tag()
                .map(|tag| tag.name())
                .unwrap_or("unknown");
            println!("tag:          {:#018x} ({})", decoded.header.tag, tag_name);
            println!("block_length: {}", decoded.header.block_length);
            println!("value_length: {}", decoded.header.value_length);
            println!("value:        {}", hex::encode(&decoded.value));
        }

        Commands::Tags => {
            for tag in KnownTag::ALL {
                println!("{:#018x}  {}", tag.value(), tag);
            }
        }
    }

    Ok(())
}

fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    let digits = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(digits).map_err(|e| TllvError::Config(format!("Invalid hex input: {}", e)))
}
