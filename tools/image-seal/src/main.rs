// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2024-2026 The keelson developers

//! Host-side sealing tool for the flash pipeline.
//!
//! Takes the raw second-stage payload, appends the checksum trailer and emits the sealed image
//! that the flashing step places at the start of flash.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use boot_trust::{crc32, image};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "image-seal")]
#[command(version, about = "Seal and verify boot images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append the checksum trailer to a raw payload.
    Seal(SealArgs),
    /// Check the trailer of a sealed image.
    Verify(VerifyArgs),
}

#[derive(Args)]
struct SealArgs {
    /// Raw payload, must be exactly 256 bytes.
    input: PathBuf,

    /// Where to write the 260 byte sealed image.
    output: PathBuf,
}

#[derive(Args)]
struct VerifyArgs {
    /// Sealed image, must be exactly 260 bytes.
    input: PathBuf,
}

fn seal(args: SealArgs) -> Result<()> {
    let raw = fs::read(&args.input)
        .with_context(|| format!("reading payload {}", args.input.display()))?;

    let payload = image::Payload::from_slice(&raw)
        .map_err(|e| anyhow!("{}: {}", args.input.display(), e))?;
    let sealed = image::SealedImage::seal(&payload);

    fs::write(&args.output, sealed.as_bytes())
        .with_context(|| format!("writing sealed image {}", args.output.display()))?;

    println!(
        "Sealed {} byte payload, checksum 0x{:08X}, wrote {}",
        image::PAYLOAD_LEN,
        sealed.checksum(),
        args.output.display()
    );
    Ok(())
}

fn verify(args: VerifyArgs) -> Result<()> {
    let raw = fs::read(&args.input)
        .with_context(|| format!("reading sealed image {}", args.input.display()))?;

    image::verify_slice(&raw).map_err(|e| anyhow!("{}: {}", args.input.display(), e))?;

    println!(
        "OK, checksum 0x{:08X}",
        crc32::checksum(&raw[..image::PAYLOAD_LEN])
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seal(args) => seal(args),
        Commands::Verify(args) => verify(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
