// Copyright 2025 the Hudkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generate the font advance table from a game client archive.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hudkit_font::descriptor::FontDescriptor;
use hudkit_font::providers::ProviderChain;
use hudkit_font::resource::{ResourceKey, ResourceLoader, ZipLoader};

#[derive(Parser, Debug)]
#[command(about = "Extract per-character advance widths from a game client archive.")]
struct Args {
    /// Path to the client archive.
    #[arg(long, default_value = "minecraft.jar")]
    client: PathBuf,
    /// Output path of the advance table.
    #[arg(long, default_value = "out.sizes.bin")]
    out: PathBuf,
    /// Font descriptor keys, highest priority first.
    ///
    /// Defaults to `font/alt.json` then `font/default.json`, the order
    /// the client resolves them in.
    #[arg(long)]
    font: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let fonts = ZipLoader::open(&args.client, None)
        .with_context(|| format!("opening client archive {}", args.client.display()))?;
    let textures = ZipLoader::open(&args.client, Some("textures"))?;

    let keys = if args.font.is_empty() {
        vec!["font/alt.json".to_owned(), "font/default.json".to_owned()]
    } else {
        args.font.clone()
    };

    let mut chain = ProviderChain::new();
    for key in &keys {
        let key = ResourceKey::parse(key)?;
        let data = fonts
            .open(&key)
            .with_context(|| format!("reading font descriptor {key}"))?;
        let descriptor = FontDescriptor::from_json(&data)
            .with_context(|| format!("parsing font descriptor {key}"))?;
        chain.extend_from_descriptors(&descriptor.providers, &fonts, &textures);
    }
    if chain.is_empty() {
        log::warn!("no font providers resolved; the table will be all zeros");
    }

    let table = hudkit_font::table::generate(&chain);
    std::fs::write(&args.out, table.to_bytes())
        .with_context(|| format!("writing {}", args.out.display()))?;
    println!(
        "wrote {} ({} providers, {} keys)",
        args.out.display(),
        chain.len(),
        keys.len()
    );
    Ok(())
}
