use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use spek_tools_wasm::native::{decode_mask_bytes, extract_palette_bytes, remove_background_bytes};
use spek_tools_wasm::palette::{DEFAULT_ALPHA_THRESHOLD, DEFAULT_SAMPLE_STRIDE, DEFAULT_TOP_K};
use spek_tools_wasm::resize::PALETTE_MAX_DIMENSION;

/// Image utilities (native wrapper around the wasm core).
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the dominant color palette from one or more images
    Palette {
        /// One or more input image paths
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Number of colors to report
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// Byte step over the flat RGBA array (multiple of 4)
        #[arg(long, default_value_t = DEFAULT_SAMPLE_STRIDE)]
        stride: usize,

        /// Sampled pixels with alpha at or below this are skipped
        #[arg(long, default_value_t = DEFAULT_ALPHA_THRESHOLD)]
        alpha_threshold: u8,

        /// Longest-side bound applied before sampling; 0 disables downscaling
        #[arg(long, default_value_t = PALETTE_MAX_DIMENSION)]
        downscale: u32,

        /// Print the palette as a JSON array instead of one color per line
        #[arg(long)]
        json: bool,
    },

    /// Apply a segmentation mask to an image and write a transparent PNG
    RemoveBg {
        /// Input image path
        input: PathBuf,

        /// Grayscale mask image with the same dimensions as the input
        #[arg(short, long)]
        mask: PathBuf,

        /// Treat the mask as foreground probability instead of background
        #[arg(long)]
        no_invert: bool,

        /// Output path (default: <input stem>_nobg.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Palette {
            inputs,
            top_k,
            stride,
            alpha_threshold,
            downscale,
            json,
        } => {
            let downscale = if downscale == 0 { None } else { Some(downscale) };
            for input in &inputs {
                let bytes = fs::read(input)
                    .with_context(|| format!("failed to read {}", input.display()))?;
                let colors =
                    extract_palette_bytes(&bytes, downscale, stride, alpha_threshold, top_k)
                        .context("palette extraction failed")?;

                if json {
                    println!("{}", serde_json::to_string(&colors)?);
                } else {
                    if inputs.len() > 1 {
                        println!("{}:", input.display());
                    }
                    for color in colors {
                        println!("{color}");
                    }
                }
            }
        }

        Command::RemoveBg {
            input,
            mask,
            no_invert,
            output,
        } => {
            let image_bytes =
                fs::read(&input).with_context(|| format!("failed to read {}", input.display()))?;
            let mask_bytes =
                fs::read(&mask).with_context(|| format!("failed to read {}", mask.display()))?;

            let mask = decode_mask_bytes(&mask_bytes)?;
            let png = remove_background_bytes(&image_bytes, &mask, !no_invert)
                .context("background removal failed")?;

            let out_path = output.unwrap_or_else(|| {
                let stem = input.file_stem().unwrap_or_default().to_string_lossy();
                PathBuf::from(format!("{stem}_nobg.png"))
            });
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&out_path, png)?;
            println!("Saved → {}", out_path.display());
        }
    }

    Ok(())
}
