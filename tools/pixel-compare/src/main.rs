// Pixel comparison CLI for rasterdraw scenes.
//
// Usage:
//   pixel-compare render <scene> <width> <height> [params...] [-o <output.png>]
//   pixel-compare compare <file_a> <file_b> [-d <diff.png>] [-s <sidebyside.png>]
//   pixel-compare list

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use pixel_compare::{
    compare_buffers, generate_diff_image, generate_sidebyside, load_image, render, save_image,
};

#[derive(Parser, Debug)]
#[command(name = "pixel-compare", version, about = "Render rasterdraw scenes and compare images")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene to an image file
    Render {
        scene: String,
        width: u32,
        height: u32,
        /// Scene specific numeric parameters
        #[arg(allow_negative_numbers = true)]
        params: Vec<f64>,
        /// Output path; the extension picks the format
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compare two image files pixel by pixel; exits with 1 if they differ
    Compare {
        a: PathBuf,
        b: PathBuf,
        /// Write a diff image here
        #[arg(short, long)]
        diff: Option<PathBuf>,
        /// Write an [A | diff | B] image here
        #[arg(short, long)]
        sidebyside: Option<PathBuf>,
    },
    /// List available scene names
    List,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Render {
            scene,
            width,
            height,
            params,
            output,
        } => {
            let output =
                output.unwrap_or_else(|| PathBuf::from(format!("{}_{}x{}.png", scene, width, height)));
            let buf = render::render_scene(&scene, width, height, &params).ok_or_else(|| {
                anyhow!("unknown scene '{}', use 'list' to see available scenes", scene)
            })?;
            save_image(&output, &buf)?;
            info!("saved {}", output.display());
        }
        Command::Compare {
            a,
            b,
            diff,
            sidebyside,
        } => {
            let a = load_image(&a)?;
            let b = load_image(&b)?;
            let result = compare_buffers(&a, &b)?;
            println!("{}", result);

            if let Some(path) = diff {
                save_image(&path, &generate_diff_image(&a, &b)?)?;
                info!("diff saved: {}", path.display());
            }
            if let Some(path) = sidebyside {
                save_image(&path, &generate_sidebyside(&a, &b)?)?;
                info!("side-by-side saved: {}", path.display());
            }
            if !result.identical {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::List => {
            println!("Available scenes:");
            for name in render::available_scenes() {
                println!("  {}", name);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
