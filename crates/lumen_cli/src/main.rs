use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use lumen_core::{load_scene, SceneDescription};
use lumen_renderer::{build_scene, render, ImageBuffer, RenderConfig};

/// Render a scene file with the Lumen path tracer.
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about)]
struct Args {
    /// JSON scene file
    #[arg(value_name = "SCENE", required_unless_present = "demo")]
    scene: Option<PathBuf>,

    /// Render the built-in demo scene instead of a file
    #[arg(long, conflicts_with = "scene")]
    demo: bool,

    /// Output image; the format follows the extension
    #[arg(short, long, value_name = "FILE", default_value = "output.png")]
    output: PathBuf,

    /// Override samples per pixel
    #[arg(long)]
    samples: Option<u32>,

    /// Override maximum bounce depth
    #[arg(long)]
    depth: Option<u32>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override image width
    #[arg(long)]
    width: Option<u32>,

    /// Override image height
    #[arg(long)]
    height: Option<u32>,
}

impl Args {
    /// Replace scene render settings with whatever was given on the command line.
    fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut description = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None if args.demo => SceneDescription::demo(),
        None => bail!("No scene file given"),
    };
    args.apply_overrides(&mut description.render);

    let scene = build_scene(&description).context("Failed to build scene")?;
    let image = render(&scene, &description.render)?;

    save_image(&image, &args.output)?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}

fn save_image(image: &ImageBuffer, path: &Path) -> Result<()> {
    let buffer = image::RgbImage::from_raw(image.width, image.height, image.as_raw_rgb())
        .context("Image buffer does not match its dimensions")?;
    buffer
        .save(path)
        .with_context(|| format!("Failed to save {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scene_and_overrides() {
        let args = Args::try_parse_from([
            "lumen", "scene.json", "-o", "out.ppm", "--samples", "8", "--seed", "3",
        ])
        .unwrap();

        assert_eq!(args.scene, Some(PathBuf::from("scene.json")));
        assert_eq!(args.output, PathBuf::from("out.ppm"));

        let mut config = RenderConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.samples_per_pixel, 8);
        assert_eq!(config.seed, 3);
        // Untouched settings keep their scene values
        assert_eq!(config.max_depth, RenderConfig::default().max_depth);
        assert_eq!(config.width, RenderConfig::default().width);
    }

    #[test]
    fn test_demo_flag() {
        let args = Args::try_parse_from(["lumen", "--demo"]).unwrap();
        assert!(args.demo);
        assert!(args.scene.is_none());
        assert_eq!(args.output, PathBuf::from("output.png"));
    }

    #[test]
    fn test_scene_required_without_demo() {
        assert!(Args::try_parse_from(["lumen"]).is_err());
        assert!(Args::try_parse_from(["lumen", "a.json", "--demo"]).is_err());
    }

    #[test]
    fn test_save_image_roundtrip_dimensions() {
        let mut image = ImageBuffer::new(4, 2);
        image.set(1, 1, [10, 20, 30]);

        let path = std::env::temp_dir().join(format!("lumen_cli_test_{}.png", std::process::id()));
        save_image(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (4, 2));
        assert_eq!(loaded.get_pixel(1, 1).0, [10, 20, 30]);

        std::fs::remove_file(&path).unwrap();
    }
}
