// rust/sprite_cli/src/main.rs
#![forbid(unsafe_code)]

mod gallery;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use block_sprites::sprites::{GLYPH_COUNT, ROTATION_MASK, glyph_bitmap};
use block_sprites::{Glyph, Kind, Orientation, SpriteResult, VisualStyle, rasterize};

use crate::gallery::{GalleryConfig, GalleryRunner, side_by_side};

#[derive(Parser, Debug)]
#[command(name = "sprite_cli", about = "Inspect and preview block-sprite visual styles")]
struct Args {
    /// Log verbosity: -v = info, -vv = debug, -vvv = trace. RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every visual style with its table format and size.
    Styles,

    /// Print glyph bitmaps as ASCII.
    Glyphs {
        /// Only print the rotation family starting at this id (e.g. 0x30 or 48).
        #[arg(long, value_parser = parse_glyph_id)]
        family: Option<u8>,
    },

    /// Render one piece in a style.
    Render {
        /// Style name, e.g. "tron", "tron_angled", "shaded".
        #[arg(long, default_value = "solid")]
        style: String,

        /// Piece letter: I | O | T | S | Z | J | L
        #[arg(long, default_value = "T")]
        piece: String,

        /// Orientation 0..3 (clockwise from spawn). Omit to show all four side by side.
        #[arg(long)]
        orientation: Option<usize>,
    },

    /// Render a seeded 7-bag sequence of pieces at random orientations.
    Gallery {
        #[arg(long, default_value = "tron")]
        style: String,

        /// Number of pieces to draw.
        #[arg(long, default_value_t = 7)]
        count: usize,

        /// RNG seed. If omitted, a fixed default is used.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_glyph_id(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    match parsed {
        Ok(id) if (id as usize) < GLYPH_COUNT => Ok(id),
        Ok(id) => Err(format!("glyph id {id} out of range (0..{GLYPH_COUNT})")),
        Err(e) => Err(e.to_string()),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn glyph_ascii(g: Glyph) -> [String; 3] {
    glyph_bitmap(g).map(|row| row.iter().map(|&p| if p { '#' } else { '.' }).collect())
}

fn print_styles() -> SpriteResult<()> {
    println!("{:<14} {:<24} {:>5}", "style", "format", "bytes");
    for &style in VisualStyle::all() {
        let table = style.table()?;
        println!(
            "{:<14} {:<24} {:>5}",
            style.name(),
            format!("{:?}", table.format()),
            style.data().len()
        );
    }
    Ok(())
}

fn print_glyphs(family: Option<u8>) {
    let ids: Vec<u8> = match family {
        Some(base) => {
            let base = base & !ROTATION_MASK;
            (base..base + 4).collect()
        }
        None => (0..GLYPH_COUNT as u8).collect(),
    };
    for chunk in ids.chunks(4) {
        let glyphs: Vec<Glyph> = chunk.iter().filter_map(|&id| Glyph::from_id(id)).collect();
        for g in &glyphs {
            print!("{:<28}", format!("[{:#04x}] {:?}", g.id(), g));
        }
        println!();
        for r in 0..3 {
            for g in &glyphs {
                print!("{:<28}", glyph_ascii(*g)[r]);
            }
            println!();
        }
        println!();
    }
}

fn render(style: &str, piece: &str, orientation: Option<usize>) -> SpriteResult<()> {
    let style: VisualStyle = style.parse()?;
    let kind = Kind::from_letter(piece)?;
    let table = style.table()?;
    debug!(?style, ?kind, format = ?table.format(), "render");

    match orientation {
        Some(i) => {
            let o = Orientation::from_index(i)?;
            print!("{}", rasterize(&table, kind, o)?.render_ascii());
        }
        None => {
            let mut frames = Vec::with_capacity(Orientation::all().len());
            for &o in Orientation::all() {
                frames.push(rasterize(&table, kind, o)?);
            }
            print!("{}", side_by_side(&frames));
        }
    }
    Ok(())
}

fn run(args: Args) -> SpriteResult<()> {
    match args.command {
        Command::Styles => print_styles(),
        Command::Glyphs { family } => {
            print_glyphs(family);
            Ok(())
        }
        Command::Render {
            style,
            piece,
            orientation,
        } => render(&style, &piece, orientation),
        Command::Gallery { style, count, seed } => {
            // Gallery configuration (data only; no logic).
            let cfg = GalleryConfig {
                style: style.parse()?,
                count,
                seed: seed.unwrap_or(12345),
            };
            let mut runner = GalleryRunner::new(cfg);
            print!("{}", runner.run()?);
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_ids_parse_as_hex_or_decimal() {
        assert_eq!(parse_glyph_id("0x2C"), Ok(0x2C));
        assert_eq!(parse_glyph_id("0X3f"), Ok(63));
        assert_eq!(parse_glyph_id("12"), Ok(12));
        assert_eq!(parse_glyph_id("0"), Ok(0));
    }

    #[test]
    fn glyph_ids_past_the_catalog_are_rejected() {
        assert!(parse_glyph_id("64").is_err());
        assert!(parse_glyph_id("0x40").is_err());
        assert!(parse_glyph_id("300").is_err());
        assert!(parse_glyph_id("zz").is_err());
        assert!(parse_glyph_id("").is_err());
    }

    #[test]
    fn cli_args_parse() {
        let args = Args::try_parse_from(["sprite_cli", "-vv", "gallery", "--style", "tron"])
            .unwrap();
        assert_eq!(args.verbose, 2);
        assert!(matches!(args.command, Command::Gallery { count: 7, seed: None, .. }));
        assert!(Args::try_parse_from(["sprite_cli", "glyphs", "--family", "0x99"]).is_err());
    }
}
