use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use sdl2::pixels::Color;

use c8vm::{Chip8, Config};
use display::Palette;

mod keymap;
mod run;
mod sound;

use run::{HostOptions, SdlHost};

/// Runs a Chip-8 ROM in an SDL2 window
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM to load at 0x200
    rom: PathBuf,

    /// Instructions executed per 60Hz frame
    #[arg(long, default_value_t = 10, value_parser = parse_cycles)]
    cycles: usize,

    /// Window pixels per Chip-8 pixel
    #[arg(long, default_value_t = 20)]
    scale: u32,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Colour of lit pixels as RRGGBB
    #[arg(long, default_value = "FFFFFF", value_parser = parse_color)]
    fg: Color,

    /// Colour of unlit pixels as RRGGBB
    #[arg(long, default_value = "000000", value_parser = parse_color)]
    bg: Color,

    /// Disable the buzzer
    #[arg(long)]
    mute: bool,
}

fn parse_cycles(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_color(s: &str) -> std::result::Result<Color, String> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(format!("expected RRGGBB, got {:?}", s));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|e| e.to_string())?;
    Ok(Color::RGB((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

fn run(args: Args) -> Result<()> {
    let config = Config {
        cycles_per_frame: args.cycles,
        seed: args.seed,
    };
    let mut chip8 = Chip8::new(config);

    let file = File::open(&args.rom)
        .with_context(|| format!("unable to open {}", args.rom.display()))?;
    chip8
        .load_rom(&mut BufReader::new(file))
        .with_context(|| format!("unable to load {}", args.rom.display()))?;

    let title = match args.rom.file_name() {
        Some(name) => format!("c8vm - {}", name.to_string_lossy()),
        None => "c8vm".to_string(),
    };
    let options = HostOptions {
        title,
        scale: args.scale,
        palette: Palette {
            foreground: args.fg,
            background: args.bg,
        },
        mute: args.mute,
    };
    let mut host = SdlHost::new(&options).context("unable to start SDL")?;

    chip8.run(&mut host)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{:#}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("FF8000"), Ok(Color::RGB(0xFF, 0x80, 0x00)));
        assert_eq!(parse_color("#00ff00"), Ok(Color::RGB(0x00, 0xFF, 0x00)));
        assert!(parse_color("FFF").is_err());
        assert!(parse_color("GGGGGG").is_err());
    }

    #[test]
    fn test_parse_cycles() {
        assert_eq!(parse_cycles("10"), Ok(10));
        assert!(parse_cycles("0").is_err());
        assert!(parse_cycles("-1").is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["chip8", "pong.ch8"]).unwrap();
        assert_eq!(args.cycles, 10);
        assert_eq!(args.scale, 20);
        assert_eq!(args.seed, None);
        assert_eq!(args.fg, Color::RGB(0xFF, 0xFF, 0xFF));
        assert_eq!(args.bg, Color::RGB(0, 0, 0));
        assert!(!args.mute);
    }
}
