use anyhow::Error;
use clap::{Parser, Subcommand};
use log::info;

use crate::driver::PixelTransport;
use crate::pixel::Pixel;
use crate::strip::PixelStrip;

#[derive(Parser, Debug)]
#[command(name = "rusty-pixels", version, about = "Light up some pixels!")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Set the pixel color.
    #[command(alias = "c")]
    Color {
        /// Red value
        #[arg(short, long, value_name = "N")]
        red: Option<u8>,
        /// Green value
        #[arg(short, long, value_name = "N")]
        green: Option<u8>,
        /// Blue value
        #[arg(short, long, value_name = "N")]
        blue: Option<u8>,
    },
    /// Turn pixels on.
    #[command(alias = "o")]
    On,
    /// Turn pixels off.
    #[command(alias = "f")]
    Off,
}

/// What a single run of the program should do, decided once from argv and
/// consumed exactly once by `dispatch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SetColor {
        red: Option<u8>,
        green: Option<u8>,
        blue: Option<u8>,
    },
    On,
    Off,
    NoOp,
}

impl From<Cli> for Command {
    fn from(cli: Cli) -> Command {
        match cli.command {
            Some(CliCommand::Color { red, green, blue }) => Command::SetColor { red, green, blue },
            Some(CliCommand::On) => Command::On,
            Some(CliCommand::Off) => Command::Off,
            None => Command::NoOp,
        }
    }
}

/// Route the parsed command to the buffer. Every lit path ends in a flush.
pub fn dispatch<T: PixelTransport>(command: Command, strip: &mut PixelStrip<T>) -> Result<(), Error> {
    match command {
        Command::NoOp => {
            println!("Please choose a command to run.");
            println!("See `rusty-pixels --help` for the available commands.");
        }
        Command::SetColor { red, green, blue } => {
            // Unspecified channels fall back to 0
            let color = Pixel::new(red.unwrap_or(0), green.unwrap_or(0), blue.unwrap_or(0));
            info!("Filling the strip with {:?}", color);
            strip.fill(color);
            strip.show()?;
        }
        Command::On => {
            info!("Turning the strip on");
            strip.fill(Pixel::WHITE);
            strip.show()?;
        }
        Command::Off => {
            info!("Turning the strip off");
            strip.fill(Pixel::BLACK);
            strip.show()?;
        }
    }

    Ok(())
}
