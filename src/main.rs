use anyhow::Error;
use clap::Parser;
use rusty_pixels::prelude::*;

fn main() -> Result<(), Error> {
    env_logger::init();

    // clap reports bad arguments on stderr and exits nonzero on its own
    let cli = Cli::parse();

    // Load the config file
    let config = Config::load()?;

    // Bring up the link to the strip controller
    let transport = SpiTransport::init(&config)?;
    let mut strip = PixelStrip::configure(transport, &config)?;

    dispatch(Command::from(cli), &mut strip)
}
