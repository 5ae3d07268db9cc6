//! Play the Color Door Adventure on a terminal.

use std::io;

use anyhow::Result;
use clap::Parser;

use colordoor_cli::{App, RustylineEditor};
use colordoor_core::{GameState, house};

#[derive(Parser, Debug)]
#[command(name = "colordoor", version, about = "A small text adventure about colored doors")]
struct Args {
    /// Skip the welcome banner.
    #[arg(long)]
    no_banner: bool,

    /// Print the house as JSON and exit without playing.
    #[arg(long)]
    dump_world: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.dump_world {
        let house = house::build()?;
        println!("{}", serde_json::to_string_pretty(&house.world)?);
        return Ok(());
    }

    let state = GameState::new()?;
    let editor = RustylineEditor::new()?;
    let mut app = App::new(state, editor, io::stdout());
    if args.no_banner {
        app = app.without_banner();
    }
    app.run()
}
