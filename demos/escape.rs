use clap::Parser;
use delim_escape::Escaper;

#[derive(Parser)]
struct Opts {
    /// Bytes to escape in addition to the marker.
    #[clap(long, default_value = "")]
    unwanted: String,
    /// Escape sequence marker.
    #[clap(long, default_value = "%")]
    marker: char,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    Escape { input: String },
    Unescape { input: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let opts = Opts::parse();
    anyhow::ensure!(opts.marker.is_ascii(), "marker must be a single byte");
    let escaper = Escaper::with_marker(opts.unwanted.as_bytes(), opts.marker as u8);
    tracing::debug!(?escaper);

    match opts.command {
        Command::Escape { input } => {
            println!("{}", escaper.escape(input.as_bytes()).escape_ascii());
        }
        Command::Unescape { input } => {
            println!("{}", escaper.unescape(input.as_bytes())?.escape_ascii());
        }
    }

    Ok(())
}
