use clap::Parser;

/// Folio: a tiling layout engine for a portfolio desktop, driven by
/// line commands on stdin.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Initial container width.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Initial container height.
    #[arg(long, default_value_t = 800.0)]
    pub height: f64,
}

pub fn parse() -> Args {
    Args::parse()
}
