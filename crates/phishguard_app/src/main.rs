mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = platform::cli::Args::parse();
    platform::logging::initialize(args.log);
    platform::app::run_app(args)
}
