use clap::Parser;

use interactive_calc::{Config, logging, run};

#[derive(Parser)]
#[command(
    name = "interactive_calc",
    version,
    about = "Interactive calculator for binary integer operations"
)]
struct Cli {
    /// Enable the remainder operation `%`.
    #[arg(long)]
    remainder: bool,

    /// Raise the default log level (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    logging::init(logging::level_for_verbosity(cli.verbose));

    let config = Config::default().with_remainder(cli.remainder);

    // сюда доходят только отказы самих потоков, например закрытый stdout
    if let Err(e) = run(config) {
        eprintln!("Ошибка: {e}");
        std::process::exit(1);
    }
}
