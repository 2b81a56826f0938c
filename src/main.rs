use clap::Parser;

use lang_stats::cli::{Cli, Commands};
use lang_stats::commands::{run_config, run_generate, run_init, run_summary};
use lang_stats::logging;
use lang_stats::output::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Generate(args) => run_generate(args, &cli),
        Commands::Summary(args) => run_summary(args, &cli),
        Commands::Init(args) => run_init(args, &ErrorOutput::new(cli.color)),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
