mod seed;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "store-seed")]
#[command(version)]
#[command(about = "Generate fake customer and order INSERT statements", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Number of customers to generate (default: 100)
    #[arg(short, long)]
    pub customers: Option<u64>,

    /// Number of orders to generate (default: 10000)
    #[arg(short, long)]
    pub orders: Option<u64>,

    /// Number of products; also links every order to at least one product
    #[arg(long)]
    pub products: Option<u64>,

    /// Maximum distinct products linked to a single order (default: 3)
    #[arg(long)]
    pub max_products_per_order: Option<u64>,

    /// Emit CREATE TABLE statements before the data
    #[arg(long)]
    pub schema: bool,

    /// YAML config file with counts (customerCount, orderCount, ...)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output SQL file (default: stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Show progress on stderr
    #[arg(short, long)]
    pub progress: bool,

    /// Print a summary of generated rows on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "store-seed", &mut io::stdout());
            Ok(())
        }
        None => seed::run(cli.generate),
    }
}
