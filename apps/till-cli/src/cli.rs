use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "till", version, about = "Process a day's till transactions and work out change")]
pub struct Cli {
    #[arg(short, long, help = "Transaction log to process (default: input.txt)")]
    pub input: Option<PathBuf>,

    #[arg(short, long, help = "TOML config file with float and currency settings")]
    pub config: Option<PathBuf>,

    #[arg(
        long = "float",
        value_name = "ENTRY",
        help = "Opening float entry such as \"5 x R50\"; repeat for each denomination"
    )]
    pub float: Vec<String>,

    #[arg(long, value_name = "SYMBOL", help = "Currency symbol prefixing every amount")]
    pub currency: Option<String>,

    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}
