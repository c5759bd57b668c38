use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "splitmerge")]
#[command(about = "Split pages out of a PDF or merge several PDFs into one")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server on stdin/stdout
    Mcp,

    /// Copy selected pages of one PDF, in the given order, into split.pdf
    #[command(alias = "extract")]
    Split {
        /// Page numbers, comma separated and 1-based (e.g., "3,1,3")
        #[arg(short, long)]
        pages: String,

        /// PDF file to split (a directory counts as the PDFs inside it)
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory or file
        #[arg(short, long, env = "SPLITMERGE_OUTPUT", default_value = ".")]
        output: PathBuf,
    },

    /// Concatenate PDFs, in the given order, into merged.pdf
    #[command(alias = "cat")]
    Merge {
        /// PDF files or directories to merge
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory or file
        #[arg(short, long, env = "SPLITMERGE_OUTPUT", default_value = ".")]
        output: PathBuf,
    },
}
