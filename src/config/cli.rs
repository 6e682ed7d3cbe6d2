use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "blueprint-check")]
#[command(about = "Validate the structure of a render.yaml Blueprint")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
