//! Generate-key command - prints keys to stdout

use clap::Args;

use crate::infrastructure::api_key::ApiKeyGenerator;

/// Arguments for the generate-key command
#[derive(Args, Debug)]
pub struct GenerateKeyArgs {
    /// Number of keys to print
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,
}

/// Print `count` keys, one per line
pub fn run(args: GenerateKeyArgs) -> anyhow::Result<()> {
    let generator = ApiKeyGenerator::new();

    for _ in 0..args.count {
        println!("{}", generator.generate());
    }

    Ok(())
}
