use clap::Parser;
use tailwind_safelist::{check, handle_filter_command, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Handle commands
    match cli.command {
        Commands::Check(args) => match check(&args) {
            Ok(outcome) => {
                println!("Configuration OK: {}", args.config.display());
                println!("  - {} content globs", outcome.content_globs);
                println!("  - {} safelist rules", outcome.safelist_rules);
                println!("  - {} plugins", outcome.plugins);
                Ok(())
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Filter(args) => {
            handle_filter_command(args).await?;
            Ok(())
        }
    }
}
