use clap::Parser;
use recipe_importer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    eprintln!("Failed to listen for CTRL+C: {}", e);
                }
                eprintln!("\nReceived CTRL+C, stopping...");
                Err(recipe_importer::Error::processing_interrupted(
                    "Interrupted by user; records already sent were kept".to_string(),
                ))
            }
        }
    });

    match result {
        Ok(stats) if stats.records_failed > 0 => process::exit(2),
        Ok(_) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Recipe Importer - Excel recipe sheets to a recipe store");
    println!("=======================================================");
    println!();
    println!("Reconstructs recipes from loosely structured spreadsheet exports and");
    println!("loads them into a REST record store.");
    println!();
    println!("USAGE:");
    println!("    recipe-importer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    import      Extract recipes from a workbook and create them in the store");
    println!("    enrich      Fill in nutrition for stored recipes from a nutrient workbook");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Preview what would be imported:");
    println!("    recipe-importer import recipes.xlsx --dry-run");
    println!();
    println!("    # Import without the confirmation prompt:");
    println!("    recipe-importer import recipes.xlsx --owner chef@example.com --yes");
    println!();
    println!("    # Enrich stored recipes with nutrition data:");
    println!("    recipe-importer enrich nutrients.xlsx --sheet Sheet1");
    println!();
    println!("ENVIRONMENT:");
    println!("    RECIPE_STORE_URL, RECIPE_STORE_KEY, RECIPE_OWNER_EMAIL (also read from .env)");
    println!();
    println!("For detailed help on any command, use:");
    println!("    recipe-importer <COMMAND> --help");
}
