use crate::config::Config;
use crate::error::SheetResult;
use crate::pipeline;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the run command: perform the transfer described by a config file.
pub fn run(config_path: PathBuf, verbose: bool) -> SheetResult<()> {
    println!("{}", "🔥 SheetForge - Transferring values".bold().green());
    println!("   Config: {}", config_path.display());
    println!();

    let config = Config::load(&config_path)?;

    if verbose {
        println!("{}", "📖 Configuration".cyan());
        println!(
            "   {} → {}",
            config.files.value_file.display(),
            config.files.output_file.display()
        );
        println!(
            "   Copy {} from '{}' to {} on '{}' (template '{}')",
            config.copy_settings.copy_range.bright_yellow(),
            config.sheets.value_sheet,
            config.copy_settings.paste_start.bright_yellow(),
            config.sheets.output_sheet,
            config.sheets.template_sheet
        );
        println!();
    }

    let summary = pipeline::run(&config)?;

    println!("{}", "✅ Transfer complete:".bold().green());
    println!(
        "   Sheet {} now holds {} transferred rows, ending at row {}",
        summary.output_sheet.bright_blue().bold(),
        summary.rows_transferred,
        summary.last_row
    );
    println!("   Saved: {}", config.files.output_file.display());

    Ok(())
}

/// Execute the check command: validate a config file and the documents it
/// names without writing anything.
pub fn check(config_path: PathBuf) -> SheetResult<()> {
    println!("{}", "🔍 SheetForge - Checking configuration".bold().green());
    println!("   Config: {}\n", config_path.display());

    let config = Config::load(&config_path)?;
    let summary = pipeline::check(&config)?;

    println!("{}", "✅ Configuration is valid:".bold().green());
    println!(
        "   Both documents open; sheets '{}' and '{}' present",
        config.sheets.value_sheet.bright_blue(),
        config.sheets.template_sheet.bright_blue()
    );
    println!(
        "   A run would paste {} rows ending at row {}",
        summary.rows_transferred, summary.last_row
    );

    Ok(())
}
