//! Statement Compiler
//!
//! Compiles a template JSON and an XML payload into an XSL-FO document.
//!
//! Usage:
//!   cargo run --example compile_statement -- <template.json> <payload.xml> [output.fo]
//!
//! Examples:
//!   cargo run --example compile_statement -- demos/statement.json demos/statement.xml
//!   RUST_LOG=debug cargo run --example compile_statement -- demos/statement.json demos/statement.xml output/statement.fo

use std::path::Path;
use template::{parse_template, Compiler, CompilerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} <template.json> <payload.xml> [output.fo]",
            args[0]
        );
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --example compile_statement -- demos/statement.json demos/statement.xml");
        std::process::exit(1);
    }

    let template_path = &args[1];
    let payload_path = &args[2];

    let template_json = std::fs::read_to_string(template_path)
        .map_err(|e| format!("Failed to read template '{}': {}", template_path, e))?;
    let payload = std::fs::read_to_string(payload_path)
        .map_err(|e| format!("Failed to read payload '{}': {}", payload_path, e))?;

    let template = match parse_template(&template_json) {
        Ok(template) => template,
        Err(err) => {
            for finding in err.findings() {
                eprintln!("  {}", finding);
            }
            return Err(err.into());
        }
    };

    log::info!(
        "Loaded '{}' with {} page(s), bindings: {:?}",
        template.name,
        template.pages.len(),
        template.binding_paths()
    );

    let compiler = Compiler::new(CompilerConfig::default());
    let document = compiler.compile(&template, &payload)?;

    match args.get(3) {
        Some(output_path) => {
            if let Some(parent) = Path::new(output_path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(output_path, &document)?;
            println!("Generated: {}", output_path);
        }
        None => print!("{}", document),
    }

    Ok(())
}
