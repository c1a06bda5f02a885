//! # Resource Declaration Validator
//!
//! A command-line utility that checks resource declaration files build a
//! schema registry, so malformed declarations are caught before a service
//! starts with them.
//!
//! ## Usage
//!
//! ### Validate a Single Declaration File
//!
//! ```bash
//! cargo run --bin declaration-validator declarations/Device.json
//! ```
//!
//! ### Validate All Declarations in a Directory
//!
//! ```bash
//! cargo run --bin declaration-validator ./declarations/
//! ```
//!
//! A file holds either one resource declaration or an array of them. All
//! files of a directory are built into one registry, so resource type names
//! must be unique across files.
//!
//! ## Output Example
//!
//! ```text
//! Validating: Device.json
//!   ✓ Parsed 1 declaration(s)
//!
//! Building schema registry...
//! ✓ Schema registry built successfully
//!
//! Device (urn:example:Device)
//!   Attributes: 3 (1 complex, 1 aliased)
//!   Extensions: 0
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: The registry builds
//! - `1`: A file could not be read or decoded, or the build failed

use scim_directory_filter::schema::{ResourceDeclaration, ResourceSchema, SchemaRegistry};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <declaration-file-or-directory>", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} declarations/Device.json", args[0]);
        eprintln!("  {} ./declarations/", args[0]);
        process::exit(1);
    }

    let path = Path::new(&args[1]);

    let files = if path.is_file() {
        vec![path.to_path_buf()]
    } else if path.is_dir() {
        match json_files(path) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("Error reading directory: {}", e);
                process::exit(1);
            }
        }
    } else {
        eprintln!(
            "Error: '{}' is not a valid file or directory",
            path.display()
        );
        process::exit(1);
    };

    let mut declarations = Vec::new();
    let mut error_count = 0;

    for file in &files {
        println!("Validating: {}", file.display());
        match load_declarations(file) {
            Ok(loaded) => {
                println!("  ✓ Parsed {} declaration(s)", loaded.len());
                declarations.extend(loaded);
            }
            Err(e) => {
                eprintln!("  ❌ Invalid - {}", e);
                error_count += 1;
            }
        }
    }

    if error_count > 0 {
        eprintln!("\n{} file(s) could not be decoded", error_count);
        process::exit(1);
    }

    println!("\nBuilding schema registry...");
    match SchemaRegistry::from_declarations(declarations) {
        Ok(registry) => {
            println!("✓ Schema registry built successfully");
            for resource in registry.resource_types() {
                print_resource_summary(resource);
            }
        }
        Err(e) => {
            eprintln!("❌ Failed to build schema registry: {}", e);
            process::exit(1);
        }
    }
}

fn json_files(dir_path: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir_path)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_declarations(file_path: &Path) -> Result<Vec<ResourceDeclaration>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(file_path)?;
    Ok(SchemaRegistry::load_declarations_from_str(&content)?)
}

fn print_resource_summary(resource: &ResourceSchema) {
    let attributes = resource.attributes();
    let complex = attributes.iter().filter(|attr| attr.is_complex()).count();
    let aliased = attributes.iter().filter(|attr| attr.is_aliased()).count();

    println!();
    println!("{} ({})", resource.resource_type(), resource.schema_urn());
    println!(
        "  Attributes: {} ({} complex, {} aliased)",
        attributes.len(),
        complex,
        aliased
    );
    if let Some(name_attribute) = resource.name_attribute() {
        println!(
            "  Name attribute: {} (identifier stored as '{}')",
            name_attribute,
            resource.identifier_storage_name()
        );
    }
    println!("  Extensions: {}", resource.extensions().len());
    for extension in resource.extensions() {
        println!("    - {} ({} fields)", extension.urn, extension.fields.len());
    }
}
