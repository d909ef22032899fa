//! Customizing output with FormatOptions.
//!
//! Run with: cargo run --example custom_options

use dserializer::{to_string, to_string_with_options, DObject, FormatOptions, Indent};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut config = DObject::new();
    config.set_item("name", "MyApp")?;
    config.set_item("debug", true)?;
    config
        .object_or_default("window")?
        .set_item("width", 1024)?;

    // Default format (tab indentation)
    println!("Default (tabs):");
    println!("{}\n", to_string(&config)?);

    // Two-space indentation
    println!("Two spaces:");
    let spaces = FormatOptions::new().with_indent(Indent::Spaces(2));
    println!("{}\n", to_string_with_options(&config, &spaces)?);

    // Trailing newline, for tools that expect one
    println!("Trailing newline:");
    let newline = FormatOptions::new().with_trailing_newline(true);
    print!("{}", to_string_with_options(&config, &newline)?);

    Ok(())
}
