//! Build a small document tree and print it.
//!
//! Run with: cargo run --example simple

use dserializer::{to_string, DObject, Variant};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut user = DObject::new();
    user.set_item("id", 42)?;
    user.set_item("name", "Alice Johnson")?;
    user.set_item("active", true)?;
    user["score"] = Variant::from(97.5);

    let text = to_string(&user)?;
    println!("Document output:\n{}\n", text);

    // Names are unique across every category of an object
    if let Err(err) = user.set_item_list("name", vec![]) {
        println!("Rejected: {}", err);
    }

    // Reading the wrong type is an error, not a default
    if let Err(err) = user["id"].as_string() {
        println!("Rejected: {}", err);
    }

    Ok(())
}
