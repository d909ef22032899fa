//! Child objects, lists and saving a document to disk.
//!
//! Run with: cargo run --example nested_objects

use dserializer::{DDocument, DObject, Variant};
use std::error::Error;

fn order_line(sku: &str, quantity: i64, price: f64) -> Result<DObject, dserializer::Error> {
    let mut line = DObject::new();
    line.set_item("sku", sku)?;
    line.set_item("quantity", quantity)?;
    line.set_item("price", price)?;
    Ok(line)
}

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::temp_dir().join("dserializer-order.txt");
    let mut doc = DDocument::with_file(&path);

    let order = doc.object_mut();
    order.set_item("order_id", 12345)?;

    let customer = order.object_or_default("customer")?;
    customer.set_item("name", "Bob")?;
    customer.set_item_list("tags", vec![Variant::from("vip"), Variant::from("early")])?;

    order.set_object_list(
        "lines",
        vec![
            order_line("WIDGET-001", 2, 29.99)?,
            order_line("GADGET-002", 1, 49.99)?,
        ],
    )?;

    doc.save()?;
    println!("Saved to {}:\n", path.display());
    println!("{}", std::fs::read_to_string(&path)?);

    Ok(())
}
