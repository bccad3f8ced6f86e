//! Emitting normalized JSON text instead of a value tree.
//!
//! Run with: `cargo run --example normalize`

use serde_zson::{parse_with, Identity};

fn main() -> serde_zson::Result<()> {
    let annotated = r#"{
  // Weights are grouped for readability.
  "threshold": 1_000_000,
  "motd": """Welcome back.
All systems nominal."""
}"#;

    let json = parse_with(annotated, Identity)?;
    println!("{json}");
    Ok(())
}
