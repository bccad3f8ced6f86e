//! Your first ZSON experience: deserializing a commented document.
//!
//! Run with: `cargo run --example simple`

use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct Service {
    name: String,
    replicas: u32,
    memory_bytes: u64,
}

fn main() -> serde_zson::Result<()> {
    let config = r#"
// Deployment settings for the ingest tier.
{
  "name": "ingest",
  "replicas": 4, /* bumped for the launch */
  "memory_bytes": 2_147_483_648
}
"#;

    let service: Service = serde_zson::from_str(config)?;
    println!("{service:#?}");
    Ok(())
}
