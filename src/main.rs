//! Print the structural hash and every href of a JSON document.
//!
//! ```text
//! hyperjson <file> [base]
//! RUST_LOG=debug hyperjson api.json http://api.example.com
//! ```

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use hyperjson::{ParseConfig, parse_reader};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: hyperjson <file> [base]");
        return Ok(ExitCode::from(2));
    };
    let base = args.next().unwrap_or_default();

    let file = BufReader::new(File::open(&path)?);
    let doc = parse_reader(file, &base, &ParseConfig::default())?;

    println!("hash\t{}", doc.hash());
    for link in doc.links() {
        let pointer = if link.pointer.is_empty() { "/" } else { link.pointer.as_str() };
        let origin = if link.synthesized { "derived" } else { "source" };
        println!("{pointer}\t{}\t{origin}", link.href);
    }

    Ok(ExitCode::SUCCESS)
}
