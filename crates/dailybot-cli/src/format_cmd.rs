//! `dailybot format` — run the content transformer on a file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use dailybot_channels::ContentTransformer;

pub fn run(file: Option<&Path>, max_length: usize) -> Result<()> {
    let input = read_input(file)?;
    print!("{}", convert(&input, max_length));
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn convert(input: &str, max_length: usize) -> String {
    ContentTransformer::new(max_length).transform(input)
}
