//! Write the formwork equations reference (pressure envelopes, tie design
//! and quantity takeoff formulas) as Markdown.
//!
//! ```bash
//! gen-equations                  # formwork_core/EQUATIONS.md
//! gen-equations docs/formulas.md
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use formwork_core::equations::generate_equations_markdown;

fn output_path(mut args: impl Iterator<Item = String>) -> Result<PathBuf> {
    let path = match args.next() {
        Some(arg) => PathBuf::from(arg),
        None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("EQUATIONS.md"),
    };
    if let Some(extra) = args.next() {
        bail!("unexpected argument '{}': expected at most one output path", extra);
    }
    Ok(path)
}

fn main() -> Result<()> {
    let path = output_path(std::env::args().skip(1))?;
    let markdown = generate_equations_markdown();

    fs::write(&path, &markdown).with_context(|| format!("writing equations reference to {}", path.display()))?;
    println!("Wrote {} bytes to {}", markdown.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_default_path_is_beside_manifest() {
        let path = output_path(args(&[])).unwrap();
        assert!(path.ends_with("EQUATIONS.md"));
        assert!(path.starts_with(env!("CARGO_MANIFEST_DIR")));
    }

    #[test]
    fn test_explicit_path() {
        assert_eq!(output_path(args(&["out/ref.md"])).unwrap(), PathBuf::from("out/ref.md"));
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(output_path(args(&["a.md", "b.md"])).is_err());
    }
}
