//! Validate the keypoint lists in an annotation file.

use std::path::PathBuf;

use super::load;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating annotations at: {}", path.display());

    let annotations = load(&path)?;
    println!("  Annotations: {}", annotations.len());

    let errors: Vec<String> = annotations.iter().flat_map(|a| a.validate()).collect();
    if errors.is_empty() {
        println!("\nAll keypoint lists are valid.");
        return Ok(());
    }

    println!("\nValidation issues:");
    for error in &errors {
        println!("  - {error}");
    }
    anyhow::bail!("{} issue(s) found", errors.len())
}
