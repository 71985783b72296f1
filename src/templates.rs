use rust_embed::RustEmbed;

use crate::scaffold::ScaffoldError;

/// Boilerplate bodies, keyed by their path relative to the generated project root.
#[derive(RustEmbed)]
#[folder = "templates/go"]
struct Templates;

pub fn get_bytes(path: &str) -> Result<Vec<u8>, ScaffoldError> {
    let file = Templates::get(path)
        .ok_or_else(|| ScaffoldError::Template(format!("embedded template `{}` missing", path)))?;
    Ok(file.data.as_ref().to_vec())
}
