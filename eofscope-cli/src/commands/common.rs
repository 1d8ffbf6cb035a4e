use anyhow::{bail, Context};
use eofscope::from_hex;

use crate::app::InputArgs;

/// Raw container bytes and a display name for where they came from.
pub struct LoadedInput {
    pub source: String,
    pub bytes: Vec<u8>,
}

/// Read the container bytes named by `input`, either from `--hex` or from a file.
pub fn load_input(input: &InputArgs) -> anyhow::Result<LoadedInput> {
    if let Some(hex) = &input.hex {
        let bytes = from_hex(hex).context("failed to decode --hex input")?;
        return Ok(LoadedInput {
            source: "<hex>".to_string(),
            bytes,
        });
    }

    let Some(path) = &input.path else {
        bail!("no input given: pass a FILE or --hex");
    };

    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read: {}", path.display()))?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    Ok(LoadedInput {
        source: path.display().to_string(),
        bytes,
    })
}
