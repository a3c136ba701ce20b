use std::fs;

use anyhow::{Context, Result};
use tracing::debug;

use crate::InputArgs;

/// Load the bytes named by `args`, decoding hex text when `--hex` is set.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid hex.
pub fn load(args: &InputArgs) -> Result<Vec<u8>> {
    let raw =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    if !args.hex {
        debug!(path = %args.file.display(), len = raw.len(), "read binary input");
        return Ok(raw);
    }

    let text: Vec<u8> = raw
        .into_iter()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let bytes = hex::decode(&text)
        .with_context(|| format!("{} is not valid hex", args.file.display()))?;
    debug!(path = %args.file.display(), len = bytes.len(), "read hex input");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("jmp-cli-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn hex_input_ignores_whitespace() {
        let file = temp_file("hex", b"83 a2 49 44\n d0 01\n");
        let args = InputArgs {
            file: file.clone(),
            hex: true,
            max_depth: 8,
        };
        assert_eq!(load(&args).unwrap(), vec![0x83, 0xa2, 0x49, 0x44, 0xd0, 0x01]);
        fs::remove_file(file).unwrap();
    }

    #[test]
    fn bad_hex_reported() {
        let file = temp_file("badhex", b"zz");
        let args = InputArgs {
            file: file.clone(),
            hex: true,
            max_depth: 8,
        };
        assert!(load(&args).is_err());
        fs::remove_file(file).unwrap();
    }
}
