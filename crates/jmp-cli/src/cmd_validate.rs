/// Implementation of `jmp validate`.
///
/// Checks that the file is exactly one complete value of the subset the
/// decoder reads, with no bytes left over. Prints `✓` lines on success or
/// a single `✗` diagnostic on failure; the main dispatcher turns the
/// failure into exit code 1.
///
/// # Success output
///
/// ```text
/// ✓ Value: one complete fixmap value
/// ✓ Size: all 27 bytes consumed
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: decoded value ends at offset 27 but buffer is 28 bytes
/// ```
use anyhow::{Result, anyhow};
use jmp_decoder::DecodeError;
use jmp_wire::format::FormatCode;
use jmp_wire::{ByteCursor, scalar};

use crate::{ValidateArgs, input};

/// Run the `jmp validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes = input::load(&args.input)?;

    match check(&bytes, args.input.max_depth) {
        Ok(family) => {
            println!("✓ Value: one complete {family} value");
            println!("✓ Size: all {} bytes consumed", bytes.len());
            Ok(())
        }
        Err(e) => {
            println!("✗ Error: {e}");
            Err(anyhow!("validation failed"))
        }
    }
}

/// Walk one value and require it to span the whole buffer.
///
/// Returns the format family of the top-level value.
fn check(bytes: &[u8], max_depth: usize) -> Result<&'static str, DecodeError> {
    let Some(&first) = bytes.first() else {
        return Err(DecodeError::EmptyInput);
    };
    let family = FormatCode::from_byte(first).map_or("unknown", FormatCode::family);

    let mut cursor = ByteCursor::new(bytes);
    scalar::skip_value(&mut cursor, max_depth)?;
    if !cursor.is_at_end() {
        return Err(DecodeError::SizeMismatch {
            len: bytes.len(),
            consumed: cursor.offset(),
        });
    }
    Ok(family)
}
