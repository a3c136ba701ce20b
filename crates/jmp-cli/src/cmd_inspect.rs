/// Implementation of `jmp inspect`.
///
/// Walks every top-level value in the file and prints one line per value
/// (and per map key): its offset, its leading format code, the format
/// family and what it decodes to. Nested values are indented under their key.
///
/// # Output format
///
/// ```text
///      0  0x82  fixmap (2 entries)
///      1  0xa2    key "ID"
///      4  0xd0      int 1
///      6  0xa4    key "Name"
///     11  0xc0      nil
/// ```
///
/// Only the decoder's subset is understood: nil, Int8..Int64, strings and
/// maps. Anything else stops the walk with the offending offset.
use std::fmt::Write as _;

use anyhow::{Context, Result};
use jmp_wire::format::FormatCode;
use jmp_wire::{ByteCursor, WireError, scalar};

use crate::{InspectArgs, input};

/// Run the `jmp inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains a value
/// outside the supported subset.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes = input::load(&args.input)?;
    let listing = render(&bytes, args.input.max_depth)
        .with_context(|| format!("failed to inspect {}", args.input.file.display()))?;
    print!("{listing}");
    Ok(())
}

/// Render the listing for every value in `bytes`.
pub fn render(bytes: &[u8], max_depth: usize) -> Result<String, WireError> {
    let mut out = String::new();
    let mut cursor = ByteCursor::new(bytes);
    while !cursor.is_at_end() {
        value(&mut cursor, &mut out, 0, 0, max_depth)?;
    }
    Ok(out)
}

fn line(out: &mut String, offset: usize, code: u8, indent: usize, label: &str) {
    let pad = "  ".repeat(indent);
    let _ = writeln!(out, "{offset:>6}  {code:#04x}  {pad}{label}");
}

fn value(
    cursor: &mut ByteCursor<'_>,
    out: &mut String,
    indent: usize,
    depth: usize,
    max_depth: usize,
) -> Result<(), WireError> {
    let offset = cursor.offset();
    let code = cursor.peek_u8()?;

    let Some(format) = FormatCode::from_byte(code) else {
        return Err(WireError::UnsupportedCode {
            code,
            offset,
            expected: "value",
        });
    };
    let family = format.family();

    let label = match format {
        FormatCode::Nil => {
            cursor.read_u8()?;
            family.to_string()
        }
        FormatCode::Int(_) => format!("{family} {}", scalar::read_int(cursor)?),
        FormatCode::FixStr(_) | FormatCode::Str(_) => {
            format!("{family} {:?}", scalar::read_str(cursor)?)
        }
        FormatCode::FixMap(_) | FormatCode::Map(_) => {
            if depth >= max_depth {
                return Err(WireError::NestingTooDeep {
                    limit: max_depth,
                    offset,
                });
            }
            let count = scalar::read_map_len(cursor)?;
            line(out, offset, code, indent, &format!("{family} ({count} entries)"));
            for _ in 0..count {
                key(cursor, out, indent + 1)?;
                value(cursor, out, indent + 2, depth + 1, max_depth)?;
            }
            return Ok(());
        }
        _ => {
            return Err(WireError::UnsupportedCode {
                code,
                offset,
                expected: "value",
            });
        }
    };

    line(out, offset, code, indent, &label);
    Ok(())
}

fn key(cursor: &mut ByteCursor<'_>, out: &mut String, indent: usize) -> Result<(), WireError> {
    let offset = cursor.offset();
    let code = cursor.peek_u8()?;
    let key = scalar::read_str_bytes(cursor)?;
    let label = format!("key {:?}", String::from_utf8_lossy(key));
    line(out, offset, code, indent, &label);
    Ok(())
}
