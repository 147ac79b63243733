use std::io::Write;

use libpromoter::structs::Sequence;

use crate::args::CleanArgs;
use crate::util::{read_input, resolve_input_path, writer_for};

/// Write each cleaned sequence to `writer`.
pub fn write_cleaned(bytes: &[u8], writer: &mut impl Write) -> anyhow::Result<()> {
    for sequence in Sequence::from_input_bytes(bytes)? {
        log::debug!(
            "kept {} bases, dropped {} bytes",
            sequence.length,
            sequence.dropped_byte_count
        );
        writeln!(writer, "{sequence}")?;
    }
    Ok(())
}

pub fn clean(args: &CleanArgs) -> anyhow::Result<()> {
    let input_path = resolve_input_path(args.input_args.input_path.as_ref())?;
    let bytes = read_input(&input_path)?;

    let mut writer = writer_for(args.output_path.as_ref(), args.common_args.allow_overwrite)?;
    write_cleaned(&bytes, &mut writer)?;
    writer.flush()?;

    Ok(())
}
