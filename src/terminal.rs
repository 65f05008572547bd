use std::io::{self, BufRead, Write};

use crate::Session;
use crate::engine::Output;

const PROMPT: &str = "> ";

fn flush_output<W: Write>(writer: &mut W, out: &Output) -> io::Result<()> {
    for line in out.lines() {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Prompt, read, interpret, print; until a quit command or end of input.
///
/// End of input stops the loop without a farewell line.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut reader: R,
    mut writer: W,
) -> io::Result<()> {
    loop {
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;

        // Raw bytes: a line that is not UTF-8 is still just a line of input.
        let mut line: Vec<u8> = Vec::new();
        let bytes_read = reader.read_until(b'\n', &mut line)?;
        if bytes_read == 0 {
            log::debug!("input closed");
            break;
        }

        let input = String::from_utf8_lossy(&line);
        let (out, quit) = session.step(&input);
        flush_output(&mut writer, &out)?;

        if quit {
            break;
        }
    }

    writer.flush()
}
