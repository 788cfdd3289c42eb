use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

/// Opens a text file and returns an iterator over its lines.
///
/// - Streams the file instead of reading it at once
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_lines<P: AsRef<Path>>(filename: P) -> io::Result<Lines<BufReader<File>>> {
	Ok(BufReader::new(File::open(filename)?).lines())
}
