//! The LCF frame format.
//!
//! ```text
//! <row count>
//! <column count>
//! <row 0: codes separated by single spaces>
//! ...
//! ```
//!
//! Counts are plain decimal, codes are two uppercase hex digits, every line ends in `\n`.
//! A grid without rows is written as `0\n0\n`.

use std::path::Path;

mod lcf_read;
mod lcf_write;

pub const LCF_EXTENSION: &str = "lcf";

pub fn has_lcf_extension<P: AsRef<Path>>(path: P) -> bool {
	path.as_ref()
		.extension()
		.and_then(|e| e.to_str())
		.map(|e| e.eq_ignore_ascii_case(LCF_EXTENSION))
		.unwrap_or(false)
}
