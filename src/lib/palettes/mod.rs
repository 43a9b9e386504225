pub mod palette;
pub mod quantize;

pub use palette::{Code, Color, PaletteEntry, DEVICE_PALETTE, RESERVED};
pub use quantize::{nearest_code, quantize, quantize_hex};
