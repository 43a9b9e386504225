//! Color quantization and grid persistence for addressable-light frame images.
//!
//! Editor grids of arbitrary RGB cells are reduced to the device palette by
//! [`palettes::quantize`], normalized by [`grid::trim`], and persisted as LCF text
//! through the [`lcf`] codec.

pub mod error;
pub mod grid;
pub mod lcf;
pub mod palettes;
