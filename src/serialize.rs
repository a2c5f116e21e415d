//! Uniform serialization views

use crate::buffer::ByteBuffer;

/// An entity with a deterministic binary form.
///
/// Implementors provide the canonical bytes once; callers pick the view
/// (raw bytes, hex text, length) explicitly.
pub trait Serializable {
    fn to_buffer(&self) -> ByteBuffer;

    fn to_bytes(&self) -> Vec<u8> {
        self.to_buffer().into_bytes()
    }

    fn to_hex(&self) -> String {
        self.to_buffer().to_hex()
    }

    /// Length of the binary form in bytes
    fn size(&self) -> usize {
        self.to_buffer().len()
    }

    /// Length of the hex form in characters
    fn hex_size(&self) -> usize {
        self.size() * 2
    }
}

impl Serializable for ByteBuffer {
    fn to_buffer(&self) -> ByteBuffer {
        self.clone()
    }
}
