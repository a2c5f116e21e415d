//! Transaction output wire format
//!
//! ```text
//! offset  size   field
//! 0       8      value, little-endian u64 (satoshis)
//! 8       var    compact-size length of script
//! 8+n     len    script bytes
//! ```

use crate::buffer::ByteBuffer;
use crate::constants::*;
use crate::error::{PrimitivesError, Result};
use crate::parser::{BinaryCursor, BinaryWriter};
use crate::script::Script;
use crate::serialize::Serializable;
use crate::types::Natural;
use std::borrow::Cow;
use std::fmt;

/// Script payload of an output: structured, or raw bytes as parsed off the
/// wire. Both forms serialize to the same bytes.
#[derive(Debug, Clone)]
pub enum OutputScript {
    Structured(Script),
    Raw(ByteBuffer),
}

impl OutputScript {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            OutputScript::Structured(script) => script.as_bytes(),
            OutputScript::Raw(bytes) => bytes.as_bytes(),
        }
    }
}

impl Default for OutputScript {
    fn default() -> Self {
        OutputScript::Raw(ByteBuffer::default())
    }
}

/// Transaction Output: 𝒯 = ℕ × 𝕊
///
/// An unset value is distinct from zero internally but reads and serializes
/// as zero.
#[derive(Debug, Clone, Default)]
pub struct TransactionOutput {
    value: Option<Natural>,
    script: OutputScript,
}

impl TransactionOutput {
    pub fn new(value: Natural, script: Script) -> Self {
        Self {
            value: Some(value),
            script: OutputScript::Structured(script),
        }
    }

    pub fn from_script_buf(value: Natural, script: ByteBuffer) -> Self {
        Self {
            value: Some(value),
            script: OutputScript::Raw(script),
        }
    }

    /// ParseOutput: reads value₈ (LE) then a length-prefixed script.
    pub fn from_cursor(cursor: &mut BinaryCursor<'_>) -> Result<Self> {
        let start = cursor.position();
        let value = cursor.read_u64_le()?;
        let script = cursor.read_length_prefixed_bytes().map_err(|err| {
            log::debug!("unreadable output script for output at offset {}", start);
            err
        })?;
        Ok(Self::from_script_buf(value, script))
    }

    /// Parse a standalone serialized output; trailing bytes are rejected.
    pub fn from_hex(s: &str) -> Result<Self> {
        let buffer = ByteBuffer::from_hex(s)?;
        let mut cursor = BinaryCursor::from_buffer(&buffer);
        let output = Self::from_cursor(&mut cursor)?;
        if !cursor.is_exhausted() {
            return Err(PrimitivesError::Format(format!(
                "{} trailing bytes after transaction output",
                cursor.remaining()
            )));
        }
        Ok(output)
    }

    /// Value in satoshis; unset reads as 0
    pub fn value(&self) -> Natural {
        self.value.unwrap_or(0)
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn set_value(&mut self, value: Natural) -> &mut Self {
        self.value = Some(value);
        self
    }

    pub fn clear_value(&mut self) -> &mut Self {
        self.value = None;
        self
    }

    /// 0 ≤ value ≤ M_max
    pub fn has_valid_value(&self) -> bool {
        self.value() <= MAX_MONEY
    }

    /// Structured script, materialised from the raw bytes when needed
    pub fn script(&self) -> Cow<'_, Script> {
        match &self.script {
            OutputScript::Structured(script) => Cow::Borrowed(script),
            OutputScript::Raw(bytes) => Cow::Owned(Script::new(bytes.clone())),
        }
    }

    pub fn script_buf(&self) -> ByteBuffer {
        match &self.script {
            OutputScript::Structured(script) => script.as_buffer().clone(),
            OutputScript::Raw(bytes) => bytes.clone(),
        }
    }

    pub fn script_payload(&self) -> &OutputScript {
        &self.script
    }

    pub fn set_script(&mut self, script: Script) -> &mut Self {
        self.script = OutputScript::Structured(script);
        self
    }

    pub fn set_script_buf(&mut self, script: ByteBuffer) -> &mut Self {
        self.script = OutputScript::Raw(script);
        self
    }

    /// SerializeOutput: value₈ (LE) ‖ CompactSize(|script|) ‖ script
    pub fn serialize(&self) -> ByteBuffer {
        let script = self.script.as_bytes();
        let mut writer = BinaryWriter::new();
        writer
            .write_u64_le(self.value())
            .write_length_prefixed(script);
        writer.into_buffer()
    }
}

impl Serializable for TransactionOutput {
    fn to_buffer(&self) -> ByteBuffer {
        self.serialize()
    }
}

/// Outputs are equal when they serialize identically.
impl PartialEq for TransactionOutput {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value() && self.script.as_bytes() == other.script.as_bytes()
    }
}

impl Eq for TransactionOutput {}

impl fmt::Display for TransactionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize().to_hex())
    }
}
