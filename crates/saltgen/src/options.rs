use alloc::vec::Vec;

/// Template used when a caller supplies none: two characters drawn from the
/// alphabet of traditional DES `crypt(3)` salts.
pub const DEFAULT_TEMPLATE: &[u8] = b"[A-Za-z0-9./]{2}";

/// Configuration for a `SaltGenerator`.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Template rendered when `generate` is called without one.
    ///
    /// # Default
    ///
    /// [`DEFAULT_TEMPLATE`], `[A-Za-z0-9./]{2}`.
    pub default_template: Vec<u8>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            default_template: DEFAULT_TEMPLATE.to_vec(),
        }
    }
}
