use super::Perlin;

/// Caller supplied settings for a [`Perlin`] generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoiseConfig {
    /// `None` draws a seed from OS entropy.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub seed: Option<u32>,
}
impl NoiseConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self { seed: Some(seed) }
    }
    pub fn build(&self) -> Perlin {
        Perlin::new(self.seed)
    }
}
