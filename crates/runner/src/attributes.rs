//! Attribute generation - per-auction item data
//!
//! Each auction draws its attribute set once; all bidders of that auction
//! evaluate the same values.

use auction_core::AttributeSet;
use auction_ports::{AttributeGenerator, GenerationError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Upper bound (exclusive) of generated attribute values
const MAX_ATTRIBUTE_VALUE: f64 = 100.0;

/// Default number of attributes per auction
pub const DEFAULT_ATTRIBUTE_COUNT: usize = 20;

/// Draws every attribute independently from [0, 100)
pub struct UniformAttributeGenerator {
    rng: Mutex<StdRng>,
}

impl UniformAttributeGenerator {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create with a specific seed for reproducible batches
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for UniformAttributeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeGenerator for UniformAttributeGenerator {
    fn generate(&self, count: usize) -> Result<AttributeSet, GenerationError> {
        if count == 0 {
            return Err(GenerationError::EmptySet);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| GenerationError::Failed("attribute rng lock poisoned".to_string()))?;

        Ok(AttributeSet::from_values(
            (0..count).map(|_| rng.gen_range(0.0..MAX_ATTRIBUTE_VALUE)),
        ))
    }
}

/// Replays one attribute set for every auction
///
/// The requested count is ignored; useful when bid amounts must be known
/// in advance.
#[derive(Debug, Clone)]
pub struct FixedAttributeGenerator {
    attributes: AttributeSet,
}

impl FixedAttributeGenerator {
    pub fn new(attributes: AttributeSet) -> Self {
        Self { attributes }
    }
}

impl AttributeGenerator for FixedAttributeGenerator {
    fn generate(&self, _count: usize) -> Result<AttributeSet, GenerationError> {
        if self.attributes.is_empty() {
            return Err(GenerationError::EmptySet);
        }
        Ok(self.attributes.clone())
    }
}
