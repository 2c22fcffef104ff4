//! Random casual outfit composition with colour-clash rejection

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{
    ACCESSORY_PROBABILITY, DEFAULT_ATTEMPT_LIMIT, FULL_OUTFIT_PROBABILITY, OUTERWEAR_PROBABILITY,
};
use crate::io::error::{Result, WardrobeError, invalid_parameter};
use crate::outfit::state::{OutfitState, SlotAssignments};
use crate::wardrobe::collection::SlotBuckets;
use crate::wardrobe::garment::Garment;
use crate::wardrobe::palette::{Color, has_clash};
use crate::wardrobe::slot::BodySlot;

/// Sampling parameters of the composer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComposerConfig {
    /// Chance of picking a full-body garment instead of top and bottom
    pub full_probability: f64,
    /// Chance of adding outerwear
    pub outer_probability: f64,
    /// Chance of adding an accessory
    pub accessory_probability: f64,
    /// Attempts before reporting failure
    pub attempt_limit: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            full_probability: FULL_OUTFIT_PROBABILITY,
            outer_probability: OUTERWEAR_PROBABILITY,
            accessory_probability: ACCESSORY_PROBABILITY,
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
        }
    }
}

impl ComposerConfig {
    /// Check every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns an error if a probability is outside `[0, 1]` or the
    /// attempt limit is zero
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("full_probability", self.full_probability),
            ("outer_probability", self.outer_probability),
            ("accessory_probability", self.accessory_probability),
        ];
        for (parameter, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid_parameter(parameter, &value, &"must be within [0, 1]"));
            }
        }
        if self.attempt_limit == 0 {
            return Err(invalid_parameter(
                "attempt_limit",
                &self.attempt_limit,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Successful composition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedOutfit {
    /// Fresh slot assignments
    pub slots: SlotAssignments,
    /// One-based attempt that produced the outfit
    pub attempts: usize,
}

/// Samples outfits from a slot-bucketed wardrobe
pub struct OutfitComposer<R> {
    config: ComposerConfig,
    rng: R,
}

impl OutfitComposer<StdRng> {
    /// Composer with a reproducible random sequence
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn seeded(config: ComposerConfig, seed: u64) -> Result<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// Composer seeded from the operating system
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn from_os_rng(config: ComposerConfig) -> Result<Self> {
        Self::new(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> OutfitComposer<R> {
    /// Composer drawing from the given random source
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: ComposerConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// Active configuration
    pub const fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Sample until a non-empty, clash-free outfit turns up
    ///
    /// # Errors
    ///
    /// Returns [`WardrobeError::OutfitGenerationFailed`] once the attempt
    /// limit is exhausted
    pub fn compose(&mut self, buckets: &SlotBuckets<'_>) -> Result<ComposedOutfit> {
        for attempt in 1..=self.config.attempt_limit {
            let selection = self.sample(buckets);
            if selection.is_empty() {
                continue;
            }

            let colors: Vec<Color> = selection.iter().map(|(_, garment)| garment.color).collect();
            if has_clash(&colors) {
                log::debug!("Attempt {attempt} rejected: colour clash in {colors:?}");
                continue;
            }

            let mut slots = SlotAssignments::default();
            for (slot, garment) in selection {
                slots.set(slot, garment.id.clone());
            }
            log::info!(
                "Composed outfit with {} garments on attempt {attempt}",
                slots.count()
            );
            return Ok(ComposedOutfit {
                slots,
                attempts: attempt,
            });
        }

        log::warn!(
            "No outfit found in {} attempts over {} garments",
            self.config.attempt_limit,
            buckets.total()
        );
        Err(WardrobeError::OutfitGenerationFailed {
            attempts: self.config.attempt_limit,
        })
    }

    /// Compose an outfit and commit it to the canvas
    ///
    /// On success the slots are replaced and every free item is removed.
    /// On failure the state is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`WardrobeError::OutfitGenerationFailed`] once the attempt
    /// limit is exhausted
    pub fn generate(
        &mut self,
        buckets: &SlotBuckets<'_>,
        state: &mut OutfitState,
    ) -> Result<ComposedOutfit> {
        let composed = self.compose(buckets)?;
        *state = OutfitState::from_slots(composed.slots.clone());
        Ok(composed)
    }

    /// Draw one candidate outfit; may be empty
    fn sample<'a>(&mut self, buckets: &SlotBuckets<'a>) -> Vec<(BodySlot, &'a Garment)> {
        let mut selection = Vec::with_capacity(BodySlot::ALL.len());

        let use_full =
            !buckets.full.is_empty() && self.rng.random_bool(self.config.full_probability);
        if use_full {
            self.pick_into(&mut selection, buckets, BodySlot::Full);
        } else {
            self.pick_into(&mut selection, buckets, BodySlot::Top);
            self.pick_into(&mut selection, buckets, BodySlot::Bottom);
        }

        if self.rng.random_bool(self.config.outer_probability) {
            self.pick_into(&mut selection, buckets, BodySlot::Outer);
        }

        self.pick_into(&mut selection, buckets, BodySlot::Shoes);

        if self.rng.random_bool(self.config.accessory_probability) {
            self.pick_into(&mut selection, buckets, BodySlot::Accessory);
        }

        selection
    }

    fn pick_into<'a>(
        &mut self,
        selection: &mut Vec<(BodySlot, &'a Garment)>,
        buckets: &SlotBuckets<'a>,
        slot: BodySlot,
    ) {
        if let Some(&garment) = buckets.bucket(slot).choose(&mut self.rng) {
            selection.push((slot, garment));
        }
    }
}
