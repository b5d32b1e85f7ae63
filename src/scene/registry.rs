use std::fmt;

use super::instance::{FlowerInstance, InstanceId, MeshHandle, Transform};
use crate::options::GrowthOptions;
use crate::util::random::{round_to, uniform, RandomSource};

/// Decides which flowers survive after each spawn batch.
///
/// The session never evicts on its own; this is the hook for a host that
/// wants to cap memory on long sessions.
pub trait RetentionPolicy {
    /// Drop flowers from `flowers` (creation order, oldest first) as
    /// desired. Called once after every batch is registered.
    fn retain(&mut self, flowers: &mut Vec<FlowerInstance>);
}

/// Keeps every flower for the lifetime of the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAll;

impl RetentionPolicy for KeepAll {
    fn retain(&mut self, _flowers: &mut Vec<FlowerInstance>) {}
}

/// All placed flowers, in creation order, with their growth state.
pub struct GrowthRegistry {
    flowers: Vec<FlowerInstance>,
    next_id: u64,
    retention: Box<dyn RetentionPolicy>,
}

impl Default for GrowthRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GrowthRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowthRegistry")
            .field("flowers", &self.flowers.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl GrowthRegistry {
    /// Empty registry that keeps everything.
    #[must_use]
    pub fn new() -> Self {
        Self::with_retention(Box::new(KeepAll))
    }

    /// Empty registry using a custom retention policy.
    #[must_use]
    pub fn with_retention(retention: Box<dyn RetentionPolicy>) -> Self {
        Self {
            flowers: Vec::new(),
            next_id: 0,
            retention,
        }
    }

    /// Replace the retention policy. Existing flowers are untouched until
    /// the next batch.
    pub fn set_retention(&mut self, retention: Box<dyn RetentionPolicy>) {
        self.retention = retention;
    }

    /// Add a zero-scale flower and return its id.
    pub fn register(
        &mut self,
        mesh: MeshHandle,
        transform: Transform,
        target_scale: f32,
    ) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.flowers
            .push(FlowerInstance::sprout(id, mesh, transform, target_scale));
        id
    }

    /// Run the retention policy. Called by the spawner after each batch.
    pub fn enforce_retention(&mut self) {
        self.retention.retain(&mut self.flowers);
    }

    /// Grow every flower by one tick.
    ///
    /// Each flower's rate gains an independent draw from the configured
    /// step range, rounded to the configured precision; the rate is then
    /// added to all three scale axes and the result capped at the flower's
    /// ceiling. Nothing is removed.
    pub fn advance<S: RandomSource + ?Sized>(
        &mut self,
        rng: &mut S,
        growth: &GrowthOptions,
    ) {
        for flower in &mut self.flowers {
            let step = round_to(
                uniform(rng, growth.min_rate_step, growth.max_rate_step),
                growth.step_decimals,
            );
            flower.grow(step);
        }
    }

    /// Number of live flowers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    /// Whether no flower has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    /// Flowers in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &FlowerInstance> {
        self.flowers.iter()
    }

    /// Flowers as a slice, in creation order.
    #[must_use]
    pub fn as_slice(&self) -> &[FlowerInstance] {
        &self.flowers
    }

    /// Look up a flower by id.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&FlowerInstance> {
        // ids are assigned in push order, so the vec stays sorted by id
        self.flowers
            .binary_search_by_key(&id, FlowerInstance::id)
            .ok()
            .map(|index| &self.flowers[index])
    }

    /// Ids of all live flowers in creation order.
    #[must_use]
    pub fn ids(&self) -> Vec<InstanceId> {
        self.flowers.iter().map(FlowerInstance::id).collect()
    }
}
