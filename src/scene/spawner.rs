use glam::Vec3;

use super::instance::{FlowerTemplate, InstanceId, Transform};
use super::registry::GrowthRegistry;
use crate::options::PlacementOptions;
use crate::util::random::{int_inclusive, point_in_sphere, uniform, RandomSource};

/// Turns a ground hit into a scattered batch of sprouting flowers.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSpawner {
    options: PlacementOptions,
}

impl PlacementSpawner {
    /// Spawner using the given batch parameters.
    #[must_use]
    pub fn new(options: PlacementOptions) -> Self {
        Self { options }
    }

    /// Batch parameters in use.
    #[must_use]
    pub fn options(&self) -> &PlacementOptions {
        &self.options
    }

    /// Plant a batch of flowers around `point`, all facing `heading_degrees`.
    ///
    /// Draw order: batch size, then per flower three scatter draws and one
    /// ceiling draw. Each flower is based at the hit projected onto `y = 0`
    /// and scattered uniformly within the configured ball, so it may sit
    /// slightly above or below the ground. Returns the new ids; empty when
    /// no template has loaded yet.
    pub fn spawn<S: RandomSource + ?Sized>(
        &self,
        registry: &mut GrowthRegistry,
        template: Option<&FlowerTemplate>,
        rng: &mut S,
        point: Vec3,
        heading_degrees: f32,
    ) -> Vec<InstanceId> {
        let Some(template) = template else {
            log::debug!("spawn rejected: template not loaded");
            return Vec::new();
        };

        let count = int_inclusive(
            rng,
            self.options.min_count,
            self.options.max_count,
        );
        let base = Vec3::new(point.x, 0.0, point.z);

        let ids: Vec<InstanceId> = (0..count)
            .map(|_| {
                let position =
                    point_in_sphere(rng, base, self.options.jitter_radius);
                let target_scale = uniform(
                    rng,
                    self.options.min_target_scale,
                    self.options.max_target_scale,
                );
                let transform = Transform {
                    position,
                    rotation_y_degrees: heading_degrees,
                };
                registry.register(template.mesh, transform, target_scale)
            })
            .collect();
        registry.enforce_retention();

        log::debug!(
            "spawned {} flowers at ({:.2}, {:.2}), {} total",
            ids.len(),
            base.x,
            base.z,
            registry.len()
        );
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::instance::MeshHandle;
    use crate::util::random::{RngSource, SequenceSource};

    fn template() -> FlowerTemplate {
        let mut t = FlowerTemplate::new(MeshHandle(7));
        t.prepare(0.5);
        t
    }

    #[test]
    fn rejected_without_template() {
        let spawner = PlacementSpawner::new(PlacementOptions::default());
        let mut registry = GrowthRegistry::new();
        let mut rng = SequenceSource::new([0.5]);
        let ids =
            spawner.spawn(&mut registry, None, &mut rng, Vec3::ZERO, 10.0);
        assert!(ids.is_empty());
        assert!(registry.is_empty());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn scripted_batch_is_exact() {
        let spawner = PlacementSpawner::new(PlacementOptions::default());
        let mut registry = GrowthRegistry::new();
        // count: 0.25 -> 1 + floor(1.25) = 2
        // flower 1: theta 0, cos_phi 1, radius frac 1 -> +0.5 y; scale 0.0 -> 1.5
        // flower 2: theta 0, cos_phi 0, radius frac 1 -> +0.5 x; scale 0.5 -> 2.25
        let mut rng = SequenceSource::new([
            0.25, //
            0.0, 1.0, 1.0, 0.0, //
            0.0, 0.5, 1.0, 0.5,
        ]);
        let template = template();
        let ids = spawner.spawn(
            &mut registry,
            Some(&template),
            &mut rng,
            Vec3::new(2.0, 0.3, -4.0),
            123.0,
        );

        assert_eq!(ids.len(), 2);
        assert_eq!(rng.draws(), 9);

        let first = registry.get(ids[0]).unwrap();
        assert!((first.transform().position - Vec3::new(2.0, 0.5, -4.0)).length() < 1e-5);
        assert_eq!(first.target_scale(), 1.5);
        assert_eq!(first.transform().rotation_y_degrees, 123.0);
        assert_eq!(first.mesh(), MeshHandle(7));

        let second = registry.get(ids[1]).unwrap();
        assert!((second.transform().position - Vec3::new(2.5, 0.0, -4.0)).length() < 1e-5);
        assert_eq!(second.target_scale(), 2.25);
        assert_eq!(second.current_scale(), Vec3::ZERO);
        assert_eq!(second.growth_rate(), 0.0);
    }

    #[test]
    fn batches_respect_configured_bounds() {
        let spawner = PlacementSpawner::new(PlacementOptions::default());
        let mut registry = GrowthRegistry::new();
        let mut rng = RngSource::seeded(Some(11));
        let template = template();
        let hit = Vec3::new(-1.0, 0.0, 3.0);
        let mut seen = [false; 6];

        for _ in 0..200 {
            let before = registry.len();
            let ids =
                spawner.spawn(&mut registry, Some(&template), &mut rng, hit, 45.0);
            assert!((1..=5).contains(&ids.len()));
            assert_eq!(registry.len(), before + ids.len());
            seen[ids.len()] = true;
        }
        assert!(seen[1..].iter().all(|&s| s), "{seen:?}");

        for flower in registry.iter() {
            assert!((1.5..=3.0).contains(&flower.target_scale()));
            let offset = flower.transform().position - Vec3::new(hit.x, 0.0, hit.z);
            assert!(offset.length() <= 0.5 + 1e-5);
            assert_eq!(flower.transform().rotation_y_degrees, 45.0);
        }
    }
}
