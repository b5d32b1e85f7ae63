//! Serde adapters for the tracking engine's vector shapes.
//!
//! The engine sends orientations as `{x, y, z, w}` and positions as
//! `{x, y, z}` objects. Bare arrays are accepted too, so hand-written
//! replays stay short. Both encode back to the object form.

use glam::{Quat, Vec3};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum QuatWire {
    Object { x: f32, y: f32, z: f32, w: f32 },
    Array([f32; 4]),
}

impl From<QuatWire> for Quat {
    fn from(wire: QuatWire) -> Self {
        match wire {
            QuatWire::Object { x, y, z, w } => Self::from_xyzw(x, y, z, w),
            QuatWire::Array(xyzw) => Self::from_array(xyzw),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Vec3Wire {
    Object { x: f32, y: f32, z: f32 },
    Array([f32; 3]),
}

impl From<Vec3Wire> for Vec3 {
    fn from(wire: Vec3Wire) -> Self {
        match wire {
            Vec3Wire::Object { x, y, z } => Self::new(x, y, z),
            Vec3Wire::Array(xyz) => Self::from_array(xyz),
        }
    }
}

/// `Option<Quat>` as an optional `{x, y, z, w}` object.
pub(crate) mod optional_quat {
    use super::{Deserialize, Deserializer, Quat, QuatWire, Serialize, Serializer};

    #[allow(clippy::ref_option)]
    pub(crate) fn serialize<S: Serializer>(
        value: &Option<Quat>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value
            .map(|q| QuatWire::Object {
                x: q.x,
                y: q.y,
                z: q.z,
                w: q.w,
            })
            .serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Quat>, D::Error> {
        Ok(Option::<QuatWire>::deserialize(deserializer)?.map(Quat::from))
    }
}

/// `Option<Vec3>` as an optional `{x, y, z}` object.
pub(crate) mod optional_vec3 {
    use super::{Deserialize, Deserializer, Serialize, Serializer, Vec3, Vec3Wire};

    #[allow(clippy::ref_option)]
    pub(crate) fn serialize<S: Serializer>(
        value: &Option<Vec3>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value
            .map(|v| Vec3Wire::Object {
                x: v.x,
                y: v.y,
                z: v.z,
            })
            .serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec3>, D::Error> {
        Ok(Option::<Vec3Wire>::deserialize(deserializer)?.map(Vec3::from))
    }
}
