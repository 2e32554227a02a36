use glam::{Mat4, Quat, Vec3};

/// Translation, rotation and scale of an affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Quaternion components in scalar-first order, as MuJoCo expects them.
    pub fn wxyz(&self) -> [f32; 4] {
        [self.rotation.w, self.rotation.x, self.rotation.y, self.rotation.z]
    }

    pub fn has_unit_scale(&self) -> bool {
        self.scale.abs_diff_eq(Vec3::ONE, SCALE_EPSILON)
    }
}

const SCALE_EPSILON: f32 = 1e-5;

/// Splits a world matrix into translation, rotation and scale.
///
/// Translation comes from the last column and scale from the column norms of
/// the upper 3x3, with the sign folded into x when the determinant is
/// negative. Rotation is the unit quaternion of the remaining orthonormal
/// basis. Shear is discarded.
pub fn decompose(world: &Mat4) -> Pose {
    let (scale, rotation, translation) = world.to_scale_rotation_translation();

    Pose {
        translation,
        rotation: rotation.normalize(),
        scale,
    }
}
