mod mat4;
mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;

pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let w = right - left;
    let h = top - bottom;
    let d = far - near;

    Mat4::new([
        [2.0 / w, 0.0, 0.0, 0.0],
        [0.0, 2.0 / h, 0.0, 0.0],
        [0.0, 0.0, -2.0 / d, 0.0],
        [-(right + left) / w, -(top + bottom) / h, -(far + near) / d, 1.0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_leaves_points_unchanged() {
        let point = Vec3::new(1.0, 2.0, 3.0);
        let result = Mat4::identity().transform_point(point);
        assert!((result.x - point.x).abs() < 0.001);
        assert!((result.y - point.y).abs() < 0.001);
        assert!((result.z - point.z).abs() < 0.001);
    }

    #[test]
    fn translation_offsets_points() {
        let translation = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let result = translation.transform_point(Vec3::new(1.0, 2.0, 3.0));
        assert!((result.x - 11.0).abs() < 0.001);
        assert!((result.y - 22.0).abs() < 0.001);
        assert!((result.z - 33.0).abs() < 0.001);
    }

    #[test]
    fn identity_is_multiplicative_unit() {
        let translation = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Mat4::identity() * translation, translation);
    }

    #[test]
    fn ortho_maps_the_viewport_corners_to_ndc() {
        let proj = ortho(0.0, 800.0, 600.0, 0.0, -1.0, 1.0);
        let top_left = proj.transform_point(Vec3::new(0.0, 0.0, 0.0));
        assert!((top_left.x + 1.0).abs() < 0.001);
        assert!((top_left.y - 1.0).abs() < 0.001);

        let bottom_right = proj.transform_point(Vec3::new(800.0, 600.0, 0.0));
        assert!((bottom_right.x - 1.0).abs() < 0.001);
        assert!((bottom_right.y + 1.0).abs() < 0.001);
    }
}
