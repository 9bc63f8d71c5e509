//! Data-driven shape descriptions, so structures can be listed in a config file.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::falloff::{ConeParams, arch_carve, cone};
use crate::occupancy::{box_dented_x, box_dented_z, box_occupancy, cylinder_y, triangle_prism_x};

/// One primitive with its placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Box {
        anchor: Vec3,
        size: Vec3,
    },
    BoxDentedX {
        anchor: Vec3,
        size: Vec3,
        dent_size: f32,
        dent_depth: f32,
    },
    BoxDentedZ {
        anchor: Vec3,
        size: Vec3,
        dent_size: f32,
        dent_depth: f32,
    },
    CylinderY {
        anchor: Vec3,
        height: f32,
        radius_bottom: f32,
        radius_top: f32,
    },
    TrianglePrismX {
        anchor: Vec3,
        size: Vec3,
    },
    /// Cone whose local frame is translated to `anchor`.
    Cone {
        anchor: Vec3,
        params: ConeParams,
    },
    /// Arch in the xy plane through `anchor`, extruded along z.
    Arch {
        anchor: Vec3,
        height: f32,
        radius: f32,
    },
}

impl Shape {
    /// Weight of this shape at `p`.
    pub fn weight(&self, p: Vec3) -> f32 {
        match *self {
            Shape::Box { anchor, size } => box_occupancy(p, anchor, size),
            Shape::BoxDentedX {
                anchor,
                size,
                dent_size,
                dent_depth,
            } => box_dented_x(p, anchor, size, dent_size, dent_depth),
            Shape::BoxDentedZ {
                anchor,
                size,
                dent_size,
                dent_depth,
            } => box_dented_z(p, anchor, size, dent_size, dent_depth),
            Shape::CylinderY {
                anchor,
                height,
                radius_bottom,
                radius_top,
            } => cylinder_y(p, anchor, height, radius_bottom, radius_top),
            Shape::TrianglePrismX { anchor, size } => triangle_prism_x(p, anchor, size),
            Shape::Cone { anchor, ref params } => cone(p - anchor, params),
            Shape::Arch {
                anchor,
                height,
                radius,
            } => {
                let local = p - anchor;
                arch_carve(local.x, local.y, height, radius)
            }
        }
    }
}

/// Union of all shapes at `p` (maximum weight). `0` for an empty list.
pub fn union(shapes: &[Shape], p: Vec3) -> f32 {
    shapes.iter().map(|s| s.weight(p)).fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_dispatches_to_primitive() {
        let anchor = Vec3::new(1.0, 0.0, 1.0);
        let size = Vec3::new(2.0, 3.0, 2.0);
        let p = Vec3::new(1.5, 1.0, 0.5);
        assert_eq!(
            Shape::Box { anchor, size }.weight(p),
            box_occupancy(p, anchor, size)
        );
        assert_eq!(
            Shape::TrianglePrismX { anchor, size }.weight(p),
            triangle_prism_x(p, anchor, size)
        );
    }

    #[test]
    fn test_cone_and_arch_translate_to_anchor() {
        let anchor = Vec3::new(100.0, 50.0, -20.0);
        let params = ConeParams::new(0.0, 10.0, 10.0);
        let local = Vec3::new(24.0, 10.0, 0.0);
        assert_eq!(
            Shape::Cone { anchor, params }.weight(anchor + local),
            cone(local, &params)
        );
        let arch = Shape::Arch {
            anchor,
            height: 0.0,
            radius: 1.0,
        };
        assert_eq!(arch.weight(anchor), 1.0);
    }

    #[test]
    fn test_union_takes_max() {
        let shapes = vec![
            Shape::Box {
                anchor: Vec3::ZERO,
                size: Vec3::ONE,
            },
            Shape::CylinderY {
                anchor: Vec3::new(5.0, 0.0, 0.0),
                height: 2.0,
                radius_bottom: 1.0,
                radius_top: 1.0,
            },
        ];
        assert_eq!(union(&shapes, Vec3::new(0.0, 0.5, 0.0)), 1.0);
        let v = union(&shapes, Vec3::new(5.5, 1.0, 0.0));
        assert!((v - 0.5).abs() < 1e-6, "Expected cylinder weight 0.5, got {v}");
        assert_eq!(union(&shapes, Vec3::splat(50.0)), 0.0);
        assert_eq!(union(&[], Vec3::ZERO), 0.0);
    }

    #[test]
    fn test_shape_list_from_ron() {
        let ron_str = r#"[
            Box(anchor: (0.0, 0.0, 0.0), size: (4.0, 2.0, 4.0)),
            CylinderY(anchor: (8.0, 0.0, 0.0), height: 6.0, radius_bottom: 2.0, radius_top: 1.0),
            Cone(anchor: (0.0, 0.0, 0.0), params: (max: 12.0, base_radius: 6.0)),
        ]"#;
        let shapes: Vec<Shape> = ron::from_str(ron_str).unwrap();
        assert_eq!(shapes.len(), 3);
        match &shapes[2] {
            Shape::Cone { params, .. } => {
                assert_eq!(params.max, 12.0);
                assert_eq!(params.outline, 4.0, "Omitted fields should use defaults");
            }
            other => panic!("Expected cone, got {other:?}"),
        }
    }
}
