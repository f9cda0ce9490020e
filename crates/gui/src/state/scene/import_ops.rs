//! Registering imported meshes

use glam::Vec3;
use shared::{DimensionError, DimensionField, Dimensions, ObjectId};

use super::{row_label, ListRow, SceneObject, SceneState, MIN_NATURAL_SIZE};
use crate::geometry::Aabb;
use crate::import::ImportError;
use crate::scene_graph::NodeTransform;
use crate::state::selection::HighlightBox;
use crate::viewport::mesh::MeshData;

/// Per-axis factor that takes `natural` to `requested`.
///
/// Fails when a factor overflows or collapses to zero in f32.
pub(super) fn scale_factors(requested: Dimensions, natural: Vec3) -> Result<Vec3, DimensionError> {
    let natural = natural.max(Vec3::splat(MIN_NATURAL_SIZE));
    let mut scale = Vec3::ONE;
    for (i, (field, value)) in DimensionField::ALL.iter().zip(requested.to_array()).enumerate() {
        let factor = value as f32 / natural[i];
        if !factor.is_finite() || factor <= 0.0 {
            return Err(DimensionError::OutOfRange {
                field: *field,
                value,
            });
        }
        scale[i] = factor;
    }
    Ok(scale)
}

impl SceneState {
    /// Register a mesh scaled to `requested` dimensions.
    ///
    /// The object is centred on X/Z at the origin and rests on the ground.
    /// Nothing is inserted if the dimensions or the mesh are invalid.
    pub fn import_mesh(
        &mut self,
        mesh: MeshData,
        requested: Dimensions,
        precision: usize,
    ) -> Result<ObjectId, ImportError> {
        requested.validate()?;
        if mesh.is_empty() {
            return Err(ImportError::EmptyMesh);
        }

        let natural = Aabb::from_points(mesh.positions.iter().copied()).size();
        let initial_size = natural.max(Vec3::splat(MIN_NATURAL_SIZE));
        let scale = scale_factors(requested, natural)?;

        let name = self.next_name();
        let root = self.graph.add_node(name.clone(), None);
        let part = self.graph.add_node(format!("{} mesh", name), Some(root));
        self.graph.set_mesh(part, mesh);
        self.graph.set_transform(
            root,
            NodeTransform {
                scale,
                ..NodeTransform::IDENTITY
            },
        );

        let id = uuid::Uuid::new_v4().to_string();
        self.objects.push(SceneObject {
            id: id.clone(),
            name: name.clone(),
            root,
            initial_size,
            highlight: HighlightBox::hidden(),
            row: ListRow::default(),
        });

        self.center_object_xz(&id, 0.0, 0.0);
        self.ground_object(&id);
        self.refresh_row(&id, precision);
        self.refresh_highlight(&id);
        self.version += 1;

        tracing::info!(
            "Imported {} ({}) at {}",
            name,
            id,
            row_label(&name, requested, precision)
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn approx(a: Dimensions, b: Dimensions) -> bool {
        (a.width - b.width).abs() < 1e-4
            && (a.height - b.height).abs() < 1e-4
            && (a.depth - b.depth).abs() < 1e-4
    }

    #[test]
    fn test_import_scales_to_request() {
        let mut scene = SceneState::default();
        let id = scene
            .import_mesh(fixtures::box_mesh(2.0, 4.0, 8.0), fixtures::dims(1.0, 2.0, 3.0), 2)
            .unwrap();
        assert!(approx(scene.dimensions(&id).unwrap(), fixtures::dims(1.0, 2.0, 3.0)));
        let obj = scene.get(&id).unwrap();
        assert_eq!(obj.initial_size, Vec3::new(2.0, 4.0, 8.0));
    }

    #[test]
    fn test_import_grounds_and_centres() {
        let mut scene = SceneState::default();
        let mesh = fixtures::offset_box_mesh(1.0, 1.0, 1.0, Vec3::new(5.0, -3.0, 2.0));
        let id = scene.import_mesh(mesh, fixtures::unit_dims(), 2).unwrap();
        let aabb = scene.bounding_box(&id).unwrap();
        assert!(aabb.min.y.abs() < 1e-5);
        assert!(aabb.center().x.abs() < 1e-5);
        assert!(aabb.center().z.abs() < 1e-5);
    }

    #[test]
    fn test_sequential_names() {
        let mut scene = SceneState::default();
        let a = scene.import_mesh(fixtures::unit_cube_mesh(), fixtures::unit_dims(), 2).unwrap();
        let b = scene.import_mesh(fixtures::unit_cube_mesh(), fixtures::unit_dims(), 2).unwrap();
        assert_eq!(scene.get(&a).unwrap().name, "Object 1");
        assert_eq!(scene.get(&b).unwrap().name, "Object 2");
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_invalid_dimensions_without_registering() {
        let mut scene = SceneState::default();
        let nodes = scene.graph.len();
        let err = scene
            .import_mesh(fixtures::unit_cube_mesh(), fixtures::dims(1.0, 0.0, 1.0), 2)
            .unwrap_err();
        assert!(matches!(err, ImportError::InvalidDimensions(_)));
        assert!(scene.is_empty());
        assert_eq!(scene.graph.len(), nodes);
    }

    #[test]
    fn test_rejects_dimensions_that_overflow_f32() {
        let mut scene = SceneState::default();
        let nodes = scene.graph.len();
        for dims in [fixtures::dims(1e39, 1.0, 1.0), fixtures::dims(1.0, 1.0, 1e-50)] {
            let err = scene
                .import_mesh(fixtures::unit_cube_mesh(), dims, 2)
                .unwrap_err();
            assert!(matches!(err, ImportError::InvalidDimensions(_)));
        }
        assert!(scene.is_empty());
        assert_eq!(scene.graph.len(), nodes);
    }

    #[test]
    fn test_scale_factor_overflow_is_rejected() {
        // Each value fits in f32, the factor against a tiny mesh does not
        let err = scale_factors(fixtures::dims(3e38, 1.0, 1.0), Vec3::splat(1e-3)).unwrap_err();
        assert!(matches!(
            err,
            DimensionError::OutOfRange {
                field: DimensionField::Width,
                ..
            }
        ));
        let scale = scale_factors(fixtures::dims(2.0, 3.0, 4.0), Vec3::new(1.0, 1.0, 2.0)).unwrap();
        assert_eq!(scale, Vec3::new(2.0, 3.0, 2.0));
    }

    #[test]
    fn test_rejects_empty_mesh() {
        let mut scene = SceneState::default();
        let err = scene
            .import_mesh(MeshData::default(), fixtures::unit_dims(), 2)
            .unwrap_err();
        assert!(matches!(err, ImportError::EmptyMesh));
        assert!(scene.is_empty());
    }

    #[test]
    fn test_degenerate_axis_is_clamped() {
        let mut scene = SceneState::default();
        let id = scene
            .import_mesh(fixtures::flat_quad_mesh(2.0), fixtures::unit_dims(), 2)
            .unwrap();
        let obj = scene.get(&id).unwrap();
        assert_eq!(obj.initial_size.y, MIN_NATURAL_SIZE);
        let scale = scene.graph.transform(obj.root).unwrap().scale;
        assert!(scale.is_finite());
    }

    #[test]
    fn test_new_object_highlight_hidden_and_row_filled() {
        let mut scene = SceneState::default();
        let id = scene.import_mesh(fixtures::unit_cube_mesh(), fixtures::unit_dims(), 2).unwrap();
        let obj = scene.get(&id).unwrap();
        assert!(!obj.highlight.visible);
        assert_eq!(obj.row.label, "Object 1 (1.00 x 1.00 x 1.00)");
    }

    #[test]
    fn test_registered_root_of_mesh_part() {
        let mut scene = SceneState::default();
        let id = scene.import_mesh(fixtures::unit_cube_mesh(), fixtures::unit_dims(), 2).unwrap();
        let root = scene.get(&id).unwrap().root;
        let part = scene.graph.node(root).unwrap().children[0];
        assert_eq!(scene.registered_root_of(part), Some(&id));
        assert_eq!(scene.registered_root_of(root), Some(&id));
    }
}
