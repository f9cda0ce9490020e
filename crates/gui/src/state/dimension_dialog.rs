//! Dimension dialog state (data only)
//!
//! Holds the pending width/height/depth request for an import or an edit.
//! The UI rendering is in ui/dimension_dialog.rs in the binary crate.

use shared::{DimensionError, Dimensions, ObjectId};

use crate::import::PendingMesh;

/// What the entered dimensions will be applied to
#[derive(Clone, Debug)]
pub enum DimensionPurpose {
    /// Parsed mesh waiting to be registered
    Import(PendingMesh),
    /// Existing object to resize
    Edit(ObjectId),
}

#[derive(Clone, Debug)]
pub struct DimensionRequest {
    pub purpose: DimensionPurpose,
    /// Width, height, depth as typed by the user
    pub fields: [String; 3],
}

/// Result of pressing OK
#[derive(Clone, Debug)]
pub enum DialogOutcome {
    Submitted {
        purpose: DimensionPurpose,
        dimensions: Dimensions,
    },
    Invalid(DimensionError),
}

#[derive(Default)]
pub struct DimensionDialog {
    request: Option<DimensionRequest>,
}

/// Shortest text that reads back as the same f32, the precision the scene stores
fn format_field(value: f64) -> String {
    format!("{}", value as f32)
}

fn fields_from(dims: Dimensions) -> [String; 3] {
    dims.to_array().map(format_field)
}

impl DimensionDialog {
    /// Is the dialog open?
    pub fn is_open(&self) -> bool {
        self.request.is_some()
    }

    pub fn request(&self) -> Option<&DimensionRequest> {
        self.request.as_ref()
    }

    /// Editable text fields of the open request
    pub fn fields_mut(&mut self) -> Option<&mut [String; 3]> {
        self.request.as_mut().map(|r| &mut r.fields)
    }

    /// A mesh import is waiting for dimensions
    pub fn is_importing(&self) -> bool {
        matches!(
            self.request,
            Some(DimensionRequest {
                purpose: DimensionPurpose::Import(_),
                ..
            })
        )
    }

    /// Open the dialog for a freshly parsed mesh
    pub fn open_import(&mut self, pending: PendingMesh, defaults: Dimensions) {
        self.request = Some(DimensionRequest {
            purpose: DimensionPurpose::Import(pending),
            fields: fields_from(defaults),
        });
    }

    /// Open the dialog for resizing an existing object
    pub fn open_edit(&mut self, object_id: ObjectId, current: Dimensions) {
        self.request = Some(DimensionRequest {
            purpose: DimensionPurpose::Edit(object_id),
            fields: fields_from(current),
        });
    }

    /// Parse the fields and close the dialog.
    ///
    /// Invalid input closes the dialog too: the whole operation is aborted.
    pub fn submit(&mut self) -> Option<DialogOutcome> {
        let request = self.request.take()?;
        let [w, h, d] = &request.fields;
        Some(match Dimensions::parse([w.as_str(), h.as_str(), d.as_str()]) {
            Ok(dimensions) => DialogOutcome::Submitted {
                purpose: request.purpose,
                dimensions,
            },
            Err(e) => DialogOutcome::Invalid(e),
        })
    }

    /// Close without applying anything
    pub fn cancel(&mut self) -> Option<DimensionPurpose> {
        self.request.take().map(|r| r.purpose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn pending() -> PendingMesh {
        PendingMesh {
            source: "cube.obj".into(),
            mesh: fixtures::unit_cube_mesh(),
        }
    }

    #[test]
    fn test_open_import_prefills_defaults() {
        let mut d = DimensionDialog::default();
        d.open_import(pending(), Dimensions::new(1.0, 2.5, 3.0));
        assert!(d.is_open());
        assert!(d.is_importing());
        assert_eq!(d.request().unwrap().fields, fixtures::dim_fields("1", "2.5", "3"));
    }

    #[test]
    fn test_submit_valid() {
        let mut d = DimensionDialog::default();
        d.open_edit("a".into(), Dimensions::new(1.0, 1.0, 1.0));
        d.fields_mut().unwrap()[0] = "2*1.5".into();
        match d.submit() {
            Some(DialogOutcome::Submitted {
                purpose: DimensionPurpose::Edit(id),
                dimensions,
            }) => {
                assert_eq!(id, "a");
                assert_eq!(dimensions, Dimensions::new(3.0, 1.0, 1.0));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!d.is_open());
    }

    #[test]
    fn test_submit_invalid_closes() {
        let mut d = DimensionDialog::default();
        d.open_import(pending(), Dimensions::default());
        d.fields_mut().unwrap()[1] = "-1".into();
        assert!(matches!(d.submit(), Some(DialogOutcome::Invalid(_))));
        assert!(!d.is_open());
    }

    #[test]
    fn test_cancel_is_distinct() {
        let mut d = DimensionDialog::default();
        d.open_import(pending(), Dimensions::default());
        assert!(matches!(d.cancel(), Some(DimensionPurpose::Import(_))));
        assert!(d.submit().is_none());
    }

    #[test]
    fn test_format_field() {
        assert_eq!(format_field(1.0), "1");
        assert_eq!(format_field(0.25), "0.25");
        assert_eq!(format_field(1.2000000000000002), "1.2");
    }

    #[test]
    fn test_tiny_size_survives_unchanged_submit() {
        let mut d = DimensionDialog::default();
        d.open_edit("a".into(), Dimensions::new(3e-7, 1.0, 2.5e-9));
        match d.submit() {
            Some(DialogOutcome::Submitted { dimensions, .. }) => {
                assert!((dimensions.width / 3e-7 - 1.0).abs() < 1e-6);
                assert!((dimensions.depth / 2.5e-9 - 1.0).abs() < 1e-6);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
