//! Mesh file import: extension check, OBJ parsing, conversion to `MeshData`.

use std::path::{Path, PathBuf};

use glam::Vec3;
use shared::DimensionError;
use truck_polymesh::PolygonMesh;

use crate::viewport::mesh::MeshData;

/// The only mesh format the editor accepts
pub const MESH_EXTENSION: &str = "obj";

#[derive(Debug)]
pub enum ImportError {
    /// File does not carry the `.obj` extension
    UnsupportedFile(PathBuf),
    Read { path: PathBuf, source: std::io::Error },
    Parse(String),
    /// Parsed successfully but contains no usable geometry
    EmptyMesh,
    InvalidDimensions(DimensionError),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::UnsupportedFile(path) => write!(
                f,
                "Unsupported file '{}': please choose a .{} file",
                path.display(),
                MESH_EXTENSION
            ),
            ImportError::Read { path, source } => {
                write!(f, "Failed to read '{}': {}", path.display(), source)
            }
            ImportError::Parse(msg) => write!(f, "Failed to parse mesh: {}", msg),
            ImportError::EmptyMesh => write!(f, "Failed to parse mesh: no geometry found"),
            ImportError::InvalidDimensions(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Read { source, .. } => Some(source),
            ImportError::InvalidDimensions(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DimensionError> for ImportError {
    fn from(e: DimensionError) -> Self {
        ImportError::InvalidDimensions(e)
    }
}

/// Mesh parsed from a file, waiting for the user to confirm its dimensions
#[derive(Clone, Debug)]
pub struct PendingMesh {
    pub source: String,
    pub mesh: MeshData,
}

/// Case-insensitive check for the `.obj` extension
pub fn check_extension(path: &Path) -> Result<(), ImportError> {
    let ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(MESH_EXTENSION));
    if ok {
        Ok(())
    } else {
        Err(ImportError::UnsupportedFile(path.to_path_buf()))
    }
}

/// Parse OBJ text into a triangle mesh. Polygons are fan-triangulated.
pub fn parse_obj(bytes: &[u8]) -> Result<MeshData, ImportError> {
    let polygon =
        truck_polymesh::obj::read(bytes).map_err(|e| ImportError::Parse(e.to_string()))?;
    let mesh = to_mesh_data(&polygon);
    if mesh.is_empty() {
        return Err(ImportError::EmptyMesh);
    }
    Ok(mesh)
}

/// Read and parse an OBJ file from disk
pub fn load_obj_file(path: &Path) -> Result<PendingMesh, ImportError> {
    check_extension(path)?;
    let bytes = std::fs::read(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mesh = parse_obj(&bytes)?;
    tracing::info!(
        "Parsed {}: {} vertices, {} triangles",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(PendingMesh {
        source: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        mesh,
    })
}

fn to_mesh_data(polygon: &PolygonMesh) -> MeshData {
    let positions: Vec<Vec3> = polygon
        .positions()
        .iter()
        .map(|p| Vec3::new(p.x as f32, p.y as f32, p.z as f32))
        .collect();

    let mut indices = Vec::new();
    let mut fan = |face: &[u32]| {
        for i in 1..face.len().saturating_sub(1) {
            indices.extend_from_slice(&[face[0], face[i], face[i + 1]]);
        }
    };

    for tri in polygon.tri_faces() {
        fan(&[tri[0].pos as u32, tri[1].pos as u32, tri[2].pos as u32]);
    }
    for quad in polygon.quad_faces() {
        fan(&[
            quad[0].pos as u32,
            quad[1].pos as u32,
            quad[2].pos as u32,
            quad[3].pos as u32,
        ]);
    }
    for face in polygon.other_faces() {
        let idx: Vec<u32> = face.iter().map(|v| v.pos as u32).collect();
        fan(&idx);
    }

    MeshData { positions, indices }
}
