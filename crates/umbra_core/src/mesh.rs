//! Triangle and mesh geometry.
//!
//! A `Mesh` is the indexed form produced by the OBJ loader; the renderer
//! works on the flat list of `Triangle`s it expands to.

use thiserror::Error;
use umbra_math::{same_side, MathError, Plane, Vector};

/// Errors that can occur while reading or assembling a mesh.
#[derive(Error, Debug)]
pub enum MeshError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: `{record}` record needs exactly 3 values, found {found}")]
    FieldCount {
        line: usize,
        record: &'static str,
        found: usize,
    },

    #[error("line {line}: invalid number `{token}`")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: invalid vertex reference `{token}`")]
    InvalidIndex { line: usize, token: String },

    #[error("face {face} references vertex {index}, but the mesh has {count} vertices")]
    FaceOutOfRange {
        face: usize,
        index: usize,
        count: usize,
    },
}

/// Result type for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// A triangle given by three ordered vertices.
///
/// The order sets the winding and therefore the sign of the normal,
/// `(v1 - v2) × (v1 - v3)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub v1: Vector,
    pub v2: Vector,
    pub v3: Vector,
}

impl Triangle {
    pub fn new(v1: Vector, v2: Vector, v3: Vector) -> Self {
        Self { v1, v2, v3 }
    }

    pub fn vertices(&self) -> [Vector; 3] {
        [self.v1, self.v2, self.v3]
    }

    pub fn centroid(&self) -> Vector {
        (self.v1 + self.v2 + self.v3) / 3.0
    }

    /// The supporting plane. Fails for a zero-area triangle.
    pub fn plane(&self) -> Result<Plane, MathError> {
        Plane::from_points(self.v1, self.v2, self.v3)
    }

    /// Same-side containment test for a point already on the triangle's plane.
    ///
    /// For each edge the point must lie strictly on the side of the opposite
    /// vertex. Points on an edge or vertex are outside.
    pub fn contains(&self, p: Vector) -> bool {
        same_side(p, self.v3, self.v1, self.v2)
            && same_side(p, self.v1, self.v2, self.v3)
            && same_side(p, self.v2, self.v3, self.v1)
    }
}

/// Vertex positions plus 0-based triangle indices.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    positions: Vec<Vector>,
    faces: Vec<[usize; 3]>,
}

impl Mesh {
    /// Create a mesh, checking every face index against the vertex count.
    pub fn new(positions: Vec<Vector>, faces: Vec<[usize; 3]>) -> MeshResult<Self> {
        let count = positions.len();
        for (face, indices) in faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= count) {
                return Err(MeshError::FaceOutOfRange { face, index, count });
            }
        }
        Ok(Self { positions, faces })
    }

    pub fn positions(&self) -> &[Vector] {
        &self.positions
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Expand the indexed faces into triangles, in face order.
    pub fn triangles(&self) -> Vec<Triangle> {
        self.faces
            .iter()
            .map(|&[a, b, c]| Triangle::new(self.positions[a], self.positions[b], self.positions[c]))
            .collect()
    }
}
