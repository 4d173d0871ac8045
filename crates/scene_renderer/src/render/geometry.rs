//! Static geometry for the cube and the point light marker
//!
//! Vertex data is stored interleaved as `f32`s and described by a list of
//! [`VertexAttribute`]s so any backend can set up the matching input layout.

/// One interleaved vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location
    pub location: u32,
    /// Number of `f32` components
    pub components: i32,
    /// Offset in `f32`s from the start of the vertex
    pub offset: usize,
}

/// Interleaved vertex data plus optional indices
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Interleaved vertex components
    pub vertices: Vec<f32>,
    /// Triangle indices, if drawn indexed
    pub indices: Option<Vec<u32>>,
    /// Number of `f32`s per vertex
    pub stride: usize,
    /// Attribute layout
    pub attributes: Vec<VertexAttribute>,
}

impl GeometryData {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        if self.stride == 0 {
            0
        } else {
            self.vertices.len() / self.stride
        }
    }

    /// Number of indices (0 for non-indexed geometry)
    pub fn index_count(&self) -> usize {
        self.indices.as_ref().map_or(0, Vec::len)
    }
}

/// Position / normal / texture coordinate layout shared by the cube and loaded meshes
pub fn lit_vertex_layout() -> Vec<VertexAttribute> {
    vec![
        VertexAttribute { location: 0, components: 3, offset: 0 },
        VertexAttribute { location: 1, components: 3, offset: 3 },
        VertexAttribute { location: 2, components: 2, offset: 6 },
    ]
}

/// Floats per lit vertex
pub const LIT_VERTEX_STRIDE: usize = 8;

/// Vertices drawn by the cube pass
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Indices drawn by the marker pass
pub const MARKER_INDEX_COUNT: usize = 12;

#[rustfmt::skip]
const CUBE_VERTICES: [f32; CUBE_VERTEX_COUNT * LIT_VERTEX_STRIDE] = [
    // positions          // normals           // uv
    -0.5, -0.5, -0.5,  0.0,  0.0, -1.0,  0.0, 0.0,
     0.5, -0.5, -0.5,  0.0,  0.0, -1.0,  1.0, 0.0,
     0.5,  0.5, -0.5,  0.0,  0.0, -1.0,  1.0, 1.0,
     0.5,  0.5, -0.5,  0.0,  0.0, -1.0,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0,  0.0, -1.0,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0,  0.0, -1.0,  0.0, 0.0,

    -0.5, -0.5,  0.5,  0.0,  0.0,  1.0,  0.0, 0.0,
     0.5, -0.5,  0.5,  0.0,  0.0,  1.0,  1.0, 0.0,
     0.5,  0.5,  0.5,  0.0,  0.0,  1.0,  1.0, 1.0,
     0.5,  0.5,  0.5,  0.0,  0.0,  1.0,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0,  0.0,  1.0,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0,  0.0,  1.0,  0.0, 0.0,

    -0.5,  0.5,  0.5, -1.0,  0.0,  0.0,  1.0, 0.0,
    -0.5,  0.5, -0.5, -1.0,  0.0,  0.0,  1.0, 1.0,
    -0.5, -0.5, -0.5, -1.0,  0.0,  0.0,  0.0, 1.0,
    -0.5, -0.5, -0.5, -1.0,  0.0,  0.0,  0.0, 1.0,
    -0.5, -0.5,  0.5, -1.0,  0.0,  0.0,  0.0, 0.0,
    -0.5,  0.5,  0.5, -1.0,  0.0,  0.0,  1.0, 0.0,

     0.5,  0.5,  0.5,  1.0,  0.0,  0.0,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0,  0.0,  0.0,  1.0, 1.0,
     0.5, -0.5, -0.5,  1.0,  0.0,  0.0,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0,  0.0,  0.0,  0.0, 1.0,
     0.5, -0.5,  0.5,  1.0,  0.0,  0.0,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0,  0.0,  0.0,  1.0, 0.0,

    -0.5, -0.5, -0.5,  0.0, -1.0,  0.0,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, -1.0,  0.0,  1.0, 1.0,
     0.5, -0.5,  0.5,  0.0, -1.0,  0.0,  1.0, 0.0,
     0.5, -0.5,  0.5,  0.0, -1.0,  0.0,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, -1.0,  0.0,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, -1.0,  0.0,  0.0, 1.0,

    -0.5,  0.5, -0.5,  0.0,  1.0,  0.0,  0.0, 1.0,
     0.5,  0.5, -0.5,  0.0,  1.0,  0.0,  1.0, 1.0,
     0.5,  0.5,  0.5,  0.0,  1.0,  0.0,  1.0, 0.0,
     0.5,  0.5,  0.5,  0.0,  1.0,  0.0,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0,  1.0,  0.0,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0,  1.0,  0.0,  0.0, 1.0,
];

#[rustfmt::skip]
const MARKER_VERTICES: [f32; 12] = [
    0.0, 0.0, 0.0,
    1.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,
];

#[rustfmt::skip]
const MARKER_INDICES: [u32; MARKER_INDEX_COUNT] = [
    0, 1, 2,
    0, 2, 3,
    0, 1, 3,
    1, 2, 3,
];

/// Unit cube centred on the origin, 12 triangles with normals and texture coordinates
pub fn cube() -> GeometryData {
    GeometryData {
        vertices: CUBE_VERTICES.to_vec(),
        indices: None,
        stride: LIT_VERTEX_STRIDE,
        attributes: lit_vertex_layout(),
    }
}

/// Tetrahedron spanning the origin and the three unit axes, positions only
pub fn marker_tetrahedron() -> GeometryData {
    GeometryData {
        vertices: MARKER_VERTICES.to_vec(),
        indices: Some(MARKER_INDICES.to_vec()),
        stride: 3,
        attributes: vec![VertexAttribute { location: 0, components: 3, offset: 0 }],
    }
}
