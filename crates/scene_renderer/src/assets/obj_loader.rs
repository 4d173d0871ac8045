//! OBJ file loader for 3D models
//!
//! Faces are fan-triangulated and grouped by `usemtl` so each group can be drawn with its
//! own textures. Within a group, identical position/uv/normal triples share one vertex.
//!
//! Texture coordinates are flipped vertically (`v' = 1 - v`) to match images uploaded
//! top row first. Corners without a `vn` get a smooth normal: the normalised sum of the
//! normals of every triangle in the group that touches the same position.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::foundation::math::Vec3;
use crate::render::geometry::LIT_VERTEX_STRIDE;

/// Offset of the normal within an interleaved vertex
const NORMAL_OFFSET: usize = 3;

/// OBJ loading errors
#[derive(Error, Debug)]
pub enum ObjError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed number or index
    #[error("Parse error on line {line}: {message}")]
    ParseError {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },
    /// Structurally invalid file
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Triangles sharing one material
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjGroup {
    /// Material named by the preceding `usemtl`, if any
    pub material: Option<String>,
    /// Interleaved position/normal/uv vertices
    pub vertices: Vec<f32>,
    /// Triangle indices into `vertices`
    pub indices: Vec<u32>,
}

impl ObjGroup {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / LIT_VERTEX_STRIDE
    }
}

/// Parsed OBJ file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjData {
    /// Material libraries referenced by `mtllib`
    pub material_libraries: Vec<String>,
    /// Non-empty triangle groups in file order
    pub groups: Vec<ObjGroup>,
}

/// Key identifying a unique face corner
type CornerKey = (usize, Option<usize>, Option<usize>);

struct GroupBuilder {
    group: ObjGroup,
    corners: HashMap<CornerKey, u32>,
    /// Summed face normals per position index, for corners without `vn`
    smoothed: HashMap<usize, Vec3>,
    /// Vertices waiting for a smooth normal, with their position index
    pending: Vec<(u32, usize)>,
}

impl GroupBuilder {
    fn new(material: Option<String>) -> Self {
        Self {
            group: ObjGroup { material, ..ObjGroup::default() },
            corners: HashMap::new(),
            smoothed: HashMap::new(),
            pending: Vec::new(),
        }
    }

    /// Add a triangle's face normal to each of its corners that lacks one
    fn accumulate_normal(&mut self, corners: [CornerKey; 3], positions: &[[f32; 3]]) {
        let [a, b, c] = corners.map(|(p, _, _)| Vec3::from(positions[p]));
        let Some(normal) = (b - a).cross(&(c - a)).try_normalize(f32::EPSILON) else {
            return;
        };
        for (p, _, n) in corners {
            if n.is_none() {
                *self.smoothed.entry(p).or_insert_with(Vec3::zeros) += normal;
            }
        }
    }

    /// Write smooth normals into pending vertices and hand over the group
    fn finish(mut self) -> ObjGroup {
        for (vertex, position) in self.pending {
            let normal = self
                .smoothed
                .get(&position)
                .and_then(|sum| sum.try_normalize(f32::EPSILON))
                .unwrap_or_else(Vec3::y);
            let start = vertex as usize * LIT_VERTEX_STRIDE + NORMAL_OFFSET;
            self.group.vertices[start..start + 3].copy_from_slice(normal.as_slice());
        }
        self.group
    }
}

/// OBJ file loader
pub struct ObjLoader;

impl ObjLoader {
    /// Load and parse an OBJ file
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<ObjData, ObjError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse OBJ text
    pub fn parse(contents: &str) -> Result<ObjData, ObjError> {
        let mut positions: Vec<[f32; 3]> = Vec::new();
        let mut normals: Vec<[f32; 3]> = Vec::new();
        let mut tex_coords: Vec<[f32; 2]> = Vec::new();
        let mut data = ObjData::default();
        let mut builder = GroupBuilder::new(None);

        for (line_idx, line) in contents.lines().enumerate() {
            let line_num = line_idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            let Some(keyword) = parts.next() else { continue };
            let args: Vec<&str> = parts.collect();

            match keyword {
                "v" => positions.push(Self::parse_floats::<3>(&args, line_num)?),
                "vn" => normals.push(Self::parse_floats::<3>(&args, line_num)?),
                "vt" => {
                    let [u, v] = Self::parse_floats::<2>(&args, line_num)?;
                    tex_coords.push([u, 1.0 - v]);
                }
                "mtllib" => {
                    let rest = line["mtllib".len()..].trim();
                    if !rest.is_empty() {
                        data.material_libraries.push(rest.to_string());
                    }
                }
                "usemtl" => {
                    let name = line["usemtl".len()..].trim().to_string();
                    let finished = std::mem::replace(&mut builder, GroupBuilder::new(Some(name)));
                    if !finished.group.indices.is_empty() {
                        data.groups.push(finished.finish());
                    }
                }
                "f" => {
                    if args.len() < 3 {
                        return Err(ObjError::ParseError {
                            line: line_num,
                            message: "face needs at least three corners".to_string(),
                        });
                    }

                    let mut face = Vec::with_capacity(args.len());
                    let mut keys = Vec::with_capacity(args.len());
                    for corner in &args {
                        let key = Self::parse_corner(
                            corner,
                            line_num,
                            positions.len(),
                            tex_coords.len(),
                            normals.len(),
                        )?;
                        let index = match builder.corners.get(&key) {
                            Some(&index) => index,
                            None => {
                                let index = u32::try_from(builder.group.vertex_count())
                                    .map_err(|_| ObjError::InvalidFormat("too many vertices".to_string()))?;
                                let (p, t, n) = key;
                                let position = positions[p];
                                let normal = n.map_or([0.0, 1.0, 0.0], |n| normals[n]);
                                let uv = t.map_or([0.0, 0.0], |t| tex_coords[t]);
                                builder.group.vertices.extend_from_slice(&position);
                                builder.group.vertices.extend_from_slice(&normal);
                                builder.group.vertices.extend_from_slice(&uv);
                                builder.corners.insert(key, index);
                                if n.is_none() {
                                    builder.pending.push((index, p));
                                }
                                index
                            }
                        };
                        face.push(index);
                        keys.push(key);
                    }

                    // Fan triangulation
                    for i in 1..face.len() - 1 {
                        builder.group.indices.extend_from_slice(&[face[0], face[i], face[i + 1]]);
                        builder.accumulate_normal([keys[0], keys[i], keys[i + 1]], &positions);
                    }
                }
                _ => {
                    // o, g, s and friends carry nothing the renderer uses
                }
            }
        }

        if !builder.group.indices.is_empty() {
            data.groups.push(builder.finish());
        }

        if data.groups.is_empty() {
            return Err(ObjError::InvalidFormat("No faces found in OBJ file".to_string()));
        }

        Ok(data)
    }

    fn parse_floats<const N: usize>(args: &[&str], line: usize) -> Result<[f32; N], ObjError> {
        if args.len() < N {
            return Err(ObjError::ParseError {
                line,
                message: format!("expected {} components, found {}", N, args.len()),
            });
        }
        let mut out = [0.0; N];
        for (slot, arg) in out.iter_mut().zip(args) {
            *slot = arg.parse().map_err(|_| ObjError::ParseError {
                line,
                message: format!("invalid number '{arg}'"),
            })?;
        }
        Ok(out)
    }

    /// Resolve a `v/vt/vn` corner to zero-based indices
    ///
    /// Negative indices count back from the most recent element.
    fn parse_corner(
        corner: &str,
        line: usize,
        position_count: usize,
        tex_count: usize,
        normal_count: usize,
    ) -> Result<CornerKey, ObjError> {
        let mut fields = corner.split('/');
        let position = fields.next().unwrap_or_default();
        let tex = fields.next().filter(|s| !s.is_empty());
        let normal = fields.next().filter(|s| !s.is_empty());

        let resolve = |raw: &str, count: usize, what: &str| -> Result<usize, ObjError> {
            let value: i64 = raw.parse().map_err(|_| ObjError::ParseError {
                line,
                message: format!("invalid {what} index '{raw}'"),
            })?;
            let count_i = i64::try_from(count).unwrap_or(i64::MAX);
            let resolved = if value < 0 { count_i + value } else { value - 1 };
            if (0..count_i).contains(&resolved) {
                usize::try_from(resolved).map_err(|_| ObjError::InvalidFormat(format!("{what} index overflow")))
            } else {
                Err(ObjError::ParseError {
                    line,
                    message: format!("{what} index {value} out of range (have {count})"),
                })
            }
        };

        Ok((
            resolve(position, position_count, "position")?,
            tex.map(|t| resolve(t, tex_count, "texture")).transpose()?,
            normal.map(|n| resolve(n, normal_count, "normal")).transpose()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const QUAD: &str = "\
mtllib indoor plant.mtl
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
vt 0 0
vt 1 0
vt 1 1
vt 0 1
vn 0 0 1
usemtl leaves
f 1/1/1 2/2/1 3/3/1 4/4/1
";

    #[test]
    fn test_quad_is_fan_triangulated() {
        let data = ObjLoader::parse(QUAD).unwrap();
        assert_eq!(data.material_libraries, vec!["indoor plant.mtl".to_string()]);
        assert_eq!(data.groups.len(), 1);

        let group = &data.groups[0];
        assert_eq!(group.material.as_deref(), Some("leaves"));
        assert_eq!(group.vertex_count(), 4);
        assert_eq!(group.indices, vec![0, 1, 2, 0, 2, 3]);
        // Third vertex: position (1,1,0), normal (0,0,1), uv (1,1) flipped to (1,0)
        assert_eq!(&group.vertices[16..24], &[1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_groups_split_on_usemtl_and_share_corners() {
        let obj = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
usemtl a
f 1 2 3
f 3 2 4
usemtl b
f -1 -2 -3
";
        let data = ObjLoader::parse(obj).unwrap();
        assert_eq!(data.groups.len(), 2);
        assert_eq!(data.groups[0].vertex_count(), 4);
        assert_eq!(data.groups[0].indices.len(), 6);
        assert_eq!(data.groups[1].material.as_deref(), Some("b"));
        // Missing normals come from the face winding, missing uvs are zero
        assert_eq!(&data.groups[1].vertices[0..8], &[1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_texture_v_is_flipped() {
        let data = ObjLoader::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0.2\nf 1/1 2/1 3/1\n").unwrap();
        let vertices = &data.groups[0].vertices;
        assert_relative_eq!(vertices[6], 0.0);
        assert_relative_eq!(vertices[7], 0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_smooth_normals_average_adjacent_faces() {
        // Two triangles folded along the edge 1-2: one facing +Z, one facing +Y
        let obj = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1
f 1 2 3
f 1 4 2
";
        let data = ObjLoader::parse(obj).unwrap();
        let group = &data.groups[0];
        let normal = |vertex: usize| {
            let start = vertex * LIT_VERTEX_STRIDE + NORMAL_OFFSET;
            Vec3::new(group.vertices[start], group.vertices[start + 1], group.vertices[start + 2])
        };

        let shared = Vec3::new(0.0, 1.0, 1.0).normalize();
        assert_relative_eq!(normal(0), shared, epsilon = 1e-6);
        assert_relative_eq!(normal(1), shared, epsilon = 1e-6);
        assert_relative_eq!(normal(2), Vec3::z(), epsilon = 1e-6);
        assert_relative_eq!(normal(3), Vec3::y(), epsilon = 1e-6);
    }

    #[test]
    fn test_explicit_normals_are_not_smoothed() {
        let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 1 0 0\nf 1//1 2 3\n";
        let group = &ObjLoader::parse(obj).unwrap().groups[0];
        assert_eq!(&group.vertices[3..6], &[1.0, 0.0, 0.0]);
        assert_eq!(&group.vertices[11..14], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_out_of_range_index_is_error() {
        let result = ObjLoader::parse("v 0 0 0\nf 1 2 3\n");
        assert!(matches!(result, Err(ObjError::ParseError { line: 2, .. })));
    }

    #[test]
    fn test_file_without_faces_is_invalid() {
        assert!(matches!(ObjLoader::parse("v 0 0 0\n"), Err(ObjError::InvalidFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(ObjLoader::load_obj("missing/plant.obj"), Err(ObjError::Io(_))));
    }
}
