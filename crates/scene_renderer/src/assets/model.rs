//! Textured models built from OBJ/MTL files
//!
//! A [`Model`] owns one uploaded [`SubMesh`] per material group. Drawing binds each
//! sub-mesh's textures to consecutive units and names them in the shader as
//! `texture_diffuse1`, `texture_specular1`, `texture_normal1` and so on, counting per
//! kind from one.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::device::{GeometryHandle, RenderDevice, TextureHandle};
use crate::render::geometry::{lit_vertex_layout, GeometryData, LIT_VERTEX_STRIDE};
use crate::render::shader::ShaderProgram;
use crate::render::texture::load_texture;
use super::mtl_parser::{MtlData, MtlParser};
use super::obj_loader::{ObjData, ObjError, ObjLoader};

/// Model loading errors
pub type ModelError = ObjError;

/// Role of a texture within a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    /// Base colour
    Diffuse,
    /// Specular intensity
    Specular,
    /// Tangent-space normals
    Normal,
}

impl TextureKind {
    /// Sampler uniform prefix; the per-kind counter is appended
    pub fn uniform_prefix(self) -> &'static str {
        match self {
            Self::Diffuse => "texture_diffuse",
            Self::Specular => "texture_specular",
            Self::Normal => "texture_normal",
        }
    }
}

/// A texture bound to a sub-mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshTexture {
    /// Role in the material
    pub kind: TextureKind,
    /// Uploaded texture
    pub handle: TextureHandle,
}

/// One uploaded material group
#[derive(Debug, Clone, PartialEq)]
pub struct SubMesh {
    /// Vertex array and buffers
    pub geometry: GeometryHandle,
    /// Number of indices to draw
    pub index_count: usize,
    /// Textures bound before drawing, in unit order
    pub textures: Vec<MeshTexture>,
}

/// GPU object owned by a model, kept in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Owned {
    Geometry(GeometryHandle),
    Texture(TextureHandle),
}

/// Drawable model made of textured sub-meshes
#[derive(Debug, Default)]
pub struct Model {
    meshes: Vec<SubMesh>,
    owned: Vec<Owned>,
}

impl Model {
    /// Load a model, logging failures and returning an empty model instead
    ///
    /// An empty model draws nothing, matching how missing textures render black rather
    /// than stopping the program.
    pub fn load<D: RenderDevice + ?Sized>(device: &mut D, path: &Path) -> Self {
        match Self::try_load(device, path) {
            Ok(model) => {
                log::info!(
                    "Loaded model {:?}: {} sub-meshes, {} textures",
                    path,
                    model.meshes.len(),
                    model.texture_count()
                );
                model
            }
            Err(e) => {
                log::error!("Failed to load model {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load a model, surfacing OBJ errors
    ///
    /// Material libraries and textures are resolved relative to the OBJ's directory.
    /// Unreadable material libraries are logged and skipped.
    pub fn try_load<D: RenderDevice + ?Sized>(device: &mut D, path: &Path) -> Result<Self, ModelError> {
        let obj = ObjLoader::load_obj(path)?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        let mut materials = HashMap::new();
        for library in &obj.material_libraries {
            let library_path = base_dir.join(library);
            match fs::read_to_string(&library_path) {
                Ok(contents) => match MtlParser::parse(&contents) {
                    Ok(parsed) => materials.extend(parsed),
                    Err(e) => log::warn!("Skipping material library {:?}: {}", library_path, e),
                },
                Err(e) => log::warn!("Skipping material library {:?}: {}", library_path, e),
            }
        }

        Ok(Self::from_obj(device, &obj, &materials, &base_dir))
    }

    /// Upload parsed OBJ groups with their materials
    ///
    /// Each distinct texture path is loaded once and shared between sub-meshes.
    pub fn from_obj<D: RenderDevice + ?Sized>(
        device: &mut D,
        obj: &ObjData,
        materials: &HashMap<String, MtlData>,
        base_dir: &Path,
    ) -> Self {
        let mut cache: HashMap<PathBuf, TextureHandle> = HashMap::new();
        let mut model = Self::default();

        for group in &obj.groups {
            let geometry = device.create_geometry(&GeometryData {
                vertices: group.vertices.clone(),
                indices: Some(group.indices.clone()),
                stride: LIT_VERTEX_STRIDE,
                attributes: lit_vertex_layout(),
            });
            model.owned.push(Owned::Geometry(geometry));

            let mut textures = Vec::new();
            if let Some(material) = group.material.as_ref().and_then(|name| materials.get(name)) {
                let maps = [
                    (TextureKind::Diffuse, &material.diffuse_map),
                    (TextureKind::Specular, &material.specular_map),
                    (TextureKind::Normal, &material.normal_map),
                ];
                for (kind, map) in maps {
                    let Some(file) = map else { continue };
                    let texture_path = base_dir.join(file);
                    let handle = match cache.get(&texture_path) {
                        Some(&handle) => handle,
                        None => {
                            let handle = load_texture(device, &texture_path);
                            cache.insert(texture_path, handle);
                            if handle.is_valid() {
                                model.owned.push(Owned::Texture(handle));
                            }
                            handle
                        }
                    };
                    textures.push(MeshTexture { kind, handle });
                }
            } else if let Some(name) = &group.material {
                log::warn!("Material '{}' not found in any library", name);
            }

            model.meshes.push(SubMesh {
                geometry,
                index_count: group.indices.len(),
                textures,
            });
        }

        model
    }

    /// Sub-meshes in draw order
    pub fn meshes(&self) -> &[SubMesh] {
        &self.meshes
    }

    /// Number of distinct textures uploaded for the model
    pub fn texture_count(&self) -> usize {
        self.owned.iter().filter(|o| matches!(o, Owned::Texture(_))).count()
    }

    /// Whether the model has anything to draw
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Bind each sub-mesh's textures and draw it
    ///
    /// The caller has already activated `shader` and pushed transforms and lighting.
    pub fn draw<D, S>(&self, device: &mut D, shader: &mut S)
    where
        D: RenderDevice + ?Sized,
        S: ShaderProgram + ?Sized,
    {
        for mesh in &self.meshes {
            let (mut diffuse, mut specular, mut normal) = (0u32, 0u32, 0u32);
            for (unit, texture) in (0u32..).zip(&mesh.textures) {
                let counter = match texture.kind {
                    TextureKind::Diffuse => &mut diffuse,
                    TextureKind::Specular => &mut specular,
                    TextureKind::Normal => &mut normal,
                };
                *counter += 1;
                let name = format!("{}{}", texture.kind.uniform_prefix(), counter);
                #[allow(clippy::cast_possible_wrap)]
                shader.set_int(&name, unit as i32);
                device.bind_texture(unit, texture.handle);
            }
            device.draw_elements(mesh.geometry, mesh.index_count);
        }
    }

    /// Release every GPU object in reverse creation order
    pub fn release<D: RenderDevice + ?Sized>(self, device: &mut D) {
        for owned in self.owned.into_iter().rev() {
            match owned {
                Owned::Geometry(geometry) => device.delete_geometry(geometry),
                Owned::Texture(texture) => device.delete_texture(texture),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DeviceCall, RecordingDevice, RecordingShader};
    use image::RgbImage;

    fn two_group_obj() -> ObjData {
        ObjLoader::parse(
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl leaves\nf 1 2 3\nusemtl pot\nf 3 2 1\n",
        )
        .unwrap()
    }

    fn materials() -> HashMap<String, MtlData> {
        MtlParser::parse(
            "newmtl leaves\nmap_Kd leaf.png\nmap_Ks leaf_specular.png\nnewmtl pot\nmap_Kd leaf.png\n",
        )
        .unwrap()
    }

    fn write_textures(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        RgbImage::new(1, 1).save(dir.join("leaf.png")).unwrap();
        RgbImage::new(1, 1).save(dir.join("leaf_specular.png")).unwrap();
    }

    #[test]
    fn test_textures_are_loaded_once_per_path() {
        let dir = std::env::temp_dir().join("scene_renderer_model_cache");
        write_textures(&dir);

        let mut device = RecordingDevice::default();
        let model = Model::from_obj(&mut device, &two_group_obj(), &materials(), &dir);

        assert_eq!(model.meshes().len(), 2);
        assert_eq!(device.uploads.len(), 2);
        assert_eq!(model.meshes()[0].textures.len(), 2);
        assert_eq!(model.meshes()[0].textures[0].handle, model.meshes()[1].textures[0].handle);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_draw_binds_units_and_names_samplers() {
        let dir = std::env::temp_dir().join("scene_renderer_model_draw");
        write_textures(&dir);

        let mut device = RecordingDevice::default();
        let model = Model::from_obj(&mut device, &two_group_obj(), &materials(), &dir);
        device.calls.clear();

        let mut shader = RecordingShader::default();
        model.draw(&mut device, &mut shader);

        assert_eq!(shader.int("texture_diffuse1"), Some(0));
        assert_eq!(shader.int("texture_specular1"), Some(1));

        let leaves = model.meshes()[0].clone();
        let pot = model.meshes()[1].clone();
        assert_eq!(
            device.calls,
            vec![
                DeviceCall::BindTexture(0, leaves.textures[0].handle),
                DeviceCall::BindTexture(1, leaves.textures[1].handle),
                DeviceCall::DrawElements(leaves.geometry, 3),
                DeviceCall::BindTexture(0, pot.textures[0].handle),
                DeviceCall::DrawElements(pot.geometry, 3),
            ]
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_sampler_numbering_counts_per_kind_and_restarts_per_mesh() {
        let texture = |kind, name| MeshTexture { kind, handle: TextureHandle(name) };
        let geometry = |vertex_array| GeometryHandle {
            vertex_array,
            vertex_buffer: vertex_array + 100,
            index_buffer: Some(vertex_array + 200),
        };
        let model = Model {
            meshes: vec![
                SubMesh {
                    geometry: geometry(1),
                    index_count: 3,
                    textures: vec![
                        texture(TextureKind::Diffuse, 10),
                        texture(TextureKind::Specular, 11),
                        texture(TextureKind::Diffuse, 12),
                        texture(TextureKind::Normal, 13),
                    ],
                },
                SubMesh {
                    geometry: geometry(2),
                    index_count: 6,
                    textures: vec![texture(TextureKind::Specular, 11)],
                },
            ],
            owned: Vec::new(),
        };

        let mut device = RecordingDevice::default();
        let mut shader = RecordingShader::default();
        model.draw(&mut device, &mut shader);

        assert_eq!(
            shader.order,
            vec![
                "texture_diffuse1",
                "texture_specular1",
                "texture_diffuse2",
                "texture_normal1",
                "texture_specular1",
            ]
        );
        assert_eq!(shader.int("texture_diffuse2"), Some(2));
        assert_eq!(shader.int("texture_normal1"), Some(3));
        // Second mesh starts again at unit 0
        assert_eq!(shader.int("texture_specular1"), Some(0));
    }

    #[test]
    fn test_missing_textures_bind_invalid_handle() {
        let mut device = RecordingDevice::default();
        let model = Model::from_obj(
            &mut device,
            &two_group_obj(),
            &materials(),
            Path::new("nowhere"),
        );
        assert!(device.uploads.is_empty());
        assert!(model.meshes()[0].textures.iter().all(|t| t.handle == TextureHandle::INVALID));
    }

    #[test]
    fn test_missing_model_is_empty() {
        let mut device = RecordingDevice::default();
        let model = Model::load(&mut device, Path::new("missing/plant.obj"));
        assert!(model.is_empty());

        let mut shader = RecordingShader::default();
        model.draw(&mut device, &mut shader);
        assert!(device.calls.is_empty());
    }

    #[test]
    fn test_try_load_reads_material_library() {
        let dir = std::env::temp_dir().join("scene_renderer_model_files");
        write_textures(&dir);
        fs::write(dir.join("plant.mtl"), "newmtl leaves\nmap_Kd leaf.png\n").unwrap();
        fs::write(
            dir.join("plant.obj"),
            "mtllib plant.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl leaves\nf 1 2 3\n",
        )
        .unwrap();

        let mut device = RecordingDevice::default();
        let model = Model::try_load(&mut device, &dir.join("plant.obj")).unwrap();
        assert_eq!(model.meshes().len(), 1);
        assert_eq!(model.meshes()[0].textures.len(), 1);
        assert!(model.meshes()[0].textures[0].handle.is_valid());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_release_deletes_everything() {
        let dir = std::env::temp_dir().join("scene_renderer_model_release");
        write_textures(&dir);

        let mut device = RecordingDevice::default();
        let model = Model::from_obj(&mut device, &two_group_obj(), &materials(), &dir);
        let geometry: Vec<_> = model.meshes().iter().map(|m| m.geometry).collect();
        device.calls.clear();

        assert_eq!(model.texture_count(), 2);
        model.release(&mut device);
        assert_eq!(device.calls.len(), 4);
        assert_eq!(device.calls[0], DeviceCall::DeleteGeometry(geometry[1]));
        assert!(matches!(device.calls[1], DeviceCall::DeleteTexture(_)));
        assert!(matches!(device.calls[2], DeviceCall::DeleteTexture(_)));
        assert_eq!(device.calls[3], DeviceCall::DeleteGeometry(geometry[0]));
        let _ = fs::remove_dir_all(&dir);
    }
}
