//! Asset loading: images, Wavefront OBJ/MTL files and the models built from them

pub mod image_loader;
pub mod mtl_parser;
pub mod obj_loader;
pub mod model;

pub use image_loader::ImageData;
pub use mtl_parser::{MtlData, MtlParser};
pub use obj_loader::{ObjData, ObjError, ObjGroup, ObjLoader};
pub use model::{MeshTexture, Model, ModelError, SubMesh, TextureKind};

use thiserror::Error;

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset could not be read or decoded
    #[error("Load failed: {0}")]
    LoadFailed(String),
}
