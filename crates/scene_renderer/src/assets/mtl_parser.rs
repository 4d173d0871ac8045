//! MTL (Material Template Library) file parser
//!
//! Parses the part of Wavefront .mtl files the forward shaders use: the texture maps
//! bound per sub-mesh. Colour terms and `Ns` are ignored; the plant shader samples its
//! colour from textures and uses a fixed shininess.

use std::collections::HashMap;

/// Parsed MTL material data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MtlData {
    /// Material name
    pub name: String,
    /// Diffuse texture map (map_Kd)
    pub diffuse_map: Option<String>,
    /// Specular texture map (map_Ks)
    pub specular_map: Option<String>,
    /// Bump/normal map (map_Bump or bump)
    pub normal_map: Option<String>,
}

/// MTL file parser
pub struct MtlParser;

impl MtlParser {
    /// Parse MTL file contents into a map of material name -> MtlData
    ///
    /// Unknown statements are skipped. Statements before the first `newmtl` are an error
    /// because they cannot be attributed to a material.
    pub fn parse(contents: &str) -> Result<HashMap<String, MtlData>, String> {
        let mut materials = HashMap::new();
        let mut current: Option<MtlData> = None;

        for (line_num, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (keyword, rest) = match line.split_once(char::is_whitespace) {
                Some((keyword, rest)) => (keyword, rest.trim()),
                None => (line, ""),
            };

            if keyword == "newmtl" {
                if let Some(done) = current.take() {
                    materials.insert(done.name.clone(), done);
                }
                if rest.is_empty() {
                    return Err(format!("Line {}: newmtl without a name", line_num + 1));
                }
                current = Some(MtlData {
                    name: rest.to_string(),
                    ..MtlData::default()
                });
                continue;
            }

            let Some(material) = current.as_mut() else {
                return Err(format!("Line {}: '{}' before any newmtl", line_num + 1, keyword));
            };

            match keyword {
                "map_Kd" => material.diffuse_map = Some(Self::map_path(rest)),
                "map_Ks" => material.specular_map = Some(Self::map_path(rest)),
                "map_Bump" | "map_bump" | "bump" => material.normal_map = Some(Self::map_path(rest)),
                _ => {}
            }
        }

        if let Some(done) = current.take() {
            materials.insert(done.name.clone(), done);
        }

        Ok(materials)
    }

    /// Extract the file name from a map statement
    ///
    /// Names may contain spaces. When the statement carries options (`-bm 1.0 file`)
    /// the last token is taken as the file.
    fn map_path(rest: &str) -> String {
        if rest.starts_with('-') {
            rest.split_whitespace().last().unwrap_or_default().to_string()
        } else {
            rest.to_string()
        }
    }
}
