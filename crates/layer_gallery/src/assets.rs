//! Auxiliary asset formats and image-based lighting environments for mesh examples.
//!
//! - Register loaders by format with [`LoaderRegistry`]; the process-wide set used by the
//!   built-in examples is [`default_loaders`].
//! - Describe a glTF lighting environment with [`ImageBasedLighting`] and resolve its cube map
//!   texture URLs per [`CubeFace`].
use std::fmt;
use std::sync::LazyLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Base URL of the glTF sample assets.
pub const GLTF_BASE_URL: &str =
    "https://raw.githubusercontent.com/uber-common/deck.gl-data/master/luma.gl/examples/gltf/";

/// Binary asset formats consumed by mesh layers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetFormat {
    /// Polygon file format meshes.
    Ply,
    /// glTF scene graphs, JSON flavor.
    Gltf,
    /// glTF scene graphs, binary flavor.
    GltfBinary,
}

impl AssetFormat {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            AssetFormat::Ply => &["ply"],
            AssetFormat::Gltf => &["gltf"],
            AssetFormat::GltfBinary => &["glb"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AssetFormat::Ply => "PLY",
            AssetFormat::Gltf => "glTF",
            AssetFormat::GltfBinary => "GLB",
        }
    }
}

/// Registry of asset formats that a host must be able to load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoaderRegistry {
    formats: Vec<AssetFormat>,
}

impl LoaderRegistry {
    /// Creates a new, empty [`LoaderRegistry`].
    pub fn new() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Registers a format. Registering the same format twice has no effect.
    pub fn register(&mut self, format: AssetFormat) -> &mut Self {
        if !self.formats.contains(&format) {
            self.formats.push(format);
        }
        self
    }

    pub fn contains(&self, format: AssetFormat) -> bool {
        self.formats.contains(&format)
    }

    pub fn formats(&self) -> &[AssetFormat] {
        &self.formats
    }

    /// Picks a registered format from the URL's file extension. Query strings and
    /// fragments are ignored.
    pub fn format_for(&self, url: &str) -> Option<AssetFormat> {
        let path = url.split(['?', '#']).next().unwrap_or(url);
        let ext = path.rsplit_once('.').map(|(_, e)| e.to_ascii_lowercase())?;
        let found = self
            .formats
            .iter()
            .copied()
            .find(|f| f.extensions().contains(&ext.as_str()));
        if found.is_none() {
            warn!("No loader registered for '{}'.", url);
        }
        found
    }
}

static DEFAULT_LOADERS: LazyLock<LoaderRegistry> = LazyLock::new(|| {
    let mut registry = LoaderRegistry::new();
    registry
        .register(AssetFormat::GltfBinary)
        .register(AssetFormat::Gltf)
        .register(AssetFormat::Ply);
    registry
});

/// Scene-graph and PLY loaders required by the built-in mesh examples.
pub fn default_loaders() -> &'static LoaderRegistry {
    &DEFAULT_LOADERS
}

/// Faces of a cube map texture.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CubeFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    /// Direction name used in environment texture file names.
    pub fn direction(self) -> &'static str {
        match self {
            CubeFace::PositiveX => "right",
            CubeFace::NegativeX => "left",
            CubeFace::PositiveY => "top",
            CubeFace::NegativeY => "bottom",
            CubeFace::PositiveZ => "front",
            CubeFace::NegativeZ => "back",
        }
    }
}

/// Kind of environment map.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnvironmentMap {
    Diffuse,
    Specular,
}

impl fmt::Display for EnvironmentMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EnvironmentMap::Diffuse => "diffuse",
            EnvironmentMap::Specular => "specular",
        })
    }
}

/// An image-based lighting environment for physically based scene-graph rendering.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ImageBasedLighting {
    /// BRDF lookup table texture.
    pub brdf_lut_url: String,
    /// Directory containing the environment cube maps.
    pub base_url: String,
    /// Environment name, the subdirectory holding its maps.
    pub environment: String,
}

impl ImageBasedLighting {
    pub fn new(base_url: impl Into<String>, environment: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            brdf_lut_url: format!("{}/brdfLUT.png", base_url.trim_end_matches('/')),
            base_url,
            environment: environment.into(),
        }
    }

    /// The papermill environment used by the PBR example.
    pub fn papermill() -> Self {
        Self::new(GLTF_BASE_URL, "papermill")
    }

    /// URL of one face of one mip level of an environment cube map.
    pub fn texture_url(&self, map: EnvironmentMap, face: CubeFace, mip_level: u32) -> String {
        format!(
            "{}/{}/{map}/{map}_{}_{mip_level}.jpg",
            self.base_url.trim_end_matches('/'),
            self.environment,
            face.direction()
        )
    }
}
