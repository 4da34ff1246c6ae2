//! Renderable layer variants known to the rendering engine.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifies which engine layer class a descriptor instantiates.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    SimpleMesh,
    Scenegraph,
    GreatCircle,
    S2,
    H3Cluster,
    H3Hexagon,
    Trips,
    GpuGrid,
    NewGrid,
}

/// Broad grouping of layer kinds by the engine module that provides them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerFamily {
    Mesh,
    Geo,
    Aggregation,
}

impl LayerKind {
    pub const ALL: [LayerKind; 9] = [
        LayerKind::SimpleMesh,
        LayerKind::Scenegraph,
        LayerKind::GreatCircle,
        LayerKind::S2,
        LayerKind::H3Cluster,
        LayerKind::H3Hexagon,
        LayerKind::Trips,
        LayerKind::GpuGrid,
        LayerKind::NewGrid,
    ];

    /// Engine class name for this layer kind.
    pub fn name(self) -> &'static str {
        match self {
            LayerKind::SimpleMesh => "SimpleMeshLayer",
            LayerKind::Scenegraph => "ScenegraphLayer",
            LayerKind::GreatCircle => "GreatCircleLayer",
            LayerKind::S2 => "S2Layer",
            LayerKind::H3Cluster => "H3ClusterLayer",
            LayerKind::H3Hexagon => "H3HexagonLayer",
            LayerKind::Trips => "TripsLayer",
            LayerKind::GpuGrid => "GPUGridLayer",
            LayerKind::NewGrid => "NewGridLayer",
        }
    }

    pub fn family(self) -> LayerFamily {
        match self {
            LayerKind::SimpleMesh | LayerKind::Scenegraph => LayerFamily::Mesh,
            LayerKind::GreatCircle
            | LayerKind::S2
            | LayerKind::H3Cluster
            | LayerKind::H3Hexagon
            | LayerKind::Trips => LayerFamily::Geo,
            LayerKind::GpuGrid | LayerKind::NewGrid => LayerFamily::Aggregation,
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayerKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownLayerKind { name: s.to_owned() })
    }
}
