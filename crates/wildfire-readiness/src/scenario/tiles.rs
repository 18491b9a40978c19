use serde::Serialize;

/// Map tile advertised to the frontend. Tiles carry no prediction; clients
/// score them through `/predict` with real features.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileMetadata {
    pub tile_id: &'static str,
    pub label: &'static str,
    /// `[min_lon, min_lat, max_lon, max_lat]`
    pub bbox: [f64; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileCatalog {
    pub tiles: Vec<TileMetadata>,
    pub note: &'static str,
}

pub fn demo_tiles() -> TileCatalog {
    TileCatalog {
        tiles: vec![TileMetadata {
            tile_id: "CA_tile_07_2022",
            label: "Bay Area",
            bbox: [-123.0, 37.0, -121.5, 38.5],
        }],
        note: "Predictions require calling /predict endpoint with actual weather and distance features",
    }
}
