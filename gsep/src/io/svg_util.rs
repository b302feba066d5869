use serde::{Deserialize, Serialize};

/// Options for rendering a tiling to SVG
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    ///Margin around the tiling, as a fraction of the bounding box's larger dimension
    pub margin_frac: f64,
    ///Stroke width of the tile outlines, as a fraction of the bounding box's larger dimension
    pub stroke_width_frac: f64,
    ///Cycle the tiles through a fill palette instead of drawing them all alike
    pub fill_tiles: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            margin_frac: 0.03,
            stroke_width_frac: 0.002,
            fill_tiles: true,
        }
    }
}

pub static TILE_FILLS: [&str; 5] = [
    "#FFC879", //LIGHT ORANGE
    "#CC824A", //BROWN
    "#E0BB8B", //TAN
    "#AA9B84", //GRAY BROWN
    "#FFE3B3", //CREAM
];

pub static PLAIN_FILL: &str = "#C3C3C3";
pub static STROKE_COLOR: &str = "#2D2D2D";
