use svg::Document;
use svg::node::element::Rectangle as SvgRect;

use guillotine_rs::entities::Tiling;
use guillotine_rs::geometry::primitives::Rect;

use crate::io::svg_util::{PLAIN_FILL, STROKE_COLOR, SvgDrawOptions, TILE_FILLS};

/// Renders a tiling to an SVG document.
/// The y-axis is flipped so the tiling is drawn the way its coordinates read.
pub fn tiling_to_svg(tiling: &Tiling, options: SvgDrawOptions) -> Document {
    let bbox = match tiling
        .tiles
        .iter()
        .map(|tile| tile.rect)
        .reduce(Rect::bounding_rect)
    {
        Some(bbox) => bbox,
        None => return Document::new().set("viewBox", (0, 0, 1, 1)),
    };

    let span = f64::max(bbox.width() as f64, bbox.height() as f64);
    let margin = span * options.margin_frac;
    let stroke_width = span * options.stroke_width_frac;

    let mut document = Document::new().set(
        "viewBox",
        (
            bbox.x_min as f64 - margin,
            -margin,
            bbox.width() as f64 + 2.0 * margin,
            bbox.height() as f64 + 2.0 * margin,
        ),
    );

    for tile in &tiling.tiles {
        let fill = match options.fill_tiles {
            true => TILE_FILLS[tile.id % TILE_FILLS.len()],
            false => PLAIN_FILL,
        };
        let rect = &tile.rect;
        document = document.add(
            SvgRect::new()
                .set("x", rect.x_min as f64)
                .set("y", (bbox.y_max - rect.y_max) as f64)
                .set("width", rect.width() as f64)
                .set("height", rect.height() as f64)
                .set("fill", fill)
                .set("stroke", STROKE_COLOR)
                .set("stroke-width", stroke_width),
        );
    }
    document
}
