//! CPU rasterizer for recorded glyph frames.

use image::{Rgba, RgbaImage};
use statusglyph_engine::coords::{Vec2, Viewport};
use statusglyph_engine::paint::Color;
use statusglyph_engine::path::Shape;
use statusglyph_engine::scene::{DrawCmd, DrawList};
use statusglyph_engine::text::GlyphOutlines;

/// Sub-sample offsets inside a pixel (4x rotated grid).
const SAMPLES: [(f32, f32); 4] = [(0.375, 0.125), (0.875, 0.375), (0.125, 0.625), (0.625, 0.875)];

/// Paints `list` back-to-front onto a transparent canvas the size of `view`,
/// enlarged by an integer `scale`.
pub fn rasterize(list: &mut DrawList, view: Viewport, scale: u32, glyphs: &impl GlyphOutlines) -> RgbaImage {
    let scale = scale.max(1);
    let layers: Vec<(Shape, Color)> = list
        .iter_in_paint_order()
        .map(|item| match &item.cmd {
            DrawCmd::Fill(fill) => (fill.shape.clone(), fill.color),
            DrawCmd::Text(text) => (glyphs.outline(&text.text, text.size, text.anchor), text.color),
        })
        .collect();

    let mut img = RgbaImage::new(view.width * scale, view.height * scale);
    let inv = 1.0 / scale as f32;

    for (shape, color) in &layers {
        let Some(bounds) = shape.bounds() else {
            continue;
        };
        let x0 = (bounds.left * scale as f32).floor().max(0.0) as u32;
        let y0 = (bounds.top * scale as f32).floor().max(0.0) as u32;
        let x1 = ((bounds.right * scale as f32).ceil() as u32).min(img.width());
        let y1 = ((bounds.bottom * scale as f32).ceil() as u32).min(img.height());

        for y in y0..y1 {
            for x in x0..x1 {
                let hits = SAMPLES
                    .iter()
                    .filter(|(sx, sy)| shape.contains(Vec2::new((x as f32 + sx) * inv, (y as f32 + sy) * inv)))
                    .count();
                if hits > 0 {
                    let coverage = hits as f32 / SAMPLES.len() as f32;
                    let dst = img.get_pixel_mut(x, y);
                    *dst = over(*dst, *color, coverage);
                }
            }
        }
    }

    img
}

/// Source-over with straight alpha.
fn over(dst: Rgba<u8>, src: Color, coverage: f32) -> Rgba<u8> {
    let (sr, sg, sb, sa) = src.to_straight();
    let sa = sa * coverage;
    let [dr, dg, db, da] = dst.0.map(|c| c as f32 / 255.0);

    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let mix = |s: f32, d: f32| (s * sa + d * da * (1.0 - sa)) / out_a;
    let to_u8 = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba([to_u8(mix(sr, dr)), to_u8(mix(sg, dg)), to_u8(mix(sb, db)), to_u8(out_a)])
}

#[cfg(test)]
mod tests {
    use statusglyph_engine::coords::Rect;
    use statusglyph_engine::scene::ZIndex;
    use statusglyph_engine::text::SegmentFont;

    use super::*;

    #[test]
    fn opaque_fill_covers_its_pixels() {
        let mut list = DrawList::new();
        list.push_fill(ZIndex::BACKGROUND, Shape::rect(Rect::new(2.0, 2.0, 4.0, 4.0)), Color(0xFFFF_0000));
        let img = rasterize(&mut list, Viewport::new(8, 8), 1, &SegmentFont::new());

        assert_eq!(img.get_pixel(3, 3), &Rgba([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(6, 6), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn later_layers_paint_over_earlier() {
        let mut list = DrawList::new();
        let square = Shape::rect(Rect::new(0.0, 0.0, 4.0, 4.0));
        list.push_fill(ZIndex::OVERLAY, square.clone(), Color(0xFF00_00FF));
        list.push_fill(ZIndex::BACKGROUND, square, Color(0xFFFF_0000));
        let img = rasterize(&mut list, Viewport::new(4, 4), 2, &SegmentFont::new());

        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(img.get_pixel(1, 1), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn translucent_source_over_transparent_keeps_color() {
        let px = over(Rgba([0, 0, 0, 0]), Color(0x80FF_FFFF), 1.0);
        assert_eq!(px, Rgba([255, 255, 255, 128]));
    }
}
