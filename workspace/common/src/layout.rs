//! Squarified treemap tiling.
//!
//! Rows are filled greedily: a value joins the current row while that keeps
//! the row's worst aspect ratio from getting worse. Each finished row is laid
//! along the shorter side of the remaining rectangle.

use serde::{Deserialize, Serialize};

/// Target aspect ratio for tiles.
pub const TREEMAP_RATIO: f64 = 4.0 / 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A laid-out region. `index` points back into the value slice given to [`squarify`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub index: usize,
    pub rect: Rect,
}

/// Tile `bounds` with one rectangle per positive value, area proportional to value.
///
/// Values are placed largest first; ties keep their input order. Zero, negative
/// and non-finite values get no tile. The returned tiles cover `bounds`
/// exactly.
pub fn squarify(values: &[f64], bounds: Rect, ratio: f64) -> Vec<Tile> {
    if !(bounds.width > 0.0 && bounds.height > 0.0) {
        return Vec::new();
    }
    let ratio = if ratio.is_finite() && ratio >= 1.0 { ratio } else { TREEMAP_RATIO };

    let mut order: Vec<usize> = (0..values.len())
        .filter(|&i| values[i].is_finite() && values[i] > 0.0)
        .collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let n = order.len();
    let mut tiles = Vec::with_capacity(n);
    let mut remaining: f64 = order.iter().map(|&i| values[i]).sum();

    let (mut x0, mut y0) = (bounds.x, bounds.y);
    let (x1, y1) = (bounds.x + bounds.width, bounds.y + bounds.height);

    let mut start = 0;
    while start < n {
        let (dx, dy) = (x1 - x0, y1 - y0);

        let first = values[order[start]];
        let mut end = start + 1;
        let mut row_sum = first;
        let (mut row_min, mut row_max) = (first, first);

        let alpha = (dy / dx).max(dx / dy) / (remaining * ratio);
        let worst = |sum: f64, min: f64, max: f64| {
            let beta = sum * sum * alpha;
            (max / beta).max(beta / min)
        };
        let mut best = worst(row_sum, row_min, row_max);

        while end < n {
            let value = values[order[end]];
            let (sum, min, max) = (row_sum + value, row_min.min(value), row_max.max(value));
            let candidate = worst(sum, min, max);
            if candidate > best {
                break;
            }
            row_sum = sum;
            row_min = min;
            row_max = max;
            best = candidate;
            end += 1;
        }

        let row = &order[start..end];
        let last_row = end == n;

        if dx < dy {
            // Row spans the full width and takes a band off the top.
            let band_end = if last_row { y1 } else { y0 + dy * row_sum / remaining };
            lay_row(
                row,
                values,
                row_sum,
                x0,
                x1,
                |a, b| Rect::new(a, y0, b - a, band_end - y0),
                &mut tiles,
            );
            y0 = band_end;
        } else {
            // Row spans the full height and takes a band off the left.
            let band_end = if last_row { x1 } else { x0 + dx * row_sum / remaining };
            lay_row(
                row,
                values,
                row_sum,
                y0,
                y1,
                |a, b| Rect::new(x0, a, band_end - x0, b - a),
                &mut tiles,
            );
            x0 = band_end;
        }

        remaining -= row_sum;
        start = end;
    }

    tiles
}

/// Split `[from, to)` among the row's values and build each tile's rect.
fn lay_row(
    row: &[usize],
    values: &[f64],
    row_sum: f64,
    from: f64,
    to: f64,
    make_rect: impl Fn(f64, f64) -> Rect,
    tiles: &mut Vec<Tile>,
) {
    let span = to - from;
    let mut cursor = from;
    for (position, &index) in row.iter().enumerate() {
        let next = if position + 1 == row.len() {
            to
        } else {
            cursor + span * values[index] / row_sum
        };
        tiles.push(Tile { index, rect: make_rect(cursor, next) });
        cursor = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    fn assert_inside(tile: &Tile, outer: &Rect) {
        let r = tile.rect;
        assert!(r.width >= -EPS && r.height >= -EPS, "negative extent {r:?}");
        assert!(r.x >= outer.x - EPS && r.y >= outer.y - EPS, "{r:?} escapes {outer:?}");
        assert!(r.x + r.width <= outer.x + outer.width + EPS);
        assert!(r.y + r.height <= outer.y + outer.height + EPS);
    }

    fn overlap(a: &Rect, b: &Rect) -> f64 {
        let w = (a.x + a.width).min(b.x + b.width) - a.x.max(b.x);
        let h = (a.y + a.height).min(b.y + b.height) - a.y.max(b.y);
        if w > EPS && h > EPS { w * h } else { 0.0 }
    }

    #[test]
    fn test_single_value_fills_bounds() {
        let tiles = squarify(&[42.0], bounds(), TREEMAP_RATIO);
        assert_eq!(tiles, vec![Tile { index: 0, rect: bounds() }]);
    }

    #[test]
    fn test_two_equal_values_split_in_half() {
        let tiles = squarify(&[50.0, 50.0], bounds(), TREEMAP_RATIO);
        assert_eq!(tiles.len(), 2);
        for tile in &tiles {
            assert!((tile.rect.area() - bounds().area() / 2.0).abs() < 1e-6);
            assert_inside(tile, &bounds());
        }
    }

    #[test]
    fn test_areas_are_proportional_to_values() {
        let values = [25.0, 18.0, 12.0, 9.0, 8.0, 6.0, 5.0, 4.0, 7.0, 6.0];
        let total: f64 = values.iter().sum();
        let outer = bounds();
        let tiles = squarify(&values, outer, TREEMAP_RATIO);

        assert_eq!(tiles.len(), values.len());
        for tile in &tiles {
            let expected = outer.area() * values[tile.index] / total;
            assert!(
                (tile.rect.area() - expected).abs() < 1e-6,
                "tile {} has area {} expected {}",
                tile.index,
                tile.rect.area(),
                expected
            );
            assert_inside(tile, &outer);
        }

        let covered: f64 = tiles.iter().map(|t| t.rect.area()).sum();
        assert!((covered - outer.area()).abs() < 1e-6);

        for (i, a) in tiles.iter().enumerate() {
            for b in &tiles[i + 1..] {
                assert!(overlap(&a.rect, &b.rect) < 1e-6, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_every_index_appears_once() {
        let values = [1.0, 3.0, 2.0, 3.0];
        let mut indices: Vec<usize> = squarify(&values, bounds(), TREEMAP_RATIO)
            .iter()
            .map(|t| t.index)
            .collect();
        assert_eq!(indices[0], 1, "largest value is placed first");
        indices.sort();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_zero_values_get_no_tile() {
        let tiles = squarify(&[0.0, 10.0, f64::NAN, -1.0], bounds(), TREEMAP_RATIO);
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].index, 1);
        assert_eq!(tiles[0].rect, bounds());
    }

    #[test]
    fn test_degenerate_bounds_produce_nothing() {
        assert!(squarify(&[1.0, 2.0], Rect::new(0.0, 0.0, 0.0, 100.0), TREEMAP_RATIO).is_empty());
        assert!(squarify(&[], bounds(), TREEMAP_RATIO).is_empty());
    }

    #[test]
    fn test_many_equal_values_stay_reasonably_square() {
        let values = vec![1.0; 16];
        let outer = Rect::new(0.0, 0.0, 400.0, 400.0);
        for tile in squarify(&values, outer, TREEMAP_RATIO) {
            let r = tile.rect;
            let aspect = (r.width / r.height).max(r.height / r.width);
            assert!(aspect < 3.0, "tile {tile:?} is too elongated");
        }
    }
}
