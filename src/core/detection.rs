//! Punktquelle: farbige Markierungen in einem Bild erkennen.
//!
//! Das Bild wird nach HSV (8-Bit-Skalierung: H 0..180, S/V 0..255) konvertiert,
//! gegen ein Farbband geschwellt und in 8-zusammenhängende Komponenten
//! zerlegt. Jede ausreichend große Komponente liefert ihren ganzzahligen
//! Schwerpunkt (plus Versatz) als Startpunkt.

use std::collections::VecDeque;
use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;

use super::{DisplaySize, Point};

/// Parameter der Farbsegmentierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionParams {
    /// Untere HSV-Grenze (inklusive)
    pub hsv_lower: [u8; 3],
    /// Obere HSV-Grenze (inklusive)
    pub hsv_upper: [u8; 3],
    /// Komponenten mit Fläche <= diesem Wert werden verworfen (Pixel)
    pub min_blob_area: f64,
    /// Versatz, der auf jeden Schwerpunkt addiert wird
    pub centroid_offset: [i32; 2],
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            hsv_lower: [25, 100, 100],
            hsv_upper: [35, 255, 255],
            min_blob_area: 15.0,
            centroid_offset: [1, -2],
        }
    }
}

/// Ergebnis der Punktquelle: Startpunkte plus Anzeigegröße.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedPoints {
    /// Erkannte Punkte in Anzeige-Koordinaten
    pub points: Vec<Point>,
    /// Anzeigegröße (= Bildgröße)
    pub display_size: DisplaySize,
}

impl DetectedPoints {
    /// Statische Punktliste ohne Bild (Tests, Skripte).
    pub fn from_points(points: Vec<Point>, display_size: DisplaySize) -> Self {
        Self {
            points,
            display_size,
        }
    }
}

/// Lädt ein Bild und erkennt die Punkte darin.
pub fn detect_points_from_file(path: &Path, params: &DetectionParams) -> Result<DetectedPoints> {
    let image = image::open(path)
        .with_context(|| format!("Bild konnte nicht geladen werden: {}", path.display()))?
        .to_rgb8();
    Ok(detect_points(&image, params))
}

/// Erkennt Punkte in einem bereits geladenen RGB-Bild.
pub fn detect_points(image: &RgbImage, params: &DetectionParams) -> DetectedPoints {
    let (width, height) = image.dimensions();
    let mask = threshold_mask(image, params);
    let mut visited = vec![false; mask.len()];
    let mut points = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..mask.len() {
        if !mask[start] || visited[start] {
            continue;
        }

        visited[start] = true;
        queue.push_back(start);
        let mut area = 0u64;
        let mut sum_x = 0u64;
        let mut sum_y = 0u64;

        while let Some(index) = queue.pop_front() {
            let x = (index % width as usize) as i64;
            let y = (index / width as usize) as i64;
            area += 1;
            sum_x += x as u64;
            sum_y += y as u64;

            for dy in -1..=1i64 {
                for dx in -1..=1i64 {
                    let nx = x + dx;
                    let ny = y + dy;
                    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                        continue;
                    }
                    let neighbor = ny as usize * width as usize + nx as usize;
                    if mask[neighbor] && !visited[neighbor] {
                        visited[neighbor] = true;
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        if (area as f64) <= params.min_blob_area {
            continue;
        }

        let cx = (sum_x as f64 / area as f64) as i32 + params.centroid_offset[0];
        let cy = (sum_y as f64 / area as f64) as i32 + params.centroid_offset[1];
        points.push(Point::new(cx, cy));
    }

    log::info!(
        "Punkterkennung: {} Punkte in {}x{} Bild",
        points.len(),
        width,
        height
    );

    DetectedPoints {
        points,
        display_size: DisplaySize::new(width, height),
    }
}

/// Binärmaske aller Pixel innerhalb des HSV-Bands (zeilenweise).
fn threshold_mask(image: &RgbImage, params: &DetectionParams) -> Vec<bool> {
    image
        .pixels()
        .map(|pixel| {
            let hsv = rgb_to_hsv(pixel.0);
            (0..3).all(|i| params.hsv_lower[i] <= hsv[i] && hsv[i] <= params.hsv_upper[i])
        })
        .collect()
}

/// RGB nach HSV in 8-Bit-Skalierung (H halbiert auf 0..180).
pub fn rgb_to_hsv([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let s = if max > 0.0 {
        (delta * 255.0 / max).round()
    } else {
        0.0
    };

    let mut h = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * (gf - bf) / delta
    } else if max == gf {
        120.0 + 60.0 * (bf - rf) / delta
    } else {
        240.0 + 60.0 * (rf - gf) / delta
    };
    if h < 0.0 {
        h += 360.0;
    }

    [
        (h / 2.0).round().min(180.0) as u8,
        s.min(255.0) as u8,
        max as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    const YELLOW: Rgb<u8> = Rgb([255, 255, 0]);

    fn fill_square(image: &mut RgbImage, x0: u32, y0: u32, size: u32, color: Rgb<u8>) {
        for y in y0..y0 + size {
            for x in x0..x0 + size {
                image.put_pixel(x, y, color);
            }
        }
    }

    #[test]
    fn hsv_of_pure_colors() {
        assert_eq!(rgb_to_hsv([255, 255, 0]), [30, 255, 255]);
        assert_eq!(rgb_to_hsv([255, 0, 0]), [0, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 0, 255]), [120, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 0, 0]), [0, 0, 0]);
        assert_eq!(rgb_to_hsv([128, 128, 128]), [0, 0, 128]);
    }

    #[test]
    fn detects_yellow_blobs_with_offset_centroids() {
        let mut image = RgbImage::from_pixel(60, 40, Rgb([20, 20, 120]));
        fill_square(&mut image, 10, 10, 5, YELLOW);
        fill_square(&mut image, 40, 20, 7, YELLOW);

        let detected = detect_points(&image, &DetectionParams::default());

        assert_eq!(detected.display_size, DisplaySize::new(60, 40));
        assert_eq!(
            detected.points,
            vec![Point::new(13, 10), Point::new(44, 21)]
        );
    }

    #[test]
    fn small_blobs_and_other_colors_are_ignored() {
        let mut image = RgbImage::from_pixel(40, 40, Rgb([0, 0, 0]));
        fill_square(&mut image, 2, 2, 3, YELLOW);
        fill_square(&mut image, 20, 20, 6, Rgb([255, 0, 0]));

        let detected = detect_points(&image, &DetectionParams::default());

        assert!(detected.points.is_empty());
    }

    #[test]
    fn diagonal_pixels_belong_to_one_component() {
        let mut image = RgbImage::from_pixel(30, 30, Rgb([0, 0, 0]));
        for i in 0..20 {
            image.put_pixel(i + 5, i + 5, YELLOW);
        }

        let params = DetectionParams {
            centroid_offset: [0, 0],
            ..DetectionParams::default()
        };
        let detected = detect_points(&image, &params);

        assert_eq!(detected.points, vec![Point::new(14, 14)]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = detect_points_from_file(
            Path::new("/nonexistent/curve_point_editor/input.png"),
            &DetectionParams::default(),
        );
        assert!(result.is_err());
    }
}
