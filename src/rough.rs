//! Hand-drawn stroke synthesis. Turns exact geometry into wobbly polyline
//! strokes, in the style of the rough.js generator.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Vertex;

#[derive(Debug, Clone)]
pub struct RoughOptions {
    pub roughness: f32,
    pub bowing: f32,
    pub stroke_width: f32,
    pub max_randomness_offset: f32,
    pub curve_step_count: u32,
    pub disable_multi_stroke: bool,
    pub preserve_vertices: bool,
}

impl Default for RoughOptions {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            stroke_width: 2.0,
            max_randomness_offset: 2.0,
            curve_step_count: 32,
            disable_multi_stroke: false,
            preserve_vertices: false,
        }
    }
}

/// Precomputed render descriptor for one element.
///
/// Opaque to the shape model: elements carry a `Sketch` around but never look
/// inside it, and the factory rebuilds it whenever geometry changes.
#[derive(Debug, Clone)]
pub struct Sketch {
    strokes: Vec<Vec<[f32; 2]>>,
    stroke_width: f32,
}

impl Sketch {
    /// Whether any stroke has at least one drawable segment.
    pub fn has_segments(&self) -> bool {
        self.strokes.iter().any(|s| s.len() >= 2)
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Tessellates every stroke into triangle quads for the draw pipeline.
    ///
    /// Indices are 32-bit: one buffer accumulates the whole element store
    /// per frame, which outgrows a u16 index space after a couple hundred
    /// shapes.
    pub fn tessellate(
        &self,
        color: [f32; 4],
        vertices: &mut Vec<Vertex>,
        indices: &mut Vec<u32>,
        index_offset: &mut u32,
    ) {
        for stroke in &self.strokes {
            for pair in stroke.windows(2) {
                let (p1, p2) = (pair[0], pair[1]);
                let dx = p2[0] - p1[0];
                let dy = p2[1] - p1[1];
                let len = (dx * dx + dy * dy).sqrt();
                if len <= 0.0 {
                    continue;
                }
                let nx = -dy / len * self.stroke_width * 0.5;
                let ny = dx / len * self.stroke_width * 0.5;

                vertices.extend_from_slice(&[
                    Vertex { position: [p1[0] - nx, p1[1] - ny], color },
                    Vertex { position: [p1[0] + nx, p1[1] + ny], color },
                    Vertex { position: [p2[0] + nx, p2[1] + ny], color },
                    Vertex { position: [p2[0] - nx, p2[1] - ny], color },
                ]);
                indices.extend_from_slice(&[
                    *index_offset,
                    *index_offset + 1,
                    *index_offset + 2,
                    *index_offset,
                    *index_offset + 2,
                    *index_offset + 3,
                ]);
                *index_offset += 4;
            }
        }
    }
}

pub struct RoughGenerator {
    rng: StdRng,
}

impl RoughGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(42),
        };
        Self { rng }
    }

    fn random(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn offset(&mut self, min: f32, max: f32, options: &RoughOptions, roughness_gain: f32) -> f32 {
        options.roughness * roughness_gain * ((self.random() * (max - min)) + min)
    }

    fn offset_opt(&mut self, x: f32, options: &RoughOptions, roughness_gain: f32) -> f32 {
        self.offset(-x, x, options, roughness_gain)
    }

    /// A two-point line sketch.
    pub fn line(&mut self, start: [f32; 2], end: [f32; 2], options: &RoughOptions) -> Sketch {
        let mut strokes = vec![self.wobbly_line(start, end, options)];
        if !options.disable_multi_stroke {
            strokes.push(self.wobbly_line(start, end, options));
        }
        Sketch {
            strokes,
            stroke_width: options.stroke_width,
        }
    }

    /// A rectangle sketch anchored at `position`. Negative sizes are fine;
    /// the corner loop just walks the opposite way around.
    pub fn rectangle(&mut self, position: [f32; 2], size: [f32; 2], options: &RoughOptions) -> Sketch {
        let corners = [
            position,
            [position[0] + size[0], position[1]],
            [position[0] + size[0], position[1] + size[1]],
            [position[0], position[1] + size[1]],
        ];

        let mut strokes = Vec::new();
        for i in 0..4 {
            let start = corners[i];
            let end = corners[(i + 1) % 4];
            strokes.push(self.wobbly_line(start, end, options));
            if !options.disable_multi_stroke {
                strokes.push(self.wobbly_line(start, end, options));
            }
        }
        Sketch {
            strokes,
            stroke_width: options.stroke_width,
        }
    }

    /// A circle sketch with the given diameter, centered on `center`.
    pub fn circle(&mut self, center: [f32; 2], diameter: f32, options: &RoughOptions) -> Sketch {
        self.ellipse(center, [diameter, diameter], options)
    }

    /// An ellipse sketch centered on `center`, spanning `size` (width, height).
    pub fn ellipse(&mut self, center: [f32; 2], size: [f32; 2], options: &RoughOptions) -> Sketch {
        let rx = size[0].abs() / 2.0;
        let ry = size[1].abs() / 2.0;

        let step_variation = (self.random() * 4.0) as u32;
        let step_count = (options.curve_step_count + step_variation).clamp(16, 48);
        let increment = (std::f32::consts::PI * 2.0) / step_count as f32;

        let rx_offset = rx + self.offset_opt(rx * 0.02, options, 1.0);
        let ry_offset = ry + self.offset_opt(ry * 0.02, options, 1.0);

        let overlap = increment * self.offset(0.05, 0.1, options, 1.0);
        let points = self.ellipse_points(
            increment, center, rx_offset, ry_offset, 1.0, overlap, options, step_count,
        );

        let mut strokes = vec![points];

        if !options.disable_multi_stroke {
            let second_pass = RoughOptions {
                roughness: options.roughness * 0.8,
                ..options.clone()
            };
            let rx2 = rx + self.offset_opt(rx * 0.01, &second_pass, 1.0);
            let ry2 = ry + self.offset_opt(ry * 0.01, &second_pass, 1.0);
            let overlap2 = increment * self.offset(0.02, 0.05, &second_pass, 1.0);
            strokes.push(self.ellipse_points(
                increment,
                center,
                rx2,
                ry2,
                0.5,
                overlap2,
                &second_pass,
                step_count,
            ));
        }

        Sketch {
            strokes,
            stroke_width: options.stroke_width,
        }
    }

    fn wobbly_line(&mut self, start: [f32; 2], end: [f32; 2], options: &RoughOptions) -> Vec<[f32; 2]> {
        let length_sq = (start[0] - end[0]).powi(2) + (start[1] - end[1]).powi(2);
        let length = length_sq.sqrt();

        let roughness_gain = if length < 200.0 {
            1.0
        } else if length > 500.0 {
            0.4
        } else {
            (-0.0016668) * length + 1.233334
        };

        let mut offset = options.max_randomness_offset;
        if (offset * offset * 100.0) > length_sq {
            offset = length / 10.0;
        }

        let diverge_point = 0.2 + self.random() * 0.2;
        let mut mid_disp_x =
            options.bowing * options.max_randomness_offset * (end[1] - start[1]) / 200.0;
        let mut mid_disp_y =
            options.bowing * options.max_randomness_offset * (start[0] - end[0]) / 200.0;
        mid_disp_x += self.offset_opt(mid_disp_x, options, roughness_gain);
        mid_disp_y += self.offset_opt(mid_disp_y, options, roughness_gain);

        let start_jitter = self.endpoint_jitter(offset, options, roughness_gain);
        let p0 = [start[0] + start_jitter[0], start[1] + start_jitter[1]];

        let cp1 = [
            mid_disp_x
                + start[0]
                + (end[0] - start[0]) * diverge_point
                + self.offset_opt(offset, options, roughness_gain),
            mid_disp_y
                + start[1]
                + (end[1] - start[1]) * diverge_point
                + self.offset_opt(offset, options, roughness_gain),
        ];
        let cp2 = [
            mid_disp_x
                + start[0]
                + 2.0 * (end[0] - start[0]) * diverge_point
                + self.offset_opt(offset, options, roughness_gain),
            mid_disp_y
                + start[1]
                + 2.0 * (end[1] - start[1]) * diverge_point
                + self.offset_opt(offset, options, roughness_gain),
        ];

        let end_jitter = self.endpoint_jitter(offset, options, roughness_gain);
        let p3 = [end[0] + end_jitter[0], end[1] + end_jitter[1]];

        let mut points = vec![p0];
        points.extend(bezier_curve(p0, cp1, cp2, p3, 10));
        points
    }

    fn endpoint_jitter(&mut self, offset: f32, options: &RoughOptions, roughness_gain: f32) -> [f32; 2] {
        if options.preserve_vertices {
            [0.0, 0.0]
        } else {
            [
                self.offset_opt(offset, options, roughness_gain),
                self.offset_opt(offset, options, roughness_gain),
            ]
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn ellipse_points(
        &mut self,
        increment: f32,
        center: [f32; 2],
        rx: f32,
        ry: f32,
        offset: f32,
        overlap: f32,
        options: &RoughOptions,
        step_count: u32,
    ) -> Vec<[f32; 2]> {
        let mut points = Vec::new();

        if options.roughness == 0.0 {
            let mut angle = -increment;
            while angle <= std::f32::consts::PI * 2.0 {
                points.push([center[0] + rx * angle.cos(), center[1] + ry * angle.sin()]);
                angle += increment;
            }
            return points;
        }

        let rad_offset = self.offset_opt(0.1, options, 1.0) - (std::f32::consts::PI / 2.0);

        let start_variation = 0.98 + self.random() * 0.04;
        points.push([
            self.offset_opt(offset * 0.3, options, 1.0)
                + center[0]
                + start_variation * rx * (rad_offset - increment).cos(),
            self.offset_opt(offset * 0.3, options, 1.0)
                + center[1]
                + start_variation * ry * (rad_offset - increment).sin(),
        ]);

        let end_angle = std::f32::consts::PI * 2.0 + rad_offset + overlap;
        let mut angle = rad_offset;
        let mut segment_idx = 0u32;

        while angle < end_angle {
            let progress = segment_idx as f32 / step_count as f32;

            // Low-frequency waves keep the radius drift looking deliberate
            // rather than purely noisy.
            let wave1 = (progress * std::f32::consts::PI * 3.0).sin() * 0.01;
            let wave2 = (progress * std::f32::consts::PI * 5.0).cos() * 0.005;
            let radius_modifier =
                (1.0 + wave1 + wave2 + self.offset_opt(0.02, options, 1.0)).clamp(0.95, 1.05);

            let point_rx = (rx * radius_modifier + self.offset_opt(rx * 0.01, options, 1.0))
                .clamp(rx * 0.92, rx * 1.08);
            let point_ry = (ry * radius_modifier + self.offset_opt(ry * 0.01, options, 1.0))
                .clamp(ry * 0.92, ry * 1.08);

            points.push([
                self.offset_opt(offset * 0.2, options, 1.0) + center[0] + point_rx * angle.cos(),
                self.offset_opt(offset * 0.2, options, 1.0) + center[1] + point_ry * angle.sin(),
            ]);

            angle += increment * (0.95 + self.random() * 0.1);
            segment_idx += 1;
        }

        let end_variation = 0.96 + self.random() * 0.08;
        let closing_angle = rad_offset + std::f32::consts::PI * 2.0 + overlap * 0.5;
        points.push([
            self.offset_opt(offset * 0.5, options, 1.0)
                + center[0]
                + end_variation * rx * closing_angle.cos(),
            self.offset_opt(offset * 0.5, options, 1.0)
                + center[1]
                + end_variation * ry * closing_angle.sin(),
        ]);

        let closure_variation = 0.95 + self.random() * 0.1;
        points.push([
            self.offset_opt(offset * 0.3, options, 1.0)
                + center[0]
                + closure_variation * rx * (rad_offset + overlap).cos(),
            self.offset_opt(offset * 0.3, options, 1.0)
                + center[1]
                + closure_variation * ry * (rad_offset + overlap).sin(),
        ]);

        points
    }
}

fn bezier_curve(p0: [f32; 2], p1: [f32; 2], p2: [f32; 2], p3: [f32; 2], segments: u32) -> Vec<[f32; 2]> {
    let mut points = Vec::with_capacity(segments as usize);
    for i in 1..=segments {
        let t = i as f32 / segments as f32;
        let u = 1.0 - t;
        let tt = t * t;
        let uu = u * u;
        let uuu = uu * u;
        let ttt = tt * t;

        points.push([
            uuu * p0[0] + 3.0 * uu * t * p1[0] + 3.0 * u * tt * p2[0] + ttt * p3[0],
            uuu * p0[1] + 3.0 * uu * t * p1[1] + 3.0 * u * tt * p2[1] + ttt * p3[1],
        ]);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_points(sketch: &Sketch) -> Vec<[f32; 2]> {
        sketch.strokes.iter().flatten().copied().collect()
    }

    #[test]
    fn line_sketch_double_strokes_by_default() {
        let mut generator = RoughGenerator::new(Some(7));
        let sketch = generator.line([0.0, 0.0], [100.0, 0.0], &RoughOptions::default());
        assert_eq!(sketch.stroke_count(), 2);
        assert!(sketch.has_segments());
    }

    #[test]
    fn single_point_strokes_have_no_segments() {
        let sketch = Sketch {
            strokes: vec![vec![[1.0, 1.0]], vec![]],
            stroke_width: 2.0,
        };
        assert_eq!(sketch.stroke_count(), 2);
        assert!(!sketch.has_segments());
    }

    #[test]
    fn rectangle_sketch_covers_four_sides() {
        let mut generator = RoughGenerator::new(Some(7));
        let sketch = generator.rectangle([10.0, 10.0], [40.0, 40.0], &RoughOptions::default());
        // 4 sides, double stroked.
        assert_eq!(sketch.stroke_count(), 8);
    }

    #[test]
    fn same_seed_reproduces_the_same_sketch() {
        let options = RoughOptions::default();
        let mut a = RoughGenerator::new(Some(99));
        let mut b = RoughGenerator::new(Some(99));
        let sketch_a = a.ellipse([50.0, 50.0], [30.0, 20.0], &options);
        let sketch_b = b.ellipse([50.0, 50.0], [30.0, 20.0], &options);
        assert_eq!(collect_points(&sketch_a), collect_points(&sketch_b));
    }

    #[test]
    fn degenerate_geometry_is_accepted() {
        let mut generator = RoughGenerator::new(Some(7));
        let options = RoughOptions::default();
        // Zero-size shapes occur at drag start and must not panic.
        generator.line([5.0, 5.0], [5.0, 5.0], &options);
        generator.rectangle([5.0, 5.0], [0.0, 0.0], &options);
        generator.circle([5.0, 5.0], 0.0, &options);
        generator.ellipse([5.0, 5.0], [0.0, 0.0], &options);
    }

    #[test]
    fn tessellation_produces_quads_per_segment() {
        let mut generator = RoughGenerator::new(Some(7));
        let sketch = generator.line([0.0, 0.0], [100.0, 100.0], &RoughOptions::default());

        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let mut offset = 0u32;
        sketch.tessellate([0.0, 0.0, 0.0, 1.0], &mut vertices, &mut indices, &mut offset);

        assert!(!vertices.is_empty());
        assert_eq!(vertices.len() % 4, 0);
        assert_eq!(indices.len() / 6, vertices.len() / 4);
        assert_eq!(offset as usize, vertices.len());
    }

    #[test]
    fn index_space_survives_hundreds_of_shapes_in_one_buffer() {
        let mut generator = RoughGenerator::new(Some(5));
        let options = RoughOptions::default();

        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let mut offset = 0u32;
        for i in 0..300 {
            let origin = [i as f32, i as f32];
            let sketch = generator.rectangle(origin, [40.0, 40.0], &options);
            sketch.tessellate([0.0, 0.0, 0.0, 1.0], &mut vertices, &mut indices, &mut offset);
        }

        // Well past the u16 index budget; every index must still land inside
        // the vertex buffer.
        assert!(vertices.len() > u16::MAX as usize);
        assert_eq!(offset as usize, vertices.len());
        let max_index = *indices.iter().max().unwrap();
        assert!((max_index as usize) < vertices.len());
    }
}
