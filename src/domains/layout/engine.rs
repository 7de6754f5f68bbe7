use super::settings::LayoutSettings;
use crate::domains::strokes::{glyph, glyph_width, interpolate, GLYPH_HEIGHT};
use crate::domains::workspace::{FieldView, Path, Point2, Waypoint, WritingArea};
use tracing::{debug, trace};

/// Lay `text` out inside `writing_area` with the default settings.
pub fn build_path(
    text: &str,
    writing_area: WritingArea,
    line_spacing: f64,
    obstacles: Option<FieldView<'_>>,
) -> Path {
    TextLayout::default().build_path(text, writing_area, line_spacing, obstacles)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Ready,
    PageFull,
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    pub settings: LayoutSettings,
}

impl TextLayout {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    pub fn line_height(&self) -> f64 {
        GLYPH_HEIGHT * self.settings.scale
    }

    pub fn glyph_advance(&self, ch: char) -> f64 {
        glyph_width(ch) * self.settings.scale
    }

    /// Rendered width of a word, inter-glyph spacing included.
    pub fn word_width(&self, word: &str) -> f64 {
        word.chars()
            .map(|ch| self.glyph_advance(ch) + self.settings.letter_spacing)
            .sum()
    }

    /// Convert text into waypoints. Stops silently once the page is full.
    pub fn build_path(
        &self,
        text: &str,
        writing_area: WritingArea,
        line_spacing: f64,
        obstacles: Option<FieldView<'_>>,
    ) -> Path {
        let text = text.to_uppercase();
        let mut writer = Writer::new(self, writing_area, line_spacing, obstacles);

        'words: for word in text.split(' ') {
            if word.is_empty() {
                writer.word_gap();
                continue;
            }

            let width = self.word_width(word);
            if width <= writer.span() {
                match writer.place_word(width) {
                    Placement::Ready => {}
                    Placement::PageFull => break 'words,
                    Placement::Skip => {
                        debug!(word, "no obstacle-free spot for word, skipping");
                        writer.word_gap();
                        continue;
                    }
                }
            } else {
                trace!(word, width, "word wider than a line, wrapping per glyph");
            }

            for ch in word.chars() {
                let advance = self.glyph_advance(ch);
                if writer.place_glyph(advance) == Placement::PageFull {
                    break 'words;
                }
                writer.emit_glyph(ch);
                writer.x += advance + self.settings.letter_spacing;
            }
            writer.word_gap();
        }

        Path::new(writer.out)
    }
}

struct Writer<'a> {
    layout: &'a TextLayout,
    obstacles: Option<FieldView<'a>>,
    start_x: f64,
    right: f64,
    bottom: f64,
    line_spacing: f64,
    line_height: f64,
    x: f64,
    y: f64,
    out: Vec<Waypoint>,
}

impl<'a> Writer<'a> {
    fn new(
        layout: &'a TextLayout,
        area: WritingArea,
        line_spacing: f64,
        obstacles: Option<FieldView<'a>>,
    ) -> Self {
        let inset = layout.settings.margin_inset;
        let start_x = area.left + inset;
        let start_y = area.top + inset;
        Self {
            layout,
            obstacles,
            start_x,
            right: area.right - inset,
            bottom: area.bottom - inset,
            line_spacing,
            line_height: layout.line_height(),
            x: start_x,
            y: start_y,
            out: Vec::new(),
        }
    }

    fn span(&self) -> f64 {
        self.right - self.start_x
    }

    fn new_line(&mut self) {
        self.x = self.start_x;
        self.y += self.line_spacing;
    }

    fn wrap_if_needed(&mut self, width: f64) {
        if self.x + width > self.right && self.x > self.start_x {
            self.new_line();
        }
    }

    fn page_full(&self) -> bool {
        self.y + self.line_height > self.bottom
    }

    fn place_word(&mut self, width: f64) -> Placement {
        let layout = self.layout;
        let settings = &layout.settings;
        let mut attempts = 0;
        loop {
            self.wrap_if_needed(width);
            if self.page_full() {
                return Placement::PageFull;
            }
            if self.box_clear(width) {
                return Placement::Ready;
            }
            attempts += 1;
            if attempts >= settings.word_attempts {
                return Placement::Skip;
            }
            self.x += settings.word_shift;
        }
    }

    fn place_glyph(&mut self, width: f64) -> Placement {
        let layout = self.layout;
        let settings = &layout.settings;
        let mut nudges = 0;
        loop {
            self.wrap_if_needed(width);
            if self.page_full() {
                return Placement::PageFull;
            }
            if nudges >= settings.glyph_attempts || self.box_clear(width) {
                return Placement::Ready;
            }
            nudges += 1;
            self.x += settings.glyph_nudge;
        }
    }

    fn word_gap(&mut self) {
        let gap = self.layout.settings.word_gap;
        if self.x + gap > self.right {
            self.new_line();
        } else {
            self.x += gap;
        }
    }

    /// Probe the `width x line_height` box at the cursor: corners, center, and
    /// evenly spaced points along the top, middle and bottom rows.
    fn box_clear(&self, width: f64) -> bool {
        let Some(view) = self.obstacles else {
            return true;
        };
        let layout = self.layout;
        let settings = &layout.settings;
        let (x0, y0, h) = (self.x, self.y, self.line_height);
        let columns = ((width / settings.probe_spacing.max(1.0)).ceil() as usize).max(1);
        let rows = [y0, y0 + h / 2.0, y0 + h];

        let mut probes = vec![Point2::new(x0 + width / 2.0, y0 + h / 2.0)];
        for i in 0..=columns {
            let px = x0 + width * i as f64 / columns as f64;
            probes.extend(rows.iter().map(|&py| Point2::new(px, py)));
        }
        !probes
            .iter()
            .any(|p| view.collides(p.x, p.y, settings.clearance))
    }

    fn emit_glyph(&mut self, ch: char) {
        let Some(glyph) = glyph(ch) else {
            return;
        };
        let layout = self.layout;
        let settings = &layout.settings;
        let (ox, oy, scale) = (self.x, self.y, settings.scale);
        let to_world = |x: f64, y: f64| Point2::new(ox + x * scale, oy + y * scale);

        let Some((head, rest)) = glyph.points.split_first() else {
            return;
        };
        let mut prev = to_world(head.x, head.y);
        self.out.push(Waypoint::new(prev.x, prev.y, false));

        for point in rest {
            let next = to_world(point.x, point.y);
            for wp in interpolate(prev, next, point.pen, settings.interpolation_step) {
                self.out.push(suppress_ink(self.obstacles, wp));
            }
            prev = next;
        }
    }
}

/// Lift the pen on points that would ink over an obstacle, keeping them as moves.
pub(crate) fn suppress_ink(obstacles: Option<FieldView<'_>>, mut wp: Waypoint) -> Waypoint {
    if wp.pen && obstacles.is_some_and(|view| view.collides_point(wp.x, wp.y)) {
        wp.pen = false;
    }
    wp
}
