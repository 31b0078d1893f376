//! Software-rendered preview using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌──────────────────────────────┬──────────────────────────────┐
//! │  CAMERA                      │  VIEW                        │
//! │  key points, pinch markers,  │  wireframe cube posed by the │
//! │  movement trails             │  simulated host view         │
//! │                              │                              │
//! ├──────────────────────────────┴──────────────────────────────┤
//! │  gesture · zoom lock · last command · status                │
//! │  key legend                                                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! With the simulated source, the mouse over the camera panel *is* the hand;
//! see [`crate::source::sim`].

use std::sync::mpsc::Sender;

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use pinch_gesture::{FrameOutcome, HandKeyPoints, Landmark, ViewCommand, ZoomLock};
use view_sink::SimulatedView;

use crate::error::PinchViewError;
use crate::source::SimInput;

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W:    usize = 980;
pub const WIN_H:    usize = 520;
const PANEL_Y:      usize = 30;
const PANEL_H:      usize = 400;
const CAM_X:        usize = 10;
const CAM_W:        usize = 470;
const VIEW_X:       usize = 500;
const VIEW_W:       usize = 470;
const STATUS_Y:     usize = PANEL_Y + PANEL_H + 10;
const BG_COLOR:     u32   = 0xFF1A1A2E;
const PANEL_BG:     u32   = 0xFF16213E;
const TEXT_BG:      u32   = 0xFF0F3460;
const THUMB_COLOR:  u32   = 0xFFFFBBAA;
const INDEX_COLOR:  u32   = 0xFFAADDFF;
const PINCH_COLOR:  u32   = 0xFFFFD700;  // gold
const TRAIL_COLOR:  u32   = 0xFF66FF99;
const LOCK_COLOR:   u32   = 0xFFFF6666;
const CUBE_COLOR:   u32   = 0xFFEEEEEE;
/// Movement trails are drawn this many times longer than the real motion.
const TRAIL_GAIN:   f32   = 6.0;
/// Half the cube's edge, in view-panel pixels at scale 1.
const CUBE_RADIUS:  f32   = 90.0;
/// Panel pixels per unit of view translation.
const PAN_PIXELS:   f32   = 400.0;

/// What the run loop should do after polling the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Continue,
    /// R: drop all tracking state and start the session over.
    Reset,
    Quit,
}

// ════════════════════════════════════════════════════════════════════════════
// Canvas: the framebuffer and its drawing primitives
// ════════════════════════════════════════════════════════════════════════════

pub struct Canvas {
    pub buf: Vec<u32>,
    pub w:   usize,
    pub h:   usize,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        Canvas { buf: vec![BG_COLOR; w * h], w, h }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.w && y < self.h).then(|| self.buf[y * self.w + x])
    }

    pub fn fill(&mut self, color: u32) { self.buf.fill(color); }

    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(self.h) {
            for col in x..(x + w).min(self.w) {
                self.buf[row * self.w + col] = color;
            }
        }
    }

    pub fn draw_border(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        if w == 0 || h == 0 { return; }
        for col in x..(x + w).min(self.w) {
            self.set_pixel(col, y, color);
            self.set_pixel(col, y + h - 1, color);
        }
        for row in y..(y + h).min(self.h) {
            self.set_pixel(x, row, color);
            self.set_pixel(x + w - 1, row, color);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.w && y < self.h {
            self.buf[y * self.w + x] = color;
        }
    }

    fn plot(&mut self, x: isize, y: isize, color: u32) {
        if x >= 0 && y >= 0 {
            self.set_pixel(x as usize, y as usize, color);
        }
    }

    /// Bresenham line; off-canvas parts are clipped per pixel.
    pub fn draw_line(&mut self, (x0, y0): (isize, isize), (x1, y1): (isize, isize), color: u32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y, mut err) = (x0, y0, dx + dy);
        loop {
            self.plot(x, y, color);
            if x == x1 && y == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x += sx; }
            if e2 <= dx { err += dx; y += sy; }
        }
    }

    pub fn draw_diamond(&mut self, cx: isize, cy: isize, r: isize, color: u32) {
        for dy in 0..=r {
            let dx = r - dy;
            for &(px, py) in &[(cx + dx, cy + dy), (cx - dx, cy + dy), (cx + dx, cy - dy), (cx - dx, cy - dy)] {
                self.plot(px, py, color);
            }
        }
    }

    pub fn draw_dot(&mut self, cx: isize, cy: isize, r: isize, color: u32) {
        for y in -r..=r {
            for x in -r..=r {
                self.plot(cx + x, cy + y, color);
            }
        }
    }

    /// Minimal bitmap font: 3×5 glyphs, 1px gap.
    pub fn draw_label(&mut self, text: &str, x: usize, y: usize, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        self.set_pixel(cx + col, y + row, color);
                    }
                }
            }
            cx += 4;
            if cx + 4 > self.w { break; }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Coordinate mapping
// ════════════════════════════════════════════════════════════════════════════

/// Every pixel coordinate is clamped to `±PIXEL_LIMIT` before drawing.
const PIXEL_LIMIT: f32 = 4096.0;

/// Round to a pixel within `±PIXEL_LIMIT`; NaN lands off-canvas.
fn to_pixel(v: f32) -> isize {
    if v.is_nan() {
        return -(PIXEL_LIMIT as isize);
    }
    v.clamp(-PIXEL_LIMIT, PIXEL_LIMIT).round() as isize
}

/// Normalized camera coordinates to camera-panel pixels.
pub fn camera_to_panel(p: Landmark) -> (isize, isize) {
    (
        to_pixel(CAM_X as f32 + p.x * CAM_W as f32),
        to_pixel(PANEL_Y as f32 + p.y * PANEL_H as f32),
    )
}

/// Window pixels to normalized camera coordinates; `None` outside the panel.
pub fn panel_to_camera(mx: f32, my: f32) -> Option<(f32, f32)> {
    let x = (mx - CAM_X as f32) / CAM_W as f32;
    let y = (my - PANEL_Y as f32) / PANEL_H as f32;
    ((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y)).then_some((x, y))
}

const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 3), (3, 2), (2, 0),
    (4, 5), (5, 7), (7, 6), (6, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

/// Orthographic projection of a unit cube posed by `view` into view-panel
/// pixels.  Yaw turns about the vertical axis, then pitch about the
/// horizontal one.
pub fn project_cube(view: &SimulatedView) -> [(isize, isize); 8] {
    let (sy, cy) = view.yaw.sin_cos();
    let (sp, cp) = view.pitch.sin_cos();
    let centre_x = (VIEW_X + VIEW_W / 2) as f32 + view.translation[0] * PAN_PIXELS;
    let centre_y = (PANEL_Y + PANEL_H / 2) as f32 + view.translation[1] * PAN_PIXELS;
    let r = CUBE_RADIUS * view.scale;

    let mut out = [(0isize, 0isize); 8];
    for (i, slot) in out.iter_mut().enumerate() {
        let x = if i & 1 == 0 { -1.0 } else { 1.0 };
        let y = if i & 2 == 0 { -1.0 } else { 1.0 };
        let z = if i & 4 == 0 { -1.0 } else { 1.0 };

        let x1 = x * cy + z * sy;
        let z1 = -x * sy + z * cy;
        let y2 = y * cp - z1 * sp;

        *slot = (to_pixel(centre_x + x1 * r), to_pixel(centre_y - y2 * r));
    }
    out
}

/// Short text for the status bar.
pub fn describe_command(cmd: &ViewCommand) -> String {
    match cmd {
        ViewCommand::Rotate { x_deg, y_deg } => format!("rotate {:+.1} {:+.1} deg", x_deg, y_deg),
        ViewCommand::Pan { dx, dy }          => format!("pan {:+.4} {:+.4}", dx, dy),
        ViewCommand::Zoom { factor }         => format!("zoom x{:.4}", factor),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window: Window,
    canvas: Canvas,
    /// Present only when hands are simulated from the mouse.
    sim_tx: Option<Sender<SimInput>>,
}

impl Visualizer {
    pub fn new(sim_tx: Option<Sender<SimInput>>) -> Result<Self, PinchViewError> {
        let mut window = Window::new(
            "pinch_view - pinch to orbit, pan and zoom",
            WIN_W, WIN_H,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        ).map_err(|e| PinchViewError::Window(e.to_string()))?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(Visualizer {
            window,
            canvas: Canvas::new(WIN_W, WIN_H),
            sim_tx,
        })
    }

    /// Returns false when the window should close.
    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Poll the keyboard, and the mouse when hands are simulated.
    pub fn poll_input(&mut self) -> UiAction {
        if !self.window.is_open() { return UiAction::Quit; }

        if self.window.is_key_pressed(Key::Q, KeyRepeat::No)
            || self.window.is_key_pressed(Key::Escape, KeyRepeat::No)
        {
            return UiAction::Quit;
        }

        if let Some(tx) = &self.sim_tx {
            let input = self.window
                .get_mouse_pos(MouseMode::Discard)
                .and_then(|(mx, my)| panel_to_camera(mx, my))
                .map_or(SimInput::NoHands, |(x, y)| SimInput::Pointer {
                    x,
                    y,
                    primary:   self.window.get_mouse_down(MouseButton::Left),
                    secondary: self.window.get_mouse_down(MouseButton::Right),
                });
            if tx.send(input).is_err() { return UiAction::Quit; }
        }

        if self.window.is_key_pressed(Key::R, KeyRepeat::No) {
            return UiAction::Reset;
        }

        UiAction::Continue
    }

    /// Render one frame.
    pub fn render(
        &mut self,
        outcome:   Option<&FrameOutcome>,
        zoom_lock: ZoomLock,
        lock_len:  u32,
        view:      Option<&SimulatedView>,
        status:    &str,
    ) {
        let c = &mut self.canvas;
        c.fill(BG_COLOR);

        // ── Panels ────────────────────────────────────────────────────────
        c.fill_rect(CAM_X,  PANEL_Y, CAM_W,  PANEL_H, PANEL_BG);
        c.fill_rect(VIEW_X, PANEL_Y, VIEW_W, PANEL_H, PANEL_BG);
        c.draw_label("CAMERA", CAM_X,  PANEL_Y - 12, INDEX_COLOR);
        c.draw_label("VIEW",   VIEW_X, PANEL_Y - 12, INDEX_COLOR);

        if let Some(outcome) = outcome {
            draw_camera(c, outcome);
        }

        match view {
            Some(view) => {
                let pts = project_cube(view);
                for &(a, b) in &CUBE_EDGES {
                    c.draw_line(pts[a], pts[b], CUBE_COLOR);
                }
                c.draw_label(&view.summary(), VIEW_X + 6, PANEL_Y + PANEL_H - 10, 0xFF888888);
            }
            None => c.draw_label("commands go to the log", VIEW_X + 10, PANEL_Y + 10, 0xFF888888),
        }

        if zoom_lock.is_active() {
            c.draw_border(VIEW_X, PANEL_Y, VIEW_W, PANEL_H, LOCK_COLOR);
        }

        // ── Status bar ────────────────────────────────────────────────────
        c.fill_rect(0, STATUS_Y, WIN_W, WIN_H - STATUS_Y, TEXT_BG);

        let gesture = outcome.map_or("idle", |o| o.gesture.as_str());
        let last = outcome
            .and_then(|o| o.command.as_ref())
            .map_or_else(|| "-".to_string(), describe_command);
        let lock = if zoom_lock.is_active() {
            format!("zoom lock {}/{}", zoom_lock.frames(), lock_len)
        } else {
            "zoom lock off".to_string()
        };
        c.draw_label(&format!("gesture: {}   {}   last: {}", gesture, lock, last), 10, STATUS_Y + 10, 0xFFEEEEEE);
        c.draw_label(status, 10, STATUS_Y + 26, 0xFFEEEEEE);

        // ── Key legend ────────────────────────────────────────────────────
        let legend = if self.sim_tx.is_some() {
            "left drag=orbit  left+right drag: sideways=zoom, up/down=pan  R=reset  Q=quit"
        } else {
            "R=reset  Q=quit"
        };
        c.draw_label(legend, 10, WIN_H - 16, 0xFF888888);

        self.window.update_with_buffer(&self.canvas.buf, WIN_W, WIN_H).ok();
    }
}

fn draw_camera(c: &mut Canvas, outcome: &FrameOutcome) {
    for (_, kp) in &outcome.key_points {
        draw_key_points(c, kp);
    }

    for (id, pos) in outcome.pinches.iter() {
        let (x, y) = camera_to_panel(pos);
        c.draw_diamond(x, y, 6, PINCH_COLOR);
        c.draw_label(&id.to_string(), (x + 8).max(0) as usize, (y - 2).max(0) as usize, PINCH_COLOR);
    }

    for m in &outcome.movements {
        let from = camera_to_panel(m.to);
        let (dx, dy) = m.delta();
        let ahead = Landmark::new(m.to.x + dx * TRAIL_GAIN, m.to.y + dy * TRAIL_GAIN);
        c.draw_line(from, camera_to_panel(ahead), TRAIL_COLOR);
    }
}

fn draw_key_points(c: &mut Canvas, kp: &HandKeyPoints) {
    let tip = camera_to_panel(kp.thumb_tip);
    let pip = camera_to_panel(kp.thumb_pip);
    let idx = camera_to_panel(kp.index_tip);
    c.draw_line(pip, tip, THUMB_COLOR);
    c.draw_line(tip, idx, 0xFF555577);
    c.draw_dot(tip.0, tip.1, 2, THUMB_COLOR);
    c.draw_dot(pip.0, pip.1, 1, THUMB_COLOR);
    c.draw_dot(idx.0, idx.1, 2, INDEX_COLOR);
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' | 'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' | 'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' | 'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' | 'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'q' | 'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' | 'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _   => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::sim::synthetic_hand;
    use pinch_gesture::{DetectedHand, GestureSession, Movement, PinchState};

    #[test]
    fn panel_mapping_round_trips_inside() {
        let (x, y) = camera_to_panel(Landmark::new(0.25, 0.75));
        let (nx, ny) = panel_to_camera(x as f32, y as f32).unwrap();
        assert!((nx - 0.25).abs() < 0.01);
        assert!((ny - 0.75).abs() < 0.01);
    }

    #[test]
    fn outside_camera_panel_is_no_hands() {
        assert_eq!(panel_to_camera(0.0, 0.0), None);
        assert_eq!(panel_to_camera((VIEW_X + 10) as f32, 100.0), None);
    }

    #[test]
    fn identity_pose_projects_a_square() {
        let pts = project_cube(&SimulatedView::new());
        // front and back faces coincide when looking straight on
        assert_eq!(pts[0], pts[4]);
        assert_eq!(pts[3], pts[7]);
        let width = pts[1].0 - pts[0].0;
        assert_eq!(width, (2.0 * CUBE_RADIUS).round() as isize);
    }

    #[test]
    fn zoom_and_pan_move_the_cube() {
        let mut view = SimulatedView::new();
        view.scale = 0.5;
        view.translation[0] = 0.1;
        let pts = project_cube(&view);
        assert_eq!(pts[1].0 - pts[0].0, CUBE_RADIUS.round() as isize);
        let centre = (pts[0].0 + pts[1].0) / 2;
        assert_eq!(centre, (VIEW_X + VIEW_W / 2) as isize + 40);
    }

    #[test]
    fn yaw_quarter_turn_shows_the_side() {
        let mut view = SimulatedView::new();
        view.yaw = std::f32::consts::FRAC_PI_2;
        let pts = project_cube(&view);
        // x collapses: both x-ends of the front face land on the same column
        assert_eq!(pts[0].0, pts[1].0);
    }

    #[test]
    fn line_reaches_both_ends_and_clips() {
        let mut c = Canvas::new(20, 10);
        c.draw_line((2, 2), (15, 7), 0xFFFFFFFF);
        assert_eq!(c.pixel(2, 2), Some(0xFFFFFFFF));
        assert_eq!(c.pixel(15, 7), Some(0xFFFFFFFF));
        c.draw_line((-5, -5), (30, 30), 0xFF00FF00);
        assert_eq!(c.pixel(0, 0), Some(0xFF00FF00));
    }

    #[test]
    fn draws_outcome_without_panicking_at_edges() {
        let mut c = Canvas::new(WIN_W, WIN_H);
        let corner = Landmark::new(1.0, 1.0);
        let kp = HandKeyPoints::new(corner, Landmark::new(-0.2, 1.3), corner);
        let mut pinches = PinchState::new();
        pinches.insert(0, Landmark::new(0.0, 0.0));
        let outcome = FrameOutcome {
            key_points: vec![(0, kp)],
            pinches,
            movements: vec![Movement { hand: 0, from: corner, to: Landmark::new(0.99, 0.0) }],
            ..FrameOutcome::default()
        };
        draw_camera(&mut c, &outcome);
        let (x, y) = camera_to_panel(Landmark::new(0.0, 0.0));
        assert_eq!(c.pixel(x as usize, (y - 6) as usize), Some(PINCH_COLOR));
    }

    #[test]
    fn far_off_key_points_are_clamped() {
        let (x, y) = camera_to_panel(Landmark::new(1e30, f32::NEG_INFINITY));
        assert_eq!((x, y), (PIXEL_LIMIT as isize, -(PIXEL_LIMIT as isize)));
        let (x, _) = camera_to_panel(Landmark::new(f32::NAN, 0.5));
        assert!(x < 0);
    }

    #[test]
    fn renders_hands_far_outside_the_image() {
        let mut session = GestureSession::default();
        let mut c = Canvas::new(WIN_W, WIN_H);

        let stray = DetectedHand::new(vec![Landmark::new(1e30, 0.5); 21]);
        let outcome = session.process_frame_detailed(&[stray]);
        assert_eq!(outcome.key_points.len(), 1);
        draw_camera(&mut c, &outcome);

        session.process_frame_detailed(&[synthetic_hand(1e17, 0.5, true)]);
        let outcome = session.process_frame_detailed(&[synthetic_hand(1e18, 0.5, true)]);
        assert_eq!(outcome.pinches.len(), 1);
        assert_eq!(outcome.movements.len(), 1);
        draw_camera(&mut c, &outcome);
    }

    #[test]
    fn huge_zoom_still_projects() {
        let mut view = SimulatedView::new();
        view.scale = 1e30;
        view.translation[1] = f32::MAX;
        let pts = project_cube(&view);
        assert!(pts.iter().all(|&(x, y)| x.abs() <= PIXEL_LIMIT as isize && y.abs() <= PIXEL_LIMIT as isize));
        let mut c = Canvas::new(WIN_W, WIN_H);
        for &(a, b) in &CUBE_EDGES {
            c.draw_line(pts[a], pts[b], CUBE_COLOR);
        }
    }

    #[test]
    fn label_renders_known_glyph() {
        let mut c = Canvas::new(8, 8);
        c.fill(0);
        c.draw_label("1", 0, 0, 0xFFFFFFFF);
        // top row of '1' is 0b010
        assert_eq!(c.pixel(1, 0), Some(0xFFFFFFFF));
        assert_eq!(c.pixel(0, 0), Some(0));
    }

    #[test]
    fn describes_commands() {
        assert_eq!(describe_command(&ViewCommand::Zoom { factor: 1.5 }), "zoom x1.5000");
        assert!(describe_command(&ViewCommand::Rotate { x_deg: 3.0, y_deg: -1.0 }).starts_with("rotate +3.0 -1.0"));
    }
}
