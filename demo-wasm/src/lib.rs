use gasbag::{
    InputSample, LogStepObserver, Simulation, SimulationConfig, Vec2, Viewport,
};
use wasm_bindgen::prelude::*;

// ---- Balloon Demo ----

/// Browser front end: the page feeds pointer state each frame and draws the
/// returned screen-space buffers on a square canvas.
#[wasm_bindgen]
pub struct BalloonDemo {
    sim: Simulation<f32>,
    viewport: Viewport<f32>,
    pointer: Vec2<f32>,
    pressed: bool,
}

#[wasm_bindgen]
impl BalloonDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(window_length: f32, fps: u32, speed: f32) -> Result<BalloonDemo, JsValue> {
        let config = SimulationConfig::new()
            .with_window_length(window_length)
            .with_frames_per_second(fps)
            .with_speed(speed);
        let viewport = config.viewport().map_err(to_js)?;
        let sim = Simulation::new(config).map_err(to_js)?;
        Ok(BalloonDemo {
            sim,
            viewport,
            pointer: Vec2::zero(),
            pressed: false,
        })
    }

    pub fn set_pointer(&mut self, x: f32, y: f32, pressed: bool) {
        self.pointer = Vec2::new(x, y);
        self.pressed = pressed;
    }

    /// Run one frame. Returns the index of a balloon closed this frame, or -1.
    pub fn update(&mut self) -> Result<i32, JsValue> {
        let input = InputSample { authoring: self.pressed, pointer: self.pointer };
        let closed = self
            .sim
            .frame(input, &self.viewport, &mut LogStepObserver)
            .map_err(to_js)?;
        Ok(closed.map_or(-1, |idx| idx as i32))
    }

    /// Drop a ready-made balloon centered on a display-space point.
    pub fn spawn_balloon(&mut self, x: f32, y: f32, radius: f32, segments: usize) -> Result<usize, JsValue> {
        let center = self.viewport.to_simulation_space(Vec2::new(x, y));
        self.sim.spawn_ring(center, radius, segments).map_err(to_js)
    }

    /// Returns flat [x0, y0, r0, x1, y1, r1, ...] in display space.
    pub fn mass_points(&self) -> Vec<f32> {
        let points = self.sim.mass_points();
        let mut out = Vec::with_capacity(points.len() * 3);
        for p in points {
            let s = self.viewport.to_screen_space(p.position);
            out.push(s.x);
            out.push(s.y);
            out.push(self.viewport.to_screen_length(p.collide_radius));
        }
        out
    }

    /// Returns flat [ax, ay, bx, by, ...] spring endpoints in display space.
    pub fn spring_segments(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.sim.springs().len() * 4);
        for (a, b) in self.sim.spring_segments() {
            let a = self.viewport.to_screen_space(a);
            let b = self.viewport.to_screen_space(b);
            out.extend_from_slice(&[a.x, a.y, b.x, b.y]);
        }
        out
    }

    /// Returns flat [x0, y0, x1, y1, ...] for the chain being drawn, in
    /// spawn order; empty when idle.
    pub fn chain_preview(&self) -> Vec<f32> {
        let members = self.sim.authoring().members();
        let mut out = Vec::with_capacity(members.len() * 2);
        for &i in members {
            let s = self.viewport.to_screen_space(self.sim.mass_point(i).position);
            out.push(s.x);
            out.push(s.y);
        }
        out
    }

    pub fn mass_point_count(&self) -> usize {
        self.sim.mass_points().len()
    }

    pub fn balloon_count(&self) -> usize {
        self.sim.models().len()
    }

    pub fn is_authoring(&self) -> bool {
        self.sim.authoring().is_authoring()
    }
}

fn to_js(err: gasbag::PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
