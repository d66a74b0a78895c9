//! Slingshot basketball: a small per-frame physics simulation.
//!
//! All values are in canvas units and advance once per animation frame.
//! Nothing here touches the DOM, so the whole game can be stepped in tests.

use std::ops::{Add, Mul, Sub};

pub const CANVAS_WIDTH: f64 = 600.0;
pub const CANVAS_HEIGHT: f64 = 400.0;
pub const SLINGSHOT_X: f64 = 100.0;
pub const SLINGSHOT_Y: f64 = 300.0;
pub const BALL_RADIUS: f64 = 14.0;
pub const HOOP_X: f64 = 480.0;
pub const HOOP_Y: f64 = 140.0;
pub const HOOP_WIDTH: f64 = 55.0;
pub const RIM_RADIUS: f64 = 6.0;
pub const GROUND_Y: f64 = 355.0;
pub const GRAVITY: f64 = 0.35;
pub const POWER_MULTIPLIER: f64 = 0.18;
pub const BOUNCE_DAMPING: f64 = 0.65;
pub const FRICTION: f64 = 0.98;
pub const NET_ROWS: usize = 6;
pub const NET_COLS: usize = 8;

const NET_DEPTH: f64 = 45.0;
const NET_BOTTOM_WIDTH: f64 = 25.0;
const NET_STIFFNESS: f64 = 0.15;
const NET_DAMPING: f64 = 0.85;
const GRAB_RADIUS: f64 = 60.0;
const MAX_PULL: f64 = 100.0;
const MIN_PULL: f64 = 15.0;
const SPAWN_LIFT: f64 = 20.0;
const TRAJECTORY_STEPS: usize = 60;
const OUT_OF_BOUNDS_MARGIN: f64 = 50.0;

// backboard face, relative to the hoop centre and rim line
pub const BACKBOARD_LEFT: f64 = HOOP_X + 20.0;
pub const BACKBOARD_RIGHT: f64 = HOOP_X + 35.0;
pub const BACKBOARD_TOP: f64 = HOOP_Y - 55.0;
pub const BACKBOARD_BOTTOM: f64 = HOOP_Y + 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).length()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

pub const SLINGSHOT: Vec2 = Vec2::new(SLINGSHOT_X, SLINGSHOT_Y);
pub const BALL_SPAWN: Vec2 = Vec2::new(SLINGSHOT_X, SLINGSHOT_Y - SPAWN_LIFT);
pub const LEFT_RIM: Vec2 = Vec2::new(HOOP_X - HOOP_WIDTH / 2.0, HOOP_Y);
pub const RIGHT_RIM: Vec2 = Vec2::new(HOOP_X + HOOP_WIDTH / 2.0, HOOP_Y);

/// Simple xorshift64 generator, enough to jitter the net.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f64,
    pub rotation: f64,
    pub spin: f64,
}

impl Ball {
    fn launched(pull: Vec2) -> Self {
        Self {
            pos: BALL_SPAWN,
            vel: pull * POWER_MULTIPLIER,
            radius: BALL_RADIUS,
            rotation: 0.0,
            spin: pull.x * 0.02,
        }
    }

    fn hits_backboard(&self) -> bool {
        self.pos.x + self.radius > BACKBOARD_LEFT
            && self.pos.x - self.radius < BACKBOARD_RIGHT
            && self.pos.y > BACKBOARD_TOP
            && self.pos.y < BACKBOARD_BOTTOM
            && self.vel.x > 0.0
    }

    fn touching_rim(&self) -> Option<Vec2> {
        [LEFT_RIM, RIGHT_RIM]
            .into_iter()
            .find(|rim| self.pos.distance(*rim) < self.radius + RIM_RADIUS)
    }

    fn is_resting(&self) -> bool {
        self.vel.x.abs() < 0.1
            && self.vel.y.abs() < 0.5
            && self.pos.y >= GROUND_Y - self.radius - 2.0
    }

    fn is_out_of_bounds(&self) -> bool {
        self.pos.x < -OUT_OF_BOUNDS_MARGIN || self.pos.x > CANVAS_WIDTH + OUT_OF_BOUNDS_MARGIN
    }
}

/// Whether a ball moving from `prev_y` to `pos` dropped through the hoop.
pub fn passes_through_hoop(pos: Vec2, prev_y: f64) -> bool {
    let left = HOOP_X - HOOP_WIDTH / 2.0 + RIM_RADIUS + 5.0;
    let right = HOOP_X + HOOP_WIDTH / 2.0 - RIM_RADIUS - 5.0;
    let line = HOOP_Y + 5.0;
    pos.x > left && pos.x < right && prev_y < line && pos.y >= line && pos.y < HOOP_Y + 40.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetPoint {
    pub pos: Vec2,
    pub rest: Vec2,
    pub vel: Vec2,
}

/// Spring mesh hanging under the rim, `NET_ROWS + 1` rows of `NET_COLS + 1` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Net {
    rows: Vec<Vec<NetPoint>>,
}

impl Default for Net {
    fn default() -> Self {
        Self::new()
    }
}

impl Net {
    pub fn new() -> Self {
        let rows = (0..=NET_ROWS)
            .map(|row| {
                let row_progress = row as f64 / NET_ROWS as f64;
                let width = HOOP_WIDTH - (HOOP_WIDTH - NET_BOTTOM_WIDTH) * row_progress;
                let y = HOOP_Y + NET_DEPTH * row_progress;
                (0..=NET_COLS)
                    .map(|col| {
                        let col_progress = col as f64 / NET_COLS as f64;
                        let rest = Vec2::new(HOOP_X - width / 2.0 + width * col_progress, y);
                        NetPoint {
                            pos: rest,
                            rest,
                            vel: Vec2::default(),
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<NetPoint>] {
        &self.rows
    }

    pub fn points(&self) -> impl Iterator<Item = &NetPoint> {
        self.rows.iter().flatten()
    }

    /// Kicks the points nearest to `ball_x` downward with a little sideways jitter.
    pub fn swish(&mut self, ball_x: f64, rng: &mut Rng) {
        for point in self.rows.iter_mut().flatten() {
            let force = (1.0 - (ball_x - point.pos.x).abs() / 50.0).max(0.0) * 8.0;
            point.vel.x += (rng.next_f64() - 0.5) * force;
            point.vel.y += force * 0.5;
        }
    }

    pub fn relax(&mut self) {
        for point in self.rows.iter_mut().flatten() {
            point.vel = point.vel + (point.rest - point.pos) * NET_STIFFNESS;
            point.pos = point.pos + point.vel;
            point.vel = point.vel * NET_DAMPING;
        }
    }

    /// Largest distance of any point from its rest position.
    pub fn displacement(&self) -> f64 {
        self.points()
            .map(|p| p.pos.distance(p.rest))
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Aiming,
    Dragging(Vec2),
    Flying,
    /// The ball came to rest or left the court and is waiting for `reset_ball`.
    Settled,
}

/// What happened during one call to [`Game::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub goal: bool,
    pub settled: bool,
}

#[derive(Debug, Clone)]
pub struct Game {
    phase: Phase,
    ball: Option<Ball>,
    net: Net,
    score: u32,
    scored_this_shot: bool,
    celebrating: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            phase: Phase::Aiming,
            ball: None,
            net: Net::new(),
            score: 0,
            scored_this_shot: false,
            celebrating: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    pub fn net(&self) -> &Net {
        &self.net
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn is_flying(&self) -> bool {
        self.phase == Phase::Flying
    }

    /// Where to draw the loaded ball while it sits in the sling.
    pub fn loaded_ball(&self) -> Option<Vec2> {
        match self.phase {
            Phase::Aiming if self.ball.is_none() => Some(BALL_SPAWN),
            Phase::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn drag_point(&self) -> Option<Vec2> {
        match self.phase {
            Phase::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn begin_drag(&mut self, pos: Vec2) -> bool {
        if self.phase != Phase::Aiming || self.ball.is_some() {
            return false;
        }
        if pos.distance(SLINGSHOT) < GRAB_RADIUS {
            self.phase = Phase::Dragging(pos);
            true
        } else {
            false
        }
    }

    pub fn drag_to(&mut self, pos: Vec2) {
        if let Phase::Dragging(_) = self.phase {
            let offset = pos - SLINGSHOT;
            let dist = offset.length();
            let clamped = if dist > MAX_PULL {
                SLINGSHOT + offset * (MAX_PULL / dist)
            } else {
                pos
            };
            self.phase = Phase::Dragging(clamped);
        }
    }

    /// Lets go of the sling. Returns `true` if a shot was fired.
    pub fn release(&mut self) -> bool {
        let drag = match self.phase {
            Phase::Dragging(drag) => drag,
            _ => return false,
        };
        let pull = SLINGSHOT - drag;
        if pull.length() > MIN_PULL {
            self.ball = Some(Ball::launched(pull));
            self.phase = Phase::Flying;
            self.scored_this_shot = false;
            true
        } else {
            self.phase = Phase::Aiming;
            false
        }
    }

    /// Ballistic preview of the current pull, ignoring collisions.
    pub fn trajectory(&self) -> Vec<Vec2> {
        let drag = match self.phase {
            Phase::Dragging(drag) => drag,
            _ => return Vec::new(),
        };
        let mut vel = (SLINGSHOT - drag) * POWER_MULTIPLIER;
        let mut pos = BALL_SPAWN;
        let mut points = Vec::with_capacity(TRAJECTORY_STEPS);
        for _ in 0..TRAJECTORY_STEPS {
            points.push(pos);
            pos.x += vel.x;
            vel.y += GRAVITY;
            pos.y += vel.y;
            if pos.y > GROUND_Y || pos.x > CANVAS_WIDTH || pos.x < 0.0 {
                break;
            }
        }
        points
    }

    /// Advances the simulation by one frame.
    pub fn step(&mut self, rng: &mut Rng) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if self.phase == Phase::Flying {
            if let Some(mut ball) = self.ball.take() {
                let prev_y = ball.pos.y;
                integrate(&mut ball);

                if !self.scored_this_shot && passes_through_hoop(ball.pos, prev_y) {
                    self.scored_this_shot = true;
                    self.score += 1;
                    self.celebrating = true;
                    self.net.swish(ball.pos.x, rng);
                    outcome.goal = true;
                }

                if ball.is_resting() || ball.is_out_of_bounds() {
                    ball.vel = Vec2::default();
                    ball.spin = 0.0;
                    self.phase = Phase::Settled;
                    outcome.settled = true;
                }
                self.ball = Some(ball);
            }
        }
        self.net.relax();
        outcome
    }

    pub fn reset_ball(&mut self) {
        self.ball = None;
        self.phase = Phase::Aiming;
        self.scored_this_shot = false;
    }

    /// Clears a ball that has come to rest. A ball fired since is left alone.
    pub fn clear_settled(&mut self) -> bool {
        if self.phase != Phase::Settled {
            return false;
        }
        self.reset_ball();
        true
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
        self.celebrating = false;
    }

    pub fn clear_celebration(&mut self) {
        self.celebrating = false;
    }

    #[cfg(test)]
    fn with_ball(ball: Ball) -> Self {
        Self {
            phase: Phase::Flying,
            ball: Some(ball),
            ..Self::new()
        }
    }
}

/// Moves the ball one frame and resolves collisions in order:
/// backboard, rim, ground, walls.
fn integrate(ball: &mut Ball) {
    ball.vel.y += GRAVITY;
    ball.pos = ball.pos + ball.vel;
    ball.rotation += ball.spin;

    if ball.hits_backboard() {
        ball.vel.x = -ball.vel.x.abs() * BOUNCE_DAMPING;
        ball.pos.x = BACKBOARD_LEFT - ball.radius - 1.0;
        ball.spin = -ball.spin * 0.7;
    }

    if let Some(rim) = ball.touching_rim() {
        let angle = (ball.pos.y - rim.y).atan2(ball.pos.x - rim.x);
        let normal = Vec2::new(angle.cos(), angle.sin());
        let speed = ball.vel.length();
        ball.vel = normal * (speed * BOUNCE_DAMPING);
        ball.pos = rim + normal * (ball.radius + RIM_RADIUS + 1.0);
        ball.spin = -ball.spin * 0.8;
    }

    if ball.pos.y + ball.radius > GROUND_Y {
        ball.pos.y = GROUND_Y - ball.radius;
        ball.vel.y = -ball.vel.y * BOUNCE_DAMPING;
        ball.vel.x *= FRICTION;
        ball.spin = ball.vel.x * 0.1;
        if ball.vel.y.abs() < 1.0 {
            ball.vel.y = 0.0;
        }
    }

    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = -ball.vel.x * BOUNCE_DAMPING;
    }
    if ball.pos.x + ball.radius > CANVAS_WIDTH {
        ball.pos.x = CANVAS_WIDTH - ball.radius;
        ball.vel.x = -ball.vel.x * BOUNCE_DAMPING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            radius: BALL_RADIUS,
            rotation: 0.0,
            spin: 0.0,
        }
    }

    fn run_until_settled(game: &mut Game, rng: &mut Rng) -> (u32, usize) {
        let mut goals = 0;
        for frame in 0..5_000 {
            let outcome = game.step(rng);
            if outcome.goal {
                goals += 1;
            }
            if let Some(ball) = game.ball() {
                assert!(
                    ball.pos.y + ball.radius <= GROUND_Y + 1e-9,
                    "ball sank into the ground on frame {frame}"
                );
            }
            if outcome.settled {
                return (goals, frame);
            }
        }
        panic!("ball never settled");
    }

    #[test]
    fn test_ground_is_never_penetrated() {
        let mut game = Game::with_ball(ball_at(Vec2::new(150.0, 300.0), Vec2::new(1.0, 5.0)));
        let mut rng = Rng::new(7);
        let (goals, _) = run_until_settled(&mut game, &mut rng);
        assert_eq!(goals, 0);
        let ball = game.ball().expect("settled ball stays on court");
        assert_eq!(ball.pos.y, GROUND_Y - BALL_RADIUS);
        assert_eq!(game.phase(), Phase::Settled);
    }

    #[test]
    fn test_rim_bounce_reverses_normal_velocity() {
        // falls straight onto the left rim end, slightly outside of it
        let start = Vec2::new(LEFT_RIM.x - 5.0, LEFT_RIM.y - 22.0);
        let vel = Vec2::new(0.0, 4.0);
        let mut game = Game::with_ball(ball_at(start, vel));
        let mut rng = Rng::new(1);

        let landing = start + Vec2::new(vel.x, vel.y + GRAVITY);
        let normal_before = landing - LEFT_RIM;
        let normal_before = normal_before * (1.0 / normal_before.length());
        assert!((vel + Vec2::new(0.0, GRAVITY)).dot(normal_before) < 0.0);

        game.step(&mut rng);
        let ball = game.ball().expect("ball in flight");
        let normal = ball.pos - LEFT_RIM;
        let gap = normal.length();
        assert!((gap - (BALL_RADIUS + RIM_RADIUS + 1.0)).abs() < 1e-9);
        let normal = normal * (1.0 / gap);
        assert!(ball.vel.dot(normal) > 0.0);
        // bounced away to the left of the rim
        assert!(ball.vel.x < 0.0);
    }

    #[test]
    fn test_backboard_sends_ball_back_left() {
        let mut game = Game::with_ball(ball_at(
            Vec2::new(BACKBOARD_LEFT - BALL_RADIUS - 2.0, HOOP_Y - 20.0),
            Vec2::new(6.0, 0.0),
        ));
        game.step(&mut Rng::new(3));
        let ball = game.ball().expect("ball in flight");
        assert_eq!(ball.pos.x, BACKBOARD_LEFT - BALL_RADIUS - 1.0);
        assert!((ball.vel.x + 6.0 * BOUNCE_DAMPING).abs() < 1e-9);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_drop_through_hoop_scores_once() {
        let mut game = Game::with_ball(ball_at(Vec2::new(HOOP_X, HOOP_Y - 20.0), Vec2::default()));
        let mut rng = Rng::new(42);
        let (goals, _) = run_until_settled(&mut game, &mut rng);
        assert_eq!(goals, 1);
        assert_eq!(game.score(), 1);
        assert!(game.is_celebrating());

        game.clear_celebration();
        game.reset_ball();
        assert!(!game.is_celebrating());
        assert_eq!(game.score(), 1);
        assert!(game.ball().is_none());
    }

    #[test]
    fn test_goal_requires_downward_crossing() {
        let line = HOOP_Y + 5.0;
        assert!(passes_through_hoop(Vec2::new(HOOP_X, line), line - 1.0));
        // rising through the hoop does not count
        assert!(!passes_through_hoop(Vec2::new(HOOP_X, line - 1.0), line + 3.0));
        // outside the band
        assert!(!passes_through_hoop(Vec2::new(HOOP_X - 20.0, line + 1.0), line - 1.0));
        // fell too far in one frame
        assert!(!passes_through_hoop(Vec2::new(HOOP_X, HOOP_Y + 40.0), line - 1.0));
    }

    #[test]
    fn test_drag_is_clamped_and_release_launches() {
        let mut game = Game::new();
        assert!(!game.begin_drag(Vec2::new(300.0, 300.0)));
        assert!(game.begin_drag(Vec2::new(SLINGSHOT_X + 10.0, SLINGSHOT_Y)));

        game.drag_to(Vec2::new(SLINGSHOT_X - 300.0, SLINGSHOT_Y));
        let drag = game.drag_point().expect("dragging");
        assert!((drag.distance(SLINGSHOT) - MAX_PULL).abs() < 1e-9);
        assert!(!game.trajectory().is_empty());

        assert!(game.release());
        assert!(game.is_flying());
        let ball = game.ball().expect("launched");
        assert_eq!(ball.pos, BALL_SPAWN);
        assert!((ball.vel.x - MAX_PULL * POWER_MULTIPLIER).abs() < 1e-9);
        assert_eq!(ball.vel.y, 0.0);
        assert!((ball.spin - MAX_PULL * 0.02).abs() < 1e-9);

        // no new drag while the ball is in the air
        assert!(!game.begin_drag(SLINGSHOT));
    }

    #[test]
    fn test_clear_settled_spares_a_new_shot() {
        let mut rng = Rng::new(11);
        let mut game = Game::with_ball(ball_at(Vec2::new(150.0, 300.0), Vec2::new(1.0, 5.0)));
        run_until_settled(&mut game, &mut rng);
        assert_eq!(game.phase(), Phase::Settled);

        // manual reset and a fresh shot before the settle delay runs out
        game.reset_ball();
        assert!(game.begin_drag(SLINGSHOT));
        game.drag_to(SLINGSHOT + Vec2::new(-60.0, 40.0));
        assert!(game.release());
        game.step(&mut rng);

        assert!(!game.clear_settled());
        assert!(game.is_flying());
        assert!(game.ball().is_some());

        run_until_settled(&mut game, &mut rng);
        assert!(game.clear_settled());
        assert_eq!(game.phase(), Phase::Aiming);
        assert!(game.ball().is_none());
    }

    #[test]
    fn test_short_pull_does_not_fire() {
        let mut game = Game::new();
        assert!(game.begin_drag(SLINGSHOT));
        game.drag_to(SLINGSHOT + Vec2::new(5.0, 5.0));
        assert!(!game.release());
        assert_eq!(game.phase(), Phase::Aiming);
        assert!(game.ball().is_none());
    }

    #[test]
    fn test_trajectory_stops_below_ground() {
        let mut game = Game::new();
        game.begin_drag(SLINGSHOT);
        game.drag_to(SLINGSHOT + Vec2::new(-20.0, -60.0));
        let points = game.trajectory();
        assert_eq!(points[0], BALL_SPAWN);
        assert!(points.len() < TRAJECTORY_STEPS);
        assert!(points.iter().all(|p| p.y <= GROUND_Y));
    }

    #[test]
    fn test_side_wall_keeps_ball_on_court() {
        let mut game = Game::with_ball(ball_at(Vec2::new(-40.0, 100.0), Vec2::new(-20.0, 0.0)));
        let outcome = game.step(&mut Rng::new(9));
        assert!(!outcome.settled);
        assert_eq!(game.ball().map(|b| b.pos.x), Some(BALL_RADIUS));
    }

    #[test]
    fn test_net_swish_and_relax() {
        let mut net = Net::new();
        assert_eq!(net.rows().len(), NET_ROWS + 1);
        assert!(net.rows().iter().all(|row| row.len() == NET_COLS + 1));
        assert_eq!(net.displacement(), 0.0);

        net.swish(HOOP_X, &mut Rng::new(5));
        net.relax();
        assert!(net.displacement() > 0.5);

        for _ in 0..300 {
            net.relax();
        }
        assert!(net.displacement() < 1e-3);
    }

    #[test]
    fn test_net_bottom_is_narrower() {
        let net = Net::new();
        let top = &net.rows()[0];
        let bottom = &net.rows()[NET_ROWS];
        let width = |row: &[NetPoint]| row[NET_COLS].rest.x - row[0].rest.x;
        assert!((width(top) - HOOP_WIDTH).abs() < 1e-9);
        assert!((width(bottom) - NET_BOTTOM_WIDTH).abs() < 1e-9);
        assert!((bottom[0].rest.y - (HOOP_Y + NET_DEPTH)).abs() < 1e-9);
    }

    #[test]
    fn test_rng_is_in_unit_range() {
        let mut rng = Rng::new(0);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
