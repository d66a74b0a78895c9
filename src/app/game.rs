use std::f64::consts::{PI, TAU};
use std::sync::{Arc, Mutex};

use leptos::{html, prelude::*};
use leptos_use::{use_raf_fn, use_timeout_fn, UseTimeoutFnReturn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

use super::homepage::SectionHeading;
use super::Theme;
use crate::game::{
    Game, Rng, Vec2, BACKBOARD_BOTTOM, BACKBOARD_LEFT, BACKBOARD_RIGHT, BACKBOARD_TOP,
    BALL_RADIUS, CANVAS_HEIGHT, CANVAS_WIDTH, GROUND_Y, LEFT_RIM, RIGHT_RIM, RIM_RADIUS,
    SLINGSHOT_X, SLINGSHOT_Y,
};

const CELEBRATION_MS: f64 = 1500.0;
const RESET_DELAY_MS: f64 = 800.0;
const FORK_SPREAD: f64 = 15.0;
const FORK_HEIGHT: f64 = 25.0;

struct Court {
    game: Game,
    rng: Rng,
}

#[component]
pub fn GameSection() -> impl IntoView {
    view! {
        <section id="game" class="py-16 px-6 w-full">
            <div class="max-w-4xl mx-auto">
                <SectionHeading
                    eyebrow="Take a Break"
                    title="Basketball Slingshot"
                    subtitle="Pull the ball back from the slingshot, aim, and let go. See how many you can sink."
                />
                <SlingshotGame />
            </div>
        </section>
    }
}

#[component]
fn SlingshotGame() -> impl IntoView {
    let seed = chrono::Utc::now().timestamp_millis() as u64;
    let court = StoredValue::new(Arc::new(Mutex::new(Court {
        game: Game::new(),
        rng: Rng::new(seed),
    })));
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let theme = use_context::<ReadSignal<Theme>>();

    let (score, set_score) = signal(0u32);
    let (celebrating, set_celebrating) = signal(false);

    let UseTimeoutFnReturn {
        start: start_celebration,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            court.with_value(|court| {
                court
                    .lock()
                    .expect("should be able to lock court")
                    .game
                    .clear_celebration()
            });
            set_celebrating.set(false);
        },
        CELEBRATION_MS,
    );

    let UseTimeoutFnReturn {
        start: start_reset, ..
    } = use_timeout_fn(
        move |_: ()| {
            court.with_value(|court| {
                court
                    .lock()
                    .expect("should be able to lock court")
                    .game
                    .clear_settled()
            });
        },
        RESET_DELAY_MS,
    );

    use_raf_fn(move |_| {
        let dark = theme.map(|t| t.get_untracked().is_dark()).unwrap_or(true);
        let canvas = canvas_ref.get_untracked();
        let (outcome, total) = court.with_value(|court| {
            let mut court = court.lock().expect("should be able to lock court");
            let Court { game, rng } = &mut *court;
            let outcome = game.step(rng);
            if let Some(canvas) = &canvas {
                if let Err(e) = context_2d(canvas).and_then(|ctx| draw(&ctx, game, dark)) {
                    log::warn!("failed to draw court: {e:?}");
                }
            }
            (outcome, game.score())
        });
        if outcome.goal {
            set_score.set(total);
            set_celebrating.set(true);
            start_celebration(());
        }
        if outcome.settled {
            start_reset(());
        }
    });

    let press = move |client_x: i32, client_y: i32| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return false;
        };
        let point = canvas_point(&canvas, client_x, client_y);
        court.with_value(|court| {
            court
                .lock()
                .expect("should be able to lock court")
                .game
                .begin_drag(point)
        })
    };
    let drag = move |client_x: i32, client_y: i32| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let point = canvas_point(&canvas, client_x, client_y);
        court.with_value(|court| {
            court
                .lock()
                .expect("should be able to lock court")
                .game
                .drag_to(point)
        });
    };
    let release = move || {
        court.with_value(|court| {
            court
                .lock()
                .expect("should be able to lock court")
                .game
                .release()
        })
    };

    let reset_ball = move |_| {
        court.with_value(|court| {
            court
                .lock()
                .expect("should be able to lock court")
                .game
                .reset_ball()
        });
    };
    let reset_score = move |_| {
        court.with_value(|court| {
            court
                .lock()
                .expect("should be able to lock court")
                .game
                .reset_score()
        });
        set_score.set(0);
        set_celebrating.set(false);
    };

    view! {
        <div class="relative mx-auto w-full max-w-[600px]">
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH.to_string()
                height=CANVAS_HEIGHT.to_string()
                class="w-full rounded-2xl border border-muted/30 cursor-grab touch-none"
                on:mousedown=move |ev: MouseEvent| {
                    if press(ev.client_x(), ev.client_y()) {
                        ev.prevent_default();
                    }
                }
                on:mousemove=move |ev: MouseEvent| drag(ev.client_x(), ev.client_y())
                on:mouseup=move |_| {
                    release();
                }
                on:mouseleave=move |_| {
                    release();
                }
                on:touchstart=move |ev: TouchEvent| {
                    if let Some(touch) = ev.touches().get(0) {
                        if press(touch.client_x(), touch.client_y()) {
                            ev.prevent_default();
                        }
                    }
                }
                on:touchmove=move |ev: TouchEvent| {
                    ev.prevent_default();
                    if let Some(touch) = ev.touches().get(0) {
                        drag(touch.client_x(), touch.client_y());
                    }
                }
                on:touchend=move |_| {
                    release();
                }
            ></canvas>
            <Show when=move || celebrating.get()>
                <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                    <span class="text-5xl md:text-6xl font-bold text-orange animate-bounce">
                        "GOAL! 🏀"
                    </span>
                </div>
            </Show>
        </div>
        <div class="flex flex-wrap items-center justify-center gap-4 mt-6">
            <span class="font-mono text-lg">"Score: " {score}</span>
            <button
                type="button"
                class="px-6 py-2 rounded-full border border-muted/30 hover:bg-muted/20"
                on:click=reset_ball
            >
                "Reset Ball"
            </button>
            <button
                type="button"
                class="px-6 py-2 rounded-full border border-muted/30 hover:bg-muted/20"
                on:click=reset_score
            >
                "Reset Score"
            </button>
        </div>
        <p class="text-center text-muted text-sm mt-4">
            "Drag the ball away from the hoop and release to shoot."
        </p>
    }
}

/// Maps a client coordinate onto the canvas' internal resolution.
fn scale_to_canvas(client: f64, origin: f64, displayed: f64, internal: f64) -> f64 {
    if displayed > 0.0 {
        (client - origin) * internal / displayed
    } else {
        client - origin
    }
}

fn canvas_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        scale_to_canvas(client_x as f64, rect.left(), rect.width(), CANVAS_WIDTH),
        scale_to_canvas(client_y as f64, rect.top(), rect.height(), CANVAS_HEIGHT),
    )
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

struct Palette {
    sky: &'static str,
    floor: &'static str,
    line: &'static str,
    text: &'static str,
}

const DARK: Palette = Palette {
    sky: "#0f172a",
    floor: "#78350f",
    line: "#e2e8f0",
    text: "#f8fafc",
};

const LIGHT: Palette = Palette {
    sky: "#e0f2fe",
    floor: "#d97706",
    line: "#334155",
    text: "#0f172a",
};

fn draw(ctx: &CanvasRenderingContext2d, game: &Game, dark: bool) -> Result<(), JsValue> {
    let palette = if dark { &DARK } else { &LIGHT };

    ctx.set_fill_style_str(palette.sky);
    ctx.fill_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT);
    ctx.set_fill_style_str(palette.floor);
    ctx.fill_rect(0.0, GROUND_Y, CANVAS_WIDTH, CANVAS_HEIGHT - GROUND_Y);

    draw_trajectory(ctx, game, palette)?;
    draw_hoop(ctx, game, palette);
    draw_slingshot(ctx, game);

    if let Some(ball) = game.ball() {
        draw_ball(ctx, ball.pos, ball.radius, ball.rotation)?;
    } else if let Some(pos) = game.loaded_ball() {
        draw_ball(ctx, pos, BALL_RADIUS, 0.0)?;
    }

    ctx.set_fill_style_str(palette.text);
    ctx.set_font("bold 20px sans-serif");
    ctx.fill_text(&format!("Score: {}", game.score()), 20.0, 32.0)?;
    Ok(())
}

fn draw_trajectory(
    ctx: &CanvasRenderingContext2d,
    game: &Game,
    palette: &Palette,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(palette.line);
    for point in game.trajectory().iter().step_by(3) {
        ctx.begin_path();
        ctx.arc(point.x, point.y, 2.0, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

fn draw_hoop(ctx: &CanvasRenderingContext2d, game: &Game, palette: &Palette) {
    ctx.set_fill_style_str("#f8fafc");
    ctx.fill_rect(
        BACKBOARD_LEFT,
        BACKBOARD_TOP,
        BACKBOARD_RIGHT - BACKBOARD_LEFT,
        BACKBOARD_BOTTOM - BACKBOARD_TOP,
    );
    ctx.set_fill_style_str("#64748b");
    ctx.fill_rect(BACKBOARD_LEFT + 4.0, BACKBOARD_BOTTOM, 6.0, GROUND_Y - BACKBOARD_BOTTOM);

    let rows = game.net().rows();
    ctx.set_stroke_style_str(palette.line);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    for (r, row) in rows.iter().enumerate() {
        for (c, point) in row.iter().enumerate() {
            if let Some(next) = row.get(c + 1) {
                ctx.move_to(point.pos.x, point.pos.y);
                ctx.line_to(next.pos.x, next.pos.y);
            }
            if let Some(below) = rows.get(r + 1).and_then(|below| below.get(c)) {
                ctx.move_to(point.pos.x, point.pos.y);
                ctx.line_to(below.pos.x, below.pos.y);
            }
        }
    }
    ctx.stroke();

    ctx.set_stroke_style_str("#dc2626");
    ctx.set_line_width(RIM_RADIUS);
    ctx.set_line_cap("round");
    ctx.begin_path();
    ctx.move_to(LEFT_RIM.x, LEFT_RIM.y);
    ctx.line_to(RIGHT_RIM.x, RIGHT_RIM.y);
    ctx.line_to(BACKBOARD_LEFT, RIGHT_RIM.y);
    ctx.stroke();
}

fn draw_slingshot(ctx: &CanvasRenderingContext2d, game: &Game) {
    let left_fork = Vec2::new(SLINGSHOT_X - FORK_SPREAD, SLINGSHOT_Y - FORK_HEIGHT);
    let right_fork = Vec2::new(SLINGSHOT_X + FORK_SPREAD, SLINGSHOT_Y - FORK_HEIGHT);

    ctx.set_stroke_style_str("#92400e");
    ctx.set_line_width(8.0);
    ctx.set_line_cap("round");
    ctx.begin_path();
    ctx.move_to(SLINGSHOT_X, GROUND_Y);
    ctx.line_to(SLINGSHOT_X, SLINGSHOT_Y);
    ctx.line_to(left_fork.x, left_fork.y);
    ctx.move_to(SLINGSHOT_X, SLINGSHOT_Y);
    ctx.line_to(right_fork.x, right_fork.y);
    ctx.stroke();

    ctx.set_stroke_style_str("#b91c1c");
    ctx.set_line_width(3.0);
    ctx.begin_path();
    ctx.move_to(left_fork.x, left_fork.y);
    match game.drag_point() {
        Some(drag) => {
            ctx.line_to(drag.x, drag.y);
            ctx.line_to(right_fork.x, right_fork.y);
        }
        None => ctx.line_to(right_fork.x, right_fork.y),
    }
    ctx.stroke();
}

fn draw_ball(
    ctx: &CanvasRenderingContext2d,
    pos: Vec2,
    radius: f64,
    rotation: f64,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(pos.x, pos.y)?;
    ctx.rotate(rotation)?;

    ctx.set_fill_style_str("#f97316");
    ctx.begin_path();
    ctx.arc(0.0, 0.0, radius, 0.0, TAU)?;
    ctx.fill();

    ctx.set_stroke_style_str("#7c2d12");
    ctx.set_line_width(1.5);
    ctx.begin_path();
    ctx.arc(0.0, 0.0, radius, 0.0, TAU)?;
    ctx.move_to(-radius, 0.0);
    ctx.line_to(radius, 0.0);
    ctx.move_to(0.0, -radius);
    ctx.line_to(0.0, radius);
    ctx.stroke();
    ctx.begin_path();
    ctx.arc(-radius, 0.0, radius * 0.8, -PI / 3.0, PI / 3.0)?;
    ctx.stroke();
    ctx.begin_path();
    ctx.arc(radius, 0.0, radius * 0.8, PI - PI / 3.0, PI + PI / 3.0)?;
    ctx.stroke();

    ctx.restore();
    Ok(())
}
