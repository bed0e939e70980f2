use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use glam::DVec2;
use hecs::World;
use sidescroll::app::{run_headless, GameApp};
use sidescroll::components::Direction;
use sidescroll::config::Tuning;
use sidescroll::engine::window::GameWindow;
use sidescroll::error::AppError;
use sidescroll::scene::demo_scene::load_demo_scene;
use sidescroll::scene::prefabs::EntitySpawn;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Facing {
    Right,
    Left,
}

impl From<Facing> for Direction {
    fn from(facing: Facing) -> Self {
        match facing {
            Facing::Right => Direction::Right,
            Facing::Left => Direction::Left,
        }
    }
}

#[derive(Parser)]
#[command(name = "sidescroll", about = "Side-scrolling entity kinematics demo")]
struct Args {
    /// TOML tuning file (motion constants and default animation)
    #[arg(long)]
    config: Option<PathBuf>,

    /// BMP sprite sheet; frames laid out left to right, animations top to bottom
    #[arg(long)]
    sprite: Option<PathBuf>,

    /// Horizontal wrap period in pixels
    #[arg(long, default_value_t = 640)]
    map_width: u32,

    #[arg(long, default_value_t = 16)]
    width: u32,

    #[arg(long, default_value_t = 16)]
    height: u32,

    #[arg(long, default_value_t = 0.0)]
    spawn_x: f64,

    #[arg(long, default_value_t = 224.0)]
    spawn_y: f64,

    #[arg(long, value_enum, default_value_t = Facing::Right)]
    direction: Facing,

    /// Start in mid-air
    #[arg(long)]
    airborne: bool,

    /// Start without the moving flag
    #[arg(long)]
    idle: bool,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    frames: u32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "sidescroll failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let tuning = match &args.config {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let focus_spawn = EntitySpawn {
        width: args.width,
        height: args.height,
        position: DVec2::new(args.spawn_x, args.spawn_y),
        map_width: args.map_width,
        direction: args.direction.into(),
        moving: !args.idle,
        in_mid_air: args.airborne,
    };

    let mut world = World::new();
    let focus = load_demo_scene(&mut world, &focus_spawn, &tuning)?;
    info!(entities = world.len(), "demo scene loaded");

    if args.headless {
        run_headless(&mut world, focus, args.frames);
        return Ok(());
    }

    let sdl = sdl2::init().map_err(sidescroll::error::RenderError::Sdl)?;
    let mut window = GameWindow::new(&sdl, "sidescroll", args.map_width.min(1280), 480)?;
    let creator = window.texture_creator();

    let mut app = GameApp::new(world, focus, &window);
    if let Some(path) = &args.sprite {
        // Missing sprites are reported per frame by the renderer.
        if let Err(err) = app.load_sprites(&creator, path) {
            error!(%err, "continuing without sprites");
        }
    }
    app.run(&sdl, &mut window)?;
    Ok(())
}
