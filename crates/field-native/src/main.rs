mod cli;
mod hand_sim;
mod image_loader;
mod render;

use std::time::Instant;

use clap::Parser;
use field_core::{
    FrameScheduler, GestureClassifier, LandmarkSource, ParticleField, Pattern, PointColor,
};
use glam::Vec2;
use winit::event::*;
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use cli::Cli;
use hand_sim::PointerHand;
use image_loader::ImageLoader;
use render::GpuState;

// Colours cycled with the C key
const PALETTE: [[f32; 3]; 5] = [
    [0.0, 1.0, 1.0],
    [1.0, 0.25, 0.6],
    [1.0, 0.8, 0.2],
    [0.5, 1.0, 0.4],
    [0.9, 0.9, 1.0],
];

// Pixel-precise scroll deltas per line notch
const PIXELS_PER_NOTCH: f32 = 40.0;

/// Queue a decode of the CLI image, superseding any decode still running.
fn request_image(loader: &ImageLoader, field: &mut ParticleField, cli: &Cli) {
    let Some(path) = cli.image.clone() else {
        log::warn!("[image] no --image given; key 5 does nothing");
        return;
    };
    let ticket = field.begin_image();
    if let Err(e) = loader.request(path, ticket, field.params().clone()) {
        log::error!("[image] could not start decoder: {e}");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("[field] seed {seed}");

    // Setup phase: field first, so it is drawable before any collaborator is ready.
    let mut field = ParticleField::new(cli.field_params(), seed);
    field.set_color(cli.color);
    let mut scheduler = FrameScheduler::new(GestureClassifier::default(), field);
    let mut tracker = PointerHand::new();
    let loader = ImageLoader::new();
    if cli.image.is_some() {
        request_image(&loader, &mut scheduler.field, &cli);
    }
    let mut palette_index = PALETTE
        .iter()
        .position(|c| PointColor(*c) == cli.color)
        .unwrap_or(0);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Gesture Field (native)")
        .build(&event_loop)?;
    let mut state = pollster::block_on(GpuState::new(&window, scheduler.field.count()))?;
    let start = Instant::now();

    // Frame phase
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                let size = state.window.inner_size();
                let uv = Vec2::new(
                    position.x as f32 / size.width.max(1) as f32,
                    position.y as f32 / size.height.max(1) as f32,
                );
                tracker.set_cursor(Some(uv));
            }
            WindowEvent::CursorLeft { .. } => {
                tracker.set_cursor(None);
            }
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => {
                tracker.set_pinched(button_state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_NOTCH,
                };
                tracker.scroll(notches);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let field = &mut scheduler.field;
                match logical_key {
                    Key::Named(NamedKey::Escape) => elwt.exit(),
                    Key::Named(NamedKey::Space) => {
                        let enabled = !field.auto_rotate();
                        field.set_auto_rotate(enabled);
                    }
                    Key::Character(c) => match c.as_str() {
                        "1" | "2" | "3" | "4" => {
                            let index = c.as_str().parse::<usize>().unwrap_or(1) - 1;
                            if let Err(e) = field.set_pattern(Pattern::BUILTIN[index].clone(), None) {
                                log::error!("[field] pattern switch failed: {e}");
                            }
                        }
                        "5" => request_image(&loader, field, &cli),
                        "c" | "C" => {
                            palette_index = (palette_index + 1) % PALETTE.len();
                            field.set_color(PointColor(PALETTE[palette_index]));
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            for loaded in loader.drain() {
                if let Err(e) =
                    scheduler
                        .field
                        .finish_image(loaded.ticket, loaded.source, loaded.points)
                {
                    log::error!("[image] pattern not applied: {e}");
                }
            }
            let now = start.elapsed().as_secs_f64();
            scheduler.tick(Some(&mut tracker as &mut dyn LandmarkSource), now);
            match state.render(&scheduler.field) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
