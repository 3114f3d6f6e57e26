use super::material::MaterialKind;
use super::simulation::Simulator;
use super::timer::Timer;
use super::vec::Vec2;
use lazy_static::lazy_static;
use sdl2::{
    event::Event, keyboard::Keycode, pixels::Color, rect::Rect, render::Canvas, video::Window,
    EventPump,
};

const CELL_SIZE: usize = 4;
const TICK_SECONDS: f32 = 1.0 / 60.0;
const DEFAULT_BRUSH_RADIUS: usize = 2;
const BACKGROUND_COLOR: Color = Color::RGB(24, 24, 24);

lazy_static! {
    static ref WINDOW_SIZE: Vec2<u32> = Vec2::new(800, 600);
    static ref GRID_SIZE: Vec2<usize> = Vec2::new(
        WINDOW_SIZE.x as usize / CELL_SIZE,
        WINDOW_SIZE.y as usize / CELL_SIZE,
    );
}

fn material_color(kind: MaterialKind) -> Color {
    match kind {
        MaterialKind::Water => Color::RGB(84, 206, 246),
        MaterialKind::Sand => Color::RGB(237, 201, 175),
        MaterialKind::Dirt => Color::RGB(115, 77, 46),
        MaterialKind::Stone => Color::RGB(136, 136, 136),
        MaterialKind::Empty => BACKGROUND_COLOR,
    }
}

struct BrushState {
    material: MaterialKind,
    radius: usize,
    pointer: Vec2<usize>,
    painting: bool,
}

impl BrushState {
    fn new() -> Self {
        Self {
            material: MaterialKind::PALETTE[0],
            radius: DEFAULT_BRUSH_RADIUS,
            pointer: Vec2::new(0, 0),
            painting: false,
        }
    }
}

fn get_sdl_window(sdl_context: &sdl2::Sdl, title: &str, size: Vec2<u32>) -> Window {
    let video_subsystem = sdl_context.video().unwrap();
    video_subsystem
        .window(title, size.x, size.y)
        .position_centered()
        .build()
        .unwrap()
}

fn clear_canvas_with_color(canvas: &mut Canvas<Window>, color: Color) {
    canvas.set_draw_color(color);
    canvas.clear();
}

pub struct App {
    running: bool,
    simulator: Simulator,
    brush: BrushState,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    timer: Timer,
}

impl App {
    pub fn new() -> Self {
        let sdl_context = sdl2::init().unwrap();
        let window = get_sdl_window(&sdl_context, "Sandbox", *WINDOW_SIZE);

        let mut app = App {
            running: true,
            simulator: Simulator::new(GRID_SIZE.y, GRID_SIZE.x),
            brush: BrushState::new(),
            event_pump: sdl_context.event_pump().unwrap(),
            canvas: window.into_canvas().build().unwrap(),
            timer: Timer::new(),
        };

        app.render();

        app
    }

    pub fn run(&mut self) {
        while self.running {
            self.timer.update();
            if self.timer.delta_time() >= TICK_SECONDS {
                self.input();
                self.update();
                self.render();
                self.timer.reset();
            }
        }
    }

    // A quit event short-circuits the rest of this tick's input processing.
    fn input(&mut self) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    self.running = false;
                    return;
                }
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match key {
                    Keycode::Num1 => self.brush.material = MaterialKind::PALETTE[0],
                    Keycode::Num2 => self.brush.material = MaterialKind::PALETTE[1],
                    Keycode::Num3 => self.brush.material = MaterialKind::PALETTE[2],
                    Keycode::Num4 => self.brush.material = MaterialKind::PALETTE[3],
                    Keycode::Num5 => self.brush.material = MaterialKind::PALETTE[4],
                    Keycode::Equals => self.brush.radius += 1,
                    Keycode::Minus => self.brush.radius = self.brush.radius.saturating_sub(1),
                    _ => {}
                },
                _ => {}
            }
        }

        let mouse = self.event_pump.mouse_state();
        self.brush.pointer = Vec2::new(mouse.x().max(0) as usize, mouse.y().max(0) as usize);
        self.brush.painting = mouse.left();
    }

    fn update(&mut self) {
        if self.brush.painting {
            let row = (self.brush.pointer.y / CELL_SIZE) as isize;
            let col = (self.brush.pointer.x / CELL_SIZE) as isize;
            self.simulator
                .paint(row, col, self.brush.radius, self.brush.material);
        }
        self.simulator.step();
    }

    fn render(&mut self) {
        clear_canvas_with_color(&mut self.canvas, BACKGROUND_COLOR);
        let grid = self.simulator.grid();
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                let kind = grid.get(r, c);
                if kind.is_empty() {
                    continue;
                }
                self.canvas.set_draw_color(material_color(kind));
                let _ = self.canvas.fill_rect(Rect::new(
                    (c * CELL_SIZE) as i32,
                    (r * CELL_SIZE) as i32,
                    CELL_SIZE as u32,
                    CELL_SIZE as u32,
                ));
            }
        }
        self.canvas.present();
    }
}
