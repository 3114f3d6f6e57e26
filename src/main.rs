mod app;
mod grid;
mod material;
mod simulation;
mod timer;
mod vec;

use app::App;

fn main() {
    let mut app = App::new();
    app.run();
}
