mod engine;
mod marker;
mod settings;
mod tools;
mod world;

use crate::engine::core::app_setup::create_app;

fn main() {
    create_app().run();
}
