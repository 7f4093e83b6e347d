use crate::{
    backend::Backend,
    pipe::{Mapper2UI, UI2Mapper},
    ui::UI,
};

mod backend;
pub mod host;
mod joystick;
pub mod mapper;
pub mod pipe;
pub mod tracker;
mod ui;
pub mod util;

#[profiling::function]
pub fn main() -> eframe::Result {
    if let Err(err) = util::logger::init() {
        eprintln!("Couldn't install logger: {err}");
    }

    let (ui_tx, mapper_rx) = std::sync::mpsc::channel::<UI2Mapper>();
    let (mapper_tx, ui_rx) = std::sync::mpsc::channel::<Mapper2UI>();

    Backend::run(mapper_tx, mapper_rx);
    UI::run(ui_tx, ui_rx)
}
