use crate::host::Host;
use crate::joystick::{self, VirtualJoystick};
use crate::mapper::{AxisMapper, OutputDevice};
use crate::pipe::{Mapper2UI, MapperFailure, MapperInformation, UI2Mapper};
use crate::tracker::OpenTrackReceiver;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

pub struct Backend {}

macro_rules! io_unwrap {
    ($tx: expr, $failure: expr, $result:expr) => {
        match $result {
            core::result::Result::Ok(val) => val,
            core::result::Result::Err(err) => {
                let failure = $failure(err);
                log::error!("{}", failure);
                let _ = $tx.send(Mapper2UI::Failure(failure));
                return;
            }
        }
    };
}

impl Backend {
    pub fn run(tx: Sender<Mapper2UI>, rx: Receiver<UI2Mapper>) {
        std::thread::spawn(move || {
            Backend::run1(tx, rx);
            log::info!("Backend stopped");
        });
    }

    fn run1(tx: Sender<Mapper2UI>, rx: Receiver<UI2Mapper>) {
        let device = io_unwrap!(tx, MapperFailure::VirtualJoystick, VirtualJoystick::new());
        let axis_max = device.axis_max();

        let port = match rx.recv() {
            Ok(UI2Mapper::Start(port)) => port,
            Ok(UI2Mapper::Shutdown) | Err(_) => return,
        };

        let mut tracker = io_unwrap!(tx, |err| MapperFailure::TrackerBind(port, err), OpenTrackReceiver::bind(port));

        let mut host = Host::new();
        let sample_tx = tx.clone();
        AxisMapper.install(&mut host, device, move |sample, axes| {
            // don't unwrap because the UI can close in the middle of a tick
            let _ = sample_tx.send(Mapper2UI::SampleUpdate(*sample, *axes));
        });
        log::debug!("{} sample handler(s) registered", host.handler_count());

        // tell the frontend we're good!
        let _ = tx.send(Mapper2UI::Running(MapperInformation {
            device_name: joystick::DEVICE_NAME.to_owned(),
            port,
            axis_max,
        }));

        'main_loop: loop {
            loop {
                match rx.try_recv() {
                    Ok(UI2Mapper::Shutdown) | Err(TryRecvError::Disconnected) => break 'main_loop,
                    Ok(UI2Mapper::Start(_)) => log::debug!("Already running, ignoring start request"),
                    Err(TryRecvError::Empty) => break,
                }
            }

            let sample = io_unwrap!(tx, MapperFailure::TrackerRead, tracker.recv());
            let Some(sample) = sample else {
                continue;
            };

            io_unwrap!(tx, MapperFailure::Output, host.dispatch(&sample));
        } // 'main_loop
    }
}
