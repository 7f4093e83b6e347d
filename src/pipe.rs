use crate::mapper::{AxisValues, Orientation};
use std::fmt::Display;
use std::io;

pub enum UI2Mapper {
    /// Shuts the background down.
    Shutdown,
    /// Starts listening for tracking data on the given UDP port.
    Start(u16),
}

pub struct MapperInformation {
    pub device_name: String,
    pub port: u16,
    pub axis_max: i32,
}

pub enum MapperFailure {
    /// Couldn't create the virtual joystick. Usually missing access to /dev/uinput.
    VirtualJoystick(io::Error),
    /// Couldn't open the tracking socket.
    TrackerBind(u16, io::Error),
    /// The tracking socket failed while running.
    TrackerRead(io::Error),
    /// Writing to the virtual joystick failed.
    Output(io::Error),
}

impl Display for MapperFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapperFailure::VirtualJoystick(err) => match err.kind() {
                io::ErrorKind::PermissionDenied => {
                    write!(f, "No permission to create the virtual joystick. Check access to /dev/uinput.")
                }
                io::ErrorKind::NotFound => {
                    write!(f, "/dev/uinput not found. Is the uinput module loaded?")
                }
                _ => {
                    write!(f, "Couldn't initialize the virtual joystick: {}", err)
                }
            },
            MapperFailure::TrackerBind(port, err) => {
                write!(f, "Couldn't listen on UDP port {}: {}", port, err)
            }
            MapperFailure::TrackerRead(err) => {
                write!(f, "Tracking input failure: {}", err)
            }
            MapperFailure::Output(err) => {
                write!(f, "Virtual joystick failure: {}", err)
            }
        }
    }
}

pub enum Mapper2UI {
    /// Backend is running, show live values.
    Running(MapperInformation),
    /// Backend has failed. Application is no longer operational.
    Failure(MapperFailure),
    /// A sample arrived and was written to the joystick.
    SampleUpdate(Orientation, AxisValues),
}
