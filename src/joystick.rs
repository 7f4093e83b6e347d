use crate::mapper::{AxisValues, OutputDevice};
use evdev::uinput::VirtualDevice;
use evdev::{AbsInfo, AbsoluteAxisCode, AttributeSet, AttributeSetRef, EventType, InputEvent, KeyCode, UinputAbsSetup};
use std::io;

pub const DEVICE_NAME: &str = "HeadStick Virtual Joystick";
/// Axes report values in `[-AXIS_MAX, AXIS_MAX]`.
pub const AXIS_MAX: i32 = 32767;

fn bind_joystick(axes: &[UinputAbsSetup], keys: &AttributeSetRef<KeyCode>) -> io::Result<VirtualDevice> {
    let mut device = VirtualDevice::builder()?.name(DEVICE_NAME);
    for axis in axes {
        device = device.with_absolute_axis(axis)?
    }

    device.with_keys(keys)?.build()
}

/// A uinput joystick with X, Y and Z axes.
pub struct VirtualJoystick {
    device: VirtualDevice,
}

impl VirtualJoystick {
    pub fn new() -> io::Result<Self> {
        let abs_setup = AbsInfo::new(0, -AXIS_MAX, AXIS_MAX, 0, 0, 0);

        let axis_x = UinputAbsSetup::new(AbsoluteAxisCode::ABS_X, abs_setup);
        let axis_y = UinputAbsSetup::new(AbsoluteAxisCode::ABS_Y, abs_setup);
        let axis_z = UinputAbsSetup::new(AbsoluteAxisCode::ABS_Z, abs_setup);

        // udev only tags the device as a joystick if it has a trigger button
        let mut keys = AttributeSet::<KeyCode>::new();
        keys.insert(KeyCode::BTN_TRIGGER);

        let device = bind_joystick(&[axis_x, axis_y, axis_z], &keys)?;
        log::info!("Created virtual joystick \"{DEVICE_NAME}\"");
        Ok(Self { device })
    }
}

impl OutputDevice for VirtualJoystick {
    fn axis_max(&self) -> i32 { AXIS_MAX }

    fn write_axes(&mut self, axes: AxisValues) -> io::Result<()> {
        let abs = EventType::ABSOLUTE.0;
        let ev_x = InputEvent::new(abs, AbsoluteAxisCode::ABS_X.0, axes.x);
        let ev_y = InputEvent::new(abs, AbsoluteAxisCode::ABS_Y.0, axes.y);
        let ev_z = InputEvent::new(abs, AbsoluteAxisCode::ABS_Z.0, axes.z);

        self.device.emit(&[ev_x, ev_y, ev_z])
    }
}
