use crate::host::Host;
use crate::util;
use std::io;

/// Largest magnitude an axis value may take. Linux input events carry 32-bit signed values.
pub const MAX_INT: i32 = i32::MAX;

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

pub const YAW_RANGE: AxisRange = AxisRange { min: -90.0, max: 90.0 };
pub const PITCH_RANGE: AxisRange = AxisRange { min: -90.0, max: 90.0 };
pub const ROLL_RANGE: AxisRange = AxisRange { min: -50.0, max: 50.0 };

/// One head pose, in degrees.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Orientation {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct AxisValues {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

pub trait TrackingSource {
    fn yaw(&self) -> f64;
    fn pitch(&self) -> f64;
    fn roll(&self) -> f64;
}

impl TrackingSource for Orientation {
    fn yaw(&self) -> f64 { self.yaw }
    fn pitch(&self) -> f64 { self.pitch }
    fn roll(&self) -> f64 { self.roll }
}

pub trait OutputDevice {
    /// Maximum magnitude of an axis value. Axes span `[-axis_max, axis_max]`.
    fn axis_max(&self) -> i32;
    fn write_axes(&mut self, axes: AxisValues) -> io::Result<()>;
}

/// Clamps to `[-MAX_INT, MAX_INT]`, then truncates toward zero.
///
/// NaN truncates to 0.
pub fn to_int_safe(value: f64) -> i32 {
    if value > MAX_INT as f64 {
        return MAX_INT;
    }
    if value < -(MAX_INT as f64) {
        return -MAX_INT;
    }
    value as i32
}

/// Maps tracker angles onto joystick axes: yaw to x, pitch to y, roll to z.
#[derive(Debug, Default, Copy, Clone)]
pub struct AxisMapper;

impl AxisMapper {
    pub fn map(&self, source: &impl TrackingSource, axis_max: i32) -> AxisValues {
        let max = axis_max as f64;
        let axis = |value: f64, range: AxisRange| to_int_safe(util::map_range(value, range.min, range.max, -max, max));

        AxisValues {
            x: axis(source.yaw(), YAW_RANGE),
            y: axis(source.pitch(), PITCH_RANGE),
            z: axis(source.roll(), ROLL_RANGE),
        }
    }

    /// Reads one sample from `source` and writes it to `device`. Returns what was written.
    #[profiling::function]
    pub fn update(&self, source: &impl TrackingSource, device: &mut impl OutputDevice) -> io::Result<AxisValues> {
        let axes = self.map(source, device.axis_max());
        device.write_axes(axes)?;
        Ok(axes)
    }

    /// Subscribes the mapper to `host`, driving `device` on every sample.
    ///
    /// Only takes effect while the host is still starting; returns whether the handler was registered.
    /// `observer` sees every sample alongside the values written for it.
    pub fn install<D, F>(self, host: &mut Host, mut device: D, mut observer: F) -> bool
    where
        D: OutputDevice + Send + 'static,
        F: FnMut(&Orientation, &AxisValues) + Send + 'static,
    {
        if !host.starting() {
            log::warn!("Host already running, not registering the axis mapper again");
            return false;
        }

        host.subscribe(move |sample| {
            let axes = self.update(sample, &mut device)?;
            observer(sample, &axes);
            Ok(())
        });
        log::debug!("Axis mapper registered");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingDevice {
        axis_max: i32,
        writes: Arc<Mutex<Vec<AxisValues>>>,
    }

    impl RecordingDevice {
        fn new(axis_max: i32) -> Self { Self { axis_max, writes: Arc::new(Mutex::new(Vec::new())) } }

        fn last(&self) -> AxisValues { *self.writes.lock().unwrap().last().unwrap() }
    }

    impl OutputDevice for RecordingDevice {
        fn axis_max(&self) -> i32 { self.axis_max }

        fn write_axes(&mut self, axes: AxisValues) -> io::Result<()> {
            self.writes.lock().unwrap().push(axes);
            Ok(())
        }
    }

    struct BrokenDevice;

    impl OutputDevice for BrokenDevice {
        fn axis_max(&self) -> i32 { 100 }

        fn write_axes(&mut self, _axes: AxisValues) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "unplugged"))
        }
    }

    fn pose(yaw: f64, pitch: f64, roll: f64) -> Orientation { Orientation { yaw, pitch, roll } }

    #[test]
    fn centered_head_is_centered_stick() {
        let mut device = RecordingDevice::new(32767);
        AxisMapper.update(&pose(0.0, 0.0, 0.0), &mut device).unwrap();
        assert_eq!(device.last(), AxisValues { x: 0, y: 0, z: 0 });
    }

    #[test]
    fn range_endpoints_hit_axis_max() {
        let mut device = RecordingDevice::new(32767);

        AxisMapper.update(&pose(90.0, 90.0, 50.0), &mut device).unwrap();
        assert_eq!(device.last(), AxisValues { x: 32767, y: 32767, z: 32767 });

        AxisMapper.update(&pose(-90.0, -90.0, -50.0), &mut device).unwrap();
        assert_eq!(device.last(), AxisValues { x: -32767, y: -32767, z: -32767 });
    }

    #[test]
    fn roll_uses_narrower_range() {
        let axes = AxisMapper.map(&pose(0.0, 0.0, 25.0), 100);
        assert_eq!(axes.z, 50);

        let axes = AxisMapper.map(&pose(25.0, 0.0, 0.0), 100);
        assert_ne!(axes.x, 50);
    }

    #[test]
    fn out_of_range_input_extrapolates() {
        let axes = AxisMapper.map(&pose(180.0, -180.0, 100.0), 1000);
        assert_eq!(axes, AxisValues { x: 2000, y: -2000, z: 2000 });
    }

    #[test]
    fn extrapolation_past_max_int_clamps() {
        let axes = AxisMapper.map(&pose(180.0, -180.0, 0.0), MAX_INT);
        assert_eq!(axes.x, MAX_INT);
        assert_eq!(axes.y, -MAX_INT);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(to_int_safe(1e12), MAX_INT);
        assert_eq!(to_int_safe(-1e12), -MAX_INT);
        assert_eq!(to_int_safe(f64::INFINITY), MAX_INT);
        assert_eq!(to_int_safe(f64::NEG_INFINITY), -MAX_INT);
        assert_eq!(to_int_safe(f64::NAN), 0);
        assert_eq!(to_int_safe(-12345.0), -12345);
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(to_int_safe(1.9), 1);
        assert_eq!(to_int_safe(-1.9), -1);

        let axes = AxisMapper.map(&pose(10.0, -10.0, 0.0), 10);
        assert_eq!(axes, AxisValues { x: 1, y: -1, z: 0 });
    }

    #[test]
    fn identical_samples_write_identical_values() {
        let mut device = RecordingDevice::new(32767);
        let sample = pose(12.5, -33.3, 7.1);

        let first = AxisMapper.update(&sample, &mut device).unwrap();
        let second = AxisMapper.update(&sample, &mut device).unwrap();

        assert_eq!(first, second);
        let writes = device.writes.lock().unwrap();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0], writes[1]);
    }

    #[test]
    fn worked_example() {
        let mut device = RecordingDevice::new(32768);
        let axes = AxisMapper.update(&pose(45.0, -45.0, 25.0), &mut device).unwrap();
        assert_eq!(axes, AxisValues { x: 16384, y: -16384, z: 16384 });
        assert_eq!(device.last(), axes);
    }

    #[test]
    fn device_errors_propagate() {
        let err = AxisMapper.update(&pose(0.0, 0.0, 0.0), &mut BrokenDevice).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn install_registers_once() {
        let device = RecordingDevice::new(100);
        let writes = device.writes.clone();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_by_observer = seen.clone();

        let mut host = Host::new();
        assert!(AxisMapper.install(&mut host, device, move |sample, axes| {
            seen_by_observer.lock().unwrap().push((*sample, *axes));
        }));

        host.dispatch(&pose(90.0, 0.0, -25.0)).unwrap();
        assert!(!AxisMapper.install(&mut host, RecordingDevice::new(100), |_, _| {}));
        host.dispatch(&pose(0.0, 0.0, 0.0)).unwrap();

        let expected = AxisValues { x: 100, y: 0, z: -50 };
        assert_eq!(writes.lock().unwrap().as_slice(), &[expected, AxisValues::default()]);
        assert_eq!(seen.lock().unwrap()[0], (pose(90.0, 0.0, -25.0), expected));
        assert_eq!(host.handler_count(), 1);
    }
}
