use crate::mapper::Orientation;
use std::io;

pub type SampleHandler = Box<dyn FnMut(&Orientation) -> io::Result<()> + Send>;

/// Fans each new tracking sample out to its subscribers.
pub struct Host {
    handlers: Vec<SampleHandler>,
    starting: bool,
}

impl Default for Host {
    fn default() -> Self { Self::new() }
}

impl Host {
    pub fn new() -> Self { Self { handlers: Vec::new(), starting: true } }

    /// True until the first sample has been dispatched.
    pub fn starting(&self) -> bool { self.starting }

    pub fn subscribe(&mut self, handler: impl FnMut(&Orientation) -> io::Result<()> + Send + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn handler_count(&self) -> usize { self.handlers.len() }

    /// Runs every handler in subscription order, stopping at the first error.
    pub fn dispatch(&mut self, sample: &Orientation) -> io::Result<()> {
        self.starting = false;
        for handler in &mut self.handlers {
            handler(sample)?;
        }
        Ok(())
    }
}
