//! Control commands feeding the render loop.
//!
//! Button handlers (or any other input layer) post commands from
//! whatever context they run in; the scheduler drains the queue at the
//! start of every frame. Built on `critical-section` and a fixed-size
//! `heapless::Deque` so it is safe from interrupt context.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// A control input for the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeCommand {
    /// Switch to the next pattern and restart its animation.
    NextPattern,
    /// Manually advance the animation position one step.
    AdvancePosition,
}

/// Error returned when posting to a full queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull;

/// Bounded command queue between the input layer and the scheduler.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<CubeCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle. Multiple senders can coexist.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Get a receiver handle for the scheduler.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    fn try_send(&self, command: CubeCommand) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(|_| QueueFull)
        })
    }

    fn try_receive(&self) -> Option<CubeCommand> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight sender handle for a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Post a command; fails when the queue is full.
    pub fn try_send(&self, command: CubeCommand) -> Result<(), QueueFull> {
        self.queue.try_send(command)
    }
}

/// Receiver handle for a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Take the oldest pending command, if any.
    pub fn try_receive(&self) -> Option<CubeCommand> {
        self.queue.try_receive()
    }
}
