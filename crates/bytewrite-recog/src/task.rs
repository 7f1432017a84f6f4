//! Background work on a worker thread
//!
//! Loading a sample set or running the pipeline on a large photo can take
//! long enough that an interactive caller wants to keep going while it
//! happens. A [`BackgroundTask`] runs one closure on its own thread and
//! hands the result back over a channel.
//!
//! Cancellation is coarse: [`BackgroundTask::cancel`] only prevents work
//! that has not started yet. Once the closure is running it completes.

use crate::{RecogError, RecogResult};
use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

const PENDING: u8 = 0;
const RUNNING: u8 = 1;
const CANCELLED: u8 = 2;

type Work<T> = Box<dyn FnOnce() -> T + Send + 'static>;

/// Handle to work running (or waiting to run) on a worker thread
pub struct BackgroundTask<T> {
    name: String,
    work: Option<(Work<T>, Sender<T>)>,
    state: Arc<AtomicU8>,
    receiver: Receiver<T>,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> BackgroundTask<T> {
    /// Create a task without starting it.
    pub fn new<F>(name: &str, work: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        Self {
            name: name.to_string(),
            work: Some((Box::new(work), tx)),
            state: Arc::new(AtomicU8::new(PENDING)),
            receiver: rx,
            handle: None,
        }
    }

    /// Create a task and start it immediately.
    pub fn spawn<F>(name: &str, work: F) -> RecogResult<Self>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let mut task = Self::new(name, work);
        task.start()?;
        Ok(task)
    }

    /// Start the worker thread.
    ///
    /// Does nothing if the task was already started or cancelled.
    pub fn start(&mut self) -> RecogResult<()> {
        let Some((work, tx)) = self.work.take() else {
            return Ok(());
        };
        if self.is_cancelled() {
            debug!("task '{}' cancelled before start", self.name);
            return Ok(());
        }

        let state = Arc::clone(&self.state);
        let name = self.name.clone();
        let handle = thread::Builder::new()
            .name(self.name.clone())
            .spawn(move || {
                if state
                    .compare_exchange(PENDING, RUNNING, Ordering::SeqCst, Ordering::SeqCst)
                    .is_err()
                {
                    debug!("task '{}' cancelled before it ran", name);
                    return;
                }
                let result = work();
                // the receiver may have been dropped by a caller that gave up
                let _ = tx.send(result);
            })
            .map_err(|e| RecogError::TaskFailed(format!("failed to spawn '{}': {e}", self.name)))?;
        self.handle = Some(handle);
        Ok(())
    }

    /// Cancel the task if its work has not started.
    ///
    /// Returns `true` if the work will never run.
    pub fn cancel(&self) -> bool {
        match self
            .state
            .compare_exchange(PENDING, CANCELLED, Ordering::SeqCst, Ordering::SeqCst)
        {
            Ok(_) => true,
            Err(current) => current == CANCELLED,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::SeqCst) == CANCELLED
    }

    /// Take the result if the work has finished, without blocking.
    ///
    /// Returns `None` while the work is pending or still running. A task
    /// that was cancelled, or whose worker exited without sending a value
    /// (a panic, or a result already taken), yields
    /// `Some(Err(RecogError::TaskFailed(_)))` so a polling loop can stop.
    pub fn try_take(&mut self) -> Option<RecogResult<T>> {
        if self.is_cancelled() {
            return Some(Err(self.cancelled_error()));
        }
        match self.receiver.try_recv() {
            Ok(value) => {
                self.reap();
                Some(Ok(value))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.reap();
                Some(Err(self.no_result_error()))
            }
        }
    }

    /// Block until the work finishes and return its result.
    ///
    /// Starts the task first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::TaskFailed`] if the task was cancelled or the
    /// worker panicked.
    pub fn wait(mut self) -> RecogResult<T> {
        self.start()?;
        if self.is_cancelled() {
            return Err(self.cancelled_error());
        }
        let received = self.receiver.recv();
        self.reap();
        received.map_err(|_| self.no_result_error())
    }

    fn cancelled_error(&self) -> RecogError {
        RecogError::TaskFailed(format!("task '{}' was cancelled", self.name))
    }

    fn no_result_error(&self) -> RecogError {
        RecogError::TaskFailed(format!("task '{}' exited without a result", self.name))
    }

    fn reap(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
