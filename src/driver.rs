use crate::{get_config, Engine};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::{runtime::Handle, sync::Notify, task::JoinHandle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Stopped,
    Running,
}

struct Run {
    cancelled: Arc<AtomicBool>,
    wake: Arc<Notify>,
    task: JoinHandle<()>,
}

/// Steps an engine on a fixed cadence from a tokio task.
///
/// At most one step is in flight at a time, and every access through
/// [`LoopDriver::with_engine`] is serialized with the loop. A step that has
/// started when [`LoopDriver::stop`] is called completes; no step starts after
/// `stop` returns.
pub struct LoopDriver<E> {
    engine: Arc<Mutex<E>>,
    period: Duration,
    runtime: Handle,
    run: Mutex<Option<Run>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    // a panicking step only ever touched the back buffer
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns `false` without stepping once the run is cancelled.
fn step_unless_cancelled<E: Engine>(engine: &Mutex<E>, cancelled: &AtomicBool) -> bool {
    let mut field = lock(engine);
    if cancelled.load(Ordering::Acquire) {
        return false;
    }
    field.step();
    true
}

async fn run_loop<E: Engine>(
    engine: Arc<Mutex<E>>,
    period: Duration,
    cancelled: Arc<AtomicBool>,
    wake: Arc<Notify>,
) {
    loop {
        tokio::select! {
            _ = tokio::time::sleep(period) => {}
            _ = wake.notified() => break,
        }
        if !step_unless_cancelled(&engine, &cancelled) {
            break;
        }
    }
}

impl<E: Engine + Send + 'static> LoopDriver<E> {
    /// Driver with the configured step period.
    pub fn new(engine: E, runtime: Handle) -> Self {
        let period = Duration::from_millis(get_config().step_period_ms);
        Self::with_period(engine, runtime, period)
    }

    pub fn with_period(engine: E, runtime: Handle, period: Duration) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            period,
            runtime,
            run: Mutex::new(None),
        }
    }

    /// Starts stepping every `period`. Does nothing if already running.
    pub fn start(&self) {
        let mut run = lock(&self.run);
        if run.as_ref().is_some_and(|r| !r.task.is_finished()) {
            return;
        }
        let cancelled = Arc::new(AtomicBool::new(false));
        let wake = Arc::new(Notify::new());
        let task = self.runtime.spawn(run_loop(
            Arc::clone(&self.engine),
            self.period,
            Arc::clone(&cancelled),
            Arc::clone(&wake),
        ));
        *run = Some(Run {
            cancelled,
            wake,
            task,
        });
    }
}

impl<E> LoopDriver<E> {
    /// Stops the loop, abandoning the pending wait.
    ///
    /// Must not be called from inside [`LoopDriver::with_engine`].
    pub fn stop(&self) {
        let Some(run) = lock(&self.run).take() else {
            return;
        };
        {
            let _engine = lock(&self.engine);
            run.cancelled.store(true, Ordering::Release);
        }
        run.wake.notify_one();
    }

    pub fn state(&self) -> DriverState {
        match lock(&self.run).as_ref() {
            Some(run) if !run.task.is_finished() => DriverState::Running,
            _ => DriverState::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == DriverState::Running
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Runs `f` on the engine between two steps.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut E) -> R) -> R {
        let mut engine = lock(&self.engine);
        f(&mut *engine)
    }

    /// Shared handle to the engine; lock it only between operations.
    pub fn engine(&self) -> Arc<Mutex<E>> {
        Arc::clone(&self.engine)
    }
}

impl<E> Drop for LoopDriver<E> {
    fn drop(&mut self) {
        self.stop();
    }
}
