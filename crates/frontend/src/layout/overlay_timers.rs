use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Source of one-shot timers. Dropping a handle before it fires cancels it.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, millis: u32, f: Box<dyn FnOnce()>) -> Self::Handle;

    /// Called with the handle of a timer that has just fired, from inside its
    /// own callback.
    fn release(handle: Self::Handle) {
        drop(handle);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, millis: u32, f: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, f)
    }

    // Dropping would free the closure that is running; forget it instead.
    fn release(handle: Timeout) {
        let _ = handle.forget();
    }
}

struct Pending<H> {
    handle: Option<H>,
    generation: u64,
}

/// At most one pending timer. Scheduling again cancels the previous one.
pub struct TimerSlot<S: Scheduler> {
    scheduler: S,
    pending: Rc<RefCell<Pending<S::Handle>>>,
}

impl<S: Scheduler + 'static> TimerSlot<S>
where
    S::Handle: 'static,
{
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: Rc::new(RefCell::new(Pending {
                handle: None,
                generation: 0,
            })),
        }
    }

    pub fn schedule(&self, millis: u32, f: impl FnOnce() + 'static) {
        let generation = {
            let mut pending = self.pending.borrow_mut();
            pending.handle = None;
            pending.generation += 1;
            pending.generation
        };

        let slot = Rc::downgrade(&self.pending);
        let handle = self.scheduler.schedule(
            millis,
            Box::new(move || {
                let Some(slot) = slot.upgrade() else {
                    return;
                };
                // A timer that lost its slot must not act on a newer overlay.
                let fired = {
                    let mut pending = slot.borrow_mut();
                    if pending.generation != generation {
                        return;
                    }
                    pending.handle.take()
                };
                if let Some(fired) = fired {
                    S::release(fired);
                }
                f();
            }),
        );

        let mut pending = self.pending.borrow_mut();
        if pending.generation == generation {
            pending.handle = Some(handle);
        }
    }

    pub fn cancel(&self) {
        let mut pending = self.pending.borrow_mut();
        pending.handle = None;
        pending.generation += 1;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().handle.is_some()
    }
}

/// Pending timers of the overlays: the quote modal's focus and the banner's
/// auto-dismiss.
pub struct OverlayTimers<S: Scheduler = BrowserScheduler> {
    focus: TimerSlot<S>,
    dismiss: TimerSlot<S>,
}

impl<S: Scheduler + Clone + 'static> OverlayTimers<S>
where
    S::Handle: 'static,
{
    pub fn new(scheduler: S) -> Self {
        Self {
            focus: TimerSlot::new(scheduler.clone()),
            dismiss: TimerSlot::new(scheduler),
        }
    }

    /// Run `f` after `millis`, replacing any pending focus timer.
    pub fn schedule_focus(&self, millis: u32, f: impl FnOnce() + 'static) {
        self.focus.schedule(millis, f);
    }

    /// Run `f` after `millis`, replacing any pending dismiss timer.
    pub fn schedule_dismiss(&self, millis: u32, f: impl FnOnce() + 'static) {
        self.dismiss.schedule(millis, f);
    }

    pub fn cancel_focus(&self) {
        self.focus.cancel();
    }

    pub fn cancel_dismiss(&self) {
        self.dismiss.cancel();
    }

    pub fn is_focus_pending(&self) -> bool {
        self.focus.is_pending()
    }

    pub fn is_dismiss_pending(&self) -> bool {
        self.dismiss.is_pending()
    }
}

impl Default for OverlayTimers {
    fn default() -> Self {
        Self::new(BrowserScheduler)
    }
}
