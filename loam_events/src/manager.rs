// Copyright 2026 the Loam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dispatcher: listener registry plus the two-phase queue-and-drain loop.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::Event;

/// Handle to one listener registration.
///
/// Returned by [`EventManager::register`] (and [`EventContext::register`]) and
/// consumed by the matching `remove`. Each registration gets its own id, so
/// registering the same closure twice yields two handles and two invocations
/// per matching event; removing one handle leaves the other in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

type Callback<K, D> =
    Box<dyn for<'a, 'b, 'c> FnMut(&'a Event<K, D>, &'b mut EventContext<'c, K, D>)>;

struct Registration<K, D> {
    id: ListenerId,
    callback: Callback<K, D>,
}

/// Per-kind listener lists; two inline slots cover the common case of one or
/// two listeners per kind without a second allocation.
type ListenerList<K, D> = SmallVec<[Registration<K, D>; 2]>;

/// Mutation a callback requested mid-delivery, applied once the current
/// event's delivery completes.
enum ListenerOp<K, D> {
    Register {
        kind: K,
        id: ListenerId,
        callback: Callback<K, D>,
    },
    Remove {
        kind: K,
        id: ListenerId,
    },
}

/// Buffers queued events and distributes them to registered listeners.
///
/// One manager is one dispatch domain; nothing here is global. Producers call
/// [`queue`](Self::queue) / [`queue_with`](Self::queue_with) any number of
/// times, and the host drains with [`process`](Self::process) at a point of
/// its choosing (typically once per tick).
///
/// ## Drain semantics
///
/// [`process`](Self::process) runs rounds until the queue stays empty. Each
/// round moves everything queued so far into a working batch and delivers the
/// batched events in FIFO order; events queued *during* the round (only
/// possible from inside a callback, via its [`EventContext`]) form the next
/// round. An event is delivered to the listeners registered for its kind at
/// the moment that event is processed: listener changes requested by an
/// earlier event's callbacks are applied before the next event's delivery.
///
/// Termination is the caller's contract: a listener that perpetually requeues
/// keeps [`process`](Self::process) running forever. Hosts that need a bound
/// can drive [`process_round`](Self::process_round) themselves with a cycle
/// cap.
///
/// ## Threading
///
/// Single-threaded by design; there is no internal locking. Wrap the manager
/// in external synchronization if it must be shared.
pub struct EventManager<K, D> {
    /// Events awaiting distribution.
    pending: Vec<Event<K, D>>,
    /// Working buffer for the round currently being drained; empty between
    /// calls, retained to reuse its allocation.
    batch: Vec<Event<K, D>>,
    /// Insertion-ordered listener registrations per event kind.
    listeners: HashMap<K, ListenerList<K, D>>,
    /// Listener mutations requested by callbacks mid-delivery.
    deferred: Vec<ListenerOp<K, D>>,
    next_id: u64,
}

impl<K: Eq + Hash, D> EventManager<K, D> {
    /// Create a manager with no listeners and an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            batch: Vec::new(),
            listeners: HashMap::new(),
            deferred: Vec::new(),
            next_id: 0,
        }
    }

    /// Queue an event of `kind` carrying no data.
    ///
    /// Buffers only; nothing is delivered until [`process`](Self::process).
    pub fn queue(&mut self, kind: K) {
        self.pending.push(Event::new(kind));
    }

    /// Queue an event of `kind` carrying `data`.
    pub fn queue_with(&mut self, kind: K, data: D) {
        self.pending.push(Event::with_data(kind, data));
    }

    /// Register `callback` for events of `kind`.
    ///
    /// Registrations for a kind fire in registration order. The same closure
    /// may be registered any number of times; each registration is invoked
    /// once per matching event and must be removed via its own id.
    pub fn register<F>(&mut self, kind: K, callback: F) -> ListenerId
    where
        F: FnMut(&Event<K, D>, &mut EventContext<'_, K, D>) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push(Registration {
                id,
                callback: Box::new(callback),
            });
        id
    }

    /// Remove the registration `id` made for `kind`.
    ///
    /// Returns `false` (a no-op, not an error) when the kind has no
    /// listeners or the id is not among them. Other registrations for the
    /// kind are unaffected.
    pub fn remove(&mut self, kind: &K, id: ListenerId) -> bool {
        remove_registration(&mut self.listeners, kind, id)
    }

    /// Drain the queue to completion, notifying listeners.
    ///
    /// Runs [`process_round`](Self::process_round) until no callback has
    /// queued anything new. See the type-level docs for ordering and
    /// termination caveats. A panicking callback propagates immediately,
    /// leaving the queue at most partially delivered.
    pub fn process(&mut self) {
        while self.process_round() {}
    }

    /// Deliver exactly one round: everything queued before this call.
    ///
    /// Returns `true` if callbacks queued further events during the round
    /// (i.e. another round is due), `false` when there was nothing to do or
    /// the queue is now empty. This is the building block for hosts that
    /// want to impose their own cycle limit instead of the unbounded
    /// [`process`](Self::process).
    pub fn process_round(&mut self) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        debug_assert!(self.batch.is_empty(), "batch must be empty between rounds");
        core::mem::swap(&mut self.pending, &mut self.batch);

        for event in self.batch.drain(..) {
            if let Some(list) = self.listeners.get_mut(event.kind()) {
                let mut ctx = EventContext {
                    pending: &mut self.pending,
                    ops: &mut self.deferred,
                    next_id: &mut self.next_id,
                };
                for registration in list.iter_mut() {
                    (registration.callback)(&event, &mut ctx);
                }
            }
            // Listener changes requested by this event's callbacks take
            // effect before the next event is delivered.
            apply_ops(&mut self.listeners, &mut self.deferred);
        }

        !self.pending.is_empty()
    }

    /// Number of registrations currently listening for `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: &K) -> usize {
        self.listeners.get(kind).map_or(0, ListenerList::len)
    }

    /// Number of events queued and not yet delivered.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<K: Eq + Hash, D> Default for EventManager<K, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, D> fmt::Debug for EventManager<K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventManager")
            .field("pending", &self.pending.len())
            .field("kinds", &self.listeners.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// A callback's re-entry point into the dispatching [`EventManager`].
///
/// Rust's aliasing rules keep the manager itself out of reach while it is
/// mid-delivery, so callbacks get this context instead:
///
/// - [`queue`](Self::queue) / [`queue_with`](Self::queue_with) append to the
///   pending queue; such events are seen by the *next* drain round, never the
///   one in flight.
/// - [`register`](Self::register) / [`remove`](Self::remove) are deferred
///   until the current event's delivery completes, then applied before the
///   next event is processed. A listener removed while handling one event
///   therefore no longer fires for subsequent events in the same round.
pub struct EventContext<'a, K, D> {
    pending: &'a mut Vec<Event<K, D>>,
    ops: &'a mut Vec<ListenerOp<K, D>>,
    next_id: &'a mut u64,
}

impl<K, D> EventContext<'_, K, D> {
    /// Queue an event of `kind` carrying no data, for the next round.
    pub fn queue(&mut self, kind: K) {
        self.pending.push(Event::new(kind));
    }

    /// Queue an event of `kind` carrying `data`, for the next round.
    pub fn queue_with(&mut self, kind: K, data: D) {
        self.pending.push(Event::with_data(kind, data));
    }

    /// Register `callback` for `kind` once the current delivery completes.
    ///
    /// The returned id is valid immediately (it can be stored, or handed to
    /// [`remove`](Self::remove) in the same callback), though the listener
    /// only starts receiving events delivered after this one.
    pub fn register<F>(&mut self, kind: K, callback: F) -> ListenerId
    where
        F: FnMut(&Event<K, D>, &mut EventContext<'_, K, D>) + 'static,
    {
        let id = ListenerId(*self.next_id);
        *self.next_id += 1;
        self.ops.push(ListenerOp::Register {
            kind,
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove the registration `id` for `kind` once the current delivery
    /// completes.
    ///
    /// Unknown ids are a silent no-op, matching
    /// [`EventManager::remove`].
    pub fn remove(&mut self, kind: K, id: ListenerId) {
        self.ops.push(ListenerOp::Remove { kind, id });
    }
}

impl<K, D> fmt::Debug for EventContext<'_, K, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventContext")
            .field("pending", &self.pending.len())
            .field("deferred_ops", &self.ops.len())
            .finish_non_exhaustive()
    }
}

fn remove_registration<K: Eq + Hash, D>(
    listeners: &mut HashMap<K, ListenerList<K, D>>,
    kind: &K,
    id: ListenerId,
) -> bool {
    let Some(list) = listeners.get_mut(kind) else {
        return false;
    };
    let Some(position) = list.iter().position(|reg| reg.id == id) else {
        return false;
    };
    list.remove(position);
    if list.is_empty() {
        listeners.remove(kind);
    }
    true
}

fn apply_ops<K: Eq + Hash, D>(
    listeners: &mut HashMap<K, ListenerList<K, D>>,
    ops: &mut Vec<ListenerOp<K, D>>,
) {
    for op in ops.drain(..) {
        match op {
            ListenerOp::Register { kind, id, callback } => {
                listeners
                    .entry(kind)
                    .or_default()
                    .push(Registration { id, callback });
            }
            ListenerOp::Remove { kind, id } => {
                let _ = remove_registration(listeners, &kind, id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    type Log = Rc<RefCell<Vec<String>>>;

    fn log_of(log: &Log) -> Vec<String> {
        log.borrow().clone()
    }

    #[test]
    fn delivers_queued_event_once_with_kind_and_data() {
        let mut manager: EventManager<&str, i32> = EventManager::new();
        let log: Log = Log::default();

        let sink = log.clone();
        manager.register("damage", move |event, _ctx| {
            sink.borrow_mut()
                .push(alloc::format!("{}={}", event.kind(), event.data().unwrap()));
        });

        manager.queue_with("damage", 5);
        manager.process();

        assert_eq!(log_of(&log), vec!["damage=5"]);
        assert!(manager.is_idle());
    }

    #[test]
    fn queue_alone_does_not_deliver() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        let log: Log = Log::default();

        let sink = log.clone();
        manager.register("tick", move |_, _| sink.borrow_mut().push("hit".into()));

        manager.queue("tick");
        assert_eq!(manager.pending_len(), 1);
        assert!(log_of(&log).is_empty());

        manager.process();
        assert_eq!(log_of(&log).len(), 1);
    }

    #[test]
    fn events_without_listeners_are_dropped() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        manager.queue("nobody-home");
        manager.process();
        assert!(manager.is_idle());
    }

    #[test]
    fn double_registration_fires_twice() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        let log: Log = Log::default();

        // Two registrations backed by the same shared state: two handles,
        // two invocations per matching event.
        for _ in 0..2 {
            let sink = log.clone();
            manager.register("spawn", move |_, _| sink.borrow_mut().push("hit".into()));
        }
        assert_eq!(manager.listener_count(&"spawn"), 2);

        manager.queue("spawn");
        manager.process();
        assert_eq!(log_of(&log).len(), 2);
    }

    #[test]
    fn remove_deletes_one_registration() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        let log: Log = Log::default();

        let sink = log.clone();
        let first = manager.register("spawn", move |_, _| sink.borrow_mut().push("a".into()));
        let sink = log.clone();
        let _second = manager.register("spawn", move |_, _| sink.borrow_mut().push("b".into()));

        assert!(manager.remove(&"spawn", first));
        // Mirror of multiple registration: a handle removes exactly once.
        assert!(!manager.remove(&"spawn", first));
        assert_eq!(manager.listener_count(&"spawn"), 1);

        manager.queue("spawn");
        manager.process();
        assert_eq!(log_of(&log), vec!["b"]);
    }

    #[test]
    fn remove_unknown_kind_or_id_is_a_noop() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        let log: Log = Log::default();

        let sink = log.clone();
        let id = manager.register("spawn", move |_, _| sink.borrow_mut().push("hit".into()));

        assert!(!manager.remove(&"other", id));
        let stale = {
            let mut scratch: EventManager<&str, ()> = EventManager::new();
            scratch.register("spawn", |_, _| {})
        };
        let _ = stale; // ids are per-manager; an id from elsewhere simply misses
        assert!(!manager.remove(&"spawn", ListenerId(999)));

        // Delivery to the real listener is undisturbed.
        manager.queue("spawn");
        manager.process();
        assert_eq!(log_of(&log).len(), 1);
    }

    #[test]
    fn fifo_order_within_a_round() {
        let mut manager: EventManager<&str, i32> = EventManager::new();
        let log: Log = Log::default();

        let sink = log.clone();
        manager.register("n", move |event, _| {
            sink.borrow_mut()
                .push(alloc::format!("{}", event.data().unwrap()));
        });

        for n in 1..=4 {
            manager.queue_with("n", n);
        }
        manager.process();
        assert_eq!(log_of(&log), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn registration_order_within_a_kind() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        let log: Log = Log::default();

        for name in ["first", "second", "third"] {
            let sink = log.clone();
            manager.register("go", move |_, _| sink.borrow_mut().push(name.into()));
        }

        manager.queue("go");
        manager.process();
        assert_eq!(log_of(&log), vec!["first", "second", "third"]);
    }

    #[test]
    fn callback_queued_events_arrive_in_the_same_process_call() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        let log: Log = Log::default();

        let sink = log.clone();
        manager.register("first", move |_, ctx| {
            sink.borrow_mut().push("first".into());
            ctx.queue("second");
        });
        let sink = log.clone();
        manager.register("second", move |_, _| sink.borrow_mut().push("second".into()));

        manager.queue("first");
        manager.process();

        assert_eq!(log_of(&log), vec!["first", "second"]);
        assert!(manager.is_idle());
    }

    #[test]
    fn callback_queued_events_wait_for_the_next_round() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        let log: Log = Log::default();

        // "a" requeues "b"; "b" and "c" just log. With "a" and "c" queued
        // up front, the first round must deliver a then c, and only the
        // second round delivers b.
        let sink = log.clone();
        manager.register("a", move |_, ctx| {
            sink.borrow_mut().push("a".into());
            ctx.queue("b");
        });
        for kind in ["b", "c"] {
            let sink = log.clone();
            manager.register(kind, move |_, _| sink.borrow_mut().push(kind.into()));
        }

        manager.queue("a");
        manager.queue("c");
        manager.process();

        assert_eq!(log_of(&log), vec!["a", "c", "b"]);
    }

    #[test]
    fn mid_round_removal_suppresses_later_delivery() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        let log: Log = Log::default();

        let sink = log.clone();
        let victim = manager.register("b", move |_, _| sink.borrow_mut().push("b".into()));

        let sink = log.clone();
        manager.register("a", move |_, ctx| {
            sink.borrow_mut().push("a".into());
            ctx.remove("b", victim);
        });

        // Same round: "a" runs first and unregisters the "b" listener, so
        // the "b" event later in the round finds nobody.
        manager.queue("a");
        manager.queue("b");
        manager.process();

        assert_eq!(log_of(&log), vec!["a"]);
        assert_eq!(manager.listener_count(&"b"), 0);
    }

    #[test]
    fn mid_round_registration_is_seen_by_later_events() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        let log: Log = Log::default();

        let outer = log.clone();
        manager.register("a", move |_, ctx| {
            outer.borrow_mut().push("a".into());
            let inner = outer.clone();
            ctx.register("b", move |_, _| inner.borrow_mut().push("b".into()));
        });

        // "b" sits later in the same round; delivery goes against the
        // listener set current at the moment "b" is processed.
        manager.queue("a");
        manager.queue("b");
        manager.process();

        assert_eq!(log_of(&log), vec!["a", "b"]);
        assert_eq!(manager.listener_count(&"b"), 1);
    }

    #[test]
    fn context_registration_id_works_with_manager_remove() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        let captured: Rc<RefCell<Option<ListenerId>>> = Rc::default();

        let slot = captured.clone();
        manager.register("setup", move |_, ctx| {
            *slot.borrow_mut() = Some(ctx.register("live", |_, _| {}));
        });

        manager.queue("setup");
        manager.process();

        let id = captured.borrow().expect("listener id should be captured");
        assert_eq!(manager.listener_count(&"live"), 1);
        assert!(manager.remove(&"live", id));
        assert_eq!(manager.listener_count(&"live"), 0);
    }

    #[test]
    fn removal_during_own_kind_takes_effect_next_event() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        let log: Log = Log::default();

        // A one-shot listener: unregisters itself on first delivery. The
        // removal is deferred past its own invocation, so the second queued
        // event of the same kind no longer reaches it.
        let captured: Rc<RefCell<Option<ListenerId>>> = Rc::default();
        let slot = captured.clone();
        let sink = log.clone();
        let id = manager.register("once", move |_, ctx| {
            sink.borrow_mut().push("once".into());
            if let Some(id) = *slot.borrow() {
                ctx.remove("once", id);
            }
        });
        *captured.borrow_mut() = Some(id);

        manager.queue("once");
        manager.queue("once");
        manager.process();

        assert_eq!(log_of(&log), vec!["once"]);
        assert_eq!(manager.listener_count(&"once"), 0);
    }

    #[test]
    fn process_round_supports_caller_imposed_limits() {
        let mut manager: EventManager<&str, ()> = EventManager::new();

        // A listener that perpetually requeues; `process` would never
        // return. The host bounds the drain itself.
        manager.register("echo", |_, ctx| ctx.queue("echo"));
        manager.queue("echo");

        let mut rounds = 0;
        while manager.process_round() {
            rounds += 1;
            if rounds == 3 {
                break;
            }
        }
        assert_eq!(rounds, 3);
        assert!(!manager.is_idle());
    }

    #[test]
    fn process_on_idle_manager_is_a_noop() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        manager.register("x", |_, _| {});
        manager.process();
        assert!(!manager.process_round());
    }

    #[test]
    fn separate_kinds_do_not_interfere() {
        let mut manager: EventManager<&str, ()> = EventManager::new();
        let log: Log = Log::default();

        for kind in ["hit", "miss"] {
            let sink = log.clone();
            manager.register(kind, move |_, _| sink.borrow_mut().push(kind.into()));
        }

        manager.queue("hit");
        manager.process();
        assert_eq!(log_of(&log), vec!["hit"]);
    }
}
