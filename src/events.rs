//! Marker notifications and host lifecycle signals.
//!
//! The timeline publishes [`MarkerEvent`]s on an [`EventBus`]; application
//! code subscribes to one kind or to all of them. The host drives the
//! timeline with [`TimelineSignal`]s.

use crate::types::{Marker, MarkerKey, PointerEvent};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerEventKind {
    Click,
    Drag,
    Drop,
    ContextMenu,
}

impl MarkerEventKind {
    /// Wire name of the notification
    pub fn name(&self) -> &'static str {
        match self {
            Self::Click => "marker-click",
            Self::Drag => "marker-drag",
            Self::Drop => "marker-drop",
            Self::ContextMenu => "marker-contextmenu",
        }
    }
}

/// A notification about one marker.
///
/// `marker` is the record as it stood when the event was emitted.
#[derive(Debug, Clone)]
pub struct MarkerEvent {
    pub kind: MarkerEventKind,
    pub key: MarkerKey,
    pub marker: Marker,
    pub pointer: PointerEvent,
}

/// Structural events the host reports to the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSignal {
    /// Media loaded; duration is known
    Ready,
    /// Rendering surface exists; queued initial markers are added
    BackendReady,
    Resize,
    OrientationChange,
    Zoom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&MarkerEvent) + Send>;

struct Subscription {
    id: SubscriptionId,
    kind: Option<MarkerEventKind>,
    handler: Handler,
}

#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen for one kind of notification.
    pub fn subscribe<F>(&mut self, kind: MarkerEventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&MarkerEvent) + Send + 'static,
    {
        self.insert(Some(kind), Box::new(handler))
    }

    /// Listen for every notification.
    pub fn subscribe_all<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&MarkerEvent) + Send + 'static,
    {
        self.insert(None, Box::new(handler))
    }

    fn insert(&mut self, kind: Option<MarkerEventKind>, handler: Handler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kind, handler });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver `event` to matching subscribers in subscription order.
    /// Returns the number of handlers called.
    pub fn emit(&mut self, event: &MarkerEvent) -> usize {
        let mut delivered = 0;
        for subscription in &mut self.subscriptions {
            if subscription.kind.is_none_or(|kind| kind == event.kind) {
                (subscription.handler)(event);
                delivered += 1;
            }
        }
        trace!(event = event.kind.name(), key = event.key.raw(), delivered, "Emitted marker event");
        delivered
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }
}
