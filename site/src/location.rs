//! Access to the addressable location fragment.
//!
//! The browser keeps the fragment in `window.location.hash` and announces changes with a
//! `hashchange` event. [`Location`] abstracts over both, so that the route state can be driven
//! by the real browser or by a [`MemoryLocation`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub trait Location {
    /// Handle of a registered change listener, dropping it unregisters the listener.
    type Listener;

    /// The current fragment, including the leading `#`, or an empty string.
    fn hash(&self) -> String;

    /// Change the fragment. Listeners are notified later, and only if the fragment changed.
    fn set_hash(&self, fragment: &str);

    /// Register a callback, invoked with the new hash whenever the fragment changes.
    fn listen(&self, callback: Box<dyn Fn(String)>) -> Self::Listener;
}

type Callback = Rc<dyn Fn(String)>;

#[derive(Default)]
struct Inner {
    hash: String,
    pending: bool,
    next_id: u64,
    listeners: Vec<(u64, Callback)>,
}

/// An in-memory location, behaving like the browser's.
///
/// Clones share the same fragment and listeners.
#[derive(Clone, Default)]
pub struct MemoryLocation {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryLocation {
    pub fn new(fragment: &str) -> Self {
        let location = Self::default();
        location.inner.borrow_mut().hash = normalize(fragment);
        location
    }

    /// Deliver a pending change notification, returns `true` if there was one.
    pub fn flush(&self) -> bool {
        let pending = std::mem::take(&mut self.inner.borrow_mut().pending);
        if pending {
            self.notify();
        }
        pending
    }

    /// Simulate a navigation from outside the application, like using the back button or
    /// editing the address bar. The notification is delivered right away.
    pub fn navigate(&self, fragment: &str) {
        self.set_hash(fragment);
        self.flush();
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self) {
        // release the borrow before calling out, listeners may register or unregister
        let (hash, listeners) = {
            let inner = self.inner.borrow();
            let listeners = inner
                .listeners
                .iter()
                .map(|(_, callback)| callback.clone())
                .collect::<Vec<_>>();
            (inner.hash.clone(), listeners)
        };

        log::trace!("Fragment changed: {hash:?}, notifying {} listeners", listeners.len());

        for listener in listeners {
            listener(hash.clone());
        }
    }
}

impl Location for MemoryLocation {
    type Listener = MemoryListener;

    fn hash(&self) -> String {
        self.inner.borrow().hash.clone()
    }

    fn set_hash(&self, fragment: &str) {
        let hash = normalize(fragment);
        let mut inner = self.inner.borrow_mut();
        if inner.hash != hash {
            inner.hash = hash;
            inner.pending = true;
        }
    }

    fn listen(&self, callback: Box<dyn Fn(String)>) -> Self::Listener {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::from(callback)));

        MemoryListener {
            id,
            location: Rc::downgrade(&self.inner),
        }
    }
}

pub struct MemoryListener {
    id: u64,
    location: Weak<RefCell<Inner>>,
}

impl Drop for MemoryListener {
    fn drop(&mut self) {
        if let Some(inner) = self.location.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

fn normalize(fragment: &str) -> String {
    match fragment.strip_prefix('#').unwrap_or(fragment) {
        "" => String::new(),
        fragment => format!("#{fragment}"),
    }
}
