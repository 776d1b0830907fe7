// Key listener registry.
// Components hold a KeyBinding while they want keyboard input; dropping it uninstalls the listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Identifier of an installed key listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    installed: Vec<ListenerId>,
}

/// Shared registry of installed key listeners.
///
/// The host routes keys only to components whose binding is still installed.
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    registry: Rc<RefCell<Registry>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new listener. It stays installed until the binding is dropped.
    pub fn install(&self) -> KeyBinding {
        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = ListenerId(registry.next_id);
        registry.installed.push(id);
        log::trace!("Installed key listener {:?}", id);
        KeyBinding {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }
}

#[cfg(test)]
impl KeyListeners {
    pub fn is_installed(&self, id: ListenerId) -> bool {
        self.registry.borrow().installed.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().installed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.borrow().installed.is_empty()
    }
}

/// Scoped key listener. Uninstalled on drop.
#[derive(Debug)]
pub struct KeyBinding {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl KeyBinding {
    #[cfg(test)]
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether the listener is still present in its registry.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().installed.contains(&self.id))
    }
}

impl Drop for KeyBinding {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().installed.retain(|id| *id != self.id);
            log::trace!("Removed key listener {:?}", self.id);
        }
    }
}
