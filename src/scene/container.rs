use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::foundation::core::{ContainerSize, Duration};
use crate::scene::tree::SceneTree;

/// Handle to a mounted subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MountId(u64);

/// Handle to a registered resize listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Latest resize notification posted to a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeNotice {
    /// Monotonic counter, bumped on every resize.
    pub seq: u64,
    /// Logical time of the resize event.
    pub at: Duration,
}

#[derive(Debug, Default)]
struct ContainerState {
    size: ContainerSize,
    mounts: BTreeMap<MountId, SceneTree>,
    listeners: BTreeSet<ListenerId>,
    last_resize: Option<ResizeNotice>,
    next_id: u64,
}

impl ContainerState {
    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Host element a widget renders into.
///
/// Cloning yields another handle to the same element, so the host can resize or clear it while a
/// widget holds it.
#[derive(Clone, Debug, Default)]
pub struct Container {
    inner: Rc<RefCell<ContainerState>>,
}

impl Container {
    /// Create a container with a measured size.
    pub fn new(size: ContainerSize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ContainerState {
                size,
                ..ContainerState::default()
            })),
        }
    }

    /// Current measured size.
    pub fn size(&self) -> ContainerSize {
        self.inner.borrow().size
    }

    /// Change the measured size and post a resize notification stamped `at`.
    pub fn resize(&self, size: ContainerSize, at: Duration) {
        let mut state = self.inner.borrow_mut();
        state.size = size;
        let seq = state.last_resize.map_or(1, |n| n.seq + 1);
        state.last_resize = Some(ResizeNotice { seq, at });
    }

    /// Most recent resize notification.
    pub fn last_resize(&self) -> Option<ResizeNotice> {
        self.inner.borrow().last_resize
    }

    /// Attach a scene. Returns the handle used to reach it later.
    pub fn mount(&self, scene: SceneTree) -> MountId {
        let mut state = self.inner.borrow_mut();
        let id = MountId(state.fresh_id());
        state.mounts.insert(id, scene);
        id
    }

    /// Detach a scene if it is still attached.
    pub fn unmount(&self, id: MountId) -> Option<SceneTree> {
        self.inner.borrow_mut().mounts.remove(&id)
    }

    /// Remove every mounted scene, as a host wiping the element would.
    pub fn clear(&self) {
        self.inner.borrow_mut().mounts.clear();
    }

    /// Return `true` while `id` is attached.
    pub fn is_mounted(&self, id: MountId) -> bool {
        self.inner.borrow().mounts.contains_key(&id)
    }

    /// Number of attached scenes.
    pub fn mounted_count(&self) -> usize {
        self.inner.borrow().mounts.len()
    }

    /// Read an attached scene.
    pub fn with_scene<R>(&self, id: MountId, f: impl FnOnce(&SceneTree) -> R) -> Option<R> {
        self.inner.borrow().mounts.get(&id).map(f)
    }

    /// Mutate an attached scene. Returns `None` when it is gone.
    pub fn with_scene_mut<R>(&self, id: MountId, f: impl FnOnce(&mut SceneTree) -> R) -> Option<R> {
        self.inner.borrow_mut().mounts.get_mut(&id).map(f)
    }

    /// Register interest in resize notifications.
    pub fn add_resize_listener(&self) -> ListenerId {
        let mut state = self.inner.borrow_mut();
        let id = ListenerId(state.fresh_id());
        state.listeners.insert(id);
        id
    }

    /// Drop a listener. Returns `true` when it was registered.
    pub fn remove_resize_listener(&self, id: ListenerId) -> bool {
        self.inner.borrow_mut().listeners.remove(&id)
    }

    /// Return `true` while `id` is registered.
    pub fn has_resize_listener(&self, id: ListenerId) -> bool {
        self.inner.borrow().listeners.contains(&id)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/container.rs"]
mod tests;
