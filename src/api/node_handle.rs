use std::cell::Cell;
use std::rc::{self, Rc};
use std::sync::{self, Arc};

use crate::core::Rect;

/// Read-only capability onto a node of an externally owned visual tree.
///
/// `measure` returns the node's current on-screen rectangle, or `None` while
/// the node is not mounted. Callers never keep the rectangle beyond the
/// computation that asked for it.
pub trait NodeHandle {
    fn measure(&self) -> Option<Rect>;
}

impl<T: NodeHandle + ?Sized> NodeHandle for &T {
    fn measure(&self) -> Option<Rect> {
        (**self).measure()
    }
}

impl<T: NodeHandle + ?Sized> NodeHandle for Box<T> {
    fn measure(&self) -> Option<Rect> {
        (**self).measure()
    }
}

impl<T: NodeHandle + ?Sized> NodeHandle for Rc<T> {
    fn measure(&self) -> Option<Rect> {
        (**self).measure()
    }
}

impl<T: NodeHandle + ?Sized> NodeHandle for Arc<T> {
    fn measure(&self) -> Option<Rect> {
        (**self).measure()
    }
}

/// A dropped node is simply unresolved.
impl<T: NodeHandle + ?Sized> NodeHandle for rc::Weak<T> {
    fn measure(&self) -> Option<Rect> {
        self.upgrade()?.measure()
    }
}

impl<T: NodeHandle + ?Sized> NodeHandle for sync::Weak<T> {
    fn measure(&self) -> Option<Rect> {
        self.upgrade()?.measure()
    }
}

/// Adapts a measuring closure, e.g. a toolkit's bounding-rect query.
pub struct MeasureFn<F>(pub F);

impl<F: Fn() -> Option<Rect>> NodeHandle for MeasureFn<F> {
    fn measure(&self) -> Option<Rect> {
        (self.0)()
    }
}

/// Node whose rectangle is set by the host, for headless layouts and tests.
#[derive(Debug, Default)]
pub struct StaticNode {
    rect: Cell<Option<Rect>>,
}

impl StaticNode {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Cell::new(Some(rect)),
        }
    }

    #[must_use]
    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn set_rect(&self, rect: Rect) {
        self.rect.set(Some(rect));
    }

    pub fn unmount(&self) {
        self.rect.set(None);
    }

    /// Shifts the node as a scrolling ancestor would.
    pub fn translate(&self, dx: f64, dy: f64) {
        if let Some(rect) = self.rect.get() {
            self.rect
                .set(Some(Rect::new(rect.x + dx, rect.y + dy, rect.width, rect.height)));
        }
    }
}

impl NodeHandle for StaticNode {
    fn measure(&self) -> Option<Rect> {
        self.rect.get()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{MeasureFn, NodeHandle, StaticNode};
    use crate::core::Rect;

    #[test]
    fn weak_handle_resolves_until_node_is_dropped() {
        let node = Rc::new(StaticNode::new(Rect::new(1.0, 2.0, 3.0, 4.0)));
        let weak = Rc::downgrade(&node);
        assert_eq!(weak.measure(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
        drop(node);
        assert_eq!(weak.measure(), None);
    }

    #[test]
    fn translate_moves_only_mounted_nodes() {
        let node = StaticNode::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        node.translate(-5.0, 2.0);
        assert_eq!(node.measure(), Some(Rect::new(-5.0, 2.0, 10.0, 10.0)));

        let ghost = StaticNode::unmounted();
        ghost.translate(1.0, 1.0);
        assert_eq!(ghost.measure(), None);
    }

    #[test]
    fn closure_handle_measures_on_demand() {
        let handle = MeasureFn(|| Some(Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert!(handle.measure().is_some());
    }
}
