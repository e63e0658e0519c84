use crate::attributes::Attributes;
use crate::rect::Rect;
use crate::view::{View, ViewId};
use bitflags::bitflags;
use cgmath::{EuclideanSpace, Point2};
use std::collections::HashMap;
use std::sync::Arc;

bitflags! {
    /// Per-view state flags.
    pub struct ViewFlags: u8 {
        const VISIBLE = 1;
        /// The view takes part in pointer and key routing.
        const MOUSE_ENABLED = 1 << 1;
        /// The view accepts keyboard focus.
        const WANTS_FOCUS = 1 << 2;
        /// The view is in a container chain rooted at the frame.
        const ATTACHED = 1 << 3;
        /// The view needs to be redrawn.
        const DIRTY = 1 << 4;
    }
}

impl Default for ViewFlags {
    fn default() -> Self {
        ViewFlags::VISIBLE | ViewFlags::MOUSE_ENABLED
    }
}

/// A node in the view tree.
pub(crate) struct TreeNode {
    /// The view behavior.
    pub(crate) view: Arc<dyn View>,
    /// View bounds in the parent’s coordinate system.
    pub(crate) rect: Rect,
    pub(crate) flags: ViewFlags,
    /// The containing view. Not an owning reference.
    pub(crate) parent: Option<ViewId>,
    /// Child views if this is a container, back to front.
    pub(crate) subviews: Option<Vec<ViewId>>,
    pub(crate) attributes: Attributes,
}

/// An arena of views and their container relationships.
///
/// The root is a container that is always attached. All other views start out detached and become
/// attached when they end up in a container chain leading to the root.
pub struct ViewTree {
    nodes: HashMap<ViewId, TreeNode>,
    root: ViewId,
}

impl ViewTree {
    pub fn new(root_view: Arc<dyn View>, rect: Rect) -> ViewTree {
        let root = ViewId::new();
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            TreeNode {
                view: root_view,
                rect,
                flags: ViewFlags::default() | ViewFlags::ATTACHED,
                parent: None,
                subviews: Some(Vec::new()),
                attributes: Attributes::new(),
            },
        );
        ViewTree { nodes, root }
    }

    pub fn root(&self) -> ViewId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub(crate) fn node(&self, id: ViewId) -> Option<&TreeNode> {
        self.nodes.get(&id)
    }

    pub(crate) fn node_mut(&mut self, id: ViewId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(&id)
    }

    /// Creates a detached view.
    pub fn insert(&mut self, view: Arc<dyn View>, rect: Rect, container: bool) -> ViewId {
        let id = ViewId::new();
        self.nodes.insert(
            id,
            TreeNode {
                view,
                rect,
                flags: ViewFlags::default(),
                parent: None,
                subviews: if container { Some(Vec::new()) } else { None },
                attributes: Attributes::new(),
            },
        );
        id
    }

    /// Returns a strong reference to the view behavior.
    pub fn view(&self, id: ViewId) -> Option<Arc<dyn View>> {
        self.nodes.get(&id).map(|node| Arc::clone(&node.view))
    }

    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    /// Child views back to front. Empty for leaf views.
    pub fn subviews(&self, id: ViewId) -> &[ViewId] {
        self.nodes
            .get(&id)
            .and_then(|node| node.subviews.as_deref())
            .unwrap_or(&[])
    }

    pub fn is_container(&self, id: ViewId) -> bool {
        self.nodes
            .get(&id)
            .map_or(false, |node| node.subviews.is_some())
    }

    pub fn flags(&self, id: ViewId) -> ViewFlags {
        self.nodes
            .get(&id)
            .map_or(ViewFlags::empty(), |node| node.flags)
    }

    pub fn has_flags(&self, id: ViewId, flags: ViewFlags) -> bool {
        self.flags(id).contains(flags)
    }

    pub(crate) fn set_flags(&mut self, id: ViewId, flags: ViewFlags, value: bool) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.flags.set(flags, value);
                true
            }
            None => false,
        }
    }

    pub fn is_attached(&self, id: ViewId) -> bool {
        self.has_flags(id, ViewFlags::ATTACHED)
    }

    pub fn rect(&self, id: ViewId) -> Option<Rect> {
        self.nodes.get(&id).map(|node| node.rect)
    }

    pub(crate) fn set_rect(&mut self, id: ViewId, rect: Rect) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.rect = rect;
                true
            }
            None => false,
        }
    }

    /// Returns true if `id` is a strict descendant of `ancestor`.
    pub fn is_descendant(&self, ancestor: ViewId, id: ViewId) -> bool {
        let mut current = self.parent(id);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// The chain of containers above a view, closest first.
    pub fn ancestors(&self, id: ViewId) -> Vec<ViewId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.parent(parent);
        }
        ancestors
    }

    /// All views below `id`, in pre-order (paint order).
    pub fn descendants(&self, id: ViewId) -> Vec<ViewId> {
        let mut out = Vec::new();
        self.collect_descendants(id, &mut out);
        out
    }

    fn collect_descendants(&self, id: ViewId, out: &mut Vec<ViewId>) {
        for subview in self.subviews(id) {
            out.push(*subview);
            self.collect_descendants(*subview, out);
        }
    }

    /// Adds a detached view to the end (front) of a container’s subviews.
    ///
    /// Fails if the view already has a parent, is attached, would create a cycle, or if `parent`
    /// isn’t a container.
    pub fn add_subview(&mut self, parent: ViewId, id: ViewId) -> bool {
        if id == parent || id == self.root || !self.is_container(parent) {
            return false;
        }
        match self.nodes.get(&id) {
            Some(node) if node.parent.is_none() && !node.flags.contains(ViewFlags::ATTACHED) => (),
            _ => return false,
        }
        if self.is_descendant(id, parent) {
            return false;
        }

        if let Some(subviews) = self
            .nodes
            .get_mut(&parent)
            .and_then(|node| node.subviews.as_mut())
        {
            subviews.push(id);
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = Some(parent);
        }
        if self.is_attached(parent) {
            self.set_attached(id, true);
        }
        true
    }

    /// Removes a view from its container without destroying it.
    pub fn detach(&mut self, id: ViewId) -> bool {
        if id == self.root {
            return false;
        }
        let parent = match self.nodes.get_mut(&id) {
            Some(node) => node.parent.take(),
            None => return false,
        };
        if let Some(subviews) = parent
            .and_then(|parent| self.nodes.get_mut(&parent))
            .and_then(|node| node.subviews.as_mut())
        {
            subviews.retain(|subview| *subview != id);
        }
        self.set_attached(id, false);
        true
    }

    /// Detaches and drops a view and all of its descendants.
    ///
    /// Returns the removed nodes, the view itself first.
    pub(crate) fn destroy(&mut self, id: ViewId) -> Vec<(ViewId, TreeNode)> {
        if !self.detach(id) {
            return Vec::new();
        }
        let mut ids = vec![id];
        ids.append(&mut self.descendants(id));
        ids.into_iter()
            .filter_map(|id| self.nodes.remove(&id).map(|node| (id, node)))
            .collect()
    }

    fn set_attached(&mut self, id: ViewId, attached: bool) {
        self.set_flags(id, ViewFlags::ATTACHED, attached);
        for subview in self.descendants(id) {
            self.set_flags(subview, ViewFlags::ATTACHED, attached);
        }
    }

    /// Converts a point in frame coordinates into the coordinate space of the view’s rect.
    pub fn to_local(&self, id: ViewId, point: Point2<f64>) -> Point2<f64> {
        let mut point = point;
        for ancestor in self.ancestors(id) {
            if ancestor == self.root {
                break;
            }
            if let Some(rect) = self.rect(ancestor) {
                point -= rect.origin().to_vec();
            }
        }
        point
    }

    /// Converts a point from the coordinate space of the container’s parent into the space of its
    /// subviews. The root’s subviews use frame coordinates.
    pub fn to_child_space(&self, container: ViewId, point: Point2<f64>) -> Point2<f64> {
        if container == self.root {
            return point;
        }
        match self.rect(container) {
            Some(rect) => point - rect.origin().to_vec(),
            None => point,
        }
    }

    /// The view’s rect in frame coordinates.
    pub fn frame_rect(&self, id: ViewId) -> Option<Rect> {
        let rect = self.rect(id)?;
        if id == self.root {
            return Some(rect);
        }
        let mut rect = rect;
        for ancestor in self.ancestors(id) {
            if ancestor == self.root {
                break;
            }
            if let Some(ancestor_rect) = self.rect(ancestor) {
                rect = rect.offset(ancestor_rect.origin().to_vec());
            }
        }
        Some(rect)
    }

    /// Returns the front-most visible subview under the point.
    ///
    /// `point` is in the container’s subview coordinate space. If `deep` is set, descends into
    /// containers; a container with nothing under the point then yields `None`.
    pub fn view_at(&self, container: ViewId, point: Point2<f64>, deep: bool) -> Option<ViewId> {
        for subview in self.subviews(container).iter().rev() {
            let node = match self.nodes.get(subview) {
                Some(node) => node,
                None => continue,
            };
            if !node.flags.contains(ViewFlags::VISIBLE) || !node.rect.contains(point) {
                continue;
            }
            if deep && node.subviews.is_some() {
                let point = point - node.rect.origin().to_vec();
                return self.view_at(*subview, point, deep);
            }
            return Some(*subview);
        }
        None
    }

    /// Returns the front-most visible container under the point, or `container` itself if there
    /// is none.
    pub fn container_at(&self, container: ViewId, point: Point2<f64>, deep: bool) -> ViewId {
        for subview in self.subviews(container).iter().rev() {
            let node = match self.nodes.get(subview) {
                Some(node) => node,
                None => continue,
            };
            if node.subviews.is_none()
                || !node.flags.contains(ViewFlags::VISIBLE)
                || !node.rect.contains(point)
            {
                continue;
            }
            if deep {
                let point = point - node.rect.origin().to_vec();
                return self.container_at(*subview, point, deep);
            }
            return *subview;
        }
        container
    }

    /// Views below `container` that can take focus, in traversal order.
    ///
    /// Invisible subtrees are skipped entirely.
    pub fn focus_order(&self, container: ViewId) -> Vec<ViewId> {
        let mut out = Vec::new();
        self.collect_focusable(container, &mut out);
        out
    }

    fn collect_focusable(&self, container: ViewId, out: &mut Vec<ViewId>) {
        let focusable = ViewFlags::VISIBLE | ViewFlags::MOUSE_ENABLED | ViewFlags::WANTS_FOCUS;
        for subview in self.subviews(container) {
            let flags = self.flags(*subview);
            if !flags.contains(ViewFlags::VISIBLE) {
                continue;
            }
            if flags.contains(focusable) {
                out.push(*subview);
            }
            self.collect_focusable(*subview, out);
        }
    }

    /// Clears the dirty flag of every visible attached view and returns their frame rects.
    pub(crate) fn take_dirty_rects(&mut self) -> Vec<Rect> {
        let mut rects = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if !self.has_flags(id, ViewFlags::VISIBLE) {
                continue;
            }
            if self.has_flags(id, ViewFlags::DIRTY) {
                self.set_flags(id, ViewFlags::DIRTY, false);
                if let Some(rect) = self.frame_rect(id) {
                    rects.push(rect);
                }
            }
            stack.extend_from_slice(self.subviews(id));
        }
        rects
    }
}
