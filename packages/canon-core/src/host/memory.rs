//! In-memory host.

use super::{DispatchOutcome, Event, Host, MountHandle};
use crate::markup::{ClickHandler, Node};
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Host that keeps mounted trees in a map and dispatches events by walking
/// them.
#[derive(Debug, Default)]
pub struct MemoryHost {
    trees: BTreeMap<MountHandle, Node>,
    next_id: u64,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root node of a mounted tree.
    pub fn root(&self, handle: MountHandle) -> Option<&Node> {
        self.trees.get(&handle)
    }

    pub fn is_mounted(&self, handle: MountHandle) -> bool {
        self.trees.contains_key(&handle)
    }

    /// Number of trees currently mounted.
    pub fn mounted_count(&self) -> usize {
        self.trees.len()
    }

    /// Deliver `event` to the node at `path` (child indices from the root)
    /// and bubble it up to the root.
    pub fn dispatch_at(
        &mut self,
        handle: MountHandle,
        path: &[usize],
        event: Event,
    ) -> Result<DispatchOutcome> {
        let root = self.trees.get(&handle).ok_or(Error::UnknownHandle(handle))?;
        let handlers = bubble_handlers(root, path, event)
            .ok_or_else(|| Error::InvalidPath(path.to_vec()))?;

        tracing::trace!(
            "Dispatching {:?} to {} at {:?}: {} handlers",
            event,
            handle,
            path,
            handlers.len()
        );

        // Tree borrow ends before any callback runs.
        for handler in &handlers {
            handler();
        }

        Ok(DispatchOutcome {
            handlers_invoked: handlers.len(),
        })
    }
}

impl Host for MemoryHost {
    fn mount(&mut self, tree: Node) -> MountHandle {
        self.next_id += 1;
        let handle = MountHandle::new(self.next_id);
        self.trees.insert(handle, tree);
        tracing::trace!("Mounted tree {}", handle);
        handle
    }

    fn unmount(&mut self, handle: MountHandle) -> Result<Node> {
        let tree = self
            .trees
            .remove(&handle)
            .ok_or(Error::UnknownHandle(handle))?;
        tracing::trace!("Unmounted tree {}", handle);
        Ok(tree)
    }

    fn dispatch_event(&mut self, handle: MountHandle, event: Event) -> Result<DispatchOutcome> {
        self.dispatch_at(handle, &[], event)
    }
}

/// Handlers for `event` from the target at `path` up to the root, innermost
/// first. `None` if the path does not resolve.
fn bubble_handlers(root: &Node, path: &[usize], event: Event) -> Option<Vec<ClickHandler>> {
    let mut chain = vec![root];
    let mut node = root;
    for &index in path {
        node = node.as_element()?.children.get(index)?;
        chain.push(node);
    }

    let handlers = chain
        .into_iter()
        .rev()
        .filter_map(Node::as_element)
        .filter_map(|element| match event {
            Event::Click => element.on_click.clone(),
        })
        .collect();
    Some(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Element;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn logging(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> ClickHandler {
        let log = log.clone();
        Rc::new(move || log.borrow_mut().push(name))
    }

    #[test]
    fn test_mount_and_unmount() {
        let mut host = MemoryHost::new();
        let first = host.mount(Node::text("a"));
        let second = host.mount(Node::text("b"));

        assert_ne!(first, second);
        assert_eq!(host.mounted_count(), 2);

        let tree = host.unmount(first).unwrap();
        assert_eq!(tree.text_content(), "a");
        assert!(!host.is_mounted(first));
        assert!(host.is_mounted(second));
    }

    #[test]
    fn test_unknown_handle() {
        let mut host = MemoryHost::new();
        let handle = host.mount(Node::text("a"));
        host.unmount(handle).unwrap();

        assert!(matches!(host.unmount(handle), Err(Error::UnknownHandle(h)) if h == handle));
        assert!(matches!(
            host.dispatch_event(handle, Event::Click),
            Err(Error::UnknownHandle(_))
        ));
    }

    #[test]
    fn test_events_bubble_innermost_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let tree: Node = Element::new("div")
            .on_click(logging(&log, "outer"))
            .child(
                Element::new("button")
                    .on_click(logging(&log, "button"))
                    .child(Element::new("span").child("x")),
            )
            .into();

        let mut host = MemoryHost::new();
        let handle = host.mount(tree);
        let outcome = host.dispatch_at(handle, &[0, 0, 0], Event::Click).unwrap();

        assert_eq!(outcome.handlers_invoked, 2);
        assert_eq!(*log.borrow(), vec!["button", "outer"]);
    }

    #[test]
    fn test_invalid_path() {
        let mut host = MemoryHost::new();
        let handle = host.mount(Element::new("div").into());

        assert!(matches!(
            host.dispatch_at(handle, &[3], Event::Click),
            Err(Error::InvalidPath(p)) if p == vec![3]
        ));
    }

    #[test]
    fn test_text_root_has_no_handlers() {
        let mut host = MemoryHost::new();
        let handle = host.mount(Node::text("plain"));

        let outcome = host.dispatch_event(handle, Event::Click).unwrap();
        assert_eq!(outcome, DispatchOutcome::default());
    }
}
