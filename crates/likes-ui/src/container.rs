//! Message list container
//!
//! A minimal element tree standing in for the rendered page: the message list
//! container, its descendants (rows, buttons, icons) with their attributes and
//! class lists, and the click handlers bound to it.

use dashmap::DashMap;
use likes_core::ClassList;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::{ContainerError, HandlerError};
use crate::handler::{LikeToggleHandler, ToggleReport};

/// Identifier of an element within one container
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a handler bound to a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

/// A rendered element
///
/// Attributes are fixed at render time; only the class list is mutable.
#[derive(Debug)]
pub struct Element {
    id: ElementId,
    parent: Option<ElementId>,
    attributes: HashMap<String, String>,
    classes: RwLock<ClassList>,
}

impl Element {
    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Snapshot of the class list
    pub fn classes(&self) -> ClassList {
        self.classes.read().clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.read().contains(class)
    }

    /// Mutate the class list under its write lock
    pub fn update_classes<R>(&self, f: impl FnOnce(&mut ClassList) -> R) -> R {
        f(&mut self.classes.write())
    }
}

/// The message list container
pub struct MessageList {
    id: String,
    root: ElementId,
    next_element: AtomicU64,
    elements: DashMap<ElementId, Arc<Element>>,
    next_binding: AtomicU64,
    bindings: DashMap<BindingId, Arc<LikeToggleHandler>>,
}

impl MessageList {
    /// Create an empty container
    pub fn new(id: impl Into<String>) -> Arc<Self> {
        let root = ElementId(0);
        let elements = DashMap::new();
        elements.insert(
            root,
            Arc::new(Element {
                id: root,
                parent: None,
                attributes: HashMap::new(),
                classes: RwLock::new(ClassList::new()),
            }),
        );

        Arc::new(Self {
            id: id.into(),
            root,
            next_element: AtomicU64::new(1),
            elements,
            next_binding: AtomicU64::new(1),
            bindings: DashMap::new(),
        })
    }

    /// The container's element id attribute (e.g. "messages")
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The container element itself
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Number of elements, the container included
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.len() == 1
    }

    /// Append an element under `parent`
    pub fn append_child(
        &self,
        parent: ElementId,
        class_attr: &str,
        attributes: &[(&str, &str)],
    ) -> Result<ElementId, ContainerError> {
        if !self.elements.contains_key(&parent) {
            return Err(ContainerError::UnknownElement(parent));
        }

        let id = ElementId(self.next_element.fetch_add(1, Ordering::Relaxed));
        let element = Element {
            id,
            parent: Some(parent),
            attributes: attributes
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            classes: RwLock::new(ClassList::parse(class_attr)),
        };
        self.elements.insert(id, Arc::new(element));

        Ok(id)
    }

    pub fn get(&self, id: ElementId) -> Option<Arc<Element>> {
        self.elements.get(&id).map(|e| e.clone())
    }

    /// Remove an element and its descendants; the container itself cannot be removed
    pub fn remove(&self, id: ElementId) -> bool {
        if id == self.root || !self.elements.contains_key(&id) {
            return false;
        }

        // Snapshot parents first so no shard lock is held while walking
        let parents: HashMap<ElementId, Option<ElementId>> = self
            .elements
            .iter()
            .map(|entry| (*entry.key(), entry.value().parent))
            .collect();
        let doomed: Vec<ElementId> = parents
            .keys()
            .copied()
            .filter(|&element| descends_from(&parents, element, id))
            .collect();
        for element in doomed {
            self.elements.remove(&element);
        }

        tracing::trace!(container = %self.id, element = %id, "Element removed");
        true
    }

    /// Nearest element, starting at `target` and walking up to the container,
    /// that satisfies `pred`
    pub fn closest(
        &self,
        target: ElementId,
        pred: impl Fn(&Element) -> bool,
    ) -> Option<Arc<Element>> {
        let mut current = Some(target);
        while let Some(id) = current {
            let element = self.get(id)?;
            if pred(&element) {
                return Some(element);
            }
            current = element.parent;
        }
        None
    }

    /// Bind a click handler to this container
    pub fn bind(&self, handler: Arc<LikeToggleHandler>) -> BindingId {
        let id = BindingId(self.next_binding.fetch_add(1, Ordering::Relaxed));
        self.bindings.insert(id, handler);
        tracing::debug!(container = %self.id, binding = id.0, "Click handler bound");
        id
    }

    /// Unbind a click handler; returns false if it was not bound
    pub fn unbind(&self, id: BindingId) -> bool {
        let removed = self.bindings.remove(&id).is_some();
        if removed {
            tracing::debug!(container = %self.id, binding = id.0, "Click handler unbound");
        }
        removed
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Dispatch a click on `target` to every bound handler
    ///
    /// Clicks that do not land on (or inside) a like icon produce no report.
    pub async fn click(&self, target: ElementId) -> Vec<Result<ToggleReport, HandlerError>> {
        // Clone the handlers out so no map guard is held across an await
        let handlers: Vec<Arc<LikeToggleHandler>> =
            self.bindings.iter().map(|entry| entry.value().clone()).collect();

        let mut results = Vec::with_capacity(handlers.len());
        for handler in handlers {
            if let Some(result) = handler.handle_click(self, target).await {
                results.push(result);
            }
        }
        results
    }
}

impl fmt::Debug for MessageList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageList")
            .field("id", &self.id)
            .field("elements", &self.elements.len())
            .field("bindings", &self.bindings.len())
            .finish()
    }
}

fn descends_from(
    parents: &HashMap<ElementId, Option<ElementId>>,
    mut current: ElementId,
    ancestor: ElementId,
) -> bool {
    loop {
        if current == ancestor {
            return true;
        }
        match parents.get(&current).copied().flatten() {
            Some(parent) => current = parent,
            None => return false,
        }
    }
}

/// The rendered page: containers by element id
#[derive(Debug, Default)]
pub struct Page {
    containers: DashMap<String, Arc<MessageList>>,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container, replacing any container with the same id
    pub fn insert(&self, list: Arc<MessageList>) -> Option<Arc<MessageList>> {
        self.containers.insert(list.id().to_string(), list)
    }

    pub fn get(&self, id: &str) -> Option<Arc<MessageList>> {
        self.containers.get(id).map(|c| c.clone())
    }

    pub fn remove(&self, id: &str) -> Option<Arc<MessageList>> {
        self.containers.remove(id).map(|(_, list)| list)
    }
}
