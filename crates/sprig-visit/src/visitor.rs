//! Visitor contract
//!
//! A [`Visitor`] holds, per node kind, an optional enter callback and an
//! optional leave callback. It is built by the caller before a traversal
//! and only read by the engine.

use std::fmt;

use sprig_dom::{Node, NodeKind};

use crate::InvalidVisitorError;

/// Enter/leave callback.
///
/// Receives the node and, for kinds that can have one, its parent. Returns
/// the node to keep at this position.
pub type Callback<'a> = Box<dyn FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a>;

/// Which side of a node's children a callback runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before descending into children
    Enter,
    /// After all children have been visited
    Leave,
}

/// Enter and leave callbacks for one node kind
#[derive(Default)]
pub struct Hooks<'a> {
    pub enter: Option<Callback<'a>>,
    pub leave: Option<Callback<'a>>,
}

impl<'a> Hooks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the enter callback
    pub fn on_enter<F>(mut self, f: F) -> Self
    where
        F: FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a,
    {
        self.enter = Some(Box::new(f));
        self
    }

    /// Builder: set the leave callback
    pub fn on_leave<F>(mut self, f: F) -> Self
    where
        F: FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a,
    {
        self.leave = Some(Box::new(f));
        self
    }

    /// Callback for `phase`, if set
    pub fn get_mut(&mut self, phase: Phase) -> Option<&mut Callback<'a>> {
        match phase {
            Phase::Enter => self.enter.as_mut(),
            Phase::Leave => self.leave.as_mut(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enter.is_none() && self.leave.is_none()
    }
}

impl fmt::Debug for Hooks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("enter", &self.enter.is_some())
            .field("leave", &self.leave.is_some())
            .finish()
    }
}

/// A value registered on a visitor under a kind key
pub enum VisitorEntry<'a> {
    /// Callable entry
    Hooks(Hooks<'a>),
    /// Anything else; only its type name is kept for error reporting
    Value { type_name: &'static str },
}

impl<'a> VisitorEntry<'a> {
    /// Wrap a non-callable value
    pub fn value<T>(_value: T) -> Self {
        VisitorEntry::Value {
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl<'a> From<Hooks<'a>> for VisitorEntry<'a> {
    fn from(hooks: Hooks<'a>) -> Self {
        VisitorEntry::Hooks(hooks)
    }
}

/// Per-kind callbacks for one traversal
pub struct Visitor<'a> {
    /// Indexed by [`NodeKind::index`]
    hooks: [Hooks<'a>; 6],
    /// Entries rejected at registration, reported by validation
    invalid: Vec<InvalidVisitorError>,
    visit_child_nodes: bool,
}

impl<'a> Visitor<'a> {
    /// Create a visitor with no callbacks that descends into children
    pub fn new() -> Self {
        Self {
            hooks: Default::default(),
            invalid: Vec::new(),
            visit_child_nodes: true,
        }
    }

    /// Builder: set the enter callback for `kind`
    pub fn on_enter<F>(mut self, kind: NodeKind, f: F) -> Self
    where
        F: FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a,
    {
        self.hooks[kind.index()].enter = Some(Box::new(f));
        self
    }

    /// Builder: set the leave callback for `kind`
    pub fn on_leave<F>(mut self, kind: NodeKind, f: F) -> Self
    where
        F: FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a,
    {
        self.hooks[kind.index()].leave = Some(Box::new(f));
        self
    }

    /// Builder: replace both callbacks for `kind`
    pub fn hooks(mut self, kind: NodeKind, hooks: Hooks<'a>) -> Self {
        self.hooks[kind.index()] = hooks;
        self
    }

    /// Builder: register an entry under a kind key such as `"Element"`.
    ///
    /// Unknown keys and non-callable entries are accepted here and
    /// reported by [`validate_visitor_methods`].
    pub fn entry(mut self, key: &str, entry: impl Into<VisitorEntry<'a>>) -> Self {
        let Some(kind) = NodeKind::from_visitor_key(key) else {
            let err = InvalidVisitorError::UnknownKind(key.to_string());
            self.invalid.push(err);
            return self;
        };
        match entry.into() {
            VisitorEntry::Hooks(hooks) => self.hooks[kind.index()] = hooks,
            VisitorEntry::Value { type_name } => {
                self.invalid.push(InvalidVisitorError::NonFunction {
                    kind: key.to_string(),
                    found: type_name,
                })
            }
        }
        self
    }

    /// Builder: whether to descend below the root (default `true`)
    pub fn visit_child_nodes(mut self, visit: bool) -> Self {
        self.visit_child_nodes = visit;
        self
    }

    /// Enter callback for documents
    pub fn document<F>(self, f: F) -> Self
    where
        F: FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a,
    {
        self.on_enter(NodeKind::Document, f)
    }

    /// Enter callback for document fragments
    pub fn document_fragment<F>(self, f: F) -> Self
    where
        F: FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a,
    {
        self.on_enter(NodeKind::DocumentFragment, f)
    }

    /// Enter callback for doctypes
    pub fn document_type<F>(self, f: F) -> Self
    where
        F: FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a,
    {
        self.on_enter(NodeKind::DocumentType, f)
    }

    /// Enter callback for elements
    pub fn element<F>(self, f: F) -> Self
    where
        F: FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a,
    {
        self.on_enter(NodeKind::Element, f)
    }

    /// Enter callback for comments
    pub fn comment_node<F>(self, f: F) -> Self
    where
        F: FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a,
    {
        self.on_enter(NodeKind::Comment, f)
    }

    /// Enter callback for text nodes
    pub fn text_node<F>(self, f: F) -> Self
    where
        F: FnMut(Node, Option<&Node>) -> anyhow::Result<Node> + 'a,
    {
        self.on_enter(NodeKind::Text, f)
    }

    /// Whether traversal descends below the root
    pub fn descends(&self) -> bool {
        self.visit_child_nodes
    }

    pub(crate) fn callback_mut(
        &mut self,
        kind: NodeKind,
        phase: Phase,
    ) -> Option<&mut Callback<'a>> {
        self.hooks[kind.index()].get_mut(phase)
    }

    /// Whether any callback is registered
    pub fn is_empty(&self) -> bool {
        self.hooks.iter().all(Hooks::is_empty)
    }
}

impl Default for Visitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Visitor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for kind in NodeKind::ENTER_ORDER {
            let hooks = &self.hooks[kind.index()];
            if !hooks.is_empty() {
                map.entry(&kind.visitor_key(), hooks);
            }
        }
        map.finish()
    }
}

/// Check that every registered entry is callable and keyed by a known kind.
///
/// Reports the first problem in registration order.
pub fn validate_visitor_methods(visitor: &Visitor<'_>) -> Result<(), InvalidVisitorError> {
    match visitor.invalid.first() {
        Some(err) => Err(err.clone()),
        None => Ok(()),
    }
}
