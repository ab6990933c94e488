//! Line-tracking tree sink
//!
//! Wraps html5ever's `RcDom` and remembers, for every element, comment and
//! text run it creates, the tokenizer line current at the time.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use html5ever::interface::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::tendril::StrTendril;
use html5ever::{Attribute, ExpandedName, QualName};
use markup5ever_rcdom::{Handle, Node as RcNode, NodeData, RcDom};
use sprig_dom::SourceLocation;

/// Recorded locations, keyed by rcdom node identity.
///
/// Each entry keeps its handle alive so addresses are never reused while
/// the table exists.
#[derive(Default)]
pub(crate) struct Locations(HashMap<*const RcNode, (Handle, SourceLocation)>);

impl Locations {
    pub(crate) fn get(&self, handle: &Handle) -> Option<SourceLocation> {
        self.0.get(&Rc::as_ptr(handle)).map(|(_, location)| *location)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

/// What a parse produced
pub(crate) struct Tracked {
    pub dom: RcDom,
    pub quirks_mode: QuirksMode,
    pub locations: Locations,
    pub error_count: usize,
}

pub(crate) struct LocationSink {
    dom: RcDom,
    line: Cell<u64>,
    quirks_mode: Cell<QuirksMode>,
    locations: RefCell<Locations>,
    error_count: Cell<usize>,
}

impl LocationSink {
    pub(crate) fn new() -> Self {
        Self {
            dom: RcDom::default(),
            // The tree builder only reports line changes, starting from 1
            line: Cell::new(1),
            quirks_mode: Cell::new(QuirksMode::NoQuirks),
            locations: RefCell::new(Locations::default()),
            error_count: Cell::new(0),
        }
    }

    fn record(&self, handle: &Handle) {
        self.record_at(handle, self.line.get());
    }

    /// Record a node whose token was reported after `newlines` line breaks
    /// of its own content had been consumed.
    fn record_spanning(&self, handle: &Handle, newlines: usize) {
        let line = self.line.get().saturating_sub(newlines as u64).max(1);
        self.record_at(handle, line);
    }

    fn record_at(&self, handle: &Handle, start_line: u64) {
        let location = SourceLocation { start_line };
        self.locations
            .borrow_mut()
            .0
            .insert(Rc::as_ptr(handle), (handle.clone(), location));
    }

    /// Record a text node the first time it is seen; merged runs keep
    /// the line where they started.
    ///
    /// At that point the node holds only the first appended chunk, and the
    /// current line is already past any line breaks in it.
    fn record_text(&self, handle: &Handle) {
        let NodeData::Text { contents } = &handle.data else {
            return;
        };
        if self.locations.borrow().get(handle).is_some() {
            return;
        }
        let newlines = contents.borrow().matches('\n').count();
        self.record_spanning(handle, newlines);
    }

    fn record_last_child_text(&self, parent: &Handle) {
        let last = parent.children.borrow().last().cloned();
        if let Some(last) = last {
            self.record_text(&last);
        }
    }
}

fn parent_of(handle: &Handle) -> Option<Handle> {
    let weak = handle.parent.take();
    let parent = weak.as_ref().and_then(|w| w.upgrade());
    handle.parent.set(weak);
    parent
}

impl TreeSink for LocationSink {
    type Handle = Handle;
    type Output = Tracked;
    type ElemName<'a>
        = ExpandedName<'a>
    where
        Self: 'a;

    fn finish(self) -> Tracked {
        Tracked {
            dom: self.dom,
            quirks_mode: self.quirks_mode.get(),
            locations: self.locations.into_inner(),
            error_count: self.error_count.get(),
        }
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        tracing::trace!(line = self.line.get(), "HTML parse error: {}", msg);
        self.error_count.set(self.error_count.get() + 1);
        self.dom.parse_error(msg);
    }

    fn set_current_line(&self, line_number: u64) {
        self.line.set(line_number);
    }

    fn get_document(&self) -> Handle {
        self.dom.get_document()
    }

    fn elem_name<'a>(&'a self, target: &'a Handle) -> ExpandedName<'a> {
        self.dom.elem_name(target)
    }

    fn create_element(&self, name: QualName, attrs: Vec<Attribute>, flags: ElementFlags) -> Handle {
        let handle = self.dom.create_element(name, attrs, flags);
        self.record(&handle);
        handle
    }

    fn create_comment(&self, text: StrTendril) -> Handle {
        // Comment tokens are reported once `-->` has been read
        let newlines = text.matches('\n').count();
        let handle = self.dom.create_comment(text);
        self.record_spanning(&handle, newlines);
        handle
    }

    fn create_pi(&self, target: StrTendril, data: StrTendril) -> Handle {
        self.dom.create_pi(target, data)
    }

    fn append(&self, parent: &Handle, child: NodeOrText<Handle>) {
        let is_text = matches!(child, NodeOrText::AppendText(_));
        self.dom.append(parent, child);
        if is_text {
            self.record_last_child_text(parent);
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Handle,
        prev_element: &Handle,
        child: NodeOrText<Handle>,
    ) {
        if parent_of(element).is_some() {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        name: StrTendril,
        public_id: StrTendril,
        system_id: StrTendril,
    ) {
        self.dom.append_doctype_to_document(name, public_id, system_id);
    }

    fn mark_script_already_started(&self, node: &Handle) {
        self.dom.mark_script_already_started(node);
    }

    fn get_template_contents(&self, target: &Handle) -> Handle {
        self.dom.get_template_contents(target)
    }

    fn same_node(&self, x: &Handle, y: &Handle) -> bool {
        self.dom.same_node(x, y)
    }

    fn set_quirks_mode(&self, mode: QuirksMode) {
        self.quirks_mode.set(mode);
        self.dom.set_quirks_mode(mode);
    }

    fn append_before_sibling(&self, sibling: &Handle, new_node: NodeOrText<Handle>) {
        let is_text = matches!(new_node, NodeOrText::AppendText(_));
        self.dom.append_before_sibling(sibling, new_node);
        if !is_text {
            return;
        }
        // The text run now sits right before `sibling`
        let Some(parent) = parent_of(sibling) else {
            return;
        };
        let previous = {
            let children = parent.children.borrow();
            children
                .iter()
                .position(|child| Rc::ptr_eq(child, sibling))
                .and_then(|i| i.checked_sub(1))
                .map(|i| children[i].clone())
        };
        if let Some(previous) = previous {
            self.record_text(&previous);
        }
    }

    fn add_attrs_if_missing(&self, target: &Handle, attrs: Vec<Attribute>) {
        self.dom.add_attrs_if_missing(target, attrs);
    }

    fn remove_from_parent(&self, target: &Handle) {
        self.dom.remove_from_parent(target);
    }

    fn reparent_children(&self, node: &Handle, new_parent: &Handle) {
        self.dom.reparent_children(node, new_parent);
    }

    fn is_mathml_annotation_xml_integration_point(&self, handle: &Handle) -> bool {
        self.dom.is_mathml_annotation_xml_integration_point(handle)
    }
}

#[cfg(test)]
mod tests {
    use html5ever::parse_document;
    use html5ever::tendril::TendrilSink;

    use super::*;

    fn find(handle: &Handle, tag: &str) -> Option<Handle> {
        if let NodeData::Element { name, .. } = &handle.data {
            if &*name.local == tag {
                return Some(handle.clone());
            }
        }
        handle
            .children
            .borrow()
            .iter()
            .find_map(|child| find(child, tag))
    }

    #[test]
    fn test_records_element_lines() {
        let html =
            "<!DOCTYPE html>\n<html>\n<body>\n<p>one</p>\n<div>\ntwo\n</div>\n</body>\n</html>";
        let tracked = parse_document(LocationSink::new(), Default::default()).one(html);

        let p = find(&tracked.dom.document, "p").unwrap();
        let div = find(&tracked.dom.document, "div").unwrap();
        assert_eq!(tracked.locations.get(&p).map(|l| l.start_line), Some(4));
        assert_eq!(tracked.locations.get(&div).map(|l| l.start_line), Some(5));

        let text = div.children.borrow()[0].clone();
        assert_eq!(tracked.locations.get(&text).map(|l| l.start_line), Some(5));
    }

    #[test]
    fn test_records_text_once_per_run() {
        let tracked = parse_document(LocationSink::new(), Default::default()).one("<p>a&amp;b</p>");
        let p = find(&tracked.dom.document, "p").unwrap();
        let children = p.children.borrow();
        assert_eq!(children.len(), 1);
        assert!(tracked.locations.get(&children[0]).is_some());
    }

    #[test]
    fn test_text_run_keeps_its_first_line() {
        let html = "<p>\n\n\nlate</p>";
        let tracked = parse_document(LocationSink::new(), Default::default()).one(html);

        let p = find(&tracked.dom.document, "p").unwrap();
        let text = p.children.borrow()[0].clone();
        assert_eq!(tracked.locations.get(&text).map(|l| l.start_line), Some(1));
    }

    #[test]
    fn test_multiline_comment_keeps_its_first_line() {
        let html = "<body>\n<!-- one\ntwo\nthree -->\n</body>";
        let tracked = parse_document(LocationSink::new(), Default::default()).one(html);

        let body = find(&tracked.dom.document, "body").unwrap();
        let comment = body
            .children
            .borrow()
            .iter()
            .find(|child| matches!(child.data, NodeData::Comment { .. }))
            .cloned()
            .unwrap();
        assert_eq!(tracked.locations.get(&comment).map(|l| l.start_line), Some(2));
    }

    #[test]
    fn test_counts_parse_errors() {
        let tracked = parse_document(LocationSink::new(), Default::default()).one("<p>no doctype");
        assert!(tracked.error_count > 0);
        assert_eq!(tracked.quirks_mode, QuirksMode::Quirks);
    }
}
