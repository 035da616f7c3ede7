//! DOM layer: parse HTML into an rcdom tree and query it structurally.
//!
//! All checklist evaluation and fragment extraction goes through this
//! module instead of pattern-matching on the raw string. The parser is
//! spec-compliant, so malformed markup still yields a usable tree.

use html5ever::ParseOpts;
use html5ever::parse_document;
use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use crate::error::KernelError;

/// Parse an HTML string into a document tree.
///
/// Never fails: the HTML5 parsing algorithm produces a document for any
/// input, inserting the implied `html`/`head`/`body` scaffolding.
pub fn parse(html: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(html)
}

/// Tag name of an element node, lowercase per the parser.
pub fn element_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Value of an attribute on an element node.
pub fn attr(handle: &Handle, attr_name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.as_ref() == attr_name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Pre-order walk over every node under (and including) `handle`.
pub fn walk(handle: &Handle, visit: &mut impl FnMut(&Handle)) {
    visit(handle);
    for child in handle.children.borrow().iter() {
        walk(child, visit);
    }
}

/// First element with the given tag name, document order.
pub fn find_first(root: &Handle, tag: &str) -> Option<Handle> {
    let mut found = None;
    walk(root, &mut |node| {
        if found.is_none() && element_name(node) == Some(tag) {
            found = Some(node.clone());
        }
    });
    found
}

/// Every element with the given tag name, document order.
pub fn find_all(root: &Handle, tag: &str) -> Vec<Handle> {
    let mut found = Vec::new();
    walk(root, &mut |node| {
        if element_name(node) == Some(tag) {
            found.push(node.clone());
        }
    });
    found
}

/// First element whose `id` attribute equals `id`.
pub fn find_by_id(root: &Handle, id: &str) -> Option<Handle> {
    let mut found = None;
    walk(root, &mut |node| {
        if found.is_none() && attr(node, "id").as_deref() == Some(id) {
            found = Some(node.clone());
        }
    });
    found
}

/// Concatenated text content under `handle`, skipping `script` and
/// `style` subtrees.
pub fn text_content(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text(handle, &mut out);
    out
}

fn collect_text(handle: &Handle, out: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => {
            out.push_str(&contents.borrow());
            out.push(' ');
        }
        NodeData::Element { name, .. } => {
            let tag = name.local.as_ref();
            if tag == "script" || tag == "style" {
                return;
            }
        }
        _ => {}
    }
    for child in handle.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// Concatenated text content under `handle` including `script` and
/// `style` subtrees, for inspecting embedded CSS/JSON payloads.
pub fn text_raw(handle: &Handle) -> String {
    let mut out = String::new();
    let mut visit = |node: &Handle| {
        if let NodeData::Text { contents } = &node.data {
            out.push_str(&contents.borrow());
        }
    };
    walk(handle, &mut visit);
    out
}

/// Serialized markup of `handle`'s children (innerHTML).
pub fn inner_html(handle: &Handle) -> Result<String, KernelError> {
    serialize_handle(handle, TraversalScope::ChildrenOnly(None))
}

/// Serialized markup of `handle` itself (outerHTML).
pub fn outer_html(handle: &Handle) -> Result<String, KernelError> {
    serialize_handle(handle, TraversalScope::IncludeNode)
}

fn serialize_handle(handle: &Handle, scope: TraversalScope) -> Result<String, KernelError> {
    let mut buf = Vec::new();
    let serializable = SerializableHandle::from(handle.clone());
    serialize(
        &mut buf,
        &serializable,
        SerializeOpts {
            traversal_scope: scope,
            ..Default::default()
        },
    )
    .map_err(|e| KernelError::Serialize(e.to_string()))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// True when the parsed document carries a doctype node.
///
/// The parser only records a doctype that was present in the source, so
/// this reflects the input rather than parser scaffolding.
pub fn has_doctype(dom: &RcDom) -> bool {
    dom.document
        .children
        .borrow()
        .iter()
        .any(|child| matches!(child.data, NodeData::Doctype { .. }))
}

/// Whitespace-separated word count of the visible text under `handle`.
pub fn word_count(handle: &Handle) -> usize {
    text_content(handle).split_whitespace().count()
}
