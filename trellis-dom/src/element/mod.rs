mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements().iter().find_map(|child| find_element(child, id))
}

/// Mutable variant of [`find_element`].
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    match &mut root.content {
        Content::Children(children) => children
            .iter_mut()
            .find_map(|child| find_element_mut(child, id)),
        _ => None,
    }
}

/// Collect every element whose data attribute `key` equals `value`, in tree order.
pub fn find_by_data<'a>(root: &'a Element, key: &str, value: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_data(root, key, value, &mut found);
    found
}

fn collect_by_data<'a>(el: &'a Element, key: &str, value: &str, out: &mut Vec<&'a Element>) {
    if el.get_data(key) == Some(value) {
        out.push(el);
    }
    for child in el.child_elements() {
        collect_by_data(child, key, value, out);
    }
}
