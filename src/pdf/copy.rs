use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guards against malformed page trees whose `Parent` links form a cycle.
const MAX_TREE_DEPTH: usize = 64;

/// Deep-copies pages from one document into another under fresh object ids.
///
/// Objects reached from a copied page are remembered, so two pages sharing a
/// font through the same copier share it in the target too. Page objects
/// themselves are never shared: copying the same page twice yields two pages.
pub(crate) struct PageCopier<'a> {
    src: &'a Document,
    dst: &'a mut Document,
    copied: HashMap<ObjectId, ObjectId>,
}

impl<'a> PageCopier<'a> {
    pub(crate) fn new(src: &'a Document, dst: &'a mut Document) -> Self {
        PageCopier {
            src,
            dst,
            copied: HashMap::new(),
        }
    }

    /// Copy one page and return its id in the target. The copy has no `Parent`;
    /// the caller attaches it to the target's page tree.
    pub(crate) fn copy_page(&mut self, page_id: ObjectId) -> lopdf::Result<ObjectId> {
        let src = self.src;
        let mut page = src.get_dictionary(page_id)?.clone();

        for key in INHERITABLE {
            if page.has(key) {
                continue;
            }
            if let Some(value) = inherited_attribute(src, &page, key) {
                page.set(key, value.clone());
            }
        }
        page.remove(b"Parent");

        let new_id = self.dst.new_object_id();
        // Back-references from the page's own annotations (`/P`) land on the copy.
        self.copied.insert(page_id, new_id);
        let page = self.copy_dictionary(&page);
        self.copied.remove(&page_id);

        self.dst.objects.insert(new_id, Object::Dictionary(page));
        Ok(new_id)
    }

    fn copy_object(&mut self, obj: &Object) -> Object {
        match obj {
            Object::Reference(id) => self.copy_reference(*id),
            Object::Array(items) => {
                Object::Array(items.iter().map(|item| self.copy_object(item)).collect())
            }
            Object::Dictionary(dict) => Object::Dictionary(self.copy_dictionary(dict)),
            Object::Stream(stream) => {
                let mut stream = stream.clone();
                stream.dict = self.copy_dictionary(&stream.dict);
                Object::Stream(stream)
            }
            other => other.clone(),
        }
    }

    fn copy_dictionary(&mut self, dict: &Dictionary) -> Dictionary {
        let mut copy = Dictionary::new();
        for (key, value) in dict.iter() {
            copy.set(key.clone(), self.copy_object(value));
        }
        copy
    }

    fn copy_reference(&mut self, id: ObjectId) -> Object {
        if let Some(&new_id) = self.copied.get(&id) {
            return Object::Reference(new_id);
        }

        let src = self.src;
        let obj = match src.get_object(id) {
            Ok(obj) => obj,
            // Dangling reference: PDF readers treat these as null.
            Err(_) => return Object::Null,
        };

        // Link destinations and similar point at other pages; following them
        // would pull the rest of the source document into the output.
        if is_page_tree_node(obj) {
            return Object::Null;
        }

        let new_id = self.dst.new_object_id();
        self.copied.insert(id, new_id);
        let copy = self.copy_object(obj);
        self.dst.objects.insert(new_id, copy);
        Object::Reference(new_id)
    }
}

fn inherited_attribute<'a>(doc: &'a Document, page: &Dictionary, key: &[u8]) -> Option<&'a Object> {
    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();

    for _ in 0..MAX_TREE_DEPTH {
        let node = doc.get_dictionary(parent?).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value);
        }
        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
    }

    None
}

fn is_page_tree_node(obj: &Object) -> bool {
    match obj {
        Object::Dictionary(dict) => matches!(
            dict.get(b"Type"),
            Ok(Object::Name(name)) if name.as_slice() == b"Page" || name.as_slice() == b"Pages"
        ),
        _ => false,
    }
}
