//! In-memory PDFs for tests. Each page is identified by the width of its
//! MediaBox, so page order can be checked without decoding content streams.
//! Page N also draws the text "Page N" in a shared Helvetica font.

use lopdf::{content::Content, content::Operation, Dictionary, Document, Object, Stream};

fn media_box(width: i64) -> Object {
    Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(width),
        Object::Integer(792),
    ])
}

fn content_stream(doc: &mut Document, label: &str) -> Object {
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), Object::Integer(12)]),
            Operation::new("Td", vec![Object::Integer(100), Object::Integer(700)]),
            Operation::new(
                "Tj",
                vec![Object::String(label.as_bytes().to_vec(), lopdf::StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ],
    };
    let id = doc.add_object(Stream::new(Dictionary::new(), content.encode().unwrap()));
    Object::Reference(id)
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

fn finish(mut doc: Document, pages_id: lopdf::ObjectId) -> Vec<u8> {
    let catalog = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]);
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));
    save(doc)
}

/// A PDF with `num_pages` pages; page N is 600 + N points wide.
pub fn sample_pdf(num_pages: u32) -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));

    let mut page_ids = Vec::new();
    for n in 1..=num_pages {
        let contents = content_stream(&mut doc, &format!("Page {}", n));
        let resources = Dictionary::from_iter(vec![(
            "Font",
            Object::Dictionary(Dictionary::from_iter(vec![("F1", Object::Reference(font_id))])),
        )]);
        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("MediaBox", media_box(600 + n as i64)),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", contents),
        ]);
        page_ids.push(doc.add_object(page));
    }

    let pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(num_pages as i64)),
        (
            "Kids",
            Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
        ),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    finish(doc, pages_id)
}

/// Three pages under two intermediate Pages nodes that carry the MediaBox:
/// the first node (701 wide) holds two pages, the second (702 wide) one.
pub fn nested_tree_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.7");
    let root_id = doc.new_object_id();
    let mut nodes = Vec::new();

    for (width, kids) in [(701, 2), (702, 1)] {
        let node_id = doc.new_object_id();
        let mut page_ids = Vec::new();
        for _ in 0..kids {
            let page = Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(node_id)),
            ]);
            page_ids.push(doc.add_object(page));
        }
        let node = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Parent", Object::Reference(root_id)),
            ("Count", Object::Integer(kids)),
            ("MediaBox", media_box(width)),
            (
                "Kids",
                Object::Array(page_ids.iter().map(|id| Object::Reference(*id)).collect()),
            ),
        ]);
        doc.objects.insert(node_id, Object::Dictionary(node));
        nodes.push(node_id);
    }

    let root = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(3)),
        (
            "Kids",
            Object::Array(nodes.iter().map(|id| Object::Reference(*id)).collect()),
        ),
    ]);
    doc.objects.insert(root_id, Object::Dictionary(root));

    finish(doc, root_id)
}

/// MediaBox widths of the pages of `bytes`, in page order
pub fn page_widths(bytes: &[u8]) -> Vec<i64> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .values()
        .map(|&id| {
            let page = doc.get_dictionary(id).unwrap();
            let media_box = page.get(b"MediaBox").and_then(Object::as_array).unwrap();
            media_box[2].as_i64().unwrap()
        })
        .collect()
}

/// The string each page draws with `Tj`, in page order
pub fn page_texts(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .values()
        .map(|&id| {
            let content = Content::decode(&doc.get_page_content(id).unwrap()).unwrap();
            let shown = content
                .operations
                .iter()
                .find(|op| op.operator == "Tj")
                .expect("page shows no text");
            match &shown.operands[0] {
                Object::String(text, _) => String::from_utf8_lossy(text).into_owned(),
                other => panic!("Tj operand is not a string: {:?}", other),
            }
        })
        .collect()
}

/// `BaseFont` of the font each page names `F1`, in page order
pub fn page_fonts(bytes: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(bytes).unwrap();
    let as_dict = |obj: &Object| -> Dictionary {
        match obj {
            Object::Reference(id) => doc.get_dictionary(*id).unwrap().clone(),
            Object::Dictionary(dict) => dict.clone(),
            other => panic!("expected a dictionary, got {:?}", other),
        }
    };

    doc.get_pages()
        .values()
        .map(|&id| {
            let page = doc.get_dictionary(id).unwrap();
            let resources = as_dict(page.get(b"Resources").unwrap());
            let fonts = as_dict(resources.get(b"Font").unwrap());
            let font = as_dict(fonts.get(b"F1").unwrap());
            assert!(matches!(font.get(b"Type"), Ok(Object::Name(name)) if name == b"Font"));
            match font.get(b"BaseFont").unwrap() {
                Object::Name(name) => String::from_utf8_lossy(name).into_owned(),
                other => panic!("BaseFont is not a name: {:?}", other),
            }
        })
        .collect()
}
