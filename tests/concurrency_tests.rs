//! Documents carry no shared state: independent parses on different threads
//! agree, and sealed documents can be shared across threads.

use std::sync::Arc;
use std::thread;

use hyperjson::{Document, ParseConfig, parse_str};

const TEXT: &str = r#"{"users": {"collection": [{"name": "amy"}, {"name": "bob"}]}, "href": "/?b=2&a=1"}"#;

#[test]
fn concurrent_parses_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                parse_str(TEXT, "http://h", &ParseConfig::default()).expect("parse succeeds")
            })
        })
        .collect();

    let results: Vec<Document> = handles
        .into_iter()
        .map(|h| h.join().expect("thread completes"))
        .collect();

    let first = &results[0];
    for (i, doc) in results.iter().enumerate().skip(1) {
        assert_eq!(first.hash(), doc.hash(), "thread {i} produced a different hash");
        assert_eq!(first.links(), doc.links(), "thread {i} produced different links");
    }
}

#[test]
fn sealed_document_is_shareable() {
    let doc = Arc::new(parse_str(TEXT, "http://h", &ParseConfig::default()).expect("parses"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let doc = Arc::clone(&doc);
            thread::spawn(move || doc.root()["users"]["collection"].href().map(str::to_owned))
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().expect("thread completes").as_deref(),
            Some("http://h#/users")
        );
    }
}
