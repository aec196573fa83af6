use std::io::Write;

use hyperjson::{HyperJsonError, Link, ParseConfig, parse_reader};

#[test]
fn full_pipeline_from_file() -> Result<(), HyperJsonError> {
    let mut file = tempfile::NamedTempFile::new().map_err(|e| HyperJsonError::Io(e.to_string()))?;
    write!(
        file,
        r##"{{
            "href": "/api?v=2&lang=en",
            "users": {{
                "collection": [
                    {{"href": "#/users/0", "name": "amy", "roles": ["admin"]}},
                    {{"name": "bob", "roles": []}}
                ]
            }},
            "meta": {{"data": {{"count": 2}}}}
        }}"##
    )
    .map_err(|e| HyperJsonError::Io(e.to_string()))?;

    let reader = std::fs::File::open(file.path()).map_err(|e| HyperJsonError::Io(e.to_string()))?;
    let doc = parse_reader(reader, "http://api.example.com", &ParseConfig::default())?;

    assert_eq!(doc.href(), Some("/api?lang=en&v=2"));
    assert!(doc.diagnostics().is_empty());
    assert_eq!(doc.synthesized_count(), 2);

    let links = doc.links();
    assert_eq!(
        links,
        vec![
            Link {
                pointer: "/meta/data".into(),
                href: "http://api.example.com#/meta".into(),
                synthesized: true,
            },
            Link {
                pointer: "/users/collection/0".into(),
                href: "http://api.example.com#/users/0".into(),
                synthesized: false,
            },
            Link {
                pointer: "/users/collection".into(),
                href: "http://api.example.com#/users".into(),
                synthesized: true,
            },
            Link {
                pointer: String::new(),
                href: "/api?lang=en&v=2".into(),
                synthesized: false,
            },
        ]
    );

    // Every node in the tree is sealed.
    for link in &links {
        let node = doc.root().pointer(&link.pointer).expect("link points into tree");
        assert!(node.is_sealed());
    }
    assert!(doc.root()["users"]["collection"][1]["roles"].is_sealed());

    Ok(())
}

#[test]
fn sealed_document_round_trips_to_json() -> Result<(), HyperJsonError> {
    let text = r##"{"href":"#/me","items":[1,2.5,"three",null,false],"nested":{"data":{}}}"##;
    let doc = hyperjson::parse_str(text, "http://h", &ParseConfig::default())?;

    let json = serde_json::to_value(doc.root()).map_err(|e| HyperJsonError::Parse(e.to_string()))?;
    assert_eq!(
        json,
        serde_json::json!({
            "href": "http://h#/me",
            "items": [1, 2.5, "three", null, false],
            "nested": {"data": {}}
        })
    );
    assert_eq!(json, doc.root().to_json());
    Ok(())
}
