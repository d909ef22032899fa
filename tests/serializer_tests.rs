use dserializer::{to_string, DObject, Error, Serializer, Variant, VariantType};

fn sample_tree() -> DObject {
    let mut root = DObject::new();
    root.set_item("name", "sample").unwrap();
    root.set_item("ratio", 0.75).unwrap();
    root.set_item("enabled", true).unwrap();

    let owner = root.object_or_default("owner").unwrap();
    owner.set_item("id", 7).unwrap();
    owner
        .object_or_default("address")
        .unwrap()
        .set_item("city", "Oslo")
        .unwrap();

    root.set_item_list(
        "scores",
        vec![Variant::from(10), Variant::from(-2), Variant::from(3.5)],
    )
    .unwrap();

    let mut first = DObject::new();
    first.set_item("sku", "A-1").unwrap();
    let mut second = DObject::new();
    second.set_item("sku", "B-2").unwrap();
    second.set_item_list("tags", vec![]).unwrap();
    root.set_object_list("lines", vec![first, second]).unwrap();

    root
}

#[test]
fn test_spec_example_layout() {
    let mut obj = DObject::new();
    obj.set_item("x", 5).unwrap();
    obj.set_object("y", DObject::with_name("y").unwrap()).unwrap();
    assert_eq!(to_string(&obj).unwrap(), "{\n\t\"x\": 5,\n\t\"y\": {\n\n\t}\n}");
}

#[test]
fn test_full_tree_layout() {
    let expected = concat!(
        "{\n",
        "\t\"enabled\": true,\n",
        "\t\"name\": \"sample\",\n",
        "\t\"ratio\": 0.75,\n",
        "\t\"owner\": {\n",
        "\t\t\"id\": 7,\n",
        "\t\t\"address\": {\n",
        "\t\t\t\"city\": \"Oslo\"\n",
        "\t\t}\n",
        "\t},\n",
        "\t\"scores\": [\n",
        "\t\t10,\n",
        "\t\t-2,\n",
        "\t\t3.5\n",
        "\t],\n",
        "\t\"lines\": [\n",
        "\t\t{\n",
        "\t\t\t\"sku\": \"A-1\"\n",
        "\t\t},\n",
        "\t\t{\n",
        "\t\t\t\"sku\": \"B-2\",\n",
        "\t\t\t\"tags\": [\n",
        "\n",
        "\t\t\t]\n",
        "\t\t}\n",
        "\t]\n",
        "}"
    );
    assert_eq!(to_string(&sample_tree()).unwrap(), expected);
}

#[test]
fn test_output_is_json_matching_serde_view() {
    let tree = sample_tree();
    let text = to_string(&tree).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let via_serde = serde_json::to_value(&tree).unwrap();
    assert_eq!(parsed, via_serde);
}

#[test]
fn test_key_is_written_not_child_name() {
    let mut root = DObject::new();
    root.set_object("key", DObject::with_name("other").unwrap())
        .unwrap();
    let text = to_string(&root).unwrap();
    assert!(text.contains("\"key\": {"));
    assert!(!text.contains("other"));
}

#[test]
fn test_renamed_child_keeps_its_key() {
    let mut root = DObject::new();
    root.object_or_default("before")
        .unwrap()
        .set_object_name("after")
        .unwrap();
    let text = to_string(&root).unwrap();
    assert_eq!(text, "{\n\t\"before\": {\n\n\t}\n}");
    assert_eq!(root.object("before").unwrap().object_name(), "after");
}

#[test]
fn test_strings_are_not_escaped() {
    let mut root = DObject::new();
    root.set_item("quote", "say \"hi\"").unwrap();
    assert_eq!(
        to_string(&root).unwrap(),
        "{\n\t\"quote\": \"say \"hi\"\"\n}"
    );
}

#[test]
fn test_scalar_formatting() {
    let mut root = DObject::new();
    root.set_item_list(
        "values",
        vec![
            Variant::from(""),
            Variant::from(false),
            Variant::from(i64::MIN),
            Variant::from(1.0),
            Variant::from(1e-7),
            Variant::default(),
        ],
    )
    .unwrap();
    let text = to_string(&root).unwrap();
    assert_eq!(
        text,
        format!(
            "{{\n\t\"values\": [\n\t\t\"\",\n\t\tfalse,\n\t\t{},\n\t\t1,\n\t\t0.0000001,\n\t\tnull\n\t]\n}}",
            i64::MIN
        )
    );
}

#[test]
fn test_variant_round_trips_through_items() {
    let mut root = DObject::new();
    root.set_item("s", "text").unwrap();
    root.set_item("b", true).unwrap();
    root.set_item("i", 42).unwrap();
    root.set_item("d", 2.5).unwrap();

    assert_eq!(root["s"].get_type(), VariantType::String);
    assert_eq!(root["s"].as_string().unwrap(), "text");
    assert!(root["b"].as_bool().unwrap());
    assert_eq!(root["i"].as_integer().unwrap(), 42);
    assert_eq!(root["d"].as_double().unwrap(), 2.5);
    assert!(matches!(
        root["i"].as_bool(),
        Err(Error::TypeMismatch { expected: "boolean", found: "integer" })
    ));
}

#[test]
fn test_nested_object_lists_indent() {
    let mut inner = DObject::new();
    inner.set_item("k", 1).unwrap();
    let mut middle = DObject::new();
    middle.set_object_list("inner", vec![inner]).unwrap();
    let mut root = DObject::new();
    root.set_object_list("outer", vec![middle]).unwrap();

    let expected = concat!(
        "{\n",
        "\t\"outer\": [\n",
        "\t\t{\n",
        "\t\t\t\"inner\": [\n",
        "\t\t\t\t{\n",
        "\t\t\t\t\t\"k\": 1\n",
        "\t\t\t\t}\n",
        "\t\t\t]\n",
        "\t\t}\n",
        "\t]\n",
        "}"
    );
    assert_eq!(to_string(&root).unwrap(), expected);
}

#[test]
fn test_serializer_object_at_level() {
    let mut obj = DObject::new();
    obj.set_item("a", 1).unwrap();
    let mut serializer = Serializer::new(Vec::new());
    serializer.write_object(&obj, 2).unwrap();
    let text = String::from_utf8(serializer.into_inner()).unwrap();
    assert_eq!(text, "\t\t{\n\t\t\t\"a\": 1\n\t\t}");
}
