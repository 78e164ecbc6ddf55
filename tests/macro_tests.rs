//! Tests for the `reflect!` and `opaque!` registration macros.

use reflected::{
    all_fields, opaque, reflect, to_json_value, to_normal_string, Introspect, Reflected, Shape,
};

struct Root {
    id: i64,
}

struct Middle {
    root: Root,
    label: String,
}

struct Leaf {
    middle: Middle,
    weight: f64,
}

reflect!(Root { id });
reflect!(Middle: root { label });
reflect!(Leaf: middle { weight });

struct Coord(i64, i64);
reflect!(Coord(0, 1));

struct Widget;
opaque!(Widget);

fn leaf() -> Leaf {
    Leaf {
        middle: Middle {
            root: Root { id: 1 },
            label: "mid".to_string(),
        },
        weight: 0.5,
    }
}

#[test]
fn own_field_count_matches_declaration() {
    let root = Root { id: 1 };
    assert_eq!(root.own_fields().len(), 1);
    assert_eq!(all_fields(&root).len(), 1);
}

#[test]
fn field_labels_follow_declaration_order() {
    let labels: Vec<_> = all_fields(&leaf())
        .into_iter()
        .map(|f| f.label.unwrap())
        .collect();
    assert_eq!(labels, vec!["weight", "label", "id"]);
}

#[test]
fn concatenation_law_holds_transitively() {
    let value = leaf();

    let mut expected = value.own_fields();
    expected.extend(all_fields(&value.middle));
    assert_eq!(all_fields(&value), expected);

    let mut expected = value.middle.own_fields();
    expected.extend(all_fields(&value.middle.root));
    assert_eq!(all_fields(&value.middle), expected);
}

#[test]
fn type_name_is_the_declared_ident() {
    assert_eq!(leaf().type_name(), "Leaf");
    assert_eq!(Coord(0, 0).type_name(), "Coord");
}

#[test]
fn chain_renders_nearest_ancestor_first() {
    assert_eq!(
        to_normal_string(&leaf()),
        "Leaf(weight: 0.5, label: \"mid\", id: 1)"
    );
}

#[test]
fn tuple_struct_renders_positionally() {
    assert_eq!(to_normal_string(&Coord(3, 4)), "Coord(3, 4)");
}

#[test]
fn tuple_struct_positional_fields_have_no_json_keys() {
    // No labeled fields, so the object is empty.
    let value = to_json_value(&Coord(3, 4));
    assert_eq!(value.as_object().map(|o| o.len()), Some(0));
}

#[test]
fn opaque_macro_uses_fully_qualified_name() {
    match Widget.shape() {
        Shape::Opaque(description) => {
            assert_eq!(description, std::any::type_name::<Widget>());
            assert!(description.ends_with("Widget"));
        }
        other => panic!("expected opaque shape, got {:?}", other),
    }
}

#[test]
fn composite_wins_over_any_other_classification() {
    // A reflected type containing only collections still classifies as a
    // composite, never as a sequence.
    struct Bag {
        items: Vec<i64>,
    }
    reflect!(Bag { items });

    let shape = Bag { items: vec![1] }.shape();
    assert!(matches!(shape, Shape::Composite { .. }));
}
