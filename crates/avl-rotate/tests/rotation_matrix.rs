use avl_rotate::fixtures::{
    balanced, left_heavy, left_middle_heavy, right_heavy, right_middle_heavy,
};
use avl_rotate::{
    deep_copy, double_left, double_right, single_left, single_right, try_double_left,
    try_double_right, Node,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn data<T: Copy>(n: Option<&Node<T>>) -> Option<T> {
    n.map(|n| n.data)
}

#[test]
fn fixture_scenarios_matrix() {
    init_tracing();

    assert_eq!(single_left(right_heavy(), None), balanced());
    assert_eq!(single_right(left_heavy(), None), balanced());
    assert_eq!(double_left(right_middle_heavy(), None, None), balanced());
    assert_eq!(double_right(left_middle_heavy(), None, None), balanced());
}

#[test]
fn single_left_then_right_restores_shape_matrix() {
    let original = Box::new(
        Node::new(2)
            .with_left(Node::new(1))
            .with_right(Node::new(4).with_left(Node::new(3)).with_right(Node::new(5))),
    );
    let snapshot = deep_copy(Some(&*original)).unwrap();

    let b = single_left(original, None);
    assert_eq!(b.data, 4);
    let a = b.left().unwrap();
    assert_eq!(a.data, 2);
    assert_eq!(data(a.right()), Some(3));
    assert_eq!(data(a.left()), Some(1));
    assert_eq!(data(b.right()), Some(5));

    let restored = single_right(b, None);
    assert_eq!(restored, snapshot);
}

#[test]
fn noop_preserves_identity_matrix() {
    let a = Box::new(Node::new('a').with_left(Node::new('z')));
    let ptr: *const Node<char> = &*a;
    let out = single_left(a, None);
    assert!(std::ptr::eq(ptr, &*out));
    assert_eq!(data(out.left()), Some('z'));

    let c = Box::new(Node::new('c').with_right(Node::new('d')));
    let ptr: *const Node<char> = &*c;
    let out = single_right(c, None);
    assert!(std::ptr::eq(ptr, &*out));

    let a = Node::leaf('a');
    let ptr: *const Node<char> = &*a;
    let mut calls = 0;
    let mut hook = |_: &mut Node<char>, _: &mut Node<char>| calls += 1;
    let out = double_left(a, Some(&mut hook), None);
    assert!(std::ptr::eq(ptr, &*out));
    let out = double_right(out, None, Some(&mut hook));
    assert!(std::ptr::eq(ptr, &*out));
    assert_eq!(calls, 0);
}

#[test]
fn double_left_equals_manual_composition_matrix() {
    let build = || {
        Box::new(
            Node::new(10).with_left(Node::new(5)).with_right(
                Node::new(30)
                    .with_left(Node::new(20).with_left(Node::new(15)).with_right(Node::new(25)))
                    .with_right(Node::new(35)),
            ),
        )
    };

    let via_double = double_left(build(), None, None);

    let mut manual = build();
    let right = manual.right.take().unwrap();
    manual.right = Some(single_right(right, None));
    let manual = single_left(manual, None);

    assert_eq!(via_double, manual);
    assert_eq!(via_double.data, 20);
}

#[test]
fn double_right_equals_manual_composition_matrix() {
    let build = || {
        Box::new(
            Node::new(30)
                .with_left(
                    Node::new(10)
                        .with_left(Node::new(5))
                        .with_right(Node::new(20).with_left(Node::new(15)).with_right(Node::new(25))),
                )
                .with_right(Node::new(35)),
        )
    };

    let via_double = double_right(build(), None, None);

    let mut manual = build();
    let left = manual.left.take().unwrap();
    manual.left = Some(single_left(left, None));
    let manual = single_right(manual, None);

    assert_eq!(via_double, manual);
    assert_eq!(via_double.data, 20);
}

#[test]
fn double_rotation_with_missing_grandchild_runs_outer_step_matrix() {
    // Inner right rotation has no pivot; the outer left rotation still runs.
    let mut log = Vec::new();
    let mut on_left = |p: &mut Node<&'static str>, c: &mut Node<&'static str>| {
        log.push(("left", p.data, c.data))
    };
    let root = double_left(right_heavy(), Some(&mut on_left), None);
    assert_eq!(root, balanced());
    assert_eq!(log, vec![("left", "a", "b")]);
}

#[test]
fn hook_order_and_arguments_matrix() {
    let mut log: Vec<(&str, &str, &str)> = Vec::new();

    {
        let mut on_left = |p: &mut Node<&'static str>, c: &mut Node<&'static str>| {
            log.push(("left", p.data, c.data))
        };
        single_left(right_heavy(), Some(&mut on_left));
    }
    {
        let mut on_right = |c: &mut Node<&'static str>, p: &mut Node<&'static str>| {
            log.push(("right", c.data, p.data))
        };
        single_right(left_heavy(), Some(&mut on_right));
    }
    assert_eq!(log, vec![("left", "a", "b"), ("right", "b", "c")]);

    let events = std::cell::RefCell::new(Vec::new());
    let mut on_left = |p: &mut Node<&'static str>, c: &mut Node<&'static str>| {
        events.borrow_mut().push(("left", p.data, c.data))
    };
    let mut on_right = |c: &mut Node<&'static str>, p: &mut Node<&'static str>| {
        events.borrow_mut().push(("right", c.data, p.data))
    };
    double_left(right_middle_heavy(), Some(&mut on_left), Some(&mut on_right));
    double_right(left_middle_heavy(), Some(&mut on_left), Some(&mut on_right));
    assert_eq!(
        events.into_inner(),
        vec![
            ("right", "b", "c"),
            ("left", "a", "b"),
            ("left", "a", "b"),
            ("right", "b", "c"),
        ]
    );
}

#[test]
fn hook_may_update_payload_matrix() {
    #[derive(Debug, PartialEq)]
    struct Tagged {
        key: u8,
        rotations: u8,
    }

    let node = |key| Node::new(Tagged { key, rotations: 0 });
    let root = Box::new(node(1).with_right(node(2).with_right(node(3))));
    let root = single_left(
        root,
        Some(&mut |p: &mut Node<Tagged>, c: &mut Node<Tagged>| {
            p.data.rotations += 1;
            c.data.rotations += 1;
        }),
    );
    assert_eq!(root.data, Tagged { key: 2, rotations: 1 });
    assert_eq!(root.left().unwrap().data, Tagged { key: 1, rotations: 1 });
    assert_eq!(root.right().unwrap().data, Tagged { key: 3, rotations: 0 });
}

#[test]
fn fallible_hooks_matrix() {
    // Inner step fails: nothing has moved.
    let mut fail = |_: &mut Node<&'static str>, _: &mut Node<&'static str>| Err::<(), _>("inner");
    let err = try_double_left(right_middle_heavy(), None, Some(&mut fail)).unwrap_err();
    assert_eq!(err.to_string(), "rotation hook failed");
    let (root, source) = err.into_parts();
    assert_eq!(source, "inner");
    assert_eq!(root, right_middle_heavy());

    // Outer step fails: the inner rotation is already applied.
    let mut fail = |_: &mut Node<&'static str>, _: &mut Node<&'static str>| Err::<(), _>("outer");
    let err = try_double_right(left_middle_heavy(), None, Some(&mut fail)).unwrap_err();
    let expected = Box::new(Node::new("c").with_left(Node::new("b").with_left(Node::new("a"))));
    assert_eq!(err.root, expected);

    let mut ok = |_: &mut Node<&'static str>, _: &mut Node<&'static str>| Ok::<(), &str>(());
    let root = try_double_right(left_middle_heavy(), Some(&mut ok), None).unwrap();
    assert_eq!(root, balanced());
}

#[test]
fn fallible_hook_error_exposes_source_matrix() {
    use std::error::Error as _;

    #[derive(Debug, thiserror::Error)]
    #[error("bad balance")]
    struct BadBalance;

    let mut fail = |_: &mut Node<u8>, _: &mut Node<u8>| Err::<(), _>(BadBalance);
    let root = Box::new(Node::new(1).with_right(Node::new(2)));
    let err = avl_rotate::try_single_left(root, Some(&mut fail)).unwrap_err();
    assert_eq!(err.source().map(|s| s.to_string()), Some("bad balance".to_string()));
}
