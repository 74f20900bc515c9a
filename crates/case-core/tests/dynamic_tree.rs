use std::cell::RefCell;
use std::rc::Rc;

use case_core::runner::{render_console_tree, HostRunner, InMemoryRunner, RunEventKind};
use case_core::tree::{build_root, iterate};
use case_core::{DynamicContainer, DynamicNode, DynamicTest, NodeSource};
use case_domain::{is_palindrome, EvenNumbersGenerator};

fn palindrome_test(word: &'static str) -> DynamicNode {
    DynamicTest::new(word, move || {
        assert!(is_palindrome(Some(word)));
        Ok(())
    }).into()
}

fn letter_container(input: &'static str) -> DynamicNode {
    let properties = DynamicContainer::new("Properties",
                                           vec![DynamicTest::new("length == 1", move || {
                                                    assert_eq!(input.len(), 1);
                                                    Ok(())
                                                }),
                                                DynamicTest::new("is uppercase", move || {
                                                    assert!(input.chars().all(char::is_uppercase));
                                                    Ok(())
                                                })]);
    let not_null = DynamicTest::new("not null", move || {
        assert!(!input.is_empty());
        Ok(())
    });
    DynamicContainer::new(format!("Container {input}"), vec![DynamicNode::from(not_null), properties.into()]).into()
}

#[test]
fn nested_containers_run_depth_first() {
    let nested: Vec<DynamicNode> = ["A", "B", "C"].into_iter().map(letter_container).collect();
    let root = build_root("dynamicTestsWithContainers()", NodeSource::stream(nested));
    let mut runner = InMemoryRunner::new();
    let summary = runner.run(root.into());
    assert_eq!(summary.passed, 9);
    let containers = runner.events().iter().filter(|e| e.kind == RunEventKind::ContainerStarted).count();
    assert_eq!(containers, 7);
}

#[test]
fn generators_are_pulled_only_as_the_runner_advances() {
    let produced = Rc::new(RefCell::new(Vec::new()));
    let log = produced.clone();
    let executed = Rc::new(RefCell::new(Vec::new()));
    let seen = executed.clone();
    let mut stream = DynamicTest::stream(iterate(1, |n: &i32| *n < 10, |n| n + 2),
                                     move |n| {
                                         log.borrow_mut().push(*n);
                                         format!("test with {n}")
                                     },
                                     move |n| {
                                         seen.borrow_mut().push(n);
                                         Ok(())
                                     });
    let first = stream.next().expect("first").expect("node");
    assert_eq!(first.name().as_str(), "test with 1");
    assert_eq!(*produced.borrow(), vec![1]);
    let rest = DynamicContainer::from_stream("iterate", stream);
    InMemoryRunner::new().run(rest.into());
    assert_eq!(*produced.borrow(), vec![1, 3, 5, 7, 9]);
    assert_eq!(*executed.borrow(), vec![3, 5, 7, 9]);
}

#[test]
fn even_number_generator_drives_named_tests() {
    let stream = DynamicTest::stream(EvenNumbersGenerator::new(), |n| format!("input: {n}"), |n| {
        assert_eq!(n % 2, 0);
        Ok(())
    });
    let mut runner = InMemoryRunner::new();
    let summary = runner.run(DynamicContainer::from_stream("dynamicNumberOfTests()", stream).into());
    assert_eq!(summary.passed, 5);
    let tree = render_console_tree(runner.events());
    assert!(tree.contains("├─ input: 0 ✔"));
    assert!(tree.contains("└─ input: 8 ✔"));
}

#[test]
fn single_nodes_and_collections_build_the_same_tree() {
    let single = build_root("singleDynamicNode()", palindrome_test("pop").into());
    let collection = build_root("dynamicTestsFromCollection()", vec![palindrome_test("mom"), palindrome_test("dad")].into());
    let mut runner = InMemoryRunner::new();
    assert_eq!(runner.run(single.into()).passed, 1);
    assert_eq!(runner.run(collection.into()).passed, 2);
}
