    use super::*;

    fn doc(path: &str) -> Node {
        Node {
            path: path.to_string(),
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            kind: NodeKind::Document,
            depth: 0,
            expanded: false,
            has_children: true,
        }
    }

    fn coll(path: &str) -> Node {
        Node {
            kind: NodeKind::Collection,
            ..doc(path)
        }
    }

    fn paths(tree: &TreeModel) -> Vec<(&str, usize)> {
        tree.nodes()
            .iter()
            .map(|n| (n.path.as_str(), n.depth))
            .collect()
    }

    fn sample() -> TreeModel {
        let mut tree = TreeModel::default();
        tree.replace(vec![doc("users/a"), doc("users/b"), doc("users/c")]);
        tree
    }

    #[test]
    fn expand_splices_children_one_level_deeper() {
        let mut tree = sample();
        assert!(tree.expand(1, vec![coll("users/b/orders"), coll("users/b/tags")]));
        assert_eq!(
            paths(&tree),
            vec![
                ("users/a", 0),
                ("users/b", 0),
                ("users/b/orders", 1),
                ("users/b/tags", 1),
                ("users/c", 0),
            ]
        );
        assert!(tree.get(1).is_some_and(|n| n.expanded));
        assert!(tree.is_well_formed());
    }

    #[test]
    fn collapse_removes_whole_subtree_and_nothing_else() {
        let mut tree = sample();
        tree.expand(1, vec![coll("users/b/orders")]);
        tree.expand(2, vec![doc("users/b/orders/o1"), doc("users/b/orders/o2")]);
        tree.expand(0, vec![coll("users/a/logs")]);
        assert!(tree.is_well_formed());
        assert_eq!(tree.nodes.len(), 7);

        let b = tree.index_of("users/b").expect("users/b present");
        assert_eq!(tree.collapse(b), 3);
        assert_eq!(
            paths(&tree),
            vec![
                ("users/a", 0),
                ("users/a/logs", 1),
                ("users/b", 0),
                ("users/c", 0),
            ]
        );
        assert!(!tree.get(b).is_some_and(|n| n.expanded));
        assert!(tree.is_well_formed());
    }

    #[test]
    fn expand_then_collapse_restores_the_tree() {
        let mut tree = sample();
        tree.expand(2, vec![coll("users/c/pets")]);
        let snapshot = tree.clone();

        let b = tree.index_of("users/b").expect("users/b present");
        tree.expand(b, vec![coll("users/b/orders"), coll("users/b/tags")]);
        tree.expand(b + 1, vec![doc("users/b/orders/o1")]);
        tree.expand(b + 2, vec![coll("users/b/orders/o1/items")]);
        assert_ne!(tree, snapshot);

        assert_eq!(tree.collapse(b), 4);
        assert_eq!(tree, snapshot);
        assert!(tree.is_well_formed());
    }

    #[test]
    fn expanding_twice_does_not_duplicate_children() {
        let mut tree = sample();
        tree.expand(0, vec![coll("users/a/x")]);
        tree.expand(0, vec![coll("users/a/x"), coll("users/a/y")]);
        assert_eq!(
            paths(&tree),
            vec![
                ("users/a", 0),
                ("users/a/x", 1),
                ("users/a/y", 1),
                ("users/b", 0),
                ("users/c", 0),
            ]
        );
    }

    #[test]
    fn expanding_with_no_children_leaves_node_collapsed() {
        let mut tree = sample();
        assert!(tree.expand(2, Vec::new()));
        assert!(!tree.get(2).is_some_and(|n| n.expanded));
        assert_eq!(tree.nodes.len(), 3);
        assert!(tree.is_well_formed());
        assert!(!tree.expand(9, vec![doc("nope")]));
        assert_eq!(tree.collapse(9), 0);
    }

    #[test]
    fn query_replace_top_level_or_under_a_node() {
        let mut tree = sample();
        tree.expand(0, vec![coll("users/a/orders")]);

        tree.query_replace(Some(1), vec![doc("users/a/orders/q1")]);
        assert_eq!(
            paths(&tree),
            vec![
                ("users/a", 0),
                ("users/a/orders", 1),
                ("users/a/orders/q1", 2),
                ("users/b", 0),
                ("users/c", 0),
            ]
        );

        tree.query_replace(None, vec![doc("users/z")]);
        assert_eq!(paths(&tree), vec![("users/z", 0)]);
        assert!(tree.is_well_formed());
    }

    #[test]
    fn well_formed_rejects_depth_jumps_and_stale_expanded_flags() {
        let mut tree = sample();
        tree.expand(0, vec![doc("users/a/x")]);
        let mut broken = tree.clone();
        broken.nodes[1].depth = 2;
        assert!(!broken.is_well_formed());

        let mut broken = tree.clone();
        broken.nodes[2].expanded = true;
        assert!(!broken.is_well_formed());

        let mut broken = tree;
        broken.nodes[0].depth = 1;
        assert!(!broken.is_well_formed());
    }
