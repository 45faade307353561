use day8::{ClusterEngine, Connection, Edge, Point};

fn two_groups_and_outlier() -> Vec<Point> {
    vec![
        Point::new(0, 0, 0),
        Point::new(1, 0, 0),
        Point::new(0, 1, 0),
        Point::new(100, 100, 100),
        Point::new(101, 100, 100),
        Point::new(-500, 800, 0),
    ]
}

#[test]
fn distance_of_3_4_5_triangle() {
    let from = Point::new(0, 0, 0);
    let to = Point::new(3, 4, 0);

    assert_eq!(from.distance(&to), 5.0);
    assert_eq!(Edge::between(&[from, to], 0, 1).unwrap().distance(), 5.0);
    assert!(Edge::between(&[from, to], 0, 2).is_none());
}

#[test]
fn parse_point_text() {
    assert_eq!(Point::try_from("162,817,812").unwrap(), Point::new(162, 817, 812));
    assert_eq!(Point::try_from("-1, 2,-3").unwrap(), Point::new(-1, 2, -3));
    assert!(Point::try_from("1,2").is_err());
    assert!(Point::try_from("1,2,3,4").is_err());
    assert!(Point::try_from("1,b,3").is_err());
}

#[test]
fn edges_cover_all_pairs_in_distance_order() {
    let points = two_groups_and_outlier();
    let edges = day8::sorted_edges(&points);

    assert_eq!(edges.len(), points.len() * (points.len() - 1) / 2);
    assert!(edges
        .windows(2)
        .all(|pair| pair[0].distance() <= pair[1].distance()));
    assert!(edges.iter().all(|edge| edge.ends().0 < edge.ends().1));
}

#[test]
fn no_edge_for_less_than_two_points() {
    assert!(day8::sorted_edges(&[]).is_empty());
    assert!(day8::sorted_edges(&[Point::new(1, 2, 3)]).is_empty());
}

#[test]
fn duplicate_points_are_distinct_nodes() {
    let points = vec![Point::new(7, 7, 7), Point::new(7, 7, 7), Point::new(9, 9, 9)];
    let edges = day8::sorted_edges(&points);

    assert_eq!(edges[0].ends(), (0, 1));
    assert_eq!(edges[0].distance(), 0.0);

    let mut engine = ClusterEngine::new(points.len());
    engine.process(&edges, 1).unwrap();
    assert_eq!(engine.largest_sizes(3), vec![2]);
}

#[test]
fn equal_distances_keep_input_order() {
    let points = vec![Point::new(0, 0, 0), Point::new(1, 0, 0), Point::new(2, 0, 0)];
    let edges = day8::sorted_edges(&points);

    assert_eq!(edges[0].ends(), (0, 1));
    assert_eq!(edges[1].ends(), (1, 2));
    assert_eq!(edges[2].ends(), (0, 2));
}

#[test]
fn add_is_idempotent() {
    let mut engine = ClusterEngine::new(4);
    let id = engine.form(&[0, 1]).unwrap().unwrap();

    assert!(!engine.add(id, 1).unwrap());
    assert_eq!(engine.members(id).unwrap().len(), 2);
    assert_eq!(engine.cluster_n(), 1);
    engine.verify().unwrap();
}

#[test]
fn add_moves_node_out_of_other_cluster() {
    let mut engine = ClusterEngine::new(5);
    let left = engine.form(&[0, 1]).unwrap().unwrap();
    let right = engine.form(&[2, 3]).unwrap().unwrap();

    assert!(engine.add(right, 1).unwrap());
    assert_eq!(engine.cluster_of(1), Some(right));
    assert_eq!(engine.members(left).unwrap().len(), 1);
    assert_eq!(engine.members(right).unwrap().len(), 3);
    engine.verify().unwrap();

    // The last member leaving kills the cluster.
    assert!(engine.add(right, 0).unwrap());
    assert!(engine.members(left).is_none());
    assert_eq!(engine.cluster_n(), 1);
    engine.verify().unwrap();
}

#[test]
fn remove_clears_back_reference() {
    let mut engine = ClusterEngine::new(3);
    let id = engine.form(&[0, 1, 2]).unwrap().unwrap();

    assert!(engine.remove(id, 2).unwrap());
    assert_eq!(engine.cluster_of(2), None);
    assert!(!engine.remove(id, 2).unwrap());
    assert_eq!(engine.members(id).unwrap().len(), 2);
    engine.verify().unwrap();
}

#[test]
fn unknown_cluster_or_node_is_an_error() {
    let mut engine = ClusterEngine::new(2);
    let id = engine.form(&[0]).unwrap().unwrap();
    engine.remove(id, 0).unwrap();

    assert!(engine.add(id, 1).is_err());
    assert!(engine.remove(id, 1).is_err());
    assert!(engine.form(&[0, 5]).is_err());
    assert_eq!(engine.form(&[]).unwrap(), None);
    assert!(engine.connect(&Edge::new(0, 2, 1.0)).is_err());
}

#[test]
fn contains_checks_either_end() {
    let mut engine = ClusterEngine::new(4);
    let id = engine.form(&[0, 1]).unwrap().unwrap();

    assert!(engine.contains(id, &Edge::new(1, 3, 1.0)));
    assert!(engine.contains(id, &Edge::new(2, 0, 1.0)));
    assert!(!engine.contains(id, &Edge::new(2, 3, 1.0)));
}

#[test]
fn connecting_two_clusters_merges_them() {
    let mut engine = ClusterEngine::new(4);
    let first = match engine.connect(&Edge::new(0, 1, 1.0)).unwrap() {
        Connection::Created(id) => id,
        other => panic!("Expect a new cluster, given {:?}.", other),
    };
    let second = match engine.connect(&Edge::new(2, 3, 1.0)).unwrap() {
        Connection::Created(id) => id,
        other => panic!("Expect a new cluster, given {:?}.", other),
    };

    let connection = engine.connect(&Edge::new(1, 2, 2.0)).unwrap();
    let into = match connection {
        Connection::Merged { from, into } => {
            assert_eq!(from, [first, second]);
            into
        }
        other => panic!("Expect a merge, given {:?}.", other),
    };

    assert_eq!(engine.cluster_n(), 1);
    assert!(engine.members(first).is_none());
    assert!(engine.members(second).is_none());
    assert_eq!(
        engine.members(into).unwrap().iter().copied().collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
    assert!((0..4).all(|node| engine.cluster_of(node) == Some(into)));
    engine.verify().unwrap();
}

#[test]
fn internal_edge_changes_nothing() {
    let mut engine = ClusterEngine::new(3);
    engine.connect(&Edge::new(0, 1, 1.0)).unwrap();
    let id = match engine.connect(&Edge::new(1, 2, 1.0)).unwrap() {
        Connection::Joined(id) => id,
        other => panic!("Expect a joined node, given {:?}.", other),
    };

    assert_eq!(
        engine.connect(&Edge::new(0, 2, 2.0)).unwrap(),
        Connection::Internal(id)
    );
    assert_eq!(engine.cluster_n(), 1);
    assert_eq!(engine.largest_sizes(3), vec![3]);
}

#[test]
fn limit_bounds_the_connections() {
    let points = two_groups_and_outlier();
    let edges = day8::sorted_edges(&points);

    let mut engine = ClusterEngine::new(points.len());
    assert_eq!(engine.process(&edges, 0).unwrap(), 0);
    assert_eq!(engine.cluster_n(), 0);
    assert!(engine.largest_sizes(3).is_empty());
    assert_eq!(day8::size_product(&engine.largest_sizes(3)), 1);
}

#[test]
fn two_groups_stay_apart() {
    let points = two_groups_and_outlier();
    let edges = day8::sorted_edges(&points);

    // 3 edges inside the triangle and 1 inside the pair are the 4 shortest.
    let mut engine = ClusterEngine::new(points.len());
    assert_eq!(engine.process(&edges, 4).unwrap(), 4);
    let sizes = engine.largest_sizes(3);

    assert_eq!(sizes, vec![3, 2]);
    assert_eq!(day8::size_product(&sizes), 6);
    assert_eq!(engine.cluster_of(5), None);
    engine.verify().unwrap();
}

#[test]
fn connect_until_single_returns_completing_edge() {
    let points = two_groups_and_outlier();
    let edges = day8::sorted_edges(&points);

    let mut engine = ClusterEngine::new(points.len());
    let last_edge = engine.connect_until_single(&edges).unwrap().unwrap();

    assert!(engine.is_single());
    assert_eq!(engine.largest_sizes(1), vec![points.len()]);
    assert_eq!(last_edge.ends(), (3, 5));
    engine.verify().unwrap();
}

#[test]
fn single_point_needs_no_connection() {
    let mut engine = ClusterEngine::new(1);

    assert_eq!(engine.connect_until_single(&[]).unwrap(), None);
}

#[test]
fn self_loop_is_an_error() {
    let mut engine = ClusterEngine::new(3);

    assert!(engine.connect(&Edge::new(1, 1, 0.0)).is_err());
    assert_eq!(engine.cluster_n(), 0);
    assert_eq!(engine.cluster_of(1), None);

    engine.connect(&Edge::new(0, 1, 1.0)).unwrap();
    assert!(engine.connect(&Edge::new(1, 1, 0.0)).is_err());
    assert_eq!(engine.largest_sizes(3), vec![2]);
    engine.verify().unwrap();
}

#[test]
fn distance_of_far_apart_coordinates() {
    let from = Point::new(i64::MIN, 0, 0);
    let to = Point::new(i64::MAX, 0, 0);

    assert_eq!(from.distance(&to), 2f64.powi(64));
    assert_eq!(to.distance(&from), from.distance(&to));
}

#[test]
fn many_clusters_merge_pairwise() {
    let mut engine = ClusterEngine::new(8);
    for from in (0..8).step_by(2) {
        engine.connect(&Edge::new(from, from + 1, 1.0)).unwrap();
    }
    assert_eq!(engine.cluster_n(), 4);

    for (from, to) in [(1, 2), (5, 6), (3, 4)] {
        assert!(matches!(
            engine.connect(&Edge::new(from, to, 2.0)).unwrap(),
            Connection::Merged { .. }
        ));
        engine.verify().unwrap();
    }
    assert!(engine.is_single());
    assert_eq!(engine.largest_sizes(3), vec![8]);
}
