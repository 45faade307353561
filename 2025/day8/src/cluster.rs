use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Display,
};

use log::{debug, trace};

use crate::{Edge, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClusterId(usize);

impl Display for ClusterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happened to the clusters when an edge got connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    Created(ClusterId),
    Joined(ClusterId),
    Merged { from: [ClusterId; 2], into: ClusterId },
    Internal(ClusterId),
}

/// Groups nodes(indices of points) into clusters.
///
/// Every node refers back to the cluster holding it, and a node is held by one cluster at most.
/// Clusters losing their last member are dropped at once.
#[derive(Debug)]
pub struct ClusterEngine {
    owners: Vec<Option<ClusterId>>,
    clusters: BTreeMap<ClusterId, BTreeSet<usize>>,
    next_id: usize,
}

impl ClusterEngine {
    pub fn new(node_n: usize) -> Self {
        Self {
            owners: vec![None; node_n],
            clusters: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn node_n(&self) -> usize {
        self.owners.len()
    }

    pub fn cluster_n(&self) -> usize {
        self.clusters.len()
    }

    pub fn clusters(&self) -> impl Iterator<Item = (ClusterId, &BTreeSet<usize>)> {
        self.clusters.iter().map(|(id, members)| (*id, members))
    }

    pub fn members(&self, id: ClusterId) -> Option<&BTreeSet<usize>> {
        self.clusters.get(&id)
    }

    pub fn cluster_of(&self, node: usize) -> Option<ClusterId> {
        let owner = self.owners.get(node).copied().flatten()?;
        assert!(
            self.clusters
                .get(&owner)
                .is_some_and(|members| members.contains(&node)),
            "Node {} refers to cluster {}, which doesn't hold it.",
            node,
            owner
        );

        Some(owner)
    }

    /// Builds a new cluster from given nodes, taking them away from their current clusters.
    pub fn form(&mut self, nodes: &[usize]) -> Result<Option<ClusterId>, Error> {
        for node in nodes {
            self.check_node(*node)?;
        }
        if nodes.is_empty() {
            return Ok(None);
        }

        let id = self.alloc_id();
        self.clusters.insert(id, BTreeSet::new());
        for node in nodes {
            self.add(id, *node)?;
        }

        Ok(Some(id))
    }

    /// Returns false if the node is already in this cluster.
    pub fn add(&mut self, id: ClusterId, node: usize) -> Result<bool, Error> {
        self.check_node(node)?;
        if !self.clusters.contains_key(&id) {
            return Err(Error::UnknownCluster(id));
        }

        match self.cluster_of(node) {
            Some(owner) if owner == id => return Ok(false),
            Some(owner) => {
                self.remove(owner, node)?;
            }
            None => (),
        }

        let members = self
            .clusters
            .get_mut(&id)
            .ok_or(Error::UnknownCluster(id))?;
        members.insert(node);
        self.owners[node] = Some(id);
        trace!("Node {} is added to cluster {}.", node, id);

        Ok(true)
    }

    /// Returns false if the node isn't a member of this cluster.
    pub fn remove(&mut self, id: ClusterId, node: usize) -> Result<bool, Error> {
        self.check_node(node)?;
        let members = self
            .clusters
            .get_mut(&id)
            .ok_or(Error::UnknownCluster(id))?;
        if !members.remove(&node) {
            return Ok(false);
        }

        assert_eq!(
            self.owners[node],
            Some(id),
            "Cluster {} held node {}, but the node refers to another cluster.",
            id,
            node
        );
        self.owners[node] = None;
        if members.is_empty() {
            self.clusters.remove(&id);
            debug!("Cluster {} lost its last member and is dropped.", id);
        }

        Ok(true)
    }

    pub fn contains(&self, id: ClusterId, edge: &Edge) -> bool {
        let (from, to) = edge.ends();
        self.members(id)
            .is_some_and(|members| members.contains(&from) || members.contains(&to))
    }

    pub fn connect(&mut self, edge: &Edge) -> Result<Connection, Error> {
        let (from, to) = edge.ends();
        self.check_node(from)?;
        self.check_node(to)?;
        if from == to {
            return Err(Error::SelfLoop(from));
        }

        let from_owner = self.cluster_of(from);
        let to_owner = self.cluster_of(to);
        assert!(
            self.clusters().filter(|(id, _)| self.contains(*id, edge)).count() <= 2,
            "More than two clusters hold the ends of edge {:?}.",
            edge
        );

        let connection = match (from_owner, to_owner) {
            (None, None) => Connection::Created(self.new_cluster(BTreeSet::from([from, to]))),
            (Some(from_id), Some(to_id)) if from_id == to_id => Connection::Internal(from_id),
            (Some(from_id), Some(to_id)) => {
                let mut members = self.clusters.remove(&from_id).unwrap_or_default();
                members.append(&mut self.clusters.remove(&to_id).unwrap_or_default());
                let into = self.new_cluster(members);
                Connection::Merged {
                    from: [from_id, to_id],
                    into,
                }
            }
            (Some(id), None) => {
                self.add(id, to)?;
                Connection::Joined(id)
            }
            (None, Some(id)) => {
                self.add(id, from)?;
                Connection::Joined(id)
            }
        };
        trace!("Connecting edge {:?}: {:?}.", edge, connection);

        Ok(connection)
    }

    /// Connects at most `limit` edges in given order, returns how many are connected.
    pub fn process(&mut self, edges: &[Edge], limit: usize) -> Result<usize, Error> {
        let mut processed_n = 0;
        for edge in edges.iter().take(limit) {
            self.connect(edge)?;
            processed_n += 1;
        }
        debug!(
            "Connected {} edge(s), {} cluster(s) formed.",
            processed_n,
            self.cluster_n()
        );

        Ok(processed_n)
    }

    /// Connects edges in given order until one cluster holds every node, returns the edge completing it.
    pub fn connect_until_single(&mut self, edges: &[Edge]) -> Result<Option<Edge>, Error> {
        if self.is_single() {
            return Ok(None);
        }

        for edge in edges {
            if let Connection::Internal(_) = self.connect(edge)? {
                continue;
            }

            if self.is_single() {
                return Ok(Some(edge.clone()));
            }
        }

        Ok(None)
    }

    pub fn is_single(&self) -> bool {
        self.clusters.len() == 1
            && self
                .clusters
                .values()
                .all(|members| members.len() == self.node_n())
    }

    /// Sizes of the `n` largest clusters, largest first.
    pub fn largest_sizes(&self, n: usize) -> Vec<usize> {
        let mut sizes = self
            .clusters
            .values()
            .map(|members| members.len())
            .collect::<Vec<_>>();
        sizes.sort_unstable_by(|left, right| right.cmp(left));
        sizes.truncate(n);

        sizes
    }

    /// Checks both directions of the membership relation.
    pub fn verify(&self) -> Result<(), Error> {
        let mut holders = vec![None; self.node_n()];
        for (id, members) in &self.clusters {
            if members.is_empty() {
                return Err(Error::BrokenMembership(format!(
                    "cluster {} has no member but is still alive",
                    id
                )));
            }

            for node in members {
                let holder = holders.get_mut(*node).ok_or_else(|| {
                    Error::BrokenMembership(format!("cluster {} holds unknown node {}", id, node))
                })?;
                if let Some(other) = holder.replace(*id) {
                    return Err(Error::BrokenMembership(format!(
                        "node {} is held by both cluster {} and {}",
                        node, other, id
                    )));
                }
            }
        }

        for (node, (owner, holder)) in self.owners.iter().zip(holders.iter()).enumerate() {
            if owner != holder {
                return Err(Error::BrokenMembership(format!(
                    "node {} refers to cluster {:?}, but is held by {:?}",
                    node, owner, holder
                )));
            }
        }

        Ok(())
    }

    fn new_cluster(&mut self, members: BTreeSet<usize>) -> ClusterId {
        let id = self.alloc_id();
        for node in &members {
            self.owners[*node] = Some(id);
        }
        debug!(
            "Cluster {} is created with {} member(s).",
            id,
            members.len()
        );
        self.clusters.insert(id, members);

        id
    }

    fn alloc_id(&mut self) -> ClusterId {
        let id = ClusterId(self.next_id);
        self.next_id += 1;

        id
    }

    fn check_node(&self, node: usize) -> Result<(), Error> {
        if node < self.node_n() {
            Ok(())
        } else {
            Err(Error::UnknownNode(node))
        }
    }
}
