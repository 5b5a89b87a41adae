use crate::tournament::{
    error::TreeError, ids::NodeId, labels::NodeLabel, outcome_tree::OutcomeTree,
    probability::WinModel,
};

/// Borrowed root-to-leaf path handed to visitors during enumeration.
/// Backed by the enumerator's working buffers, so it only lives for one callback.
#[derive(Debug, Clone, Copy)]
pub struct PathView<'a> {
    pub labels: &'a [NodeLabel],
    pub probabilities: &'a [f64],
}

impl PathView<'_> {
    /// Number of nodes on the path, root included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Deep copy that outlives the traversal.
    pub fn to_path(&self) -> OutcomePath {
        OutcomePath {
            labels: self.labels.to_vec(),
            probabilities: self.probabilities.to_vec(),
        }
    }
}

/// One complete sequence of declared winners and the probability of each step.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomePath {
    pub labels: Vec<NodeLabel>,
    pub probabilities: Vec<f64>,
}

/// Walk every root-to-leaf path, handing each one to `visitor`.
///
/// Left subtrees are visited before right ones. Returns the number of paths emitted.
pub fn for_each_path<M, F>(
    tree: &OutcomeTree,
    model: &M,
    mut visitor: F,
) -> Result<usize, TreeError>
where
    M: WinModel + ?Sized,
    F: FnMut(PathView<'_>),
{
    try_for_each_path(tree, model, |path| {
        visitor(path);
        Ok::<(), TreeError>(())
    })
}

/// Fallible variant where the visitor may abort the traversal.
pub fn try_for_each_path<M, F, E>(
    tree: &OutcomeTree,
    model: &M,
    mut visitor: F,
) -> Result<usize, E>
where
    M: WinModel + ?Sized,
    F: FnMut(PathView<'_>) -> Result<(), E>,
    E: From<TreeError>,
{
    let mut stack: Vec<(NodeId, usize)> = vec![(tree.root_id(), 0)];
    let mut labels: Vec<NodeLabel> = Vec::new();
    let mut probabilities: Vec<f64> = Vec::new();
    let mut emitted = 0;

    while let Some((node_id, depth)) = stack.pop() {
        // Backtrack to this node's parent before extending the path
        labels.truncate(depth);
        probabilities.truncate(depth);

        let label = *tree.label(node_id)?;
        labels.push(label);
        probabilities.push(model.probability(&label));

        match tree.children(node_id) {
            (None, None) => {
                visitor(PathView {
                    labels: &labels,
                    probabilities: &probabilities,
                })?;
                emitted += 1;
            }
            (left, right) => {
                // Right goes on the stack first so the left subtree is explored first
                if let Some(right) = right {
                    stack.push((right, depth + 1));
                }
                if let Some(left) = left {
                    stack.push((left, depth + 1));
                }
            }
        }
    }

    Ok(emitted)
}

/// Materialize every path. Only meant for small trees.
pub fn collect_paths<M>(tree: &OutcomeTree, model: &M) -> Result<Vec<OutcomePath>, TreeError>
where
    M: WinModel + ?Sized,
{
    let mut paths = Vec::with_capacity(tree.leaf_count());
    for_each_path(tree, model, |path| paths.push(path.to_path()))?;
    Ok(paths)
}
