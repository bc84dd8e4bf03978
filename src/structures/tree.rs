pub mod node;
pub mod serialization;

use std::collections::VecDeque;

use node::TreeNode;

/// Builds a tree from level-order notation, e.g. `[1, 2, 3, null, null, 4, 5]`.
///
/// Only present nodes reserve child positions. Missing trailing entries are
/// treated as absent, and entries with no open position left are ignored.
pub fn from_level_order(values: &[Option<i32>]) -> Option<Box<TreeNode>> {
    let mut entries = values.iter().copied();
    let mut root = Box::new(TreeNode::new(entries.next().flatten()?));

    let mut queue: VecDeque<&mut TreeNode> = VecDeque::new();
    queue.push_back(&mut *root);

    'fill: while let Some(node) = queue.pop_front() {
        let TreeNode { left, right, .. } = node;
        for slot in [left, right] {
            let Some(entry) = entries.next() else {
                break 'fill;
            };
            if let Some(val) = entry {
                let child = slot.insert(Box::new(TreeNode::new(val)));
                queue.push_back(&mut **child);
            }
        }
    }

    Some(root)
}

pub fn to_level_order(root: Option<&TreeNode>) -> Vec<Option<i32>> {
    let mut values = Vec::new();
    let mut queue: VecDeque<Option<&TreeNode>> = VecDeque::new();
    queue.push_back(root);

    while let Some(slot) = queue.pop_front() {
        match slot {
            Some(node) => {
                values.push(Some(node.val));
                queue.push_back(node.left.as_deref());
                queue.push_back(node.right.as_deref());
            }
            None => values.push(None),
        }
    }

    while values.last() == Some(&None) {
        values.pop();
    }
    values
}

pub fn node_count(root: Option<&TreeNode>) -> usize {
    let mut count = 0;
    let mut stack: Vec<&TreeNode> = root.into_iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    count
}

pub fn depth(root: Option<&TreeNode>) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(&TreeNode, usize)> = root.map(|node| (node, 1)).into_iter().collect();
    while let Some((node, level)) = stack.pop() {
        deepest = deepest.max(level);
        if let Some(left) = node.left.as_deref() {
            stack.push((left, level + 1));
        }
        if let Some(right) = node.right.as_deref() {
            stack.push((right, level + 1));
        }
    }
    deepest
}

// Each value becomes the left child of the previous one.
pub fn left_chain<I>(values: I) -> Option<Box<TreeNode>>
where
    I: IntoIterator<Item = i32>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut chain: Option<Box<TreeNode>> = None;
    for val in values.into_iter().rev() {
        chain = Some(Box::new(TreeNode::with_children(val, chain, None)));
    }
    chain
}
