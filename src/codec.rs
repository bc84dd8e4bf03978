use std::collections::VecDeque;

use log::{debug, trace};

use crate::constants::DELIMITER;
use crate::errors::{CodecError, Result};
use crate::structures::tree::node::TreeNode;
use crate::structures::tree::serialization::{Token, Tokenizer};

/// Converts binary trees to and from breadth-first comma-separated text.
///
/// `1,2,3,#,#,4,5,#,#,#,#,` is the tree with root `1`, a leaf `2` on the
/// left and `3` on the right, where `3` has the leaves `4` and `5`. Every
/// token is followed by `,`; `deserialize` also accepts text without the
/// final delimiter.
#[derive(Debug, Default, Clone, Copy)]
pub struct Codec;

impl Codec {
    pub fn new() -> Self {
        Codec
    }

    pub fn serialize(&self, root: Option<&TreeNode>) -> String {
        let Some(root) = root else {
            return String::new();
        };

        let mut out = String::new();
        let mut queue: VecDeque<Option<&TreeNode>> = VecDeque::new();
        queue.push_back(Some(root));

        let mut present = 0usize;
        let mut absent = 0usize;

        while let Some(slot) = queue.pop_front() {
            if let Some(node) = slot {
                queue.push_back(node.left.as_deref());
                queue.push_back(node.right.as_deref());
            }

            let token = Token::from(slot.map(|node| node.val));
            if token.is_absent() {
                absent += 1;
            } else {
                present += 1;
            }
            out.push_str(&token.to_string());
            out.push(DELIMITER);
        }

        debug!(
            "Serialized {} nodes and {} absent slots into {} bytes",
            present,
            absent,
            out.len()
        );
        out
    }

    pub fn deserialize(&self, text: &str) -> Result<Option<Box<TreeNode>>> {
        self.build(text).map_err(|err| {
            debug!("Rejected tree text: {}", err);
            err
        })
    }

    fn build(&self, text: &str) -> Result<Option<Box<TreeNode>>> {
        let mut tokens = Tokenizer::new(text);

        let mut root = match tokens.next().transpose()? {
            None => return Ok(None),
            Some(Token::Absent) => return Err(CodecError::AbsentRoot),
            Some(Token::Value(val)) => Box::new(TreeNode::new(val)),
        };

        let mut nodes = 1usize;
        let mut queue: VecDeque<&mut TreeNode> = VecDeque::new();
        queue.push_back(&mut *root);

        while let Some(node) = queue.pop_front() {
            let TreeNode { left, right, .. } = node;
            for slot in [left, right] {
                let position = tokens.position();
                let token = tokens
                    .next()
                    .ok_or(CodecError::UnexpectedEnd { position })??;
                trace!("Token {}: {}", position, token);

                if let Token::Value(val) = token {
                    let child = slot.insert(Box::new(TreeNode::new(val)));
                    queue.push_back(&mut **child);
                    nodes += 1;
                }
            }
        }

        let leftover = tokens.remaining();
        if leftover > 0 {
            return Err(CodecError::TrailingTokens {
                position: tokens.position(),
                count: leftover,
            });
        }

        debug!("Deserialized {} nodes from {} tokens", nodes, 2 * nodes + 1);
        Ok(Some(root))
    }
}

pub fn serialize(root: Option<&TreeNode>) -> String {
    Codec::new().serialize(root)
}

pub fn deserialize(text: &str) -> Result<Option<Box<TreeNode>>> {
    Codec::new().deserialize(text)
}
