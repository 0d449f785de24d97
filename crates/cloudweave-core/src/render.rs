//! DocumentをKDLとして書き出す

use crate::model::{Block, Document, Fields};
use kdl::{KdlDocument, KdlEntry, KdlNode};

/// DocumentをKDL文字列に変換
///
/// 未設定の属性と空のブロックリストは出力されない。
pub fn render_document(doc: &Document) -> String {
    let mut kdl = fields_to_kdl(doc.fields());
    kdl.autoformat();
    kdl.to_string()
}

fn fields_to_kdl(fields: &Fields) -> KdlDocument {
    let mut doc = KdlDocument::new();

    for (name, block) in fields {
        match block {
            Block::Absent | Block::Singleton(None) => {}
            Block::Scalar(value) => {
                let mut node = KdlNode::new(name.as_str());
                node.entries_mut().push(KdlEntry::new(value.clone()));
                doc.nodes_mut().push(node);
            }
            Block::Singleton(Some(nested)) => doc.nodes_mut().push(block_node(name, nested)),
            Block::Repeated(items) => {
                for nested in items.iter().flatten() {
                    doc.nodes_mut().push(block_node(name, nested));
                }
            }
        }
    }

    doc
}

fn block_node(name: &str, nested: &Fields) -> KdlNode {
    let mut node = KdlNode::new(name);
    node.set_children(fields_to_kdl(nested));
    node
}
