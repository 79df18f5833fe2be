use crate::app::tree::{AssetGroup, AssetNode};

pub const HEADER: &str = "// This file is auto-generated by assetgen. Do not edit manually.\n";

const INDENT: &str = "  ";

pub struct CodeEmitter;

impl CodeEmitter {
    /// Renders the tree as `export const` / `export namespace` declarations.
    /// Values are quoted with `'` and not escaped.
    pub fn render(tree: &AssetGroup) -> String {
        let mut output = String::from(HEADER);
        if tree.is_empty() {
            return output;
        }

        output.push('\n');
        Self::render_group(tree, 0, &mut output);
        output
    }

    fn render_group(group: &AssetGroup, depth: usize, output: &mut String) {
        let indent = INDENT.repeat(depth);

        for (id, node) in group.iter() {
            match node {
                AssetNode::Leaf(value) => {
                    output.push_str(&format!("{}export const {} = '{}';\n", indent, id, value));
                }
                AssetNode::Group(children) => {
                    output.push_str(&format!("{}export namespace {} {{\n", indent, id));
                    Self::render_group(children, depth + 1, output);
                    output.push_str(&format!("{}}}\n", indent));
                }
            }
        }
    }
}
