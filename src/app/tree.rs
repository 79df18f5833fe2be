/// A node in the generated asset tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetNode {
    Leaf(String),
    Group(AssetGroup),
}

/// Identifier-keyed children, kept in first-insertion order.
///
/// Writing to an identifier that already exists replaces the node in place
/// regardless of its kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetGroup {
    entries: Vec<(String, AssetNode)>,
}

impl AssetGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a leaf under the chain of groups named by `dirs`, creating
    /// groups as needed and turning any leaf in the way into an empty group.
    pub fn insert(&mut self, dirs: &[String], id: String, value: String) {
        match dirs.split_first() {
            None => self.set(id, AssetNode::Leaf(value)),
            Some((dir, rest)) => {
                let idx = self.ensure_group(dir);
                if let AssetNode::Group(child) = &mut self.entries[idx].1 {
                    child.insert(rest, id, value);
                }
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&AssetNode> {
        self.position(id).map(|idx| &self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetNode)> {
        self.entries.iter().map(|(id, node)| (id.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn set(&mut self, id: String, node: AssetNode) {
        match self.position(&id) {
            Some(idx) => self.entries[idx].1 = node,
            None => self.entries.push((id, node)),
        }
    }

    fn ensure_group(&mut self, id: &str) -> usize {
        match self.position(id) {
            Some(idx) => {
                if let AssetNode::Leaf(_) = self.entries[idx].1 {
                    self.entries[idx].1 = AssetNode::Group(AssetGroup::new());
                }
                idx
            }
            None => {
                self.entries
                    .push((id.to_string(), AssetNode::Group(AssetGroup::new())));
                self.entries.len() - 1
            }
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == id)
    }
}
