use log::trace;

use super::node::{DisplayName, DynamicContainer, DynamicNode, DynamicTest, NodeStream};
use crate::errors::CaseError;

/// Lo que devuelve una factory de tests: un nodo, una colección finita o
/// una secuencia perezosa (posiblemente no acotada).
pub enum NodeSource {
    Single(DynamicNode),
    Collection(Vec<DynamicNode>),
    Stream(NodeStream),
}

impl NodeSource {
    pub fn stream<I, N>(nodes: I) -> Self
        where I: IntoIterator<Item = N>,
              I::IntoIter: 'static,
              N: Into<DynamicNode> + 'static
    {
        NodeSource::Stream(Box::new(nodes.into_iter().map(|n| Ok(n.into()))))
    }
}

impl From<DynamicNode> for NodeSource {
    fn from(value: DynamicNode) -> Self {
        NodeSource::Single(value)
    }
}

impl From<DynamicTest> for NodeSource {
    fn from(value: DynamicTest) -> Self {
        NodeSource::Single(value.into())
    }
}

impl From<DynamicContainer> for NodeSource {
    fn from(value: DynamicContainer) -> Self {
        NodeSource::Single(value.into())
    }
}

impl From<Vec<DynamicNode>> for NodeSource {
    fn from(value: Vec<DynamicNode>) -> Self {
        NodeSource::Collection(value)
    }
}

impl From<NodeStream> for NodeSource {
    fn from(value: NodeStream) -> Self {
        NodeSource::Stream(value)
    }
}

/// Secuencia plana de raíces en orden de producción, sin reordenar ni
/// deduplicar.
pub fn build_tree(source: NodeSource) -> NodeStream {
    let nodes: NodeStream = match source {
        NodeSource::Single(node) => Box::new(std::iter::once(Ok(node))),
        NodeSource::Collection(nodes) => Box::new(nodes.into_iter().map(Ok)),
        NodeSource::Stream(nodes) => nodes,
    };
    Box::new(nodes.inspect(|node: &Result<DynamicNode, CaseError>| {
                      if let Ok(node) = node {
                          trace!("produced node '{}'", node.name());
                      }
                  }))
}

/// Raíz única con nombre cuyos hijos son `source`.
pub fn build_root(name: impl Into<DisplayName>, source: NodeSource) -> DynamicContainer {
    DynamicContainer::from_stream(name, build_tree(source))
}
