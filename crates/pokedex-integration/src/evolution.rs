//! Evolution chain walker
//!
//! Resolves every species node of a chain into an [`Item`] and flattens the
//! tree in pre-order: a node comes before its children, and sibling subtrees
//! keep their declaration order. Siblings are resolved concurrently but
//! collected by position, so completion order never leaks into the output.
//!
//! The walk is fail-fast: one failed fetch fails the whole chain. Callers that
//! can live with a missing chain catch the error themselves.

use futures::future::{try_join_all, BoxFuture, FutureExt};

use pokedex_core::Item;

use crate::error::IntegrationError;
use crate::resolver::ItemResolver;
use crate::types::ChainLink;

pub struct EvolutionWalker<'a> {
    resolver: &'a ItemResolver,
}

impl<'a> EvolutionWalker<'a> {
    pub fn new(resolver: &'a ItemResolver) -> Self {
        Self { resolver }
    }

    /// One item per node, pre-order. Not deduplicated.
    pub async fn walk(&self, root: &ChainLink) -> Result<Vec<Item>, IntegrationError> {
        self.walk_node(root).await
    }

    fn walk_node<'b>(&'b self, node: &'b ChainLink) -> BoxFuture<'b, Result<Vec<Item>, IntegrationError>> {
        async move {
            let own = self.resolver.resolve_summary(&node.species.name);
            let subtrees = async {
                match node.evolves_to.as_slice() {
                    [] => Ok(Vec::new()),
                    [only] => self.walk_node(only).await.map(|items| vec![items]),
                    children => try_join_all(children.iter().map(|child| self.walk_node(child))).await,
                }
            };

            let (item, subtrees) = futures::try_join!(own, subtrees)?;

            let mut items = Vec::with_capacity(1 + subtrees.iter().map(Vec::len).sum::<usize>());
            items.push(item);
            items.extend(subtrees.into_iter().flatten());
            Ok(items)
        }
        .boxed()
    }
}
