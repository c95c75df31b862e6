use crate::shared::RoundtripError;
use roxmltree::{Document, Node};
use std::collections::HashMap;

/// Owned parse of a generated `updateinfo.xml` document.
///
/// Only the parts the checks consume are kept: the root tag, and for each
/// `<update>` node its identifier, optional description text and the number
/// of `reboot_suggested` children. Parsing is strict about cardinality: an
/// update with zero or several `<id>` elements is a structural defect and
/// fails the parse with a message naming the offending element.
#[derive(Debug, Clone)]
pub struct UpdateinfoTree {
    root_tag: String,
    updates: Vec<UpdateNode>,
}

#[derive(Debug, Clone)]
pub struct UpdateNode {
    pub id: String,
    pub description: Option<String>,
    pub reboot_suggested_count: usize,
}

/// Finds the single child element with the given local name.
///
/// Errors when zero or more than one match, mirroring the cardinality the
/// updateinfo schema promises for `id` and `description`.
fn single_child<'a>(node: Node<'a, 'a>, name: &str) -> Result<Node<'a, 'a>, RoundtripError> {
    let mut matches = node
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == name);
    let first = matches.next().ok_or_else(|| RoundtripError::Metadata {
        details: format!("expected one <{name}> element, found none"),
    })?;
    if matches.next().is_some() {
        return Err(RoundtripError::Metadata {
            details: format!("expected one <{name}> element, found several"),
        });
    }
    Ok(first)
}

fn count_children(node: Node, name: &str) -> usize {
    node.children()
        .filter(|n| n.is_element() && n.tag_name().name() == name)
        .count()
}

impl UpdateinfoTree {
    pub fn parse(xml: &str) -> Result<Self, RoundtripError> {
        let document = Document::parse(xml).map_err(|e| RoundtripError::Metadata {
            details: format!("updateinfo.xml: {e}"),
        })?;

        let root = document.root_element();
        let root_tag = root.tag_name().name().to_string();

        let mut updates = Vec::new();
        for update in root
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "update")
        {
            let id = single_child(update, "id")?
                .text()
                .unwrap_or_default()
                .to_string();
            let description = update
                .children()
                .find(|n| n.is_element() && n.tag_name().name() == "description")
                .map(|n| n.text().unwrap_or_default().to_string());
            updates.push(UpdateNode {
                id,
                description,
                reboot_suggested_count: count_children(update, "reboot_suggested"),
            });
        }

        Ok(Self { root_tag, updates })
    }

    /// Tag of the document's root element. Expected to be `updates`.
    pub fn root_tag(&self) -> &str {
        &self.root_tag
    }

    pub fn updates(&self) -> &[UpdateNode] {
        &self.updates
    }

    /// Index of update nodes keyed by identifier.
    ///
    /// Identifiers across update nodes must be unique within a single tree;
    /// a duplicate is a structural defect and fails immediately, naming the
    /// offending identifier.
    pub fn nodes_by_id(&self) -> Result<HashMap<&str, &UpdateNode>, RoundtripError> {
        let mut out = HashMap::new();
        for update in &self.updates {
            if out.insert(update.id.as_str(), update).is_some() {
                return Err(RoundtripError::DuplicateUpdateId {
                    id: update.id.clone(),
                });
            }
        }
        Ok(out)
    }
}
