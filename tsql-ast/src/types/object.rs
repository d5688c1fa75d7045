use std::rc::Rc;

use super::ident::{Identifier, MultiPartIdentifier};

/// A 1-to-4-part dotted name identifying a server/database/schema/object.
///
/// The role fields below and `identifiers` reference the *same* `Rc`
/// allocations (the structural-sharing invariant); the JSON
/// projector (`tsql-json`) detects this by pointer identity and emits
/// `{"$ref": "Identifier"}` for an `Identifiers` array entry that is also
/// reachable through a role field.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[doc(hidden)]
pub struct SchemaObjectName {
    pub identifiers: MultiPartIdentifier,
    pub server_identifier: Option<Rc<Identifier>>,
    pub database_identifier: Option<Rc<Identifier>>,
    pub schema_identifier: Option<Rc<Identifier>>,
    pub base_identifier: Rc<Identifier>,
}

impl SchemaObjectName {
    /// Builds a schema object name from 1 to 4 ordered parts, assigning
    /// roles right-justified. `parts` must be
    /// non-empty and at most 4 elements; callers (the parser) are
    /// responsible for rejecting longer dotted chains before calling this.
    pub fn new(parts: Vec<Identifier>) -> Self {
        assert!(!parts.is_empty(), "a schema object name needs at least one part");
        assert!(parts.len() <= 4, "a schema object name has at most 4 parts");

        let parts: Vec<Rc<Identifier>> = parts.into_iter().map(Rc::new).collect();
        let base_identifier = parts.last().expect("non-empty").clone();

        let mut server_identifier = None;
        let mut database_identifier = None;
        let mut schema_identifier = None;

        match parts.len() {
            1 => {}
            2 => {
                schema_identifier = Some(parts[0].clone());
            }
            3 => {
                database_identifier = Some(parts[0].clone());
                schema_identifier = Some(parts[1].clone());
            }
            4 => {
                server_identifier = Some(parts[0].clone());
                database_identifier = Some(parts[1].clone());
                schema_identifier = Some(parts[2].clone());
            }
            _ => unreachable!("checked above"),
        }

        Self {
            identifiers: MultiPartIdentifier::new(parts),
            server_identifier,
            database_identifier,
            schema_identifier,
            base_identifier,
        }
    }

    /// Convenience constructor for a single unqualified name.
    pub fn unqualified(base: Identifier) -> Self {
        Self::new(vec![base])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ident::QuoteType;

    fn id(s: &str) -> Identifier {
        Identifier::new(s, QuoteType::NotQuoted)
    }

    #[test]
    fn four_part_name_assigns_every_role() {
        let name = SchemaObjectName::new(vec![id("srv"), id("db"), id("sch"), id("base")]);
        assert_eq!(name.identifiers.count(), 4);
        assert_eq!(name.server_identifier.as_deref(), Some(&id("srv")));
        assert_eq!(name.database_identifier.as_deref(), Some(&id("db")));
        assert_eq!(name.schema_identifier.as_deref(), Some(&id("sch")));
        assert_eq!(&*name.base_identifier, &id("base"));
    }

    #[test]
    fn elided_middle_part_is_empty_but_present() {
        // a..b
        let name = SchemaObjectName::new(vec![id("a"), Identifier::empty(), id("b")]);
        assert_eq!(name.identifiers.count(), 3);
        assert_eq!(name.database_identifier.as_deref(), Some(&id("a")));
        assert_eq!(name.schema_identifier, Some(Rc::new(Identifier::empty())));
        assert_eq!(&*name.base_identifier, &id("b"));
    }

    #[test]
    fn role_fields_share_identity_with_identifier_list() {
        let name = SchemaObjectName::new(vec![id("dbo"), id("t")]);
        assert!(Rc::ptr_eq(
            &name.identifiers.identifiers[0],
            name.schema_identifier.as_ref().unwrap()
        ));
        assert!(Rc::ptr_eq(&name.identifiers.identifiers[1], &name.base_identifier));
    }
}
