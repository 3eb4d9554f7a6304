//! Clauses, definitions and imports

use super::{at, int, stmt, var};
use crate::frontend::core::ast::*;
use indexmap::IndexMap;

#[cfg(test)]
mod ast_clause_tests {
    use super::*;

    #[test]
    fn test_case_and_catch_have_no_role() {
        let case = CaseClause {
            conditions: OneOrMore::new(int(1)),
            body: vec![stmt(NodeKind::Break)],
            position: at(5),
        };
        let catch = CatchClause {
            name: Some("e".to_string()),
            exception_type: Some(TypeName::from("IOError")),
            body: vec![],
            position: at(9),
        };
        assert_eq!(case.capabilities(), Capabilities::NONE);
        assert_eq!(catch.capabilities(), Capabilities::NONE);
        assert_eq!(case.display_name(), "Case");
        assert_eq!(catch.display_name(), "Catch");
        assert_eq!(catch.line(), 9);
    }

    #[test]
    fn test_switch_holds_cases_and_default() {
        let switch = Switch {
            condition: var("x"),
            cases: vec![CaseClause {
                conditions: OneOrMore::from_vec(vec![int(1), int(2)]).unwrap(),
                body: vec![],
                position: at(2),
            }],
            default: Some(vec![stmt(NodeKind::Return(None))]),
        };
        assert_eq!(switch.cases[0].conditions.len(), 2);
        let node = stmt(NodeKind::Switch(switch));
        assert_eq!(node.display_name(), "Switch");
    }

    #[test]
    fn test_import_set_from_optional_list() {
        assert_eq!(ImportSet::from(None), ImportSet::Module);
        assert_eq!(ImportSet::from(Some(vec![])), ImportSet::Everything);
        assert_eq!(
            ImportSet::from(Some(vec![ImportItem::new("read")])),
            ImportSet::Named(vec![ImportItem::new("read")])
        );
    }

    #[test]
    fn test_import_bindings() {
        let module = Import {
            path: "std.io".to_string(),
            alias: None,
            items: ImportSet::Module,
        };
        assert_eq!(module.binding(), Some("io"));

        let aliased = Import {
            alias: Some("files".to_string()),
            ..module.clone()
        };
        assert_eq!(aliased.binding(), Some("files"));

        let named = Import {
            items: ImportSet::Named(vec![ImportItem::aliased("read", "r")]),
            ..module
        };
        assert_eq!(named.binding(), None);
        assert_eq!(ImportItem::aliased("read", "r").binding(), "r");
        assert_eq!(ImportItem::new("write").binding(), "write");
    }

    #[test]
    fn test_variable_definition() {
        let mut definition = VariableDefinition::simple("count", Some(int(0)));
        assert_eq!(definition.names.head(), "count");
        assert!(!definition.has_accessors());
        assert_eq!(definition.accessibility, Accessibility::Public);

        definition.getter = Some(vec![stmt(NodeKind::Return(Some(var("_count"))))]);
        assert!(definition.has_accessors());
    }

    #[test]
    fn test_function_required_arity() {
        let mut with_default = Parameter::named("b");
        with_default.default = Some(int(2));
        let mut rest = Parameter::named("rest");
        rest.variadic = true;

        let function = Function::new(vec![Parameter::named("a"), with_default, rest], vec![]);
        assert_eq!(function.required_arity(), 1);

        let definition = stmt(NodeKind::FunctionDefinition(FunctionDefinition {
            name: "f".to_string(),
            function: function.clone(),
        }));
        assert!(definition.kind.capabilities().statement);
        assert!(NodeKind::FunctionExpression(function).capabilities().expression);
    }

    #[test]
    fn test_enum_members_keep_order() {
        let mut members = IndexMap::new();
        members.insert("Red".to_string(), None);
        members.insert("Green".to_string(), Some(int(5)));
        members.insert("Blue".to_string(), None);
        let definition = EnumDefinition {
            name: "Color".to_string(),
            members,
            accessibility: Accessibility::Internal,
        };
        let names: Vec<&str> = definition.members.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Red", "Green", "Blue"]);
    }

    #[test]
    fn test_accessibility_keywords() {
        for access in [
            Accessibility::Public,
            Accessibility::Private,
            Accessibility::Protected,
            Accessibility::Internal,
        ] {
            assert_eq!(Accessibility::from_keyword(access.keyword()), Some(access));
        }
        assert_eq!(Accessibility::from_keyword("static"), None);
        assert_eq!(Accessibility::Protected.to_string(), "protected");
    }
}
