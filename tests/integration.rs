//! Integration tests for layer-method-catalog
//!
//! These tests exercise the catalog, the resolver and method assembly
//! through the public API.

use layer_method_catalog::resolver::{
    resolve_body, resolve_name, resolve_operation, resolve_symbol, UNIMPLEMENTED_BODY,
};
use layer_method_catalog::{
    generate, GeneratorError, MethodNameOptions, ServiceLayerMethod, SymbolName, TypeRef,
};
use std::collections::{HashMap, HashSet};

const PLURAL: &str = "People";

fn target_entity() -> TypeRef {
    TypeRef::class("com.example.Person")
}

fn entities() -> Vec<TypeRef> {
    vec![
        target_entity(),
        TypeRef::class("Order"),
        TypeRef::class("org.acme.billing.Class"),
    ]
}

#[test]
fn test_value_of_using_wrong_name() {
    assert_eq!(resolve_operation("x", &[], &target_entity()), None);
    assert_eq!(
        ServiceLayerMethod::value_of("nonexistent-key", &[], &target_entity()),
        None
    );
}

#[test]
fn test_value_of_using_wrong_parameter_types() {
    let byte = TypeRef::class("java.lang.Byte");
    assert_eq!(
        resolve_operation(ServiceLayerMethod::FindAll.key(), &[byte], &target_entity()),
        None
    );
}

#[test]
fn test_value_of_using_correct_details() {
    for entity in entities() {
        for method in ServiceLayerMethod::values() {
            assert_eq!(
                resolve_operation(method.key(), &method.parameter_types(&entity), &entity),
                Some(*method)
            );
        }
    }
}

#[test]
fn test_each_method_has_same_number_of_parameter_types_and_names() {
    for entity in entities() {
        for method in ServiceLayerMethod::values() {
            let names = method.parameter_names(&entity);
            let types = method.parameter_types(&entity);
            let parameters = method.parameters(&entity);
            assert_eq!(types.len(), names.len());
            assert_eq!(parameters.types(), types);
            assert_eq!(parameters.names(), names);
        }
    }
}

#[test]
fn test_each_method_has_unique_parameter_names() {
    for entity in entities() {
        for method in ServiceLayerMethod::values() {
            let names = method.parameter_names(&entity);
            let distinct: HashSet<&SymbolName> = names.iter().collect();
            assert_eq!(names.len(), distinct.len());
        }
    }
}

#[test]
fn test_reserved_entity_name_is_escaped() {
    let entity = TypeRef::class("org.acme.billing.Class");
    assert_eq!(
        ServiceLayerMethod::Save.parameter_names(&entity),
        vec![SymbolName::new("_class")]
    );
}

#[test]
fn test_return_type_matches_voidness() {
    for method in ServiceLayerMethod::values() {
        let return_type = method.return_type(&target_entity());
        assert_eq!(method.is_void(), return_type == TypeRef::Void);
    }
}

#[test]
fn test_body_when_lower_layer_implements_method() {
    for method in ServiceLayerMethod::values() {
        if method.is_void() {
            assert_eq!(resolve_body(*method, Some("foo()")), "foo();");
        } else {
            assert_eq!(resolve_body(*method, Some("foo()")), "return foo();");
        }
    }
}

#[test]
fn test_body_when_lower_layer_does_not_implement_method() {
    for method in ServiceLayerMethod::values() {
        assert_eq!(
            resolve_body(*method, None),
            "throw new UnsupportedOperationException(\"Implement me!\");"
        );
    }
}

#[test]
fn test_name_when_options_are_blank() {
    let options = MethodNameOptions::default();
    for entity in entities() {
        for method in ServiceLayerMethod::values() {
            assert_eq!(resolve_name(*method, &options, &entity, "x"), None);
            assert_eq!(resolve_symbol(*method, &options, &entity, "x"), None);
        }
    }
}

#[test]
fn test_name_of_find_all_method() {
    let options = MethodNameOptions {
        find_all_method: "getAll".to_string(),
        ..Default::default()
    };
    let entity = target_entity();
    assert_eq!(
        resolve_name(ServiceLayerMethod::FindAll, &options, &entity, PLURAL).as_deref(),
        Some("getAllPeople")
    );
    assert_eq!(
        resolve_symbol(ServiceLayerMethod::FindAll, &options, &entity, PLURAL),
        Some(SymbolName::new("getAllPeople"))
    );
}

#[test]
fn test_name_of_find_entries_method() {
    let options = MethodNameOptions {
        find_entries_method: "get".to_string(),
        ..Default::default()
    };
    assert_eq!(
        resolve_name(ServiceLayerMethod::FindEntries, &options, &target_entity(), PLURAL)
            .as_deref(),
        Some("getPersonEntries")
    );
}

#[test]
fn test_name_of_save_and_update_methods() {
    let options = MethodNameOptions::from_aggregate("save_method: \"store\", update_method: \"change\"")
        .unwrap();
    assert_eq!(
        resolve_name(ServiceLayerMethod::Save, &options, &target_entity(), PLURAL).as_deref(),
        Some("storePerson")
    );
    assert_eq!(
        resolve_name(ServiceLayerMethod::Update, &options, &target_entity(), PLURAL).as_deref(),
        Some("changePerson")
    );
}

#[test]
fn test_generate_full_service() {
    let entity = TypeRef::parse("com.example.Person").unwrap();
    let options = MethodNameOptions::from_aggregate(
        "count_all_method: \"count\", delete_method: \"delete\", find_all_method: \"findAll\", \
         find_entries_method: \"find\", save_method: \"save\", update_method: \"update\"",
    )
    .unwrap();

    let mut lower_layer = HashMap::new();
    lower_layer.insert(ServiceLayerMethod::CountAll, "Person.countPeople()".to_string());
    lower_layer.insert(ServiceLayerMethod::Save, "person.persist()".to_string());

    let methods = generate(&entity, PLURAL, &options, &lower_layer);
    assert_eq!(methods.len(), ServiceLayerMethod::ALL.len());

    let by_name: HashMap<&str, _> = methods.iter().map(|m| (m.name.as_str(), m)).collect();

    let count = by_name["countPeople"];
    assert_eq!(count.return_type, TypeRef::Long);
    assert_eq!(count.body, "return Person.countPeople();");

    let save = by_name["savePerson"];
    assert!(save.parameters.iter().eq([(entity.clone(), SymbolName::new("person"))].iter()));
    assert_eq!(save.body, "person.persist();");

    let delete = by_name["deletePerson"];
    assert_eq!(delete.body, UNIMPLEMENTED_BODY);
    assert!(!delete.is_delegating());

    let find_all = by_name["findAllPeople"];
    assert_eq!(find_all.return_type.to_string(), "java.util.List<com.example.Person>");
    assert!(find_all.parameters.is_empty());
}

#[test]
fn test_generate_with_partial_options() {
    let entity = target_entity();
    let mut names = HashMap::new();
    names.insert(ServiceLayerMethod::FindAll, "list".to_string());
    names.insert(ServiceLayerMethod::Update, String::new());

    let methods = generate(&entity, PLURAL, &names, &());
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].method, ServiceLayerMethod::FindAll);
    assert_eq!(methods[0].name.as_str(), "listPeople");
    assert_eq!(methods[0].body, UNIMPLEMENTED_BODY);
}

#[test]
fn test_invalid_options_are_reported() {
    let err = MethodNameOptions::from_aggregate("find_one_method: \"get\"").unwrap_err();
    assert_eq!(
        err,
        GeneratorError::OptionsParseError("unknown option 'find_one_method'".to_string())
    );
}

#[test]
fn test_invalid_entity_name_is_reported() {
    assert!(matches!(
        TypeRef::parse("com.example."),
        Err(GeneratorError::InvalidTypeName(_))
    ));
}
